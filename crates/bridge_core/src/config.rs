use std::time::Duration;

use thiserror::Error;

/// Attribute carrying the source file that produced an element's markup.
pub const DEFAULT_SOURCE_FILE_ATTRIBUTE: &str = "data-vibehammer-file";
/// Attribute carrying the source line paired with [`DEFAULT_SOURCE_FILE_ATTRIBUTE`].
pub const DEFAULT_SOURCE_LINE_ATTRIBUTE: &str = "data-vibehammer-line";
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(150);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("debounce delay must be greater than zero")]
    ZeroDebounce,
    #[error("{field} must be greater than zero")]
    ZeroLimit { field: &'static str },
    #[error("{field} must not be empty")]
    EmptyAttribute { field: &'static str },
}

/// Tunables for the selection reporter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReporterConfig {
    /// Quiet period after the last trigger before a capture runs.
    pub debounce: Duration,
    /// Upper bound, in characters, of the container markup snapshot.
    pub max_markup_chars: usize,
    /// Upper bound, in characters, of the container text snapshot.
    pub max_text_chars: usize,
    pub source_file_attribute: String,
    pub source_line_attribute: String,
}

impl Default for ReporterConfig {
    fn default() -> Self {
        Self {
            debounce: DEFAULT_DEBOUNCE,
            max_markup_chars: 500,
            max_text_chars: 200,
            source_file_attribute: DEFAULT_SOURCE_FILE_ATTRIBUTE.to_string(),
            source_line_attribute: DEFAULT_SOURCE_LINE_ATTRIBUTE.to_string(),
        }
    }
}

impl ReporterConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.debounce.is_zero() {
            return Err(ConfigError::ZeroDebounce);
        }
        if self.max_markup_chars == 0 {
            return Err(ConfigError::ZeroLimit {
                field: "max_markup_chars",
            });
        }
        if self.max_text_chars == 0 {
            return Err(ConfigError::ZeroLimit {
                field: "max_text_chars",
            });
        }
        if self.source_file_attribute.trim().is_empty() {
            return Err(ConfigError::EmptyAttribute {
                field: "source_file_attribute",
            });
        }
        if self.source_line_attribute.trim().is_empty() {
            return Err(ConfigError::EmptyAttribute {
                field: "source_line_attribute",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, ReporterConfig};
    use std::time::Duration;

    #[test]
    fn default_config_is_valid() {
        let config = ReporterConfig::default();
        assert_eq!(config.debounce, Duration::from_millis(150));
        assert_eq!(config.max_markup_chars, 500);
        assert_eq!(config.max_text_chars, 200);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn zero_values_are_rejected() {
        let config = ReporterConfig {
            debounce: Duration::ZERO,
            ..ReporterConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroDebounce));

        let config = ReporterConfig {
            max_text_chars: 0,
            ..ReporterConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::ZeroLimit {
                field: "max_text_chars"
            })
        );

        let config = ReporterConfig {
            source_line_attribute: "  ".to_string(),
            ..ReporterConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::EmptyAttribute {
                field: "source_line_attribute"
            })
        );
    }
}
