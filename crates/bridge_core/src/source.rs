use crate::{ElementLike, ReporterConfig};

/// Source file and line recovered from an annotated ancestor.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SourceLocation {
    pub file: Option<String>,
    pub line: Option<i64>,
}

/// Finds the innermost ancestor (starting at `container`) carrying the
/// source-file attribute. The walk stops at the document body, which is not
/// inspected itself.
pub fn find_source_location<E: ElementLike>(
    container: Option<&E>,
    config: &ReporterConfig,
) -> SourceLocation {
    let mut current = container.cloned();
    while let Some(element) = current {
        if element.is_document_body() {
            break;
        }
        if let Some(file) = element.attribute(&config.source_file_attribute) {
            let line = element
                .attribute(&config.source_line_attribute)
                .as_deref()
                .and_then(parse_line_number);
            return SourceLocation {
                file: Some(file),
                line,
            };
        }
        current = element.parent_element();
    }
    SourceLocation::default()
}

/// Parses a line number the way browsers' `parseInt(value, 10)` does:
/// leading whitespace, an optional sign, then at least one decimal digit.
/// Trailing garbage is ignored.
pub fn parse_line_number(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if digits_end == 0 {
        return None;
    }
    let value: i64 = rest[..digits_end].parse().ok()?;
    Some(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::parse_line_number;

    #[test]
    fn plain_and_prefixed_numbers_parse() {
        assert_eq!(parse_line_number("42"), Some(42));
        assert_eq!(parse_line_number("  7px"), Some(7));
        assert_eq!(parse_line_number("+3"), Some(3));
        assert_eq!(parse_line_number("-12"), Some(-12));
    }

    #[test]
    fn non_numeric_yields_none() {
        assert_eq!(parse_line_number(""), None);
        assert_eq!(parse_line_number("abc"), None);
        assert_eq!(parse_line_number("-"), None);
        assert_eq!(parse_line_number("x42"), None);
    }

    #[test]
    fn overflowing_digits_yield_none() {
        assert_eq!(parse_line_number("99999999999999999999999"), None);
    }
}
