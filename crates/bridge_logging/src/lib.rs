#![deny(missing_docs)]
//! Shared logging utilities for the selection bridge workspace.
//!
//! This crate provides the `bridge_*` logging macros used across the codebase
//! and a minimal test initializer for the global logger. The frame script
//! installs its own console-backed logger; everything else only talks to the
//! `log` facade through these macros.

/// Re-export so the macros resolve `log` from the caller's crate graph.
#[doc(hidden)]
pub use log as __log;

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! bridge_trace {
    ($($arg:tt)*) => {{
        $crate::__log::trace!($($arg)*);
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! bridge_debug {
    ($($arg:tt)*) => {{
        $crate::__log::debug!($($arg)*);
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! bridge_info {
    ($($arg:tt)*) => {{
        $crate::__log::info!($($arg)*);
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! bridge_warn {
    ($($arg:tt)*) => {{
        $crate::__log::warn!($($arg)*);
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! bridge_error {
    ($($arg:tt)*) => {{
        $crate::__log::error!($($arg)*);
    }};
}

/// Initializes a simple terminal logger for use in unit tests.
///
/// This safely no-ops if another logger has already been initialized.
#[cfg(not(target_arch = "wasm32"))]
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    // Trace in debug builds so debounce scheduling shows up, info in release.
    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Trace
    } else {
        log::LevelFilter::Info
    };

    // Ignore the error if a logger was already set by another test.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}
