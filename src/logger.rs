use colored::Colorize;
// Imports the `Colorize` trait so the level prefixes can be styled with ANSI colors.
use std::sync::atomic::{AtomicBool, Ordering};
// An atomic flag backs the debug gate; no locking is needed for a single boolean.

/// Whether `log_debug!` output is enabled. Set once at startup by [`init`].
static DEBUG_ENABLED: AtomicBool = AtomicBool::new(false);

/// Initializes the logger.
///
/// # Arguments
/// * `debug` - When `true`, `log_debug!` messages are emitted; otherwise they
///   are suppressed. Info/warn/error messages are always emitted.
pub fn init(debug: bool) {
    DEBUG_ENABLED.store(debug, Ordering::Relaxed);
}

/// Returns `true` if the `--debug` gate was enabled at startup.
pub fn is_debug_enabled() -> bool {
    DEBUG_ENABLED.load(Ordering::Relaxed)
}

/// Prints a debug-level line. Called through `log_debug!`; does nothing unless
/// [`init`] was given `debug = true`.
pub fn debug(message: &str) {
    if is_debug_enabled() {
        eprintln!("{} {}", "[DEBUG]".dimmed(), message);
    }
}

/// Prints an info-level line. Called through `log_info!`.
pub fn info(message: &str) {
    eprintln!("{} {}", "[INFO]".bright_cyan(), message);
}

/// Prints a warn-level line. Called through `log_warn!`.
pub fn warn(message: &str) {
    eprintln!("{} {}", "[WARN]".bright_yellow(), message);
}

/// Prints an error-level line. Called through `log_error!`.
pub fn error(message: &str) {
    eprintln!("{} {}", "[ERROR]".bright_red().bold(), message);
}

// All diagnostics go to stderr so the report on stdout stays clean; the report
// itself is printed by the reporter, never through these macros.

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        $crate::logger::debug(&format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        $crate::logger::info(&format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        $crate::logger::warn(&format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        $crate::logger::error(&format!($($arg)*))
    };
}
