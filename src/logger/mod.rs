//! Structured console logging for mirrorscope
//!
//! ## Usage
//!
//! ```rust,no_run
//! use mirrorscope::logger::{self, LogTag};
//!
//! logger::error(LogTag::Api, "Upstream unreachable");
//! logger::info(LogTag::Webserver, "Listening on 127.0.0.1:5000");
//! logger::debug(LogTag::Api, "Request URL: ..."); // Only with --debug-api
//! logger::verbose(LogTag::View, "Raw payload: ..."); // Only with --verbose
//! ```
//!
//! Call [`init`] once at startup with the configuration derived from the
//! command line. Until then the defaults apply (info level, colors on).

mod config;
mod core;
mod format;
mod levels;
mod tags;

pub use config::{get_logger_config, set_logger_config, LoggerConfig};
pub use format::format_line;
pub use levels::LogLevel;
pub use tags::LogTag;

/// Install the logger configuration
pub fn init(config: LoggerConfig) {
    if !config.colors {
        colored::control::set_override(false);
    }
    config::set_logger_config(config);
}

/// Log at ERROR level (always shown)
pub fn error(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Error, message);
}

/// Log at WARNING level
pub fn warning(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Warning, message);
}

/// Log at INFO level
pub fn info(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Info, message);
}

/// Log at DEBUG level, only when `--debug-<tag>` was given for `tag`
pub fn debug(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Debug, message);
}

/// Log at VERBOSE level, only with `--verbose`
pub fn verbose(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Verbose, message);
}
