/// Filtering rules applied before a line is formatted
use super::config::{get_logger_config, LoggerConfig};
use super::levels::LogLevel;
use super::tags::LogTag;

/// Decide whether a line should be emitted under `config`.
///
/// 1. Errors always log
/// 2. Anything above the minimum level is dropped
/// 3. Debug requires `--debug-<tag>` for that tag
pub fn should_log(config: &LoggerConfig, tag: &LogTag, level: LogLevel) -> bool {
    if level == LogLevel::Error {
        return true;
    }

    if level > config.min_level {
        return false;
    }

    if level == LogLevel::Debug {
        return config.debug_tags.contains(tag);
    }

    true
}

pub fn log_internal(tag: LogTag, level: LogLevel, message: &str) {
    let config = get_logger_config();
    if !should_log(&config, &tag, level) {
        return;
    }

    super::format::format_and_log(&config, tag, level, message);
}
