/// Runtime logger configuration
///
/// Built once from command-line flags and stored globally. Reads clone the
/// current value so the lock is never held while formatting.
use super::levels::LogLevel;
use super::tags::LogTag;
use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::sync::RwLock;

#[derive(Debug, Clone, PartialEq)]
pub struct LoggerConfig {
    /// Messages above this level are dropped (debug is additionally tag-gated)
    pub min_level: LogLevel,
    /// Tags with `--debug-<tag>` enabled
    pub debug_tags: HashSet<LogTag>,
    /// Colored console output
    pub colors: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            min_level: LogLevel::Info,
            debug_tags: HashSet::new(),
            colors: true,
        }
    }
}

impl LoggerConfig {
    /// Build from the flags shared by every binary.
    ///
    /// `--quiet` wins over `--verbose`; a debug tag lifts the threshold to
    /// Debug so those lines are not dropped by the level check.
    pub fn from_flags(verbose: bool, quiet: bool, no_color: bool, debug_tags: &[LogTag]) -> Self {
        let mut min_level = if quiet {
            LogLevel::Error
        } else if verbose {
            LogLevel::Verbose
        } else {
            LogLevel::Info
        };

        if !quiet && !debug_tags.is_empty() && min_level < LogLevel::Debug {
            min_level = LogLevel::Debug;
        }

        Self {
            min_level,
            debug_tags: debug_tags.iter().copied().collect(),
            colors: !no_color,
        }
    }
}

static LOGGER_CONFIG: Lazy<RwLock<LoggerConfig>> =
    Lazy::new(|| RwLock::new(LoggerConfig::default()));

pub fn get_logger_config() -> LoggerConfig {
    match LOGGER_CONFIG.read() {
        Ok(config) => config.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}

pub fn set_logger_config(config: LoggerConfig) {
    match LOGGER_CONFIG.write() {
        Ok(mut current) => *current = config,
        Err(poisoned) => *poisoned.into_inner() = config,
    }
}
