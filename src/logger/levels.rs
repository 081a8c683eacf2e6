/// Log levels, ordered by severity (Error < Warning < Info < Debug < Verbose)
///
/// Ordering lets the filter compare a message level against a minimum threshold.
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    Error = 0,
    Warning = 1,
    Info = 2,
    Debug = 3,   // gated by --debug-<tag>
    Verbose = 4, // gated by --verbose
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warning => "WARNING",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
            LogLevel::Verbose => "VERBOSE",
        }
    }

    /// Error and warning lines go to stderr so piped stdout stays clean
    pub fn is_stderr(&self) -> bool {
        matches!(self, LogLevel::Error | LogLevel::Warning)
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_ordering() {
        assert!(LogLevel::Error < LogLevel::Warning);
        assert!(LogLevel::Info < LogLevel::Debug);
        assert!(LogLevel::Debug < LogLevel::Verbose);
    }

    #[test]
    fn test_only_errors_and_warnings_go_to_stderr() {
        assert!(LogLevel::Error.is_stderr());
        assert!(LogLevel::Warning.is_stderr());
        assert!(!LogLevel::Info.is_stderr());
        assert_eq!(LogLevel::Verbose.to_string(), "VERBOSE");
    }
}
