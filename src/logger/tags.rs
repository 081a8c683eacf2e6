/// Log tags identify the subsystem that produced a line.
///
/// Each tag prints as a fixed-width console label; `--debug-<tag>` flags
/// enable debug lines per tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogTag {
    System,
    Config,
    Webserver,
    Api,
    View,
}

impl LogTag {
    /// Uppercase label used in console and plain output
    pub fn to_plain_string(&self) -> &'static str {
        match self {
            LogTag::System => "SYSTEM",
            LogTag::Config => "CONFIG",
            LogTag::Webserver => "WEBSERVER",
            LogTag::Api => "API",
            LogTag::View => "VIEW",
        }
    }
}

impl std::fmt::Display for LogTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.to_plain_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_fit_the_tag_column() {
        for tag in [LogTag::System, LogTag::Config, LogTag::Webserver, LogTag::Api, LogTag::View] {
            assert!(tag.to_plain_string().len() <= 10);
            assert_eq!(tag.to_string(), tag.to_plain_string());
        }
    }
}
