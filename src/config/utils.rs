//! Configuration loading
//!
//! Precedence, lowest to highest:
//! 1. Defaults embedded in the schema
//! 2. `data/config.toml` (optional; missing file means defaults)
//! 3. Environment (`PORT`, `MIRROR_BASE_URL`, `PROXY_URL`), after `.env` is loaded
//! 4. Command-line flags, applied by the binaries

use super::schemas::Config;
use crate::errors::ConfigError;
use crate::logger::{self, LogTag};
use std::path::Path;

/// Default configuration file path
pub const CONFIG_FILE_PATH: &str = "data/config.toml";

/// Load configuration from `path` and apply environment overrides
pub fn load_config_from_path(path: &Path) -> Result<Config, ConfigError> {
    // A missing .env is the normal case
    if let Ok(env_path) = dotenv::dotenv() {
        logger::debug(
            LogTag::Config,
            &format!("Loaded environment from {}", env_path.display()),
        );
    }

    let config = read_config_file(path)?;
    apply_env_overrides(config, |key| std::env::var(key).ok())
}

/// Read a TOML config file, falling back to defaults if it does not exist
pub fn read_config_file(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        logger::info(
            LogTag::Config,
            &format!("Config file '{}' not found, using default values", path.display()),
        );
        return Ok(Config::default());
    }

    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config(path, &contents)
}

/// Parse config file contents. Unknown sections and keys are reported as
/// warnings and otherwise ignored.
pub fn parse_config(path: &Path, contents: &str) -> Result<Config, ConfigError> {
    let parse_err = |source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    };

    let table: toml::Table = toml::from_str(contents).map_err(parse_err)?;
    for key in unknown_keys(&table) {
        logger::warning(
            LogTag::Config,
            &format!("Ignoring unknown config key '{}' in {}", key, path.display()),
        );
    }

    toml::from_str::<Config>(contents).map_err(parse_err)
}

/// Dotted paths of keys the schema does not know about
pub fn unknown_keys(table: &toml::Table) -> Vec<String> {
    let mut unknown = Vec::new();
    for (section, value) in table {
        match (Config::section_fields(section), value.as_table()) {
            (Some(fields), Some(inner)) => {
                for key in inner.keys() {
                    if !fields.contains(&key.as_str()) {
                        unknown.push(format!("{}.{}", section, key));
                    }
                }
            }
            // Known section with a non-table value is a type error serde will report
            (Some(_), None) => {}
            (None, _) => unknown.push(section.clone()),
        }
    }
    unknown
}

/// Apply environment overrides. `lookup` is `std::env::var` in production.
pub fn apply_env_overrides<F>(mut config: Config, lookup: F) -> Result<Config, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(port) = lookup("PORT") {
        config.webserver.port = port.trim().parse().map_err(|e| ConfigError::InvalidValue {
            field: "PORT".to_string(),
            reason: format!("'{}' is not a valid port: {}", port, e),
        })?;
    }

    if let Some(base_url) = lookup("MIRROR_BASE_URL").filter(|v| !v.trim().is_empty()) {
        config.mirror.base_url = base_url.trim().to_string();
    }

    if let Some(proxy_url) = lookup("PROXY_URL").filter(|v| !v.trim().is_empty()) {
        config.view.proxy_url = proxy_url.trim().to_string();
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ViewConfig, DEFAULT_MIRROR_BASE_URL};
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.webserver.port, 5000);
        assert_eq!(config.mirror.account_param, "account.id");
        assert_eq!(config.mirror.timeout_seconds, 0);
        assert!(config.view.dark_mode);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = read_config_file(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[webserver]\nport = 8088\n\n[mirror]\ntimeout_seconds = 15").unwrap();

        let config = read_config_file(file.path()).unwrap();
        assert_eq!(config.webserver.port, 8088);
        assert_eq!(config.webserver.host, "127.0.0.1");
        assert_eq!(config.mirror.timeout_seconds, 15);
        assert_eq!(config.mirror.base_url, DEFAULT_MIRROR_BASE_URL);
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[webserver]\nport = \"eighty\"").unwrap();

        let err = read_config_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_unknown_keys_are_listed() {
        let table: toml::Table =
            toml::from_str("[webserver]\nprot = 1\n[mirror]\nbase_url = \"x\"\n[trader]\na = 1")
                .unwrap();
        let mut keys = unknown_keys(&table);
        keys.sort();
        assert_eq!(keys, vec!["trader".to_string(), "webserver.prot".to_string()]);
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            ("PORT", "7001"),
            ("MIRROR_BASE_URL", " https://mainnet.mirrornode.hedera.com "),
            ("PROXY_URL", ""),
        ]
        .into_iter()
        .collect();

        let config =
            apply_env_overrides(Config::default(), |k| env.get(k).map(|v| v.to_string())).unwrap();
        assert_eq!(config.webserver.port, 7001);
        assert_eq!(config.mirror.base_url, "https://mainnet.mirrornode.hedera.com");
        assert_eq!(config.view.proxy_url, ViewConfig::default().proxy_url);
    }

    #[test]
    fn test_bad_port_env_is_rejected() {
        let err = apply_env_overrides(Config::default(), |k| {
            (k == "PORT").then(|| "http".to_string())
        })
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }
}
