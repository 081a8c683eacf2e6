/// Command-line arguments for both binaries
///
/// Flags shared by every binary live in [`LogArgs`] and are flattened into
/// each binary's own argument struct. Command-line values override the
/// config file and environment.
use clap::{Args, Parser};
use std::path::PathBuf;

use crate::config::{Config, CONFIG_FILE_PATH};
use crate::logger::{LogTag, LoggerConfig};

/// Logging flags shared by every binary
#[derive(Debug, Clone, Default, Args)]
pub struct LogArgs {
    /// Enable verbose logging
    #[arg(long)]
    pub verbose: bool,

    /// Only print errors
    #[arg(long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Debug output for the web server
    #[arg(long)]
    pub debug_webserver: bool,

    /// Debug output for upstream API calls
    #[arg(long)]
    pub debug_api: bool,

    /// Debug output for the client view
    #[arg(long)]
    pub debug_view: bool,

    /// Debug output for config loading
    #[arg(long)]
    pub debug_config: bool,
}

impl LogArgs {
    pub fn debug_tags(&self) -> Vec<LogTag> {
        [
            (self.debug_webserver, LogTag::Webserver),
            (self.debug_api, LogTag::Api),
            (self.debug_view, LogTag::View),
            (self.debug_config, LogTag::Config),
        ]
        .into_iter()
        .filter_map(|(enabled, tag)| enabled.then_some(tag))
        .collect()
    }

    pub fn logger_config(&self) -> LoggerConfig {
        LoggerConfig::from_flags(self.verbose, self.quiet, self.no_color, &self.debug_tags())
    }
}

/// Hedera mirror node transaction proxy
#[derive(Debug, Clone, Parser)]
#[command(name = "mirrorscope", version, about)]
pub struct ServerArgs {
    /// Address to bind (overrides [webserver].host)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on (overrides [webserver].port and PORT)
    #[arg(long)]
    pub port: Option<u16>,

    /// Mirror node base URL (overrides [mirror].base_url and MIRROR_BASE_URL)
    #[arg(long, value_name = "URL")]
    pub upstream: Option<String>,

    /// Config file
    #[arg(long, value_name = "PATH", default_value = CONFIG_FILE_PATH)]
    pub config: PathBuf,

    #[command(flatten)]
    pub log: LogArgs,
}

impl ServerArgs {
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(host) = &self.host {
            config.webserver.host = host.clone();
        }
        if let Some(port) = self.port {
            config.webserver.port = port;
        }
        if let Some(upstream) = &self.upstream {
            config.mirror.base_url = upstream.clone();
        }
        config
    }
}

/// Terminal view of mirror node transactions, served through the proxy
#[derive(Debug, Clone, Parser)]
#[command(name = "mirrorscope-view", version, about)]
pub struct ViewArgs {
    /// Proxy base URL (overrides [view].proxy_url and PROXY_URL)
    #[arg(long, value_name = "URL")]
    pub proxy: Option<String>,

    /// Start in light mode
    #[arg(long)]
    pub light: bool,

    /// Connect to this account on startup
    #[arg(long, value_name = "ID")]
    pub account: Option<String>,

    /// Request timeout in seconds; 0 keeps the client default
    #[arg(long, value_name = "SECS", default_value_t = 0)]
    pub timeout: u64,

    /// Config file
    #[arg(long, value_name = "PATH", default_value = CONFIG_FILE_PATH)]
    pub config: PathBuf,

    #[command(flatten)]
    pub log: LogArgs,
}

impl ViewArgs {
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(proxy) = &self.proxy {
            config.view.proxy_url = proxy.clone();
        }
        if self.light {
            config.view.dark_mode = false;
        }
        config
    }

    /// Startup account, ignoring a blank value
    pub fn account_id(&self) -> Option<&str> {
        self.account
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
    }
}
