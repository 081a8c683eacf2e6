// Configuration schema

use crate::config_struct;

/// Public Hedera testnet mirror node
pub const DEFAULT_MIRROR_BASE_URL: &str = "https://testnet.mirrornode.hedera.com";

// ============================================================================
// WEBSERVER
// ============================================================================

config_struct! {
    /// Proxy service listener
    pub struct WebserverConfig {
        /// IP to bind: 127.0.0.1 = localhost only, 0.0.0.0 = all interfaces
        host: String = "127.0.0.1".to_string(),

        port: u16 = 5000,

        /// Attach a permissive CORS layer so browser clients on other origins can call /api
        cors_permissive: bool = true,
    }
}

// ============================================================================
// UPSTREAM MIRROR NODE
// ============================================================================

config_struct! {
    pub struct MirrorConfig {
        base_url: String = DEFAULT_MIRROR_BASE_URL.to_string(),

        transactions_path: String = "/api/v1/transactions".to_string(),

        /// Query parameter the mirror node uses to scope results to one account
        account_param: String = "account.id".to_string(),

        /// Outbound request timeout; 0 leaves the HTTP client default (none)
        timeout_seconds: u64 = 0,
    }
}

// ============================================================================
// CLIENT VIEW
// ============================================================================

config_struct! {
    pub struct ViewConfig {
        /// Base URL of the proxy service the terminal view talks to
        proxy_url: String = "http://127.0.0.1:5000".to_string(),

        dark_mode: bool = true,
    }
}

// ============================================================================
// ROOT CONFIGURATION
// ============================================================================

config_struct! {
    pub struct Config {
        webserver: WebserverConfig = WebserverConfig::default(),
        mirror: MirrorConfig = MirrorConfig::default(),
        view: ViewConfig = ViewConfig::default(),
    }
}

impl Config {
    /// Accepted keys of the table named `section`, if it is a known section
    pub fn section_fields(section: &str) -> Option<&'static [&'static str]> {
        match section {
            "webserver" => Some(WebserverConfig::FIELDS),
            "mirror" => Some(MirrorConfig::FIELDS),
            "view" => Some(ViewConfig::FIELDS),
            _ => None,
        }
    }
}
