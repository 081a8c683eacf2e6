/// Error types for mirrorscope
///
/// Each concern gets its own enum. Every upstream failure collapses into the
/// same client-facing message; the variants only exist so logs can say what
/// actually went wrong.
use std::path::PathBuf;
use thiserror::Error;

/// Body of the proxy's 500 response
pub const PROXY_FETCH_ERROR: &str = "Error fetching transactions";

/// Message shown by the client view when any fetch fails
pub const VIEW_FETCH_ERROR: &str = "Failed to fetch transactions. Please try again.";

// =============================================================================
// UPSTREAM API ERRORS
// =============================================================================

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("HTTP client setup failed: {message}")]
    ClientSetup { message: String },

    #[error("request to {endpoint} failed: {message}")]
    Request {
        endpoint: String,
        message: String,
        timed_out: bool,
    },

    #[error("HTTP {status} from {endpoint}: {body}")]
    HttpStatus {
        endpoint: String,
        status: u16,
        body: String,
    },

    #[error("failed to parse response from {endpoint}: {message}")]
    Parse { endpoint: String, message: String },
}

impl ApiError {
    /// Short kind label for log lines
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::InvalidUrl { .. } => "invalid_url",
            ApiError::ClientSetup { .. } => "client_setup",
            ApiError::Request {
                timed_out: true, ..
            } => "timeout",
            ApiError::Request { .. } => "request",
            ApiError::HttpStatus { .. } => "http_status",
            ApiError::Parse { .. } => "parse",
        }
    }

    pub(crate) fn from_reqwest(endpoint: &str, err: reqwest::Error) -> Self {
        ApiError::Request {
            endpoint: endpoint.to_string(),
            message: err.to_string(),
            timed_out: err.is_timeout(),
        }
    }
}

// =============================================================================
// CONFIGURATION ERRORS
// =============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

// =============================================================================
// CLIENT VIEW ERRORS
// =============================================================================

/// The client view never surfaces detail to the user, so there is one variant
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ViewError {
    #[error("Failed to fetch transactions. Please try again.")]
    FetchFailed,
}

impl ViewError {
    pub fn user_message(&self) -> &'static str {
        match self {
            ViewError::FetchFailed => VIEW_FETCH_ERROR,
        }
    }
}

impl From<ApiError> for ViewError {
    fn from(_: ApiError) -> Self {
        ViewError::FetchFailed
    }
}

// =============================================================================
// WEBSERVER ERRORS
// =============================================================================

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("invalid bind address '{addr}': {reason}")]
    InvalidAddress { addr: String, reason: String },

    #[error("failed to bind to {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}
