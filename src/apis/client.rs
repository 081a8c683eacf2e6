/// Shared HTTP client wrapper
use crate::errors::ApiError;
use reqwest::Client;
use std::time::Duration;

const USER_AGENT: &str = concat!("mirrorscope/", env!("CARGO_PKG_VERSION"));

/// HTTP client with an optional request timeout.
///
/// A timeout of zero leaves reqwest's default in place, which never times
/// out a request on its own.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    timeout: Option<Duration>,
}

impl HttpClient {
    pub fn new(timeout_secs: u64) -> Result<Self, ApiError> {
        let timeout = (timeout_secs > 0).then(|| Duration::from_secs(timeout_secs));

        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder.build().map_err(|e| ApiError::ClientSetup {
            message: format!("Failed to create HTTP client: {}", e),
        })?;

        Ok(Self { client, timeout })
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}
