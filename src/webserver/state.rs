/// Shared application state passed to all route handlers
///
/// Holds only immutable configuration and the upstream source; requests
/// never share mutable data.
use crate::apis::TransactionSource;
use crate::config::Config;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,

    /// Where transactions come from (the mirror node in production)
    pub source: Arc<dyn TransactionSource>,

    /// Server startup time
    pub startup_time: chrono::DateTime<chrono::Utc>,
}

impl AppState {
    pub fn new(config: Config, source: Arc<dyn TransactionSource>) -> Self {
        Self {
            config: Arc::new(config),
            source,
            startup_time: chrono::Utc::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        (chrono::Utc::now() - self.startup_time)
            .num_seconds()
            .max(0) as u64
    }
}
