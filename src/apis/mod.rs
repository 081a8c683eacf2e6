//! Upstream ledger API clients

pub mod client;
pub mod mirror_node;

use crate::errors::ApiError;
use async_trait::async_trait;
use mirror_node::Transaction;

/// Anything that can answer "latest transactions, optionally for one account".
///
/// The proxy routes only see this trait, which keeps them independent of the
/// concrete upstream.
#[async_trait]
pub trait TransactionSource: Send + Sync {
    async fn fetch_transactions(
        &self,
        account_id: Option<&str>,
    ) -> Result<Vec<Transaction>, ApiError>;

    /// Human-readable upstream description for startup logs
    fn describe(&self) -> String;
}
