//! Hedera mirror node REST client
//!
//! API Documentation: https://docs.hedera.com/hedera/sdks-and-apis/rest-api
//!
//! Endpoint used:
//! - /api/v1/transactions[?account.id={accountId}] - latest transactions, optionally for one account
//!
//! One GET per call. No retries, no pagination: the first page is the result.
pub mod types;

pub use self::types::{ConsensusTimestamp, PageLinks, Transaction, TransactionsPage};

use crate::apis::client::HttpClient;
use crate::apis::TransactionSource;
use crate::config::MirrorConfig;
use crate::errors::ApiError;
use crate::logger::{self, LogTag};
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use std::time::Instant;
use url::Url;

/// Longest upstream error body kept for logs
const MAX_ERROR_BODY_CHARS: usize = 512;

pub struct MirrorNodeClient {
    http: HttpClient,
    transactions_url: Url,
    account_param: String,
}

impl MirrorNodeClient {
    pub fn new(config: &MirrorConfig) -> Result<Self, ApiError> {
        let raw = format!(
            "{}/{}",
            config.base_url.trim_end_matches('/'),
            config.transactions_path.trim_start_matches('/')
        );
        let transactions_url = Url::parse(&raw).map_err(|e| ApiError::InvalidUrl {
            url: raw.clone(),
            reason: e.to_string(),
        })?;

        if transactions_url.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl {
                url: raw,
                reason: "not a hierarchical http(s) URL".to_string(),
            });
        }

        Ok(Self {
            http: HttpClient::new(config.timeout_seconds)?,
            transactions_url,
            account_param: config.account_param.clone(),
        })
    }

    /// Upstream URL for a query, with the account filter only when an account is given
    pub fn transactions_url(&self, account_id: Option<&str>) -> Url {
        let mut url = self.transactions_url.clone();
        if let Some(account_id) = account_id {
            url.query_pairs_mut()
                .append_pair(&self.account_param, account_id);
        }
        url
    }

    /// Fetch the first page of transactions
    pub async fn fetch_page(&self, account_id: Option<&str>) -> Result<TransactionsPage, ApiError> {
        let url = self.transactions_url(account_id);
        let endpoint = url.path().to_string();

        logger::debug(LogTag::Api, &format!("GET {}", url));

        let start = Instant::now();
        let response = self
            .http
            .client()
            .get(url.clone())
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| ApiError::from_reqwest(&endpoint, e))?;
        let elapsed_ms = start.elapsed().as_millis();

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::HttpStatus {
                endpoint,
                status: status.as_u16(),
                body: truncate_chars(&body, MAX_ERROR_BODY_CHARS),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ApiError::from_reqwest(&endpoint, e))?;

        let page: TransactionsPage =
            serde_json::from_slice(&bytes).map_err(|e| ApiError::Parse {
                endpoint: endpoint.clone(),
                message: e.to_string(),
            })?;

        logger::verbose(
            LogTag::Api,
            &format!("Upstream payload: {}", String::from_utf8_lossy(&bytes)),
        );
        logger::debug(
            LogTag::Api,
            &format!(
                "Mirror node returned {} transactions in {}ms (next page: {})",
                page.transactions.len(),
                elapsed_ms,
                page.links
                    .as_ref()
                    .and_then(|l| l.next.as_deref())
                    .unwrap_or("none")
            ),
        );

        Ok(page)
    }
}

#[async_trait]
impl TransactionSource for MirrorNodeClient {
    async fn fetch_transactions(
        &self,
        account_id: Option<&str>,
    ) -> Result<Vec<Transaction>, ApiError> {
        self.fetch_page(account_id)
            .await
            .map(|page| page.transactions)
    }

    fn describe(&self) -> String {
        match self.http.timeout() {
            Some(timeout) => format!("{} (timeout {}s)", self.transactions_url, timeout.as_secs()),
            None => self.transactions_url.to_string(),
        }
    }
}

fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}
