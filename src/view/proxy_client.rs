/// HTTP client the terminal view uses to talk to the proxy service
use url::Url;

use super::state::FetchScope;
use crate::apis::client::HttpClient;
use crate::apis::mirror_node::{Transaction, TransactionsPage};
use crate::errors::{ApiError, ViewError};
use crate::logger::{self, LogTag};

/// Query parameter the proxy reads the account scope from
pub const ACCOUNT_QUERY_PARAM: &str = "accountId";

#[derive(Clone)]
pub struct ProxyClient {
    http: HttpClient,
    transactions_url: Url,
}

impl ProxyClient {
    pub fn new(proxy_url: &str, timeout_secs: u64) -> Result<Self, ApiError> {
        let raw = format!("{}/api/transactions", proxy_url.trim_end_matches('/'));
        let transactions_url = Url::parse(&raw).map_err(|e| ApiError::InvalidUrl {
            url: raw,
            reason: e.to_string(),
        })?;

        Ok(Self {
            http: HttpClient::new(timeout_secs)?,
            transactions_url,
        })
    }

    pub fn transactions_url(&self, scope: &FetchScope) -> Url {
        let mut url = self.transactions_url.clone();
        if let Some(account_id) = scope.account_id() {
            url.query_pairs_mut()
                .append_pair(ACCOUNT_QUERY_PARAM, account_id);
        }
        url
    }

    /// Fetch through the proxy. Failure detail goes to the log, the caller
    /// only learns that the fetch failed.
    pub async fn fetch(&self, scope: &FetchScope) -> Result<Vec<Transaction>, ViewError> {
        self.try_fetch(scope).await.map_err(|e| {
            logger::warning(
                LogTag::View,
                &format!("Fetch failed ({}): {}", e.kind(), e),
            );
            ViewError::from(e)
        })
    }

    async fn try_fetch(&self, scope: &FetchScope) -> Result<Vec<Transaction>, ApiError> {
        let url = self.transactions_url(scope);
        let endpoint = url.to_string();
        logger::debug(LogTag::View, &format!("GET {}", endpoint));

        let response = self
            .http
            .client()
            .get(url)
            .send()
            .await
            .map_err(|e| ApiError::from_reqwest(&endpoint, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::HttpStatus {
                endpoint,
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            });
        }

        let body: TransactionsPage = response.json().await.map_err(|e| ApiError::Parse {
            endpoint: endpoint.clone(),
            message: e.to_string(),
        })?;

        Ok(body.transactions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{mock_any_query, mock_json, refused_base_url};
    use serde_json::json;

    #[test]
    fn test_scoped_url_uses_account_id_param() {
        let client = ProxyClient::new("http://localhost:5000/", 0).unwrap();
        assert_eq!(
            client.transactions_url(&FetchScope::Account("0.0.1234".into())).as_str(),
            "http://localhost:5000/api/transactions?accountId=0.0.1234"
        );
        assert_eq!(
            client.transactions_url(&FetchScope::All).as_str(),
            "http://localhost:5000/api/transactions"
        );
    }

    #[tokio::test]
    async fn test_fetch_reads_transactions_key() {
        let mut server = mockito::Server::new_async().await;
        let mock = mock_json(
            &mut server,
            "/api/transactions",
            200,
            &json!({
                "transactions": [{"transaction_id": "0.0.1@1@2", "consensus_timestamp": 1700000000}]
            }),
        )
        .await;

        let client = ProxyClient::new(&server.url(), 5).unwrap();
        let list = client.fetch(&FetchScope::All).await.unwrap();

        assert_eq!(list.len(), 1);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_proxy_500_is_fetch_failed() {
        let mut server = mockito::Server::new_async().await;
        let _mock = mock_any_query(
            &mut server,
            "/api/transactions",
            500,
            "application/json",
            r#"{"error":"Error fetching transactions"}"#,
        )
        .await;

        let client = ProxyClient::new(&server.url(), 5).unwrap();
        let err = client
            .fetch(&FetchScope::Account("x".into()))
            .await
            .unwrap_err();
        assert_eq!(err, ViewError::FetchFailed);
    }

    #[tokio::test]
    async fn test_unreachable_proxy_is_fetch_failed() {
        let client = ProxyClient::new(&refused_base_url().await, 5).unwrap();
        assert_eq!(
            client.fetch(&FetchScope::All).await.unwrap_err(),
            ViewError::FetchFailed
        );
    }
}
