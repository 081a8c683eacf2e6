use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Response,
    routing::get,
    Router,
};
use std::sync::Arc;

use crate::{
    errors::PROXY_FETCH_ERROR,
    logger::{self, LogTag},
    webserver::{
        models::{TransactionsQuery, TransactionsResponse},
        state::AppState,
        utils::{error_response, success_response},
    },
};

/// Create transaction proxy routes
pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/transactions", get(get_transactions))
}

/// GET /api/transactions?accountId=0.0.1234
///
/// Forwards to the mirror node and relays its `transactions` array. Upstream
/// failures of any kind collapse into a 500 with a fixed message.
async fn get_transactions(
    State(state): State<Arc<AppState>>,
    Query(query): Query<TransactionsQuery>,
) -> Response {
    let account_id = query.account_id();
    logger::info(
        LogTag::Api,
        &format!(
            "Fetching transactions for {}",
            account_id.unwrap_or("all accounts")
        ),
    );

    match state.source.fetch_transactions(account_id).await {
        Ok(transactions) => {
            logger::debug(
                LogTag::Api,
                &format!("Relaying {} transactions", transactions.len()),
            );
            success_response(TransactionsResponse { transactions })
        }
        Err(e) => {
            logger::error(
                LogTag::Api,
                &format!("Upstream fetch failed ({}): {}", e.kind(), e),
            );
            error_response(StatusCode::INTERNAL_SERVER_ERROR, PROXY_FETCH_ERROR)
        }
    }
}
