use axum::{
    extract::{Query, State},
    response::Html,
    routing::get,
    Router,
};
use std::sync::Arc;

use crate::{
    errors::ViewError,
    logger::{self, LogTag},
    view::{FetchScope, ViewState},
    webserver::{models::PageQuery, state::AppState, templates},
};

/// Create the browser view route
pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/", get(transactions_page))
}

/// GET /?q=...&accountId=...&theme=light|dark
///
/// Runs one view cycle on the server: fetch for the requested scope, apply the
/// search term, render.
async fn transactions_page(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PageQuery>,
) -> Html<String> {
    let dark_mode = query.dark_mode(state.config.view.dark_mode);
    let scope = match query.account_id() {
        Some(id) => FetchScope::Account(id.to_string()),
        None => FetchScope::All,
    };

    let (view, ticket) = ViewState::new(dark_mode).begin_fetch(scope.clone());
    let result = state
        .source
        .fetch_transactions(scope.account_id())
        .await
        .map_err(|e| {
            logger::warning(
                LogTag::View,
                &format!("Page fetch failed ({}): {}", e.kind(), e),
            );
            ViewError::from(e)
        });

    let view = view
        .apply_fetch_result(ticket, result)
        .with_search_term(query.q.unwrap_or_default());

    Html(templates::page(&view))
}
