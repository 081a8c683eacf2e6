use crate::webserver::state::AppState;
use axum::Router;
use std::sync::Arc;

pub mod page;
pub mod status;
pub mod transactions;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(page::routes())
        .nest("/api", api_routes())
        .with_state(state)
}

/// Build API routes
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .merge(status::routes())
        .merge(transactions::routes())
}
