use axum::{extract::State, response::Response, routing::get, Router};
use chrono::Utc;
use std::sync::Arc;

use crate::{
    logger::{self, LogTag},
    webserver::{models::HealthResponse, state::AppState, utils::success_response},
};

/// Create status routes
pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(health_check))
}

/// GET /api/health
async fn health_check(State(state): State<Arc<AppState>>) -> Response {
    logger::debug(LogTag::Webserver, "Health check endpoint called");

    let response = HealthResponse {
        status: "ok".to_string(),
        timestamp: Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.uptime_seconds(),
    };

    success_response(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apis::mirror_node::MirrorNodeClient;
    use crate::config::Config;
    use crate::webserver::routes::create_router;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_health_reports_ok_without_touching_upstream() {
        let config = Config::default();
        let source = MirrorNodeClient::new(&config.mirror).unwrap();
        let app = create_router(Arc::new(AppState::new(config, Arc::new(source))));

        let response = app
            .oneshot(Request::builder().uri("/api/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let health: HealthResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(health.status, "ok");
        assert_eq!(health.version, env!("CARGO_PKG_VERSION"));
    }
}
