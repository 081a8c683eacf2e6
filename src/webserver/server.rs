/// Axum webserver implementation
///
/// Server lifecycle: bind, serve until [`shutdown`] is called, drain.
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Notify;
use tower_http::cors::CorsLayer;

use crate::{
    apis::TransactionSource,
    config::Config,
    errors::ServerError,
    logger::{self, LogTag},
    webserver::{routes, state::AppState},
};

/// Global shutdown notifier
static SHUTDOWN_NOTIFY: once_cell::sync::Lazy<Arc<Notify>> =
    once_cell::sync::Lazy::new(|| Arc::new(Notify::new()));

/// Start the proxy service
///
/// This function blocks until the server is shut down
pub async fn start_server(
    config: Config,
    source: Arc<dyn TransactionSource>,
) -> Result<(), ServerError> {
    let bind = format!("{}:{}", config.webserver.host, config.webserver.port);
    let addr: SocketAddr = bind.parse().map_err(|e: std::net::AddrParseError| {
        ServerError::InvalidAddress {
            addr: bind.clone(),
            reason: e.to_string(),
        }
    })?;

    logger::debug(
        LogTag::Webserver,
        &format!("Starting webserver on {} (upstream: {})", addr, source.describe()),
    );

    let state = Arc::new(AppState::new(config, source));
    let app = build_app(state);

    let listener = TcpListener::bind(&addr).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::AddrInUse {
            logger::error(
                LogTag::Webserver,
                &format!(
                    "Port {} is already in use. Stop the other process or pass --port.",
                    addr.port()
                ),
            );
        }
        ServerError::Bind {
            addr: addr.to_string(),
            source: e,
        }
    })?;

    logger::info(
        LogTag::Webserver,
        &format!("Proxy server running on http://{}", addr),
    );
    logger::debug(
        LogTag::Webserver,
        &format!("API endpoints available at http://{}/api", addr),
    );

    let shutdown_signal = async {
        SHUTDOWN_NOTIFY.notified().await;
        logger::info(
            LogTag::Webserver,
            "Received shutdown signal, stopping webserver...",
        );
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await
        .map_err(ServerError::Serve)?;

    logger::info(LogTag::Webserver, "Webserver stopped gracefully");

    Ok(())
}

/// Trigger webserver shutdown
pub fn shutdown() {
    logger::debug(LogTag::Webserver, "Triggering webserver shutdown...");
    SHUTDOWN_NOTIFY.notify_one();
}

/// Build the Axum application with all routes and middleware
fn build_app(state: Arc<AppState>) -> Router {
    let cors = state.config.webserver.cors_permissive;
    let app = routes::create_router(state);

    if cors {
        app.layer(CorsLayer::permissive())
    } else {
        app
    }
}
