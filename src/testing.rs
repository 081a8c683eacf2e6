//! Test fixtures shared by the unit tests

use mockito::{Matcher, Mock, ServerGuard};
use serde_json::Value;
use tokio::net::TcpListener;

use crate::apis::mirror_node::Transaction;

/// Mock `GET path` (exact path and query) answering `status` with a JSON body
pub async fn mock_json(server: &mut ServerGuard, path: &str, status: usize, body: &Value) -> Mock {
    server
        .mock("GET", path)
        .with_status(status)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .create_async()
        .await
}

/// Mock `GET path` with any query string
pub async fn mock_any_query(
    server: &mut ServerGuard,
    path: &str,
    status: usize,
    content_type: &str,
    body: &str,
) -> Mock {
    server
        .mock("GET", path)
        .match_query(Matcher::Any)
        .with_status(status)
        .with_header("content-type", content_type)
        .with_body(body)
        .create_async()
        .await
}

/// Base URL of a port nothing listens on
pub async fn refused_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

pub fn tx(id: Option<&str>, name: Option<&str>) -> Transaction {
    Transaction {
        transaction_id: id.map(str::to_string),
        name: name.map(str::to_string),
        ..Transaction::default()
    }
}
