/// Response helpers shared by the API routes
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;

use crate::webserver::models::ErrorResponse;

/// 200 with `body` serialized as JSON
pub fn success_response<T: Serialize>(body: T) -> Response {
    (StatusCode::OK, Json(body)).into_response()
}

/// `status` with `{"error": message}`
pub fn error_response(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
        .into_response()
}

/// Escape text for HTML element content and attribute values
pub fn escape_html(text: &str) -> String {
    htmlescape::encode_minimal(text)
}
