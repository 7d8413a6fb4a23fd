//! Response envelope helpers.
//!
//! Every endpoint answers with the same envelope:
//! `{"success": bool, "data": ..., "message": ...}`; failures additionally
//! carry a stable `error` code.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use comercio_shared::AppError;
use serde::Serialize;
use serde_json::json;

/// 200 OK with a data payload.
pub fn ok<T: Serialize>(data: T) -> Response {
    (
        StatusCode::OK,
        Json(json!({ "success": true, "data": data, "message": null })),
    )
        .into_response()
}

/// 201 Created with a data payload.
pub fn created<T: Serialize>(data: T) -> Response {
    (
        StatusCode::CREATED,
        Json(json!({ "success": true, "data": data, "message": null })),
    )
        .into_response()
}

/// Failure with an error code and a human-readable message.
pub fn fail(status: u16, code: &str, message: impl Into<String>) -> Response {
    let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (
        status,
        Json(json!({
            "success": false,
            "data": null,
            "error": code,
            "message": message.into()
        })),
    )
        .into_response()
}

/// Generic 404 for a missing resource.
pub fn not_found(message: impl Into<String>) -> Response {
    let err = AppError::NotFound(message.into());
    fail(err.status_code(), err.error_code(), err.to_string())
}

/// Opaque 500; the underlying error goes to the log, not the client.
pub fn internal_error() -> Response {
    let err = AppError::Internal("An error occurred".to_string());
    fail(err.status_code(), err.error_code(), err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_status() {
        let response = ok(serde_json::json!({"x": 1}));
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn test_created_status() {
        let response = created(serde_json::json!({"x": 1}));
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    #[test]
    fn test_fail_status() {
        let response = fail(400, "INVALID_AMOUNT", "bad");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_fail_bogus_status_falls_back_to_500() {
        let response = fail(9999, "X", "y");
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
