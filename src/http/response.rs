//! Outcome → HTTP response mapping.
//!
//! # Responsibilities
//! - Map resolution outcomes to status codes
//! - Add the `Allow` header on 405
//! - Render hierarchy errors as 500 without leaking them as outcomes
//!
//! # Design Decisions
//! - Every body is JSON, including errors
//! - Allowed methods are upper-cased for the header only

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::routing::{Outcome, RouteError};

/// Render an outcome as a response.
pub fn outcome_response(outcome: &Outcome) -> Response {
    let status = StatusCode::from_u16(outcome.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let mut response = (status, Json(outcome)).into_response();

    if status == StatusCode::METHOD_NOT_ALLOWED {
        if let Some(allow) = allow_header(outcome.allowed_methods()) {
            response.headers_mut().insert(header::ALLOW, allow);
        }
    }
    response
}

/// Render a broken handler hierarchy.
pub fn route_error_response(error: &RouteError) -> Response {
    let body = json!({
        "status": StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
        "error": error.to_string(),
    });
    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
}

fn allow_header(methods: &[String]) -> Option<HeaderValue> {
    let value = methods
        .iter()
        .map(|m| m.to_uppercase())
        .collect::<Vec<_>>()
        .join(", ");
    HeaderValue::from_str(&value).ok()
}
