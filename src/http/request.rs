//! Request identification.
//!
//! # Responsibilities
//! - Read the request ID back for log correlation
//!
//! # Design Decisions
//! - IDs are issued by `tower_http`'s `MakeRequestUuid` (UUID v4) as early as possible
//! - A client-supplied `x-request-id` is kept and echoed

use axum::http::Request;

pub use tower_http::request_id::MakeRequestUuid;

pub const X_REQUEST_ID: &str = "x-request-id";

/// The request's ID, or `"unknown"` if it has none.
pub fn request_id<B>(request: &Request<B>) -> &str {
    request
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
}
