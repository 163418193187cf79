//! # REST API Interface Layer
//!
//! Each `*_apis` module exposes a `router()` that is nested under its own
//! prefix by [`crate::create_router`]. Mappers convert between the DTOs in the
//! `shared` crate and domain types.
//!
//! ## Design Principles
//!
//! - **Domain Separation**: Pure translation layer without business logic
//! - **Consistent Error Format**: Every failure is an `ErrorResponse`
//! - **Request Logging**: Each handler logs its method and path on entry

pub mod auth;
pub mod calculator_apis;
pub mod health_apis;
pub mod mappers;
pub mod support_apis;

use axum::{http::StatusCode, response::IntoResponse, response::Response, Json};
use shared::ErrorResponse;

/// Message returned for any 500 so that internals are never leaked
pub const INTERNAL_ERROR_MESSAGE: &str = "An internal server error occurred.";

/// Build a JSON error response
pub fn error_response(status: StatusCode, message: impl Into<String>, code: &str) -> Response {
    (status, Json(ErrorResponse::new(message, code))).into_response()
}

/// Build the generic 500 response
pub fn internal_error() -> Response {
    error_response(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE, "INTERNAL_ERROR")
}
