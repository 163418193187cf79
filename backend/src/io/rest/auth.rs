//! Bearer token authentication for protected routes.
//!
//! Applied with `axum::middleware::from_fn_with_state`. On success the
//! resolved [`AuthenticatedUser`] is inserted into the request extensions
//! for handlers to extract.

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, StatusCode},
    middleware::Next,
    response::Response,
};
use tracing::{error, warn};

use crate::io::rest::{error_response, internal_error};
use crate::AppState;

const BEARER_PREFIX: &str = "Bearer ";

pub async fn require_bearer_token(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix(BEARER_PREFIX))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string);

    let Some(token) = token else {
        warn!("{} {} - missing bearer token", request.method(), request.uri().path());
        return error_response(StatusCode::UNAUTHORIZED, "Missing bearer token", "UNAUTHORIZED");
    };

    match state.auth_service.authenticate(&token).await {
        Ok(Some(user)) => {
            request.extensions_mut().insert(user);
            next.run(request).await
        }
        Ok(None) => {
            warn!("{} {} - invalid bearer token", request.method(), request.uri().path());
            error_response(StatusCode::UNAUTHORIZED, "Invalid bearer token", "UNAUTHORIZED")
        }
        Err(e) => {
            error!("Token lookup failed: {:?}", e);
            internal_error()
        }
    }
}
