//! # REST API for Financial Calculators
//!
//! Endpoints are mounted under `/api/v1/calculator` behind the bearer token
//! middleware.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::post,
    Extension, Router,
};
use tracing::{error, info, warn};

use crate::domain::models::auth::AuthenticatedUser;
use crate::io::rest::mappers::calculator_mapper::CalculatorMapper;
use crate::io::rest::{error_response, internal_error};
use crate::AppState;
use shared::SavingsGoalRequest;

/// Create a router for calculator APIs
pub fn router() -> Router<AppState> {
    Router::new().route("/savings-goal", post(calculate_savings_goal))
}

/// Calculate the monthly savings needed to reach a goal
pub async fn calculate_savings_goal(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    payload: Result<Json<SavingsGoalRequest>, JsonRejection>,
) -> impl IntoResponse {
    info!("POST /api/v1/calculator/savings-goal - user: {}", user.user_id);

    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            warn!("Rejected savings goal body: {}", rejection.body_text());
            return error_response(StatusCode::BAD_REQUEST, rejection.body_text(), "INVALID_REQUEST_BODY");
        }
    };

    let command = match CalculatorMapper::to_command(request, Some(user.user_id)) {
        Ok(command) => command,
        Err(field) => {
            warn!("Savings goal request missing {}", field);
            return error_response(StatusCode::BAD_REQUEST, format!("{} is required.", field), "MISSING_FIELD");
        }
    };

    match state.calculator_service.calculate_savings_goal(command) {
        Ok(result) => {
            let response = CalculatorMapper::to_response(result.plan);
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) if e.is_client_error() => error_response(StatusCode::BAD_REQUEST, e.to_string(), e.code()),
        Err(e) => {
            error!("Failed to calculate savings goal: {:?}", e);
            internal_error()
        }
    }
}
