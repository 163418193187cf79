//! # Budgetnik Backend
//!
//! REST backend for the Budgetnik personal finance app.
//!
//! ## Architecture
//!
//! The backend follows a layered architecture:
//! ```text
//! IO Layer (REST API, auth middleware)
//!     ↓
//! Domain Layer (calculator, support, auth services)
//!     ↓
//! Storage Layer (SQLite through sqlx)
//! ```
//!
//! ## Key Responsibilities
//!
//! - Initialize storage and services from an [`AppConfig`]
//! - Set up the REST API router with CORS and request tracing

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

use anyhow::Result;
use axum::{
    http::{header, HeaderValue, Method},
    middleware, Router,
};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::{AppConfig, CorsOrigins};
use crate::domain::{AuthService, CalculatorService, Clock, SupportService, SystemClock};
use crate::io::rest::{auth, calculator_apis, health_apis, support_apis};
use crate::storage::{ApiTokenRepository, DbConnection, SupportRequestRepository};

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub calculator_service: CalculatorService,
    pub support_service: SupportService,
    pub auth_service: AuthService,
}

/// Initialize the backend with all required services
pub async fn initialize_backend(config: &AppConfig) -> Result<AppState> {
    info!("Setting up database");
    let db_conn = DbConnection::new(&config.database_url).await?;

    build_state(db_conn, Arc::new(SystemClock), &config.api_tokens).await
}

/// Wire services over an open database, seeding the given API tokens
pub async fn build_state(db_conn: DbConnection, clock: Arc<dyn Clock>, api_tokens: &[(i64, String)]) -> Result<AppState> {
    info!("Setting up domain model");
    let token_repository = Arc::new(ApiTokenRepository::new(db_conn.clone()));
    let request_repository = Arc::new(SupportRequestRepository::new(db_conn));

    let auth_service = AuthService::new(token_repository);
    auth_service.seed_tokens(api_tokens).await?;

    info!("Setting up application state");
    Ok(AppState {
        calculator_service: CalculatorService::with_clock(clock),
        support_service: SupportService::new(request_repository),
        auth_service,
    })
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState, config: &AppConfig) -> Result<Router> {
    let cors = CorsLayer::new()
        .allow_origin(allowed_origins(&config.cors_origins)?)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]);

    let calculator_routes = calculator_apis::router()
        .route_layer(middleware::from_fn_with_state(app_state.clone(), auth::require_bearer_token));

    let api_routes = Router::new()
        .nest("/calculator", calculator_routes)
        .nest("/support", support_apis::router())
        .merge(health_apis::router());

    Ok(Router::new()
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state))
}

fn allowed_origins(origins: &CorsOrigins) -> Result<AllowOrigin> {
    match origins {
        CorsOrigins::Any => Ok(AllowOrigin::from(Any)),
        CorsOrigins::List(list) => {
            let values = list
                .iter()
                .map(|origin| {
                    origin
                        .parse::<HeaderValue>()
                        .map_err(|e| anyhow::anyhow!("Invalid CORS origin '{}': {}", origin, e))
                })
                .collect::<Result<Vec<_>>>()?;
            Ok(AllowOrigin::list(values))
        }
    }
}

#[cfg(test)]
pub(crate) const TEST_API_TOKEN: &str = "test-token";

/// State over an in-memory database, evaluated on 2026-10-16, with user 1 holding [`TEST_API_TOKEN`]
#[cfg(test)]
pub(crate) async fn create_test_state() -> AppState {
    use crate::domain::FixedClock;

    let db = DbConnection::init_test().await.expect("Failed to create test database");
    let today = chrono::NaiveDate::from_ymd_opt(2026, 10, 16).expect("valid date");
    build_state(db, Arc::new(FixedClock(today)), &[(1, TEST_API_TOKEN.to_string())])
        .await
        .expect("Failed to build test state")
}
