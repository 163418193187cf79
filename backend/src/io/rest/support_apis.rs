//! # REST API for Support
//!
//! FAQ lookups and the contact form. These endpoints are public.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use tracing::{error, info, warn};

use crate::io::rest::mappers::support_mapper::SupportMapper;
use crate::io::rest::{error_response, internal_error};
use crate::AppState;
use shared::ContactRequest;

/// Create a router for support APIs
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/faq", get(list_faq))
        .route("/faq/:id", get(get_faq_item))
        .route("/contact", post(submit_contact))
}

/// List all FAQ entries
pub async fn list_faq(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/v1/support/faq");

    (StatusCode::OK, Json(state.support_service.list_faq()))
}

pub async fn get_faq_item(
    State(state): State<AppState>,
    id: Result<Path<u32>, PathRejection>,
) -> impl IntoResponse {
    // Non-numeric ids cannot name an entry
    let Ok(Path(id)) = id else {
        info!("GET /api/v1/support/faq - non-numeric id");
        return error_response(StatusCode::NOT_FOUND, "FAQ item not found", "NOT_FOUND");
    };
    info!("GET /api/v1/support/faq/{}", id);

    match state.support_service.get_faq_item(id) {
        Some(item) => (StatusCode::OK, Json(item)).into_response(),
        None => error_response(StatusCode::NOT_FOUND, "FAQ item not found", "NOT_FOUND"),
    }
}

/// Submit the support contact form
pub async fn submit_contact(
    State(state): State<AppState>,
    payload: Result<Json<ContactRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            warn!("Rejected contact body: {}", rejection.body_text());
            return error_response(StatusCode::BAD_REQUEST, rejection.body_text(), "INVALID_REQUEST_BODY");
        }
    };
    info!("POST /api/v1/support/contact - subject: {}", request.subject);

    match state.support_service.submit_contact(SupportMapper::to_command(request)).await {
        Ok(result) => (StatusCode::OK, Json(SupportMapper::to_response(result))).into_response(),
        Err(e) if e.is_client_error() => {
            warn!("Rejected contact request: {}", e);
            error_response(StatusCode::BAD_REQUEST, e.to_string(), e.code())
        }
        Err(e) => {
            error!("Failed to submit contact request: {:?}", e);
            internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_test_state;
    use axum::{
        body::Body,
        http::{header, Method, Request},
    };
    use serde_json::json;
    use shared::{ContactResponse, ErrorResponse, FaqItem};
    use tower::util::ServiceExt; // for `oneshot`

    async fn setup_test_app() -> Router {
        router().with_state(create_test_state().await)
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().method(Method::GET).uri(uri).body(Body::empty()).unwrap()
    }

    fn contact_request(body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri("/contact")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_list_faq() {
        let app = setup_test_app().await;

        let response = app.oneshot(get_request("/faq")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let items: Vec<FaqItem> = serde_json::from_slice(&body).unwrap();
        assert_eq!(items.len(), 5);
        assert_eq!(items[0].id, 1);
    }

    #[tokio::test]
    async fn test_get_faq_item() {
        let app = setup_test_app().await;

        let response = app.clone().oneshot(get_request("/faq/2")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let item: FaqItem = serde_json::from_slice(&body).unwrap();
        assert_eq!(item.id, 2);

        let response = app.oneshot(get_request("/faq/42")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let error: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_get_faq_item_non_numeric_id() {
        let app = setup_test_app().await;

        let response = app.oneshot(get_request("/faq/abc")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let error: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "NOT_FOUND");
        assert_eq!(error.message, "FAQ item not found");
    }

    #[tokio::test]
    async fn test_submit_contact_success() {
        let app = setup_test_app().await;

        let request = contact_request(json!({
            "name": "Ivan",
            "email": "ivan@example.com",
            "subject": "Budgets",
            "message": "How do I set up a weekly budget?"
        }));

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let response_json: ContactResponse = serde_json::from_slice(&body).unwrap();
        assert!(response_json.success);
        assert!(response_json.request_id.starts_with("support::"));
    }

    #[tokio::test]
    async fn test_submit_contact_validation_errors() {
        let cases = vec![
            (json!({ "name": "Ivan", "email": "nope", "subject": "Hi", "message": "long enough message" }), "INVALID_EMAIL"),
            (json!({ "name": "Ivan", "email": "a@b.c", "subject": "Hi", "message": "short" }), "MESSAGE_TOO_SHORT"),
            (json!({ "email": "a@b.c", "subject": "Hi", "message": "long enough message" }), "MISSING_FIELD"),
        ];

        for (body, code) in cases {
            let app = setup_test_app().await;
            let response = app.oneshot(contact_request(body)).await.unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);

            let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
            let error: ErrorResponse = serde_json::from_slice(&body).unwrap();
            assert_eq!(error.code, code);
        }
    }
}
