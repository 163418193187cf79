pub mod api_token_repository;
pub mod support_request_repository;

pub use api_token_repository::ApiTokenRepository;
pub use support_request_repository::SupportRequestRepository;
