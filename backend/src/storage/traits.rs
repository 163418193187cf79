//! # Storage Traits
//!
//! Storage abstractions used by the domain layer, so services can be backed
//! by any implementation without modification.

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::models::support_request::SupportRequest;

/// Lookup of bearer tokens issued by the external auth service
#[async_trait]
pub trait ApiTokenStorage: Send + Sync {
    /// Store a token for a user, replacing any previous owner of the same token
    async fn store_token(&self, user_id: i64, token: &str) -> Result<()>;

    /// Resolve a token to the user it was issued to
    async fn find_user_id(&self, token: &str) -> Result<Option<i64>>;
}

/// Persistence for support contact form submissions
#[async_trait]
pub trait SupportRequestStorage: Send + Sync {
    async fn store_request(&self, request: &SupportRequest) -> Result<()>;
}
