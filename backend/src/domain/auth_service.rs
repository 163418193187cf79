use anyhow::Result;
use std::sync::Arc;
use tracing::{debug, info};

use crate::domain::models::auth::AuthenticatedUser;
use crate::storage::ApiTokenStorage;

/// Resolves bearer tokens to users.
///
/// Tokens are issued elsewhere; this service only verifies them against the
/// token store and seeds the store from configuration at startup.
#[derive(Clone)]
pub struct AuthService {
    token_storage: Arc<dyn ApiTokenStorage>,
}

impl AuthService {
    pub fn new(token_storage: Arc<dyn ApiTokenStorage>) -> Self {
        Self { token_storage }
    }

    /// Look up the user a token belongs to
    pub async fn authenticate(&self, token: &str) -> Result<Option<AuthenticatedUser>> {
        let user = self
            .token_storage
            .find_user_id(token)
            .await?
            .map(|user_id| AuthenticatedUser { user_id });

        debug!("Token lookup resolved user: {:?}", user.map(|u| u.user_id));
        Ok(user)
    }

    /// Store the given `(user_id, token)` pairs, returning how many were written
    pub async fn seed_tokens(&self, tokens: &[(i64, String)]) -> Result<usize> {
        for (user_id, token) in tokens {
            self.token_storage.store_token(*user_id, token).await?;
        }
        info!("Seeded {} API tokens", tokens.len());
        Ok(tokens.len())
    }
}
