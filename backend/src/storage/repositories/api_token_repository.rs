use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::Row;

use crate::storage::connection::DbConnection;
use crate::storage::traits::ApiTokenStorage;

/// Repository for bearer token lookups
#[derive(Clone)]
pub struct ApiTokenRepository {
    db: DbConnection,
}

impl ApiTokenRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ApiTokenStorage for ApiTokenRepository {
    async fn store_token(&self, user_id: i64, token: &str) -> Result<()> {
        sqlx::query(
            r#"
            INSERT OR REPLACE INTO api_tokens (token, user_id, created_at)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(token)
        .bind(user_id)
        .bind(Utc::now().to_rfc3339())
        .execute(self.db.pool())
        .await?;
        Ok(())
    }

    async fn find_user_id(&self, token: &str) -> Result<Option<i64>> {
        let row = sqlx::query("SELECT user_id FROM api_tokens WHERE token = ?")
            .bind(token)
            .fetch_optional(self.db.pool())
            .await?;

        Ok(row.map(|r| r.get("user_id")))
    }
}
