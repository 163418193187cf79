use anyhow::Result;
use async_trait::async_trait;

use crate::domain::models::support_request::SupportRequest;
use crate::storage::connection::DbConnection;
use crate::storage::traits::SupportRequestStorage;

/// Repository for support contact requests
#[derive(Clone)]
pub struct SupportRequestRepository {
    db: DbConnection,
}

impl SupportRequestRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    /// Read back a stored request
    #[cfg(test)]
    pub async fn get_request(&self, request_id: &str) -> Result<Option<SupportRequest>> {
        use sqlx::Row;

        let row = sqlx::query(
            r#"
            SELECT id, name, email, subject, message, created_at
            FROM support_requests
            WHERE id = ?
            "#,
        )
        .bind(request_id)
        .fetch_optional(self.db.pool())
        .await?;

        Ok(row.map(|r| SupportRequest {
            id: r.get("id"),
            name: r.get("name"),
            email: r.get("email"),
            subject: r.get("subject"),
            message: r.get("message"),
            created_at: r.get("created_at"),
        }))
    }
}

#[async_trait]
impl SupportRequestStorage for SupportRequestRepository {
    async fn store_request(&self, request: &SupportRequest) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO support_requests (id, name, email, subject, message, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&request.id)
        .bind(&request.name)
        .bind(&request.email)
        .bind(&request.subject)
        .bind(&request.message)
        .bind(&request.created_at)
        .execute(self.db.pool())
        .await?;
        Ok(())
    }
}
