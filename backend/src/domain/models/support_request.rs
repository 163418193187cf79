use serde::{Deserialize, Serialize};

/// A contact form submission stored for the support team
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupportRequest {
    pub id: String,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    /// RFC 3339 timestamp
    pub created_at: String,
}

impl SupportRequest {
    pub fn generate_id() -> String {
        format!("support::{}", uuid::Uuid::new_v4())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SupportError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("Invalid email address")]
    InvalidEmail,
    #[error("Message must contain at least {min} characters")]
    MessageTooShort { min: usize },
    #[error("Failed to store support request: {0}")]
    Storage(#[from] anyhow::Error),
}

impl SupportError {
    pub fn is_client_error(&self) -> bool {
        !matches!(self, SupportError::Storage(_))
    }

    pub fn code(&self) -> &'static str {
        match self {
            SupportError::MissingField(_) => "MISSING_FIELD",
            SupportError::InvalidEmail => "INVALID_EMAIL",
            SupportError::MessageTooShort { .. } => "MESSAGE_TOO_SHORT",
            SupportError::Storage(_) => "INTERNAL_ERROR",
        }
    }
}
