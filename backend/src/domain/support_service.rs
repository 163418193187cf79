//! Support service domain logic.
//!
//! Serves the static FAQ and accepts contact form submissions, which are
//! validated and stored for the support team.

use chrono::Utc;
use std::sync::Arc;
use tracing::info;

use crate::domain::commands::support::{SubmitContactCommand, SubmitContactResult};
use crate::domain::models::support_request::{SupportError, SupportRequest};
use crate::storage::SupportRequestStorage;
use shared::FaqItem;

/// Minimum length of a contact message after trimming
pub const MIN_CONTACT_MESSAGE_LEN: usize = 10;

const FAQ_ENTRIES: &[(u32, &str, &str)] = &[
    (
        1,
        "How do I add a new transaction (income or expense)?",
        "Open the 'Transactions' section and click 'Add'. Choose the type (income or expense), \
         a category, enter the amount, the date and an optional description, then click 'Save'.",
    ),
    (
        2,
        "How do I create a new category?",
        "In the 'Categories' section click 'Create'. Enter the category name, choose its type \
         (income or expense) and click 'Save'. The name must be unique for the chosen type.",
    ),
    (
        3,
        "How do I set up a monthly budget?",
        "In the 'Budgets' section click 'Create'. Choose the 'Monthly' period, set the start and \
         end dates of the month and optionally a target amount. You can then track spending \
         against that budget.",
    ),
    (
        4,
        "How do I work out how much to save for a financial goal?",
        "Open 'Calculators' and choose the 'Savings calculator'. Enter the target amount, the \
         date you want to reach it by and your current savings. The required monthly amount is \
         calculated for you.",
    ),
    (
        5,
        "How do I see spending statistics by category?",
        "In the 'Reports' section choose 'Expenses by category', pick the period you are \
         interested in and click 'Generate'. You get a breakdown of spending per category with \
         percentages.",
    ),
];

/// Service for FAQ lookups and support contact requests
#[derive(Clone)]
pub struct SupportService {
    request_storage: Arc<dyn SupportRequestStorage>,
}

impl SupportService {
    pub fn new(request_storage: Arc<dyn SupportRequestStorage>) -> Self {
        Self { request_storage }
    }

    /// All FAQ entries, ordered by ID
    pub fn list_faq(&self) -> Vec<FaqItem> {
        FAQ_ENTRIES.iter().map(|entry| to_faq_item(*entry)).collect()
    }

    pub fn get_faq_item(&self, id: u32) -> Option<FaqItem> {
        FAQ_ENTRIES
            .iter()
            .find(|(entry_id, _, _)| *entry_id == id)
            .map(|entry| to_faq_item(*entry))
    }

    /// Validate and store a contact form submission
    pub async fn submit_contact(&self, command: SubmitContactCommand) -> Result<SubmitContactResult, SupportError> {
        let name = command.name.trim();
        let email = command.email.trim();
        let subject = command.subject.trim();
        let message = command.message.trim();

        if !email.contains('@') {
            return Err(SupportError::InvalidEmail);
        }
        if message.chars().count() < MIN_CONTACT_MESSAGE_LEN {
            return Err(SupportError::MessageTooShort {
                min: MIN_CONTACT_MESSAGE_LEN,
            });
        }
        if name.is_empty() {
            return Err(SupportError::MissingField("Name"));
        }
        if subject.is_empty() {
            return Err(SupportError::MissingField("Subject"));
        }

        let request = SupportRequest {
            id: SupportRequest::generate_id(),
            name: name.to_string(),
            email: email.to_string(),
            subject: subject.to_string(),
            message: message.to_string(),
            created_at: Utc::now().to_rfc3339(),
        };

        self.request_storage.store_request(&request).await?;

        info!(
            operation = "create",
            resource = "support_request",
            request_id = %request.id,
            email = %request.email,
            subject = %request.subject,
            "CREATE support_request"
        );

        Ok(SubmitContactResult {
            request_id: request.id,
            success_message: "Your message has been sent. We will reply to the email address provided."
                .to_string(),
        })
    }
}

fn to_faq_item((id, question, answer): (u32, &str, &str)) -> FaqItem {
    FaqItem {
        id,
        question: question.to_string(),
        answer: answer.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{DbConnection, SupportRequestRepository};

    async fn create_test_service() -> (SupportService, Arc<SupportRequestRepository>) {
        let db = DbConnection::init_test().await.expect("Failed to create test database");
        let repo = Arc::new(SupportRequestRepository::new(db));
        (SupportService::new(repo.clone()), repo)
    }

    fn valid_command() -> SubmitContactCommand {
        SubmitContactCommand {
            name: "Ivan Ivanov".to_string(),
            email: "user@example.com".to_string(),
            subject: "Categories".to_string(),
            message: "How do I add my own category?".to_string(),
        }
    }

    #[tokio::test]
    async fn test_faq_listing_and_lookup() {
        let (service, _) = create_test_service().await;

        let faq = service.list_faq();
        assert_eq!(faq.len(), 5);
        assert!(faq.windows(2).all(|pair| pair[0].id < pair[1].id));

        let item = service.get_faq_item(4).unwrap();
        assert!(item.question.contains("save"));
        assert!(service.get_faq_item(99).is_none());
    }

    #[tokio::test]
    async fn test_submit_contact_stores_request() {
        let (service, repo) = create_test_service().await;

        let result = service.submit_contact(valid_command()).await.unwrap();
        assert!(result.request_id.starts_with("support::"));

        let stored = repo.get_request(&result.request_id).await.unwrap().unwrap();
        assert_eq!(stored.email, "user@example.com");
        assert_eq!(stored.subject, "Categories");
    }

    #[tokio::test]
    async fn test_submit_contact_trims_fields() {
        let (service, repo) = create_test_service().await;
        let mut command = valid_command();
        command.name = "  Ivan  ".to_string();
        command.email = " user@example.com ".to_string();

        let result = service.submit_contact(command).await.unwrap();

        let stored = repo.get_request(&result.request_id).await.unwrap().unwrap();
        assert_eq!(stored.name, "Ivan");
        assert_eq!(stored.email, "user@example.com");
    }

    #[tokio::test]
    async fn test_submit_contact_validation() {
        let (service, _) = create_test_service().await;

        let mut command = valid_command();
        command.email = "not-an-email".to_string();
        let err = service.submit_contact(command).await.unwrap_err();
        assert!(matches!(err, SupportError::InvalidEmail));
        assert_eq!(err.code(), "INVALID_EMAIL");

        let mut command = valid_command();
        command.message = "   too short  ".to_string();
        let err = service.submit_contact(command).await.unwrap_err();
        assert!(matches!(err, SupportError::MessageTooShort { min: 10 }));
        assert!(err.is_client_error());

        let mut command = valid_command();
        command.name = "   ".to_string();
        let err = service.submit_contact(command).await.unwrap_err();
        assert_eq!(err.to_string(), "Name is required");

        let mut command = valid_command();
        command.subject = String::new();
        let err = service.submit_contact(command).await.unwrap_err();
        assert_eq!(err.code(), "MISSING_FIELD");
    }

    #[tokio::test]
    async fn test_submit_contact_reports_email_then_message_first() {
        let (service, _) = create_test_service().await;

        let command = SubmitContactCommand {
            name: String::new(),
            email: "nobody".to_string(),
            subject: String::new(),
            message: "short".to_string(),
        };
        let err = service.submit_contact(command).await.unwrap_err();
        assert!(matches!(err, SupportError::InvalidEmail));

        let command = SubmitContactCommand {
            name: String::new(),
            email: "user@example.com".to_string(),
            subject: String::new(),
            message: "short".to_string(),
        };
        let err = service.submit_contact(command).await.unwrap_err();
        assert!(matches!(err, SupportError::MessageTooShort { .. }));
    }
}
