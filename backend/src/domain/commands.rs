//! Domain-level command and result types.
//!
//! These structs are used by services inside the domain layer and are not
//! exposed over the public API. The REST layer maps the DTOs defined in the
//! `shared` crate to these internal types.

pub mod calculator {
    use crate::domain::models::savings_goal::{AmountInput, DateInput, SavingsGoalPlan};

    /// Input for a savings goal calculation.
    #[derive(Debug, Clone)]
    pub struct CalculateSavingsGoalCommand {
        /// Caller identity, used for operation logging only
        pub user_id: Option<i64>,
        pub target_amount: AmountInput,
        pub target_date: DateInput,
        /// Defaults to zero when absent
        pub current_savings: Option<AmountInput>,
    }

    /// Result of a savings goal calculation.
    #[derive(Debug, Clone)]
    pub struct CalculateSavingsGoalResult {
        pub plan: SavingsGoalPlan,
    }
}

pub mod support {
    /// Input for submitting the support contact form.
    #[derive(Debug, Clone)]
    pub struct SubmitContactCommand {
        pub name: String,
        pub email: String,
        pub subject: String,
        pub message: String,
    }

    /// Result of submitting the support contact form.
    #[derive(Debug, Clone)]
    pub struct SubmitContactResult {
        pub request_id: String,
        pub success_message: String,
    }
}
