use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Message attached to a plan whose goal is already covered by current savings
pub const GOAL_REACHED_MESSAGE: &str = "Goal already reached or exceeded.";

/// Monetary value as received from a caller, either already parsed or raw text
#[derive(Debug, Clone, PartialEq)]
pub enum AmountInput {
    Decimal(Decimal),
    Text(String),
}

impl From<Decimal> for AmountInput {
    fn from(value: Decimal) -> Self {
        AmountInput::Decimal(value)
    }
}

impl From<&str> for AmountInput {
    fn from(value: &str) -> Self {
        AmountInput::Text(value.to_string())
    }
}

impl From<String> for AmountInput {
    fn from(value: String) -> Self {
        AmountInput::Text(value)
    }
}

/// Calendar date as received from a caller, either already parsed or `YYYY-MM-DD` text
#[derive(Debug, Clone, PartialEq)]
pub enum DateInput {
    Date(NaiveDate),
    Text(String),
}

impl From<NaiveDate> for DateInput {
    fn from(value: NaiveDate) -> Self {
        DateInput::Date(value)
    }
}

impl From<&str> for DateInput {
    fn from(value: &str) -> Self {
        DateInput::Text(value.to_string())
    }
}

impl From<String> for DateInput {
    fn from(value: String) -> Self {
        DateInput::Text(value)
    }
}

/// Which monetary input failed to parse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountField {
    TargetAmount,
    CurrentSavings,
}

impl AmountField {
    pub fn label(&self) -> &'static str {
        match self {
            AmountField::TargetAmount => "target amount",
            AmountField::CurrentSavings => "current savings",
        }
    }
}

/// Monthly savings plan for reaching a goal by a target date.
///
/// All amounts carry exactly two fractional digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavingsGoalPlan {
    pub target_amount: Decimal,
    pub current_savings: Decimal,
    pub target_date: NaiveDate,
    pub amount_to_save: Decimal,
    /// Zero only when the goal is already reached
    pub months_remaining: u32,
    pub required_monthly_savings: Decimal,
    pub message: Option<String>,
}

impl SavingsGoalPlan {
    pub fn is_goal_reached(&self) -> bool {
        self.months_remaining == 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalculatorError {
    #[error("Invalid {} format.", .field.label())]
    InvalidAmountFormat { field: AmountField },
    #[error("Invalid target date format. Use YYYY-MM-DD.")]
    InvalidDateFormat,
    #[error("Target amount must be positive.")]
    NonPositiveTargetAmount,
    #[error("Current savings cannot be negative.")]
    NegativeCurrentSavings,
    #[error("Target date must be in the future.")]
    TargetDateNotInFuture,
    /// Month counting produced a non-positive value after validation passed
    #[error("Calculation error: non-positive months remaining.")]
    NonPositiveMonthsRemaining { months: i64 },
}

impl CalculatorError {
    /// True for errors caused by caller input, false for internal defects
    pub fn is_client_error(&self) -> bool {
        !matches!(self, CalculatorError::NonPositiveMonthsRemaining { .. })
    }

    pub fn code(&self) -> &'static str {
        match self {
            CalculatorError::InvalidAmountFormat { .. } => "INVALID_AMOUNT_FORMAT",
            CalculatorError::InvalidDateFormat => "INVALID_DATE_FORMAT",
            CalculatorError::NonPositiveTargetAmount => "NON_POSITIVE_TARGET_AMOUNT",
            CalculatorError::NegativeCurrentSavings => "NEGATIVE_CURRENT_SAVINGS",
            CalculatorError::TargetDateNotInFuture => "TARGET_DATE_NOT_IN_FUTURE",
            CalculatorError::NonPositiveMonthsRemaining { .. } => "INTERNAL_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_format_messages_name_the_field() {
        let target = CalculatorError::InvalidAmountFormat { field: AmountField::TargetAmount };
        let savings = CalculatorError::InvalidAmountFormat { field: AmountField::CurrentSavings };

        assert_eq!(target.to_string(), "Invalid target amount format.");
        assert_eq!(savings.to_string(), "Invalid current savings format.");
    }

    #[test]
    fn test_only_month_count_failure_is_internal() {
        assert!(CalculatorError::TargetDateNotInFuture.is_client_error());
        assert!(CalculatorError::InvalidDateFormat.is_client_error());
        assert!(!CalculatorError::NonPositiveMonthsRemaining { months: 0 }.is_client_error());
        assert_eq!(CalculatorError::NonPositiveMonthsRemaining { months: -1 }.code(), "INTERNAL_ERROR");
    }
}
