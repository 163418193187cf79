use serde_json::Value;
use shared::{SavingsGoalRequest, SavingsGoalResponse};

use crate::domain::commands::calculator::CalculateSavingsGoalCommand;
use crate::domain::models::savings_goal::{AmountInput, DateInput, SavingsGoalPlan};

pub struct CalculatorMapper;

impl CalculatorMapper {
    /// Convert the request DTO to a domain command.
    ///
    /// Fails with the name of the first required field that is absent or null.
    pub fn to_command(
        request: SavingsGoalRequest,
        user_id: Option<i64>,
    ) -> Result<CalculateSavingsGoalCommand, &'static str> {
        let target_amount = request.target_amount.ok_or("target_amount")?;
        let target_date = request.target_date.ok_or("target_date")?;

        Ok(CalculateSavingsGoalCommand {
            user_id,
            target_amount: Self::amount_input(target_amount),
            target_date: Self::date_input(target_date),
            current_savings: request.current_savings.map(Self::amount_input),
        })
    }

    /// Convert a domain plan to the response DTO
    pub fn to_response(plan: SavingsGoalPlan) -> SavingsGoalResponse {
        SavingsGoalResponse {
            target_amount: plan.target_amount.to_string(),
            current_savings: plan.current_savings.to_string(),
            target_date: plan.target_date.format("%Y-%m-%d").to_string(),
            amount_to_save: plan.amount_to_save.to_string(),
            months_remaining: plan.months_remaining,
            required_monthly_savings: plan.required_monthly_savings.to_string(),
            message: plan.message,
        }
    }

    // Numbers keep their source text (serde_json `arbitrary_precision`), never an f64
    fn amount_input(value: Value) -> AmountInput {
        match value {
            Value::String(text) => AmountInput::Text(text),
            other => AmountInput::Text(other.to_string()),
        }
    }

    fn date_input(value: Value) -> DateInput {
        match value {
            Value::String(text) => DateInput::Text(text),
            other => DateInput::Text(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_to_command_keeps_raw_inputs() {
        let request = SavingsGoalRequest {
            target_amount: Some(json!("10000.00")),
            target_date: Some(json!("2030-01-01")),
            current_savings: Some(json!(250.5)),
        };

        let command = CalculatorMapper::to_command(request, Some(7)).unwrap();

        assert_eq!(command.user_id, Some(7));
        assert_eq!(command.target_amount, AmountInput::Text("10000.00".to_string()));
        assert_eq!(command.target_date, DateInput::Text("2030-01-01".to_string()));
        assert_eq!(command.current_savings, Some(AmountInput::Text("250.5".to_string())));
    }

    #[test]
    fn test_to_command_reports_missing_fields() {
        let request = SavingsGoalRequest {
            target_amount: None,
            target_date: Some(json!("2030-01-01")),
            current_savings: None,
        };
        assert_eq!(CalculatorMapper::to_command(request, None).unwrap_err(), "target_amount");

        let request = SavingsGoalRequest {
            target_amount: Some(json!(100)),
            ..Default::default()
        };
        assert_eq!(CalculatorMapper::to_command(request, None).unwrap_err(), "target_date");
    }

    #[test]
    fn test_numeric_amounts_keep_their_source_digits() {
        let request: SavingsGoalRequest = serde_json::from_str(
            r#"{"target_amount": 12345678901234567.89, "target_date": "2027-10-16", "current_savings": 0.10}"#,
        )
        .unwrap();

        let command = CalculatorMapper::to_command(request, None).unwrap();

        assert_eq!(command.target_amount, AmountInput::Text("12345678901234567.89".to_string()));
        assert_eq!(command.current_savings, Some(AmountInput::Text("0.10".to_string())));
    }

    #[test]
    fn test_non_text_values_become_unparseable_text() {
        let request = SavingsGoalRequest {
            target_amount: Some(json!(true)),
            target_date: Some(json!(20300101)),
            current_savings: None,
        };

        let command = CalculatorMapper::to_command(request, None).unwrap();

        assert_eq!(command.target_amount, AmountInput::Text("true".to_string()));
        assert_eq!(command.target_date, DateInput::Text("20300101".to_string()));
        assert!(command.current_savings.is_none());
    }

    #[test]
    fn test_to_response_formats_values() {
        let plan = SavingsGoalPlan {
            target_amount: dec!(1000.00),
            current_savings: dec!(0.00),
            target_date: NaiveDate::from_ymd_opt(2027, 1, 16).unwrap(),
            amount_to_save: dec!(1000.00),
            months_remaining: 3,
            required_monthly_savings: dec!(333.34),
            message: None,
        };

        let response = CalculatorMapper::to_response(plan);

        assert_eq!(response.target_amount, "1000.00");
        assert_eq!(response.current_savings, "0.00");
        assert_eq!(response.target_date, "2027-01-16");
        assert_eq!(response.required_monthly_savings, "333.34");
        assert_eq!(response.months_remaining, 3);
        assert!(response.message.is_none());
    }
}
