use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request body for the savings goal calculator.
///
/// Amount fields are kept as raw JSON values so that both `"10000.00"` and
/// `10000.00` are accepted and parsed into an exact decimal by the backend.
/// Anything else (booleans, objects, malformed strings) is reported as a
/// format error rather than rejected by the JSON extractor.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SavingsGoalRequest {
    /// Goal amount, must be strictly positive
    #[serde(default)]
    pub target_amount: Option<Value>,
    /// Target date in `YYYY-MM-DD` format, must be after today
    #[serde(default)]
    pub target_date: Option<Value>,
    /// Amount already saved, defaults to zero
    #[serde(default)]
    pub current_savings: Option<Value>,
}

/// Result of a savings goal calculation.
///
/// Every decimal value is serialized as a string with two fractional digits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsGoalResponse {
    pub target_amount: String,
    pub current_savings: String,
    /// Target date echoed back as `YYYY-MM-DD`
    pub target_date: String,
    pub amount_to_save: String,
    pub months_remaining: u32,
    pub required_monthly_savings: String,
    /// Informational message, present only when the goal is already reached
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Error body returned by every endpoint on failure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable description of the violated constraint
    pub message: String,
    /// Stable machine-readable error code
    pub code: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: code.into(),
        }
    }
}

/// A single frequently asked question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaqItem {
    pub id: u32,
    pub question: String,
    pub answer: String,
}

/// Contact form submitted to support
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ContactRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactResponse {
    pub success: bool,
    pub message: String,
    /// ID of the stored support request
    pub request_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_savings_goal_request_accepts_strings_and_numbers() {
        let request: SavingsGoalRequest = serde_json::from_value(json!({
            "target_amount": "10000.00",
            "target_date": "2030-01-01",
            "current_savings": 250
        }))
        .unwrap();

        assert_eq!(request.target_amount, Some(json!("10000.00")));
        assert_eq!(request.target_date, Some(json!("2030-01-01")));
        assert_eq!(request.current_savings, Some(json!(250)));
    }

    #[test]
    fn test_savings_goal_request_missing_fields_default_to_none() {
        let request: SavingsGoalRequest = serde_json::from_value(json!({})).unwrap();
        assert_eq!(request, SavingsGoalRequest::default());
    }

    #[test]
    fn test_savings_goal_response_omits_absent_message() {
        let response = SavingsGoalResponse {
            target_amount: "100.00".to_string(),
            current_savings: "0.00".to_string(),
            target_date: "2030-01-01".to_string(),
            amount_to_save: "100.00".to_string(),
            months_remaining: 3,
            required_monthly_savings: "33.34".to_string(),
            message: None,
        };

        let value = serde_json::to_value(&response).unwrap();
        assert!(value.get("message").is_none());
        assert_eq!(value["required_monthly_savings"], "33.34");
        assert_eq!(value["months_remaining"], 3);
    }
}
