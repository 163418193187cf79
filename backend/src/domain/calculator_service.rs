//! Savings goal calculator.
//!
//! Computes how much has to be put aside every month to reach a monetary goal
//! by a target date. The core is the pure function [`calculate_required_savings`],
//! which takes the evaluation date explicitly; [`CalculatorService`] supplies
//! "today" from a [`Clock`] and adds operation logging.
//!
//! ## Business Rules
//!
//! - Amounts are exact decimals quantized to cents (half away from zero) and
//!   bounded by [`MAX_AMOUNT`] in magnitude
//! - Target amount must be positive, current savings must not be negative
//! - Target date must be strictly after the evaluation date
//! - A goal covered by current savings short-circuits to a zero plan
//! - Months remaining counts whole calendar months and rounds any leftover days up
//! - The monthly amount is rounded up to the cent so the plan never under-funds

use chrono::{Datelike, Local, Months, NaiveDate};
use rust_decimal::{Decimal, RoundingStrategy};
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::domain::commands::calculator::{CalculateSavingsGoalCommand, CalculateSavingsGoalResult};
use crate::domain::models::savings_goal::{
    AmountField, AmountInput, CalculatorError, DateInput, SavingsGoalPlan, GOAL_REACHED_MESSAGE,
};

/// Largest accepted magnitude for any amount, in whole currency units
pub const MAX_AMOUNT: u64 = 1_000_000_000_000_000_000;

/// Source of the evaluation date
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Reads the local calendar date at call time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always returns the same date
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Service exposing the savings goal calculator to the IO layer
#[derive(Clone)]
pub struct CalculatorService {
    clock: Arc<dyn Clock>,
}

impl Default for CalculatorService {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorService {
    /// Create a calculator evaluated against the system clock
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Calculate the monthly savings needed for a goal, evaluated as of today
    pub fn calculate_savings_goal(
        &self,
        command: CalculateSavingsGoalCommand,
    ) -> Result<CalculateSavingsGoalResult, CalculatorError> {
        let today = self.clock.today();
        info!(
            operation = "calculate",
            resource = "savings_goal",
            user_id = ?command.user_id,
            target_amount = ?command.target_amount,
            target_date = ?command.target_date,
            "CALCULATE savings_goal"
        );

        let outcome = calculate_required_savings(
            &command.target_amount,
            &command.target_date,
            command.current_savings.as_ref(),
            today,
        );

        match outcome {
            Ok(plan) if plan.is_goal_reached() => {
                info!(user_id = ?command.user_id, "Savings goal already reached");
                Ok(CalculateSavingsGoalResult { plan })
            }
            Ok(plan) => {
                info!(
                    months_remaining = plan.months_remaining,
                    required_monthly_savings = %plan.required_monthly_savings,
                    "Savings goal calculated"
                );
                Ok(CalculateSavingsGoalResult { plan })
            }
            Err(e) if e.is_client_error() => {
                warn!(user_id = ?command.user_id, "Rejected savings goal input: {}", e);
                Err(e)
            }
            Err(e) => {
                error!(user_id = ?command.user_id, "Savings goal calculation failed: {:?}", e);
                Err(e)
            }
        }
    }
}

/// Compute the savings plan for reaching `target_amount` by `target_date`.
///
/// Inputs are parsed in order (target amount, current savings, target date)
/// and then range-checked in the same order; the first failure is returned.
/// `current_savings` defaults to zero when absent.
pub fn calculate_required_savings(
    target_amount: &AmountInput,
    target_date: &DateInput,
    current_savings: Option<&AmountInput>,
    today: NaiveDate,
) -> Result<SavingsGoalPlan, CalculatorError> {
    let target_amount = parse_amount(target_amount, AmountField::TargetAmount)?;
    let current_savings = match current_savings {
        Some(input) => parse_amount(input, AmountField::CurrentSavings)?,
        None => to_cents(Decimal::ZERO),
    };
    let target_date = parse_date(target_date)?;

    if target_amount <= Decimal::ZERO {
        return Err(CalculatorError::NonPositiveTargetAmount);
    }
    if current_savings < Decimal::ZERO {
        return Err(CalculatorError::NegativeCurrentSavings);
    }
    if target_date <= today {
        return Err(CalculatorError::TargetDateNotInFuture);
    }

    if current_savings >= target_amount {
        return Ok(SavingsGoalPlan {
            target_amount,
            current_savings,
            target_date,
            amount_to_save: to_cents(Decimal::ZERO),
            months_remaining: 0,
            required_monthly_savings: to_cents(Decimal::ZERO),
            message: Some(GOAL_REACHED_MESSAGE.to_string()),
        });
    }

    let amount_to_save = to_cents(target_amount - current_savings);

    let months = count_months_remaining(today, target_date);
    let months_remaining = match u32::try_from(months) {
        Ok(value) if value > 0 => value,
        _ => return Err(CalculatorError::NonPositiveMonthsRemaining { months }),
    };

    let required_monthly_savings = ceil_to_cents(amount_to_save / Decimal::from(months_remaining));

    Ok(SavingsGoalPlan {
        target_amount,
        current_savings,
        target_date,
        amount_to_save,
        months_remaining,
        required_monthly_savings,
        message: None,
    })
}

/// Number of calendar months to save over between `today` and `target_date`.
///
/// Whole months are the largest `m` with `today + m months <= target_date`,
/// where adding months clamps to the last day of a shorter month. Leftover days
/// count as one more month, as does a target inside the first month. Returns
/// zero when `target_date` is not after `today`.
pub fn count_months_remaining(today: NaiveDate, target_date: NaiveDate) -> i64 {
    if target_date <= today {
        return 0;
    }

    let mut whole_months = i64::from(target_date.year() - today.year()) * 12
        + i64::from(target_date.month())
        - i64::from(today.month());

    if add_months(today, whole_months).is_some_and(|anchor| anchor > target_date) {
        whole_months -= 1;
    }

    let has_remaining_days = add_months(today, whole_months).is_some_and(|anchor| target_date > anchor);

    if has_remaining_days || whole_months == 0 {
        whole_months + 1
    } else {
        whole_months
    }
}

fn add_months(date: NaiveDate, months: i64) -> Option<NaiveDate> {
    let months = u32::try_from(months).ok()?;
    date.checked_add_months(Months::new(months))
}

fn parse_amount(input: &AmountInput, field: AmountField) -> Result<Decimal, CalculatorError> {
    let value = match input {
        AmountInput::Decimal(value) => *value,
        AmountInput::Text(text) => {
            let text = text.trim();
            Decimal::from_str_exact(text)
                .or_else(|_| Decimal::from_scientific(text))
                .map_err(|_| CalculatorError::InvalidAmountFormat { field })?
        }
    };
    let value = to_cents(value);
    // Beyond this bound cents no longer fit in the decimal mantissa
    if value.scale() != 2 || value.abs() > Decimal::from(MAX_AMOUNT) {
        return Err(CalculatorError::InvalidAmountFormat { field });
    }
    Ok(value)
}

fn parse_date(input: &DateInput) -> Result<NaiveDate, CalculatorError> {
    match input {
        DateInput::Date(date) => Ok(*date),
        DateInput::Text(text) => {
            let text = text.trim();
            if text.len() != 10 {
                return Err(CalculatorError::InvalidDateFormat);
            }
            NaiveDate::parse_from_str(text, "%Y-%m-%d").map_err(|_| CalculatorError::InvalidDateFormat)
        }
    }
}

/// Quantize to exactly two fractional digits, rounding half away from zero
fn to_cents(value: Decimal) -> Decimal {
    with_cent_scale(value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
}

/// Round up to the next cent
fn ceil_to_cents(value: Decimal) -> Decimal {
    with_cent_scale(value.round_dp_with_strategy(2, RoundingStrategy::ToPositiveInfinity))
}

fn with_cent_scale(mut value: Decimal) -> Decimal {
    // -0.00 would otherwise survive as a distinct rendering
    if value.is_zero() {
        value.set_sign_positive(true);
    }
    value.rescale(2);
    value
}
