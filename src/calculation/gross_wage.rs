//! Gross wage calculation.
//!
//! Converts a validated [`ShiftInterval`] and a holiday multiplier into a
//! whole-won gross wage.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{EngineError, EngineResult};
use crate::models::ShiftInterval;

/// Computes the gross wage of a shift in won.
///
/// `round(paid_minutes / 60 * hourly_wage * multiplier)`, rounding half up.
/// The shift is re-validated first, so a break longer than the shift or a
/// negative wage is reported instead of producing a negative amount.
///
/// # Arguments
///
/// * `shift` - The shift to price, with its break already resolved
/// * `multiplier` - The wage multiplier for the shift's work date
///
/// # Returns
///
/// Returns the gross wage in whole won, or `InvalidShift` / `InvalidWage`
/// when the shift fails validation and `CalculationError` for a negative
/// multiplier or an overflow.
///
/// # Example
///
/// ```
/// use shift_wage::calculation::compute_gross;
/// use shift_wage::models::{BreakSetting, ShiftInterval, parse_clock_time};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let shift = ShiftInterval::from_clock_times(
///     NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
///     parse_clock_time("09:00").unwrap(),
///     parse_clock_time("18:00").unwrap(),
///     BreakSetting::Auto,
///     10_000,
/// )
/// .unwrap();
///
/// assert_eq!(compute_gross(&shift, Decimal::new(25, 1)).unwrap(), 200_000);
/// ```
pub fn compute_gross(shift: &ShiftInterval, multiplier: Decimal) -> EngineResult<i64> {
    shift.validate()?;

    if multiplier.is_sign_negative() {
        return Err(EngineError::CalculationError {
            message: format!("multiplier must not be negative, got {}", multiplier),
        });
    }

    // Multiply before dividing so whole-minute shifts stay exact.
    let amount = Decimal::from(shift.paid_minutes())
        .checked_mul(Decimal::from(shift.hourly_wage))
        .and_then(|value| value.checked_mul(multiplier))
        .map(|value| value / Decimal::from(60))
        .ok_or_else(|| EngineError::CalculationError {
            message: "gross wage overflowed".to_string(),
        })?;

    amount
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .ok_or_else(|| EngineError::CalculationError {
            message: format!("gross wage {} does not fit in i64", amount),
        })
}
