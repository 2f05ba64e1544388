//! Statutory deduction calculation.
//!
//! Flat withholding tax and combined insurance taken from gross pay. Both
//! rates are fixed; a statutory change is a code change.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{EngineError, EngineResult};
use crate::models::WageResult;

/// Withholding tax rate (3.3%).
pub const TAX_RATE: Decimal = Decimal::from_parts(33, 0, 0, false, 3);

/// Combined statutory insurance rate (9.39%).
pub const INSURANCE_RATE: Decimal = Decimal::from_parts(939, 0, 0, false, 4);

/// Computes tax, insurance and net wage from a gross wage.
///
/// Each deduction is floored to whole won and the net wage is the
/// remainder, so the three parts always sum back to `gross_wage`.
///
/// # Arguments
///
/// * `gross_wage` - Gross pay in won, not negative
///
/// # Returns
///
/// Returns a `WageResult` holding gross, tax, insurance and net wage, or
/// `InvalidWage` when `gross_wage` is negative.
///
/// # Example
///
/// ```
/// use shift_wage::calculation::compute_deductions;
///
/// let result = compute_deductions(10_000).unwrap();
/// assert_eq!(result.tax, 330);
/// assert_eq!(result.insurance, 939);
/// assert_eq!(result.net_wage, 8_731);
/// ```
pub fn compute_deductions(gross_wage: i64) -> EngineResult<WageResult> {
    if gross_wage < 0 {
        return Err(EngineError::InvalidWage {
            field: "gross_wage".to_string(),
            message: format!("must not be negative, got {}", gross_wage),
        });
    }

    let tax = floor_share(gross_wage, TAX_RATE)?;
    let insurance = floor_share(gross_wage, INSURANCE_RATE)?;

    Ok(WageResult::from_deductions(gross_wage, tax, insurance))
}

fn floor_share(amount: i64, rate: Decimal) -> EngineResult<i64> {
    (Decimal::from(amount) * rate)
        .floor()
        .to_i64()
        .ok_or_else(|| EngineError::CalculationError {
            message: format!("deduction on {} does not fit in i64", amount),
        })
}
