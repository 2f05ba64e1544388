//! Calculation result models.
//!
//! This module contains the output types of wage calculation: the
//! [`WageResult`] amounts, the per-step [`AuditStep`] trail, and the
//! combined [`WageBreakdown`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Gross wage with its statutory deductions, all in won.
///
/// `net_wage` is always derived by subtraction, so
/// `net_wage + tax + insurance == gross_wage` holds exactly.
///
/// # Example
///
/// ```
/// use shift_wage::models::WageResult;
///
/// let result = WageResult::from_deductions(10_000, 330, 939);
/// assert_eq!(result.net_wage, 8_731);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WageResult {
    /// Pay before any deduction.
    pub gross_wage: i64,
    /// Income tax withheld.
    pub tax: i64,
    /// Combined statutory insurance.
    pub insurance: i64,
    /// Pay after tax and insurance.
    pub net_wage: i64,
}

impl WageResult {
    /// Builds a result, deriving the net wage from the other three amounts.
    pub fn from_deductions(gross_wage: i64, tax: i64, insurance: i64) -> Self {
        Self {
            gross_wage,
            tax,
            insurance,
            net_wage: gross_wage - tax - insurance,
        }
    }

    /// Tax plus insurance.
    pub fn total_deductions(&self) -> i64 {
        self.tax + self.insurance
    }
}

/// A single step in the audit trail.
///
/// Records which rule was applied, its inputs and outputs, and a
/// human-readable explanation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// Full outcome of calculating one shift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WageBreakdown {
    /// Minutes between start and end.
    pub total_minutes: i64,
    /// Unpaid break minutes.
    pub break_minutes: i64,
    /// Paid minutes.
    pub paid_minutes: i64,
    /// Holiday multiplier applied to the hourly wage.
    pub multiplier: Decimal,
    /// Whether the work date is a Saturday or Sunday.
    ///
    /// Informational only; weekends carry no premium.
    pub is_weekend: bool,
    /// Gross pay and deductions.
    pub wage: WageResult,
    /// The rules applied, in order.
    pub audit_steps: Vec<AuditStep>,
}
