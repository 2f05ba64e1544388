//! Full wage calculation for a single shift.
//!
//! Composes the holiday multiplier, gross wage and deduction steps and
//! records each one as an [`AuditStep`].

use tracing::debug;

use crate::error::EngineResult;
use crate::models::{AuditStep, HolidayRecord, ShiftInterval, WageBreakdown};

use super::{compute_deductions, compute_gross, encode_date, get_day_type, is_weekend, wage_multiplier};

/// Calculates gross pay, deductions and net pay for one shift.
///
/// The multiplier is resolved from `records` for the shift's nominal work
/// date. An empty `records` slice means no known holidays.
///
/// # Arguments
///
/// * `shift` - The validated shift to calculate pay for
/// * `records` - Holiday records covering the shift's work date
///
/// # Returns
///
/// Returns a `WageBreakdown` with the minutes, multiplier, wage figures and
/// one audit step per stage: multiplier, gross wage and deductions.
///
/// # Example
///
/// ```
/// use shift_wage::calculation::calculate_shift_wage;
/// use shift_wage::models::{BreakSetting, HolidayRecord, ShiftInterval, parse_clock_time};
/// use chrono::NaiveDate;
///
/// let records = vec![HolidayRecord::new(20250101, "New Year's Day", true)];
/// let shift = ShiftInterval::from_clock_times(
///     NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
///     parse_clock_time("09:00").unwrap(),
///     parse_clock_time("18:00").unwrap(),
///     BreakSetting::Auto,
///     10_000,
/// )
/// .unwrap();
///
/// let breakdown = calculate_shift_wage(&shift, &records).unwrap();
/// assert_eq!(breakdown.wage.gross_wage, 200_000);
/// assert_eq!(breakdown.wage.net_wage, 174_620);
/// assert_eq!(breakdown.audit_steps.len(), 3);
/// ```
pub fn calculate_shift_wage(
    shift: &ShiftInterval,
    records: &[HolidayRecord],
) -> EngineResult<WageBreakdown> {
    let day_type = get_day_type(shift.work_date, records);
    let multiplier = wage_multiplier(shift.work_date, records);

    let multiplier_step = AuditStep {
        step_number: 1,
        rule_id: "wage_multiplier".to_string(),
        rule_name: "Holiday Wage Multiplier".to_string(),
        input: serde_json::json!({
            "work_date": shift.work_date.to_string(),
            "date_code": encode_date(shift.work_date),
            "holiday_records": records.len()
        }),
        output: serde_json::json!({
            "day_type": day_type,
            "multiplier": multiplier.normalize().to_string()
        }),
        reasoning: format!("{} pays {}x", day_type, multiplier.normalize()),
    };

    let gross_wage = compute_gross(shift, multiplier)?;

    let gross_step = AuditStep {
        step_number: 2,
        rule_id: "gross_wage".to_string(),
        rule_name: "Gross Wage".to_string(),
        input: serde_json::json!({
            "total_minutes": shift.total_minutes(),
            "break_minutes": shift.break_minutes,
            "hourly_wage": shift.hourly_wage,
            "multiplier": multiplier.normalize().to_string()
        }),
        output: serde_json::json!({
            "paid_minutes": shift.paid_minutes(),
            "gross_wage": gross_wage
        }),
        reasoning: format!(
            "{}h x {} x {} = {}",
            shift.paid_hours().round_dp(4).normalize(),
            shift.hourly_wage,
            multiplier.normalize(),
            gross_wage
        ),
    };

    let wage = compute_deductions(gross_wage)?;

    let deduction_step = AuditStep {
        step_number: 3,
        rule_id: "statutory_deductions".to_string(),
        rule_name: "Statutory Deductions".to_string(),
        input: serde_json::json!({ "gross_wage": gross_wage }),
        output: serde_json::json!({
            "tax": wage.tax,
            "insurance": wage.insurance,
            "net_wage": wage.net_wage
        }),
        reasoning: format!(
            "{} - {} tax - {} insurance = {}",
            gross_wage, wage.tax, wage.insurance, wage.net_wage
        ),
    };

    debug!(
        work_date = %shift.work_date,
        multiplier = %multiplier,
        gross_wage,
        net_wage = wage.net_wage,
        "Shift wage calculated"
    );

    Ok(WageBreakdown {
        total_minutes: shift.total_minutes(),
        break_minutes: shift.break_minutes,
        paid_minutes: shift.paid_minutes(),
        multiplier,
        is_weekend: is_weekend(shift.work_date),
        wage,
        audit_steps: vec![multiplier_step, gross_step, deduction_step],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use crate::models::{BreakSetting, parse_clock_time};
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn make_shift(date: &str, start: &str, end: &str, break_setting: BreakSetting) -> ShiftInterval {
        ShiftInterval::from_clock_times(
            NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            parse_clock_time(start).unwrap(),
            parse_clock_time(end).unwrap(),
            break_setting,
            10_000,
        )
        .unwrap()
    }

    #[test]
    fn test_holiday_end_to_end() {
        let records = vec![HolidayRecord::new(20250101, "New Year's Day", true)];
        let shift = make_shift("2025-01-01", "09:00", "18:00", BreakSetting::Auto);

        let breakdown = calculate_shift_wage(&shift, &records).unwrap();

        assert_eq!(breakdown.total_minutes, 540);
        assert_eq!(breakdown.break_minutes, 60);
        assert_eq!(breakdown.paid_minutes, 480);
        assert_eq!(breakdown.multiplier, Decimal::new(25, 1));
        assert_eq!(breakdown.wage.gross_wage, 200_000);
        assert_eq!(breakdown.wage.tax, 6_600);
        assert_eq!(breakdown.wage.insurance, 18_780);
        assert_eq!(breakdown.wage.net_wage, 174_620);
    }

    #[test]
    fn test_saturday_without_holiday_pays_standard_rate() {
        let shift = make_shift("2025-03-08", "09:00", "18:00", BreakSetting::Auto);
        let breakdown = calculate_shift_wage(&shift, &[]).unwrap();

        assert!(breakdown.is_weekend);
        assert_eq!(breakdown.multiplier, Decimal::ONE);
        assert_eq!(breakdown.wage.gross_wage, 80_000);
    }

    #[test]
    fn test_overnight_uses_start_date_for_multiplier() {
        // Holiday falls on the following day only
        let records = vec![HolidayRecord::new(20250301, "Independence Movement Day", true)];
        let shift = make_shift("2025-02-28", "22:00", "06:00", BreakSetting::Auto);

        let breakdown = calculate_shift_wage(&shift, &records).unwrap();
        assert_eq!(breakdown.multiplier, Decimal::ONE);
        assert_eq!(breakdown.paid_minutes, 420);
        assert_eq!(breakdown.wage.gross_wage, 70_000);
    }

    #[test]
    fn test_audit_trail_order() {
        let shift = make_shift("2025-03-12", "09:00", "13:00", BreakSetting::Auto);
        let breakdown = calculate_shift_wage(&shift, &[]).unwrap();

        let rule_ids: Vec<&str> = breakdown
            .audit_steps
            .iter()
            .map(|step| step.rule_id.as_str())
            .collect();
        assert_eq!(
            rule_ids,
            vec!["wage_multiplier", "gross_wage", "statutory_deductions"]
        );
        assert_eq!(breakdown.audit_steps[1].output["gross_wage"], 35_000);
        assert_eq!(breakdown.audit_steps[0].output["day_type"], "weekday");
    }

    #[test]
    fn test_invalid_shift_surfaces_error() {
        let mut shift = make_shift("2025-03-12", "09:00", "10:00", BreakSetting::Manual(0));
        shift.hourly_wage = -100;
        assert!(matches!(
            calculate_shift_wage(&shift, &[]),
            Err(EngineError::InvalidWage { .. })
        ));
    }
}
