//! Monthly work statistics.
//!
//! Aggregates a user's work records for one calendar month: days, hours,
//! weekly averages, night hours and wages.

use std::collections::BTreeMap;

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::models::WorkRecord;

/// Hour of day at which night work begins.
pub const NIGHT_START_HOUR: u32 = 22;

/// Hour of day at which night work ends.
pub const NIGHT_END_HOUR: u32 = 6;

/// Aggregated figures for one month.
///
/// Hour figures are rounded to one decimal place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyStatistics {
    /// Calendar year.
    pub year: i32,
    /// Calendar month (1-12).
    pub month: u32,
    /// Number of records in the month.
    pub total_days: usize,
    /// Hours from start to end, breaks included.
    pub total_hours: Decimal,
    /// Sum of stored gross wages in won.
    pub total_wage: i64,
    /// Total hours divided by worked days.
    pub average_hours_per_day: Decimal,
    /// Average hours across the weeks that had any work.
    pub average_weekly_hours: Decimal,
    /// Hours falling between 22:00 and 06:00.
    pub night_shift_hours: Decimal,
    /// Total wage divided by total hours, in won.
    pub average_hourly_wage: i64,
}

/// Computes statistics for the records whose work date is in `year`/`month`.
///
/// Records outside the month are ignored. Weeks are bucketed by
/// `day_of_month / 7`.
///
/// # Arguments
///
/// * `records` - Work records for one user, in any order
/// * `year` - Calendar year to report on
/// * `month` - Calendar month to report on (1-12)
///
/// # Returns
///
/// Returns `MonthlyStatistics` for the month. A month with no records
/// yields zeros throughout.
///
/// # Example
///
/// ```
/// use shift_wage::calculation::monthly_statistics;
/// use shift_wage::models::{BreakSetting, ShiftInterval, WorkRecord, parse_clock_time};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let shift = ShiftInterval::from_clock_times(
///     NaiveDate::from_ymd_opt(2025, 3, 12).unwrap(),
///     parse_clock_time("09:00").unwrap(),
///     parse_clock_time("18:00").unwrap(),
///     BreakSetting::Auto,
///     10_000,
/// )
/// .unwrap();
/// let records = vec![WorkRecord::new("user-1", shift, 80_000)];
///
/// let stats = monthly_statistics(&records, 2025, 3);
/// assert_eq!(stats.total_days, 1);
/// assert_eq!(stats.total_hours, Decimal::from(9));
/// assert_eq!(stats.total_wage, 80_000);
/// ```
pub fn monthly_statistics(records: &[WorkRecord], year: i32, month: u32) -> MonthlyStatistics {
    let in_month: Vec<&WorkRecord> = records
        .iter()
        .filter(|record| record.date().year() == year && record.date().month() == month)
        .collect();

    let mut total_hours = Decimal::ZERO;
    let mut night_hours = Decimal::ZERO;
    let mut total_wage: i64 = 0;
    let mut weekly_hours: BTreeMap<u32, Decimal> = BTreeMap::new();

    for record in &in_month {
        let hours = record.shift.total_hours();
        total_hours += hours;
        total_wage += record.gross_wage;
        night_hours += night_shift_hours(record.shift.start_time, record.shift.end_time);
        *weekly_hours.entry(record.date().day() / 7).or_insert(Decimal::ZERO) += hours;
    }

    let total_days = in_month.len();
    let average_hours_per_day = if total_days == 0 {
        Decimal::ZERO
    } else {
        total_hours / Decimal::from(total_days)
    };
    let average_weekly_hours = if weekly_hours.is_empty() {
        Decimal::ZERO
    } else {
        weekly_hours.values().copied().sum::<Decimal>() / Decimal::from(weekly_hours.len())
    };
    let average_hourly_wage = if total_hours.is_zero() {
        0
    } else {
        (Decimal::from(total_wage) / total_hours)
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_i64()
            .unwrap_or(0)
    };

    MonthlyStatistics {
        year,
        month,
        total_days,
        total_hours: one_decimal(total_hours),
        total_wage,
        average_hours_per_day: one_decimal(average_hours_per_day),
        average_weekly_hours: one_decimal(average_weekly_hours),
        night_shift_hours: one_decimal(night_hours),
        average_hourly_wage,
    }
}

/// Hours of `start..end` that fall inside the night window running from
/// 22:00 on `start`'s day to 06:00 the next day.
///
/// Only that one window is considered: hours before 06:00 on the start day
/// are not night hours.
pub fn night_shift_hours(start: NaiveDateTime, end: NaiveDateTime) -> Decimal {
    let minutes = overlap_minutes(start, end, night_window(start.date()));
    Decimal::from(minutes) / Decimal::from(60)
}

fn night_window(day: NaiveDate) -> (NaiveDateTime, NaiveDateTime) {
    let begin = NaiveTime::from_hms_opt(NIGHT_START_HOUR, 0, 0).unwrap_or(NaiveTime::MIN);
    let finish = NaiveTime::from_hms_opt(NIGHT_END_HOUR, 0, 0).unwrap_or(NaiveTime::MIN);
    (
        day.and_time(begin),
        (day + Duration::days(1)).and_time(finish),
    )
}

fn overlap_minutes(
    start: NaiveDateTime,
    end: NaiveDateTime,
    (window_start, window_end): (NaiveDateTime, NaiveDateTime),
) -> i64 {
    let from = start.max(window_start);
    let to = end.min(window_end);
    if to > from { (to - from).num_minutes() } else { 0 }
}

fn one_decimal(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BreakSetting, ShiftInterval, parse_clock_time};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_record(date: &str, start: &str, end: &str, gross_wage: i64) -> WorkRecord {
        let shift = ShiftInterval::from_clock_times(
            NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            parse_clock_time(start).unwrap(),
            parse_clock_time(end).unwrap(),
            BreakSetting::Auto,
            10_000,
        )
        .unwrap();
        WorkRecord::new("user-1", shift, gross_wage)
    }

    fn make_datetime(value: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M").unwrap()
    }

    #[test]
    fn test_empty_month() {
        let stats = monthly_statistics(&[], 2025, 3);
        assert_eq!(stats.total_days, 0);
        assert_eq!(stats.total_hours, Decimal::ZERO);
        assert_eq!(stats.average_hours_per_day, Decimal::ZERO);
        assert_eq!(stats.average_weekly_hours, Decimal::ZERO);
        assert_eq!(stats.average_hourly_wage, 0);
    }

    #[test]
    fn test_records_outside_month_are_ignored() {
        let records = vec![
            make_record("2025-02-28", "09:00", "18:00", 80_000),
            make_record("2025-03-03", "09:00", "13:00", 35_000),
            make_record("2024-03-03", "09:00", "18:00", 80_000),
        ];
        let stats = monthly_statistics(&records, 2025, 3);
        assert_eq!(stats.total_days, 1);
        assert_eq!(stats.total_hours, dec("4"));
        assert_eq!(stats.total_wage, 35_000);
    }

    #[test]
    fn test_totals_and_averages() {
        let records = vec![
            make_record("2025-03-03", "09:00", "18:00", 80_000), // bucket 0
            make_record("2025-03-04", "09:00", "13:00", 35_000), // bucket 0
            make_record("2025-03-10", "10:00", "15:30", 50_000), // bucket 1
        ];
        let stats = monthly_statistics(&records, 2025, 3);

        assert_eq!(stats.total_days, 3);
        assert_eq!(stats.total_hours, dec("18.5"));
        assert_eq!(stats.total_wage, 165_000);
        // 18.5 / 3 = 6.1666..
        assert_eq!(stats.average_hours_per_day, dec("6.2"));
        // (13 + 5.5) / 2 = 9.25
        assert_eq!(stats.average_weekly_hours, dec("9.3"));
        // 165000 / 18.5 = 8918.9
        assert_eq!(stats.average_hourly_wage, 8_919);
    }

    #[test]
    fn test_night_hours_for_overnight_shift() {
        let hours = night_shift_hours(
            make_datetime("2025-03-14 20:00"),
            make_datetime("2025-03-15 08:00"),
        );
        assert_eq!(hours, dec("8"));
    }

    #[test]
    fn test_night_hours_for_day_shift() {
        let hours = night_shift_hours(
            make_datetime("2025-03-14 09:00"),
            make_datetime("2025-03-14 18:00"),
        );
        assert_eq!(hours, Decimal::ZERO);
    }

    #[test]
    fn test_night_hours_for_shift_starting_after_midnight() {
        let hours = night_shift_hours(
            make_datetime("2025-03-14 02:00"),
            make_datetime("2025-03-14 10:00"),
        );
        assert_eq!(hours, Decimal::ZERO);
    }

    #[test]
    fn test_monthly_night_hours_exclude_early_morning_start() {
        let records = vec![make_record("2025-03-14", "02:00", "10:00", 80_000)];
        let stats = monthly_statistics(&records, 2025, 3);
        assert_eq!(stats.total_hours, dec("8"));
        assert_eq!(stats.night_shift_hours, Decimal::ZERO);
    }

    #[test]
    fn test_night_hours_stop_at_six() {
        let hours = night_shift_hours(
            make_datetime("2025-03-14 23:00"),
            make_datetime("2025-03-15 09:00"),
        );
        assert_eq!(hours, dec("7"));
    }

    #[test]
    fn test_night_hours_partial_evening() {
        let hours = night_shift_hours(
            make_datetime("2025-03-14 18:00"),
            make_datetime("2025-03-14 23:30"),
        );
        assert_eq!(hours, dec("1.5"));
    }

    #[test]
    fn test_monthly_night_hours() {
        let records = vec![make_record("2025-03-14", "23:00", "01:00", 20_000)];
        let stats = monthly_statistics(&records, 2025, 3);
        assert_eq!(stats.night_shift_hours, dec("2"));
    }
}
