//! Holiday detection and wage multiplier policy.
//!
//! This module classifies a calendar date against caller-supplied
//! [`HolidayRecord`]s and reports the multiplier applied to hours worked
//! on it. Only flagged holidays carry a premium; weekends are detected but
//! paid at the standard rate.

use chrono::{Datelike, NaiveDate, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::HolidayRecord;

/// Multiplier for hours worked on an official holiday (250%).
pub const HOLIDAY_MULTIPLIER: Decimal = Decimal::from_parts(25, 0, 0, false, 1);

/// Multiplier for every other day, weekends included.
pub const STANDARD_MULTIPLIER: Decimal = Decimal::ONE;

/// Classification of a work date.
///
/// # Example
///
/// ```
/// use shift_wage::calculation::DayType;
///
/// assert_eq!(DayType::Saturday.to_string(), "Saturday");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    /// Monday through Friday.
    Weekday,
    /// Saturday.
    Saturday,
    /// Sunday.
    Sunday,
    /// A flagged official holiday, whatever the day of the week.
    Holiday,
}

impl std::fmt::Display for DayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayType::Weekday => write!(f, "Weekday"),
            DayType::Saturday => write!(f, "Saturday"),
            DayType::Sunday => write!(f, "Sunday"),
            DayType::Holiday => write!(f, "Holiday"),
        }
    }
}

/// Encodes a date as a YYYYMMDD integer from its own calendar fields.
///
/// # Example
///
/// ```
/// use shift_wage::calculation::encode_date;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
/// assert_eq!(encode_date(date), 20250101);
/// ```
pub fn encode_date(date: NaiveDate) -> i64 {
    i64::from(date.year()) * 10_000 + i64::from(date.month()) * 100 + i64::from(date.day())
}

/// Returns true iff a record at this date has the holiday flag set.
///
/// Records for the same date with the flag unset do not count, and an
/// empty slice never matches.
pub fn is_holiday(date: NaiveDate, records: &[HolidayRecord]) -> bool {
    let code = encode_date(date);
    records
        .iter()
        .any(|record| i64::from(record.date_code) == code && record.is_holiday)
}

/// Returns true for Saturdays and Sundays.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Classifies a date, giving holidays precedence over the day of the week.
pub fn get_day_type(date: NaiveDate, records: &[HolidayRecord]) -> DayType {
    if is_holiday(date, records) {
        return DayType::Holiday;
    }
    match date.weekday() {
        Weekday::Sat => DayType::Saturday,
        Weekday::Sun => DayType::Sunday,
        _ => DayType::Weekday,
    }
}

/// Returns the wage multiplier for hours worked on `date`.
///
/// [`HOLIDAY_MULTIPLIER`] for flagged holidays, [`STANDARD_MULTIPLIER`]
/// otherwise. Saturdays and Sundays get no premium.
///
/// # Example
///
/// ```
/// use shift_wage::calculation::wage_multiplier;
/// use shift_wage::models::HolidayRecord;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let records = vec![HolidayRecord::new(20250101, "New Year's Day", true)];
/// let new_year = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
/// let saturday = NaiveDate::from_ymd_opt(2025, 1, 4).unwrap();
///
/// assert_eq!(wage_multiplier(new_year, &records), Decimal::new(25, 1));
/// assert_eq!(wage_multiplier(saturday, &records), Decimal::ONE);
/// ```
pub fn wage_multiplier(date: NaiveDate, records: &[HolidayRecord]) -> Decimal {
    if is_holiday(date, records) {
        HOLIDAY_MULTIPLIER
    } else {
        STANDARD_MULTIPLIER
    }
}
