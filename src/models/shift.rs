//! Shift interval model and related types.
//!
//! This module defines [`ShiftInterval`], the immutable input to wage
//! calculation, and [`BreakSetting`], which selects between the automatic
//! break table and a caller-supplied break.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::auto_break_minutes;
use crate::error::{EngineError, EngineResult};

/// How the unpaid break of a shift is determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "mode", content = "minutes")]
pub enum BreakSetting {
    /// Derive the break from the shift length using the break table.
    Auto,
    /// Use these minutes verbatim, including zero.
    Manual(i64),
}

impl BreakSetting {
    /// Resolves the break minutes for a shift of `total_minutes`.
    ///
    /// # Example
    ///
    /// ```
    /// use shift_wage::models::BreakSetting;
    ///
    /// assert_eq!(BreakSetting::Auto.resolve(540), 60);
    /// assert_eq!(BreakSetting::Manual(0).resolve(540), 0);
    /// ```
    pub fn resolve(self, total_minutes: i64) -> i64 {
        match self {
            BreakSetting::Auto => auto_break_minutes(total_minutes),
            BreakSetting::Manual(minutes) => minutes,
        }
    }
}

/// Parses a 24-hour "HH:MM" clock time.
///
/// # Example
///
/// ```
/// use shift_wage::models::parse_clock_time;
/// use chrono::NaiveTime;
///
/// assert_eq!(parse_clock_time("09:30").unwrap(), NaiveTime::from_hms_opt(9, 30, 0).unwrap());
/// assert!(parse_clock_time("24:00").is_err());
/// ```
pub fn parse_clock_time(value: &str) -> EngineResult<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M").map_err(|e| EngineError::InvalidTime {
        value: value.to_string(),
        message: format!("expected HH:MM ({})", e),
    })
}

/// One work period under evaluation.
///
/// `end_time` already reflects the overnight rollover: a shift that ends
/// at a clock time earlier than it started ends on the following day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftInterval {
    /// The shift's nominal day, used for holiday lookup.
    pub work_date: NaiveDate,
    /// The start of the shift.
    pub start_time: NaiveDateTime,
    /// The end of the shift.
    pub end_time: NaiveDateTime,
    /// Unpaid break minutes.
    pub break_minutes: i64,
    /// Hourly wage in won.
    pub hourly_wage: i64,
}

impl ShiftInterval {
    /// Creates a validated shift from explicit instants.
    pub fn new(
        work_date: NaiveDate,
        start_time: NaiveDateTime,
        end_time: NaiveDateTime,
        break_minutes: i64,
        hourly_wage: i64,
    ) -> EngineResult<Self> {
        let shift = Self {
            work_date,
            start_time,
            end_time,
            break_minutes,
            hourly_wage,
        };
        shift.validate()?;
        Ok(shift)
    }

    /// Creates a validated shift from clock times on `work_date`.
    ///
    /// An end time earlier than the start time is moved to the next day.
    ///
    /// # Example
    ///
    /// ```
    /// use shift_wage::models::{BreakSetting, ShiftInterval, parse_clock_time};
    /// use chrono::NaiveDate;
    ///
    /// let shift = ShiftInterval::from_clock_times(
    ///     NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
    ///     parse_clock_time("23:00").unwrap(),
    ///     parse_clock_time("01:00").unwrap(),
    ///     BreakSetting::Auto,
    ///     10_000,
    /// )
    /// .unwrap();
    /// assert_eq!(shift.total_minutes(), 120);
    /// assert_eq!(shift.break_minutes, 0);
    /// ```
    pub fn from_clock_times(
        work_date: NaiveDate,
        start: NaiveTime,
        end: NaiveTime,
        break_setting: BreakSetting,
        hourly_wage: i64,
    ) -> EngineResult<Self> {
        let start_time = work_date.and_time(start);
        let mut end_time = work_date.and_time(end);
        if end_time < start_time {
            end_time += Duration::days(1);
        }

        let total_minutes = (end_time - start_time).num_minutes();
        let break_minutes = break_setting.resolve(total_minutes);

        Self::new(work_date, start_time, end_time, break_minutes, hourly_wage)
    }

    /// Checks the shift preconditions.
    ///
    /// The end must be after the start, the hourly wage must not be
    /// negative, and the break must fit within the shift.
    pub fn validate(&self) -> EngineResult<()> {
        if self.end_time <= self.start_time {
            return Err(EngineError::InvalidShift {
                message: format!(
                    "end {} is not after start {}",
                    self.end_time, self.start_time
                ),
            });
        }
        if self.hourly_wage < 0 {
            return Err(EngineError::InvalidWage {
                field: "hourly_wage".to_string(),
                message: format!("must not be negative, got {}", self.hourly_wage),
            });
        }
        if self.break_minutes < 0 {
            return Err(EngineError::InvalidShift {
                message: format!("break minutes must not be negative, got {}", self.break_minutes),
            });
        }
        let total = self.total_minutes();
        if self.break_minutes > total {
            return Err(EngineError::InvalidShift {
                message: format!(
                    "break of {} minutes exceeds shift of {} minutes",
                    self.break_minutes, total
                ),
            });
        }
        Ok(())
    }

    /// Minutes between start and end, breaks included.
    pub fn total_minutes(&self) -> i64 {
        (self.end_time - self.start_time).num_minutes()
    }

    /// Minutes paid after removing the break.
    pub fn paid_minutes(&self) -> i64 {
        self.total_minutes() - self.break_minutes
    }

    /// Paid hours, fractional.
    pub fn paid_hours(&self) -> Decimal {
        Decimal::from(self.paid_minutes()) / Decimal::from(60)
    }

    /// Hours between start and end, breaks included.
    pub fn total_hours(&self) -> Decimal {
        Decimal::from(self.total_minutes()) / Decimal::from(60)
    }

    /// Returns the day of the week of the nominal work date.
    pub fn day_of_week(&self) -> Weekday {
        self.work_date.weekday()
    }
}
