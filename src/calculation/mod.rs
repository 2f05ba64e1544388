//! Calculation logic for the shift wage engine.
//!
//! This module contains the pure calculation functions: holiday detection
//! and the wage multiplier, the automatic break table, gross wage,
//! statutory deductions, the combined per-shift calculation, and monthly
//! statistics.

mod break_time;
mod deductions;
mod gross_wage;
mod holiday_policy;
mod shift_wage;
mod statistics;

pub use break_time::{AUTO_BREAK_TABLE, auto_break_minutes};
pub use deductions::{INSURANCE_RATE, TAX_RATE, compute_deductions};
pub use gross_wage::compute_gross;
pub use holiday_policy::{
    DayType, HOLIDAY_MULTIPLIER, STANDARD_MULTIPLIER, encode_date, get_day_type, is_holiday,
    is_weekend, wage_multiplier,
};
pub use shift_wage::calculate_shift_wage;
pub use statistics::{
    MonthlyStatistics, NIGHT_END_HOUR, NIGHT_START_HOUR, monthly_statistics, night_shift_hours,
};
