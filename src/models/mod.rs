//! Core data models for the shift wage engine.
//!
//! This module contains all the domain models used throughout the engine.

mod calculation_result;
mod holiday;
mod shift;
mod work_record;

pub use calculation_result::{AuditStep, WageBreakdown, WageResult};
pub use holiday::HolidayRecord;
pub use shift::{BreakSetting, ShiftInterval, parse_clock_time};
pub use work_record::WorkRecord;
