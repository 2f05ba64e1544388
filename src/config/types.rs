//! Configuration types for the shift wage engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{BreakSetting, HolidayRecord};

/// Hourly wage used when none is configured, in won.
pub const DEFAULT_HOURLY_WAGE: i64 = 9_860;

fn default_hourly_wage() -> i64 {
    DEFAULT_HOURLY_WAGE
}

fn default_auto_break_time() -> bool {
    true
}

/// Per-user wage settings applied when a shift request leaves values out.
///
/// # Example
///
/// ```
/// use shift_wage::config::WageSettings;
///
/// let settings: WageSettings = serde_yaml::from_str("hourly_wage: 10030").unwrap();
/// assert_eq!(settings.hourly_wage, 10_030);
/// assert!(settings.auto_break_time);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WageSettings {
    /// Default hourly wage in won.
    #[serde(default = "default_hourly_wage")]
    pub hourly_wage: i64,
    /// Whether breaks are derived from the break table by default.
    #[serde(default = "default_auto_break_time")]
    pub auto_break_time: bool,
}

impl Default for WageSettings {
    fn default() -> Self {
        Self {
            hourly_wage: DEFAULT_HOURLY_WAGE,
            auto_break_time: true,
        }
    }
}

impl WageSettings {
    /// Checks that the hourly wage is not negative.
    pub fn validate(&self) -> EngineResult<()> {
        if self.hourly_wage < 0 {
            return Err(EngineError::InvalidWage {
                field: "hourly_wage".to_string(),
                message: format!("must not be negative, got {}", self.hourly_wage),
            });
        }
        Ok(())
    }

    /// The break setting used when a request gives no break minutes.
    pub fn default_break(&self) -> BreakSetting {
        if self.auto_break_time {
            BreakSetting::Auto
        } else {
            BreakSetting::Manual(0)
        }
    }
}

/// A holiday calendar file: a list of provider-shaped records.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HolidayCalendar {
    /// The records in this calendar.
    #[serde(default)]
    pub holidays: Vec<HolidayRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_fields_missing() {
        let settings: WageSettings = serde_yaml::from_str("{}").unwrap();
        assert_eq!(settings, WageSettings::default());
        assert_eq!(settings.hourly_wage, 9_860);
    }

    #[test]
    fn test_default_break_follows_flag() {
        let auto = WageSettings::default();
        assert_eq!(auto.default_break(), BreakSetting::Auto);

        let manual = WageSettings {
            auto_break_time: false,
            ..WageSettings::default()
        };
        assert_eq!(manual.default_break(), BreakSetting::Manual(0));
    }

    #[test]
    fn test_negative_wage_fails_validation() {
        let settings = WageSettings {
            hourly_wage: -10,
            auto_break_time: true,
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_holiday_calendar_yaml() {
        let yaml = r#"
holidays:
  - locdate: 20250101
    dateKind: "01"
    dateName: New Year's Day
    isHoliday: "Y"
    seq: 1
  - locdate: 20250717
    dateName: Constitution Day
    isHoliday: "N"
"#;
        let calendar: HolidayCalendar = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(calendar.holidays.len(), 2);
        assert!(calendar.holidays[0].is_holiday);
        assert!(!calendar.holidays[1].is_holiday);
    }
}
