//! Holiday provider abstraction.
//!
//! The engine never fetches holidays itself. Callers implement
//! [`HolidayProvider`] over whatever source they have and hand the
//! resulting records to the calculation functions.

use tracing::{debug, warn};

use crate::config::ConfigLoader;
use crate::error::{EngineError, EngineResult};
use crate::models::HolidayRecord;

/// A source of holiday records, queried one calendar month at a time.
pub trait HolidayProvider: Send + Sync {
    /// Returns the records for `year`/`month` (1-12).
    fn fetch_holidays(&self, year: i32, month: u32) -> EngineResult<Vec<HolidayRecord>>;
}

/// A provider backed by an in-memory list of records.
///
/// # Example
///
/// ```
/// use shift_wage::holidays::{HolidayProvider, StaticHolidayProvider};
/// use shift_wage::models::HolidayRecord;
///
/// let provider = StaticHolidayProvider::new(vec![
///     HolidayRecord::new(20250101, "New Year's Day", true),
///     HolidayRecord::new(20250301, "Independence Movement Day", true),
/// ]);
///
/// let january = provider.fetch_holidays(2025, 1).unwrap();
/// assert_eq!(january.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticHolidayProvider {
    records: Vec<HolidayRecord>,
}

impl StaticHolidayProvider {
    /// Creates a provider over the given records.
    pub fn new(records: Vec<HolidayRecord>) -> Self {
        Self { records }
    }

    /// Creates a provider over the holiday calendars of a loaded configuration.
    pub fn from_config(config: &ConfigLoader) -> Self {
        Self::new(config.holidays().to_vec())
    }

    /// Number of records held.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true when no records are held.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl HolidayProvider for StaticHolidayProvider {
    fn fetch_holidays(&self, year: i32, month: u32) -> EngineResult<Vec<HolidayRecord>> {
        if !(1..=12).contains(&month) {
            return Err(EngineError::HolidayProvider {
                message: format!("month must be between 1 and 12, got {}", month),
            });
        }

        Ok(self
            .records
            .iter()
            .filter(|record| record.year() == year && record.month() == month)
            .cloned()
            .collect())
    }
}

/// Fetches holidays, treating a provider failure as "no holidays known".
///
/// The failure is logged; the caller proceeds at the standard multiplier.
pub fn holidays_or_empty<P>(provider: &P, year: i32, month: u32) -> Vec<HolidayRecord>
where
    P: HolidayProvider + ?Sized,
{
    match provider.fetch_holidays(year, month) {
        Ok(records) => {
            debug!(year, month, count = records.len(), "Fetched holidays");
            records
        }
        Err(err) => {
            warn!(year, month, error = %err, "Holiday fetch failed, assuming no holidays");
            Vec::new()
        }
    }
}
