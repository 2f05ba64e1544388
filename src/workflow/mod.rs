//! Shift registration workflow.
//!
//! [`ShiftRegistration`] is the caller of the calculation core: it turns a
//! raw [`ShiftRequest`] into a validated shift, fetches the month's
//! holidays, computes the wage and persists the result. The current user
//! is always passed in explicitly.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{MonthlyStatistics, calculate_shift_wage, monthly_statistics};
use crate::config::WageSettings;
use crate::error::EngineResult;
use crate::holidays::{HolidayProvider, holidays_or_empty};
use crate::models::{BreakSetting, ShiftInterval, WageBreakdown, WorkRecord, parse_clock_time};
use crate::store::WorkRecordStore;

/// A shift as submitted by a user.
///
/// Missing values fall back to the workflow's [`WageSettings`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftRequest {
    /// The nominal work date.
    pub date: NaiveDate,
    /// Start clock time, "HH:MM".
    pub start_time: String,
    /// End clock time, "HH:MM"; earlier than the start means the next day.
    pub end_time: String,
    /// Manual break minutes; `None` uses the settings' break mode.
    #[serde(default)]
    pub break_minutes: Option<i64>,
    /// Hourly wage in won; `None` uses the settings' wage.
    #[serde(default)]
    pub hourly_wage: Option<i64>,
}

/// A stored record together with the calculation that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisteredShift {
    /// The persisted record.
    pub record: WorkRecord,
    /// The wage calculation for the record's shift.
    pub breakdown: WageBreakdown,
}

/// Registers, edits and summarizes work shifts.
///
/// # Example
///
/// ```
/// use shift_wage::config::WageSettings;
/// use shift_wage::holidays::StaticHolidayProvider;
/// use shift_wage::models::HolidayRecord;
/// use shift_wage::store::InMemoryWorkRecordStore;
/// use shift_wage::workflow::{ShiftRegistration, ShiftRequest};
/// use chrono::NaiveDate;
///
/// let provider = StaticHolidayProvider::new(vec![HolidayRecord::new(20250101, "New Year's Day", true)]);
/// let registration = ShiftRegistration::new(provider, InMemoryWorkRecordStore::new(), WageSettings::default());
///
/// let request = ShiftRequest {
///     date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
///     start_time: "09:00".to_string(),
///     end_time: "18:00".to_string(),
///     break_minutes: None,
///     hourly_wage: Some(10_000),
/// };
/// let registered = registration.register("user-1", &request).unwrap();
/// assert_eq!(registered.record.gross_wage, 200_000);
/// ```
pub struct ShiftRegistration<P, S> {
    provider: P,
    store: S,
    settings: WageSettings,
}

impl<P: HolidayProvider, S: WorkRecordStore> ShiftRegistration<P, S> {
    /// Creates a workflow over a holiday provider, a store and settings.
    pub fn new(provider: P, store: S, settings: WageSettings) -> Self {
        Self {
            provider,
            store,
            settings,
        }
    }

    /// Returns the current wage settings.
    pub fn settings(&self) -> &WageSettings {
        &self.settings
    }

    /// Replaces the wage settings after validating them.
    pub fn update_settings(&mut self, settings: WageSettings) -> EngineResult<()> {
        settings.validate()?;
        info!(
            hourly_wage = settings.hourly_wage,
            auto_break_time = settings.auto_break_time,
            "Wage settings updated"
        );
        self.settings = settings;
        Ok(())
    }

    /// Builds the validated shift a request describes.
    pub fn build_shift(&self, request: &ShiftRequest) -> EngineResult<ShiftInterval> {
        let start = parse_clock_time(&request.start_time)?;
        let end = parse_clock_time(&request.end_time)?;
        let break_setting = request
            .break_minutes
            .map(BreakSetting::Manual)
            .unwrap_or_else(|| self.settings.default_break());
        let hourly_wage = request.hourly_wage.unwrap_or(self.settings.hourly_wage);

        ShiftInterval::from_clock_times(request.date, start, end, break_setting, hourly_wage)
    }

    /// Calculates the wage for a request without storing anything.
    pub fn preview(&self, request: &ShiftRequest) -> EngineResult<WageBreakdown> {
        let shift = self.build_shift(request)?;
        self.calculate(&shift)
    }

    /// Registers a new shift for `user_id`.
    pub fn register(&self, user_id: &str, request: &ShiftRequest) -> EngineResult<RegisteredShift> {
        let shift = self.build_shift(request).inspect_err(|err| {
            warn!(user_id, error = %err, "Rejected shift registration");
        })?;
        let breakdown = self.calculate(&shift)?;

        let record = self
            .store
            .insert(WorkRecord::new(user_id, shift, breakdown.wage.gross_wage))?;

        info!(
            user_id,
            record_id = %record.id,
            work_date = %record.date(),
            gross_wage = record.gross_wage,
            "Shift registered"
        );

        Ok(RegisteredShift { record, breakdown })
    }

    /// Replaces the shift of an existing record owned by `user_id`.
    pub fn update(
        &self,
        user_id: &str,
        id: Uuid,
        request: &ShiftRequest,
    ) -> EngineResult<RegisteredShift> {
        let existing = self.store.get(user_id, id)?;
        let shift = self.build_shift(request)?;
        let breakdown = self.calculate(&shift)?;

        let record = self.store.update(WorkRecord {
            id: existing.id,
            user_id: existing.user_id,
            shift,
            gross_wage: breakdown.wage.gross_wage,
        })?;

        info!(
            user_id,
            record_id = %record.id,
            work_date = %record.date(),
            gross_wage = record.gross_wage,
            "Shift updated"
        );

        Ok(RegisteredShift { record, breakdown })
    }

    /// Deletes a record owned by `user_id`.
    pub fn delete(&self, user_id: &str, id: Uuid) -> EngineResult<()> {
        self.store.delete(user_id, id)?;
        info!(user_id, record_id = %id, "Shift deleted");
        Ok(())
    }

    /// Lists the records of `user_id`, newest first.
    pub fn list(&self, user_id: &str) -> EngineResult<Vec<WorkRecord>> {
        self.store.list_for_user(user_id)
    }

    /// Summarizes the records of `user_id` for one month.
    pub fn monthly_statistics(
        &self,
        user_id: &str,
        year: i32,
        month: u32,
    ) -> EngineResult<MonthlyStatistics> {
        let records = self.store.list_for_user(user_id)?;
        Ok(monthly_statistics(&records, year, month))
    }

    fn calculate(&self, shift: &ShiftInterval) -> EngineResult<WageBreakdown> {
        let date = shift.work_date;
        let holidays = holidays_or_empty(&self.provider, date.year(), date.month());
        calculate_shift_wage(shift, &holidays)
    }
}
