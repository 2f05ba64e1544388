//! Persisted work record model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ShiftInterval;

/// A registered shift owned by one user.
///
/// The `user_id` is an opaque identifier supplied by whatever layer
/// authenticated the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkRecord {
    /// Unique identifier for the record.
    pub id: Uuid,
    /// The owning user.
    pub user_id: String,
    /// The registered shift.
    pub shift: ShiftInterval,
    /// Gross wage computed at registration time, in won.
    pub gross_wage: i64,
}

impl WorkRecord {
    /// Creates a record with a fresh id.
    pub fn new(user_id: impl Into<String>, shift: ShiftInterval, gross_wage: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: user_id.into(),
            shift,
            gross_wage,
        }
    }

    /// The nominal work date of the shift.
    pub fn date(&self) -> NaiveDate {
        self.shift.work_date
    }
}
