//! Work record persistence contract.
//!
//! The engine does not assume any storage technology. [`WorkRecordStore`]
//! is the contract a persistence layer fulfils; [`InMemoryWorkRecordStore`]
//! is a thread-safe implementation used by tests and small deployments.

use std::collections::HashMap;
use std::sync::RwLock;

use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::WorkRecord;

/// Storage for work records, scoped by owning user.
///
/// A record that belongs to another user is reported exactly like a
/// missing one.
pub trait WorkRecordStore: Send + Sync {
    /// Stores a new record.
    fn insert(&self, record: WorkRecord) -> EngineResult<WorkRecord>;

    /// Fetches a record owned by `user_id`.
    fn get(&self, user_id: &str, id: Uuid) -> EngineResult<WorkRecord>;

    /// Replaces an existing record with the same id and owner.
    fn update(&self, record: WorkRecord) -> EngineResult<WorkRecord>;

    /// Removes a record owned by `user_id`.
    fn delete(&self, user_id: &str, id: Uuid) -> EngineResult<()>;

    /// Lists a user's records, newest work date first.
    fn list_for_user(&self, user_id: &str) -> EngineResult<Vec<WorkRecord>>;
}

/// A [`WorkRecordStore`] held in process memory.
#[derive(Debug, Default)]
pub struct InMemoryWorkRecordStore {
    records: RwLock<HashMap<Uuid, WorkRecord>>,
}

impl InMemoryWorkRecordStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned() -> EngineError {
    EngineError::Storage {
        message: "work record lock poisoned".to_string(),
    }
}

impl WorkRecordStore for InMemoryWorkRecordStore {
    fn insert(&self, record: WorkRecord) -> EngineResult<WorkRecord> {
        let mut records = self.records.write().map_err(|_| poisoned())?;
        if records.contains_key(&record.id) {
            return Err(EngineError::Storage {
                message: format!("duplicate work record id {}", record.id),
            });
        }
        records.insert(record.id, record.clone());
        Ok(record)
    }

    fn get(&self, user_id: &str, id: Uuid) -> EngineResult<WorkRecord> {
        let records = self.records.read().map_err(|_| poisoned())?;
        records
            .get(&id)
            .filter(|record| record.user_id == user_id)
            .cloned()
            .ok_or(EngineError::RecordNotFound { id })
    }

    fn update(&self, record: WorkRecord) -> EngineResult<WorkRecord> {
        let mut records = self.records.write().map_err(|_| poisoned())?;
        match records.get_mut(&record.id) {
            Some(existing) if existing.user_id == record.user_id => {
                *existing = record.clone();
                Ok(record)
            }
            _ => Err(EngineError::RecordNotFound { id: record.id }),
        }
    }

    fn delete(&self, user_id: &str, id: Uuid) -> EngineResult<()> {
        let mut records = self.records.write().map_err(|_| poisoned())?;
        let owned = records
            .get(&id)
            .is_some_and(|record| record.user_id == user_id);
        if !owned {
            return Err(EngineError::RecordNotFound { id });
        }
        records.remove(&id);
        Ok(())
    }

    fn list_for_user(&self, user_id: &str) -> EngineResult<Vec<WorkRecord>> {
        let records = self.records.read().map_err(|_| poisoned())?;
        let mut owned: Vec<WorkRecord> = records
            .values()
            .filter(|record| record.user_id == user_id)
            .cloned()
            .collect();
        owned.sort_by(|a, b| {
            b.shift
                .start_time
                .cmp(&a.shift.start_time)
                .then_with(|| a.id.cmp(&b.id))
        });
        Ok(owned)
    }
}
