//! In-memory assessment store
//!
//! Append-only keyed map of assessment records. The id counter is owned by
//! the store instance and incremented under the same lock as the map, never
//! a process-wide singleton; the instance is injected into handlers through
//! the shared application state.

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::models::{AssessmentRecord, NewAssessment};

pub struct AssessmentStore {
    inner: RwLock<StoreInner>,
}

struct StoreInner {
    records: HashMap<i64, AssessmentRecord>,
    next_id: i64,
}

impl AssessmentStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(StoreInner {
                records: HashMap::new(),
                next_id: 1,
            }),
        }
    }

    /// Assigns the next id and stores the record, returning the stored
    /// snapshot.
    pub fn create(&self, new: NewAssessment) -> AssessmentRecord {
        let mut inner = self.inner.write();
        let id = inner.next_id;
        inner.next_id += 1;

        let record = AssessmentRecord {
            id,
            user_id: new.user_id,
            parameters: new.parameters,
            annual_risk_exposure: new.annual_risk_exposure,
            risk_score: new.risk_score,
            risk_level: new.risk_level,
            created_at: new.created_at,
        };
        inner.records.insert(id, record.clone());
        record
    }

    pub fn get(&self, id: i64) -> Option<AssessmentRecord> {
        self.inner.read().records.get(&id).cloned()
    }

    /// Records for one owner, oldest first.
    pub fn list_by_user(&self, user_id: i64) -> Vec<AssessmentRecord> {
        let mut records: Vec<AssessmentRecord> = self
            .inner
            .read()
            .records
            .values()
            .filter(|record| record.user_id == user_id)
            .cloned()
            .collect();
        records.sort_by_key(|record| record.id);
        records
    }
}

impl Default for AssessmentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RiskLevel, RiskParameters};
    use chrono::Utc;

    fn new_assessment(user_id: i64) -> NewAssessment {
        NewAssessment {
            user_id,
            parameters: RiskParameters::default(),
            annual_risk_exposure: 3_750_000,
            risk_score: 18,
            risk_level: RiskLevel::Low,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_ids_are_monotonic_from_one() {
        let store = AssessmentStore::new();
        assert_eq!(store.create(new_assessment(1)).id, 1);
        assert_eq!(store.create(new_assessment(1)).id, 2);
        assert_eq!(store.create(new_assessment(2)).id, 3);
    }

    #[test]
    fn test_get_returns_stored_record() {
        let store = AssessmentStore::new();
        let created = store.create(new_assessment(7));

        let fetched = store.get(created.id).unwrap();
        assert_eq!(fetched.id, created.id);
        assert_eq!(fetched.user_id, 7);
        assert_eq!(fetched.annual_risk_exposure, 3_750_000);
    }

    #[test]
    fn test_get_absent_id() {
        let store = AssessmentStore::new();
        assert!(store.get(99).is_none());
    }

    #[test]
    fn test_list_filters_by_owner() {
        let store = AssessmentStore::new();
        store.create(new_assessment(1));
        store.create(new_assessment(2));
        store.create(new_assessment(1));

        let records = store.list_by_user(1);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, 1);
        assert_eq!(records[1].id, 3);

        assert!(store.list_by_user(5).is_empty());
    }
}
