use restriction_board_application::ports::RestrictionRepository;
use restriction_board_domain::{seed_records, DomainError, RestrictionRecord};
use std::sync::RwLock;
use tracing::debug;

/// Process-lifetime record store. Nothing is persisted.
pub struct InMemoryRestrictionRepository {
    records: RwLock<Vec<RestrictionRecord>>,
}

impl InMemoryRestrictionRepository {
    pub fn new(records: Vec<RestrictionRecord>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    /// Store holding the built-in records.
    pub fn seeded() -> Self {
        Self::new(seed_records())
    }
}

impl Default for InMemoryRestrictionRepository {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl RestrictionRepository for InMemoryRestrictionRepository {
    fn get_all(&self) -> Result<Vec<RestrictionRecord>, DomainError> {
        let records = self.records.read().unwrap_or_else(|e| e.into_inner());
        Ok(records.clone())
    }

    fn get_by_id(&self, id: &str) -> Result<Option<RestrictionRecord>, DomainError> {
        let records = self.records.read().unwrap_or_else(|e| e.into_inner());
        Ok(records.iter().find(|r| r.id.as_ref() == id).cloned())
    }

    fn count(&self) -> Result<usize, DomainError> {
        Ok(self.records.read().unwrap_or_else(|e| e.into_inner()).len())
    }

    fn insert(&self, record: RestrictionRecord) -> Result<(), DomainError> {
        let mut records = self.records.write().unwrap_or_else(|e| e.into_inner());
        debug!(id = %record.id, position = records.len(), "Record appended to store");
        records.push(record);
        Ok(())
    }

    fn remove(&self, id: &str) -> Result<Option<RestrictionRecord>, DomainError> {
        let mut records = self.records.write().unwrap_or_else(|e| e.into_inner());
        let Some(index) = records.iter().position(|r| r.id.as_ref() == id) else {
            return Ok(None);
        };
        debug!(id, position = index, "Record removed from store");
        Ok(Some(records.remove(index)))
    }
}
