#![allow(dead_code)]
use chrono::{NaiveDate, NaiveDateTime};
use restriction_board_application::ports::{Clock, RestrictionRepository};
use restriction_board_domain::{seed_records, DomainError, RestrictionRecord};
use std::sync::{Arc, RwLock};

// ── MockRestrictionRepository ────────────────────────────────────────────────

#[derive(Clone)]
pub struct MockRestrictionRepository {
    records: Arc<RwLock<Vec<RestrictionRecord>>>,
    should_fail: Arc<RwLock<bool>>,
}

impl MockRestrictionRepository {
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    pub fn seeded() -> Self {
        Self::with_records(seed_records())
    }

    pub fn with_records(records: Vec<RestrictionRecord>) -> Self {
        Self {
            records: Arc::new(RwLock::new(records)),
            should_fail: Arc::new(RwLock::new(false)),
        }
    }

    pub fn set_should_fail(&self, fail: bool) {
        *self.should_fail.write().unwrap() = fail;
    }

    pub fn len(&self) -> usize {
        self.records.read().unwrap().len()
    }

    pub fn ids(&self) -> Vec<String> {
        self.records
            .read()
            .unwrap()
            .iter()
            .map(|r| r.id.to_string())
            .collect()
    }

    fn check(&self) -> Result<(), DomainError> {
        if *self.should_fail.read().unwrap() {
            return Err(DomainError::SeedError("mock failure".to_string()));
        }
        Ok(())
    }
}

impl Default for MockRestrictionRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl RestrictionRepository for MockRestrictionRepository {
    fn get_all(&self) -> Result<Vec<RestrictionRecord>, DomainError> {
        self.check()?;
        Ok(self.records.read().unwrap().clone())
    }

    fn get_by_id(&self, id: &str) -> Result<Option<RestrictionRecord>, DomainError> {
        self.check()?;
        Ok(self
            .records
            .read()
            .unwrap()
            .iter()
            .find(|r| r.id.as_ref() == id)
            .cloned())
    }

    fn count(&self) -> Result<usize, DomainError> {
        self.check()?;
        Ok(self.len())
    }

    fn insert(&self, record: RestrictionRecord) -> Result<(), DomainError> {
        self.check()?;
        self.records.write().unwrap().push(record);
        Ok(())
    }

    fn remove(&self, id: &str) -> Result<Option<RestrictionRecord>, DomainError> {
        self.check()?;
        let mut records = self.records.write().unwrap();
        Ok(records
            .iter()
            .position(|r| r.id.as_ref() == id)
            .map(|index| records.remove(index)))
    }
}

// ── FixedClock ───────────────────────────────────────────────────────────────

pub struct FixedClock(pub NaiveDateTime);

impl FixedClock {
    pub fn at(year: i32, month: u32, day: u32, hour: u32) -> Arc<Self> {
        Arc::new(Self(
            NaiveDate::from_ymd_opt(year, month, day)
                .unwrap()
                .and_hms_opt(hour, 0, 0)
                .unwrap(),
        ))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
