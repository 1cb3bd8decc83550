use crate::restriction_record::RestrictionRecord;
use crate::restriction_status::RestrictionStatus;
use serde::{Deserialize, Serialize};

/// Per-category counts over the whole store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestrictionStats {
    pub blocked: usize,
    pub restricted: usize,
    pub warning: usize,
    pub soft_blocked: usize,
    pub total: usize,
}

impl RestrictionStats {
    pub fn from_records(records: &[RestrictionRecord]) -> Self {
        let mut stats = Self {
            total: records.len(),
            ..Self::default()
        };
        for record in records {
            match record.status {
                RestrictionStatus::Blocked => stats.blocked += 1,
                RestrictionStatus::Restricted => stats.restricted += 1,
                RestrictionStatus::Warning => stats.warning += 1,
                RestrictionStatus::SoftBlocked => stats.soft_blocked += 1,
                RestrictionStatus::Other(_) => {}
            }
        }
        stats
    }

    pub fn count_for(&self, status: &RestrictionStatus) -> usize {
        match status {
            RestrictionStatus::Blocked => self.blocked,
            RestrictionStatus::Restricted => self.restricted,
            RestrictionStatus::Warning => self.warning,
            RestrictionStatus::SoftBlocked => self.soft_blocked,
            RestrictionStatus::Other(_) => 0,
        }
    }
}
