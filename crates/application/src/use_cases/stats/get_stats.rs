use restriction_board_domain::{DomainError, RestrictionStats};
use std::sync::Arc;

use crate::ports::RestrictionRepository;

/// Counts over the whole store, independent of any active filter.
pub struct GetRestrictionStatsUseCase {
    repo: Arc<dyn RestrictionRepository>,
}

impl GetRestrictionStatsUseCase {
    pub fn new(repo: Arc<dyn RestrictionRepository>) -> Self {
        Self { repo }
    }

    pub fn execute(&self) -> Result<RestrictionStats, DomainError> {
        let records = self.repo.get_all()?;
        Ok(RestrictionStats::from_records(&records))
    }
}
