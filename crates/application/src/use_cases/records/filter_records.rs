use restriction_board_domain::{DomainError, RecordFilter, RestrictionRecord};
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::ports::RestrictionRepository;

pub struct FilterRecordsUseCase {
    repo: Arc<dyn RestrictionRepository>,
}

impl FilterRecordsUseCase {
    pub fn new(repo: Arc<dyn RestrictionRepository>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self, filter), fields(category = %filter.category, query = filter.needle()))]
    pub fn execute(&self, filter: &RecordFilter) -> Result<Vec<RestrictionRecord>, DomainError> {
        let records = self.repo.get_all()?;
        if filter.is_identity() {
            return Ok(records);
        }

        let filtered = filter.apply(&records);
        debug!(
            total = records.len(),
            matched = filtered.len(),
            "Restriction records filtered"
        );
        Ok(filtered)
    }
}
