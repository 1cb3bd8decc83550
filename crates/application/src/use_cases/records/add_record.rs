use restriction_board_domain::{DomainError, NewRestrictionRecord, RestrictionRecord};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::{Clock, RestrictionRepository};

pub struct AddRecordUseCase {
    repo: Arc<dyn RestrictionRepository>,
    clock: Arc<dyn Clock>,
}

impl AddRecordUseCase {
    pub fn new(repo: Arc<dyn RestrictionRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }

    #[instrument(skip(self, input))]
    pub fn execute(&self, input: NewRestrictionRecord) -> Result<RestrictionRecord, DomainError> {
        let existing = self.repo.count()?;
        let record = input.into_record(existing, self.clock.today());

        self.repo.insert(record.clone())?;

        info!(
            id = %record.id,
            block_id = %record.block_id,
            status = %record.status,
            "Restriction record added"
        );

        Ok(record)
    }
}
