use restriction_board_domain::{DomainError, RestrictionRecord};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::RestrictionRepository;

pub struct RemoveRecordUseCase {
    repo: Arc<dyn RestrictionRepository>,
}

impl RemoveRecordUseCase {
    pub fn new(repo: Arc<dyn RestrictionRepository>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub fn execute(&self, id: &str) -> Result<RestrictionRecord, DomainError> {
        let removed = self
            .repo
            .remove(id)?
            .ok_or_else(|| DomainError::RecordNotFound(id.to_string()))?;

        info!(id = %removed.id, username = %removed.username, "Restriction record removed");

        Ok(removed)
    }
}
