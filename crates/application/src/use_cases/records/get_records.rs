use restriction_board_domain::{DomainError, RestrictionRecord};
use std::sync::Arc;

use crate::ports::RestrictionRepository;

pub struct GetRecordsUseCase {
    repo: Arc<dyn RestrictionRepository>,
}

impl GetRecordsUseCase {
    pub fn new(repo: Arc<dyn RestrictionRepository>) -> Self {
        Self { repo }
    }

    pub fn get_all(&self) -> Result<Vec<RestrictionRecord>, DomainError> {
        self.repo.get_all()
    }

    pub fn get_by_id(&self, id: &str) -> Result<Option<RestrictionRecord>, DomainError> {
        self.repo.get_by_id(id)
    }
}
