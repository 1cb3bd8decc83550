use restriction_board_domain::{seed_records, Config, DomainError};
use restriction_board_infrastructure::{
    repositories::InMemoryRestrictionRepository, seed::load_seed_file,
};
use std::sync::Arc;
use tracing::info;

pub struct Repositories {
    pub restrictions: Arc<InMemoryRestrictionRepository>,
}

impl Repositories {
    /// Seeds the store from `board.seed_file` when set, otherwise from the
    /// built-in records.
    pub fn new(config: &Config) -> Result<Self, DomainError> {
        let records = match config.board.seed_file.as_deref() {
            Some(path) => load_seed_file(path)?,
            None => {
                info!("Using built-in seed records");
                seed_records()
            }
        };

        Ok(Self {
            restrictions: Arc::new(InMemoryRestrictionRepository::new(records)),
        })
    }
}
