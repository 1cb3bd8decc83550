use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Restriction record not found: {0}")]
    RecordNotFound(String),

    #[error("Seed data error: {0}")]
    SeedError(String),
}
