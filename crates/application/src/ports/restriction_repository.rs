use restriction_board_domain::{DomainError, RestrictionRecord};

/// Ordered store of restriction records. Insertion order is display order.
pub trait RestrictionRepository: Send + Sync {
    fn get_all(&self) -> Result<Vec<RestrictionRecord>, DomainError>;

    fn get_by_id(&self, id: &str) -> Result<Option<RestrictionRecord>, DomainError>;

    fn count(&self) -> Result<usize, DomainError>;

    fn insert(&self, record: RestrictionRecord) -> Result<(), DomainError>;

    /// Removes the first record with `id`, returning it.
    fn remove(&self, id: &str) -> Result<Option<RestrictionRecord>, DomainError>;
}
