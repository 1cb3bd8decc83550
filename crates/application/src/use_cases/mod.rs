pub mod records;
pub mod stats;

// Re-export use cases
pub use records::{AddRecordUseCase, FilterRecordsUseCase, GetRecordsUseCase, RemoveRecordUseCase};
pub use stats::GetRestrictionStatsUseCase;
