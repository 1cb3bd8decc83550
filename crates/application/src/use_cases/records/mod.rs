mod add_record;
mod filter_records;
mod get_records;
mod remove_record;

pub use add_record::AddRecordUseCase;
pub use filter_records::FilterRecordsUseCase;
pub use get_records::GetRecordsUseCase;
pub use remove_record::RemoveRecordUseCase;
