pub mod record;

pub use record::{RecordResponse, RecordsQuery};
