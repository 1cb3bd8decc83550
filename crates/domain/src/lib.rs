//! Restriction Board Domain Layer
pub mod config;
pub mod errors;
pub mod expiry;
pub mod record_filter;
pub mod restriction_record;
pub mod restriction_stats;
pub mod restriction_status;
pub mod seed;

pub use config::{CliOverrides, Config, ConfigError};
pub use errors::DomainError;
pub use expiry::{days_until_expiry, is_expired, DaysUntilExpiry, Expiry};
pub use record_filter::{RecordFilter, StatusFilter};
pub use restriction_record::{initials, NewRestrictionRecord, RestrictionRecord};
pub use restriction_stats::RestrictionStats;
pub use restriction_status::{status_label, RestrictionStatus};
pub use seed::seed_records;
