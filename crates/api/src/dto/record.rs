use restriction_board_application::services::{CardRenderer, ExpiryDisplay};
use restriction_board_domain::RestrictionRecord;
use serde::{Deserialize, Serialize};

/// Stored record plus the values the card derives from it.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordResponse {
    #[serde(flatten)]
    pub record: RestrictionRecord,
    pub initials: String,
    pub status_label: String,
    pub expired: bool,
    pub days_until_expiry: String,
    pub expiry: ExpiryDisplay,
}

impl RecordResponse {
    pub fn from_record(record: RestrictionRecord, renderer: &CardRenderer) -> Self {
        let now = renderer.now();
        Self {
            initials: record.initials(),
            status_label: record.status_label().to_string(),
            expired: record.is_expired_at(now),
            days_until_expiry: record.days_until_expiry_at(now).to_string(),
            expiry: renderer.expiry_display(&record),
            record,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct RecordsQuery {
    #[serde(default)]
    pub filter: Option<String>,
    #[serde(default)]
    pub q: Option<String>,
}

impl RecordsQuery {
    pub fn filter(&self) -> &str {
        self.filter.as_deref().unwrap_or("")
    }

    pub fn query(&self) -> &str {
        self.q.as_deref().unwrap_or("")
    }
}
