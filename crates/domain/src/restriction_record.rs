use crate::expiry::{format_dotted_date, DaysUntilExpiry, Expiry};
use crate::restriction_status::RestrictionStatus;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Placeholder expiry stored when a new record does not provide one.
pub const UNDEFINED_EXPIRY: &str = "Неопределено";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestrictionRecord {
    pub id: Arc<str>,
    pub block_id: Arc<str>,
    pub username: Arc<str>,
    pub status: RestrictionStatus,
    pub restriction_type: Arc<str>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_note: Option<Arc<str>>,
    pub reason: Arc<str>,
    pub date_received: Arc<str>,
    pub date_expiry: Expiry,
    pub full_date: Arc<str>,
}

impl RestrictionRecord {
    pub fn initials(&self) -> String {
        initials(&self.username)
    }

    pub fn status_label(&self) -> &str {
        self.status.label()
    }

    pub fn is_expired_at(&self, now: NaiveDateTime) -> bool {
        self.date_expiry.is_expired_at(now)
    }

    pub fn days_until_expiry_at(&self, now: NaiveDateTime) -> DaysUntilExpiry {
        self.date_expiry.days_until_at(now)
    }

    /// Case-insensitive substring match on the searchable fields.
    ///
    /// `needle` must already be lowercased.
    pub fn matches_search(&self, needle: &str) -> bool {
        [
            &self.username,
            &self.id,
            &self.block_id,
            &self.reason,
            &self.restriction_type,
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
    }
}

/// First two characters of a username, uppercased.
///
/// A character whose uppercase form is more than one character long is kept
/// unchanged, so the result is never longer than two characters.
pub fn initials(username: &str) -> String {
    username
        .chars()
        .take(2)
        .map(|c| {
            let mut upper = c.to_uppercase();
            match (upper.next(), upper.next()) {
                (Some(single), None) => single,
                _ => c,
            }
        })
        .collect()
}

/// Partial input for a record added at runtime. Missing fields are defaulted
/// by [`NewRestrictionRecord::into_record`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRestrictionRecord {
    pub id: Option<String>,
    pub block_id: Option<String>,
    pub username: Option<String>,
    pub status: Option<String>,
    pub restriction_type: Option<String>,
    pub status_note: Option<String>,
    pub reason: Option<String>,
    pub date_received: Option<String>,
    pub date_expiry: Option<String>,
    pub full_date: Option<String>,
}

impl NewRestrictionRecord {
    pub fn with_username(username: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
            ..Self::default()
        }
    }

    /// Builds the stored record. `existing` is the store length before
    /// insertion and seeds the generated identifiers.
    pub fn into_record(self, existing: usize, today: NaiveDate) -> RestrictionRecord {
        let ordinal = existing + 1;
        let date_received = non_empty(self.date_received)
            .unwrap_or_else(|| format_dotted_date(today));
        let date_expiry = non_empty(self.date_expiry)
            .unwrap_or_else(|| UNDEFINED_EXPIRY.to_string());
        let full_date = non_empty(self.full_date).unwrap_or_else(|| {
            format!("Получено {}, снято будет {}", date_received, date_expiry)
        });

        RestrictionRecord {
            id: non_empty(self.id)
                .unwrap_or_else(|| format!("USR{:03}", ordinal))
                .into(),
            block_id: non_empty(self.block_id)
                .unwrap_or_else(|| format!("{:04}", ordinal))
                .into(),
            username: self.username.unwrap_or_default().into(),
            status: non_empty(self.status)
                .as_deref()
                .map(RestrictionStatus::from)
                .unwrap_or(RestrictionStatus::Warning),
            restriction_type: self.restriction_type.unwrap_or_default().into(),
            status_note: non_empty(self.status_note).map(Arc::from),
            reason: self.reason.unwrap_or_default().into(),
            date_received: date_received.into(),
            date_expiry: Expiry::parse(&date_expiry),
            full_date: full_date.into(),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
