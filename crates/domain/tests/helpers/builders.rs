#![allow(dead_code)]
use chrono::{NaiveDate, NaiveDateTime};
use restriction_board_domain::{Expiry, RecordFilter, RestrictionRecord, RestrictionStatus, StatusFilter};
use std::sync::Arc;

pub struct RestrictionRecordBuilder {
    id: Arc<str>,
    block_id: Arc<str>,
    username: Arc<str>,
    status: RestrictionStatus,
    restriction_type: Arc<str>,
    status_note: Option<Arc<str>>,
    reason: Arc<str>,
    date_expiry: Expiry,
}

impl RestrictionRecordBuilder {
    pub fn new() -> Self {
        Self {
            id: "user_1".into(),
            block_id: "0100".into(),
            username: "Tester".into(),
            status: RestrictionStatus::Warning,
            restriction_type: "Manual restriction".into(),
            status_note: None,
            reason: "Spam in chat".into(),
            date_expiry: Expiry::Never,
        }
    }

    pub fn id(mut self, id: &str) -> Self {
        self.id = id.into();
        self
    }

    pub fn block_id(mut self, block_id: &str) -> Self {
        self.block_id = block_id.into();
        self
    }

    pub fn username(mut self, username: &str) -> Self {
        self.username = username.into();
        self
    }

    pub fn status(mut self, status: RestrictionStatus) -> Self {
        self.status = status;
        self
    }

    pub fn restriction_type(mut self, restriction_type: &str) -> Self {
        self.restriction_type = restriction_type.into();
        self
    }

    pub fn status_note(mut self, note: &str) -> Self {
        self.status_note = Some(note.into());
        self
    }

    pub fn reason(mut self, reason: &str) -> Self {
        self.reason = reason.into();
        self
    }

    pub fn expiry(mut self, raw: &str) -> Self {
        self.date_expiry = Expiry::parse(raw);
        self
    }

    pub fn build(self) -> RestrictionRecord {
        let expiry = self.date_expiry.as_display();
        RestrictionRecord {
            id: self.id,
            block_id: self.block_id,
            username: self.username,
            status: self.status,
            restriction_type: self.restriction_type,
            status_note: self.status_note,
            reason: self.reason,
            date_received: "01.01.2024".into(),
            full_date: format!("Получено 01.01.2024, снято будет {}", expiry).into(),
            date_expiry: self.date_expiry,
        }
    }
}

impl Default for RestrictionRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

pub fn by_category(category: StatusFilter) -> RecordFilter {
    RecordFilter::new(category, "")
}

pub fn by_query(query: &str) -> RecordFilter {
    RecordFilter::new(StatusFilter::All, query)
}
