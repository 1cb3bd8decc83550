use chrono::NaiveDateTime;
use restriction_board_domain::{DaysUntilExpiry, Expiry, RestrictionRecord};
use serde::Serialize;
use std::sync::Arc;

use crate::ports::Clock;

pub const DEFAULT_URGENT_DAYS: i64 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpiryClass {
    /// Permanent, expired or about to expire.
    Never,
    Date,
}

impl ExpiryClass {
    pub fn css_class(&self) -> &'static str {
        match self {
            ExpiryClass::Never => "expiry-never",
            ExpiryClass::Date => "expiry-date",
        }
    }
}

/// How the expiry line of a card is shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpiryDisplay {
    pub class: ExpiryClass,
    pub text: String,
}

impl ExpiryDisplay {
    pub fn resolve(expiry: &Expiry, now: NaiveDateTime, urgent_days: i64) -> Self {
        let (class, text) = match expiry {
            Expiry::Never => (ExpiryClass::Never, "Forever".to_string()),
            Expiry::Hidden => (ExpiryClass::Date, "Hidden date".to_string()),
            Expiry::On(_) if expiry.is_expired_at(now) => {
                (ExpiryClass::Never, "Expired".to_string())
            }
            Expiry::On(_) => match expiry.days_until_at(now) {
                DaysUntilExpiry::Days(days) if days <= urgent_days => {
                    (ExpiryClass::Never, days_left(days))
                }
                DaysUntilExpiry::Days(days) => (ExpiryClass::Date, days_left(days)),
                DaysUntilExpiry::Infinite | DaysUntilExpiry::Unknown => {
                    (ExpiryClass::Date, "Unknown date".to_string())
                }
            },
            Expiry::Unparsed(_) => (ExpiryClass::Date, "Unknown date".to_string()),
        };
        Self { class, text }
    }
}

fn days_left(days: i64) -> String {
    format!("{} days left", days)
}

/// Renders one record as a `user-card` fragment.
pub struct CardRenderer {
    clock: Arc<dyn Clock>,
    urgent_days: i64,
}

impl CardRenderer {
    pub fn new(clock: Arc<dyn Clock>, urgent_days: i64) -> Self {
        Self { clock, urgent_days }
    }

    pub fn urgent_days(&self) -> i64 {
        self.urgent_days
    }

    pub fn now(&self) -> NaiveDateTime {
        self.clock.now()
    }

    pub fn expiry_display(&self, record: &RestrictionRecord) -> ExpiryDisplay {
        ExpiryDisplay::resolve(&record.date_expiry, self.clock.now(), self.urgent_days)
    }

    pub fn render(&self, record: &RestrictionRecord) -> String {
        let expiry = self.expiry_display(record);
        let status = html_escape(record.status.as_str());
        let status_note = record
            .status_note
            .as_deref()
            .map(|note| format!(" <small>{}</small>", html_escape(note)))
            .unwrap_or_default();

        format!(
            r#"<div class="user-card" data-status="{status}">
    <div class="status-badge status-{status}">{label}</div>
    <div class="user-header">
        <div class="user-avatar">{initials}</div>
        <div class="user-info">
            <h3>{username}</h3>
            <div class="user-id">ID: {id} | Block ID: {block_id}</div>
        </div>
    </div>
    <div class="restriction-info">
        <div class="restriction-type">{restriction_type}{status_note}</div>
        <div class="restriction-reason">{reason}</div>
        <div class="restriction-date">{full_date}</div>
        <div class="expiry-info">
            <div class="{expiry_class}">Status: {expiry_text}</div>
        </div>
    </div>
</div>
"#,
            status = status,
            label = html_escape(record.status_label()),
            initials = html_escape(&record.initials()),
            username = html_escape(&record.username),
            id = html_escape(&record.id),
            block_id = html_escape(&record.block_id),
            restriction_type = html_escape(&record.restriction_type),
            status_note = status_note,
            reason = html_escape(&record.reason),
            full_date = html_escape(&record.full_date),
            expiry_class = expiry.class.css_class(),
            expiry_text = html_escape(&expiry.text),
        )
    }

    pub fn render_all(&self, records: &[RestrictionRecord]) -> String {
        records.iter().map(|record| self.render(record)).collect()
    }
}

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
