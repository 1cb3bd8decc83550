use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::sync::Arc;

pub const NEVER_SENTINEL: &str = "Никогда";
pub const HIDDEN_SENTINEL: &str = "Скрыто";

const MS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// When a restriction is lifted.
///
/// Stored as a single display string in the source data: one of the two
/// sentinels or a `DD.MM.YYYY` date. Anything else is kept verbatim in
/// `Unparsed` and never counts as expired.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expiry {
    Never,
    Hidden,
    On(NaiveDate),
    Unparsed(Arc<str>),
}

/// Whole days left until an expiry date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DaysUntilExpiry {
    Infinite,
    Unknown,
    Days(i64),
}

impl fmt::Display for DaysUntilExpiry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DaysUntilExpiry::Infinite => f.write_str("∞"),
            DaysUntilExpiry::Unknown => f.write_str("?"),
            DaysUntilExpiry::Days(days) => write!(f, "{}", days),
        }
    }
}

impl Expiry {
    pub fn parse(raw: &str) -> Self {
        match raw {
            NEVER_SENTINEL => Expiry::Never,
            HIDDEN_SENTINEL => Expiry::Hidden,
            _ => match parse_dotted_date(raw) {
                Some(date) => Expiry::On(date),
                None => Expiry::Unparsed(Arc::from(raw)),
            },
        }
    }

    pub fn as_display(&self) -> String {
        match self {
            Expiry::Never => NEVER_SENTINEL.to_string(),
            Expiry::Hidden => HIDDEN_SENTINEL.to_string(),
            Expiry::On(date) => format_dotted_date(*date),
            Expiry::Unparsed(raw) => raw.to_string(),
        }
    }

    /// Expired iff `now` is strictly after local midnight of the expiry date.
    pub fn is_expired_at(&self, now: NaiveDateTime) -> bool {
        match self {
            Expiry::On(date) => now > date.and_time(NaiveTime::MIN),
            Expiry::Never | Expiry::Hidden | Expiry::Unparsed(_) => false,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Local::now().naive_local())
    }

    pub fn days_until_at(&self, now: NaiveDateTime) -> DaysUntilExpiry {
        match self {
            Expiry::Never => DaysUntilExpiry::Infinite,
            Expiry::Hidden | Expiry::Unparsed(_) => DaysUntilExpiry::Unknown,
            Expiry::On(date) => {
                let diff_ms = (date.and_time(NaiveTime::MIN) - now).num_milliseconds();
                DaysUntilExpiry::Days(ceil_div(diff_ms, MS_PER_DAY))
            }
        }
    }

    pub fn days_until(&self) -> DaysUntilExpiry {
        self.days_until_at(Local::now().naive_local())
    }
}

pub fn is_expired(raw: &str) -> bool {
    Expiry::parse(raw).is_expired()
}

pub fn days_until_expiry(raw: &str) -> DaysUntilExpiry {
    Expiry::parse(raw).days_until()
}

/// Parses `DD.MM.YYYY`. Out-of-range components yield `None`.
pub fn parse_dotted_date(raw: &str) -> Option<NaiveDate> {
    let mut parts = raw.trim().split('.');
    let day: u32 = parts.next()?.parse().ok()?;
    let month: u32 = parts.next()?.parse().ok()?;
    let year: i32 = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

pub fn format_dotted_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

fn ceil_div(value: i64, divisor: i64) -> i64 {
    let quotient = value.div_euclid(divisor);
    if value.rem_euclid(divisor) == 0 {
        quotient
    } else {
        quotient + 1
    }
}

impl fmt::Display for Expiry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_display())
    }
}

impl From<&str> for Expiry {
    fn from(raw: &str) -> Self {
        Expiry::parse(raw)
    }
}

impl Serialize for Expiry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.as_display())
    }
}

impl<'de> Deserialize<'de> for Expiry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Expiry::parse(&raw))
    }
}
