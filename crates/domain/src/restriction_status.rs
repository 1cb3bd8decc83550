use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RestrictionStatus {
    Blocked,
    Restricted,
    Warning,
    SoftBlocked,
    /// A status value outside the four known categories, kept verbatim.
    Other(Arc<str>),
}

impl RestrictionStatus {
    pub fn as_str(&self) -> &str {
        match self {
            RestrictionStatus::Blocked => "blocked",
            RestrictionStatus::Restricted => "restricted",
            RestrictionStatus::Warning => "warning",
            RestrictionStatus::SoftBlocked => "soft_blocked",
            RestrictionStatus::Other(raw) => raw,
        }
    }

    /// Localized badge text. Unknown statuses are shown as-is.
    pub fn label(&self) -> &str {
        match self {
            RestrictionStatus::Blocked => "Заблокирован",
            RestrictionStatus::Restricted => "Ограничен",
            RestrictionStatus::Warning => "Предупреждение",
            RestrictionStatus::SoftBlocked => "Заблокирован",
            RestrictionStatus::Other(raw) => raw,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, RestrictionStatus::Other(_))
    }

    pub fn all() -> [RestrictionStatus; 4] {
        [
            RestrictionStatus::Blocked,
            RestrictionStatus::Restricted,
            RestrictionStatus::Warning,
            RestrictionStatus::SoftBlocked,
        ]
    }
}

/// Badge text for a raw status string.
pub fn status_label(status: &str) -> String {
    RestrictionStatus::from(status).label().to_string()
}

impl From<&str> for RestrictionStatus {
    fn from(s: &str) -> Self {
        match s {
            "blocked" => RestrictionStatus::Blocked,
            "restricted" => RestrictionStatus::Restricted,
            "warning" => RestrictionStatus::Warning,
            "soft_blocked" => RestrictionStatus::SoftBlocked,
            other => RestrictionStatus::Other(Arc::from(other)),
        }
    }
}

impl FromStr for RestrictionStatus {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(RestrictionStatus::from(s))
    }
}

impl fmt::Display for RestrictionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for RestrictionStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for RestrictionStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(RestrictionStatus::from(raw.as_str()))
    }
}
