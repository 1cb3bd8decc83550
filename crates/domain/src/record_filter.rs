use crate::restriction_record::RestrictionRecord;
use crate::restriction_status::RestrictionStatus;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

pub const ALL_FILTER: &str = "all";

/// Category selected through the filter buttons.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(RestrictionStatus),
}

impl StatusFilter {
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "" | ALL_FILTER => StatusFilter::All,
            other => StatusFilter::Only(RestrictionStatus::from(other)),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            StatusFilter::All => ALL_FILTER,
            StatusFilter::Only(status) => status.as_str(),
        }
    }

    pub fn accepts(&self, status: &RestrictionStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => wanted == status,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(StatusFilter::parse(s))
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category plus free-text search, applied in store order.
#[derive(Debug, Clone, Default)]
pub struct RecordFilter {
    pub category: StatusFilter,
    needle: String,
}

impl RecordFilter {
    pub fn new(category: StatusFilter, query: &str) -> Self {
        Self {
            category,
            needle: query.trim().to_lowercase(),
        }
    }

    /// Trimmed, lowercased search text.
    pub fn needle(&self) -> &str {
        &self.needle
    }

    pub fn is_identity(&self) -> bool {
        self.category == StatusFilter::All && self.needle.is_empty()
    }

    pub fn matches(&self, record: &RestrictionRecord) -> bool {
        self.category.accepts(&record.status)
            && (self.needle.is_empty() || record.matches_search(&self.needle))
    }

    pub fn apply(&self, records: &[RestrictionRecord]) -> Vec<RestrictionRecord> {
        records
            .iter()
            .filter(|record| self.matches(record))
            .cloned()
            .collect()
    }
}
