use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use std::fmt;

/// Order of articles returned by `/everything`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SortBy {
    /// Articles more closely related to the query come first
    Relevancy,
    /// Articles from popular sources and publishers come first
    Popularity,
    /// Newest articles come first (the API default)
    PublishedAt,
    /// Any other value, sent verbatim
    Other(String),
}

impl SortBy {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Relevancy => "relevancy",
            Self::Popularity => "popularity",
            Self::PublishedAt => "publishedAt",
            Self::Other(value) => value,
        }
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for SortBy {
    fn from(value: &str) -> Self {
        match value {
            "relevancy" => Self::Relevancy,
            "popularity" => Self::Popularity,
            "publishedAt" => Self::PublishedAt,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for SortBy {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

/// A `from`/`to` bound for `/everything`.
///
/// Strings are sent unchanged, so anything News API accepts (`2024-01-31`,
/// `2024-01-31T12:00:00`) can be passed directly. `chrono` values are formatted
/// as ISO 8601.
///
/// ```
/// use chrono::{NaiveDate, TimeZone, Utc};
/// use newsapi::DateBound;
///
/// let date = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
/// assert_eq!(DateBound::from(date).as_str(), "2024-01-31");
///
/// let instant = Utc.with_ymd_and_hms(2024, 1, 31, 8, 30, 0).unwrap();
/// assert_eq!(DateBound::from(instant).as_str(), "2024-01-31T08:30:00Z");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DateBound(String);

impl DateBound {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DateBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DateBound {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for DateBound {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<NaiveDate> for DateBound {
    fn from(value: NaiveDate) -> Self {
        Self(value.format("%Y-%m-%d").to_string())
    }
}

impl From<NaiveDateTime> for DateBound {
    fn from(value: NaiveDateTime) -> Self {
        Self(value.format("%Y-%m-%dT%H:%M:%S").to_string())
    }
}

impl From<DateTime<Utc>> for DateBound {
    fn from(value: DateTime<Utc>) -> Self {
        Self(value.to_rfc3339_opts(SecondsFormat::Secs, true))
    }
}
