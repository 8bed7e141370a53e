use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Serialize;
use std::path::PathBuf;

/// Metadata and raw source for one blog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostRecord {
    pub slug: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    pub tags: Vec<String>,
    pub draft: bool,
    #[serde(skip)]
    pub body: String,
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

impl PostRecord {
    /// Minimal published record; remaining fields are filled in with struct update syntax.
    pub fn new(slug: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            title: title.into(),
            summary: None,
            date: None,
            tags: Vec::new(),
            draft: false,
            body: String::new(),
            source: None,
        }
    }

    pub fn is_published(&self) -> bool {
        !self.draft
    }

    /// Parsed publication timestamp, if the date field is present and readable.
    pub fn published_at(&self) -> Option<NaiveDateTime> {
        self.date.as_deref().and_then(parse_post_date)
    }

    /// Sort key used for listings: unreadable or missing dates fall back to the epoch.
    pub fn sort_key(&self) -> NaiveDateTime {
        self.published_at().unwrap_or_else(epoch)
    }
}

/// `NaiveDateTime::default()` is 1970-01-01T00:00:00.
pub fn epoch() -> NaiveDateTime {
    NaiveDateTime::default()
}

const NAIVE_DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parses the date formats found in post front matter.
pub fn parse_post_date(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.naive_utc());
    }

    let naive = NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok());
    if naive.is_some() {
        return naive;
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }

    None
}
