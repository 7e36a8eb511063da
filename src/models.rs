//! Data Model
//!
//! Records produced by the trending backend. Everything here is immutable
//! once received; views replace whole records on refetch.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Opaque repository identifier.
///
/// The backend sends the GitHub numeric id, but the client never interprets
/// it: it is kept as text and used verbatim as a URL path segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepositoryId(String);

impl RepositoryId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RepositoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RepositoryId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for RepositoryId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl<'de> Deserialize<'de> for RepositoryId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Number(i64),
            Text(String),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Number(n) => Self(n.to_string()),
            RawId::Text(s) => Self(s),
        })
    }
}

impl Serialize for RepositoryId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

/// One row of a trending collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepositorySummary {
    pub id: RepositoryId,
    pub full_name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub stars: u64,
    pub forks: u64,
    pub watchers: u64,
    /// Short name, sent by the backend but not displayed
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// Full repository record with its stats history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepositoryDetail {
    pub id: RepositoryId,
    pub full_name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub stars: u64,
    pub forks: u64,
    pub watchers: u64,
    pub url: String,
    /// Ascending by `date`, as delivered by the backend
    #[serde(default)]
    pub history: Vec<HistoryPoint>,
}

/// A dated snapshot of a repository's counters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryPoint {
    pub date: String,
    pub stars: u64,
    pub forks: u64,
    pub watchers: u64,
}

impl HistoryPoint {
    /// Calendar date as written in the timestamp.
    ///
    /// Accepts a bare date, a naive datetime (with optional fraction) or an
    /// RFC 3339 timestamp. The time of day and any offset are dropped without
    /// shifting the date.
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        parse_calendar_date(&self.date)
    }
}

pub(crate) fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local().date());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
        .map(|dt| dt.date())
        .ok()
}

/// Ranking window offered by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TrendingWindow {
    #[default]
    Daily,
    Weekly,
}

impl TrendingWindow {
    pub const ALL: [TrendingWindow; 2] = [TrendingWindow::Daily, TrendingWindow::Weekly];

    /// Path segment under `/api/trending/`
    pub fn as_path(&self) -> &'static str {
        match self {
            TrendingWindow::Daily => "daily",
            TrendingWindow::Weekly => "weekly",
        }
    }

    /// Tab caption
    pub fn label(&self) -> &'static str {
        match self {
            TrendingWindow::Daily => "Daily Trending",
            TrendingWindow::Weekly => "Weekly Growth",
        }
    }
}

impl fmt::Display for TrendingWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_path())
    }
}

/// Star/fork/watcher badge captions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatBadges {
    pub stars: String,
    pub forks: String,
    pub watchers: String,
}

impl StatBadges {
    /// Bare counts, as shown in list rows
    pub fn compact(stars: u64, forks: u64, watchers: u64) -> Self {
        Self {
            stars: format!("⭐ {}", stars),
            forks: format!("🔱 {}", forks),
            watchers: format!("👀 {}", watchers),
        }
    }

    /// Counts with units, as shown in the detail header
    pub fn labeled(stars: u64, forks: u64, watchers: u64) -> Self {
        Self {
            stars: format!("⭐ {} stars", stars),
            forks: format!("🔱 {} forks", forks),
            watchers: format!("👀 {} watchers", watchers),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        [self.stars.as_str(), self.forks.as_str(), self.watchers.as_str()].into_iter()
    }
}

impl RepositorySummary {
    pub fn badges(&self) -> StatBadges {
        StatBadges::compact(self.stars, self.forks, self.watchers)
    }

    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }
}

impl RepositoryDetail {
    pub fn badges(&self) -> StatBadges {
        StatBadges::labeled(self.stars, self.forks, self.watchers)
    }

    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }
}
