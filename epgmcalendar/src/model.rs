//! Data model for devotional months
//!
//! A [`MonthData`] record holds one calendar month of preaching content: a
//! monthly theme plus a devotional text per date. Records are immutable and
//! loaded once at startup.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One calendar month of devotional content
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MonthData {
    /// Calendar year (e.g. 2025)
    pub year: i32,
    /// Calendar month, 1-based (January = 1)
    pub month: u32,
    /// Monthly preaching theme
    pub theme: String,
    /// Devotional text keyed by ISO date string "YYYY-MM-DD"
    #[serde(default)]
    pub verses: BTreeMap<String, String>,
}

impl MonthData {
    /// Catalog key for this month ("YYYY-MM").
    ///
    /// Derived from the explicit `year`/`month` fields, never from the verse
    /// entries, so a month whose devotions are not yet published still has a
    /// stable key.
    pub fn month_key(&self) -> String {
        format_month_key(self.year, self.month)
    }

    /// Devotional text for an exact date key, if present
    pub fn verse(&self, date_key: &str) -> Option<&str> {
        self.verses.get(date_key).map(String::as_str)
    }

    /// Whether a devotional entry exists for the date key
    pub fn has_verse(&self, date_key: &str) -> bool {
        self.verses.contains_key(date_key)
    }
}

/// Format a month lookup key ("YYYY-MM")
pub fn format_month_key(year: i32, month: u32) -> String {
    format!("{year:04}-{month:02}")
}

/// Format a date key ("YYYY-MM-DD")
pub fn format_date_key(year: i32, month: u32, day: u32) -> String {
    format!("{year:04}-{month:02}-{day:02}")
}

/// Date key for a concrete calendar date
pub fn date_key_for(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parse a month key back into (year, month); `None` if malformed
pub fn parse_month_key(key: &str) -> Option<(i32, u32)> {
    let (year, month) = key.split_once('-')?;
    let year = year.parse().ok()?;
    let month: u32 = month.parse().ok()?;
    (1..=12).contains(&month).then_some((year, month))
}
