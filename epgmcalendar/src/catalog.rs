//! Devotional month catalog
//!
//! The catalog is the complete static set of devotional data, one record per
//! calendar month, keyed by "YYYY-MM". It is loaded once and immutable at
//! runtime. Absence of a month is a normal value, never an error.

use std::collections::BTreeMap;

use tracing::debug;

use crate::model::{format_month_key, parse_month_key, MonthData};

/// How far the nearest-month search looks, in months, in each direction
pub const FALLBACK_HORIZON_MONTHS: i32 = 24;

/// Embedded ministry preaching data (year, month JSON)
const EMBEDDED_MONTHS: &[&str] = &[
    include_str!("../data/2025/january.json"),
    include_str!("../data/2025/february.json"),
    include_str!("../data/2025/march.json"),
    include_str!("../data/2025/april.json"),
    include_str!("../data/2025/may.json"),
    include_str!("../data/2025/june.json"),
    include_str!("../data/2025/july.json"),
    include_str!("../data/2025/august.json"),
    include_str!("../data/2025/september.json"),
    include_str!("../data/2025/october.json"),
    include_str!("../data/2025/november.json"),
    include_str!("../data/2025/december.json"),
    include_str!("../data/2026/january.json"),
];

/// Immutable mapping from "YYYY-MM" to [`MonthData`]
#[derive(Debug, Clone, Default)]
pub struct DevotionalCatalog {
    months: BTreeMap<String, MonthData>,
}

impl DevotionalCatalog {
    /// Build the catalog of embedded ministry months
    pub fn builtin() -> Self {
        let months = EMBEDDED_MONTHS
            .iter()
            .map(|raw| serde_json::from_str(raw).expect("embedded devotional month is valid JSON"));
        Self::from_months(months)
    }

    /// Build a catalog from month records.
    ///
    /// Later records win on key collision (one record per month expected).
    pub fn from_months(months: impl IntoIterator<Item = MonthData>) -> Self {
        let mut map = BTreeMap::new();
        for month in months {
            let key = month.month_key();
            if map.insert(key.clone(), month).is_some() {
                debug!(key = key.as_str(), "Duplicate month record replaced");
            }
        }
        Self { months: map }
    }

    /// Direct lookup by (year, month); `None` when the catalog has no data
    pub fn resolve_month(&self, year: i32, month: u32) -> Option<&MonthData> {
        self.months.get(&format_month_key(year, month))
    }

    /// Lookup by a preformatted "YYYY-MM" key
    pub fn resolve_key(&self, month_key: &str) -> Option<&MonthData> {
        self.months.get(month_key)
    }

    /// Earliest month present in the catalog
    ///
    /// "YYYY-MM" keys sort chronologically, so this is the first map entry.
    pub fn earliest_month(&self) -> Option<(i32, u32)> {
        self.months.keys().next().and_then(|k| parse_month_key(k))
    }

    /// Nearest month with data, searching outward from the request.
    ///
    /// The requested month is checked first; then at each distance 1, 2, ...
    /// up to [`FALLBACK_HORIZON_MONTHS`] the earlier month is checked before
    /// the later one (back-before-forward tie-break). When the horizon is
    /// exhausted the catalog's earliest month is returned; an empty catalog
    /// echoes the request back.
    pub fn nearest_available_month(&self, year: i32, month: u32) -> (i32, u32) {
        if self.resolve_month(year, month).is_some() {
            return (year, month);
        }

        for step in 1..=FALLBACK_HORIZON_MONTHS {
            let back = shift_month(year, month, -step);
            if self.resolve_month(back.0, back.1).is_some() {
                return back;
            }
            let forward = shift_month(year, month, step);
            if self.resolve_month(forward.0, forward.1).is_some() {
                return forward;
            }
        }

        self.earliest_month().unwrap_or((year, month))
    }

    /// All month keys, chronologically ordered
    pub fn month_keys(&self) -> impl Iterator<Item = &str> {
        self.months.keys().map(String::as_str)
    }

    /// Number of months in the catalog
    pub fn len(&self) -> usize {
        self.months.len()
    }

    /// Whether the catalog holds no months at all
    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }
}

/// Shift a (year, 1-based month) by a signed number of months
pub fn shift_month(year: i32, month: u32, delta: i32) -> (i32, u32) {
    let total = year * 12 + (month as i32 - 1) + delta;
    (total.div_euclid(12), (total.rem_euclid(12) + 1) as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shift_month_wraps_years() {
        assert_eq!(shift_month(2025, 1, -1), (2024, 12));
        assert_eq!(shift_month(2025, 12, 1), (2026, 1));
        assert_eq!(shift_month(2025, 5, -24), (2023, 5));
        assert_eq!(shift_month(2025, 6, 0), (2025, 6));
    }

    #[test]
    fn test_builtin_catalog_loads() {
        let catalog = DevotionalCatalog::builtin();
        assert_eq!(catalog.len(), 13);
        assert_eq!(catalog.earliest_month(), Some((2025, 1)));
        assert!(catalog.resolve_month(2025, 12).is_some());
        assert!(catalog.resolve_month(2026, 2).is_none());
    }

    #[test]
    fn test_builtin_keys_match_fields() {
        let catalog = DevotionalCatalog::builtin();
        for key in catalog.month_keys() {
            let (year, month) = parse_month_key(key).unwrap();
            let md = catalog.resolve_month(year, month).unwrap();
            assert_eq!(md.month_key(), key);
            // Every verse key belongs to its month.
            for date_key in md.verses.keys() {
                assert!(date_key.starts_with(key), "{date_key} outside {key}");
            }
        }
    }
}
