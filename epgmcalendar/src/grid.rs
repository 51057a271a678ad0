//! Month grid layout
//!
//! Deterministic 7-column layout for a calendar month: leading blanks so day
//! 1 lands in its weekday column (Sunday = column 0), trailing blanks up to
//! the next multiple of 7. Cells are transient and rebuilt on every render;
//! "today" is supplied by the caller so the output never depends on the wall
//! clock.

use chrono::{Datelike, NaiveDate};

use crate::model::{format_date_key, MonthData};

/// One grid square: either a real day or a blank pad
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarCell {
    /// Day number as displayed ("1".."31"), empty for pad cells
    pub day_label: String,
    /// "YYYY-MM-DD" for real days, `None` for pad cells
    pub date_key: Option<String>,
    /// Whether the month data holds a devotional entry for this date
    pub has_entry: bool,
    /// Whether this date equals the caller-supplied today key
    pub is_today: bool,
}

impl CalendarCell {
    fn blank() -> Self {
        Self {
            day_label: String::new(),
            date_key: None,
            has_entry: false,
            is_today: false,
        }
    }
}

/// Short weekday headers for the grid, Sunday first
pub const WEEKDAY_HEADERS: [&str; 7] = ["S", "M", "T", "W", "T", "F", "S"];

/// Build the cell layout for a month view.
///
/// The cell count is always the smallest multiple of 7 covering the leading
/// blanks plus the days of the month. `month_data` may be `None` (month with
/// no catalog entry): the layout is still produced, with `has_entry` false
/// everywhere. An invalid (year, month) yields an empty grid.
pub fn build_grid(
    year: i32,
    month: u32,
    month_data: Option<&MonthData>,
    today_key: &str,
) -> Vec<CalendarCell> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };
    let Some(days) = days_in_month(year, month) else {
        return Vec::new();
    };

    let leading = first.weekday().num_days_from_sunday() as usize;
    let days_in_month = days as usize;
    let total_cells = (leading + days_in_month).div_ceil(7) * 7;

    let mut cells = Vec::with_capacity(total_cells);
    for index in 0..total_cells {
        if index < leading || index >= leading + days_in_month {
            cells.push(CalendarCell::blank());
            continue;
        }

        let day = (index - leading + 1) as u32;
        let date_key = format_date_key(year, month, day);
        cells.push(CalendarCell {
            day_label: day.to_string(),
            has_entry: month_data.is_some_and(|md| md.has_verse(&date_key)),
            is_today: date_key == today_key,
            date_key: Some(date_key),
        });
    }

    cells
}

/// Number of days in a calendar month, `None` for an invalid (year, month)
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }?;
    Some(next.signed_duration_since(first).num_days() as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn month_with(verses: &[(&str, &str)]) -> MonthData {
        MonthData {
            year: 2025,
            month: 12,
            theme: "Emmanuel".to_string(),
            verses: verses
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<BTreeMap<_, _>>(),
        }
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2025, 2), Some(28));
        assert_eq!(days_in_month(2024, 2), Some(29));
        assert_eq!(days_in_month(2025, 12), Some(31));
        assert_eq!(days_in_month(2025, 4), Some(30));
    }

    #[test]
    fn test_days_in_month_invalid_month_is_none() {
        assert_eq!(days_in_month(2025, 0), None);
        assert_eq!(days_in_month(2025, 13), None);
    }

    #[test]
    fn test_grid_is_multiple_of_seven() {
        for (year, month) in [(2025, 1), (2025, 2), (2024, 2), (2025, 12), (2026, 1)] {
            let cells = build_grid(year, month, None, "");
            assert_eq!(cells.len() % 7, 0, "{year}-{month}");
            assert!(!cells.is_empty());
        }
    }

    #[test]
    fn test_first_day_lands_in_weekday_column() {
        // December 1st 2025 is a Monday -> column 1.
        let cells = build_grid(2025, 12, None, "");
        assert!(cells[0].date_key.is_none());
        assert_eq!(cells[1].date_key.as_deref(), Some("2025-12-01"));

        // June 1st 2025 is a Sunday -> column 0, no leading blanks.
        let cells = build_grid(2025, 6, None, "");
        assert_eq!(cells[0].date_key.as_deref(), Some("2025-06-01"));
    }

    #[test]
    fn test_every_day_appears_exactly_once() {
        let cells = build_grid(2025, 2, None, "");
        for day in 1..=28u32 {
            let key = format_date_key(2025, 2, day);
            let count = cells
                .iter()
                .filter(|c| c.date_key.as_deref() == Some(key.as_str()))
                .count();
            assert_eq!(count, 1, "{key}");
        }
        // Trailing cells past the 28th are blank pads.
        let reals = cells.iter().filter(|c| c.date_key.is_some()).count();
        assert_eq!(reals, 28);
    }

    #[test]
    fn test_has_entry_and_is_today_marking() {
        let md = month_with(&[("2025-12-25", "Christmas message")]);
        let cells = build_grid(2025, 12, Some(&md), "2025-12-14");

        let christmas = cells
            .iter()
            .find(|c| c.date_key.as_deref() == Some("2025-12-25"))
            .unwrap();
        assert!(christmas.has_entry);
        assert!(!christmas.is_today);

        let today = cells
            .iter()
            .find(|c| c.date_key.as_deref() == Some("2025-12-14"))
            .unwrap();
        assert!(today.is_today);
        assert!(!today.has_entry);
    }

    #[test]
    fn test_no_month_data_means_no_entries() {
        let cells = build_grid(2025, 12, None, "");
        assert!(cells.iter().all(|c| !c.has_entry));
    }

    #[test]
    fn test_invalid_month_yields_empty_grid() {
        assert!(build_grid(2025, 13, None, "").is_empty());
    }
}
