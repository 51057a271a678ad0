//! Month navigation and selection state
//!
//! `MonthView` is the state the calendar screen holds: which (year, month) is
//! visible and which date, if any, is selected. Month transitions wrap at the
//! December/January boundary and always clear the selection; selection only
//! ever lands on a date that has a devotional entry.

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::catalog::{shift_month, DevotionalCatalog};
use crate::grid::{build_grid, CalendarCell};
use crate::model::{date_key_for, MonthData};

/// Calendar screen state over an immutable catalog
#[derive(Debug, Clone)]
pub struct MonthView<'a> {
    catalog: &'a DevotionalCatalog,
    year: i32,
    month: u32,
    selected_date_key: Option<String>,
}

impl<'a> MonthView<'a> {
    /// Open the calendar "at today": the visible month is the nearest month
    /// with data, and today is preselected only when that month actually has
    /// an entry for it.
    pub fn open(catalog: &'a DevotionalCatalog, today: NaiveDate) -> Self {
        let (year, month) = catalog.nearest_available_month(today.year(), today.month());
        let today_key = date_key_for(today);
        let selected_date_key = catalog
            .resolve_month(year, month)
            .filter(|md| md.has_verse(&today_key))
            .map(|_| today_key);

        debug!(year, month, selected = selected_date_key.is_some(), "Opened month view");
        Self {
            catalog,
            year,
            month,
            selected_date_key,
        }
    }

    /// Open the view directly on a given month, nothing selected
    pub fn at(catalog: &'a DevotionalCatalog, year: i32, month: u32) -> Self {
        Self {
            catalog,
            year,
            month,
            selected_date_key: None,
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn selected_date_key(&self) -> Option<&str> {
        self.selected_date_key.as_deref()
    }

    /// Catalog record for the visible month, if any
    pub fn month_data(&self) -> Option<&'a MonthData> {
        self.catalog.resolve_month(self.year, self.month)
    }

    /// Cell layout for the visible month
    pub fn grid(&self, today: NaiveDate) -> Vec<CalendarCell> {
        build_grid(self.year, self.month, self.month_data(), &date_key_for(today))
    }

    /// Go to the previous month; selection does not carry across months
    pub fn prev_month(&mut self) {
        let (year, month) = shift_month(self.year, self.month, -1);
        self.year = year;
        self.month = month;
        self.selected_date_key = None;
    }

    /// Go to the next month; selection does not carry across months
    pub fn next_month(&mut self) {
        let (year, month) = shift_month(self.year, self.month, 1);
        self.year = year;
        self.month = month;
        self.selected_date_key = None;
    }

    /// Select a date cell. Only dates with a devotional entry in the visible
    /// month are selectable; anything else leaves the selection unchanged.
    /// Returns true when the selection changed.
    pub fn select(&mut self, date_key: &str) -> bool {
        match self.month_data() {
            Some(md) if md.has_verse(date_key) => {
                self.selected_date_key = Some(date_key.to_string());
                true
            }
            _ => false,
        }
    }

    /// Devotional text for the selected date, if any
    pub fn selected_verse(&self) -> Option<&'a str> {
        let key = self.selected_date_key.as_deref()?;
        self.month_data()?.verse(key)
    }
}
