//! # epgmcalendar - Devotional Preaching Calendar
//!
//! `epgmcalendar` is the pure lookup/computation side of the EPGM Companion
//! preaching guide: a static catalog of monthly devotional records, a
//! deterministic 7-column month grid, and the navigation/selection state the
//! calendar screen holds.
//!
//! Everything in this crate is synchronous and side-effect free. Missing data
//! is a normal value (`None` / `has_entry == false`), never an error; the
//! crate defines no error type at all.
//!
//! ## Quick Start
//!
//! ```
//! use chrono::NaiveDate;
//! use epgmcalendar::{DevotionalCatalog, MonthView};
//!
//! let catalog = DevotionalCatalog::builtin();
//! let today = NaiveDate::from_ymd_opt(2025, 12, 25).unwrap();
//!
//! let mut view = MonthView::open(&catalog, today);
//! assert_eq!((view.year(), view.month()), (2025, 12));
//!
//! // Christmas day has an entry, so it is preselected.
//! assert_eq!(view.selected_date_key(), Some("2025-12-25"));
//! println!("{}", view.selected_verse().unwrap());
//!
//! // Navigation wraps the year and clears the selection.
//! view.next_month();
//! assert_eq!((view.year(), view.month()), (2026, 1));
//! assert_eq!(view.selected_date_key(), None);
//! ```

pub mod catalog;
pub mod grid;
pub mod model;
pub mod view;

pub use catalog::{shift_month, DevotionalCatalog, FALLBACK_HORIZON_MONTHS};
pub use grid::{build_grid, days_in_month, CalendarCell, WEEKDAY_HEADERS};
pub use model::{
    date_key_for, format_date_key, format_month_key, parse_month_key, MonthData,
};
pub use view::MonthView;
