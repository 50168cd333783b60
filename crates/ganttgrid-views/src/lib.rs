//! # ganttgrid-views
//!
//! Concrete calendar views for the ganttgrid layout engine.
//!
//! This crate provides:
//! - `DayView`: days under weeks
//! - `WeekView`: weeks labeled with the month they belong to
//! - `MonthView`: months under quarters
//! - `QuarterView`: quarters under years
//! - `YearView`: one cell per year
//! - The view factory (`create_view`, `build_view`) and per-granularity defaults
//!
//! ## Example
//!
//! ```rust
//! use ganttgrid_core::{CalendarDate, DateRange, GanttView, Granularity, ViewOptionsOverride};
//! use ganttgrid_views::build_view;
//!
//! let start = CalendarDate::from_ymd(2024, 1, 1).unwrap();
//! let end = CalendarDate::from_ymd(2024, 1, 7).unwrap();
//! let view = build_view(
//!     Granularity::Day,
//!     Some(DateRange::new(start, end)),
//!     &ViewOptionsOverride::new(),
//!     &start,
//! )
//! .unwrap();
//!
//! let days = view.secondary_date_points();
//! assert_eq!(days.len(), 7);
//! assert_eq!(days[0].left, 17.5);
//! assert_eq!(view.primary_date_points()[0].label, "2024年01月");
//! ```

pub mod day;
pub mod month;
pub mod quarter;
pub mod week;
pub mod year;

pub use day::DayView;
pub use month::MonthView;
pub use quarter::QuarterView;
pub use week::WeekView;
pub use year::YearView;

use ganttgrid_core::{CalendarDate, DateRange, GanttView, Granularity, GridResult, ViewOptions, ViewOptionsOverride};

/// Week-start days within this many days of their month's end are labeled
/// with the following month.
pub const WEEK_LABEL_THRESHOLD: i64 = 3;

/// Label used for week-based primary cells
pub const YEAR_MONTH_FORMAT: &str = "yyyy年MM月";

/// Center of the `index`-th cell of the given width
pub(crate) fn cell_center(index: usize, width: f64) -> f64 {
    width / 2.0 + index as f64 * width
}

/// Date whose month names the week starting at `week_start`.
///
/// A week starting in the last days of a month is mostly made of the next
/// month, so it borrows the label of the following week.
pub fn week_label_date(week_start: &CalendarDate) -> CalendarDate {
    if week_start.days_in_month() - i64::from(week_start.day()) < WEEK_LABEL_THRESHOLD {
        week_start.add_weeks(1)
    } else {
        *week_start
    }
}

/// Built-in options of a granularity, relative to `today`
pub fn default_options(granularity: Granularity, today: &CalendarDate) -> ViewOptions {
    match granularity {
        Granularity::Day => DayView::default_options(today),
        Granularity::Week => WeekView::default_options(today),
        Granularity::Month => MonthView::default_options(today),
        Granularity::Quarter => QuarterView::default_options(today),
        Granularity::Year => YearView::default_options(today),
    }
}

/// Build a view from a granularity, an optional explicit range and a partial
/// options override.
///
/// The override is merged onto the granularity's defaults computed from
/// `today`. Without an explicit range the merged `start`/`end` are used.
pub fn build_view(
    granularity: Granularity,
    range: Option<DateRange>,
    overrides: &ViewOptionsOverride,
    today: &CalendarDate,
) -> GridResult<Box<dyn GanttView>> {
    let options = default_options(granularity, today).merge(overrides);
    let (start, end) = match range {
        Some(range) => (range.start, range.end),
        None => (options.start, options.end),
    };

    let view: Box<dyn GanttView> = match granularity {
        Granularity::Day => Box::new(DayView::new(start, end, options)?),
        Granularity::Week => Box::new(WeekView::new(start, end, options)?),
        Granularity::Month => Box::new(MonthView::new(start, end, options)?),
        Granularity::Quarter => Box::new(QuarterView::new(start, end, options)?),
        Granularity::Year => Box::new(YearView::new(start, end, options)?),
    };
    Ok(view)
}

/// Build a view from a granularity identifier, with defaults relative to the
/// local clock.
pub fn create_view(
    granularity: &str,
    range: Option<DateRange>,
    overrides: &ViewOptionsOverride,
) -> GridResult<Box<dyn GanttView>> {
    let granularity: Granularity = granularity.parse()?;
    build_view(granularity, range, overrides, &CalendarDate::today())
}
