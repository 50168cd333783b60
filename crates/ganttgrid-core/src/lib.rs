//! # ganttgrid-core
//!
//! Core domain model and traits for the ganttgrid timeline layout engine.
//!
//! This crate provides:
//! - Calendar types: `CalendarDate`, `DateUnit`, `DateRange`
//! - Header tick marks: `DatePoint`
//! - View configuration: `ViewOptions`, `ViewOptionsOverride`
//! - The view contract: `GanttView`, `ViewState`, `GridGeometry`, `Granularity`
//! - Error types and result aliases
//!
//! ## Example
//!
//! ```rust
//! use ganttgrid_core::{CalendarDate, DateUnit};
//!
//! let date = CalendarDate::from_ymd(2024, 1, 29).unwrap();
//! assert_eq!(date.start_of_week().format("yyyy-MM-dd"), "2024-01-29");
//! assert_eq!(date.add(1, DateUnit::Month).format("yyyy年MM月"), "2024年02月");
//! assert_eq!(date.days_in_month(), 31);
//! ```

pub mod date;
pub mod options;
pub mod point;
pub mod view;

pub use date::{CalendarDate, DateRange, DateUnit, MAX_YEAR, MIN_YEAR};
pub use options::{ViewOptions, ViewOptionsOverride};
pub use point::{DatePoint, ExtraValue, IS_WEEKEND, PRIMARY_DATE_POINT_TOP, SECONDARY_DATE_POINT_TOP};
pub use view::{GanttView, Granularity, GridGeometry, ViewState, HEADER_HEIGHT};

use thiserror::Error;

// ============================================================================
// Errors
// ============================================================================

/// Layout engine error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Unsupported granularity: {0}")]
    UnsupportedGranularity(String),

    #[error("Invalid range: start {start} is after end {end}")]
    InvalidRange { start: String, end: String },

    #[error("Invalid options: {0}")]
    InvalidOptions(String),
}

/// Result alias used throughout the layout engine
pub type GridResult<T> = Result<T, GridError>;

// ============================================================================
// Tests
// ============================================================================
