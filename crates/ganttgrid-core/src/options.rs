//! View configuration and option merging

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::{CalendarDate, DateUnit, GridError, GridResult};

/// Effective configuration of one view instance
#[derive(Clone, Debug, PartialEq)]
pub struct ViewOptions {
    /// Pixel width of one secondary cell
    pub cell_width: f64,
    /// Requested start of the rendered range (before alignment)
    pub start: CalendarDate,
    /// Requested end of the rendered range (before alignment)
    pub end: CalendarDate,
    /// How many `add_unit`s to append when the range is extended
    pub add_amount: i64,
    pub add_unit: DateUnit,
    /// Earliest start reachable by extension
    pub min: Option<CalendarDate>,
    /// Latest end reachable by extension
    pub max: Option<CalendarDate>,
    pub week_starts_on: Weekday,
}

impl ViewOptions {
    pub fn new(cell_width: f64, start: CalendarDate, end: CalendarDate, add_amount: i64, add_unit: DateUnit) -> Self {
        Self {
            cell_width,
            start,
            end,
            add_amount,
            add_unit,
            min: None,
            max: None,
            week_starts_on: Weekday::Mon,
        }
    }

    /// Build a fresh value with every present override key applied.
    pub fn merge(&self, overrides: &ViewOptionsOverride) -> ViewOptions {
        ViewOptions {
            cell_width: overrides.cell_width.unwrap_or(self.cell_width),
            start: overrides.start.unwrap_or(self.start),
            end: overrides.end.unwrap_or(self.end),
            add_amount: overrides.add_amount.unwrap_or(self.add_amount),
            add_unit: overrides.add_unit.unwrap_or(self.add_unit),
            min: overrides.min.or(self.min),
            max: overrides.max.or(self.max),
            week_starts_on: overrides.week_starts_on.unwrap_or(self.week_starts_on),
        }
    }

    pub fn validate(&self) -> GridResult<()> {
        if !self.cell_width.is_finite() || self.cell_width <= 0.0 {
            return Err(GridError::InvalidOptions(format!(
                "cell width must be a positive number, got {}",
                self.cell_width
            )));
        }
        if self.add_amount <= 0 {
            return Err(GridError::InvalidOptions(format!(
                "add amount must be positive, got {}",
                self.add_amount
            )));
        }
        if let (Some(min), Some(max)) = (self.min, self.max) {
            if min > max {
                return Err(GridError::InvalidOptions(format!("min {min} is after max {max}")));
            }
        }
        Ok(())
    }
}

/// Partial configuration supplied by a caller or a config file
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewOptionsOverride {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cell_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<CalendarDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<CalendarDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub add_amount: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub add_unit: Option<DateUnit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<CalendarDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<CalendarDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub week_starts_on: Option<Weekday>,
}

impl ViewOptionsOverride {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cell_width(mut self, cell_width: f64) -> Self {
        self.cell_width = Some(cell_width);
        self
    }

    pub fn start(mut self, start: CalendarDate) -> Self {
        self.start = Some(start);
        self
    }

    pub fn end(mut self, end: CalendarDate) -> Self {
        self.end = Some(end);
        self
    }

    /// Extension increment
    pub fn extend_by(mut self, amount: i64, unit: DateUnit) -> Self {
        self.add_amount = Some(amount);
        self.add_unit = Some(unit);
        self
    }

    pub fn min(mut self, min: CalendarDate) -> Self {
        self.min = Some(min);
        self
    }

    pub fn max(mut self, max: CalendarDate) -> Self {
        self.max = Some(max);
        self
    }

    pub fn week_starts_on(mut self, weekday: Weekday) -> Self {
        self.week_starts_on = Some(weekday);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Layer `other` on top of `self`; keys present in `other` win.
    pub fn overlay(&self, other: &ViewOptionsOverride) -> ViewOptionsOverride {
        ViewOptionsOverride {
            cell_width: other.cell_width.or(self.cell_width),
            start: other.start.or(self.start),
            end: other.end.or(self.end),
            add_amount: other.add_amount.or(self.add_amount),
            add_unit: other.add_unit.or(self.add_unit),
            min: other.min.or(self.min),
            max: other.max.or(self.max),
            week_starts_on: other.week_starts_on.or(self.week_starts_on),
        }
    }
}
