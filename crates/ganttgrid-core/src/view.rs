//! The view contract
//!
//! A view maps an aligned date range onto two header rows. Concrete views
//! only supply their alignment rule, their nesting ratio and their point
//! generation; positioning, hit testing and range extension are shared here.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{
    CalendarDate, DatePoint, DateRange, GridError, GridResult, ViewOptions, PRIMARY_DATE_POINT_TOP,
    SECONDARY_DATE_POINT_TOP,
};

/// Total header height in pixels (both rows)
pub const HEADER_HEIGHT: f64 = 44.0;

// ============================================================================
// Granularity
// ============================================================================

/// Calendar resolution a view renders at
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Day,
    Week,
    Month,
    Quarter,
    Year,
}

impl Granularity {
    pub const ALL: [Granularity; 5] = [
        Granularity::Day,
        Granularity::Week,
        Granularity::Month,
        Granularity::Quarter,
        Granularity::Year,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Granularity::Day => "day",
            Granularity::Week => "week",
            Granularity::Month => "month",
            Granularity::Quarter => "quarter",
            Granularity::Year => "year",
        }
    }

    /// Number of secondary cells nested in one primary cell
    pub fn units_per_primary_cell(&self) -> u32 {
        match self {
            Granularity::Day => 7,
            Granularity::Week => 1,
            Granularity::Month => 3,
            Granularity::Quarter => 4,
            Granularity::Year => 1,
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Granularity {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "day" => Ok(Granularity::Day),
            "week" => Ok(Granularity::Week),
            "month" => Ok(Granularity::Month),
            "quarter" => Ok(Granularity::Quarter),
            "year" => Ok(Granularity::Year),
            _ => Err(GridError::UnsupportedGranularity(s.to_string())),
        }
    }
}

// ============================================================================
// Geometry
// ============================================================================

/// Pixel parameters of the header grid
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridGeometry {
    pub cell_width: f64,
    pub primary_width: f64,
    /// Width of the whole rendered range
    pub width: f64,
    pub header_height: f64,
    pub primary_row_height: f64,
    pub secondary_row_height: f64,
    pub primary_top: f64,
    pub secondary_top: f64,
}

// ============================================================================
// View state
// ============================================================================

/// Range and options owned by every view
#[derive(Clone, Debug, PartialEq)]
pub struct ViewState {
    start: CalendarDate,
    end: CalendarDate,
    options: ViewOptions,
}

impl ViewState {
    /// Validated state whose range is the unaligned requested range.
    /// Views align it right after construction through `update_range`.
    pub fn new(options: ViewOptions) -> GridResult<Self> {
        options.validate()?;
        Ok(Self {
            start: options.start,
            end: options.end,
            options,
        })
    }

    pub fn start(&self) -> CalendarDate {
        self.start
    }

    pub fn end(&self) -> CalendarDate {
        self.end
    }

    pub fn options(&self) -> &ViewOptions {
        &self.options
    }

    fn set_range(&mut self, start: CalendarDate, end: CalendarDate) {
        self.start = start;
        self.end = end;
    }
}

/// Offsets are rounded to three decimals, so a day start may sit up to half a
/// thousandth of a pixel left of its exact boundary.
const HIT_TOLERANCE: f64 = 1e-3;

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

// ============================================================================
// GanttView
// ============================================================================

/// One granularity of the calendar strip
pub trait GanttView: fmt::Debug + Send + Sync {
    fn granularity(&self) -> Granularity;

    fn state(&self) -> &ViewState;

    fn state_mut(&mut self) -> &mut ViewState;

    /// Alignment rule for the start of a range
    fn start_of(&self, date: &CalendarDate) -> CalendarDate;

    /// Alignment rule for the end of a range
    fn end_of(&self, date: &CalendarDate) -> CalendarDate;

    /// Pixel width of one primary cell
    fn primary_width(&self) -> f64;

    /// Pixel width one day occupies at this resolution
    fn day_occupancy_width(&self, date: &CalendarDate) -> f64;

    fn primary_date_points(&self) -> Vec<DatePoint>;

    fn secondary_date_points(&self) -> Vec<DatePoint>;

    fn show_week_backdrop(&self) -> bool {
        false
    }

    fn show_timeline(&self) -> bool {
        true
    }

    fn start(&self) -> CalendarDate {
        self.state().start()
    }

    fn end(&self) -> CalendarDate {
        self.state().end()
    }

    fn options(&self) -> &ViewOptions {
        self.state().options()
    }

    fn cell_width(&self) -> f64 {
        self.options().cell_width
    }

    /// Exclusive upper bound used when walking the range.
    ///
    /// The aligned end is the last second of its unit; one more second
    /// lands on the next unit start, so a unit starting exactly there is
    /// excluded and the unit containing `end` is included.
    fn end_bound(&self) -> CalendarDate {
        self.end().add_seconds(1)
    }

    fn width(&self) -> f64 {
        self.cell_width() * self.secondary_date_points().len() as f64
    }

    fn geometry(&self) -> GridGeometry {
        GridGeometry {
            cell_width: self.cell_width(),
            primary_width: self.primary_width(),
            width: self.width(),
            header_height: HEADER_HEIGHT,
            primary_row_height: HEADER_HEIGHT / 2.0,
            secondary_row_height: HEADER_HEIGHT / 2.0,
            primary_top: PRIMARY_DATE_POINT_TOP,
            secondary_top: SECONDARY_DATE_POINT_TOP,
        }
    }

    /// Summed occupancy of the days from `start` (inclusive) to `end`
    /// (exclusive); negative when `end` precedes `start`.
    fn date_interval_width(&self, start: &CalendarDate, end: &CalendarDate) -> f64 {
        let days = end.difference_in_calendar_days(start);
        let from = if days >= 0 { start } else { end };
        let total: f64 = (0..days.abs())
            .map(|offset| self.day_occupancy_width(&from.add_days(offset)))
            .sum();
        round3(if days >= 0 { total } else { -total })
    }

    /// Pixel offset of the start of `date`'s day
    fn x_point_by_date(&self, date: &CalendarDate) -> f64 {
        self.date_interval_width(&self.start(), date)
    }

    /// Day under pixel offset `x`, `None` when the view has no cells
    fn date_by_x_point(&self, x: f64) -> Option<CalendarDate> {
        let points = self.secondary_date_points();
        let last = points.len().checked_sub(1)?;
        let cell_width = self.cell_width();
        let x = x.max(0.0) + HIT_TOLERANCE;
        let index = ((x / cell_width).floor() as usize).min(last);
        let cell_start = points[index].date;

        let day_width = self.day_occupancy_width(&cell_start);
        if day_width >= cell_width {
            return Some(cell_start);
        }
        let last_day = (cell_width / day_width).round() as i64 - 1;
        let day = (((x % cell_width) / day_width).floor() as i64).min(last_day);
        Some(cell_start.add_days(day))
    }

    /// Width covered by the days `start..=end`
    fn date_range_width(&self, start: &CalendarDate, end: &CalendarDate) -> f64 {
        self.date_interval_width(&start.start_of_day(), &end.add_days(1).start_of_day())
    }

    /// Center of `today`'s day when it lies strictly inside the range
    fn today_x_point(&self, today: &CalendarDate) -> Option<f64> {
        let today = today.start_of_day();
        if self.start() < today && today < self.end() {
            Some(self.x_point_by_date(&today) + self.day_occupancy_width(&today) / 2.0)
        } else {
            None
        }
    }

    /// Align and store a new range.
    fn update_range(&mut self, start: CalendarDate, end: CalendarDate) -> GridResult<()> {
        let week_starts_on = self.options().week_starts_on;
        let start = self.start_of(&start.with_week_start(week_starts_on));
        let end = self.end_of(&end.with_week_start(week_starts_on));
        if start > end {
            return Err(GridError::InvalidRange {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        self.state_mut().set_range(start, end);
        Ok(())
    }

    /// Prepend one extension increment; returns the added `[new start, old start]`.
    fn extend_start(&mut self) -> Option<DateRange> {
        let options = self.options();
        let (amount, unit, min) = (options.add_amount, options.add_unit, options.min);
        let origin = self.start();
        let start = self.start_of(&origin.add(-amount, unit));
        if start >= origin || min.is_some_and(|min| start < min) {
            return None;
        }
        let end = self.end();
        self.state_mut().set_range(start, end);
        Some(DateRange::new(start, origin))
    }

    /// Append one extension increment; returns the added `[old end, new end]`.
    fn extend_end(&mut self) -> Option<DateRange> {
        let options = self.options();
        let (amount, unit, max) = (options.add_amount, options.add_unit, options.max);
        let origin = self.end();
        let end = self.end_of(&origin.add(amount, unit));
        if end <= origin || max.is_some_and(|max| end > max) {
            return None;
        }
        let start = self.start();
        self.state_mut().set_range(start, end);
        Some(DateRange::new(origin, end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn granularity_parsing_is_case_insensitive() {
        assert_eq!("Day".parse::<Granularity>().unwrap(), Granularity::Day);
        assert_eq!(" quarter ".parse::<Granularity>().unwrap(), Granularity::Quarter);
        assert_eq!(
            "hour".parse::<Granularity>().unwrap_err(),
            GridError::UnsupportedGranularity("hour".into())
        );
    }

    #[test]
    fn granularity_round_trips_through_display() {
        for granularity in Granularity::ALL {
            assert_eq!(granularity.to_string().parse::<Granularity>().unwrap(), granularity);
        }
    }

    #[test]
    fn state_rejects_invalid_options() {
        let date = CalendarDate::from_ymd(2024, 1, 1).unwrap();
        let options = ViewOptions::new(-1.0, date, date, 1, crate::DateUnit::Day);
        assert!(matches!(ViewState::new(options), Err(GridError::InvalidOptions(_))));
    }

    #[test]
    fn rounding_keeps_three_decimals() {
        assert_eq!(round3(10.0 / 3.0), 3.333);
        assert_eq!(round3(-2.0 / 3.0), -0.667);
    }
}
