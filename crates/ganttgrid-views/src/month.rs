//! Month view: months under quarters, aligned to whole years.

use ganttgrid_core::{
    CalendarDate, DatePoint, DateUnit, GanttView, Granularity, GridResult, ViewOptions, ViewState,
    PRIMARY_DATE_POINT_TOP, SECONDARY_DATE_POINT_TOP,
};

use crate::cell_center;

pub const DEFAULT_CELL_WIDTH: f64 = 310.0;

const MONTHS_PER_QUARTER: f64 = 3.0;

#[derive(Clone, Debug)]
pub struct MonthView {
    state: ViewState,
}

impl MonthView {
    pub fn new(start: CalendarDate, end: CalendarDate, options: ViewOptions) -> GridResult<Self> {
        let mut view = Self {
            state: ViewState::new(options)?,
        };
        view.update_range(start, end)?;
        Ok(view)
    }

    /// Current year; extends by one year.
    pub fn default_options(today: &CalendarDate) -> ViewOptions {
        ViewOptions::new(DEFAULT_CELL_WIDTH, today.start_of_year(), today.end_of_year(), 1, DateUnit::Year)
    }
}

impl GanttView for MonthView {
    fn granularity(&self) -> Granularity {
        Granularity::Month
    }

    fn state(&self) -> &ViewState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ViewState {
        &mut self.state
    }

    fn start_of(&self, date: &CalendarDate) -> CalendarDate {
        date.start_of_year()
    }

    fn end_of(&self, date: &CalendarDate) -> CalendarDate {
        date.end_of_year()
    }

    fn primary_width(&self) -> f64 {
        self.cell_width() * MONTHS_PER_QUARTER
    }

    fn day_occupancy_width(&self, date: &CalendarDate) -> f64 {
        self.cell_width() / date.days_in_month() as f64
    }

    fn primary_date_points(&self) -> Vec<DatePoint> {
        let width = self.primary_width();
        CalendarDate::each_unit_in(&self.start(), &self.end_bound(), DateUnit::Quarter)
            .into_iter()
            .enumerate()
            .map(|(i, quarter)| {
                DatePoint::new(quarter, quarter.format("yyyy年QQQ"), cell_center(i, width), PRIMARY_DATE_POINT_TOP)
            })
            .collect()
    }

    fn secondary_date_points(&self) -> Vec<DatePoint> {
        let width = self.cell_width();
        CalendarDate::each_unit_in(&self.start(), &self.end_bound(), DateUnit::Month)
            .into_iter()
            .enumerate()
            .map(|(i, month)| {
                DatePoint::new(month, month.format("M月"), cell_center(i, width), SECONDARY_DATE_POINT_TOP)
            })
            .collect()
    }
}
