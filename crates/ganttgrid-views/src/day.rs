//! Day view: one secondary cell per day, one primary cell per week.

use ganttgrid_core::{
    CalendarDate, DatePoint, DateUnit, GanttView, Granularity, GridResult, ViewOptions, ViewState, IS_WEEKEND,
    PRIMARY_DATE_POINT_TOP, SECONDARY_DATE_POINT_TOP,
};

use crate::{cell_center, week_label_date, YEAR_MONTH_FORMAT};

pub const DEFAULT_CELL_WIDTH: f64 = 35.0;

const DAYS_PER_WEEK: f64 = 7.0;

#[derive(Clone, Debug)]
pub struct DayView {
    state: ViewState,
}

impl DayView {
    pub fn new(start: CalendarDate, end: CalendarDate, options: ViewOptions) -> GridResult<Self> {
        let mut view = Self {
            state: ViewState::new(options)?,
        };
        view.update_range(start, end)?;
        Ok(view)
    }

    /// Current year, widened to whole weeks; extends by one month.
    pub fn default_options(today: &CalendarDate) -> ViewOptions {
        ViewOptions::new(
            DEFAULT_CELL_WIDTH,
            today.start_of_year().start_of_week(),
            today.end_of_year().end_of_week(),
            1,
            DateUnit::Month,
        )
    }

    fn with_week_start(&self, date: &CalendarDate) -> CalendarDate {
        date.with_week_start(self.options().week_starts_on)
    }
}

impl GanttView for DayView {
    fn granularity(&self) -> Granularity {
        Granularity::Day
    }

    fn state(&self) -> &ViewState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ViewState {
        &mut self.state
    }

    fn start_of(&self, date: &CalendarDate) -> CalendarDate {
        self.with_week_start(date).start_of_week()
    }

    fn end_of(&self, date: &CalendarDate) -> CalendarDate {
        self.with_week_start(date).end_of_week()
    }

    fn primary_width(&self) -> f64 {
        self.cell_width() * DAYS_PER_WEEK
    }

    fn day_occupancy_width(&self, _date: &CalendarDate) -> f64 {
        self.cell_width()
    }

    fn show_week_backdrop(&self) -> bool {
        true
    }

    fn show_timeline(&self) -> bool {
        false
    }

    fn primary_date_points(&self) -> Vec<DatePoint> {
        let width = self.primary_width();
        CalendarDate::each_unit_in(&self.start(), &self.end_bound(), DateUnit::Week)
            .into_iter()
            .enumerate()
            .map(|(i, week_start)| {
                let label = week_label_date(&week_start).format(YEAR_MONTH_FORMAT);
                DatePoint::new(week_start, label, cell_center(i, width), PRIMARY_DATE_POINT_TOP)
            })
            .collect()
    }

    fn secondary_date_points(&self) -> Vec<DatePoint> {
        let width = self.cell_width();
        CalendarDate::each_unit_in(&self.start(), &self.end_bound(), DateUnit::Day)
            .into_iter()
            .enumerate()
            .map(|(i, day)| {
                DatePoint::new(day, day.day().to_string(), cell_center(i, width), SECONDARY_DATE_POINT_TOP)
                    .with_extra(IS_WEEKEND, day.is_weekend())
            })
            .collect()
    }
}
