//! Quarter view: quarters under years.

use ganttgrid_core::{
    CalendarDate, DatePoint, DateUnit, GanttView, Granularity, GridResult, ViewOptions, ViewState,
    PRIMARY_DATE_POINT_TOP, SECONDARY_DATE_POINT_TOP,
};

use crate::cell_center;

pub const DEFAULT_CELL_WIDTH: f64 = 500.0;

const QUARTERS_PER_YEAR: f64 = 4.0;

#[derive(Clone, Debug)]
pub struct QuarterView {
    state: ViewState,
}

impl QuarterView {
    pub fn new(start: CalendarDate, end: CalendarDate, options: ViewOptions) -> GridResult<Self> {
        let mut view = Self {
            state: ViewState::new(options)?,
        };
        view.update_range(start, end)?;
        Ok(view)
    }

    /// Previous year through next year; extends by one year.
    pub fn default_options(today: &CalendarDate) -> ViewOptions {
        ViewOptions::new(
            DEFAULT_CELL_WIDTH,
            today.start_of_year().add_years(-1),
            today.end_of_year().add_years(1),
            1,
            DateUnit::Year,
        )
    }
}

impl GanttView for QuarterView {
    fn granularity(&self) -> Granularity {
        Granularity::Quarter
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
        self.cell_width() * QUARTERS_PER_YEAR
    }

    fn day_occupancy_width(&self, date: &CalendarDate) -> f64 {
        self.cell_width() / date.days_in_quarter() as f64
    }

    fn primary_date_points(&self) -> Vec<DatePoint> {
        let width = self.primary_width();
        CalendarDate::each_unit_in(&self.start(), &self.end_bound(), DateUnit::Year)
            .into_iter()
            .enumerate()
            .map(|(i, year)| DatePoint::new(year, year.format("yyyy年"), cell_center(i, width), PRIMARY_DATE_POINT_TOP))
            .collect()
    }

    fn secondary_date_points(&self) -> Vec<DatePoint> {
        let width = self.cell_width();
        CalendarDate::each_unit_in(&self.start(), &self.end_bound(), DateUnit::Quarter)
            .into_iter()
            .enumerate()
            .map(|(i, quarter)| {
                DatePoint::new(quarter, quarter.format("yyyy年QQQ"), cell_center(i, width), SECONDARY_DATE_POINT_TOP)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(year: i32, month: u32, day: u32) -> CalendarDate {
        CalendarDate::from_ymd(year, month, day).unwrap()
    }

    #[test]
    fn one_year_of_quarters() {
        let start = date(2024, 3, 3);
        let view = QuarterView::new(start, date(2024, 9, 9), QuarterView::default_options(&start)).unwrap();

        let secondary = view.secondary_date_points();
        let labels: Vec<&str> = secondary.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["2024年Q1", "2024年Q2", "2024年Q3", "2024年Q4"]);
        assert_eq!(secondary[3].left, 1750.0);

        let primary = view.primary_date_points();
        assert_eq!(primary.len(), 1);
        assert_eq!(primary[0].label, "2024年");
        assert_eq!(primary[0].left, 1000.0);
    }

    #[test]
    fn occupancy_depends_on_quarter_length() {
        let start = date(2024, 1, 1);
        let view = QuarterView::new(start, start, QuarterView::default_options(&start)).unwrap();
        assert_eq!(view.day_occupancy_width(&date(2024, 2, 1)), 500.0 / 91.0);
        assert_eq!(view.day_occupancy_width(&date(2024, 8, 1)), 500.0 / 92.0);
    }

    #[test]
    fn defaults_span_three_years() {
        let options = QuarterView::default_options(&date(2024, 6, 1));
        assert_eq!(options.start, date(2023, 1, 1));
        assert_eq!(options.end, CalendarDate::from_ymd_hms(2025, 12, 31, 23, 59, 59).unwrap());
    }
}
