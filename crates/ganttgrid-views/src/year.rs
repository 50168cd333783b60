//! Year view: one cell per year.
//!
//! The primary row has one unlabeled point per year; the year label lives in
//! the secondary row.

use ganttgrid_core::{
    CalendarDate, DatePoint, DateUnit, GanttView, Granularity, GridResult, ViewOptions, ViewState,
    PRIMARY_DATE_POINT_TOP, SECONDARY_DATE_POINT_TOP,
};

use crate::cell_center;

pub const DEFAULT_CELL_WIDTH: f64 = 480.0;

#[derive(Clone, Debug)]
pub struct YearView {
    state: ViewState,
}

impl YearView {
    pub fn new(start: CalendarDate, end: CalendarDate, options: ViewOptions) -> GridResult<Self> {
        let mut view = Self {
            state: ViewState::new(options)?,
        };
        view.update_range(start, end)?;
        Ok(view)
    }

    /// Two years back through two years ahead; extends by one year.
    pub fn default_options(today: &CalendarDate) -> ViewOptions {
        ViewOptions::new(
            DEFAULT_CELL_WIDTH,
            today.start_of_year().add_years(-2),
            today.end_of_year().add_years(2),
            1,
            DateUnit::Year,
        )
    }

    fn years(&self) -> Vec<CalendarDate> {
        CalendarDate::each_unit_in(&self.start(), &self.end_bound(), DateUnit::Year)
    }
}

impl GanttView for YearView {
    fn granularity(&self) -> Granularity {
        Granularity::Year
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
        self.cell_width()
    }

    fn day_occupancy_width(&self, date: &CalendarDate) -> f64 {
        self.cell_width() / date.days_in_year() as f64
    }

    fn primary_date_points(&self) -> Vec<DatePoint> {
        let width = self.primary_width();
        self.years()
            .into_iter()
            .enumerate()
            .map(|(i, year)| DatePoint::new(year, "", cell_center(i, width), PRIMARY_DATE_POINT_TOP))
            .collect()
    }

    fn secondary_date_points(&self) -> Vec<DatePoint> {
        let width = self.cell_width();
        self.years()
            .into_iter()
            .enumerate()
            .map(|(i, year)| DatePoint::new(year, year.format("yyyy年"), cell_center(i, width), SECONDARY_DATE_POINT_TOP))
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
    fn three_years() {
        let start = date(2023, 6, 1);
        let view = YearView::new(start, date(2025, 2, 1), YearView::default_options(&start)).unwrap();

        let secondary = view.secondary_date_points();
        let labels: Vec<&str> = secondary.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["2023年", "2024年", "2025年"]);
        let lefts: Vec<f64> = secondary.iter().map(|p| p.left).collect();
        assert_eq!(lefts, vec![240.0, 720.0, 1200.0]);

        let primary = view.primary_date_points();
        assert_eq!(primary.len(), 3);
        assert!(primary.iter().all(|p| p.label.is_empty()));
        assert_eq!(view.width(), 1440.0);
    }

    #[test]
    fn occupancy_depends_on_year_length() {
        let start = date(2024, 1, 1);
        let view = YearView::new(start, start, YearView::default_options(&start)).unwrap();
        assert_eq!(view.day_occupancy_width(&date(2024, 7, 1)), 480.0 / 366.0);
        assert_eq!(view.day_occupancy_width(&date(2023, 7, 1)), 480.0 / 365.0);
    }
}
