//! Week view: one secondary cell per week, each week labeled in the primary
//! row with the month it belongs to.
//!
//! A week belongs to the month its label is drawn from (see
//! [`week_label_date`]). Ranges snap to month boundaries at week resolution:
//! they start at the first week of a month and end with the last one.
//!
//! Extension shifts the edge by `add_amount` units and then snaps it the same
//! way, so a one-month step can add two months of weeks when the shifted date
//! falls in a week that belongs to the month before.

use ganttgrid_core::{
    CalendarDate, DatePoint, DateUnit, GanttView, Granularity, GridResult, ViewOptions, ViewState,
    PRIMARY_DATE_POINT_TOP, SECONDARY_DATE_POINT_TOP,
};

use crate::{cell_center, week_label_date, YEAR_MONTH_FORMAT};

pub const DEFAULT_CELL_WIDTH: f64 = 280.0;

const WEEK_NUMBER_FORMAT: &str = "第w周";

/// First day of the month a week belongs to
fn week_month(week_start: &CalendarDate) -> CalendarDate {
    week_label_date(week_start).start_of_month()
}

/// Middle day of a week. Its ISO week holds at least four of the week's
/// days, whichever weekday the week starts on.
fn week_number_date(week_start: &CalendarDate) -> CalendarDate {
    week_start.add_days(3)
}

/// Start of the first week belonging to `month_start`'s month
fn first_week_of(month_start: &CalendarDate) -> CalendarDate {
    let candidate = month_start.start_of_week();
    if week_month(&candidate) == *month_start {
        candidate
    } else {
        candidate.add_weeks(1)
    }
}

#[derive(Clone, Debug)]
pub struct WeekView {
    state: ViewState,
}

impl WeekView {
    pub fn new(start: CalendarDate, end: CalendarDate, options: ViewOptions) -> GridResult<Self> {
        let mut view = Self {
            state: ViewState::new(options)?,
        };
        view.update_range(start, end)?;
        Ok(view)
    }

    /// Current year; extends by one month.
    pub fn default_options(today: &CalendarDate) -> ViewOptions {
        ViewOptions::new(
            DEFAULT_CELL_WIDTH,
            today.start_of_year().start_of_week(),
            today.end_of_year().end_of_week(),
            1,
            DateUnit::Month,
        )
    }

    fn month_of(&self, date: &CalendarDate) -> CalendarDate {
        week_month(&date.with_week_start(self.options().week_starts_on).start_of_week())
    }

    fn weeks(&self) -> Vec<CalendarDate> {
        CalendarDate::each_unit_in(&self.start(), &self.end_bound(), DateUnit::Week)
    }
}

impl GanttView for WeekView {
    fn granularity(&self) -> Granularity {
        Granularity::Week
    }

    fn state(&self) -> &ViewState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ViewState {
        &mut self.state
    }

    fn start_of(&self, date: &CalendarDate) -> CalendarDate {
        first_week_of(&self.month_of(date))
    }

    fn end_of(&self, date: &CalendarDate) -> CalendarDate {
        first_week_of(&self.month_of(date).add_months(1)).add_seconds(-1)
    }

    fn primary_width(&self) -> f64 {
        self.cell_width()
    }

    fn day_occupancy_width(&self, _date: &CalendarDate) -> f64 {
        self.cell_width() / 7.0
    }

    fn primary_date_points(&self) -> Vec<DatePoint> {
        let width = self.primary_width();
        self.weeks()
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
        self.weeks()
            .into_iter()
            .enumerate()
            .map(|(i, week_start)| {
                DatePoint::new(
                    week_start,
                    week_number_date(&week_start).format(WEEK_NUMBER_FORMAT),
                    cell_center(i, width),
                    SECONDARY_DATE_POINT_TOP,
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;
    use ganttgrid_core::ViewOptionsOverride;
    use pretty_assertions::assert_eq;

    fn date(year: i32, month: u32, day: u32) -> CalendarDate {
        CalendarDate::from_ymd(year, month, day).unwrap()
    }

    fn view(start: CalendarDate, end: CalendarDate) -> WeekView {
        WeekView::new(start, end, WeekView::default_options(&start)).unwrap()
    }

    #[test]
    fn january_2024_has_four_weeks() {
        let view = view(date(2024, 1, 15), date(2024, 1, 15));
        assert_eq!(view.start(), date(2024, 1, 1));
        // The week of Jan 29 belongs to February
        assert_eq!(view.end(), CalendarDate::from_ymd_hms(2024, 1, 28, 23, 59, 59).unwrap());

        let secondary = view.secondary_date_points();
        let labels: Vec<&str> = secondary.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["第1周", "第2周", "第3周", "第4周"]);
        let lefts: Vec<f64> = secondary.iter().map(|p| p.left).collect();
        assert_eq!(lefts, vec![140.0, 420.0, 700.0, 980.0]);

        let primary = view.primary_date_points();
        assert!(primary.iter().all(|p| p.label == "2024年01月"));
    }

    #[test]
    fn alignment_follows_week_membership() {
        let view = view(date(2024, 1, 1), date(2024, 1, 1));
        // Mar 1 2024 sits in the week of Feb 26, which belongs to February,
        // whose first week starts on Jan 29.
        assert_eq!(view.start_of(&date(2024, 3, 1)), date(2024, 1, 29));
        assert_eq!(
            view.end_of(&date(2024, 3, 1)),
            CalendarDate::from_ymd_hms(2024, 3, 3, 23, 59, 59).unwrap()
        );
    }

    #[test]
    fn straddling_week_is_labeled_with_next_month() {
        let view = view(date(2024, 1, 1), date(2024, 2, 15));
        let primary = view.primary_date_points();
        let jan_29 = primary.iter().find(|p| p.date == date(2024, 1, 29)).unwrap();
        assert_eq!(jan_29.label, "2024年02月");
    }

    #[test]
    fn sunday_weeks_are_numbered_by_their_majority_iso_week() {
        let options = WeekView::default_options(&date(2024, 1, 1))
            .merge(&ViewOptionsOverride::new().week_starts_on(Weekday::Sun));
        let view = WeekView::new(date(2024, 1, 1), date(2024, 1, 20), options).unwrap();

        let secondary = view.secondary_date_points();
        let weeks: Vec<(CalendarDate, &str)> = secondary.iter().map(|p| (p.date, p.label.as_str())).collect();
        assert_eq!(weeks[0], (date(2023, 12, 31), "第1周"));
        assert_eq!(weeks[1], (date(2024, 1, 7), "第2周"));
        assert_eq!(weeks[2], (date(2024, 1, 14), "第3周"));
    }

    #[test]
    fn saturday_weeks_are_numbered_by_their_majority_iso_week() {
        // Sat Dec 30 .. Fri Jan 5 has five days in 2024-W01
        assert_eq!(week_number_date(&date(2023, 12, 30)).format(WEEK_NUMBER_FORMAT), "第1周");
        // Sat Dec 28 2024 .. Fri Jan 3 2025: Dec 30 onward is 2025-W01
        assert_eq!(week_number_date(&date(2024, 12, 28)).format(WEEK_NUMBER_FORMAT), "第1周");
        // Mon Dec 23 2024 stays in W52
        assert_eq!(week_number_date(&date(2024, 12, 23)).format(WEEK_NUMBER_FORMAT), "第52周");
    }

    #[test]
    fn extension_snaps_to_week_membership() {
        let mut view = view(date(2024, 1, 1), date(2024, 1, 15));
        // Dec 1 2023 lies in the week of Nov 27, which belongs to November
        let added = view.extend_start().unwrap();
        assert_eq!(added.start, date(2023, 10, 30));
        assert_eq!(added.end, date(2024, 1, 1));
        assert_eq!(view.start(), date(2023, 10, 30));
    }

    #[test]
    fn occupancy_is_a_seventh_of_a_cell() {
        let view = view(date(2024, 1, 1), date(2024, 1, 1));
        assert_eq!(view.day_occupancy_width(&date(2024, 1, 3)), 40.0);
        assert_eq!(view.primary_width(), DEFAULT_CELL_WIDTH);
        assert!(view.show_timeline());
        assert!(!view.show_week_backdrop());
    }
}
