//! Civil calendar dates
//!
//! `CalendarDate` wraps a timezone-naive instant with second precision and the
//! week-start convention used by week boundaries. Every operation returns a
//! new value.

use chrono::{DateTime, Datelike, Local, Months, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Timelike, Weekday};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::{GridError, GridResult};

/// Earliest year accepted when constructing a date
pub const MIN_YEAR: i32 = 1;

/// Latest year accepted when constructing a date
pub const MAX_YEAR: i32 = 9999;

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];
const DISPLAY_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

// ============================================================================
// Units
// ============================================================================

/// Calendar unit used for arithmetic and interval iteration
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateUnit {
    Second,
    Day,
    Week,
    Month,
    Quarter,
    Year,
}

impl DateUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            DateUnit::Second => "second",
            DateUnit::Day => "day",
            DateUnit::Week => "week",
            DateUnit::Month => "month",
            DateUnit::Quarter => "quarter",
            DateUnit::Year => "year",
        }
    }
}

impl fmt::Display for DateUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DateUnit {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        let singular = normalized.strip_suffix('s').unwrap_or(&normalized);
        match singular {
            "second" => Ok(DateUnit::Second),
            "day" => Ok(DateUnit::Day),
            "week" => Ok(DateUnit::Week),
            "month" => Ok(DateUnit::Month),
            "quarter" => Ok(DateUnit::Quarter),
            "year" => Ok(DateUnit::Year),
            _ => Err(GridError::InvalidOptions(format!("unknown date unit: {s}"))),
        }
    }
}

// ============================================================================
// CalendarDate
// ============================================================================

/// Immutable civil date-time with a week-start convention.
///
/// Equality, ordering and hashing only look at the instant. The week-start
/// convention affects `start_of_week`/`end_of_week` and nothing else; in
/// particular `is_weekend` is always Saturday or Sunday.
#[derive(Clone, Copy, Debug)]
pub struct CalendarDate {
    value: NaiveDateTime,
    week_starts_on: Weekday,
}

impl CalendarDate {
    /// Wrap a raw instant, rejecting years outside `MIN_YEAR..=MAX_YEAR`.
    pub fn from_naive(value: NaiveDateTime) -> GridResult<Self> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&value.year()) {
            return Err(GridError::InvalidDate(format!(
                "year {} is outside {MIN_YEAR}..={MAX_YEAR}",
                value.year()
            )));
        }
        Ok(Self {
            value,
            week_starts_on: Weekday::Mon,
        })
    }

    /// Midnight of the given calendar day
    pub fn from_ymd(year: i32, month: u32, day: u32) -> GridResult<Self> {
        Self::from_ymd_hms(year, month, day, 0, 0, 0)
    }

    pub fn from_ymd_hms(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> GridResult<Self> {
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or_else(|| GridError::InvalidDate(format!("{year:04}-{month:02}-{day:02}")))?;
        let value = date.and_hms_opt(hour, minute, second).ok_or_else(|| {
            GridError::InvalidDate(format!(
                "{year:04}-{month:02}-{day:02} {hour:02}:{minute:02}:{second:02}"
            ))
        })?;
        Self::from_naive(value)
    }

    /// Interpret a Unix timestamp (seconds) as a civil instant.
    pub fn from_timestamp(seconds: i64) -> GridResult<Self> {
        let value = DateTime::from_timestamp(seconds, 0)
            .ok_or_else(|| GridError::InvalidDate(format!("timestamp {seconds} is out of range")))?
            .naive_utc();
        Self::from_naive(value)
    }

    /// Parse `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM:SS` or `YYYY-MM-DD HH:MM:SS`.
    pub fn parse(raw: &str) -> GridResult<Self> {
        let raw = raw.trim();
        if let Ok(date) = NaiveDate::parse_from_str(raw, DATE_FORMAT) {
            return Self::from_naive(date.and_time(NaiveTime::MIN));
        }
        DATETIME_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
            .ok_or_else(|| GridError::InvalidDate(raw.to_string()))
            .and_then(Self::from_naive)
    }

    /// Current local wall-clock time
    pub fn today() -> Self {
        let now = Local::now().naive_local();
        Self {
            value: now.with_nanosecond(0).unwrap_or(now),
            week_starts_on: Weekday::Mon,
        }
    }

    /// Same instant with a different week-start convention
    pub fn with_week_start(self, week_starts_on: Weekday) -> Self {
        Self {
            week_starts_on,
            ..self
        }
    }

    pub fn week_starts_on(&self) -> Weekday {
        self.week_starts_on
    }

    pub fn value(&self) -> NaiveDateTime {
        self.value
    }

    fn with_value(&self, value: NaiveDateTime) -> Self {
        Self { value, ..*self }
    }

    /// Apply a checked shift, saturating at chrono's representable bounds.
    fn shifted(&self, shifted: Option<NaiveDateTime>, forward: bool) -> Self {
        let bound = if forward { NaiveDateTime::MAX } else { NaiveDateTime::MIN };
        self.with_value(shifted.unwrap_or(bound))
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    pub fn year(&self) -> i32 {
        self.value.year()
    }

    /// Month number, 1-based
    pub fn month(&self) -> u32 {
        self.value.month()
    }

    /// Quarter number, 1-based
    pub fn quarter(&self) -> u32 {
        self.value.month0() / 3 + 1
    }

    /// Day of the month, 1-based
    pub fn day(&self) -> u32 {
        self.value.day()
    }

    pub fn weekday(&self) -> Weekday {
        self.value.weekday()
    }

    /// ISO 8601 week number
    pub fn iso_week(&self) -> u32 {
        self.value.iso_week().week()
    }

    pub fn hour(&self) -> u32 {
        self.value.hour()
    }

    pub fn minute(&self) -> u32 {
        self.value.minute()
    }

    pub fn second(&self) -> u32 {
        self.value.second()
    }

    /// Saturday or Sunday, whatever the week-start convention
    pub fn is_weekend(&self) -> bool {
        matches!(self.weekday(), Weekday::Sat | Weekday::Sun)
    }

    pub fn days_in_month(&self) -> i64 {
        let start = self.start_of_month();
        start.add_months(1).difference_in_calendar_days(&start)
    }

    pub fn days_in_quarter(&self) -> i64 {
        let start = self.start_of_quarter();
        start.add_quarters(1).difference_in_calendar_days(&start)
    }

    pub fn days_in_year(&self) -> i64 {
        let start = self.start_of_year();
        start.add_years(1).difference_in_calendar_days(&start)
    }

    /// Calendar days from `other` to `self`, ignoring time of day
    pub fn difference_in_calendar_days(&self, other: &CalendarDate) -> i64 {
        (self.value.date() - other.value.date()).num_days()
    }

    // ------------------------------------------------------------------------
    // Arithmetic
    // ------------------------------------------------------------------------

    pub fn add_seconds(&self, amount: i64) -> Self {
        let shifted = TimeDelta::try_seconds(amount).and_then(|delta| self.value.checked_add_signed(delta));
        self.shifted(shifted, amount >= 0)
    }

    pub fn add_days(&self, amount: i64) -> Self {
        let shifted = TimeDelta::try_days(amount).and_then(|delta| self.value.checked_add_signed(delta));
        self.shifted(shifted, amount >= 0)
    }

    pub fn add_weeks(&self, amount: i64) -> Self {
        let shifted = TimeDelta::try_weeks(amount).and_then(|delta| self.value.checked_add_signed(delta));
        self.shifted(shifted, amount >= 0)
    }

    /// Add calendar months, clamping to the last day of a shorter month.
    pub fn add_months(&self, amount: i64) -> Self {
        let shifted = u32::try_from(amount.unsigned_abs()).ok().and_then(|months| {
            if amount >= 0 {
                self.value.checked_add_months(Months::new(months))
            } else {
                self.value.checked_sub_months(Months::new(months))
            }
        });
        self.shifted(shifted, amount >= 0)
    }

    pub fn add_quarters(&self, amount: i64) -> Self {
        self.add_months(amount.saturating_mul(3))
    }

    pub fn add_years(&self, amount: i64) -> Self {
        self.add_months(amount.saturating_mul(12))
    }

    pub fn add(&self, amount: i64, unit: DateUnit) -> Self {
        match unit {
            DateUnit::Second => self.add_seconds(amount),
            DateUnit::Day => self.add_days(amount),
            DateUnit::Week => self.add_weeks(amount),
            DateUnit::Month => self.add_months(amount),
            DateUnit::Quarter => self.add_quarters(amount),
            DateUnit::Year => self.add_years(amount),
        }
    }

    // ------------------------------------------------------------------------
    // Boundaries
    // ------------------------------------------------------------------------

    pub fn start_of_day(&self) -> Self {
        self.with_value(self.value.date().and_time(NaiveTime::MIN))
    }

    /// Last second of the day
    pub fn end_of_day(&self) -> Self {
        self.start_of_day().add_days(1).add_seconds(-1)
    }

    /// Start of the week under the stored convention
    pub fn start_of_week(&self) -> Self {
        self.start_of_week_on(self.week_starts_on)
    }

    pub fn end_of_week(&self) -> Self {
        self.end_of_week_on(self.week_starts_on)
    }

    pub fn start_of_week_on(&self, week_starts_on: Weekday) -> Self {
        let offset =
            (7 + self.weekday().num_days_from_monday() - week_starts_on.num_days_from_monday()) % 7;
        self.start_of_day().add_days(-i64::from(offset))
    }

    pub fn end_of_week_on(&self, week_starts_on: Weekday) -> Self {
        self.start_of_week_on(week_starts_on).add_days(7).add_seconds(-1)
    }

    pub fn start_of_month(&self) -> Self {
        self.start_of_day().add_days(1 - i64::from(self.day()))
    }

    pub fn end_of_month(&self) -> Self {
        self.start_of_month().add_months(1).add_seconds(-1)
    }

    pub fn start_of_quarter(&self) -> Self {
        self.start_of_month().add_months(-i64::from(self.value.month0() % 3))
    }

    pub fn end_of_quarter(&self) -> Self {
        self.start_of_quarter().add_quarters(1).add_seconds(-1)
    }

    pub fn start_of_year(&self) -> Self {
        self.start_of_month().add_months(-i64::from(self.value.month0()))
    }

    pub fn end_of_year(&self) -> Self {
        self.start_of_year().add_years(1).add_seconds(-1)
    }

    /// Start of the enclosing unit
    pub fn start_of(&self, unit: DateUnit) -> Self {
        match unit {
            DateUnit::Second => self.with_value(self.value.with_nanosecond(0).unwrap_or(self.value)),
            DateUnit::Day => self.start_of_day(),
            DateUnit::Week => self.start_of_week(),
            DateUnit::Month => self.start_of_month(),
            DateUnit::Quarter => self.start_of_quarter(),
            DateUnit::Year => self.start_of_year(),
        }
    }

    /// Unit starts `u` with `start.start_of(unit) <= u < end_exclusive`.
    pub fn each_unit_in(start: &CalendarDate, end_exclusive: &CalendarDate, unit: DateUnit) -> Vec<CalendarDate> {
        let mut units = Vec::new();
        let mut current = start.start_of(unit);
        while current < *end_exclusive {
            units.push(current);
            let next = current.add(1, unit);
            if next <= current {
                break;
            }
            current = next;
        }
        units
    }

    // ------------------------------------------------------------------------
    // Formatting
    // ------------------------------------------------------------------------

    /// Format with date-fns style tokens.
    ///
    /// Supported: `yyyy`, `yy`, `MM`, `M`, `dd`, `d`, `QQQ`, `Q`, `ww`, `w`
    /// (ISO week), `HH`, `H`, `mm`, `m`, `ss`, `s`. Text in single quotes is
    /// literal, `''` is a quote, everything else is copied as is.
    pub fn format(&self, pattern: &str) -> String {
        let mut out = String::with_capacity(pattern.len() + 8);
        let mut chars = pattern.chars().peekable();

        while let Some(c) = chars.next() {
            if c == '\'' {
                if chars.peek() == Some(&'\'') {
                    chars.next();
                    out.push('\'');
                    continue;
                }
                while let Some(q) = chars.next() {
                    if q != '\'' {
                        out.push(q);
                    } else if chars.peek() == Some(&'\'') {
                        chars.next();
                        out.push('\'');
                    } else {
                        break;
                    }
                }
                continue;
            }

            if !matches!(c, 'y' | 'M' | 'd' | 'Q' | 'w' | 'H' | 'm' | 's') {
                out.push(c);
                continue;
            }

            let mut run = 1;
            while chars.peek() == Some(&c) {
                chars.next();
                run += 1;
            }
            out.push_str(&self.format_token(c, run));
        }

        out
    }

    fn format_token(&self, token: char, run: usize) -> String {
        let padded = |value: u32| {
            if run >= 2 {
                format!("{value:02}")
            } else {
                value.to_string()
            }
        };
        match token {
            'y' if run == 2 => format!("{:02}", self.year().rem_euclid(100)),
            'y' => format!("{:0width$}", self.year(), width = run),
            'M' => padded(self.month()),
            'd' => padded(self.day()),
            'Q' if run >= 3 => format!("Q{}", self.quarter()),
            'Q' => self.quarter().to_string(),
            'w' => padded(self.iso_week()),
            'H' => padded(self.hour()),
            'm' => padded(self.minute()),
            's' => padded(self.second()),
            _ => String::new(),
        }
    }
}

impl PartialEq for CalendarDate {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for CalendarDate {}

impl PartialOrd for CalendarDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CalendarDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl Hash for CalendarDate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value.format(DISPLAY_FORMAT))
    }
}

impl FromStr for CalendarDate {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for CalendarDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CalendarDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// DateRange
// ============================================================================

/// Inclusive pair of dates
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: CalendarDate,
    pub end: CalendarDate,
}

impl DateRange {
    pub fn new(start: CalendarDate, end: CalendarDate) -> Self {
        Self { start, end }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> CalendarDate {
        CalendarDate::from_ymd(year, month, day).unwrap()
    }

    #[test]
    fn parse_accepts_date_and_datetime_forms() {
        assert_eq!(CalendarDate::parse("2024-01-07").unwrap(), date(2024, 1, 7));
        assert_eq!(
            CalendarDate::parse("2024-01-07T23:59:59").unwrap(),
            CalendarDate::from_ymd_hms(2024, 1, 7, 23, 59, 59).unwrap()
        );
        assert_eq!(
            CalendarDate::parse(" 2024-01-07 08:30:00 ").unwrap(),
            CalendarDate::from_ymd_hms(2024, 1, 7, 8, 30, 0).unwrap()
        );
    }

    #[test]
    fn invalid_raw_values_fail() {
        assert!(matches!(CalendarDate::parse("2024-02-30"), Err(GridError::InvalidDate(_))));
        assert!(matches!(CalendarDate::parse("07/01/2024"), Err(GridError::InvalidDate(_))));
        assert!(matches!(CalendarDate::from_ymd(2023, 2, 29), Err(GridError::InvalidDate(_))));
        assert!(matches!(CalendarDate::from_ymd_hms(2024, 1, 1, 24, 0, 0), Err(GridError::InvalidDate(_))));
        assert!(matches!(CalendarDate::from_ymd(0, 1, 1), Err(GridError::InvalidDate(_))));
        assert!(matches!(CalendarDate::from_ymd(10_000, 1, 1), Err(GridError::InvalidDate(_))));
        assert!(matches!(CalendarDate::from_timestamp(i64::MAX), Err(GridError::InvalidDate(_))));
    }

    #[test]
    fn timestamp_is_read_as_civil_time() {
        let d = CalendarDate::from_timestamp(1_704_067_200).unwrap();
        assert_eq!(d, date(2024, 1, 1));
    }

    #[test]
    fn week_boundaries_follow_convention() {
        // Wednesday
        let d = date(2024, 1, 3);
        assert_eq!(d.start_of_week(), date(2024, 1, 1));
        assert_eq!(d.end_of_week(), CalendarDate::from_ymd_hms(2024, 1, 7, 23, 59, 59).unwrap());

        let sunday_start = d.with_week_start(Weekday::Sun);
        assert_eq!(sunday_start.start_of_week(), date(2023, 12, 31));
        assert_eq!(
            sunday_start.end_of_week(),
            CalendarDate::from_ymd_hms(2024, 1, 6, 23, 59, 59).unwrap()
        );
        assert_eq!(sunday_start.start_of_week().week_starts_on(), Weekday::Sun);
    }

    #[test]
    fn start_of_week_on_the_week_start_is_identity() {
        let monday = date(2024, 1, 8);
        assert_eq!(monday.start_of_week(), monday);
        assert_eq!(monday.start_of_week().start_of_week(), monday);
    }

    #[test]
    fn month_quarter_year_boundaries() {
        let d = CalendarDate::from_ymd_hms(2024, 5, 17, 13, 45, 10).unwrap();
        assert_eq!(d.start_of_month(), date(2024, 5, 1));
        assert_eq!(d.end_of_month(), CalendarDate::from_ymd_hms(2024, 5, 31, 23, 59, 59).unwrap());
        assert_eq!(d.start_of_quarter(), date(2024, 4, 1));
        assert_eq!(d.end_of_quarter(), CalendarDate::from_ymd_hms(2024, 6, 30, 23, 59, 59).unwrap());
        assert_eq!(d.start_of_year(), date(2024, 1, 1));
        assert_eq!(d.end_of_year(), CalendarDate::from_ymd_hms(2024, 12, 31, 23, 59, 59).unwrap());
        assert_eq!(d.start_of_day(), date(2024, 5, 17));
    }

    #[test]
    fn boundary_operations_do_not_mutate() {
        let d = CalendarDate::from_ymd_hms(2024, 5, 17, 13, 45, 10).unwrap();
        let copy = d;
        let _ = d.start_of_year();
        let _ = d.add_months(3);
        assert_eq!(d, copy);
        assert_eq!(d.hour(), 13);
    }

    #[test]
    fn add_months_clamps_to_month_end() {
        assert_eq!(date(2024, 1, 31).add_months(1), date(2024, 2, 29));
        assert_eq!(date(2023, 1, 31).add_months(1), date(2023, 2, 28));
        assert_eq!(date(2024, 3, 31).add_months(-1), date(2024, 2, 29));
        assert_eq!(date(2024, 2, 29).add_years(1), date(2025, 2, 28));
        assert_eq!(date(2024, 11, 15).add_quarters(1), date(2025, 2, 15));
    }

    #[test]
    fn add_by_unit() {
        let d = date(2024, 1, 1);
        assert_eq!(d.add(1, DateUnit::Second), CalendarDate::from_ymd_hms(2024, 1, 1, 0, 0, 1).unwrap());
        assert_eq!(d.add(10, DateUnit::Day), date(2024, 1, 11));
        assert_eq!(d.add(-1, DateUnit::Week), date(2023, 12, 25));
        assert_eq!(d.add(2, DateUnit::Year), date(2026, 1, 1));
    }

    #[test]
    fn arithmetic_saturates_instead_of_panicking() {
        let d = date(2024, 1, 1);
        assert_eq!(d.add_seconds(i64::MAX).value(), NaiveDateTime::MAX);
        assert_eq!(d.add_days(i64::MIN).value(), NaiveDateTime::MIN);
        assert_eq!(d.add_months(i64::MAX).value(), NaiveDateTime::MAX);
    }

    #[test]
    fn days_in_units() {
        assert_eq!(date(2024, 2, 10).days_in_month(), 29);
        assert_eq!(date(2023, 2, 10).days_in_month(), 28);
        assert_eq!(date(2024, 4, 30).days_in_month(), 30);
        assert_eq!(date(2024, 1, 15).days_in_quarter(), 91);
        assert_eq!(date(2023, 1, 15).days_in_quarter(), 90);
        assert_eq!(date(2024, 8, 1).days_in_quarter(), 92);
        assert_eq!(date(2024, 6, 1).days_in_year(), 366);
        assert_eq!(date(2023, 6, 1).days_in_year(), 365);
    }

    #[test]
    fn weekend_ignores_week_start() {
        let saturday = date(2024, 1, 6);
        let sunday = date(2024, 1, 7);
        let monday = date(2024, 1, 8);
        for week_start in [Weekday::Mon, Weekday::Sun, Weekday::Sat] {
            assert!(saturday.with_week_start(week_start).is_weekend());
            assert!(sunday.with_week_start(week_start).is_weekend());
            assert!(!monday.with_week_start(week_start).is_weekend());
        }
    }

    #[test]
    fn equality_ignores_week_start() {
        let a = date(2024, 1, 1);
        let b = a.with_week_start(Weekday::Sun);
        assert_eq!(a, b);
        assert!(date(2024, 1, 1) < date(2024, 1, 2));
    }

    #[test]
    fn format_tokens() {
        let d = CalendarDate::from_ymd_hms(2024, 3, 5, 7, 8, 9).unwrap();
        assert_eq!(d.format("yyyy年MM月"), "2024年03月");
        assert_eq!(d.format("M月"), "3月");
        assert_eq!(d.format("yyyy年QQQ"), "2024年Q1");
        assert_eq!(d.format("yy-M-d"), "24-3-5");
        assert_eq!(d.format("dd/MM/yyyy HH:mm:ss"), "05/03/2024 07:08:09");
        assert_eq!(d.format("'week' w"), "week 10");
        assert_eq!(d.format("第w周"), "第10周");
        assert_eq!(d.format("'it''s' Q"), "it's 1");
    }

    #[test]
    fn each_unit_in_is_half_open() {
        let start = date(2024, 1, 1);
        let end = CalendarDate::from_ymd_hms(2024, 1, 7, 23, 59, 59).unwrap();

        let days = CalendarDate::each_unit_in(&start, &end.add_seconds(1), DateUnit::Day);
        assert_eq!(days.len(), 7);
        assert_eq!(days[6], date(2024, 1, 7));

        let weeks = CalendarDate::each_unit_in(&start, &end.add_seconds(1), DateUnit::Week);
        assert_eq!(weeks, vec![start]);

        let months = CalendarDate::each_unit_in(&date(2024, 1, 20), &date(2024, 4, 1), DateUnit::Month);
        assert_eq!(months, vec![date(2024, 1, 1), date(2024, 2, 1), date(2024, 3, 1)]);
    }

    #[test]
    fn unit_parsing() {
        assert_eq!("months".parse::<DateUnit>().unwrap(), DateUnit::Month);
        assert_eq!("Quarter".parse::<DateUnit>().unwrap(), DateUnit::Quarter);
        assert!("fortnight".parse::<DateUnit>().is_err());
    }

    #[test]
    fn serde_uses_iso_strings() {
        let d = CalendarDate::from_ymd_hms(2024, 1, 7, 23, 59, 59).unwrap();
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, "\"2024-01-07T23:59:59\"");
        let back: CalendarDate = serde_json::from_str("\"2024-01-07\"").unwrap();
        assert_eq!(back, date(2024, 1, 7));
        assert!(serde_json::from_str::<CalendarDate>("\"2024-13-01\"").is_err());
    }
}
