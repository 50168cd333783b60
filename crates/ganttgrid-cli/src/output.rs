//! Text and JSON rendering of view reports

use anyhow::Result;
use clap::ValueEnum;
use ganttgrid_core::{CalendarDate, DatePoint, GanttView, Granularity, GridGeometry};
use serde::Serialize;
use std::fmt::Write;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Everything a renderer needs to draw the header
#[derive(Debug, Serialize)]
pub struct ViewReport {
    pub granularity: Granularity,
    pub start: CalendarDate,
    pub end: CalendarDate,
    pub geometry: GridGeometry,
    pub show_week_backdrop: bool,
    pub show_timeline: bool,
    pub primary: Vec<DatePoint>,
    pub secondary: Vec<DatePoint>,
}

impl ViewReport {
    pub fn from_view(view: &dyn GanttView) -> Self {
        Self {
            granularity: view.granularity(),
            start: view.start(),
            end: view.end(),
            geometry: view.geometry(),
            show_week_backdrop: view.show_week_backdrop(),
            show_timeline: view.show_timeline(),
            primary: view.primary_date_points(),
            secondary: view.secondary_date_points(),
        }
    }
}

/// Pixel position of a single date
#[derive(Debug, Serialize)]
pub struct PositionReport {
    pub date: CalendarDate,
    pub x: f64,
    pub day_width: f64,
}

fn header_lines(out: &mut String, granularity: Granularity, start: &CalendarDate, end: &CalendarDate, geometry: &GridGeometry) {
    let _ = writeln!(out, "{granularity} view  {start} .. {end}");
    let _ = writeln!(
        out,
        "cell width {}  primary width {}  total width {}",
        geometry.cell_width, geometry.primary_width, geometry.width
    );
}

fn point_lines(out: &mut String, title: &str, points: &[DatePoint]) {
    let _ = writeln!(out, "{title} ({}):", points.len());
    for point in points {
        let weekend = if point.is_weekend() { "  weekend" } else { "" };
        let _ = writeln!(
            out,
            "{:>10.1}  {}  {}{}",
            point.left,
            point.date.format("yyyy-MM-dd"),
            point.label,
            weekend
        );
    }
}

pub fn render_report(report: &ViewReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Text => {
            let mut out = String::new();
            header_lines(&mut out, report.granularity, &report.start, &report.end, &report.geometry);
            point_lines(&mut out, "primary", &report.primary);
            point_lines(&mut out, "secondary", &report.secondary);
            Ok(out)
        }
    }
}

pub fn render_geometry(view: &dyn GanttView, format: OutputFormat) -> Result<String> {
    let geometry = view.geometry();
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&geometry)?),
        OutputFormat::Text => {
            let mut out = String::new();
            header_lines(&mut out, view.granularity(), &view.start(), &view.end(), &geometry);
            let _ = writeln!(
                out,
                "header height {}  rows {} / {}",
                geometry.header_height, geometry.primary_row_height, geometry.secondary_row_height
            );
            Ok(out)
        }
    }
}

pub fn render_position(position: &PositionReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(position)?),
        OutputFormat::Text => Ok(format!(
            "{}  x {}  day width {}\n",
            position.date.format("yyyy-MM-dd"),
            position.x,
            position.day_width
        )),
    }
}
