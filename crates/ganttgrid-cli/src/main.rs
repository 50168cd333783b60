//! ganttgrid CLI - calendar view inspector
//!
//! Prints the grid geometry and header date points a view computes, as text
//! or JSON, so renderers can be checked against the layout engine.

mod config;
mod output;

use anyhow::{anyhow, Context, Result};
use chrono::Weekday;
use clap::{Args, Parser, Subcommand};
use ganttgrid_core::{CalendarDate, GanttView, Granularity, ViewOptionsOverride};
use ganttgrid_views::build_view;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::{FileConfig, CONFIG_ENV_VAR};
use crate::output::{render_geometry, render_position, render_report, OutputFormat, PositionReport, ViewReport};

#[derive(Parser)]
#[command(name = "ganttgrid")]
#[command(author, version, about = "Calendar view layout inspector", long_about = None)]
struct Cli {
    /// Verbose output (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print geometry and both header rows
    Points {
        #[command(flatten)]
        view: ViewArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Print grid geometry only
    Geometry {
        #[command(flatten)]
        view: ViewArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Print the pixel offset and day width of a date
    Position {
        #[command(flatten)]
        view: ViewArgs,

        /// Date to position (YYYY-MM-DD)
        #[arg(long)]
        date: String,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

#[derive(Args)]
struct ViewArgs {
    /// Granularity: day, week, month, quarter or year
    #[arg(value_name = "VIEW")]
    view: Option<String>,

    /// Range start (YYYY-MM-DD)
    #[arg(long)]
    start: Option<String>,

    /// Range end (YYYY-MM-DD)
    #[arg(long)]
    end: Option<String>,

    /// Pixel width of one secondary cell
    #[arg(long)]
    cell_width: Option<f64>,

    /// First day of the week (mon, sun, ...)
    #[arg(long)]
    week_start: Option<String>,

    /// TOML configuration file
    #[arg(long, env = CONFIG_ENV_VAR)]
    config: Option<PathBuf>,
}

impl ViewArgs {
    fn flag_overrides(&self) -> Result<ViewOptionsOverride> {
        let mut overrides = ViewOptionsOverride::new();
        if let Some(raw) = &self.start {
            overrides = overrides.start(CalendarDate::parse(raw).context("invalid --start")?);
        }
        if let Some(raw) = &self.end {
            overrides = overrides.end(CalendarDate::parse(raw).context("invalid --end")?);
        }
        if let Some(cell_width) = self.cell_width {
            overrides = overrides.cell_width(cell_width);
        }
        if let Some(raw) = &self.week_start {
            let weekday: Weekday = raw
                .parse()
                .map_err(|_| anyhow!("invalid --week-start: {raw}"))?;
            overrides = overrides.week_starts_on(weekday);
        }
        Ok(overrides)
    }

    fn build(&self) -> Result<Box<dyn GanttView>> {
        let file = match &self.config {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };

        let granularity = match (&self.view, file.granularity) {
            (Some(raw), _) => raw.parse::<Granularity>()?,
            (None, Some(granularity)) => granularity,
            (None, None) => Granularity::Day,
        };
        let overrides = file.view.overlay(&self.flag_overrides()?);

        info!(%granularity, "building view");
        debug!(?overrides, "effective overrides");
        let view = build_view(granularity, None, &overrides, &CalendarDate::today())?;
        debug!(start = %view.start(), end = %view.end(), "aligned range");
        Ok(view)
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn run(command: Commands) -> Result<String> {
    match command {
        Commands::Points { view, format } => {
            let view = view.build()?;
            render_report(&ViewReport::from_view(&*view), format)
        }
        Commands::Geometry { view, format } => {
            let view = view.build()?;
            render_geometry(&*view, format)
        }
        Commands::Position { view, date, format } => {
            let view = view.build()?;
            let date = CalendarDate::parse(&date).context("invalid --date")?;
            let position = PositionReport {
                date,
                x: view.x_point_by_date(&date),
                day_width: view.day_occupancy_width(&date),
            };
            render_position(&position, format)
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let out = run(cli.command)?;
    if out.ends_with('\n') {
        print!("{out}");
    } else {
        println!("{out}");
    }

    Ok(())
}
