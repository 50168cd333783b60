//! Optional TOML configuration
//!
//! ```toml
//! granularity = "week"
//!
//! [view]
//! cell_width = 120.0
//! start = "2024-01-01"
//! end = "2024-06-30"
//! week_starts_on = "sun"
//! ```
//!
//! Dates must be quoted strings. Command-line flags win over file values,
//! which win over the view's built-in defaults.

use anyhow::{Context, Result};
use ganttgrid_core::{Granularity, ViewOptionsOverride};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Environment variable naming a config file when `--config` is absent
pub const CONFIG_ENV_VAR: &str = "GANTTGRID_CONFIG";

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub granularity: Option<Granularity>,
    pub view: ViewOptionsOverride,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading config");
        let raw = fs::read_to_string(path).with_context(|| format!("failed to read config {}", path.display()))?;
        Self::parse(&raw).with_context(|| format!("invalid config {}", path.display()))
    }

    pub fn parse(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }
}
