//! Header tick marks

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::CalendarDate;

/// Vertical anchor of points in the primary (coarse) header row
pub const PRIMARY_DATE_POINT_TOP: f64 = 18.0;

/// Vertical anchor of points in the secondary (fine) header row
pub const SECONDARY_DATE_POINT_TOP: f64 = 36.0;

/// Extra key carried by day-resolution points
pub const IS_WEEKEND: &str = "isWeekend";

/// Value stored in a point's `extra` map
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExtraValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl From<bool> for ExtraValue {
    fn from(value: bool) -> Self {
        ExtraValue::Bool(value)
    }
}

impl From<&str> for ExtraValue {
    fn from(value: &str) -> Self {
        ExtraValue::Text(value.to_string())
    }
}

/// One labeled tick in a header row.
///
/// `left` is the pixel offset of the cell center from the grid origin and
/// `top` the row anchor. Points are rebuilt on every generation call.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DatePoint {
    pub date: CalendarDate,
    pub label: String,
    pub left: f64,
    pub top: f64,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, ExtraValue>,
}

impl DatePoint {
    pub fn new(date: CalendarDate, label: impl Into<String>, left: f64, top: f64) -> Self {
        Self {
            date,
            label: label.into(),
            left,
            top,
            extra: BTreeMap::new(),
        }
    }

    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<ExtraValue>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Boolean extra, `None` when absent or not a bool
    pub fn flag(&self, key: &str) -> Option<bool> {
        match self.extra.get(key) {
            Some(ExtraValue::Bool(value)) => Some(*value),
            _ => None,
        }
    }

    pub fn is_weekend(&self) -> bool {
        self.flag(IS_WEEKEND).unwrap_or(false)
    }
}
