//! Row cell values.
//!
//! Catalog data files mix strings and numbers in the same row, so a cell is
//! modelled as an explicit tagged union with one conversion to its plain
//! string form.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single cell of a component row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Number(f64),
    Text(String),
}

impl CellValue {
    /// Plain string form of the value, without any unit annotation.
    ///
    /// Numbers use the shortest decimal representation that round-trips,
    /// so `8.0` renders as `8` and `0.7` as `0.7`.
    pub fn raw(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Number(number) => format_number(*number),
        }
    }

    /// Display form: the raw value followed by a space and the unit, when a
    /// non-empty unit is given.
    pub fn display_with_unit(&self, unit: Option<&str>) -> String {
        match unit.map(str::trim) {
            Some(unit) if !unit.is_empty() => format!("{} {unit}", self.raw()),
            _ => self.raw(),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw())
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

fn format_number(value: f64) -> String {
    if value == 0.0 {
        // Collapses -0 as well.
        return "0".to_string();
    }
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    value.to_string()
}
