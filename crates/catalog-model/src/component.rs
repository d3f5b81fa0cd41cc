use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};
use crate::value::CellValue;

/// Declared type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    String,
    Number,
}

/// Column descriptor of a component table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentColumn {
    /// Row field name; also the placeholder key in the diagram.
    pub key: String,
    /// Display header.
    pub label: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub column_type: Option<ColumnType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl ComponentColumn {
    /// The unit when it is declared and non-empty.
    pub fn unit(&self) -> Option<&str> {
        self.unit
            .as_deref()
            .map(str::trim)
            .filter(|unit| !unit.is_empty())
    }

    /// Header text with the unit in brackets, e.g. `Pitch [mm]`.
    pub fn header(&self) -> String {
        match self.unit() {
            Some(unit) => format!("{} [{unit}]", self.label),
            None => self.label.clone(),
        }
    }
}

/// One catalog entry, keyed by column key.
pub type ComponentRow = BTreeMap<String, CellValue>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentMeta {
    pub id: String,
    pub version: String,
}

/// A component's full record as stored in its configuration file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<ComponentMeta>,
    pub name: String,
    pub standard: String,
    #[serde(default)]
    pub columns: Vec<ComponentColumn>,
    #[serde(default)]
    pub data: Vec<ComponentRow>,
}

impl ComponentConfig {
    /// Key to unit mapping for every column with a non-empty unit.
    pub fn units(&self) -> BTreeMap<String, String> {
        self.columns
            .iter()
            .filter_map(|column| {
                column
                    .unit()
                    .map(|unit| (column.key.clone(), unit.to_string()))
            })
            .collect()
    }

    pub fn row(&self, index: usize) -> Option<&ComponentRow> {
        self.data.get(index)
    }

    pub fn column(&self, key: &str) -> Option<&ComponentColumn> {
        self.columns.iter().find(|column| column.key == key)
    }

    /// Check the schema rules a loaded configuration must satisfy.
    ///
    /// `path` is only used to label the error.
    pub fn validate(&self, path: &str) -> Result<()> {
        if self.columns.is_empty() {
            return Err(CatalogError::format(path, "column list is empty"));
        }
        if self.data.is_empty() {
            return Err(CatalogError::format(path, "data must contain at least one row"));
        }
        let mut seen = BTreeSet::new();
        for column in &self.columns {
            let key = column.key.trim();
            if key.is_empty() {
                return Err(CatalogError::format(path, "column with empty key"));
            }
            if !seen.insert(key) {
                return Err(CatalogError::format(
                    path,
                    format!("duplicate column key '{key}'"),
                ));
            }
        }
        Ok(())
    }
}

/// Vector diagram source containing placeholder tokens.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DiagramDocument(String);

impl DiagramDocument {
    pub fn new(source: impl Into<String>) -> Self {
        Self(source.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for DiagramDocument {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for DiagramDocument {
    fn from(source: String) -> Self {
        Self(source)
    }
}

impl From<&str> for DiagramDocument {
    fn from(source: &str) -> Self {
        Self(source.to_string())
    }
}
