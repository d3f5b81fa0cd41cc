//! Catalog health check.

use catalog_model::{ComponentConfig, DiagramDocument, Result};
use catalog_render::placeholder::{RAW_SUFFIX, placeholder_names};
use serde::Serialize;
use tracing::{info, warn};

use crate::source::CatalogSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Ok,
    Error,
}

/// Outcome for one listed component.
#[derive(Debug, Clone, Serialize)]
pub struct ComponentCheck {
    pub path: String,
    pub status: CheckStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub columns: usize,
    pub rows: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Problems that do not prevent loading, e.g. placeholders without a
    /// column.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CheckCounts {
    pub components: usize,
    pub ok: usize,
    pub failed: usize,
    pub warnings: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    pub schema: String,
    pub schema_version: u32,
    pub counts: CheckCounts,
    pub components: Vec<ComponentCheck>,
}

impl CheckReport {
    /// True when every component loaded.
    pub fn is_ok(&self) -> bool {
        self.counts.failed == 0
    }
}

/// Load every listed component and report what is wrong with it.
///
/// Only a failure to list the catalog is returned as an error; component
/// failures are recorded in the report.
pub fn check_catalog<S: CatalogSource + ?Sized>(source: &S) -> Result<CheckReport> {
    let paths = source.list_component_paths()?;
    let mut counts = CheckCounts::default();
    let mut components = Vec::with_capacity(paths.len());

    for path in paths {
        let check = match source.load_component(&path) {
            Ok((config, diagram)) => {
                let warnings = component_warnings(&config, &diagram);
                ComponentCheck {
                    path,
                    status: CheckStatus::Ok,
                    name: Some(config.name.clone()),
                    columns: config.columns.len(),
                    rows: config.data.len(),
                    error: None,
                    warnings,
                }
            }
            Err(err) => {
                warn!(path = %path, error = %err, "component failed to load");
                ComponentCheck {
                    path,
                    status: CheckStatus::Error,
                    name: None,
                    columns: 0,
                    rows: 0,
                    error: Some(err.to_string()),
                    warnings: Vec::new(),
                }
            }
        };
        counts.components += 1;
        match check.status {
            CheckStatus::Ok => counts.ok += 1,
            CheckStatus::Error => counts.failed += 1,
        }
        counts.warnings += check.warnings.len();
        components.push(check);
    }

    info!(
        components = counts.components,
        failed = counts.failed,
        warnings = counts.warnings,
        "catalog checked"
    );
    Ok(CheckReport {
        schema: "catalog.check".to_string(),
        schema_version: 1,
        counts,
        components,
    })
}

fn component_warnings(config: &ComponentConfig, diagram: &DiagramDocument) -> Vec<String> {
    let mut warnings = Vec::new();

    for name in placeholder_names(diagram.as_str()) {
        let known = config.column(&name).is_some()
            || name
                .strip_suffix(RAW_SUFFIX)
                .is_some_and(|key| config.column(key).is_some());
        if !known {
            warnings.push(format!("placeholder '{name}' has no matching column"));
        }
    }

    for (index, row) in config.data.iter().enumerate() {
        let missing: Vec<&str> = config
            .columns
            .iter()
            .filter(|column| !row.contains_key(&column.key))
            .map(|column| column.key.as_str())
            .collect();
        if !missing.is_empty() {
            warnings.push(format!("row {index} is missing {}", missing.join(", ")));
        }
    }

    warnings
}
