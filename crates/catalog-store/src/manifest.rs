use std::path::Path;

use catalog_model::{CatalogError, Result};
use serde::{Deserialize, Serialize};

use crate::paths::MANIFEST_FILE;

/// Contents of `catalog.toml`.
///
/// ```toml
/// title = "Fasteners"
/// components = ["screws/socket_head", "nuts/hex"]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogManifest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub components: Vec<String>,
}

impl CatalogManifest {
    pub fn parse(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| CatalogError::format(MANIFEST_FILE, e.to_string()))
    }

    /// Read the manifest at `path`; `None` when the file does not exist.
    pub fn load(path: &Path) -> Result<Option<Self>> {
        match std::fs::read_to_string(path) {
            Ok(contents) => Self::parse(&contents).map(Some),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(CatalogError::io(path, e)),
        }
    }
}
