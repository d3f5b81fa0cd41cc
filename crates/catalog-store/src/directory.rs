//! Filesystem catalog.
//!
//! Layout:
//!
//! ```text
//! <root>/catalog.toml                 optional ordered listing
//! <root>/<path>/config.json           component configuration
//! <root>/<path>/diagram.svg           component diagram
//! ```
//!
//! Without `catalog.toml` every directory below the root that contains a
//! `config.json` is a component, listed in sorted path order.

use std::collections::BTreeSet;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use catalog_model::{CatalogError, ComponentConfig, DiagramDocument, Result};
use tracing::{debug, info};

use crate::manifest::CatalogManifest;
use crate::paths::{CONFIG_FILE, DIAGRAM_FILE, MANIFEST_FILE, component_dir, normalize_component_path};
use crate::source::CatalogSource;

#[derive(Debug, Clone)]
pub struct DirectoryStore {
    root: PathBuf,
}

impl DirectoryStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The catalog manifest, if the root has one.
    pub fn manifest(&self) -> Result<Option<CatalogManifest>> {
        CatalogManifest::load(&self.root.join(MANIFEST_FILE))
    }

    /// Component directories found below the root.
    pub fn discover(&self) -> Result<Vec<String>> {
        let mut stack = vec![self.root.clone()];
        let mut found = BTreeSet::new();

        while let Some(dir) = stack.pop() {
            let entries = std::fs::read_dir(&dir).map_err(|e| CatalogError::io(&dir, e))?;
            for entry in entries {
                let entry = entry.map_err(|e| CatalogError::io(&dir, e))?;
                let file_type = entry.file_type().map_err(|e| CatalogError::io(entry.path(), e))?;
                if !file_type.is_dir() || entry.file_name().to_string_lossy().starts_with('.') {
                    continue;
                }
                let path = entry.path();
                if path.join(CONFIG_FILE).is_file()
                    && let Some(relative) = relative_component_path(&self.root, &path)
                {
                    found.insert(relative);
                }
                stack.push(path);
            }
        }

        Ok(found.into_iter().collect())
    }

    fn read(&self, path: &str, file: &Path) -> Result<String> {
        std::fs::read_to_string(file).map_err(|e| match e.kind() {
            ErrorKind::NotFound => CatalogError::not_found(path),
            _ => CatalogError::io(file, e),
        })
    }
}

impl CatalogSource for DirectoryStore {
    fn list_component_paths(&self) -> Result<Vec<String>> {
        let paths = match self.manifest()? {
            Some(manifest) => {
                debug!(root = %self.root.display(), "listing components from manifest");
                manifest.components
            }
            None => {
                debug!(root = %self.root.display(), "no manifest, discovering components");
                self.discover()?
            }
        };
        info!(root = %self.root.display(), components = paths.len(), "catalog listed");
        Ok(paths)
    }

    fn load_component(&self, path: &str) -> Result<(ComponentConfig, DiagramDocument)> {
        let canonical = normalize_component_path(path)?;
        let dir = component_dir(&self.root, &canonical)?;

        let config_json = self.read(&canonical, &dir.join(CONFIG_FILE))?;
        let diagram = self.read(&canonical, &dir.join(DIAGRAM_FILE))?;

        let config: ComponentConfig = serde_json::from_str(&config_json)
            .map_err(|e| CatalogError::format(&canonical, e.to_string()))?;
        config.validate(&canonical)?;

        info!(
            path = %canonical,
            columns = config.columns.len(),
            rows = config.data.len(),
            "component loaded"
        );
        Ok((config, DiagramDocument::new(diagram)))
    }
}

fn relative_component_path(root: &Path, dir: &Path) -> Option<String> {
    let relative = dir.strip_prefix(root).ok()?;
    let segments: Vec<String> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    (!segments.is_empty()).then(|| segments.join("/"))
}
