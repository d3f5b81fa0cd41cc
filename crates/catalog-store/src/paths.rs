//! Catalog directory path resolution.

use std::path::{Path, PathBuf};

use catalog_model::{CatalogError, Result};

/// Environment variable for overriding the catalog directory.
pub const CATALOG_ENV_VAR: &str = "CATALOG_ROOT";

/// Catalog directory used when nothing else is configured.
pub const DEFAULT_CATALOG_DIR: &str = "catalog";

/// Ordered component listing at the catalog root.
pub const MANIFEST_FILE: &str = "catalog.toml";

/// Per-component configuration file.
pub const CONFIG_FILE: &str = "config.json";

/// Per-component diagram file.
pub const DIAGRAM_FILE: &str = "diagram.svg";

/// Get the catalog root directory.
///
/// Resolution order:
/// 1. `CATALOG_ROOT` environment variable
/// 2. `catalog/` relative to the working directory
pub fn catalog_root() -> PathBuf {
    if let Ok(root) = std::env::var(CATALOG_ENV_VAR)
        && !root.trim().is_empty()
    {
        return PathBuf::from(root);
    }
    PathBuf::from(DEFAULT_CATALOG_DIR)
}

/// Validate a component path and return its canonical slash-joined form.
///
/// Empty segments are dropped. Backslashes, absolute paths and `.`/`..`
/// segments never name a component and are reported as not found.
pub fn normalize_component_path(path: &str) -> Result<String> {
    let trimmed = path.trim();
    if trimmed.is_empty() || trimmed.contains('\\') || trimmed.starts_with('/') {
        return Err(CatalogError::not_found(path));
    }
    let mut segments = Vec::new();
    for segment in trimmed.split('/').map(str::trim) {
        match segment {
            "" => {}
            "." | ".." => return Err(CatalogError::not_found(path)),
            _ if segment.contains(':') => return Err(CatalogError::not_found(path)),
            _ => segments.push(segment),
        }
    }
    if segments.is_empty() {
        return Err(CatalogError::not_found(path));
    }
    Ok(segments.join("/"))
}

/// Directory holding a component's files.
pub(crate) fn component_dir(root: &Path, path: &str) -> Result<PathBuf> {
    let normalized = normalize_component_path(path)?;
    Ok(normalized
        .split('/')
        .fold(root.to_path_buf(), |dir, segment| dir.join(segment)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_paths_pass_through() {
        assert_eq!(
            normalize_component_path("screws/socket_head").unwrap(),
            "screws/socket_head"
        );
        assert_eq!(normalize_component_path(" nuts//hex/ ").unwrap(), "nuts/hex");
    }

    #[test]
    fn escaping_paths_are_not_found() {
        for path in ["../etc", "a/../b", "/abs", "a\\b", "./a", "c:/x", "", " / "] {
            let err = normalize_component_path(path).unwrap_err();
            assert!(
                matches!(err, CatalogError::NotFound { .. }),
                "{path:?} gave {err}"
            );
        }
    }

    #[test]
    fn component_dir_joins_segments() {
        let dir = component_dir(Path::new("/data"), "screws/hex_head").unwrap();
        assert_eq!(dir, Path::new("/data/screws/hex_head"));
    }
}
