use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading catalog data or building the catalog tree.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The requested component path has no corresponding data.
    #[error("component not found: {path}")]
    NotFound { path: String },

    /// A component configuration failed to parse or violates the schema.
    #[error("invalid component configuration for {path}: {message}")]
    Format { path: String, message: String },

    /// A path is used both as a folder prefix and as a full leaf path.
    #[error("ambiguous catalog path '{path}': also used as folder prefix of '{conflict}'")]
    AmbiguousPath { path: String, conflict: String },

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CatalogError {
    pub fn not_found(path: impl Into<String>) -> Self {
        Self::NotFound { path: path.into() }
    }

    pub fn format(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Format {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// True for failures the host should present as "component unavailable".
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::Format { .. } | Self::Io { .. })
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
