#![deny(unsafe_code)]

pub mod check;
pub mod directory;
pub mod manifest;
pub mod memory;
pub mod paths;
pub mod source;

pub use check::{CheckCounts, CheckReport, CheckStatus, ComponentCheck, check_catalog};
pub use directory::DirectoryStore;
pub use manifest::CatalogManifest;
pub use memory::MemoryStore;
pub use paths::{CATALOG_ENV_VAR, catalog_root, normalize_component_path};
pub use source::CatalogSource;
