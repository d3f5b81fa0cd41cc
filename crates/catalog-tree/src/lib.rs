//! Catalog tree: an arena of [`CatalogNode`]s built from slash-delimited
//! component paths, plus read-only views over it.
//!
//! [`CatalogNode`]: catalog_model::CatalogNode

#![deny(unsafe_code)]

pub mod builder;
pub mod label;
pub mod tree;
pub mod view;

pub use builder::{AmbiguityPolicy, TreeBuilder, build_tree};
pub use label::display_label;
pub use tree::CatalogTree;
pub use view::{TreeView, ViewEntry};
