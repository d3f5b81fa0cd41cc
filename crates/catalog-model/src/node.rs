use std::fmt;

use serde::{Deserialize, Serialize};

/// Index of a node inside a catalog tree arena.
///
/// Node ids are the identity of a node: filtered views refer back to the
/// same ids, so expansion state keyed by `NodeId` survives a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(usize);

impl NodeId {
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One position of the catalog tree.
///
/// A node is either a leaf (has `component_path`, no children) or a folder
/// (has children, no `component_path`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogNode {
    /// Raw path segment, unique among siblings.
    pub id: String,
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component_path: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NodeId>,
}

impl CatalogNode {
    pub fn folder(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            component_path: None,
            children: Vec::new(),
        }
    }

    pub fn leaf(
        id: impl Into<String>,
        display_name: impl Into<String>,
        component_path: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            component_path: Some(component_path.into()),
            children: Vec::new(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.component_path.is_some() && self.children.is_empty()
    }

    pub fn is_folder(&self) -> bool {
        !self.children.is_empty()
    }
}
