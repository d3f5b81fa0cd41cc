//! Tree construction from flat component paths.
//!
//! Each path is a slash-delimited sequence of segment ids. All segments but
//! the last become folders; the last one becomes a leaf carrying the full
//! path. Siblings are matched by raw segment id and created in first-seen
//! order.

use catalog_model::{CatalogError, CatalogNode, NodeId, Result};
use tracing::{debug, warn};

use crate::label::display_label;
use crate::tree::CatalogTree;

/// What to do when one path is both a leaf and a folder prefix of another
/// (`a` and `a/b`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AmbiguityPolicy {
    /// Fail with [`CatalogError::AmbiguousPath`].
    #[default]
    Reject,
    /// The path processed last decides whether the node is a leaf or a
    /// folder. Descendants dropped by a leaf promotion are discarded.
    LastWins,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TreeBuilder {
    policy: AmbiguityPolicy,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_policy(mut self, policy: AmbiguityPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> AmbiguityPolicy {
        self.policy
    }

    /// Build the catalog tree from component paths.
    ///
    /// Surrounding whitespace and empty segments are ignored; paths with no
    /// segments at all are skipped. Repeating a path is harmless.
    pub fn build<I, S>(&self, paths: I) -> Result<CatalogTree>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tree = CatalogTree::new();
        let mut orphaned = false;
        let mut count = 0usize;

        for raw in paths {
            let raw = raw.as_ref();
            let segments: Vec<&str> = raw
                .trim()
                .split('/')
                .map(str::trim)
                .filter(|segment| !segment.is_empty())
                .collect();
            if segments.is_empty() {
                warn!(path = raw, "skipping component path without segments");
                continue;
            }
            count += 1;
            orphaned |= self.insert(&mut tree, &segments)?;
        }

        if orphaned {
            tree = tree.compacted();
        }
        debug!(
            paths = count,
            nodes = tree.len(),
            roots = tree.roots().len(),
            "catalog tree built"
        );
        Ok(tree)
    }

    /// Insert one path. Returns true when existing nodes became unreachable.
    fn insert(&self, tree: &mut CatalogTree, segments: &[&str]) -> Result<bool> {
        let full_path = segments.join("/");
        let last = segments.len() - 1;
        let mut parent: Option<NodeId> = None;
        let mut orphaned = false;

        for (depth, &segment) in segments.iter().enumerate() {
            let siblings = match parent {
                Some(parent) => tree.children(parent),
                None => tree.roots(),
            };
            let existing = tree.find_child(siblings, segment);

            if depth == last {
                match existing {
                    Some(id) => orphaned |= self.mark_leaf(tree, id, &full_path)?,
                    None => {
                        let leaf = CatalogNode::leaf(segment, display_label(segment), &*full_path);
                        tree.push(parent, leaf);
                    }
                }
                break;
            }

            let folder = match existing {
                Some(id) => {
                    self.mark_folder(tree, id, &full_path)?;
                    id
                }
                None => tree.push(parent, CatalogNode::folder(segment, display_label(segment))),
            };
            parent = Some(folder);
        }
        Ok(orphaned)
    }

    /// Turn an existing node into the leaf for `full_path`.
    fn mark_leaf(&self, tree: &mut CatalogTree, id: NodeId, full_path: &str) -> Result<bool> {
        let node = tree.node(id);
        if node.children.is_empty() {
            let node = tree.node_mut(id);
            node.component_path = Some(full_path.to_string());
            return Ok(false);
        }
        match self.policy {
            AmbiguityPolicy::Reject => Err(CatalogError::AmbiguousPath {
                path: full_path.to_string(),
                conflict: first_leaf_path(tree, id).unwrap_or_default(),
            }),
            AmbiguityPolicy::LastWins => {
                warn!(path = full_path, "folder replaced by leaf");
                let node = tree.node_mut(id);
                node.children.clear();
                node.component_path = Some(full_path.to_string());
                Ok(true)
            }
        }
    }

    /// Make sure the node at a non-final segment is usable as a folder.
    fn mark_folder(&self, tree: &mut CatalogTree, id: NodeId, full_path: &str) -> Result<()> {
        let Some(leaf_path) = tree.node(id).component_path.clone() else {
            return Ok(());
        };
        match self.policy {
            AmbiguityPolicy::Reject => Err(CatalogError::AmbiguousPath {
                path: leaf_path,
                conflict: full_path.to_string(),
            }),
            AmbiguityPolicy::LastWins => {
                warn!(path = %leaf_path, "leaf replaced by folder");
                tree.node_mut(id).component_path = None;
                Ok(())
            }
        }
    }
}

/// Build a tree with the default policy, rejecting ambiguous paths.
pub fn build_tree<I, S>(paths: I) -> Result<CatalogTree>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    TreeBuilder::new().build(paths)
}

fn first_leaf_path(tree: &CatalogTree, id: NodeId) -> Option<String> {
    let node = tree.node(id);
    if let Some(path) = &node.component_path {
        return Some(path.clone());
    }
    node.children
        .iter()
        .find_map(|&child| first_leaf_path(tree, child))
}
