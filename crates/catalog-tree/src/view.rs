//! Read-only projections of a [`CatalogTree`].
//!
//! A view either mirrors the tree (identity) or carries a recomputed child
//! list for every retained folder. Either way it only stores [`NodeId`]s, so
//! nodes in a view are the very nodes of the tree, not copies.

use std::collections::HashMap;

use catalog_model::{CatalogNode, NodeId};

use crate::tree::CatalogTree;

/// A node visited by [`TreeView::walk`], with its depth below the roots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewEntry {
    pub id: NodeId,
    pub depth: usize,
}

#[derive(Debug, Clone)]
pub struct TreeView<'t> {
    tree: &'t CatalogTree,
    roots: Vec<NodeId>,
    /// `None` for the identity view.
    children: Option<HashMap<NodeId, Vec<NodeId>>>,
}

impl<'t> TreeView<'t> {
    /// View that shows the whole tree.
    pub fn identity(tree: &'t CatalogTree) -> Self {
        Self {
            tree,
            roots: tree.roots().to_vec(),
            children: None,
        }
    }

    /// View keeping only the leaves accepted by `keep`, plus the folders that
    /// (transitively) contain at least one of them.
    ///
    /// Retained folders list only their retained children; original sibling
    /// order is preserved throughout.
    pub fn retain_leaves(tree: &'t CatalogTree, mut keep: impl FnMut(NodeId) -> bool) -> Self {
        let mut children = HashMap::new();
        let roots = tree
            .roots()
            .iter()
            .copied()
            .filter(|&root| prune(tree, root, &mut keep, &mut children))
            .collect();
        Self {
            tree,
            roots,
            children: Some(children),
        }
    }

    pub fn tree(&self) -> &'t CatalogTree {
        self.tree
    }

    pub fn is_identity(&self) -> bool {
        self.children.is_none()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    pub fn node(&self, id: NodeId) -> &'t CatalogNode {
        self.tree.node(id)
    }

    /// Children of `id` as shown in this view.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        match self.children.as_ref().and_then(|map| map.get(&id)) {
            Some(children) => children,
            None => self.tree.children(id),
        }
    }

    /// Depth-first, pre-order walk of the view.
    pub fn walk(&self) -> Vec<ViewEntry> {
        let mut entries = Vec::new();
        let mut stack: Vec<ViewEntry> = self
            .roots
            .iter()
            .rev()
            .map(|&id| ViewEntry { id, depth: 0 })
            .collect();
        while let Some(entry) = stack.pop() {
            entries.push(entry);
            stack.extend(self.children(entry.id).iter().rev().map(|&id| ViewEntry {
                id,
                depth: entry.depth + 1,
            }));
        }
        entries
    }

    /// Leaf ids shown in this view, in tree order.
    pub fn leaves(&self) -> Vec<NodeId> {
        self.walk()
            .into_iter()
            .map(|entry| entry.id)
            .filter(|&id| self.node(id).is_leaf())
            .collect()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.walk().iter().any(|entry| entry.id == id)
    }
}

fn prune(
    tree: &CatalogTree,
    id: NodeId,
    keep: &mut impl FnMut(NodeId) -> bool,
    children: &mut HashMap<NodeId, Vec<NodeId>>,
) -> bool {
    let node = tree.node(id);
    if node.is_leaf() {
        return keep(id);
    }
    let retained: Vec<NodeId> = node
        .children
        .iter()
        .copied()
        .filter(|&child| prune(tree, child, keep, children))
        .collect();
    if retained.is_empty() {
        return false;
    }
    children.insert(id, retained);
    true
}
