use catalog_model::{CatalogNode, NodeId};

use crate::view::TreeView;

/// Arena holding every node of a catalog tree.
///
/// Nodes are addressed by [`NodeId`]. The tree is immutable once built;
/// filtering produces [`TreeView`]s that refer back into the arena.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogTree {
    nodes: Vec<CatalogNode>,
    roots: Vec<NodeId>,
}

impl CatalogTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Node for `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this tree.
    pub fn node(&self, id: NodeId) -> &CatalogNode {
        &self.nodes[id.index()]
    }

    pub fn get(&self, id: NodeId) -> Option<&CatalogNode> {
        self.nodes.get(id.index())
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        match self.get(id) {
            Some(node) => &node.children,
            None => &[],
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Leaf ids in depth-first tree order.
    pub fn leaves(&self) -> Vec<NodeId> {
        self.view().leaves()
    }

    /// Resolve a slash-joined segment id path (`screws/hex_head`) to a node.
    ///
    /// Lookup follows raw segment ids, never display names.
    pub fn find_path(&self, path: &str) -> Option<NodeId> {
        let mut siblings = self.roots.as_slice();
        let mut found = None;
        for segment in path.split('/').filter(|s| !s.is_empty()) {
            let id = self.find_child(siblings, segment)?;
            siblings = self.children(id);
            found = Some(id);
        }
        found
    }

    /// The unfiltered view of this tree.
    pub fn view(&self) -> TreeView<'_> {
        TreeView::identity(self)
    }

    pub(crate) fn find_child(&self, siblings: &[NodeId], segment: &str) -> Option<NodeId> {
        siblings
            .iter()
            .copied()
            .find(|&child| self.node(child).id == segment)
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut CatalogNode {
        &mut self.nodes[id.index()]
    }

    /// Append a node under `parent`, or as a root when `parent` is `None`.
    pub(crate) fn push(&mut self, parent: Option<NodeId>, node: CatalogNode) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(node);
        match parent {
            Some(parent) => self.node_mut(parent).children.push(id),
            None => self.roots.push(id),
        }
        id
    }

    /// Copy of the tree without nodes that are no longer reachable from the
    /// roots. Sibling order is preserved.
    pub(crate) fn compacted(&self) -> Self {
        let mut compact = Self::new();
        for &root in &self.roots {
            self.copy_into(&mut compact, None, root);
        }
        compact
    }

    fn copy_into(&self, target: &mut Self, parent: Option<NodeId>, id: NodeId) {
        let node = self.node(id);
        let copy = CatalogNode {
            children: Vec::new(),
            ..node.clone()
        };
        let new_id = target.push(parent, copy);
        for &child in &node.children {
            self.copy_into(target, Some(new_id), child);
        }
    }
}
