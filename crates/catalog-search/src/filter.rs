use catalog_model::{CatalogNode, NodeId};
use catalog_tree::{CatalogTree, TreeView};
use tracing::debug;

use crate::options::SearchOptions;
use crate::score::{LeafScore, ScoreComponent, field_score};
use crate::utils::Normalized;

/// Filters a catalog tree down to the leaves that fuzzily match a query.
///
/// Results keep the original tree order; matches are never re-sorted by
/// score, so the displayed hierarchy stays stable while typing.
#[derive(Debug, Clone, Copy, Default)]
pub struct FuzzyTreeFilter {
    options: SearchOptions,
}

impl FuzzyTreeFilter {
    pub fn new(options: SearchOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Sub-tree containing the matching leaves and their ancestor folders.
    ///
    /// A blank query returns the identity view of `tree`.
    pub fn filter<'t>(&self, tree: &'t CatalogTree, query: &str) -> TreeView<'t> {
        let Some(query) = prepare(query) else {
            return tree.view();
        };
        let view = TreeView::retain_leaves(tree, |id| {
            self.score_prepared(tree.node(id), id, &query)
                .is_some_and(|score| score.matched)
        });
        debug!(
            query = %query.text,
            leaves = view.leaves().len(),
            "catalog filtered"
        );
        view
    }

    /// Scores of the matching leaves, in tree order.
    ///
    /// A blank query yields no scores.
    pub fn matches(&self, tree: &CatalogTree, query: &str) -> Vec<LeafScore> {
        let Some(query) = prepare(query) else {
            return Vec::new();
        };
        tree.leaves()
            .into_iter()
            .filter_map(|id| self.score_prepared(tree.node(id), id, &query))
            .filter(|score| score.matched)
            .collect()
    }

    /// Score one node; `None` for folders and blank queries.
    pub fn score_leaf(&self, node: &CatalogNode, id: NodeId, query: &str) -> Option<LeafScore> {
        self.score_prepared(node, id, &prepare(query)?)
    }

    fn score_prepared(
        &self,
        node: &CatalogNode,
        id: NodeId,
        query: &Normalized,
    ) -> Option<LeafScore> {
        let path = node.component_path.as_deref().filter(|_| node.is_leaf())?;
        let (name_weight, path_weight) = self.options.normalized_weights();

        let name = Normalized::new(&node.display_name);
        let path = Normalized::new(path);
        let name_score = field_score(query, &name);
        let path_score = field_score(query, &path);
        let score = name_weight * name_score + path_weight * path_score;

        Some(LeafScore {
            node: id,
            score,
            matched: score <= self.options.threshold,
            components: vec![
                ScoreComponent {
                    field: "name",
                    value: name_score,
                    weight: name_weight,
                    text: name.text,
                },
                ScoreComponent {
                    field: "path",
                    value: path_score,
                    weight: path_weight,
                    text: path.text,
                },
            ],
        })
    }
}

/// Filter with the default options.
pub fn filter_tree<'t>(tree: &'t CatalogTree, query: &str) -> TreeView<'t> {
    FuzzyTreeFilter::default().filter(tree, query)
}

fn prepare(query: &str) -> Option<Normalized> {
    let query = Normalized::new(query);
    (!query.is_empty()).then_some(query)
}
