//! Fuzzy catalog search.
//!
//! Leaves are scored against the query on their display name and their
//! component path; the tree is then pruned down to the matching leaves and
//! the folders that contain them.

#![deny(unsafe_code)]

pub mod filter;
pub mod options;
pub mod score;
pub mod utils;

pub use filter::{FuzzyTreeFilter, filter_tree};
pub use options::SearchOptions;
pub use score::{LeafScore, ScoreComponent};
