#![deny(unsafe_code)]

pub mod component;
pub mod error;
pub mod node;
pub mod value;

pub use component::{
    ColumnType, ComponentColumn, ComponentConfig, ComponentMeta, ComponentRow, DiagramDocument,
};
pub use error::{CatalogError, Result};
pub use node::{CatalogNode, NodeId};
pub use value::CellValue;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaf_and_folder_are_exclusive() {
        let leaf = CatalogNode::leaf("hex", "Hex", "nuts/hex");
        assert!(leaf.is_leaf());
        assert!(!leaf.is_folder());

        let mut folder = CatalogNode::folder("nuts", "Nuts");
        folder.children.push(NodeId::new(1));
        assert!(folder.is_folder());
        assert!(!folder.is_leaf());
    }

    #[test]
    fn error_messages_name_the_path() {
        let err = CatalogError::not_found("screws/socket_head");
        assert_eq!(err.to_string(), "component not found: screws/socket_head");
        assert!(err.is_unavailable());

        let err = CatalogError::AmbiguousPath {
            path: "a".to_string(),
            conflict: "a/b".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "ambiguous catalog path 'a': also used as folder prefix of 'a/b'"
        );
        assert!(!err.is_unavailable());
    }
}
