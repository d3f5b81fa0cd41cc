//! Plain-text rendering of catalog trees.

use catalog_tree::TreeView;

/// One line per visible node, indented two spaces per level.
///
/// Folders end with `/`; leaves show their component path in brackets.
pub fn format_outline(view: &TreeView<'_>) -> String {
    let mut out = String::new();
    for entry in view.walk() {
        let node = view.node(entry.id);
        out.push_str(&"  ".repeat(entry.depth));
        out.push_str(&node.display_name);
        match node.component_path.as_deref().filter(|_| node.is_leaf()) {
            Some(path) => {
                out.push_str("  [");
                out.push_str(path);
                out.push(']');
            }
            None => out.push('/'),
        }
        out.push('\n');
    }
    out
}
