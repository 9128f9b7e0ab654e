//! Tree rendering of a hierarchy for terminal output.

use termtree::Tree;

use crate::domain::{HierarchyArena, NodeId};

/// Renders the hierarchy top-down, one node per line:
/// `Product 1 (Level 2): Limit=600000, Tenor=18`.
pub fn render_structure(arena: &HierarchyArena) -> Tree<String> {
    match arena.root() {
        Some(root) => render_subtree(arena, root),
        None => Tree::new("Empty hierarchy".to_string()),
    }
}

/// Built bottom-up from a post-order walk, so no recursion over depth.
pub fn render_subtree(arena: &HierarchyArena, idx: NodeId) -> Tree<String> {
    // Finished child trees wait here until their parent is assembled
    let mut pending: Vec<Tree<String>> = Vec::new();
    let mut stack = vec![(idx, false)];

    while let Some((current, visited)) = stack.pop() {
        let Some(node) = arena.get_node(current) else {
            continue;
        };
        if visited {
            let leaves = pending.split_off(pending.len().saturating_sub(node.children.len()));
            pending.push(Tree::new(node.data.to_string()).with_leaves(leaves));
        } else {
            stack.push((current, true));
            for &child in node.children.iter().rev() {
                stack.push((child, false));
            }
        }
    }

    pending
        .pop()
        .unwrap_or_else(|| Tree::new("Empty hierarchy".to_string()))
}
