//! Arena-backed product hierarchy.
//!
//! Nodes are addressed by an opaque [`NodeId`] instead of by name, so two
//! products with the same display name in different branches never collide.

use generational_arena::{Arena, Index};
use tracing::{debug, instrument};

use crate::domain::entities::{NodeData, Transaction};
use crate::domain::error::{DomainError, DomainResult};

/// Opaque handle of a node inside a [`HierarchyArena`].
pub type NodeId = Index;

/// One level of the product taxonomy.
#[derive(Debug)]
pub struct HierarchyNode {
    /// Limits and identity of this node
    pub data: NodeData,
    /// Index of parent node in the arena, None for the root
    pub parent: Option<NodeId>,
    /// Indices of child nodes in the arena, in insertion order
    pub children: Vec<NodeId>,
    /// Transactions booked directly on this node
    pub transactions: Vec<Transaction>,
}

/// Tree of [`HierarchyNode`]s with a single root.
///
/// The topology only grows: children are appended under existing nodes and
/// transactions are appended to nodes. Nothing is removed.
#[derive(Debug)]
pub struct HierarchyArena {
    arena: Arena<HierarchyNode>,
    root: Option<NodeId>,
}

impl Default for HierarchyArena {
    fn default() -> Self {
        Self::new()
    }
}

impl HierarchyArena {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    #[instrument(level = "trace", skip(self))]
    pub fn insert_root(&mut self, data: NodeData) -> DomainResult<NodeId> {
        if let Some(root) = self.root {
            let name = self
                .get_node(root)
                .map(|n| n.data.name.clone())
                .unwrap_or_default();
            return Err(DomainError::RootAlreadySet(name));
        }
        let idx = self.arena.insert(HierarchyNode {
            data,
            parent: None,
            children: Vec::new(),
            transactions: Vec::new(),
        });
        self.root = Some(idx);
        Ok(idx)
    }

    /// Appends a new child under `parent`.
    ///
    /// Sibling names must be unique, otherwise path lookup would be ambiguous.
    #[instrument(level = "trace", skip(self))]
    pub fn add_child(&mut self, parent: NodeId, data: NodeData) -> DomainResult<NodeId> {
        let parent_node = self
            .get_node(parent)
            .ok_or(DomainError::NodeNotFound(parent))?;
        if self.find_child(parent, &data.name).is_some() {
            return Err(DomainError::DuplicateSibling {
                parent: parent_node.data.name.clone(),
                name: data.name,
            });
        }

        let idx = self.arena.insert(HierarchyNode {
            data,
            parent: Some(parent),
            children: Vec::new(),
            transactions: Vec::new(),
        });
        if let Some(parent_node) = self.arena.get_mut(parent) {
            parent_node.children.push(idx);
        }
        Ok(idx)
    }

    #[instrument(level = "trace", skip(self, txn))]
    pub fn attach_transaction(&mut self, idx: NodeId, txn: Transaction) -> DomainResult<()> {
        let node = self
            .arena
            .get_mut(idx)
            .ok_or(DomainError::NodeNotFound(idx))?;
        debug!(
            "attach: {} amount={} tenor={}",
            node.data.name, txn.amount, txn.tenor
        );
        node.transactions.push(txn);
        Ok(())
    }

    #[instrument(level = "trace", skip(self))]
    pub fn get_node(&self, idx: NodeId) -> Option<&HierarchyNode> {
        self.arena.get(idx)
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// First child of `parent` named `name`.
    pub fn find_child(&self, parent: NodeId, name: &str) -> Option<NodeId> {
        self.get_node(parent)?
            .children
            .iter()
            .copied()
            .find(|&child| {
                self.get_node(child)
                    .map(|c| c.data.name == name)
                    .unwrap_or(false)
            })
    }

    /// Number of levels from the root to the deepest leaf, 0 for an empty arena.
    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self) -> usize {
        let Some(root) = self.root else {
            return 0;
        };
        let mut max_depth = 0;
        let mut stack = vec![(root, 1)];
        while let Some((idx, depth)) = stack.pop() {
            max_depth = max_depth.max(depth);
            if let Some(node) = self.get_node(idx) {
                for &child in &node.children {
                    stack.push((child, depth + 1));
                }
            }
        }
        max_depth
    }

    /// Pre-order traversal of the whole tree.
    pub fn iter(&self) -> PreOrderIterator<'_> {
        PreOrderIterator::new(self, self.root)
    }

    /// Pre-order traversal of the subtree rooted at `idx`.
    pub fn iter_subtree(&self, idx: NodeId) -> PreOrderIterator<'_> {
        PreOrderIterator::new(self, Some(idx))
    }

    /// Post-order traversal of the whole tree: every child before its parent.
    pub fn iter_postorder(&self) -> PostOrderIterator<'_> {
        PostOrderIterator::new(self, self.root)
    }

    /// Post-order traversal of the subtree rooted at `idx`.
    pub fn iter_postorder_subtree(&self, idx: NodeId) -> PostOrderIterator<'_> {
        PostOrderIterator::new(self, Some(idx))
    }
}

pub struct PreOrderIterator<'a> {
    arena: &'a HierarchyArena,
    stack: Vec<NodeId>,
}

impl<'a> PreOrderIterator<'a> {
    fn new(arena: &'a HierarchyArena, start: Option<NodeId>) -> Self {
        Self {
            arena,
            stack: start.into_iter().collect(),
        }
    }
}

impl<'a> Iterator for PreOrderIterator<'a> {
    type Item = (NodeId, &'a HierarchyNode);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(current_idx) = self.stack.pop() {
            if let Some(node) = self.arena.get_node(current_idx) {
                // Push children in reverse order for left-to-right traversal
                self.stack.extend(node.children.iter().rev());
                return Some((current_idx, node));
            }
        }
        None
    }
}

pub struct PostOrderIterator<'a> {
    arena: &'a HierarchyArena,
    stack: Vec<(NodeId, bool)>,
}

impl<'a> PostOrderIterator<'a> {
    fn new(arena: &'a HierarchyArena, start: Option<NodeId>) -> Self {
        Self {
            arena,
            stack: start.map(|idx| (idx, false)).into_iter().collect(),
        }
    }
}

impl<'a> Iterator for PostOrderIterator<'a> {
    type Item = (NodeId, &'a HierarchyNode);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((current_idx, visited)) = self.stack.pop() {
            if let Some(node) = self.arena.get_node(current_idx) {
                if visited {
                    return Some((current_idx, node));
                }
                self.stack.push((current_idx, true));
                for &child in node.children.iter().rev() {
                    self.stack.push((child, false));
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn node(level: u32, name: &str) -> NodeData {
        NodeData::new(level, name, Decimal::from(100), Decimal::from(12))
    }

    //      root
    //      /  \
    //     a    b
    //     |
    //     c
    fn small_tree() -> (HierarchyArena, [NodeId; 4]) {
        let mut arena = HierarchyArena::new();
        let root = arena.insert_root(node(1, "root")).unwrap();
        let a = arena.add_child(root, node(2, "a")).unwrap();
        let b = arena.add_child(root, node(2, "b")).unwrap();
        let c = arena.add_child(a, node(3, "c")).unwrap();
        (arena, [root, a, b, c])
    }

    #[test]
    fn test_preorder_visits_parent_before_children_left_to_right() {
        let (arena, _) = small_tree();
        let names: Vec<_> = arena.iter().map(|(_, n)| n.data.name.as_str()).collect();
        assert_eq!(names, vec!["root", "a", "c", "b"]);
    }

    #[test]
    fn test_postorder_visits_children_first() {
        let (arena, _) = small_tree();
        let names: Vec<_> = arena
            .iter_postorder()
            .map(|(_, n)| n.data.name.as_str())
            .collect();
        assert_eq!(names, vec!["c", "a", "b", "root"]);
    }

    #[test]
    fn test_iter_subtree_stays_inside_subtree() {
        let (arena, [_, a, _, _]) = small_tree();
        let names: Vec<_> = arena
            .iter_subtree(a)
            .map(|(_, n)| n.data.name.as_str())
            .collect();
        assert_eq!(names, vec!["a", "c"]);
    }

    #[test]
    fn test_depth_and_len() {
        let (arena, _) = small_tree();
        assert_eq!(arena.depth(), 3);
        assert_eq!(arena.len(), 4);
        assert_eq!(HierarchyArena::new().depth(), 0);
    }

    #[test]
    fn test_postorder_subtree_stays_inside_subtree() {
        let (arena, [_, a, _, _]) = small_tree();
        let names: Vec<_> = arena
            .iter_postorder_subtree(a)
            .map(|(_, n)| n.data.name.as_str())
            .collect();
        assert_eq!(names, vec!["c", "a"]);
    }

    #[test]
    fn test_second_root_is_rejected() {
        let (mut arena, _) = small_tree();
        let result = arena.insert_root(node(1, "other"));
        assert_eq!(result, Err(DomainError::RootAlreadySet("root".to_string())));
    }

    #[test]
    fn test_duplicate_sibling_is_rejected() {
        let (mut arena, [root, _, _, _]) = small_tree();
        let result = arena.add_child(root, node(2, "a"));
        assert!(matches!(result, Err(DomainError::DuplicateSibling { .. })));
        assert_eq!(arena.get_node(root).unwrap().children.len(), 2);
    }

    #[test]
    fn test_same_name_in_different_branches_is_allowed() {
        let (mut arena, [_, _, b, _]) = small_tree();
        assert!(arena.add_child(b, node(3, "c")).is_ok());
    }
}
