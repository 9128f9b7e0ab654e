//! Hierarchy builder: turns a declarative node description into an arena.

use tracing::{debug, instrument};

use crate::domain::arena::{HierarchyArena, NodeId};
use crate::domain::entities::{Amount, NodeData, Tenor};
use crate::domain::error::DomainResult;

/// Declarative description of a node and its subtree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeSpec {
    pub name: String,
    pub limit: Amount,
    pub tenor: Tenor,
    pub children: Vec<NodeSpec>,
}

impl NodeSpec {
    pub fn new(name: impl Into<String>, limit: Amount, tenor: Tenor) -> Self {
        Self {
            name: name.into(),
            limit,
            tenor,
            children: Vec::new(),
        }
    }

    pub fn with_child(mut self, child: NodeSpec) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = NodeSpec>) -> Self {
        self.children.extend(children);
        self
    }
}

/// Builds a [`HierarchyArena`] from a [`NodeSpec`].
///
/// Levels are assigned from depth, starting at 1 for the root. Children keep
/// the order of the description.
#[derive(Debug, Default)]
pub struct HierarchyBuilder;

impl HierarchyBuilder {
    pub fn new() -> Self {
        Self
    }

    #[instrument(level = "debug", skip(self, spec), fields(root = %spec.name))]
    pub fn build(&self, spec: &NodeSpec) -> DomainResult<HierarchyArena> {
        let mut tree = HierarchyArena::new();
        let root = tree.insert_root(NodeData::new(1, spec.name.clone(), spec.limit, spec.tenor))?;

        // (description, parent index, level)
        let mut stack: Vec<(&NodeSpec, NodeId, u32)> = Vec::new();
        push_children(&mut stack, spec, root, 2);

        while let Some((current, parent_idx, level)) = stack.pop() {
            let data = NodeData::new(level, current.name.clone(), current.limit, current.tenor);
            let current_idx = tree.add_child(parent_idx, data)?;
            push_children(&mut stack, current, current_idx, level + 1);
        }

        debug!("built hierarchy: {} nodes, depth {}", tree.len(), tree.depth());
        Ok(tree)
    }
}

/// Pushes in reverse so siblings are popped, and therefore inserted, in order.
fn push_children<'a>(
    stack: &mut Vec<(&'a NodeSpec, NodeId, u32)>,
    spec: &'a NodeSpec,
    parent: NodeId,
    level: u32,
) {
    for child in spec.children.iter().rev() {
        stack.push((child, parent, level));
    }
}
