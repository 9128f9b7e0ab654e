//! Breach detection over a rolled-up hierarchy.
//!
//! Every node is checked against its own ceilings independently. A single
//! oversized transaction therefore shows up at each ancestor whose ceiling it
//! pushes over, and an ancestor breach never hides a descendant breach.

use tracing::{debug, instrument};

use crate::domain::arena::{HierarchyArena, NodeId};
use crate::domain::entities::{Breach, BreachKind, NodeData};
use crate::domain::error::DomainResult;
use crate::domain::rollup::{Aggregate, RollupTable};

/// Validates the whole tree, starting at the root.
///
/// Breaches come in pre-order: a node's own breaches (amount first, then
/// tenor) precede those of its children, which follow in insertion order.
/// Fails only when a subtree total cannot be represented.
#[instrument(level = "debug", skip(arena))]
pub fn validate(arena: &HierarchyArena) -> DomainResult<Vec<Breach>> {
    let Some(root) = arena.root() else {
        return Ok(Vec::new());
    };
    let rollups = RollupTable::compute(arena)?;
    Ok(collect_breaches(arena, root, &rollups))
}

/// Validates the subtree rooted at `idx`, rolling up that subtree only.
#[instrument(level = "debug", skip(arena))]
pub fn validate_from(arena: &HierarchyArena, idx: NodeId) -> DomainResult<Vec<Breach>> {
    let rollups = RollupTable::compute_subtree(arena, idx)?;
    Ok(collect_breaches(arena, idx, &rollups))
}

fn collect_breaches(arena: &HierarchyArena, idx: NodeId, rollups: &RollupTable) -> Vec<Breach> {
    let mut breaches = Vec::new();

    for (node_idx, node) in arena.iter_subtree(idx) {
        let aggregate = rollups.get(node_idx).unwrap_or_default();
        let found = check_node(node_idx, &node.data, aggregate);
        if !found.is_empty() {
            debug!("{}: {} breach(es)", node.data.name, found.len());
        }
        breaches.extend(found);
    }

    breaches
}

/// Compares one node's aggregate with its ceilings.
///
/// Comparison is strict: an aggregate equal to its ceiling is compliant.
pub fn check_node(idx: NodeId, data: &NodeData, aggregate: Aggregate) -> Vec<Breach> {
    let mut breaches = Vec::new();
    if aggregate.total > data.limit {
        breaches.push(Breach {
            kind: BreachKind::Amount,
            node: idx,
            name: data.name.clone(),
            level: data.level,
            observed: aggregate.total,
            ceiling: data.limit,
        });
    }
    if aggregate.max_tenor > data.tenor {
        breaches.push(Breach {
            kind: BreachKind::Tenor,
            node: idx,
            name: data.name.clone(),
            level: data.level,
            observed: aggregate.max_tenor,
            ceiling: data.tenor,
        });
    }
    breaches
}
