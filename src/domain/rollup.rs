//! Subtree aggregation of transaction amounts and tenors.
//!
//! The per-node functions recompute from scratch on every call. Whole-tree
//! work goes through [`RollupTable`], which aggregates every node in a single
//! post-order pass. All traversals use explicit stacks.

use std::collections::HashMap;

use rust_decimal::Decimal;
use tracing::instrument;

use crate::domain::arena::{HierarchyArena, HierarchyNode, NodeId};
use crate::domain::entities::{Amount, Tenor, Transaction};
use crate::domain::error::{DomainError, DomainResult};

/// Rolled-up values of one subtree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Aggregate {
    /// Sum of all amounts in the subtree
    pub total: Amount,
    /// Longest tenor in the subtree, 0 if it holds no transactions
    pub max_tenor: Tenor,
}

impl Default for Aggregate {
    fn default() -> Self {
        Self {
            total: Decimal::ZERO,
            max_tenor: Decimal::ZERO,
        }
    }
}

impl Aggregate {
    /// `None` when the total leaves the `Decimal` range.
    fn with_transaction(self, txn: &Transaction) -> Option<Self> {
        Some(Self {
            total: self.total.checked_add(txn.amount)?,
            max_tenor: self.max_tenor.max(txn.tenor),
        })
    }

    fn combine(self, other: Self) -> Option<Self> {
        Some(Self {
            total: self.total.checked_add(other.total)?,
            max_tenor: self.max_tenor.max(other.max_tenor),
        })
    }
}

fn overflow(arena: &HierarchyArena, idx: NodeId) -> DomainError {
    DomainError::AmountOverflow {
        node: idx,
        name: arena
            .get_node(idx)
            .map(|n| n.data.name.clone())
            .unwrap_or_default(),
    }
}

/// Sum of the amounts attached anywhere in the subtree of `idx`.
///
/// Unknown ids have an empty subtree and yield 0. Fails with
/// [`DomainError::AmountOverflow`] instead of wrapping or panicking.
#[instrument(level = "trace", skip(arena))]
pub fn total_amount(arena: &HierarchyArena, idx: NodeId) -> DomainResult<Amount> {
    arena
        .iter_subtree(idx)
        .flat_map(|(_, node)| node.transactions.iter())
        .try_fold(Decimal::ZERO, |acc, txn| acc.checked_add(txn.amount))
        .ok_or_else(|| overflow(arena, idx))
}

/// Longest tenor attached anywhere in the subtree of `idx`.
///
/// An empty subtree yields 0, which never breaches a non-negative ceiling.
#[instrument(level = "trace", skip(arena))]
pub fn max_tenor(arena: &HierarchyArena, idx: NodeId) -> Tenor {
    arena
        .iter_subtree(idx)
        .flat_map(|(_, node)| node.transactions.iter())
        .map(|txn| txn.tenor)
        .max()
        .unwrap_or(Decimal::ZERO)
}

/// Aggregates of every node of a tree, computed bottom-up in one pass.
#[derive(Debug, Default)]
pub struct RollupTable {
    aggregates: HashMap<NodeId, Aggregate>,
}

impl RollupTable {
    #[instrument(level = "debug", skip(arena))]
    pub fn compute(arena: &HierarchyArena) -> DomainResult<Self> {
        Self::from_postorder(arena, arena.iter_postorder())
    }

    /// Aggregates for `idx` and its descendants only.
    #[instrument(level = "debug", skip(arena))]
    pub fn compute_subtree(arena: &HierarchyArena, idx: NodeId) -> DomainResult<Self> {
        Self::from_postorder(arena, arena.iter_postorder_subtree(idx))
    }

    fn from_postorder<'a>(
        arena: &HierarchyArena,
        nodes: impl Iterator<Item = (NodeId, &'a HierarchyNode)>,
    ) -> DomainResult<Self> {
        let mut aggregates: HashMap<NodeId, Aggregate> = HashMap::new();
        for (idx, node) in nodes {
            let mut aggregate = node
                .transactions
                .iter()
                .try_fold(Aggregate::default(), |acc, txn| acc.with_transaction(txn))
                .ok_or_else(|| overflow(arena, idx))?;
            // Post-order guarantees every child is already present
            for child in &node.children {
                if let Some(child_aggregate) = aggregates.get(child) {
                    aggregate = aggregate
                        .combine(*child_aggregate)
                        .ok_or_else(|| overflow(arena, idx))?;
                }
            }
            aggregates.insert(idx, aggregate);
        }
        Ok(Self { aggregates })
    }

    pub fn get(&self, idx: NodeId) -> Option<Aggregate> {
        self.aggregates.get(&idx).copied()
    }

    pub fn len(&self) -> usize {
        self.aggregates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aggregates.is_empty()
    }
}
