//! Places transactions on hierarchy nodes by name path.

use tracing::{debug, warn};

use crate::domain::{DomainResult, HierarchyArena, NodeId, Transaction};

/// Outcome of assigning a batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssignmentReport {
    /// Number of transactions attached to a node
    pub attached: usize,
    /// Transactions whose path matched no node, in input order
    pub unresolved: Vec<Transaction>,
}

impl AssignmentReport {
    pub fn is_complete(&self) -> bool {
        self.unresolved.is_empty()
    }
}

/// Walks `path` from the root, one name per level.
///
/// The first segment must be the root's name. At each level the first child
/// with a matching name is taken; there is no backtracking across siblings.
/// Returns `None` for an empty path or a broken chain.
pub fn resolve_path<S: AsRef<str>>(arena: &HierarchyArena, path: &[S]) -> Option<NodeId> {
    let (first, rest) = path.split_first()?;
    let root = arena.root()?;
    if arena.get_node(root)?.data.name != first.as_ref() {
        return None;
    }
    rest.iter()
        .try_fold(root, |current, segment| arena.find_child(current, segment.as_ref()))
}

/// Attaches each transaction to the node its path resolves to.
///
/// Unresolvable transactions are collected in the report and never touch any
/// aggregate.
pub fn assign_transactions(
    arena: &mut HierarchyArena,
    transactions: impl IntoIterator<Item = Transaction>,
) -> DomainResult<AssignmentReport> {
    let mut report = AssignmentReport::default();

    for txn in transactions {
        match resolve_path(arena, txn.path.as_slice()) {
            Some(idx) => {
                arena.attach_transaction(idx, txn)?;
                report.attached += 1;
            }
            None => {
                warn!("Transaction path not found: {}", txn.path_display());
                report.unresolved.push(txn);
            }
        }
    }

    debug!(
        "assigned {} transaction(s), {} unresolved",
        report.attached,
        report.unresolved.len()
    );
    Ok(report)
}
