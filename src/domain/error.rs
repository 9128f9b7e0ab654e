//! Domain-level errors (no external dependencies)

use thiserror::Error;

use crate::domain::arena::NodeId;

/// Domain errors represent violations of the tree structure, or aggregates
/// that leave the range of [`Decimal`](rust_decimal::Decimal).
/// Limit breaches are not errors; they are returned as data.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("node not found: {0:?}")]
    NodeNotFound(NodeId),

    #[error("hierarchy already has a root: {0}")]
    RootAlreadySet(String),

    #[error("duplicate child name '{name}' under '{parent}'")]
    DuplicateSibling { parent: String, name: String },

    #[error("total amount under '{name}' exceeds the representable range")]
    AmountOverflow { node: NodeId, name: String },
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
