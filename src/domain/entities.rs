//! Domain entities: node payloads, transactions and breach records

use std::fmt;

use itertools::Itertools;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::arena::NodeId;

/// Monetary exposure. Currency is implied by the book; no conversion happens.
pub type Amount = Decimal;

/// Duration of a transaction, or the longest duration a node allows.
///
/// The unit is up to the caller (months in the sample book) but must be the
/// same for transactions and node ceilings.
pub type Tenor = Decimal;

/// Configuration and identity of one level of the product taxonomy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeData {
    /// Depth indicator, 1 for the root
    pub level: u32,
    /// Display name, unique among siblings
    pub name: String,
    /// Ceiling on the summed amount of the whole subtree
    pub limit: Amount,
    /// Ceiling on the longest tenor found anywhere in the subtree
    pub tenor: Tenor,
}

impl NodeData {
    /// Negative ceilings are accepted as given; they make every positive
    /// aggregate a breach.
    pub fn new(level: u32, name: impl Into<String>, limit: Amount, tenor: Tenor) -> Self {
        Self {
            level,
            name: name.into(),
            limit,
            tenor,
        }
    }
}

impl fmt::Display for NodeData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (Level {}): Limit={}, Tenor={}",
            self.name, self.level, self.limit, self.tenor
        )
    }
}

/// A single booked transaction, addressed to a node by its name path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Names from the root down to the target node, both inclusive
    pub path: Vec<String>,
    pub amount: Amount,
    pub tenor: Tenor,
}

impl Transaction {
    pub fn new<S: Into<String>>(
        path: impl IntoIterator<Item = S>,
        amount: Amount,
        tenor: Tenor,
    ) -> Self {
        Self {
            path: path.into_iter().map(Into::into).collect(),
            amount,
            tenor,
        }
    }

    /// Path rendered as `Level 1 / Product 1 / Product 1A`.
    pub fn path_display(&self) -> String {
        self.path.iter().join(" / ")
    }
}

/// Which ceiling a breach violates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BreachKind {
    /// Subtree total amount above the node limit
    Amount,
    /// Longest subtree tenor above the node tenor ceiling
    Tenor,
}

impl BreachKind {
    pub fn label(&self) -> &'static str {
        match self {
            BreachKind::Amount => "LIMIT BREACH",
            BreachKind::Tenor => "TENOR BREACH",
        }
    }
}

impl fmt::Display for BreachKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BreachKind::Amount => write!(f, "AMOUNT"),
            BreachKind::Tenor => write!(f, "TENOR"),
        }
    }
}

/// One violated ceiling at one node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breach {
    pub kind: BreachKind,
    pub node: NodeId,
    pub name: String,
    pub level: u32,
    /// Aggregate found in the subtree
    pub observed: Decimal,
    /// Configured ceiling it exceeds
    pub ceiling: Decimal,
}

impl fmt::Display for Breach {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} (Level {}) - {} > {}",
            self.kind.label(),
            self.name,
            self.level,
            self.observed,
            self.ceiling
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transaction_path_display() {
        let txn = Transaction::new(
            ["Level 1", "Product 1", "Product 1A"],
            Decimal::from(1_000),
            Decimal::from(10),
        );
        assert_eq!(txn.path_display(), "Level 1 / Product 1 / Product 1A");
    }

    #[test]
    fn test_node_data_display() {
        let data = NodeData::new(2, "Product 1", Decimal::from(600_000), Decimal::from(18));
        assert_eq!(
            data.to_string(),
            "Product 1 (Level 2): Limit=600000, Tenor=18"
        );
    }
}
