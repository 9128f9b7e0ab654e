//! Sample product book used by the CLI when no batch file is given.
//!
//! Tenors are in months.

use rust_decimal::Decimal;

use crate::domain::builder::NodeSpec;
use crate::domain::entities::Transaction;

fn node(name: &str, limit: i64, tenor: i64) -> NodeSpec {
    NodeSpec::new(name, Decimal::from(limit), Decimal::from(tenor))
}

fn txn(product: &str, leaf: &str, amount: i64, tenor: i64) -> Transaction {
    Transaction::new(
        ["Level 1", product, leaf],
        Decimal::from(amount),
        Decimal::from(tenor),
    )
}

/// Two products with three sub-products each under a single firm-wide root.
pub fn sample_hierarchy() -> NodeSpec {
    node("Level 1", 1_000_000, 24).with_children([
        node("Product 1", 600_000, 18).with_children([
            node("Product 1A", 200_000, 12),
            node("Product 1B", 250_000, 12),
            node("Product 1C", 250_000, 18),
        ]),
        node("Product 2", 500_000, 24).with_children([
            node("Product 2A", 200_000, 24),
            node("Product 2B", 150_000, 6),
            node("Product 2C", 220_000, 18),
        ]),
    ])
}

/// A batch that fits every ceiling of [`sample_hierarchy`], some of them exactly.
pub fn sample_transactions() -> Vec<Transaction> {
    vec![
        txn("Product 1", "Product 1A", 1_000, 10),
        txn("Product 1", "Product 1B", 200_000, 11),
        txn("Product 1", "Product 1C", 225_000, 18),
        txn("Product 2", "Product 2A", 200_000, 6),
        txn("Product 2", "Product 2B", 100_000, 6),
        txn("Product 2", "Product 2C", 199_000, 18),
    ]
}

/// Pushes Product 1A, Product 1 and Level 1 over their amount limits.
pub fn oversized_transaction() -> Transaction {
    txn("Product 1", "Product 1A", 500_000, 10)
}
