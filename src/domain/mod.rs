//! Domain layer: product hierarchy, rollups and breach detection
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod arena;
pub mod builder;
pub mod entities;
pub mod error;
pub mod rollup;
pub mod sample;
pub mod validation;

pub use arena::{HierarchyArena, HierarchyNode, NodeId};
pub use builder::{HierarchyBuilder, NodeSpec};
pub use entities::*;
pub use error::{DomainError, DomainResult};
pub use rollup::{max_tenor, total_amount, Aggregate, RollupTable};
pub use validation::{validate, validate_from};
