//! Application layer: services and use cases
//!
//! This layer orchestrates domain logic and depends on I/O boundary traits.

pub mod assignment;
pub mod batch;
pub mod display;
pub mod error;
pub mod error_ext;
pub mod services;

pub use assignment::{assign_transactions, resolve_path, AssignmentReport};
pub use batch::TransactionBatch;
pub use display::render_structure;
pub use error::{ApplicationError, ApplicationResult};
pub use error_ext::IoResultExt;
