//! rslimit: hierarchical exposure limits
//!
//! A product book is a tree of nodes, each with an amount limit and a tenor
//! ceiling covering its whole subtree. Transactions are placed on nodes by name
//! path; validation rolls amounts (sum) and tenors (max) up the tree and
//! reports every node whose ceiling is exceeded.
//!
//! Architecture:
//! - `domain`: hierarchy arena, rollups, breach detection (no I/O)
//! - `application`: transaction assignment, batch parsing, services
//! - `infrastructure`: I/O boundary traits and DI container
//! - `cli`: argument parsing and command dispatch
//! - `config`: layered settings

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
