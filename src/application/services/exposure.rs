//! Exposure check service
//!
//! Builds a hierarchy, places a transaction batch on it and validates every
//! node's ceilings.

use tracing::{debug, info};

use crate::application::assignment::assign_transactions;
use crate::application::ApplicationResult;
use crate::domain::{
    validate, Breach, BreachKind, HierarchyArena, HierarchyBuilder, NodeSpec, Transaction,
};

/// Everything a caller needs to render or act on one validation run.
#[derive(Debug)]
pub struct ExposureReport {
    /// Hierarchy with the resolvable transactions attached
    pub arena: HierarchyArena,
    /// Transactions that matched no node
    pub unresolved: Vec<Transaction>,
    /// Breaches in pre-order, root first
    pub breaches: Vec<Breach>,
}

impl ExposureReport {
    /// No node exceeds any ceiling. Unresolved transactions do not count.
    pub fn is_compliant(&self) -> bool {
        self.breaches.is_empty()
    }

    pub fn breaches_of(&self, kind: BreachKind) -> impl Iterator<Item = &Breach> {
        self.breaches.iter().filter(move |b| b.kind == kind)
    }
}

/// Service for running exposure checks.
#[derive(Debug, Default)]
pub struct ExposureService {
    builder: HierarchyBuilder,
}

impl ExposureService {
    pub fn new() -> Self {
        Self {
            builder: HierarchyBuilder::new(),
        }
    }

    /// Builds the hierarchy without any transactions.
    pub fn hierarchy(&self, spec: &NodeSpec) -> ApplicationResult<HierarchyArena> {
        Ok(self.builder.build(spec)?)
    }

    /// Assigns `transactions` to a fresh hierarchy built from `spec` and validates it.
    ///
    /// A subtree total outside the `Decimal` range is reported as
    /// [`DomainError::AmountOverflow`](crate::domain::DomainError::AmountOverflow).
    pub fn run(
        &self,
        spec: &NodeSpec,
        transactions: impl IntoIterator<Item = Transaction>,
    ) -> ApplicationResult<ExposureReport> {
        debug!("run: root={}", spec.name);
        let mut arena = self.hierarchy(spec)?;
        let assignment = assign_transactions(&mut arena, transactions)?;
        let breaches = validate(&arena)?;

        info!(
            "validated {} node(s): {} attached, {} unresolved, {} breach(es)",
            arena.len(),
            assignment.attached,
            assignment.unresolved.len(),
            breaches.len()
        );

        Ok(ExposureReport {
            arena,
            unresolved: assignment.unresolved,
            breaches,
        })
    }
}
