//! Reference issuance pipeline.
//!
//! ```text
//! issue(kind)
//!   ↓
//! 1. Read the last reference of the current scope (prefix, year)
//!   ↓
//! 2. Compute the next reference (pure, `parabellum-numbering`)
//!   ↓
//! 3. Insert it; the store rejects duplicates
//!   ↓
//! 4. On duplicate, another writer won the race: go back to 1
//! ```
//!
//! The loop is bounded by `NumberingConfig::max_attempts`. Each lost race means
//! some other writer succeeded, so the system as a whole always makes progress.

use thiserror::Error;

use parabellum_core::{Clock, DomainError};
use parabellum_numbering::{EntityKind, NumberingScheme, ReferenceGenerator, ReferenceNumber, next_number};

use crate::config::NumberingConfig;
use crate::reference_store::{ReferenceStore, StoreError};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IssueError {
    /// A stored reference could not be interpreted.
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("could not issue a {prefix} reference after {attempts} attempts")]
    Exhausted { prefix: String, attempts: u32 },
}

/// Issues unique, sequential reference numbers backed by a [`ReferenceStore`].
#[derive(Debug)]
pub struct ReferenceIssuer<S, C> {
    store: S,
    generator: ReferenceGenerator<C>,
    config: NumberingConfig,
}

impl<S, C: Clock> ReferenceIssuer<S, C> {
    pub fn new(store: S, clock: C, config: NumberingConfig) -> Self {
        Self {
            store,
            generator: ReferenceGenerator::new(clock),
            config,
        }
    }

    pub fn config(&self) -> &NumberingConfig {
        &self.config
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

impl<S, C> ReferenceIssuer<S, C>
where
    S: ReferenceStore,
    C: Clock,
{
    /// Issue the next reference for an entity class, using its configured scheme.
    pub fn issue(&self, kind: EntityKind) -> Result<ReferenceNumber, IssueError> {
        let scheme = self.config.scheme(kind);
        self.issue_with(&scheme)
    }

    #[tracing::instrument(skip(self, scheme), fields(prefix = scheme.prefix()), err)]
    pub fn issue_with(&self, scheme: &NumberingScheme) -> Result<ReferenceNumber, IssueError> {
        let max_attempts = self.config.max_attempts();

        for attempt in 1..=max_attempts {
            let year = self.generator.current_year();
            let scope_year = scheme.scope_by_year().then_some(year);

            let last = self.store.last_issued(scheme, scope_year)?;
            let next = next_number(scheme, last.as_deref(), year)?;

            match self.store.insert(&next) {
                Ok(()) => {
                    tracing::info!(reference = %next, attempt, "issued reference");
                    return Ok(next);
                }
                Err(StoreError::Duplicate(taken)) => {
                    tracing::warn!(reference = %taken, attempt, "reference already issued; retrying");
                }
                Err(e) => return Err(e.into()),
            }
        }

        Err(IssueError::Exhausted {
            prefix: scheme.prefix().to_string(),
            attempts: max_attempts,
        })
    }
}
