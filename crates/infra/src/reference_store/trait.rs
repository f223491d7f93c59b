use std::sync::Arc;

use thiserror::Error;

use parabellum_numbering::{NumberingScheme, ReferenceNumber};

/// Reference store operation error.
///
/// These are **infrastructure errors** (uniqueness, backend failures) as opposed
/// to domain errors (a stored reference that cannot be parsed).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The reference is already taken (unique constraint).
    #[error("reference '{0}' already issued")]
    Duplicate(String),

    #[error("reference store failure: {0}")]
    Backend(String),
}

/// Persistence boundary for issued reference numbers.
///
/// References live in **scopes** keyed by `(prefix, year)`; unscoped schemes use
/// `year = None`. Within a scope every reference is unique.
///
/// ## Read Semantics
///
/// `last_issued()` returns the reference with the highest sequence in the scope,
/// exactly as it was stored. Records from other years must not leak into a
/// year-scoped lookup.
///
/// ## Write Semantics
///
/// `insert()` is the uniqueness guard. It must fail with
/// [`StoreError::Duplicate`] when the reference already exists, so two writers
/// racing on the same "last + 1" cannot both succeed.
pub trait ReferenceStore: Send + Sync {
    /// Last reference issued in the `(scheme.prefix, year)` scope, if any.
    fn last_issued(
        &self,
        scheme: &NumberingScheme,
        year: Option<i32>,
    ) -> Result<Option<String>, StoreError>;

    /// Record a newly issued reference (unique per scope).
    fn insert(&self, reference: &ReferenceNumber) -> Result<(), StoreError>;
}

impl<S> ReferenceStore for Arc<S>
where
    S: ReferenceStore + ?Sized,
{
    fn last_issued(
        &self,
        scheme: &NumberingScheme,
        year: Option<i32>,
    ) -> Result<Option<String>, StoreError> {
        (**self).last_issued(scheme, year)
    }

    fn insert(&self, reference: &ReferenceNumber) -> Result<(), StoreError> {
        (**self).insert(reference)
    }
}
