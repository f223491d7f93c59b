use std::collections::{BTreeMap, HashMap};
use std::sync::RwLock;

use parabellum_numbering::{NumberingScheme, ReferenceNumber};

use super::r#trait::{ReferenceStore, StoreError};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct ScopeKey {
    prefix: String,
    year: Option<i32>,
}

/// In-memory reference registry.
///
/// Intended for tests/dev. Each scope keeps its references ordered by sequence.
#[derive(Debug, Default)]
pub struct InMemoryReferenceStore {
    scopes: RwLock<HashMap<ScopeKey, BTreeMap<u64, String>>>,
}

impl InMemoryReferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of references recorded in a scope.
    pub fn count(&self, prefix: &str, year: Option<i32>) -> Result<usize, StoreError> {
        let scopes = self
            .scopes
            .read()
            .map_err(|_| StoreError::Backend("lock poisoned".to_string()))?;
        let key = ScopeKey {
            prefix: prefix.to_string(),
            year,
        };
        Ok(scopes.get(&key).map(BTreeMap::len).unwrap_or(0))
    }
}

impl ReferenceStore for InMemoryReferenceStore {
    fn last_issued(
        &self,
        scheme: &NumberingScheme,
        year: Option<i32>,
    ) -> Result<Option<String>, StoreError> {
        let key = ScopeKey {
            prefix: scheme.prefix().to_string(),
            year,
        };

        let scopes = self
            .scopes
            .read()
            .map_err(|_| StoreError::Backend("lock poisoned".to_string()))?;

        Ok(scopes
            .get(&key)
            .and_then(|refs| refs.last_key_value())
            .map(|(_, raw)| raw.clone()))
    }

    fn insert(&self, reference: &ReferenceNumber) -> Result<(), StoreError> {
        let key = ScopeKey {
            prefix: reference.prefix().to_string(),
            year: reference.year(),
        };

        let mut scopes = self
            .scopes
            .write()
            .map_err(|_| StoreError::Backend("lock poisoned".to_string()))?;

        let refs = scopes.entry(key).or_default();
        if refs.contains_key(&reference.sequence()) {
            return Err(StoreError::Duplicate(reference.to_string()));
        }
        refs.insert(reference.sequence(), reference.to_string());
        Ok(())
    }
}
