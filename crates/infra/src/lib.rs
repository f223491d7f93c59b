//! Infrastructure layer: reference storage, issuance, configuration.

pub mod config;
pub mod issuer;
pub mod reference_store;

pub use config::{ConfigError, NumberingConfig};
pub use issuer::{IssueError, ReferenceIssuer};
pub use reference_store::{InMemoryReferenceStore, ReferenceStore, StoreError};
