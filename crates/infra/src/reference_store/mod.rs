//! Issued-reference storage boundary.
//!
//! This module defines an infrastructure-facing abstraction for reading the
//! last issued reference of a scope and recording new ones under a uniqueness
//! guarantee, without making any storage assumptions.

pub mod in_memory;
pub mod r#trait;

pub use in_memory::InMemoryReferenceStore;
pub use r#trait::{ReferenceStore, StoreError};
