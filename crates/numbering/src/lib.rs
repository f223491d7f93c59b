//! Reference numbering for sequenced business documents.
//!
//! Customers, quotes, invoices, payments, employees, interventions and missions
//! carry a human-readable reference (`CLI-001`, `INV-2024-007`). This crate
//! parses the last issued reference and computes the next one. It is pure:
//! uniqueness under concurrent issuance is enforced by whoever persists the
//! result.

pub mod generator;
pub mod reference;
pub mod scheme;

pub use generator::{ReferenceGenerator, YEAR_RANGE, next_number};
pub use reference::ReferenceNumber;
pub use scheme::{EntityKind, NumberingScheme};
