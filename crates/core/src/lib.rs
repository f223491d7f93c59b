//! `parabellum-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! the error model, the clock seam and the shared monetary rounding rule.

pub mod clock;
pub mod error;
pub mod money;
pub mod value_object;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{DomainError, DomainResult};
pub use money::round2;
pub use value_object::ValueObject;
