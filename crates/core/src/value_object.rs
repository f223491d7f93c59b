//! Value object trait: equality by value, not identity.
//!
//! Totals, payroll results and parsed reference numbers are value objects:
//! they are derived from inputs, carry no identity and are never mutated in
//! place. Recompute them instead of updating them.

/// Marker trait for value objects.
///
/// Requires `Clone + PartialEq + Debug` so values can be copied around freely,
/// compared in tests and logged.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct DocumentTotals { subtotal_ht: f64, total_vat: f64, total_ttc: f64 }
///
/// impl ValueObject for DocumentTotals {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
