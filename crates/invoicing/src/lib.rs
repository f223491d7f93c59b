//! Quote and invoice figures.
//!
//! This crate contains the money math for commercial documents (line totals,
//! VAT, document aggregates, payment settlement) and the document status
//! enums, implemented purely as deterministic domain logic (no IO, no HTTP,
//! no storage).

pub mod settlement;
pub mod status;
pub mod totals;

pub use settlement::Settlement;
pub use status::{InvoiceStatus, QuoteStatus};
pub use totals::{DocumentTotals, LineItem, document_totals, line_total, total_ttc, vat};
