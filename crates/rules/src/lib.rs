//! Business-rule predicates (validity, overdue, leave eligibility).
//!
//! Pure functions over dates and statuses; "now" always comes from the caller
//! or from an injected [`parabellum_core::Clock`].

pub mod predicates;

pub use predicates::{
    BusinessRules, DAYS_PER_MONTH, can_take_leave, effective_invoice_status,
    effective_quote_status, is_future_date, is_invoice_overdue, is_quote_valid,
};
