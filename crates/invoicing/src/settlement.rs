use serde::{Deserialize, Serialize};

use parabellum_core::{ValueObject, round2};

use crate::status::InvoiceStatus;

/// How much of an invoice has been paid.
///
/// Derived from the invoice total and its recorded payments; recompute it
/// whenever a payment is added or removed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settlement {
    pub total_ttc: f64,
    pub total_paid: f64,
    /// Never negative for finite inputs; see [`Settlement::is_overpaid`].
    /// Non-finite totals or payments carry through as NaN or infinity.
    pub outstanding: f64,
}

impl ValueObject for Settlement {}

impl Settlement {
    pub fn from_payments<I>(total_ttc: f64, payments: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let paid: f64 = payments.into_iter().sum();
        let total_paid = round2(paid);
        let outstanding = round2(total_ttc - paid);
        // `f64::max` would swallow NaN here.
        let outstanding = if outstanding < 0.0 { 0.0 } else { outstanding };
        Self {
            total_ttc: round2(total_ttc),
            total_paid,
            outstanding,
        }
    }

    /// False whenever any figure is non-finite.
    pub fn is_settled(&self) -> bool {
        self.is_finite() && self.outstanding == 0.0
    }

    pub fn is_finite(&self) -> bool {
        self.total_ttc.is_finite() && self.total_paid.is_finite() && self.outstanding.is_finite()
    }

    pub fn is_overpaid(&self) -> bool {
        self.total_paid > self.total_ttc
    }

    /// Invariant: a fully settled invoice cannot take more money.
    pub fn can_accept_payment(&self) -> bool {
        self.is_finite() && self.outstanding > 0.0
    }

    /// Status implied by the payments alone (ignores due dates and cancellation).
    ///
    /// Non-finite figures never read as paid.
    pub fn status(&self) -> InvoiceStatus {
        if self.is_settled() {
            InvoiceStatus::Paid
        } else if self.total_paid.is_finite() && self.total_paid > 0.0 {
            InvoiceStatus::PartiallyPaid
        } else {
            InvoiceStatus::Sent
        }
    }
}
