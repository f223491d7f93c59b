//! Date-based business predicates.
//!
//! All functions take the current instant explicitly; [`BusinessRules`] binds
//! them to a [`Clock`].

use chrono::{DateTime, NaiveDate, Utc};

use parabellum_core::Clock;
use parabellum_invoicing::{InvoiceStatus, QuoteStatus};

/// Length of a tenure "month" when checking leave eligibility.
pub const DAYS_PER_MONTH: i64 = 30;

pub fn is_future_date(date: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    date > now
}

/// A quote is valid up to and including its `valid_until` instant.
pub fn is_quote_valid(valid_until: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    now <= valid_until
}

pub fn is_invoice_overdue(due_date: DateTime<Utc>, status: InvoiceStatus, now: DateTime<Utc>) -> bool {
    now > due_date && !status.is_closed()
}

/// At least one full 30-day month between hiring and the first day of leave.
pub fn can_take_leave(hire_date: NaiveDate, leave_start: NaiveDate) -> bool {
    let days = (leave_start - hire_date).num_days();
    days / DAYS_PER_MONTH >= 1
}

/// Status to display for an invoice: open invoices past due read as overdue.
pub fn effective_invoice_status(
    status: InvoiceStatus,
    due_date: DateTime<Utc>,
    now: DateTime<Utc>,
) -> InvoiceStatus {
    match status {
        InvoiceStatus::Sent | InvoiceStatus::PartiallyPaid if is_invoice_overdue(due_date, status, now) => {
            InvoiceStatus::Overdue
        }
        other => other,
    }
}

/// Status to display for a quote: pending quotes past validity read as expired.
pub fn effective_quote_status(
    status: QuoteStatus,
    valid_until: DateTime<Utc>,
    now: DateTime<Utc>,
) -> QuoteStatus {
    if status.is_pending() && !is_quote_valid(valid_until, now) {
        QuoteStatus::Expired
    } else {
        status
    }
}

/// The predicates above, evaluated against an injected clock.
#[derive(Debug, Clone)]
pub struct BusinessRules<C> {
    clock: C,
}

impl<C: Clock> BusinessRules<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    pub fn is_future_date(&self, date: DateTime<Utc>) -> bool {
        is_future_date(date, self.now())
    }

    pub fn is_quote_valid(&self, valid_until: DateTime<Utc>) -> bool {
        is_quote_valid(valid_until, self.now())
    }

    pub fn is_invoice_overdue(&self, due_date: DateTime<Utc>, status: InvoiceStatus) -> bool {
        is_invoice_overdue(due_date, status, self.now())
    }

    pub fn can_take_leave(&self, hire_date: NaiveDate, leave_start: NaiveDate) -> bool {
        can_take_leave(hire_date, leave_start)
    }

    pub fn effective_invoice_status(&self, status: InvoiceStatus, due_date: DateTime<Utc>) -> InvoiceStatus {
        effective_invoice_status(status, due_date, self.now())
    }

    pub fn effective_quote_status(&self, status: QuoteStatus, valid_until: DateTime<Utc>) -> QuoteStatus {
        effective_quote_status(status, valid_until, self.now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use parabellum_core::FixedClock;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 10, 0, 0).unwrap()
    }

    fn rules() -> BusinessRules<FixedClock> {
        BusinessRules::new(FixedClock::new(now()))
    }

    #[test]
    fn future_date_is_strictly_after_now() {
        let rules = rules();
        assert!(rules.is_future_date(now() + Duration::seconds(1)));
        assert!(!rules.is_future_date(now()));
        assert!(!rules.is_future_date(now() - Duration::days(1)));
    }

    #[test]
    fn quote_is_valid_through_its_deadline() {
        let rules = rules();
        assert!(rules.is_quote_valid(now()));
        assert!(rules.is_quote_valid(now() + Duration::days(30)));
        assert!(!rules.is_quote_valid(now() - Duration::seconds(1)));
    }

    #[test]
    fn overdue_depends_on_status() {
        let rules = rules();
        let yesterday = now() - Duration::days(1);
        assert!(rules.is_invoice_overdue(yesterday, InvoiceStatus::Sent));
        assert!(rules.is_invoice_overdue(yesterday, InvoiceStatus::PartiallyPaid));
        assert!(!rules.is_invoice_overdue(yesterday, InvoiceStatus::Paid));
        assert!(!rules.is_invoice_overdue(yesterday, InvoiceStatus::Cancelled));
        assert!(!rules.is_invoice_overdue(now(), InvoiceStatus::Sent));
        assert!(!rules.is_invoice_overdue(now() + Duration::days(1), InvoiceStatus::Sent));
    }

    #[test]
    fn leave_requires_thirty_days_of_tenure() {
        let hired = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert!(can_take_leave(hired, hired + Duration::days(30)));
        assert!(can_take_leave(hired, hired + Duration::days(45)));
        assert!(!can_take_leave(hired, hired + Duration::days(29)));
        assert!(!can_take_leave(hired, hired));
        assert!(!can_take_leave(hired, hired - Duration::days(60)));
        assert!(rules().can_take_leave(hired, hired + Duration::days(30)));
    }

    #[test]
    fn open_invoice_past_due_reads_overdue() {
        let rules = rules();
        let yesterday = now() - Duration::days(1);
        assert_eq!(rules.effective_invoice_status(InvoiceStatus::Sent, yesterday), InvoiceStatus::Overdue);
        assert_eq!(
            rules.effective_invoice_status(InvoiceStatus::PartiallyPaid, yesterday),
            InvoiceStatus::Overdue
        );
        assert_eq!(rules.effective_invoice_status(InvoiceStatus::Paid, yesterday), InvoiceStatus::Paid);
        assert_eq!(rules.effective_invoice_status(InvoiceStatus::Draft, yesterday), InvoiceStatus::Draft);
        assert_eq!(
            rules.effective_invoice_status(InvoiceStatus::Sent, now() + Duration::days(1)),
            InvoiceStatus::Sent
        );
    }

    #[test]
    fn pending_quote_past_validity_reads_expired() {
        let rules = rules();
        let last_week = now() - Duration::days(7);
        assert_eq!(rules.effective_quote_status(QuoteStatus::Sent, last_week), QuoteStatus::Expired);
        assert_eq!(rules.effective_quote_status(QuoteStatus::Draft, last_week), QuoteStatus::Expired);
        assert_eq!(rules.effective_quote_status(QuoteStatus::Accepted, last_week), QuoteStatus::Accepted);
        assert_eq!(rules.effective_quote_status(QuoteStatus::Sent, now()), QuoteStatus::Sent);
    }
}
