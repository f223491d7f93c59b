use parabellum_core::{Clock, DomainError, DomainResult};

use crate::reference::ReferenceNumber;
use crate::scheme::NumberingScheme;

/// Years that fit the 4-digit year segment.
pub const YEAR_RANGE: core::ops::RangeInclusive<i32> = 1000..=9999;

/// Compute the reference that follows `last_issued` under `scheme`.
///
/// `year` is the current calendar year; it is only embedded when the scheme is
/// year-scoped. The caller is expected to pass the last reference issued in
/// `year`. A reference from an earlier year restarts the sequence at 1, a
/// reference from a later year is rejected. A year-scoped scheme refuses a
/// `year` outside [`YEAR_RANGE`].
pub fn next_number(
    scheme: &NumberingScheme,
    last_issued: Option<&str>,
    year: i32,
) -> DomainResult<ReferenceNumber> {
    let scope_year = scheme.scope_by_year().then_some(year);
    if scope_year.is_some_and(|y| !YEAR_RANGE.contains(&y)) {
        return Err(DomainError::invariant(format!(
            "year {year} does not fit the {} year segment",
            scheme.pattern()
        )));
    }

    let sequence = match last_issued {
        None => 1,
        Some(raw) => {
            let last = ReferenceNumber::parse(scheme, raw)?;
            match (last.year(), scope_year) {
                (Some(last_year), Some(current)) if last_year < current => {
                    tracing::debug!(
                        prefix = scheme.prefix(),
                        last_year,
                        current,
                        "year rollover; restarting sequence"
                    );
                    1
                }
                (Some(last_year), Some(current)) if last_year > current => {
                    return Err(DomainError::data_integrity(format!(
                        "last issued reference '{raw}' is dated after the current year {current}"
                    )));
                }
                _ => last.sequence().checked_add(1).ok_or_else(|| {
                    DomainError::data_integrity(format!("sequence exhausted after '{raw}'"))
                })?,
            }
        }
    };

    let next = ReferenceNumber::new(scheme, scope_year, sequence);
    tracing::debug!(reference = %next, "generated reference number");
    Ok(next)
}

/// Reference generator bound to a time source.
#[derive(Debug, Clone)]
pub struct ReferenceGenerator<C> {
    clock: C,
}

impl<C: Clock> ReferenceGenerator<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    /// Current calendar year according to the bound clock.
    pub fn current_year(&self) -> i32 {
        self.clock.current_year()
    }

    pub fn next_number(
        &self,
        scheme: &NumberingScheme,
        last_issued: Option<&str>,
    ) -> DomainResult<ReferenceNumber> {
        next_number(scheme, last_issued, self.current_year())
    }
}
