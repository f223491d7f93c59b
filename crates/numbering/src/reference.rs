use serde::{Serialize, Serializer};

use parabellum_core::{DomainError, DomainResult, ValueObject};

use crate::scheme::NumberingScheme;

/// A parsed reference number such as `CLI-007` or `INV-2024-012`.
///
/// Ordering is by (prefix, year, sequence), which is the issuance order within
/// one scope.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReferenceNumber {
    prefix: String,
    year: Option<i32>,
    sequence: u64,
    width: usize,
}

impl ValueObject for ReferenceNumber {}

impl ReferenceNumber {
    pub(crate) fn new(scheme: &NumberingScheme, year: Option<i32>, sequence: u64) -> Self {
        Self {
            prefix: scheme.prefix().to_string(),
            year,
            sequence,
            width: scheme.width(),
        }
    }

    /// Parse a stored reference against the scheme it was issued under.
    ///
    /// Anything that does not follow the scheme is a [`DomainError::DataIntegrity`]:
    /// the value came from storage, not from user input.
    pub fn parse(scheme: &NumberingScheme, raw: &str) -> DomainResult<Self> {
        let segments: Vec<&str> = raw.split('-').collect();
        let expected = if scheme.scope_by_year() { 3 } else { 2 };
        if segments.len() != expected {
            return Err(malformed(scheme, raw, "unexpected number of segments"));
        }
        if segments[0] != scheme.prefix() {
            return Err(malformed(scheme, raw, "prefix mismatch"));
        }

        let year = if scheme.scope_by_year() {
            let seg = segments[1];
            if seg.len() != 4 || !seg.bytes().all(|b| b.is_ascii_digit()) {
                return Err(malformed(scheme, raw, "year segment is not a 4-digit year"));
            }
            Some(
                seg.parse::<i32>()
                    .map_err(|_| malformed(scheme, raw, "year segment is not a 4-digit year"))?,
            )
        } else {
            None
        };

        let seg = segments[expected - 1];
        if seg.is_empty() || !seg.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed(scheme, raw, "sequence is not numeric"));
        }
        let sequence = seg
            .parse::<u64>()
            .map_err(|_| malformed(scheme, raw, "sequence out of range"))?;
        if sequence == 0 {
            return Err(malformed(scheme, raw, "sequence must be positive"));
        }

        Ok(Self {
            prefix: scheme.prefix().to_string(),
            year,
            sequence,
            width: scheme.width(),
        })
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn year(&self) -> Option<i32> {
        self.year
    }

    pub fn sequence(&self) -> u64 {
        self.sequence
    }
}

fn malformed(scheme: &NumberingScheme, raw: &str, reason: &str) -> DomainError {
    DomainError::data_integrity(format!(
        "stored reference '{raw}' does not match {} ({reason})",
        scheme.pattern()
    ))
}

impl core::fmt::Display for ReferenceNumber {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let width = self.width;
        match self.year {
            Some(year) => write!(f, "{}-{year}-{:0width$}", self.prefix, self.sequence),
            None => write!(f, "{}-{:0width$}", self.prefix, self.sequence),
        }
    }
}

impl Serialize for ReferenceNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
