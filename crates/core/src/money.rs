//! Monetary rounding shared by totals and payroll.

/// Round an amount to 2 decimal places, half away from zero.
///
/// Scales by 100, rounds with [`f64::round`] and scales back. Non-finite values
/// are returned unchanged (`NaN` stays `NaN`).
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
