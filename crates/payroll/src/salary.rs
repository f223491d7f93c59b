use serde::{Deserialize, Serialize};

use parabellum_core::{ValueObject, round2};

/// Monthly pay inputs for one employee.
///
/// Everything except `base_salary` defaults to zero when absent from the
/// payload. Values are not validated here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollComponents {
    pub base_salary: f64,
    #[serde(default)]
    pub overtime: f64,
    #[serde(default)]
    pub bonuses: f64,
    #[serde(default)]
    pub allowances: f64,
    #[serde(default)]
    pub social_contributions: f64,
    #[serde(default)]
    pub taxes: f64,
    #[serde(default)]
    pub other_deductions: f64,
}

impl PayrollComponents {
    pub fn new(base_salary: f64) -> Self {
        Self {
            base_salary,
            ..Self::default()
        }
    }

    fn gross(&self) -> f64 {
        self.base_salary + self.overtime + self.bonuses + self.allowances
    }

    fn deductions(&self) -> f64 {
        self.social_contributions + self.taxes + self.other_deductions
    }
}

/// Computed pay figures, each rounded to 2 decimals on its own.
///
/// `net_salary == gross_salary - total_deductions` holds before rounding; after
/// rounding the three fields may disagree by a cent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollResult {
    pub gross_salary: f64,
    pub total_deductions: f64,
    pub net_salary: f64,
}

impl ValueObject for PayrollResult {}

pub fn net_salary(components: &PayrollComponents) -> PayrollResult {
    let gross = components.gross();
    let deductions = components.deductions();
    PayrollResult {
        gross_salary: round2(gross),
        total_deductions: round2(deductions),
        net_salary: round2(gross - deductions),
    }
}

/// Positional form of [`net_salary`].
#[allow(clippy::too_many_arguments)]
pub fn net_salary_from(
    base_salary: f64,
    overtime: f64,
    bonuses: f64,
    allowances: f64,
    social_contributions: f64,
    taxes: f64,
    other_deductions: f64,
) -> PayrollResult {
    net_salary(&PayrollComponents {
        base_salary,
        overtime,
        bonuses,
        allowances,
        social_contributions,
        taxes,
        other_deductions,
    })
}
