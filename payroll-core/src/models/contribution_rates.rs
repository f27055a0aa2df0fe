use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when validating contribution rates.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RatesError {
    /// The pension rate must be between 0 and 1.
    #[error("pension rate must be between 0 and 1, got {0}")]
    InvalidPensionRate(Decimal),

    /// The maternity rate must be between 0 and 1.
    #[error("maternity rate must be between 0 and 1, got {0}")]
    InvalidMaternityRate(Decimal),

    /// The medical insurance rate must be between 0 and 1.
    #[error("medical rate must be between 0 and 1, got {0}")]
    InvalidMedicalRate(Decimal),

    /// The occupational hazard rate must be between 0 and 1.
    #[error("hazard rate must be between 0 and 1, got {0}")]
    InvalidHazardRate(Decimal),

    /// The community health insurance rate must be between 0 and 1.
    #[error("community health insurance rate must be between 0 and 1, got {0}")]
    InvalidCbhiRate(Decimal),
}

/// Statutory contribution percentages applied by the payroll engine.
///
/// The national schedule is fixed; the values exist as data so a revised
/// schedule can be injected without touching the formulas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionRates {
    /// Pension contribution rate on gross salary, employee and employer alike.
    pub pension_rate: Decimal,

    /// Maternity contribution rate on basic salary.
    pub maternity_rate: Decimal,

    /// Medical insurance rate on basic salary, applied only when the employer
    /// opts in.
    pub medical_rate: Decimal,

    /// Occupational hazard rate on basic salary, employer side only.
    pub hazard_rate: Decimal,

    /// Community health insurance rate on net pay before its own deduction.
    pub cbhi_rate: Decimal,
}

impl ContributionRates {
    /// The current national schedule: 6% pension, 0.3% maternity,
    /// 7.5% medical, 2% occupational hazard, 0.5% CBHI.
    pub fn statutory() -> Self {
        Self {
            pension_rate: Decimal::new(6, 2),
            maternity_rate: Decimal::new(3, 3),
            medical_rate: Decimal::new(75, 3),
            hazard_rate: Decimal::new(2, 2),
            cbhi_rate: Decimal::new(5, 3),
        }
    }

    /// Validates that every rate lies within [0, 1].
    ///
    /// # Errors
    ///
    /// Returns [`RatesError`] naming the first rate found out of range.
    pub fn validate(&self) -> Result<(), RatesError> {
        let unit = Decimal::ZERO..=Decimal::ONE;
        if !unit.contains(&self.pension_rate) {
            return Err(RatesError::InvalidPensionRate(self.pension_rate));
        }
        if !unit.contains(&self.maternity_rate) {
            return Err(RatesError::InvalidMaternityRate(self.maternity_rate));
        }
        if !unit.contains(&self.medical_rate) {
            return Err(RatesError::InvalidMedicalRate(self.medical_rate));
        }
        if !unit.contains(&self.hazard_rate) {
            return Err(RatesError::InvalidHazardRate(self.hazard_rate));
        }
        if !unit.contains(&self.cbhi_rate) {
            return Err(RatesError::InvalidCbhiRate(self.cbhi_rate));
        }
        Ok(())
    }
}

impl Default for ContributionRates {
    fn default() -> Self {
        Self::statutory()
    }
}
