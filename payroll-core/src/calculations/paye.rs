//! Progressive PAYE (Pay-As-You-Earn) tax calculation.
//!
//! Income tax is charged band by band: each band taxes only the slice of
//! income that falls inside it, at that band's marginal rate. The statutory
//! monthly schedule:
//!
//! | Band | Rate |
//! |------|------|
//! | 0 – 60,000 | 0% |
//! | 60,000 – 100,000 | 10% |
//! | 100,000 – 200,000 | 20% |
//! | above 200,000 | 30% |
//!
//! The first band is zero-rated, which is how the statutory exemption is
//! expressed. Taxable income must therefore not be reduced by the exemption
//! before banding; doing both exempts the amount twice.
//!
//! # Example
//!
//! ```
//! use rust_decimal::Decimal;
//! use payroll_core::calculations::PayeSchedule;
//!
//! let schedule = PayeSchedule::statutory();
//!
//! assert_eq!(schedule.tax_on(Decimal::from(60_000)), Decimal::ZERO);
//! assert_eq!(schedule.tax_on(Decimal::from(100_000)), Decimal::from(4_000));
//! assert_eq!(schedule.tax_on(Decimal::from(1_000_000)), Decimal::from(264_000));
//! ```

use rust_decimal::Decimal;
use thiserror::Error;

use crate::calculations::common::clamp_non_negative;
use crate::models::TaxBand;

/// Errors that can occur when building a PAYE schedule.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PayeScheduleError {
    /// The schedule has no bands at all.
    #[error("schedule has no bands")]
    Empty,

    /// Band upper bounds must be strictly ascending.
    #[error("band bounds must be strictly ascending, got {0} after {1}")]
    UnorderedBounds(Decimal, Decimal),

    /// Only the last band may omit its upper bound.
    #[error("only the last band may be unbounded")]
    UnboundedInnerBand,

    /// The last band must be unbounded so every income level has a rate.
    #[error("the last band must be unbounded")]
    BoundedTopBand,

    /// A marginal rate outside [0, 1].
    #[error("band rate must be between 0 and 1, got {0}")]
    InvalidRate(Decimal),
}

/// An ordered, non-overlapping progressive tax band table.
///
/// Immutable once constructed; build one per jurisdictional schedule and
/// share it freely across threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayeSchedule {
    bands: Vec<TaxBand>,
}

impl PayeSchedule {
    /// The fixed national PAYE schedule.
    pub fn statutory() -> Self {
        Self {
            bands: vec![
                TaxBand {
                    upper_bound: Some(Decimal::from(60_000)),
                    rate: Decimal::ZERO,
                },
                TaxBand {
                    upper_bound: Some(Decimal::from(100_000)),
                    rate: Decimal::new(1, 1),
                },
                TaxBand {
                    upper_bound: Some(Decimal::from(200_000)),
                    rate: Decimal::new(2, 1),
                },
                TaxBand {
                    upper_bound: None,
                    rate: Decimal::new(3, 1),
                },
            ],
        }
    }

    /// Builds a schedule from custom bands.
    ///
    /// Bands must be in ascending order with strictly increasing upper
    /// bounds, exactly one unbounded final band, and rates within [0, 1].
    /// Validating here keeps [`PayeSchedule::tax_on`] total.
    ///
    /// # Errors
    ///
    /// Returns [`PayeScheduleError`] describing the first violation found.
    pub fn new(bands: Vec<TaxBand>) -> Result<Self, PayeScheduleError> {
        if bands.is_empty() {
            return Err(PayeScheduleError::Empty);
        }

        let unit = Decimal::ZERO..=Decimal::ONE;
        let mut previous_bound = Decimal::ZERO;
        let last = bands.len() - 1;

        for (index, band) in bands.iter().enumerate() {
            if !unit.contains(&band.rate) {
                return Err(PayeScheduleError::InvalidRate(band.rate));
            }
            match band.upper_bound {
                Some(upper) => {
                    if index == last {
                        return Err(PayeScheduleError::BoundedTopBand);
                    }
                    if upper <= previous_bound {
                        return Err(PayeScheduleError::UnorderedBounds(upper, previous_bound));
                    }
                    previous_bound = upper;
                }
                None => {
                    if index != last {
                        return Err(PayeScheduleError::UnboundedInnerBand);
                    }
                }
            }
        }

        Ok(Self { bands })
    }

    /// Bands in ascending order.
    pub fn bands(&self) -> &[TaxBand] {
        &self.bands
    }

    /// Total tax owed on `taxable_income`.
    ///
    /// Walks the bands in order, taxing the slice of income that falls
    /// inside each band at that band's marginal rate, and stops once the
    /// income is exhausted. Negative input is treated as zero. The returned
    /// amount is exact and unrounded; rounding to whole francs happens at
    /// presentation boundaries, never here.
    pub fn tax_on(&self, taxable_income: Decimal) -> Decimal {
        let mut remaining = clamp_non_negative(taxable_income);
        let mut lower_bound = Decimal::ZERO;
        let mut tax = Decimal::ZERO;

        for band in &self.bands {
            if remaining <= Decimal::ZERO {
                break;
            }
            let taxable_here = match band.upper_bound {
                Some(upper) => remaining.min(upper - lower_bound),
                None => remaining,
            };
            tax += taxable_here * band.rate;
            remaining -= taxable_here;
            if let Some(upper) = band.upper_bound {
                lower_bound = upper;
            }
        }

        tax
    }
}

impl Default for PayeSchedule {
    fn default() -> Self {
        Self::statutory()
    }
}
