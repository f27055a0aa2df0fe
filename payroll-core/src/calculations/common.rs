//! Common utility functions for payroll calculations.

use rust_decimal::Decimal;

/// Rounds a monetary value to whole francs using half-up rounding.
///
/// The franc carries no minor unit on payroll documents, so presentation
/// boundaries round to zero decimal places. The calculation chain itself
/// never rounds; callers apply this only when displaying or printing.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use payroll_core::calculations::common::round_to_franc;
///
/// assert_eq!(round_to_franc(dec!(2990.4)), dec!(2990));
/// assert_eq!(round_to_franc(dec!(2990.5)), dec!(2991));
/// ```
pub fn round_to_franc(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Clamps a value below zero to zero.
pub fn clamp_non_negative(value: Decimal) -> Decimal {
    if value < Decimal::ZERO {
        Decimal::ZERO
    } else {
        value
    }
}
