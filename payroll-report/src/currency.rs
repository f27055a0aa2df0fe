//! RWF currency formatting.

use payroll_core::calculations::common::{clamp_non_negative, round_to_franc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

/// Formats an amount as whole Rwandan francs: `RWF 1,234,567`.
///
/// Values below zero render as zero; payroll documents never show negative
/// money. This is the presentation boundary where half-up rounding to the
/// franc is applied.
pub fn format_rwf(value: Decimal) -> String {
    let whole = round_to_franc(clamp_non_negative(value)).to_i128().unwrap_or(0);
    format!("RWF {}", group_thousands(whole))
}

fn group_thousands(value: i128) -> String {
    let digits = value.to_string();
    let offset = digits.len() % 3;
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - offset) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
