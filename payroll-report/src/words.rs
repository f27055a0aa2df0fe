//! Amounts written out in English words, for payslip signatures.

use payroll_core::calculations::common::{clamp_non_negative, round_to_franc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

const ONES: [&str; 10] = [
    "", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine",
];
const TEENS: [&str; 10] = [
    "Ten",
    "Eleven",
    "Twelve",
    "Thirteen",
    "Fourteen",
    "Fifteen",
    "Sixteen",
    "Seventeen",
    "Eighteen",
    "Nineteen",
];
const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

/// Writes an amount out in words, rounded to the nearest whole franc:
/// `9500` becomes `"Nine Thousand Five Hundred"`.
///
/// Values below zero render as `"Zero"`. Covers amounts up to the hundreds
/// of billions, far beyond any salary this system will ever print.
pub fn amount_in_words(value: Decimal) -> String {
    let amount = round_to_franc(clamp_non_negative(value))
        .to_u64()
        .unwrap_or(0);
    if amount == 0 {
        return "Zero".to_string();
    }

    let scales: [(u64, &str); 4] = [
        (1_000_000_000, "Billion"),
        (1_000_000, "Million"),
        (1_000, "Thousand"),
        (1, ""),
    ];

    let mut parts = Vec::new();
    let mut rest = amount;
    for (scale, name) in scales {
        if rest >= scale {
            let count = rest / scale;
            rest %= scale;
            if name.is_empty() {
                parts.push(under_thousand(count));
            } else {
                parts.push(format!("{} {name}", under_thousand(count)));
            }
        }
    }

    parts.join(" ")
}

fn under_thousand(n: u64) -> String {
    let mut words = String::new();
    let hundreds = n / 100;
    let remainder = n % 100;

    if hundreds > 0 {
        words.push_str(ONES[hundreds as usize]);
        words.push_str(" Hundred");
    }
    if remainder > 0 {
        if !words.is_empty() {
            words.push(' ');
        }
        if remainder < 10 {
            words.push_str(ONES[remainder as usize]);
        } else if remainder < 20 {
            words.push_str(TEENS[(remainder - 10) as usize]);
        } else {
            words.push_str(TENS[(remainder / 10) as usize]);
            if remainder % 10 > 0 {
                words.push(' ');
                words.push_str(ONES[(remainder % 10) as usize]);
            }
        }
    }

    words
}
