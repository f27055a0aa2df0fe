use rust_decimal::Decimal;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

use crate::models::PayFrequency;

/// One payroll calculation request.
///
/// Field names follow the JSON contract of the admin console
/// (`basicSalary`, `transportAllowance`, ...). Amount fields are lenient on
/// input: a missing, null, or non-numeric value becomes zero rather than a
/// deserialization error. Rejecting implausible salaries is a boundary
/// concern; the engine accepts the whole clamped domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PayrollInput {
    #[serde(deserialize_with = "lenient_amount")]
    pub basic_salary: Decimal,

    #[serde(deserialize_with = "lenient_amount")]
    pub transport_allowance: Decimal,

    #[serde(deserialize_with = "lenient_amount")]
    pub housing_allowance: Decimal,

    #[serde(deserialize_with = "lenient_amount")]
    pub performance_allowance: Decimal,

    #[serde(deserialize_with = "lenient_amount")]
    pub variable_allowance: Decimal,

    /// Advance already paid out, deducted from the final net amount.
    #[serde(deserialize_with = "lenient_amount")]
    pub advance_amount: Decimal,

    /// Whether the employer subscribes the employee to medical insurance.
    pub include_medical: bool,

    pub frequency: PayFrequency,
}

impl Default for PayrollInput {
    fn default() -> Self {
        Self {
            basic_salary: Decimal::ZERO,
            transport_allowance: Decimal::ZERO,
            housing_allowance: Decimal::ZERO,
            performance_allowance: Decimal::ZERO,
            variable_allowance: Decimal::ZERO,
            advance_amount: Decimal::ZERO,
            include_medical: true,
            frequency: PayFrequency::Monthly,
        }
    }
}

/// Accepts a JSON number or numeric string; anything else (null, text,
/// booleans) coerces to zero.
fn lenient_amount<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(Decimal),
        Text(String),
        Other(IgnoredAny),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Number(value) => value,
        Raw::Text(text) => text.trim().parse().unwrap_or(Decimal::ZERO),
        Raw::Other(_) => Decimal::ZERO,
    })
}
