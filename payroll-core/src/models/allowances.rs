use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The allowance amounts reported alongside a payroll breakdown.
///
/// Variable allowance is reported in this group but does not enter gross
/// salary; only transport, housing, and performance do.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllowanceBreakdown {
    pub variable: Decimal,
    pub transport: Decimal,
    pub housing: Decimal,
    pub performance: Decimal,
}
