use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{PayFrequency, PayrollBreakdown};

/// A persisted payroll run for one employee and pay period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryRecord {
    pub id: i64,
    pub employee_id: String,
    pub pay_period: NaiveDate,

    /// The engine output stored verbatim at calculation time.
    pub breakdown: PayrollBreakdown,

    pub created_by: String,
    pub created_at: DateTime<Utc>,
}

/// For creating new salary records (no id or timestamp).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSalaryRecord {
    pub employee_id: String,
    pub pay_period: NaiveDate,
    pub breakdown: PayrollBreakdown,
    pub created_by: String,
}

/// Listing row built from the plaintext reporting columns of a stored run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalarySummary {
    pub id: i64,
    pub employee_id: String,
    pub pay_period: NaiveDate,
    pub frequency: PayFrequency,
    pub gross_salary: Decimal,
    pub paye: Decimal,
    pub total_employer_contributions: Decimal,
}
