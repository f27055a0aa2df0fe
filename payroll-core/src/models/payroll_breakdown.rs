use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{AllowanceBreakdown, PayFrequency};

/// The complete result of one payroll calculation.
///
/// A pure value with no identity or lifecycle: produced fresh on every call
/// and stored verbatim when persisted, so a payslip can be regenerated later
/// without re-deriving it under possibly-changed statutory rules.
///
/// The serialized field names (`grossSalary`, `paye`,
/// `netBeforeCommunityHealthInsurance`, ...) are the wire contract of the
/// admin console and the stored snapshot format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollBreakdown {
    pub frequency: PayFrequency,
    pub basic_salary: Decimal,
    pub allowances: AllowanceBreakdown,

    /// Basic salary plus transport, housing, and performance allowances.
    pub gross_salary: Decimal,

    /// Equal to gross salary; the first tax band already carries the
    /// statutory exemption.
    pub taxable_income: Decimal,

    pub paye: Decimal,
    pub employee_pension: Decimal,
    pub employee_maternity: Decimal,
    pub employee_medical: Decimal,

    /// Gross minus PAYE and the pension, maternity, and medical
    /// contributions; the base on which CBHI is levied.
    pub net_before_community_health_insurance: Decimal,

    pub community_health_insurance: Decimal,
    pub advance_amount: Decimal,
    pub total_employee_deductions: Decimal,

    /// Amount actually paid to the employee's bank account.
    pub net_salary: Decimal,

    pub employer_pension: Decimal,
    pub employer_maternity: Decimal,
    pub employer_medical: Decimal,
    pub occupational_hazard: Decimal,
    pub total_employer_contributions: Decimal,
    pub total_cost_of_employment: Decimal,

    pub include_medical: bool,
}

/// Legacy field names. Older consumers exposed the same figures under
/// several names; those map onto the canonical fields below instead of
/// being stored twice.
impl PayrollBreakdown {
    /// Legacy name for `net_salary`; the two were always the same figure.
    pub fn net_paid_to_bank(&self) -> Decimal {
        self.net_salary
    }

    /// Legacy name for `net_salary` kept for payslip templates.
    pub fn take_home_salary(&self) -> Decimal {
        self.net_salary
    }

    /// Legacy name for `net_salary` used by older report exports.
    pub fn net_to_be_paid(&self) -> Decimal {
        self.net_salary
    }

    /// Legacy name for `gross_salary`.
    pub fn total_gross(&self) -> Decimal {
        self.gross_salary
    }
}
