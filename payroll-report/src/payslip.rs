//! Plain-text payslip rendering.
//!
//! The renderer consumes breakdown figures by name and lays them out as a
//! bordered document: header, earnings, deductions, net pay in figures and
//! words, then the employer-side contributions. It never recomputes
//! anything, so a payslip regenerated from a stored snapshot matches the
//! one printed on the day the run was calculated.

use chrono::NaiveDate;
use payroll_core::PayrollBreakdown;
use rust_decimal::Decimal;

use crate::currency::format_rwf;
use crate::words::amount_in_words;

const COMPANY_NAME: &str = "HC Solutions";
const COMPANY_ADDRESS: &str = "Kigali, Rwanda";
const WIDTH: usize = 64;

/// A renderable payslip for one payroll run.
///
/// Built either from a freshly computed breakdown or from the snapshot a
/// repository stored.
#[derive(Debug, Clone)]
pub struct Payslip {
    pub employee_name: String,
    pub employee_id: String,
    pub designation: Option<String>,
    pub department: Option<String>,
    pub pay_period: NaiveDate,
    pub breakdown: PayrollBreakdown,
}

impl Payslip {
    pub fn render(&self) -> String {
        let b = &self.breakdown;
        let mut lines: Vec<String> = Vec::new();

        lines.push(rule());
        lines.push(centered("Payslip"));
        lines.push(centered(COMPANY_NAME));
        lines.push(centered(COMPANY_ADDRESS));
        lines.push(rule());

        lines.push(info_row("Employee name", &self.employee_name));
        lines.push(info_row("Employee id", &self.employee_id));
        if let Some(designation) = &self.designation {
            lines.push(info_row("Designation", designation));
        }
        if let Some(department) = &self.department {
            lines.push(info_row("Department", department));
        }
        lines.push(info_row(
            "Pay period",
            &self.pay_period.format("%B %Y").to_string(),
        ));
        lines.push(info_row("Pay frequency", b.frequency.as_str()));
        lines.push(rule());

        lines.push("Earnings".to_string());
        lines.push(amount_row("Basic Salary", b.basic_salary));
        lines.push(amount_row("Transport Allowance", b.allowances.transport));
        lines.push(amount_row("Housing Allowance", b.allowances.housing));
        lines.push(amount_row("Performance Allowance", b.allowances.performance));
        lines.push(amount_row("Total Earnings", b.gross_salary));
        lines.push(rule());

        lines.push("Deductions".to_string());
        lines.push(amount_row("PAYE", b.paye));
        lines.push(amount_row("RSSB Pension", b.employee_pension));
        lines.push(amount_row("RSSB Maternity", b.employee_maternity));
        lines.push(amount_row("Medical Insurance (RAMA)", b.employee_medical));
        lines.push(amount_row("CBHI", b.community_health_insurance));
        lines.push(amount_row("Salary Advance", b.advance_amount));
        lines.push(amount_row("Total Deductions", b.total_employee_deductions));
        lines.push(rule());

        lines.push(amount_row("Net Pay", b.net_salary));
        lines.push(format!("In words: {} Francs", amount_in_words(b.net_salary)));
        lines.push(rule());

        lines.push("Employer Contributions".to_string());
        lines.push(amount_row("RSSB Pension", b.employer_pension));
        lines.push(amount_row("RSSB Maternity", b.employer_maternity));
        lines.push(amount_row("Medical Insurance (RAMA)", b.employer_medical));
        lines.push(amount_row("Occupational Hazard", b.occupational_hazard));
        lines.push(amount_row(
            "Total Employer Contributions",
            b.total_employer_contributions,
        ));
        lines.push(amount_row(
            "Total Cost of Employment",
            b.total_cost_of_employment,
        ));
        lines.push(rule());

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }
}

fn rule() -> String {
    "-".repeat(WIDTH)
}

fn centered(text: &str) -> String {
    let padding = WIDTH.saturating_sub(text.len()) / 2;
    format!("{}{text}", " ".repeat(padding))
}

fn info_row(label: &str, value: &str) -> String {
    format!("{label:<14}: {value}")
}

fn amount_row(label: &str, amount: Decimal) -> String {
    format!("  {label:<42}{:>20}", format_rwf(amount))
}

#[cfg(test)]
mod tests {
    use payroll_core::{PayrollCalculator, PayrollInput};
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn payslip_for(input: &PayrollInput) -> Payslip {
        Payslip {
            employee_name: "Jane Bosco".to_string(),
            employee_id: "emp-001".to_string(),
            designation: Some("Accountant".to_string()),
            department: Some("Finance".to_string()),
            pay_period: NaiveDate::parse_from_str("2025-06-30", "%Y-%m-%d").expect("valid date"),
            breakdown: PayrollCalculator::default().calculate(input),
        }
    }

    #[test]
    fn reference_case_renders_the_key_figures() {
        let payslip = payslip_for(&PayrollInput {
            basic_salary: dec!(1000000),
            ..PayrollInput::default()
        });

        let rendered = payslip.render();

        assert!(rendered.contains("Payslip"));
        assert!(rendered.contains("HC Solutions"));
        assert!(rendered.contains("Jane Bosco"));
        assert!(rendered.contains("June 2025"));
        assert!(rendered.contains("RWF 1,000,000"));
        assert!(rendered.contains("RWF 264,000"));
        assert!(rendered.contains("RWF 595,010"));
        assert!(rendered.contains("In words: Five Hundred Ninety Five Thousand Ten Francs"));
    }

    #[test]
    fn optional_employee_details_are_omitted_when_absent() {
        let mut payslip = payslip_for(&PayrollInput::default());
        payslip.designation = None;
        payslip.department = None;

        let rendered = payslip.render();

        assert!(!rendered.contains("Designation"));
        assert!(!rendered.contains("Department"));
    }

    #[test]
    fn excluded_medical_shows_zero_on_both_sides() {
        let payslip = payslip_for(&PayrollInput {
            basic_salary: dec!(1000000),
            include_medical: false,
            ..PayrollInput::default()
        });

        let rendered = payslip.render();
        let medical_lines: Vec<&str> = rendered
            .lines()
            .filter(|line| line.contains("Medical Insurance (RAMA)"))
            .collect();

        assert_eq!(medical_lines.len(), 2);
        assert!(medical_lines.iter().all(|line| line.ends_with("RWF 0")));
    }

    #[test]
    fn rendering_is_deterministic() {
        let payslip = payslip_for(&PayrollInput {
            basic_salary: dec!(752292),
            transport_allowance: dec!(252311),
            ..PayrollInput::default()
        });

        assert_eq!(payslip.render(), payslip.render());
    }
}
