//! Monthly payroll report export.
//!
//! Writes the plaintext reporting columns of a month's stored runs as CSV,
//! one row per salary. Figures are exported exactly as stored; spreadsheet
//! consumers apply their own display rounding.

use std::io::Write;

use payroll_core::SalarySummary;

const HEADERS: [&str; 6] = [
    "Employee",
    "Pay Period",
    "Frequency",
    "Gross Salary",
    "PAYE",
    "Employer Contributions",
];

/// Writes `rows` as a CSV report to `writer`.
///
/// # Errors
///
/// Returns the underlying [`csv::Error`] if writing fails.
pub fn write_monthly_report<W: Write>(
    writer: W,
    rows: &[SalarySummary],
) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(HEADERS)?;

    for row in rows {
        let pay_period = row.pay_period.format("%Y-%m-%d").to_string();
        csv_writer.write_record([
            row.employee_id.as_str(),
            pay_period.as_str(),
            row.frequency.as_str(),
            row.gross_salary.to_string().as_str(),
            row.paye.to_string().as_str(),
            row.total_employer_contributions.to_string().as_str(),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}
