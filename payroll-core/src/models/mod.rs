mod allowances;
mod contribution_rates;
mod pay_frequency;
mod payroll_breakdown;
mod payroll_input;
mod salary_record;
mod tax_band;

pub use allowances::AllowanceBreakdown;
pub use contribution_rates::{ContributionRates, RatesError};
pub use pay_frequency::PayFrequency;
pub use payroll_breakdown::PayrollBreakdown;
pub use payroll_input::PayrollInput;
pub use salary_record::{NewSalaryRecord, SalaryRecord, SalarySummary};
pub use tax_band::TaxBand;
