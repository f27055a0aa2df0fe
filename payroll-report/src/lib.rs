//! Presentation-boundary rendering for payroll runs.
//!
//! Everything here rounds, formats, and lays out figures that the engine
//! produced exactly; nothing in this crate feeds back into a calculation.

pub mod currency;
pub mod monthly;
pub mod payslip;
pub mod words;

pub use currency::format_rwf;
pub use monthly::write_monthly_report;
pub use payslip::Payslip;
pub use words::amount_in_words;
