//! Payroll calculation modules.
//!
//! This module provides the progressive PAYE schedule and the payroll
//! engine that composes the statutory formulas into a full breakdown.

pub mod common;
pub mod paye;
pub mod payroll;

pub use paye::{PayeSchedule, PayeScheduleError};
pub use payroll::PayrollCalculator;
