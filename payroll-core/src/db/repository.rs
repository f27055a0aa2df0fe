use async_trait::async_trait;
use thiserror::Error;

use crate::models::{NewSalaryRecord, PayFrequency, SalaryRecord, SalarySummary};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Record not found")]
    NotFound,

    #[error("Database error: {0}")]
    Database(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Encryption error: {0}")]
    Encryption(String),
}

/// Storage contract for persisted payroll runs.
///
/// Implementations hand decrypted figures to callers and store each
/// breakdown snapshot verbatim, so a payslip can be regenerated later
/// without recomputing it under possibly-changed statutory rules.
#[async_trait]
pub trait SalaryRepository: Send + Sync {
    /// Persists a new payroll run and returns the stored record.
    async fn create_salary(
        &self,
        record: NewSalaryRecord,
    ) -> Result<SalaryRecord, RepositoryError>;

    /// Fetches one stored run, including its full breakdown snapshot.
    async fn get_salary(&self, id: i64) -> Result<SalaryRecord, RepositoryError>;

    /// All runs for one employee, newest pay period first.
    async fn list_by_employee(
        &self,
        employee_id: &str,
    ) -> Result<Vec<SalarySummary>, RepositoryError>;

    /// The most recently created runs across all employees.
    async fn list_recent(&self, limit: i64) -> Result<Vec<SalarySummary>, RepositoryError>;

    /// Runs whose pay period falls in the given month, optionally
    /// restricted to one pay frequency.
    async fn monthly_report(
        &self,
        year: i32,
        month: u32,
        frequency: Option<PayFrequency>,
    ) -> Result<Vec<SalarySummary>, RepositoryError>;

    /// Removes one stored run.
    async fn delete_salary(&self, id: i64) -> Result<(), RepositoryError>;
}
