//! SQLite storage backend for persisted payroll runs.
//!
//! Compensation figures live in per-column encrypted fields and the full
//! breakdown is stored as one encrypted JSON snapshot; only the statutory
//! reporting columns (gross, PAYE, contributions) are kept in plaintext for
//! listings and monthly reports.

pub mod factory;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use payroll_core::{
    NewSalaryRecord, PayFrequency, PayrollBreakdown, RepositoryError, SalaryRecord,
    SalaryRepository, SalarySummary,
};
use payroll_crypto::FieldCipher;
use rust_decimal::Decimal;
use sqlx::sqlite::SqlitePool;
use sqlx::FromRow;

pub use factory::SqliteRepositoryFactory;

pub struct SqliteSalaryRepository {
    pool: SqlitePool,
    cipher: FieldCipher,
}

impl SqliteSalaryRepository {
    pub async fn new(database_url: &str, cipher: FieldCipher) -> Result<Self, RepositoryError> {
        let pool = SqlitePool::connect(database_url)
            .await
            .map_err(|e| RepositoryError::Connection(e.to_string()))?;
        Ok(Self { pool, cipher })
    }

    pub fn new_with_pool(pool: SqlitePool, cipher: FieldCipher) -> Self {
        Self { pool, cipher }
    }

    pub async fn run_migrations(&self) -> Result<(), RepositoryError> {
        tracing::debug!("running sqlite migrations");
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;
        Ok(())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    fn encrypt(&self, column: &str, value: &str) -> Result<String, RepositoryError> {
        self.cipher
            .encrypt_field(column, value)
            .map_err(|e| RepositoryError::Encryption(e.to_string()))
    }

    fn record_from_row(&self, row: SalaryRow) -> Result<SalaryRecord, RepositoryError> {
        let snapshot_json = self
            .cipher
            .decrypt_field("payroll_snapshot_enc", &row.payroll_snapshot_enc)
            .map_err(|e| RepositoryError::Encryption(e.to_string()))?;
        let breakdown: PayrollBreakdown = serde_json::from_str(&snapshot_json)
            .map_err(|e| RepositoryError::Database(format!("Failed to parse snapshot: {e}")))?;

        Ok(SalaryRecord {
            id: row.salary_id,
            employee_id: row.employee_id,
            pay_period: parse_date(&row.pay_period)?,
            breakdown,
            created_by: row.created_by,
            created_at: parse_datetime(&row.created_at)?,
        })
    }
}

#[derive(FromRow)]
struct SalaryRow {
    salary_id: i64,
    employee_id: String,
    pay_period: String,
    payroll_snapshot_enc: String,
    created_by: String,
    created_at: String,
}

#[derive(FromRow)]
struct SummaryRow {
    salary_id: i64,
    employee_id: String,
    pay_period: String,
    pay_frequency: String,
    gross_salary: String,
    paye: String,
    total_employer_contrib: String,
}

impl TryFrom<SummaryRow> for SalarySummary {
    type Error = RepositoryError;

    fn try_from(row: SummaryRow) -> Result<Self, Self::Error> {
        let frequency = PayFrequency::parse(&row.pay_frequency).ok_or_else(|| {
            RepositoryError::Database(format!("Invalid pay frequency: {}", row.pay_frequency))
        })?;
        Ok(SalarySummary {
            id: row.salary_id,
            employee_id: row.employee_id,
            pay_period: parse_date(&row.pay_period)?,
            frequency,
            gross_salary: parse_decimal(&row.gross_salary)?,
            paye: parse_decimal(&row.paye)?,
            total_employer_contributions: parse_decimal(&row.total_employer_contrib)?,
        })
    }
}

fn money(value: Decimal) -> String {
    value.normalize().to_string()
}

fn parse_decimal(s: &str) -> Result<Decimal, RepositoryError> {
    s.parse::<Decimal>()
        .map_err(|e| RepositoryError::Database(format!("Failed to parse decimal '{s}': {e}")))
}

fn parse_date(s: &str) -> Result<NaiveDate, RepositoryError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| RepositoryError::Database(format!("Failed to parse date '{s}': {e}")))
}

fn parse_datetime(s: &str) -> Result<DateTime<Utc>, RepositoryError> {
    // SQLite stores timestamps in various formats, try common ones
    chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .or_else(|_| chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S"))
        .or_else(|_| chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f"))
        .map(|naive| naive.and_utc())
        .map_err(|e| RepositoryError::Database(format!("Failed to parse datetime '{s}': {e}")))
}

const SUMMARY_COLUMNS: &str = "salary_id, employee_id, pay_period, pay_frequency, \
     gross_salary, paye, total_employer_contrib";

#[async_trait]
impl SalaryRepository for SqliteSalaryRepository {
    async fn create_salary(
        &self,
        record: NewSalaryRecord,
    ) -> Result<SalaryRecord, RepositoryError> {
        let breakdown = &record.breakdown;
        let snapshot_json = serde_json::to_string(breakdown)
            .map_err(|e| RepositoryError::Database(format!("Failed to serialize snapshot: {e}")))?;

        // Monetary columns store normalized figures ("264000", never
        // "264000.0"); the snapshot alone keeps the exact engine output.
        let basic_enc = self.encrypt("basic_salary_enc", &money(breakdown.basic_salary))?;
        let transport_enc =
            self.encrypt("transport_allow_enc", &money(breakdown.allowances.transport))?;
        let housing_enc =
            self.encrypt("housing_allow_enc", &money(breakdown.allowances.housing))?;
        let variable_enc =
            self.encrypt("variable_allow_enc", &money(breakdown.allowances.variable))?;
        let performance_enc = self.encrypt(
            "performance_allow_enc",
            &money(breakdown.allowances.performance),
        )?;
        let net_paid_enc = self.encrypt("net_paid_enc", &money(breakdown.net_salary))?;
        let snapshot_enc = self.encrypt("payroll_snapshot_enc", &snapshot_json)?;

        let now = Utc::now().format("%Y-%m-%d %H:%M:%S").to_string();

        let result = sqlx::query(
            "INSERT INTO salaries (
                employee_id, pay_period, pay_frequency,
                basic_salary_enc, transport_allow_enc, housing_allow_enc,
                variable_allow_enc, performance_allow_enc, net_paid_enc,
                gross_salary, rssb_pension, rssb_maternity, rama_insurance,
                paye, advance_amount, total_employer_contrib,
                payroll_snapshot_enc, created_by, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&record.employee_id)
        .bind(record.pay_period.format("%Y-%m-%d").to_string())
        .bind(breakdown.frequency.as_str())
        .bind(&basic_enc)
        .bind(&transport_enc)
        .bind(&housing_enc)
        .bind(&variable_enc)
        .bind(&performance_enc)
        .bind(&net_paid_enc)
        .bind(money(breakdown.gross_salary))
        .bind(money(breakdown.employee_pension))
        .bind(money(breakdown.employee_maternity))
        .bind(money(breakdown.employee_medical))
        .bind(money(breakdown.paye))
        .bind(money(breakdown.advance_amount))
        .bind(money(breakdown.total_employer_contributions))
        .bind(&snapshot_enc)
        .bind(&record.created_by)
        .bind(&now)
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::Database(e.to_string()))?;

        let id = result.last_insert_rowid();
        self.get_salary(id).await
    }

    async fn get_salary(&self, id: i64) -> Result<SalaryRecord, RepositoryError> {
        let row: SalaryRow = sqlx::query_as(
            "SELECT salary_id, employee_id, pay_period, payroll_snapshot_enc,
                    created_by, created_at
             FROM salaries WHERE salary_id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::Database(e.to_string()))?
        .ok_or(RepositoryError::NotFound)?;

        self.record_from_row(row)
    }

    async fn list_by_employee(
        &self,
        employee_id: &str,
    ) -> Result<Vec<SalarySummary>, RepositoryError> {
        let rows: Vec<SummaryRow> = sqlx::query_as(&format!(
            "SELECT {SUMMARY_COLUMNS}
             FROM salaries
             WHERE employee_id = ?
             ORDER BY pay_period DESC",
        ))
        .bind(employee_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::Database(e.to_string()))?;

        rows.into_iter().map(|r| r.try_into()).collect()
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<SalarySummary>, RepositoryError> {
        let rows: Vec<SummaryRow> = sqlx::query_as(&format!(
            "SELECT {SUMMARY_COLUMNS}
             FROM salaries
             ORDER BY created_at DESC, salary_id DESC
             LIMIT ?",
        ))
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::Database(e.to_string()))?;

        rows.into_iter().map(|r| r.try_into()).collect()
    }

    async fn monthly_report(
        &self,
        year: i32,
        month: u32,
        frequency: Option<PayFrequency>,
    ) -> Result<Vec<SalarySummary>, RepositoryError> {
        let year = format!("{year:04}");
        let month = format!("{month:02}");

        let rows: Vec<SummaryRow> = match frequency {
            Some(frequency) => {
                sqlx::query_as(&format!(
                    "SELECT {SUMMARY_COLUMNS}
                     FROM salaries
                     WHERE strftime('%Y', pay_period) = ?
                       AND strftime('%m', pay_period) = ?
                       AND pay_frequency = ?
                     ORDER BY pay_period DESC, employee_id",
                ))
                .bind(&year)
                .bind(&month)
                .bind(frequency.as_str())
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as(&format!(
                    "SELECT {SUMMARY_COLUMNS}
                     FROM salaries
                     WHERE strftime('%Y', pay_period) = ?
                       AND strftime('%m', pay_period) = ?
                     ORDER BY pay_period DESC, employee_id",
                ))
                .bind(&year)
                .bind(&month)
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(|e| RepositoryError::Database(e.to_string()))?;

        rows.into_iter().map(|r| r.try_into()).collect()
    }

    async fn delete_salary(&self, id: i64) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM salaries WHERE salary_id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
