use async_trait::async_trait;
use payroll_core::db::factory::{DbConfig, RepositoryFactory};
use payroll_core::{RepositoryError, SalaryRepository};
use payroll_crypto::FieldCipher;

use crate::SqliteSalaryRepository;

/// Factory for the `"sqlite"` backend.
///
/// Accepts either a full sqlx URL (`sqlite:salaries.db?mode=rwc`,
/// `sqlite::memory:`) or a bare path / `:memory:` as the connection string.
/// Migrations run on every `create`; the schema is idempotent.
pub struct SqliteRepositoryFactory {
    cipher: FieldCipher,
}

impl SqliteRepositoryFactory {
    pub fn new(cipher: FieldCipher) -> Self {
        Self { cipher }
    }

    fn database_url(connection_string: &str) -> String {
        if connection_string.starts_with("sqlite:") {
            connection_string.to_string()
        } else if connection_string == ":memory:" {
            "sqlite::memory:".to_string()
        } else {
            format!("sqlite:{connection_string}?mode=rwc")
        }
    }
}

#[async_trait]
impl RepositoryFactory for SqliteRepositoryFactory {
    fn backend_name(&self) -> &'static str {
        "sqlite"
    }

    async fn create(
        &self,
        config: &DbConfig,
    ) -> Result<Box<dyn SalaryRepository>, RepositoryError> {
        let url = Self::database_url(&config.connection_string);
        let repo = SqliteSalaryRepository::new(&url, self.cipher.clone()).await?;
        repo.run_migrations().await?;
        Ok(Box::new(repo))
    }
}
