//! PostgreSQL storage backend using sqlx.
//!
//! Provides `PostgresStore`, implementing both store traits over a
//! `sqlx::PgPool`. Every operation is a single parameterized statement.
//!
//! # Feature flag
//!
//! This module is gated behind the `postgres` feature flag:
//! ```toml
//! [dependencies]
//! biztime = { version = "0.1", features = ["postgres"] }
//! ```
//!
//! # Error classification
//!
//! Database errors are mapped onto [`StoreError`] by SQLSTATE so that only
//! failures caused by the caller's values become `BadRequest`:
//!
//! - class 23 (integrity constraint violation) → `StoreError::Constraint`
//! - class 22 (data exception, e.g. invalid text representation) → `StoreError::InvalidInput`
//! - everything else (I/O, pool, protocol, decode) → `StoreError::Backend`

use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::error::ErrorKind;
use sqlx::postgres::PgPoolOptions;
use std::time::Duration;

use crate::config::DatabaseConfig;
use crate::core::error::{ConstraintKind, StoreError, StoreResult};
use crate::core::{CompanyService, InvoiceService};
use crate::entities::company::{Company, CompanyChanges, CompanySummary, NewCompany};
use crate::entities::invoice::{Invoice, InvoiceSummary, NewInvoice};

const BACKEND: &str = "PostgreSQL";

const COMPANY_COLUMNS: &str = "code, name, COALESCE(description, '') AS description";
const INVOICE_COLUMNS: &str = "id, comp_code, amt, paid, add_date, paid_date";

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            let message = db_err.message().to_string();
            let constraint = match db_err.kind() {
                ErrorKind::UniqueViolation => Some(ConstraintKind::Unique),
                ErrorKind::ForeignKeyViolation => Some(ConstraintKind::ForeignKey),
                ErrorKind::NotNullViolation => Some(ConstraintKind::NotNull),
                ErrorKind::CheckViolation => Some(ConstraintKind::Check),
                _ => None,
            };
            if let Some(kind) = constraint {
                return StoreError::Constraint { kind, message };
            }
            if db_err.code().is_some_and(|code| code.starts_with("22")) {
                return StoreError::InvalidInput(message);
            }
        }

        StoreError::Backend {
            backend: BACKEND,
            message: err.to_string(),
        }
    }
}

/// Company and invoice storage backed by PostgreSQL.
#[derive(Clone, Debug)]
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    /// Create a new `PostgresStore` with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connect using the database section of the server configuration,
    /// applying the embedded migrations when enabled.
    pub async fn connect(config: &DatabaseConfig) -> anyhow::Result<Self> {
        let url = config
            .url
            .as_deref()
            .ok_or_else(|| anyhow::anyhow!("database.url is required for the PostgreSQL store"))?;

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
            .connect(url)
            .await?;
        tracing::info!("Connected to PostgreSQL");

        if config.run_migrations {
            sqlx::migrate!("./migrations").run(&pool).await?;
            tracing::info!("Database migrations applied");
        }

        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl CompanyService for PostgresStore {
    async fn list(&self) -> StoreResult<Vec<CompanySummary>> {
        let rows = sqlx::query_as::<_, CompanySummary>("SELECT code, name FROM companies")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn get(&self, code: &str) -> StoreResult<Option<Company>> {
        let row = sqlx::query_as::<_, Company>(&format!(
            "SELECT {COMPANY_COLUMNS} FROM companies WHERE code = $1"
        ))
        .bind(code)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn create(&self, company: NewCompany) -> StoreResult<Company> {
        let row = sqlx::query_as::<_, Company>(&format!(
            "INSERT INTO companies (code, name, description)
             VALUES ($1, $2, $3)
             RETURNING {COMPANY_COLUMNS}"
        ))
        .bind(&company.code)
        .bind(&company.name)
        .bind(&company.description)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn update(&self, code: &str, changes: CompanyChanges) -> StoreResult<Option<Company>> {
        let row = sqlx::query_as::<_, Company>(&format!(
            "UPDATE companies
             SET name = $1, description = $2
             WHERE code = $3
             RETURNING {COMPANY_COLUMNS}"
        ))
        .bind(&changes.name)
        .bind(&changes.description)
        .bind(code)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn delete(&self, code: &str) -> StoreResult<bool> {
        let deleted: Option<String> =
            sqlx::query_scalar("DELETE FROM companies WHERE code = $1 RETURNING code")
                .bind(code)
                .fetch_optional(&self.pool)
                .await?;
        Ok(deleted.is_some())
    }
}

#[async_trait]
impl InvoiceService for PostgresStore {
    async fn list(&self) -> StoreResult<Vec<InvoiceSummary>> {
        let rows =
            sqlx::query_as::<_, InvoiceSummary>("SELECT id, comp_code FROM invoices ORDER BY id")
                .fetch_all(&self.pool)
                .await?;
        Ok(rows)
    }

    async fn get(&self, id: i32) -> StoreResult<Option<Invoice>> {
        let row = sqlx::query_as::<_, Invoice>(&format!(
            "SELECT {INVOICE_COLUMNS} FROM invoices WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn create(&self, invoice: NewInvoice) -> StoreResult<Invoice> {
        let row = sqlx::query_as::<_, Invoice>(&format!(
            "INSERT INTO invoices (comp_code, amt)
             VALUES ($1, $2)
             RETURNING {INVOICE_COLUMNS}"
        ))
        .bind(&invoice.comp_code)
        .bind(invoice.amt)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn update_amount(&self, id: i32, amt: f64) -> StoreResult<Option<Invoice>> {
        let row = sqlx::query_as::<_, Invoice>(&format!(
            "UPDATE invoices
             SET amt = $1
             WHERE id = $2
             RETURNING {INVOICE_COLUMNS}"
        ))
        .bind(amt)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn delete(&self, id: i32) -> StoreResult<bool> {
        let deleted: Option<i32> =
            sqlx::query_scalar("DELETE FROM invoices WHERE id = $1 RETURNING id")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(deleted.is_some())
    }
}
