//! In-memory store for development and tests
//!
//! Mirrors the relational constraints of the SQL schema so handlers observe
//! the same failures they would against PostgreSQL: unique company code and
//! name, `invoices.comp_code` foreign key with cascading delete, and the
//! `amt > 0` check.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::core::error::{ConstraintKind, StoreError, StoreResult};
use crate::core::{CompanyService, InvoiceService};
use crate::entities::company::{Company, CompanyChanges, CompanySummary, NewCompany};
use crate::entities::invoice::{Invoice, InvoiceSummary, NewInvoice};

const BACKEND: &str = "in-memory";

#[derive(Debug, Default)]
struct Tables {
    companies: BTreeMap<String, Company>,
    invoices: BTreeMap<i32, Invoice>,
    last_invoice_id: i32,
}

impl Tables {
    fn name_taken(&self, name: &str, except_code: Option<&str>) -> bool {
        self.companies
            .values()
            .any(|c| c.name == name && Some(c.code.as_str()) != except_code)
    }

    fn require_company(&self, code: &str) -> StoreResult<()> {
        if self.companies.contains_key(code) {
            Ok(())
        } else {
            Err(StoreError::constraint(
                ConstraintKind::ForeignKey,
                format!("Company code '{}' does not exist", code),
            ))
        }
    }
}

fn check_amount(amt: f64) -> StoreResult<()> {
    if amt.is_finite() && amt > 0.0 {
        Ok(())
    } else {
        Err(StoreError::constraint(
            ConstraintKind::Check,
            format!("amt must be greater than zero (got {})", amt),
        ))
    }
}

/// Thread-safe in-memory implementation of both store traits
///
/// Cloning is cheap and every clone shares the same tables.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, Tables>> {
        self.tables.read().map_err(|e| StoreError::Backend {
            backend: BACKEND,
            message: format!("Failed to acquire read lock: {}", e),
        })
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, Tables>> {
        self.tables.write().map_err(|e| StoreError::Backend {
            backend: BACKEND,
            message: format!("Failed to acquire write lock: {}", e),
        })
    }

    /// Insert a fully specified invoice row, keeping its id
    ///
    /// Fixtures use this to control ids; later generated ids continue after
    /// the largest id seen.
    pub fn seed_invoice(&self, invoice: Invoice) -> StoreResult<Invoice> {
        let mut tables = self.write()?;
        tables.require_company(&invoice.comp_code)?;
        check_amount(invoice.amt)?;
        if tables.invoices.contains_key(&invoice.id) {
            return Err(StoreError::constraint(
                ConstraintKind::Unique,
                format!("Invoice id '{}' already exists", invoice.id),
            ));
        }

        tables.last_invoice_id = tables.last_invoice_id.max(invoice.id);
        tables.invoices.insert(invoice.id, invoice.clone());
        Ok(invoice)
    }
}

#[async_trait]
impl CompanyService for InMemoryStore {
    async fn list(&self) -> StoreResult<Vec<CompanySummary>> {
        let tables = self.read()?;
        Ok(tables.companies.values().map(CompanySummary::from).collect())
    }

    async fn get(&self, code: &str) -> StoreResult<Option<Company>> {
        let tables = self.read()?;
        Ok(tables.companies.get(code).cloned())
    }

    async fn create(&self, company: NewCompany) -> StoreResult<Company> {
        let mut tables = self.write()?;

        if tables.companies.contains_key(&company.code) {
            return Err(StoreError::constraint(
                ConstraintKind::Unique,
                format!("Company code '{}' already exists", company.code),
            ));
        }
        if tables.name_taken(&company.name, None) {
            return Err(StoreError::constraint(
                ConstraintKind::Unique,
                format!("Company name '{}' already exists", company.name),
            ));
        }

        let company = Company::from(company);
        tables
            .companies
            .insert(company.code.clone(), company.clone());
        Ok(company)
    }

    async fn update(&self, code: &str, changes: CompanyChanges) -> StoreResult<Option<Company>> {
        let mut tables = self.write()?;

        if !tables.companies.contains_key(code) {
            return Ok(None);
        }
        if tables.name_taken(&changes.name, Some(code)) {
            return Err(StoreError::constraint(
                ConstraintKind::Unique,
                format!("Company name '{}' already exists", changes.name),
            ));
        }

        let company = tables.companies.get_mut(code).map(|company| {
            company.name = changes.name;
            company.description = changes.description;
            company.clone()
        });
        Ok(company)
    }

    async fn delete(&self, code: &str) -> StoreResult<bool> {
        let mut tables = self.write()?;

        if tables.companies.remove(code).is_none() {
            return Ok(false);
        }
        // ON DELETE CASCADE
        tables.invoices.retain(|_, invoice| invoice.comp_code != code);
        Ok(true)
    }
}

#[async_trait]
impl InvoiceService for InMemoryStore {
    async fn list(&self) -> StoreResult<Vec<InvoiceSummary>> {
        let tables = self.read()?;
        // BTreeMap iteration is already ordered by id
        Ok(tables
            .invoices
            .values()
            .map(|invoice| InvoiceSummary {
                id: invoice.id,
                comp_code: invoice.comp_code.clone(),
            })
            .collect())
    }

    async fn get(&self, id: i32) -> StoreResult<Option<Invoice>> {
        let tables = self.read()?;
        Ok(tables.invoices.get(&id).cloned())
    }

    async fn create(&self, invoice: NewInvoice) -> StoreResult<Invoice> {
        let mut tables = self.write()?;
        check_amount(invoice.amt)?;
        tables.require_company(&invoice.comp_code)?;

        let id = tables
            .last_invoice_id
            .checked_add(1)
            .ok_or_else(|| StoreError::Backend {
                backend: BACKEND,
                message: "invoice id sequence exhausted".to_string(),
            })?;
        tables.last_invoice_id = id;
        let invoice = Invoice {
            id,
            comp_code: invoice.comp_code,
            amt: invoice.amt,
            paid: false,
            add_date: Utc::now().date_naive(),
            paid_date: None,
        };
        tables.invoices.insert(invoice.id, invoice.clone());
        Ok(invoice)
    }

    async fn update_amount(&self, id: i32, amt: f64) -> StoreResult<Option<Invoice>> {
        let mut tables = self.write()?;

        let Some(invoice) = tables.invoices.get_mut(&id) else {
            return Ok(None);
        };
        check_amount(amt)?;
        invoice.amt = amt;
        Ok(Some(invoice.clone()))
    }

    async fn delete(&self, id: i32) -> StoreResult<bool> {
        let mut tables = self.write()?;
        Ok(tables.invoices.remove(&id).is_some())
    }
}
