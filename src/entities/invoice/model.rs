//! Invoice entity model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::entities::company::Company;

/// An invoice row as stored
///
/// `id`, `paid` and `add_date` are filled in by the store on insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct Invoice {
    pub id: i32,
    pub comp_code: String,
    pub amt: f64,
    pub paid: bool,
    pub add_date: NaiveDate,
    pub paid_date: Option<NaiveDate>,
}

impl Invoice {
    /// Replace the `comp_code` reference with the owning company
    pub fn with_company(self, company: Company) -> InvoiceDetail {
        InvoiceDetail {
            id: self.id,
            amt: self.amt,
            paid: self.paid,
            add_date: self.add_date,
            paid_date: self.paid_date,
            company,
        }
    }
}

/// List projection: `{id, comp_code}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct InvoiceSummary {
    pub id: i32,
    pub comp_code: String,
}

/// Single-invoice view with the owning company nested under `company`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceDetail {
    pub id: i32,
    pub amt: f64,
    pub paid: bool,
    pub add_date: NaiveDate,
    pub paid_date: Option<NaiveDate>,
    pub company: Company,
}

/// Body of `POST /invoices`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewInvoice {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub comp_code: String,
    pub amt: f64,
}

/// Body of `PUT /invoices/{id}`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct InvoiceAmount {
    pub amt: f64,
}
