//! Invoice entity module

pub mod descriptor;
pub mod handlers;
pub mod model;

pub use descriptor::InvoiceDescriptor;
pub use model::{Invoice, InvoiceAmount, InvoiceDetail, InvoiceSummary, NewInvoice};
