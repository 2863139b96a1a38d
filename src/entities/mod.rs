//! Entities exposed by the API

pub mod company;
pub mod invoice;

pub use company::CompanyDescriptor;
pub use invoice::InvoiceDescriptor;
