//! Entity kinds served by the API

use std::fmt;

/// The two entity kinds exposed over REST
///
/// Each kind is addressed by a single primary key: companies by their
/// caller-supplied `code`, invoices by their store-generated `id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Company,
    Invoice,
}

impl EntityKind {
    /// Singular resource name (e.g., "company")
    pub fn singular(&self) -> &'static str {
        match self {
            EntityKind::Company => "company",
            EntityKind::Invoice => "invoice",
        }
    }

    /// Plural resource name, used as the route prefix (e.g., "companies")
    pub fn plural(&self) -> &'static str {
        match self {
            EntityKind::Company => "companies",
            EntityKind::Invoice => "invoices",
        }
    }

    /// Name of the primary key column
    pub fn key_name(&self) -> &'static str {
        match self {
            EntityKind::Company => "code",
            EntityKind::Invoice => "id",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Company => f.write_str("Company"),
            EntityKind::Invoice => f.write_str("Invoice"),
        }
    }
}
