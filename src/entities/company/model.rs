//! Company entity model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A company row: `code` is the caller-supplied primary key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct Company {
    pub code: String,
    pub name: String,
    pub description: String,
}

/// List projection: `{code, name}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct CompanySummary {
    pub code: String,
    pub name: String,
}

impl From<&Company> for CompanySummary {
    fn from(company: &Company) -> Self {
        Self {
            code: company.code.clone(),
            name: company.name.clone(),
        }
    }
}

/// Body of `POST /companies`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewCompany {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub code: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub name: String,
    pub description: String,
}

impl From<NewCompany> for Company {
    fn from(new: NewCompany) -> Self {
        Self {
            code: new.code,
            name: new.name,
            description: new.description,
        }
    }
}

/// Body of `PUT /companies/{code}`
///
/// The code itself is immutable and comes from the path.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CompanyChanges {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub name: String,
    pub description: String,
}
