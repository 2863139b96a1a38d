//! Lookup-or-fail helpers
//!
//! Every handler that addresses a single resource by key funnels the store's
//! `Option` result through [`FoundOr`]. A missing row becomes a terminal
//! [`BizError::NotFound`] and the handler never sees it.

use std::fmt::Display;

use crate::core::entity::EntityKind;
use crate::core::error::{BizError, BizResult};

/// Turn "zero rows" into a `NotFound` error naming the missing key
pub trait FoundOr<T> {
    fn found_or(self, kind: EntityKind, key: impl Display) -> BizResult<T>;
}

impl<T> FoundOr<T> for Option<T> {
    fn found_or(self, kind: EntityKind, key: impl Display) -> BizResult<T> {
        match self {
            Some(row) => {
                tracing::debug!(entity = kind.singular(), %key, "lookup hit");
                Ok(row)
            }
            None => Err(BizError::missing(kind, key)),
        }
    }
}

/// Delete-returning acknowledgment: `false` means nothing matched the key
pub fn deleted_or(deleted: bool, kind: EntityKind, key: impl Display) -> BizResult<()> {
    if deleted {
        Ok(())
    } else {
        Err(BizError::missing(kind, key))
    }
}

/// A row that a foreign key guarantees should exist is gone
///
/// This is never the caller's fault, so it surfaces as an internal error.
pub fn integrity_anomaly(
    kind: EntityKind,
    key: impl Display,
    referenced_by: impl Display,
) -> BizError {
    tracing::error!(
        entity = kind.singular(),
        %key,
        %referenced_by,
        "referenced row missing"
    );
    BizError::internal(format!(
        "{} {} '{}' referenced by {} does not exist",
        kind,
        kind.key_name(),
        key,
        referenced_by
    ))
}
