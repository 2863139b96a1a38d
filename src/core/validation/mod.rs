//! Request body validation
//!
//! Write handlers receive their payload through [`ValidatedJson`], which
//! rejects a missing body, malformed JSON, missing or mistyped fields, and
//! field-rule violations with [`BizError::BadRequest`](crate::core::error::BizError)
//! before the handler runs. Key segments of the path go through [`KeyPath`],
//! so an undecodable segment fails the same way.

pub mod extractor;
pub mod path;

pub use extractor::{ValidatedJson, parse_payload};
pub use path::KeyPath;
