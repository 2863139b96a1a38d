//! Axum extractor for the key segment of a resource path

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use crate::core::error::BizError;

/// `Path<T>` whose rejection is a [`BizError`]
///
/// A segment that cannot be decoded (e.g. `%FF` into a `String`) is reported
/// with the same JSON error body as every other failure.
#[derive(Debug)]
pub struct KeyPath<T>(pub T);

impl<S, T> FromRequestParts<S> for KeyPath<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = BizError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(key) = Path::<T>::from_request_parts(parts, state).await?;
        Ok(KeyPath(key))
    }
}
