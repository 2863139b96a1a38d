//! Axum extractor for validated request payloads

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use serde_json::Value;
use validator::{Validate, ValidationErrors};

use crate::core::error::{BizError, BizResult};

/// Axum extractor that parses and validates a JSON payload
///
/// # Usage
///
/// ```rust,ignore
/// pub async fn create_company(
///     State(state): State<AppState>,
///     ValidatedJson(payload): ValidatedJson<NewCompany>,
/// ) -> BizResult<(StatusCode, Json<Value>)> {
///     // payload has every required field, correctly typed
/// }
/// ```
///
/// The Content-Type header is not inspected; any body that parses as a JSON
/// object is accepted.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = BizError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            BizError::bad_request(format!("Unreadable request body: {}", e.body_text()))
        })?;

        parse_payload(&bytes).map(ValidatedJson)
    }
}

/// Parse raw body bytes into a validated payload
pub fn parse_payload<T>(bytes: &[u8]) -> BizResult<T>
where
    T: DeserializeOwned + Validate,
{
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err(BizError::bad_request("Request body is required"));
    }

    let value: Value = serde_json::from_slice(bytes)
        .map_err(|e| BizError::bad_request(format!("Invalid JSON: {}", e)))?;

    if !value.is_object() {
        return Err(BizError::bad_request("Request body must be a JSON object"));
    }

    let payload: T = serde_json::from_value(value)
        .map_err(|e| BizError::bad_request(format!("Invalid parameters: {}", e)))?;

    payload.validate().map_err(|errors| {
        BizError::bad_request(format!("Invalid parameters: {}", describe(&errors)))
    })?;

    Ok(payload)
}

/// Flatten field errors into a stable, human-readable list
fn describe(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, field_errors)| {
            field_errors.iter().map(move |e| match &e.message {
                Some(message) => format!("{}: {}", field, message),
                None => format!("{}: {}", field, e.code),
            })
        })
        .collect();
    messages.sort();
    messages.join(", ")
}
