//! Invoice HTTP handlers

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};
use serde_json::{Value, json};

use super::model::{InvoiceAmount, NewInvoice};
use crate::core::{
    BizError, BizResult, EntityKind, FoundOr, KeyPath, ValidatedJson, deleted_or,
    integrity_anomaly,
};
use crate::server::AppState;

/// Parse the `{id}` path segment
///
/// A segment that is not an integer cannot match any row, so it is reported
/// exactly like an absent invoice.
fn parse_id(raw: &str) -> BizResult<i32> {
    raw.parse::<i32>()
        .map_err(|_| BizError::missing(EntityKind::Invoice, raw))
}

/// GET /invoices → `{invoices: [{id, comp_code}, ...]}` ordered by id
pub async fn list_invoices(State(state): State<AppState>) -> BizResult<Json<Value>> {
    let invoices = state.invoices.list().await?;
    Ok(Json(json!({ "invoices": invoices })))
}

/// GET /invoices/{id} → `{invoice: {id, amt, paid, add_date, paid_date, company: {...}}}`
///
/// Two point queries, not in a transaction. If the company disappears
/// between them the foreign key guarantee was broken underneath us, which is
/// reported as an internal error rather than a 404.
pub async fn get_invoice(
    State(state): State<AppState>,
    KeyPath(raw_id): KeyPath<String>,
) -> BizResult<Json<Value>> {
    let id = parse_id(&raw_id)?;
    let invoice = state
        .invoices
        .get(id)
        .await?
        .found_or(EntityKind::Invoice, id)?;

    let company = state
        .companies
        .get(&invoice.comp_code)
        .await?
        .ok_or_else(|| {
            integrity_anomaly(
                EntityKind::Company,
                &invoice.comp_code,
                format!("invoice {}", id),
            )
        })?;

    Ok(Json(json!({ "invoice": invoice.with_company(company) })))
}

/// POST /invoices with `{comp_code, amt}` → 201 `{invoice: {...}}`
pub async fn create_invoice(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<NewInvoice>,
) -> BizResult<(StatusCode, Json<Value>)> {
    let invoice = state.invoices.create(payload).await?;
    tracing::info!(id = invoice.id, comp_code = %invoice.comp_code, "invoice created");

    Ok((StatusCode::CREATED, Json(json!({ "invoice": invoice }))))
}

/// PUT /invoices/{id} with `{amt}` → `{invoice: {...}}`
///
/// The body is validated before the id is looked at, so a body without
/// `amt` is rejected whether or not the invoice exists.
pub async fn update_invoice(
    State(state): State<AppState>,
    KeyPath(raw_id): KeyPath<String>,
    ValidatedJson(InvoiceAmount { amt }): ValidatedJson<InvoiceAmount>,
) -> BizResult<Json<Value>> {
    let id = parse_id(&raw_id)?;
    let invoice = state
        .invoices
        .update_amount(id, amt)
        .await?
        .found_or(EntityKind::Invoice, id)?;
    tracing::info!(id, amt, "invoice updated");

    Ok(Json(json!({ "invoice": invoice })))
}

/// DELETE /invoices/{id} → `{status: "deleted"}`
pub async fn delete_invoice(
    State(state): State<AppState>,
    KeyPath(raw_id): KeyPath<String>,
) -> BizResult<Json<Value>> {
    let id = parse_id(&raw_id)?;
    let deleted = state.invoices.delete(id).await?;
    deleted_or(deleted, EntityKind::Invoice, id)?;
    tracing::info!(id, "invoice deleted");

    Ok(Json(json!({ "status": "deleted" })))
}
