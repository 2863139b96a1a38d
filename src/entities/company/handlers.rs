//! Company HTTP handlers

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};
use serde_json::{Value, json};

use super::model::{CompanyChanges, NewCompany};
use crate::core::{BizResult, EntityKind, FoundOr, KeyPath, ValidatedJson, deleted_or};
use crate::server::AppState;

/// GET /companies → `{companies: [{code, name}, ...]}`
pub async fn list_companies(State(state): State<AppState>) -> BizResult<Json<Value>> {
    let companies = state.companies.list().await?;
    Ok(Json(json!({ "companies": companies })))
}

/// GET /companies/{code} → `{company: {code, name, description}}`
pub async fn get_company(
    State(state): State<AppState>,
    KeyPath(code): KeyPath<String>,
) -> BizResult<Json<Value>> {
    let company = state
        .companies
        .get(&code)
        .await?
        .found_or(EntityKind::Company, &code)?;

    Ok(Json(json!({ "company": company })))
}

/// POST /companies with `{code, name, description}` → 201 `{company: {...}}`
pub async fn create_company(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<NewCompany>,
) -> BizResult<(StatusCode, Json<Value>)> {
    let company = state.companies.create(payload).await?;
    tracing::info!(code = %company.code, "company created");

    Ok((StatusCode::CREATED, Json(json!({ "company": company }))))
}

/// PUT /companies/{code} with `{name, description}` → `{company: {...}}`
pub async fn update_company(
    State(state): State<AppState>,
    KeyPath(code): KeyPath<String>,
    ValidatedJson(changes): ValidatedJson<CompanyChanges>,
) -> BizResult<Json<Value>> {
    let company = state
        .companies
        .update(&code, changes)
        .await?
        .found_or(EntityKind::Company, &code)?;
    tracing::info!(%code, "company updated");

    Ok(Json(json!({ "company": company })))
}

/// DELETE /companies/{code} → `{status: "deleted"}`
pub async fn delete_company(
    State(state): State<AppState>,
    KeyPath(code): KeyPath<String>,
) -> BizResult<Json<Value>> {
    let deleted = state.companies.delete(&code).await?;
    deleted_or(deleted, EntityKind::Company, &code)?;
    tracing::info!(%code, "company deleted");

    Ok(Json(json!({ "status": "deleted" })))
}
