//! Entry CRUD handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::HeaderMap,
    Json,
};

use crate::{get_user_id, AppError, AppState, SuccessResponse};
use nestegg_core::models::{EntryPatch, FinancialEntry, NewFinancialEntry};

/// GET /api/entries - List all entries for the caller
pub async fn list_entries(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<Vec<FinancialEntry>>, AppError> {
    let user_id = get_user_id(&headers);
    let entries = state.db.list_entries(&user_id)?;
    Ok(Json(entries))
}

/// POST /api/entries - Create an entry
pub async fn create_entry(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(new): Json<NewFinancialEntry>,
) -> Result<Json<FinancialEntry>, AppError> {
    let user_id = get_user_id(&headers);
    let entry = state.db.create_entry(&user_id, &new)?;
    Ok(Json(entry))
}

/// GET /api/entries/:id - Fetch a single entry
pub async fn get_entry(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Result<Json<FinancialEntry>, AppError> {
    let user_id = get_user_id(&headers);
    let entry = state.db.get_entry(&user_id, id)?;
    Ok(Json(entry))
}

/// PUT /api/entries/:id - Apply a partial update
pub async fn update_entry(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    Json(patch): Json<EntryPatch>,
) -> Result<Json<FinancialEntry>, AppError> {
    let user_id = get_user_id(&headers);
    let entry = state.db.update_entry(&user_id, id, &patch)?;
    Ok(Json(entry))
}

/// DELETE /api/entries/:id - Delete an entry
pub async fn delete_entry(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Result<Json<SuccessResponse>, AppError> {
    let user_id = get_user_id(&headers);
    state.db.delete_entry(&user_id, id)?;
    Ok(Json(SuccessResponse { success: true }))
}
