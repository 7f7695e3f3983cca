//! Dashboard handlers

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::HeaderMap,
    Json,
};
use serde::Deserialize;

use crate::{get_user_id, AppError, AppState};
use nestegg_core::dashboard::{self, Dashboard, DEFAULT_BREAKDOWN_LIMIT};
use nestegg_core::models::PotentialSavings;

/// GET /api/health - Liveness probe
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

#[derive(Debug, Deserialize)]
pub struct DashboardQuery {
    /// Number of breakdown categories to return; the client raises this when
    /// the user toggles the full list open
    pub limit: Option<usize>,
}

/// GET /api/dashboard - Metrics, savings projection, completeness, breakdown
pub async fn get_dashboard(
    State(state): State<Arc<AppState>>,
    Query(params): Query<DashboardQuery>,
    headers: HeaderMap,
) -> Result<Json<Dashboard>, AppError> {
    let user_id = get_user_id(&headers);

    // Per-category saving estimates come from a recommendation service when
    // one is wired up; without one the rows carry the analysing placeholder.
    let estimates: HashMap<String, f64> = HashMap::new();

    let limit = params.limit.unwrap_or(DEFAULT_BREAKDOWN_LIMIT);
    let result = dashboard::build_dashboard_with_limit(&state.db, &user_id, limit, &estimates)?;

    Ok(Json(result))
}

/// POST /api/dashboard/potential/refresh - Explicitly re-roll the stored
/// potential-savings rate
pub async fn refresh_potential(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<PotentialSavings>, AppError> {
    let user_id = get_user_id(&headers);
    match dashboard::refresh_potential(&state.db, &user_id)? {
        Some(record) => Ok(Json(record)),
        None => Err(AppError::bad_request(
            "Add income and spending before refreshing the projection",
        )),
    }
}
