use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};

use crate::controllers::history_controller::HistoryController;
use crate::dto::history_dto::{HistoryRangeQuery, HistoryRecordResponse};
use crate::services::summary::OperationalSummary;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_history_router() -> Router<AppState> {
    Router::new()
        .route("/:id/history", get(get_history))
        .route("/:id/operational_summary", get(get_operational_summary))
}

/// GET /api/vehicle/:id/history?start_date&end_date
async fn get_history(
    State(state): State<AppState>,
    Path(vehicle_id): Path<String>,
    Query(query): Query<HistoryRangeQuery>,
) -> Result<Json<Vec<HistoryRecordResponse>>, AppError> {
    let controller = HistoryController::new(state.pool.clone());
    let records = controller.history(&state.fleet, &vehicle_id, query).await?;
    Ok(Json(records))
}

/// GET /api/vehicle/:id/operational_summary?start_date&end_date
async fn get_operational_summary(
    State(state): State<AppState>,
    Path(vehicle_id): Path<String>,
    Query(query): Query<HistoryRangeQuery>,
) -> Result<Json<OperationalSummary>, AppError> {
    let controller = HistoryController::new(state.pool.clone());
    let summary = controller
        .operational_summary(&state.fleet, &vehicle_id, query)
        .await?;
    Ok(Json(summary))
}
