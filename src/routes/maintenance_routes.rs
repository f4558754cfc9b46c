use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};

use crate::controllers::maintenance_controller::MaintenanceController;
use crate::dto::maintenance_dto::{MaintenanceStatusResponse, ServiceCompletionResponse};
use crate::dto::ApiResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_maintenance_router() -> Router<AppState> {
    Router::new()
        .route("/:id/maintenance_status", get(get_maintenance_status))
        .route(
            "/:id/maintenance/:service_name/complete",
            post(complete_service),
        )
}

/// GET /api/vehicle/:id/maintenance_status
async fn get_maintenance_status(
    State(state): State<AppState>,
    Path(vehicle_id): Path<String>,
) -> Result<Json<MaintenanceStatusResponse>, AppError> {
    let controller = MaintenanceController::new(state.pool.clone());
    let status = controller.status(&state.fleet, &vehicle_id).await?;
    Ok(Json(status))
}

/// POST /api/vehicle/:id/maintenance/:service_name/complete
async fn complete_service(
    State(state): State<AppState>,
    Path((vehicle_id, service_name)): Path<(String, String)>,
) -> Result<Json<ApiResponse<ServiceCompletionResponse>>, AppError> {
    let controller = MaintenanceController::new(state.pool.clone());
    let response = controller
        .complete_service(&state.fleet, &vehicle_id, &service_name)
        .await?;
    Ok(Json(response))
}
