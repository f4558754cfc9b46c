use axum::{extract::State, routing::get, Json, Router};

use crate::controllers::vehicle_controller::VehicleController;
use crate::dto::vehicle_dto::VehicleSnapshotResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new().route("/", get(list_vehicles))
}

/// GET /api/vehicles — avanza la simulación un tick y devuelve la flota
async fn list_vehicles(
    State(state): State<AppState>,
) -> Result<Json<Vec<VehicleSnapshotResponse>>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let snapshots = controller.tick_fleet(&state.fleet).await?;
    Ok(Json(snapshots))
}
