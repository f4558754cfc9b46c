//! DTOs de vehículos

use serde::Serialize;

use crate::models::vehicle::{VehicleState, VehicleStatus};
use crate::utils::round2;

/// Instantánea del estado vivo de un vehículo
#[derive(Debug, Serialize)]
pub struct VehicleSnapshotResponse {
    pub vehicle_id: String,
    pub latitude: f64,
    pub longitude: f64,
    pub fuel_level: f64,
    pub fuel_capacity: f64,
    pub speed: f64,
    pub status: VehicleStatus,
    pub odometer: f64,
    pub engine_hours: f64,
    /// Últimas posiciones registradas (máx. 50), solo presentacional
    pub route_segment: Vec<(f64, f64)>,
}

impl From<&VehicleState> for VehicleSnapshotResponse {
    fn from(state: &VehicleState) -> Self {
        Self {
            vehicle_id: state.id.clone(),
            latitude: state.latitude,
            longitude: state.longitude,
            fuel_level: round2(state.fuel_level),
            fuel_capacity: state.fuel_capacity,
            speed: round2(state.speed),
            status: state.status,
            odometer: round2(state.odometer),
            engine_hours: round2(state.engine_hours),
            route_segment: state.recent_track.iter().copied().collect(),
        }
    }
}
