//! DTOs de mantenimiento

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::services::maintenance::ServiceStatus;

/// Estado completo del plan de mantenimiento de un vehículo
#[derive(Debug, Serialize)]
pub struct MaintenanceStatusResponse {
    pub vehicle_id: String,
    pub current_odometer: f64,
    pub current_engine_hours: f64,
    pub maintenance_schedule: Vec<ServiceStatus>,
}

/// Datos del servicio recién registrado
#[derive(Debug, Serialize)]
pub struct ServiceCompletionResponse {
    pub vehicle_id: String,
    pub service_name: String,
    pub odometer: f64,
    pub engine_hours: f64,
    pub performed_at: DateTime<Utc>,
}
