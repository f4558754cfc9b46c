//! Modelo de historial de ruta
//!
//! Un `HistoryRecord` es una instantánea inmutable de la telemetría de un
//! vehículo. La tabla `route_history` es append-only: el core nunca
//! actualiza ni borra filas. Los campos numéricos son nullable en lectura
//! porque filas tempranas pueden estar incompletas; los cálculos derivados
//! degradan a 0 en ese caso.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct HistoryRecord {
    pub vehicle_id: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub recorded_at: DateTime<Utc>,
    pub speed: Option<f64>,
    pub fuel_level: Option<f64>,
    /// Estado en el momento del registro, expuesto tal cual se almacenó
    pub status: String,
    pub odometer: Option<f64>,
    pub engine_hours: Option<f64>,
}
