//! DTOs del historial

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::history::HistoryRecord;

/// Filtro de rango por fechas de calendario (YYYY-MM-DD), inclusivo
#[derive(Debug, Default, Deserialize)]
pub struct HistoryRangeQuery {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// Una fila del historial tal como se expone por la API
#[derive(Debug, Serialize)]
pub struct HistoryRecordResponse {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub timestamp: DateTime<Utc>,
    pub speed: Option<f64>,
    pub fuel_level: Option<f64>,
    pub status: String,
    pub odometer: Option<f64>,
    pub engine_hours: Option<f64>,
}

impl From<HistoryRecord> for HistoryRecordResponse {
    fn from(record: HistoryRecord) -> Self {
        Self {
            latitude: record.latitude,
            longitude: record.longitude,
            timestamp: record.recorded_at,
            speed: record.speed,
            fuel_level: record.fuel_level,
            status: record.status,
            odometer: record.odometer,
            engine_hours: record.engine_hours,
        }
    }
}
