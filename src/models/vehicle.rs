//! Modelo de vehículo
//!
//! Estado vivo de un vehículo de la flota. Cada instancia es propiedad
//! exclusiva de su lock en el registro de flota; solo `advance` la muta.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Estado operacional del vehículo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleStatus {
    Idle,
    Moving,
    OutOfFuel,
}

impl VehicleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleStatus::Idle => "idle",
            VehicleStatus::Moving => "moving",
            VehicleStatus::OutOfFuel => "out_of_fuel",
        }
    }
}

/// Cantidad máxima de posiciones retenidas en el track reciente
pub const RECENT_TRACK_CAPACITY: usize = 50;

/// Estado vivo de un vehículo
///
/// Invariantes: `0 <= fuel_level <= fuel_capacity`; `odometer` y
/// `engine_hours` nunca decrecen; `status == OutOfFuel` implica
/// `speed == 0` y `fuel_level == 0`; la posición queda siempre dentro
/// del bounding box tras cualquier actualización.
#[derive(Debug, Clone)]
pub struct VehicleState {
    pub id: String,
    pub latitude: f64,
    pub longitude: f64,
    pub speed: f64,
    pub fuel_level: f64,
    pub fuel_capacity: f64,
    pub odometer: f64,
    pub engine_hours: f64,
    pub status: VehicleStatus,
    pub last_update: DateTime<Utc>,
    /// Últimas posiciones registradas, solo presentacional (no se persiste)
    pub recent_track: VecDeque<(f64, f64)>,
}

impl VehicleState {
    /// Anexar una posición al track reciente, expulsando la más antigua
    pub fn push_track_point(&mut self, latitude: f64, longitude: f64) {
        self.recent_track.push_back((latitude, longitude));
        while self.recent_track.len() > RECENT_TRACK_CAPACITY {
            self.recent_track.pop_front();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&VehicleStatus::OutOfFuel).unwrap(),
            "\"out_of_fuel\""
        );
        assert_eq!(VehicleStatus::OutOfFuel.as_str(), "out_of_fuel");
        assert_eq!(VehicleStatus::Idle.as_str(), "idle");
        assert_eq!(VehicleStatus::Moving.as_str(), "moving");
    }

    #[test]
    fn recent_track_is_bounded() {
        let mut vehicle = VehicleState {
            id: "VS001".to_string(),
            latitude: 44.43,
            longitude: 26.10,
            speed: 0.0,
            fuel_level: 100.0,
            fuel_capacity: 100.0,
            odometer: 0.0,
            engine_hours: 0.0,
            status: VehicleStatus::Idle,
            last_update: Utc::now(),
            recent_track: VecDeque::new(),
        };
        for i in 0..120 {
            vehicle.push_track_point(44.0 + i as f64 * 0.001, 26.0);
        }
        assert_eq!(vehicle.recent_track.len(), RECENT_TRACK_CAPACITY);
        // la más antigua fue expulsada primero
        assert_eq!(vehicle.recent_track.front().unwrap().0, 44.0 + 70.0 * 0.001);
    }
}
