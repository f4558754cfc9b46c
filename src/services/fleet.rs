//! Registro de flota
//!
//! Registro explícito construido una sola vez al arranque a partir de la
//! lista fija de configuración. Cada vehículo vive detrás de su propio
//! `Mutex`: los avances sobre un mismo vehículo se serializan y los de
//! vehículos distintos corren en paralelo. No hay scheduler autónomo; el
//! estado solo progresa cuando alguien lo consulta (tick-on-demand).

use rand::Rng;
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::config::fleet::VehicleConfig;
use crate::models::history::HistoryRecord;
use crate::models::vehicle::{VehicleState, VehicleStatus};
use crate::repositories::history_repository::HistoryRepository;
use crate::utils::errors::AppError;

pub struct Fleet {
    // orden de configuración preservado para respuestas estables
    vehicles: Vec<(String, Arc<Mutex<VehicleState>>)>,
}

impl Fleet {
    /// Construir el registro sembrando cada vehículo desde su último
    /// registro histórico, de modo que odómetro/horas/combustible se
    /// reanudan entre reinicios en lugar de reiniciarse.
    pub async fn bootstrap(
        history: &HistoryRepository,
        configs: &[VehicleConfig],
    ) -> Result<Self, AppError> {
        let mut vehicles = Vec::with_capacity(configs.len());

        for config in configs {
            let latest = history.latest(config.id).await?;
            let resumed = latest.is_some();
            let state = {
                let mut rng = rand::thread_rng();
                seed_vehicle(config, latest, &mut rng)
            };
            tracing::info!(
                "🚚 Vehículo {} listo ({}): odómetro {:.1} km, {:.1} h motor, {:.1} L",
                config.id,
                if resumed { "reanudado" } else { "nuevo" },
                state.odometer,
                state.engine_hours,
                state.fuel_level,
            );
            vehicles.push((config.id.to_string(), Arc::new(Mutex::new(state))));
        }

        Ok(Self { vehicles })
    }

    pub fn get(&self, vehicle_id: &str) -> Option<Arc<Mutex<VehicleState>>> {
        self.vehicles
            .iter()
            .find(|(id, _)| id == vehicle_id)
            .map(|(_, state)| Arc::clone(state))
    }

    pub fn contains(&self, vehicle_id: &str) -> bool {
        self.vehicles.iter().any(|(id, _)| id == vehicle_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Arc<Mutex<VehicleState>>)> {
        self.vehicles.iter().map(|(id, state)| (id.as_str(), state))
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }
}

/// Estado inicial de un vehículo.
///
/// Si el historial tiene un último registro con odómetro, el vehículo
/// reanuda desde él (horas motor default 0, combustible default a tanque
/// lleno). Si no, arranca con uso acumulado aleatorio: odómetro en
/// [5000, 25000] km, horas motor en [100, 500], combustible en
/// [0.5·capacidad, capacidad].
fn seed_vehicle<R: Rng>(
    config: &VehicleConfig,
    latest: Option<HistoryRecord>,
    rng: &mut R,
) -> VehicleState {
    let (odometer, engine_hours, fuel_level) = match latest {
        Some(record) if record.odometer.is_some() => (
            record.odometer.unwrap_or(0.0),
            record.engine_hours.unwrap_or(0.0),
            record.fuel_level.unwrap_or(config.fuel_capacity),
        ),
        _ => (
            rng.gen_range(5000..=25000) as f64,
            rng.gen_range(100..=500) as f64,
            rng.gen_range(config.fuel_capacity * 0.5..=config.fuel_capacity),
        ),
    };

    let mut recent_track = VecDeque::new();
    recent_track.push_back((config.latitude, config.longitude));

    VehicleState {
        id: config.id.to_string(),
        latitude: config.latitude,
        longitude: config.longitude,
        speed: 0.0,
        fuel_level,
        fuel_capacity: config.fuel_capacity,
        odometer,
        engine_hours,
        status: VehicleStatus::Idle,
        last_update: chrono::Utc::now(),
        recent_track,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const CONFIG: VehicleConfig = VehicleConfig {
        id: "VS001",
        latitude: 44.43,
        longitude: 26.10,
        fuel_capacity: 120.0,
    };

    fn latest_record(
        odometer: Option<f64>,
        engine_hours: Option<f64>,
        fuel_level: Option<f64>,
    ) -> HistoryRecord {
        HistoryRecord {
            vehicle_id: "VS001".to_string(),
            latitude: Some(44.5),
            longitude: Some(26.2),
            recorded_at: Utc::now(),
            speed: Some(40.0),
            fuel_level,
            status: "moving".to_string(),
            odometer,
            engine_hours,
        }
    }

    #[test]
    fn fresh_vehicle_seeds_within_documented_ranges() {
        let mut rng = StdRng::seed_from_u64(17);
        for _ in 0..100 {
            let state = seed_vehicle(&CONFIG, None, &mut rng);
            assert!((5000.0..=25000.0).contains(&state.odometer));
            assert!((100.0..=500.0).contains(&state.engine_hours));
            assert!(state.fuel_level >= CONFIG.fuel_capacity * 0.5);
            assert!(state.fuel_level <= CONFIG.fuel_capacity);
            assert_eq!(state.status, VehicleStatus::Idle);
            assert_eq!(state.speed, 0.0);
        }
    }

    #[test]
    fn vehicle_resumes_from_latest_history_record() {
        let mut rng = StdRng::seed_from_u64(17);
        let latest = latest_record(Some(18500.0), Some(410.0), Some(62.5));
        let state = seed_vehicle(&CONFIG, Some(latest), &mut rng);

        assert_eq!(state.odometer, 18500.0);
        assert_eq!(state.engine_hours, 410.0);
        assert_eq!(state.fuel_level, 62.5);
    }

    #[test]
    fn resume_defaults_apply_for_null_fields() {
        let mut rng = StdRng::seed_from_u64(17);
        let latest = latest_record(Some(18500.0), None, None);
        let state = seed_vehicle(&CONFIG, Some(latest), &mut rng);

        assert_eq!(state.odometer, 18500.0);
        assert_eq!(state.engine_hours, 0.0);
        assert_eq!(state.fuel_level, CONFIG.fuel_capacity);
    }

    #[test]
    fn record_without_odometer_falls_back_to_random_seed() {
        let mut rng = StdRng::seed_from_u64(17);
        let latest = latest_record(None, Some(410.0), Some(62.5));
        let state = seed_vehicle(&CONFIG, Some(latest), &mut rng);

        assert!((5000.0..=25000.0).contains(&state.odometer));
    }

    #[test]
    fn track_starts_at_the_configured_position() {
        let mut rng = StdRng::seed_from_u64(17);
        let state = seed_vehicle(&CONFIG, None, &mut rng);
        assert_eq!(state.recent_track.len(), 1);
        assert_eq!(state.recent_track[0], (44.43, 26.10));
    }
}
