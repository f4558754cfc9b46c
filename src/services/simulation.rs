//! Máquina de estados del vehículo
//!
//! Avanza el estado vivo de un vehículo en cada tick usando el tiempo real
//! transcurrido desde el tick anterior. El movimiento es un paseo aleatorio
//! acotado dentro del bounding box, no una simulación física: no hay
//! dinámica vehicular ni modelo de consumo calibrado.
//!
//! La fuente de aleatoriedad se inyecta (`rand::Rng`) para que los tests
//! fijen resultados con un `StdRng` sembrado; producción usa `thread_rng`.

use chrono::{DateTime, Utc};
use rand::Rng;

use crate::models::history::HistoryRecord;
use crate::models::vehicle::{VehicleState, VehicleStatus};
use crate::utils::geo::haversine_km;

/// Bounding box geográfico de la simulación (grados)
pub const LAT_MIN: f64 = 43.5;
pub const LAT_MAX: f64 = 48.5;
pub const LON_MIN: f64 = 20.0;
pub const LON_MAX: f64 = 30.0;

/// Ticks separados por menos de esto son no-ops (debounce de polling)
const MIN_TICK_SECONDS: f64 = 1.0;

/// Consumo con motor encendido, litros por hora (moving e idle)
const ENGINE_ON_FUEL_LPH: f64 = 1.0;

/// Consumo adicional por kilómetro recorrido
const FUEL_PER_KM: f64 = 0.15;

/// Probabilidad base de transición de estado por cada 5 s transcurridos
const TRANSITION_PROB_PER_5S: f64 = 0.03;

/// Fracción mínima de combustible para pasar de idle a moving
const RESUME_FUEL_FRACTION: f64 = 0.1;

/// Umbral de desplazamiento que fuerza un registro histórico (km)
const RECORD_DISTANCE_THRESHOLD_KM: f64 = 0.001;

/// Transcurrido mínimo que fuerza un registro histórico (s)
const RECORD_ELAPSED_THRESHOLD_S: f64 = 2.0;

/// Avanzar el estado del vehículo hasta `now`.
///
/// Devuelve el `HistoryRecord` a persistir cuando el tick califica para
/// escritura (heurística de coalescencia: evita una fila por cada poll
/// sub-2s pero garantiza una cuando hubo movimiento significativo), o
/// `None` en ticks que no registran nada. La persistencia es
/// responsabilidad del llamador; si el append falla, el avance en memoria
/// ya ocurrió y el fallo debe reportarse, nunca tragarse.
pub fn advance<R: Rng>(
    vehicle: &mut VehicleState,
    now: DateTime<Utc>,
    rng: &mut R,
) -> Option<HistoryRecord> {
    let elapsed_seconds = (now - vehicle.last_update).num_milliseconds() as f64 / 1000.0;
    if elapsed_seconds < MIN_TICK_SECONDS {
        return None;
    }
    vehicle.last_update = now;
    let elapsed_hours = elapsed_seconds / 3600.0;

    let previous_lat = vehicle.latitude;
    let previous_lon = vehicle.longitude;
    let mut distance_moved_km = 0.0;

    match vehicle.status {
        VehicleStatus::Moving if vehicle.fuel_level > 0.0 => {
            let scale = elapsed_seconds / 5.0;
            vehicle.latitude += rng.gen_range(-0.005..=0.005) * scale;
            vehicle.longitude += rng.gen_range(-0.01..=0.01) * scale;
            vehicle.latitude = vehicle.latitude.clamp(LAT_MIN, LAT_MAX);
            vehicle.longitude = vehicle.longitude.clamp(LON_MIN, LON_MAX);
            vehicle.speed = rng.gen_range(30.0..=90.0);

            distance_moved_km = haversine_km(
                Some(previous_lat),
                Some(previous_lon),
                Some(vehicle.latitude),
                Some(vehicle.longitude),
            );

            let fuel_consumed =
                ENGINE_ON_FUEL_LPH * elapsed_hours + FUEL_PER_KM * distance_moved_km;
            vehicle.fuel_level -= fuel_consumed;
            vehicle.odometer += distance_moved_km;
            vehicle.engine_hours += elapsed_hours;
        }
        VehicleStatus::Idle => {
            vehicle.speed = 0.0;
            vehicle.fuel_level -= ENGINE_ON_FUEL_LPH * elapsed_hours;
            vehicle.engine_hours += elapsed_hours;
        }
        // out_of_fuel (o moving sin combustible): sin actualización física
        _ => {}
    }

    // Piso de combustible: al llegar exactamente a 0 el vehículo queda
    // fuera de servicio hasta una acción externa de repostaje.
    if vehicle.fuel_level <= 0.0 {
        vehicle.fuel_level = 0.0;
        if vehicle.status != VehicleStatus::OutOfFuel {
            vehicle.status = VehicleStatus::OutOfFuel;
            vehicle.speed = 0.0;
        }
    }

    // Transición estocástica de estado. La probabilidad escala con el
    // transcurrido y puede superar 1 (transición segura en ese caso).
    let transition_probability = TRANSITION_PROB_PER_5S * (elapsed_seconds / 5.0);
    if rng.gen::<f64>() < transition_probability {
        match vehicle.status {
            VehicleStatus::Idle
                if vehicle.fuel_level > vehicle.fuel_capacity * RESUME_FUEL_FRACTION =>
            {
                vehicle.status = VehicleStatus::Moving;
            }
            VehicleStatus::Moving => {
                vehicle.status = VehicleStatus::Idle;
            }
            _ => {}
        }
    }

    let should_record = (matches!(vehicle.status, VehicleStatus::Moving | VehicleStatus::Idle)
        && elapsed_seconds > RECORD_ELAPSED_THRESHOLD_S)
        || distance_moved_km > RECORD_DISTANCE_THRESHOLD_KM;

    if !should_record {
        return None;
    }

    vehicle.push_track_point(vehicle.latitude, vehicle.longitude);

    Some(HistoryRecord {
        vehicle_id: vehicle.id.clone(),
        latitude: Some(vehicle.latitude),
        longitude: Some(vehicle.longitude),
        recorded_at: now,
        speed: Some(vehicle.speed),
        fuel_level: Some(vehicle.fuel_level),
        status: vehicle.status.as_str().to_string(),
        odometer: Some(vehicle.odometer),
        engine_hours: Some(vehicle.engine_hours),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::VecDeque;

    fn test_vehicle(status: VehicleStatus, fuel_level: f64) -> VehicleState {
        VehicleState {
            id: "VS001".to_string(),
            latitude: 44.43,
            longitude: 26.10,
            speed: 0.0,
            fuel_level,
            fuel_capacity: 100.0,
            odometer: 12000.0,
            engine_hours: 240.0,
            status,
            last_update: Utc::now(),
            recent_track: VecDeque::new(),
        }
    }

    #[test]
    fn sub_second_tick_is_a_strict_noop() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut vehicle = test_vehicle(VehicleStatus::Moving, 80.0);
        let before = vehicle.clone();
        let now = vehicle.last_update + Duration::milliseconds(500);

        let record = advance(&mut vehicle, now, &mut rng);

        assert!(record.is_none());
        assert_eq!(vehicle.last_update, before.last_update);
        assert_eq!(vehicle.fuel_level, before.fuel_level);
        assert_eq!(vehicle.odometer, before.odometer);
        assert_eq!(vehicle.engine_hours, before.engine_hours);
        assert_eq!(vehicle.status, before.status);
        assert!(vehicle.recent_track.is_empty());
    }

    #[test]
    fn idle_tick_consumes_fuel_and_accrues_engine_hours() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut vehicle = test_vehicle(VehicleStatus::Idle, 50.0);
        let now = vehicle.last_update + Duration::seconds(3600);

        advance(&mut vehicle, now, &mut rng);

        assert_eq!(vehicle.speed, 0.0);
        assert!((vehicle.fuel_level - 49.0).abs() < 1e-9);
        assert!((vehicle.engine_hours - 241.0).abs() < 1e-9);
        assert_eq!(vehicle.odometer, 12000.0);
        assert_eq!(vehicle.latitude, 44.43);
        assert_eq!(vehicle.longitude, 26.10);
    }

    #[test]
    fn moving_tick_moves_within_bounding_box_and_advances_odometer() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut vehicle = test_vehicle(VehicleStatus::Moving, 80.0);
        for i in 1..=200 {
            let now = vehicle.last_update + Duration::seconds(5);
            advance(&mut vehicle, now, &mut rng);
            assert!(
                (LAT_MIN..=LAT_MAX).contains(&vehicle.latitude),
                "lat fuera de rango en tick {i}"
            );
            assert!(
                (LON_MIN..=LON_MAX).contains(&vehicle.longitude),
                "lon fuera de rango en tick {i}"
            );
        }
        assert!(vehicle.odometer > 12000.0);
    }

    #[test]
    fn fuel_level_stays_within_bounds_across_many_ticks() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut vehicle = test_vehicle(VehicleStatus::Moving, 5.0);
        for _ in 0..500 {
            let now = vehicle.last_update + Duration::seconds(30);
            advance(&mut vehicle, now, &mut rng);
            assert!(vehicle.fuel_level >= 0.0);
            assert!(vehicle.fuel_level <= vehicle.fuel_capacity);
        }
    }

    #[test]
    fn out_of_fuel_is_terminal_under_advance() {
        let mut rng = StdRng::seed_from_u64(9);
        // idle con poco combustible: se agota y queda out_of_fuel
        let mut vehicle = test_vehicle(VehicleStatus::Idle, 0.5);
        for _ in 0..10 {
            let now = vehicle.last_update + Duration::seconds(3600);
            advance(&mut vehicle, now, &mut rng);
        }
        assert_eq!(vehicle.status, VehicleStatus::OutOfFuel);
        assert_eq!(vehicle.fuel_level, 0.0);
        assert_eq!(vehicle.speed, 0.0);

        let (odometer, engine_hours) = (vehicle.odometer, vehicle.engine_hours);
        for _ in 0..200 {
            let now = vehicle.last_update + Duration::seconds(60);
            advance(&mut vehicle, now, &mut rng);
            assert_eq!(vehicle.status, VehicleStatus::OutOfFuel);
        }
        // sin motor encendido no se acumula nada
        assert_eq!(vehicle.odometer, odometer);
        assert_eq!(vehicle.engine_hours, engine_hours);
    }

    #[test]
    fn odometer_and_engine_hours_never_decrease() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut vehicle = test_vehicle(VehicleStatus::Idle, 90.0);
        let mut last_odometer = vehicle.odometer;
        let mut last_hours = vehicle.engine_hours;
        for _ in 0..300 {
            let now = vehicle.last_update + Duration::seconds(15);
            advance(&mut vehicle, now, &mut rng);
            assert!(vehicle.odometer >= last_odometer);
            assert!(vehicle.engine_hours >= last_hours);
            last_odometer = vehicle.odometer;
            last_hours = vehicle.engine_hours;
        }
    }

    #[test]
    fn qualifying_tick_emits_history_record_snapshot() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut vehicle = test_vehicle(VehicleStatus::Idle, 60.0);
        let now = vehicle.last_update + Duration::seconds(10);

        let record = advance(&mut vehicle, now, &mut rng).expect("elapsed > 2s debe registrar");

        assert_eq!(record.vehicle_id, "VS001");
        assert_eq!(record.recorded_at, now);
        assert_eq!(record.odometer, Some(vehicle.odometer));
        assert_eq!(record.engine_hours, Some(vehicle.engine_hours));
        assert_eq!(record.fuel_level, Some(vehicle.fuel_level));
        assert_eq!(vehicle.recent_track.len(), 1);
    }

    #[test]
    fn out_of_fuel_tick_does_not_emit_history() {
        let mut rng = StdRng::seed_from_u64(13);
        let mut vehicle = test_vehicle(VehicleStatus::OutOfFuel, 0.0);
        vehicle.speed = 0.0;
        let now = vehicle.last_update + Duration::seconds(30);

        assert!(advance(&mut vehicle, now, &mut rng).is_none());
    }

    #[test]
    fn seeded_rng_makes_advance_deterministic() {
        let run = |seed: u64| {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut vehicle = test_vehicle(VehicleStatus::Moving, 80.0);
            let mut tick = vehicle.last_update;
            for _ in 0..50 {
                tick += Duration::seconds(5);
                advance(&mut vehicle, tick, &mut rng);
            }
            (vehicle.latitude, vehicle.longitude, vehicle.odometer, vehicle.fuel_level)
        };
        assert_eq!(run(21), run(21));
    }
}
