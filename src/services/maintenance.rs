//! Motor de mantenimiento
//!
//! Proyección de solo lectura: compara el uso acumulado del vehículo
//! (odómetro y horas motor) contra los intervalos de servicio definidos,
//! midiendo desde el último servicio registrado (0/0 si nunca hubo uno).

use serde::Serialize;
use std::collections::HashMap;

use crate::models::maintenance::{LastServiceRecord, MAINTENANCE_DEFINITIONS};
use crate::utils::round2;

/// Estado de un ítem del plan de mantenimiento
#[derive(Debug, Clone, Serialize)]
pub struct ServiceStatus {
    pub service_name: String,
    pub description: String,
    pub last_serviced_km: f64,
    pub last_serviced_hours: f64,
    pub km_since_last: f64,
    pub hours_since_last: f64,
    pub km_interval: Option<f64>,
    pub hours_interval: Option<f64>,
    pub next_km_due: Option<f64>,
    pub km_remaining: Option<f64>,
    pub next_hours_due: Option<f64>,
    pub hours_remaining: Option<f64>,
}

/// Calcular el estado de todos los servicios, en el orden de la tabla de
/// definiciones. No muta persistencia alguna.
pub fn schedule_status(
    current_odometer: f64,
    current_engine_hours: f64,
    last_services: &HashMap<String, LastServiceRecord>,
) -> Vec<ServiceStatus> {
    MAINTENANCE_DEFINITIONS
        .iter()
        .map(|definition| {
            let last = last_services
                .get(definition.name)
                .copied()
                .unwrap_or_default();

            let mut item = ServiceStatus {
                service_name: definition.name.to_string(),
                description: definition.description.to_string(),
                last_serviced_km: last.odometer,
                last_serviced_hours: last.engine_hours,
                km_since_last: round2(current_odometer - last.odometer),
                hours_since_last: round2(current_engine_hours - last.engine_hours),
                km_interval: definition.km_interval,
                hours_interval: definition.hours_interval,
                next_km_due: None,
                km_remaining: None,
                next_hours_due: None,
                hours_remaining: None,
            };

            if let Some(interval) = definition.km_interval {
                let next_due = last.odometer + interval;
                item.next_km_due = Some(next_due);
                item.km_remaining = Some(round2((next_due - current_odometer).max(0.0)));
            }
            if let Some(interval) = definition.hours_interval {
                let next_due = last.engine_hours + interval;
                item.next_hours_due = Some(next_due);
                item.hours_remaining = Some(round2((next_due - current_engine_hours).max(0.0)));
            }

            item
        })
        .collect()
}
