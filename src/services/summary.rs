//! Resumen operacional
//!
//! Reduce el primer y último registro de un rango filtrado del historial a
//! totales de distancia, horas motor y una estimación de combustible.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::history::HistoryRecord;
use crate::utils::round2;

/// Estimación de consumo: litros por hora motor.
///
/// Es un proxy grueso sobre las horas motor acumuladas, no una medición
/// física del consumo real.
const FUEL_LITERS_PER_ENGINE_HOUR: f64 = 4.0;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct OperationalSummary {
    pub total_distance_km: f64,
    pub total_engine_hours: f64,
    pub total_fuel_consumed: f64,
    pub period_start_timestamp: Option<DateTime<Utc>>,
    pub period_end_timestamp: Option<DateTime<Utc>>,
}

/// Calcular el resumen a partir de los extremos del rango.
///
/// Campos numéricos ausentes en cualquiera de los extremos degradan el
/// total correspondiente a 0. Cero o un registro en el rango produce
/// totales 0; los límites del periodo reflejan lo que haya disponible.
pub fn summarize(
    first: Option<&HistoryRecord>,
    last: Option<&HistoryRecord>,
) -> OperationalSummary {
    let mut summary = OperationalSummary {
        total_distance_km: 0.0,
        total_engine_hours: 0.0,
        total_fuel_consumed: 0.0,
        period_start_timestamp: None,
        period_end_timestamp: None,
    };

    let (first, last) = match (first, last) {
        (Some(f), Some(l)) => (f, l),
        _ => return summary,
    };

    summary.period_start_timestamp = Some(first.recorded_at);
    summary.period_end_timestamp = Some(last.recorded_at);

    if let (Some(first_odo), Some(last_odo)) = (first.odometer, last.odometer) {
        summary.total_distance_km = round2(last_odo - first_odo);
    }
    if let (Some(first_hours), Some(last_hours)) = (first.engine_hours, last.engine_hours) {
        summary.total_engine_hours = round2(last_hours - first_hours);
    }
    if summary.total_engine_hours > 0.0 {
        summary.total_fuel_consumed =
            round2(summary.total_engine_hours * FUEL_LITERS_PER_ENGINE_HOUR);
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn record(odometer: Option<f64>, engine_hours: Option<f64>) -> HistoryRecord {
        HistoryRecord {
            vehicle_id: "VS001".to_string(),
            latitude: Some(44.43),
            longitude: Some(26.10),
            recorded_at: Utc::now(),
            speed: Some(0.0),
            fuel_level: Some(50.0),
            status: "idle".to_string(),
            odometer,
            engine_hours,
        }
    }

    #[test]
    fn totals_from_first_and_last_records() {
        let first = record(Some(1000.0), Some(10.0));
        let last = record(Some(1250.0), Some(15.0));

        let summary = summarize(Some(&first), Some(&last));

        assert_eq!(summary.total_distance_km, 250.0);
        assert_eq!(summary.total_engine_hours, 5.0);
        assert_eq!(summary.total_fuel_consumed, 20.0);
        assert_eq!(summary.period_start_timestamp, Some(first.recorded_at));
        assert_eq!(summary.period_end_timestamp, Some(last.recorded_at));
    }

    #[test]
    fn empty_range_yields_zero_totals_and_null_boundaries() {
        let summary = summarize(None, None);

        assert_eq!(summary.total_distance_km, 0.0);
        assert_eq!(summary.total_engine_hours, 0.0);
        assert_eq!(summary.total_fuel_consumed, 0.0);
        assert!(summary.period_start_timestamp.is_none());
        assert!(summary.period_end_timestamp.is_none());
    }

    #[test]
    fn single_record_range_yields_zero_totals_with_boundaries() {
        let only = record(Some(5000.0), Some(80.0));
        let summary = summarize(Some(&only), Some(&only));

        assert_eq!(summary.total_distance_km, 0.0);
        assert_eq!(summary.total_engine_hours, 0.0);
        assert_eq!(summary.total_fuel_consumed, 0.0);
        assert_eq!(summary.period_start_timestamp, Some(only.recorded_at));
    }

    #[test]
    fn missing_numeric_fields_degrade_to_zero() {
        let first = record(None, None);
        let last = record(Some(1250.0), Some(15.0));

        let summary = summarize(Some(&first), Some(&last));

        assert_eq!(summary.total_distance_km, 0.0);
        assert_eq!(summary.total_engine_hours, 0.0);
        assert_eq!(summary.total_fuel_consumed, 0.0);
        // los límites siguen reflejando los registros disponibles
        assert!(summary.period_start_timestamp.is_some());
    }
}
