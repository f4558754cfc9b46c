//! Modelo de mantenimiento
//!
//! Definiciones estáticas del plan de mantenimiento y el registro del
//! último servicio efectuado por (vehículo, servicio).

/// Una regla de servicio por intervalo. Al menos uno de los dos
/// intervalos está definido.
#[derive(Debug, Clone, Copy)]
pub struct MaintenanceDefinition {
    pub name: &'static str,
    pub km_interval: Option<f64>,
    pub hours_interval: Option<f64>,
    pub description: &'static str,
}

/// Plan de mantenimiento de la flota, cargado una sola vez y de solo
/// lectura. El orden de la tabla se conserva en las respuestas.
pub const MAINTENANCE_DEFINITIONS: &[MaintenanceDefinition] = &[
    MaintenanceDefinition {
        name: "engine_oil_change",
        km_interval: Some(15000.0),
        hours_interval: Some(300.0),
        description: "Engine oil and oil filter replacement",
    },
    MaintenanceDefinition {
        name: "brake_pad_inspection",
        km_interval: Some(20000.0),
        hours_interval: None,
        description: "Visual inspection and thickness measurement of brake pads",
    },
    MaintenanceDefinition {
        name: "air_filter_replacement",
        km_interval: Some(30000.0),
        hours_interval: Some(600.0),
        description: "Engine air filter replacement",
    },
    MaintenanceDefinition {
        name: "fuel_filter_replacement",
        km_interval: Some(40000.0),
        hours_interval: None,
        description: "Fuel filter replacement",
    },
    MaintenanceDefinition {
        name: "coolant_check",
        km_interval: None,
        hours_interval: Some(500.0),
        description: "Coolant level and condition check with top-up",
    },
    MaintenanceDefinition {
        name: "general_inspection",
        km_interval: Some(10000.0),
        hours_interval: Some(250.0),
        description: "General checks: lights, tyres, leaks",
    },
];

/// Buscar una definición por nombre
pub fn find_definition(name: &str) -> Option<&'static MaintenanceDefinition> {
    MAINTENANCE_DEFINITIONS.iter().find(|d| d.name == name)
}

/// Odómetro y horas motor en el momento del último servicio.
///
/// El default (0/0) significa "nunca servido": el primer intervalo se mide
/// desde el origen del vehículo, no desde el arranque de la simulación.
#[derive(Debug, Clone, Copy, Default)]
pub struct LastServiceRecord {
    pub odometer: f64,
    pub engine_hours: f64,
}
