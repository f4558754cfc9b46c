//! Configuración de la flota
//!
//! Lista fija de vehículos con la que se construye el registro al arranque.
//! Los identificadores son strings opacos estables entre reinicios.

/// Posición inicial y capacidad de combustible de un vehículo
#[derive(Debug, Clone, Copy)]
pub struct VehicleConfig {
    pub id: &'static str,
    pub latitude: f64,
    pub longitude: f64,
    pub fuel_capacity: f64,
}

/// Flota inicial
pub const INITIAL_FLEET: &[VehicleConfig] = &[
    VehicleConfig {
        id: "VS001",
        latitude: 44.43,
        longitude: 26.10,
        fuel_capacity: 120.0,
    },
    VehicleConfig {
        id: "VS002",
        latitude: 45.75,
        longitude: 21.22,
        fuel_capacity: 80.0,
    },
    VehicleConfig {
        id: "VS003",
        latitude: 46.77,
        longitude: 23.60,
        fuel_capacity: 150.0,
    },
    VehicleConfig {
        id: "VS004",
        latitude: 47.16,
        longitude: 27.58,
        fuel_capacity: 100.0,
    },
];
