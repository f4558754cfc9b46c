//! Utilidades compartidas

pub mod errors;
pub mod geo;

/// Redondear a dos decimales para las respuestas de la API
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
