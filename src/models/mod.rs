//! Modelos del sistema
//!
//! Este módulo contiene los modelos de datos del dominio: estado vivo de
//! vehículos, filas del historial y plan de mantenimiento.

pub mod history;
pub mod maintenance;
pub mod vehicle;
