//! Servicios del dominio
//!
//! La lógica central: máquina de estados de vehículos, registro de flota,
//! agregación del historial y motor de mantenimiento.

pub mod fleet;
pub mod maintenance;
pub mod simulation;
pub mod summary;
