//! Controladores de la API

pub mod history_controller;
pub mod maintenance_controller;
pub mod vehicle_controller;
