//! Repositorios de acceso a datos

pub mod history_repository;
pub mod maintenance_repository;
