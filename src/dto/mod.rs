//! DTOs de la API
//!
//! Formas de request/response desacopladas de los modelos del dominio.

pub mod history_dto;
pub mod maintenance_dto;
pub mod vehicle_dto;

use serde::Serialize;

/// Envoltorio genérico para respuestas de mutación
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn success_with_message(data: T, message: String) -> Self {
        Self {
            success: true,
            message: Some(message),
            data,
        }
    }
}
