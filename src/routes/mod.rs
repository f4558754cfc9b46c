//! Rutas de la API
//!
//! Sub-routers por recurso, anidados bajo `/api` en `main`.

pub mod history_routes;
pub mod maintenance_routes;
pub mod vehicle_routes;

use axum::Router;

use crate::state::AppState;

/// Crear el router principal de la API
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/vehicles", vehicle_routes::create_vehicle_router())
        .nest(
            "/vehicle",
            history_routes::create_history_router()
                .merge(maintenance_routes::create_maintenance_router()),
        )
}
