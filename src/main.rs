mod config;
mod controllers;
mod database;
mod dto;
mod middleware;
mod models;
mod repositories;
mod routes;
mod services;
mod state;
mod utils;

use anyhow::Result;
use axum::{response::Json, routing::get, Router};
use dotenvy::dotenv;
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info};

use config::environment::EnvironmentConfig;
use config::fleet::INITIAL_FLEET;
use middleware::cors::cors_middleware;
use repositories::history_repository::HistoryRepository;
use services::fleet::Fleet;
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let env_config = EnvironmentConfig::default();

    info!("🚚 Fleet Monitoring - Simulación y telemetría de flota");
    info!("======================================================");
    info!("Entorno: {}", env_config.environment);

    // Inicializar base de datos
    let pool = match database::connection::create_pool(None).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };
    database::connection::init_schema(&pool).await?;
    info!("✅ Esquema de base de datos listo");

    // Construir el registro de flota, reanudando desde el historial
    let history = HistoryRepository::new(pool.clone());
    let fleet = Arc::new(Fleet::bootstrap(&history, INITIAL_FLEET).await?);
    info!("✅ Flota inicializada con {} vehículos", fleet.len());

    // Crear router de la API
    let app_state = AppState::new(pool, fleet);

    let app = Router::new()
        .route("/health", get(health_endpoint))
        .nest("/api", routes::create_api_router())
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .layer(cors_middleware())
        .with_state(app_state);

    let addr: SocketAddr = env_config.server_addr().parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("   GET  /api/vehicles - Tick de simulación + estado de la flota");
    info!("   GET  /api/vehicle/:id/history - Historial filtrado por fechas");
    info!("   GET  /api/vehicle/:id/operational_summary - Resumen operacional");
    info!("   GET  /api/vehicle/:id/maintenance_status - Estado de mantenimiento");
    info!("   POST /api/vehicle/:id/maintenance/:service_name/complete - Registrar servicio");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            anyhow::anyhow!(e)
        })?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Health check simple
async fn health_endpoint() -> Json<serde_json::Value> {
    Json(json!({
        "service": "fleet-monitoring",
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
