//! Configuración de conexión a PostgreSQL
//!
//! Este módulo maneja la conexión a la base de datos y la creación
//! idempotente del esquema.

use anyhow::Result;
use sqlx::PgPool;

/// Crear un pool de conexiones a la base de datos
pub async fn create_pool(database_url: Option<&str>) -> Result<PgPool> {
    let database_url = match database_url {
        Some(url) => url.to_string(),
        None => std::env::var("DATABASE_URL")
            .expect("DATABASE_URL must be set in environment variables"),
    };

    let pool = PgPool::connect(&database_url).await?;

    Ok(pool)
}

/// Crear las tablas si no existen.
///
/// `route_history` es append-only; `maintenance_log` guarda los servicios
/// completados (el último por (vehículo, servicio) define el origen de los
/// intervalos de mantenimiento).
pub async fn init_schema(pool: &PgPool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS route_history (
            id BIGSERIAL PRIMARY KEY,
            vehicle_id TEXT NOT NULL,
            latitude DOUBLE PRECISION,
            longitude DOUBLE PRECISION,
            recorded_at TIMESTAMPTZ NOT NULL,
            speed DOUBLE PRECISION,
            fuel_level DOUBLE PRECISION,
            status TEXT NOT NULL,
            odometer DOUBLE PRECISION,
            engine_hours DOUBLE PRECISION
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_route_history_vehicle_time
         ON route_history (vehicle_id, recorded_at)",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS maintenance_log (
            id BIGSERIAL PRIMARY KEY,
            vehicle_id TEXT NOT NULL,
            service_name TEXT NOT NULL,
            odometer DOUBLE PRECISION NOT NULL,
            engine_hours DOUBLE PRECISION NOT NULL,
            performed_at TIMESTAMPTZ NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_maintenance_log_vehicle_service
         ON maintenance_log (vehicle_id, service_name, performed_at DESC)",
    )
    .execute(pool)
    .await?;

    Ok(())
}
