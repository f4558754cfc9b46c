//! Repositorio de servicios de mantenimiento
//!
//! Registro durable de servicios completados (`maintenance_log`),
//! simétrico al historial de ruta. El "último servicio" de un par
//! (vehículo, servicio) es la fila más reciente de ese par.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::collections::HashMap;

use crate::models::maintenance::LastServiceRecord;
use crate::utils::errors::AppError;

pub struct MaintenanceRepository {
    pool: PgPool,
}

impl MaintenanceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Registrar un servicio completado con el uso acumulado actual del
    /// vehículo. Único punto de mutación de los LastServiceRecord.
    pub async fn record_service(
        &self,
        vehicle_id: &str,
        service_name: &str,
        odometer: f64,
        engine_hours: f64,
        performed_at: DateTime<Utc>,
    ) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO maintenance_log (vehicle_id, service_name, odometer, engine_hours, performed_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(vehicle_id)
        .bind(service_name)
        .bind(odometer)
        .bind(engine_hours)
        .bind(performed_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Último servicio registrado por nombre de servicio para un vehículo.
    /// Servicios sin registro quedan fuera del mapa (default 0/0 aguas
    /// arriba: el primer intervalo se mide desde el origen del vehículo).
    pub async fn last_services(
        &self,
        vehicle_id: &str,
    ) -> Result<HashMap<String, LastServiceRecord>, AppError> {
        let rows: Vec<(String, f64, f64)> = sqlx::query_as(
            r#"
            SELECT DISTINCT ON (service_name) service_name, odometer, engine_hours
            FROM maintenance_log
            WHERE vehicle_id = $1
            ORDER BY service_name, performed_at DESC
            "#,
        )
        .bind(vehicle_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(name, odometer, engine_hours)| {
                (
                    name,
                    LastServiceRecord {
                        odometer,
                        engine_hours,
                    },
                )
            })
            .collect())
    }
}
