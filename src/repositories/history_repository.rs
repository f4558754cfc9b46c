//! Repositorio del historial de ruta
//!
//! Adaptador append-only sobre la tabla `route_history`, ordenada por
//! timestamp por vehículo. Los filtros de fecha son inclusivos y se
//! aplican solo a la porción de calendario del timestamp (no a la hora).

use chrono::NaiveDate;
use sqlx::PgPool;

use crate::models::history::HistoryRecord;
use crate::utils::errors::AppError;

const HISTORY_COLUMNS: &str =
    "vehicle_id, latitude, longitude, recorded_at, speed, fuel_level, status, odometer, engine_hours";

pub struct HistoryRepository {
    pool: PgPool,
}

impl HistoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insertar un registro. Inserción de fila única, atómica; un fallo se
    /// propaga al llamador para que detecte que el avance en memoria quedó
    /// sin registro durable.
    pub async fn append(&self, record: &HistoryRecord) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO route_history
                (vehicle_id, latitude, longitude, recorded_at, speed, fuel_level, status, odometer, engine_hours)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(&record.vehicle_id)
        .bind(record.latitude)
        .bind(record.longitude)
        .bind(record.recorded_at)
        .bind(record.speed)
        .bind(record.fuel_level)
        .bind(&record.status)
        .bind(record.odometer)
        .bind(record.engine_hours)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Historial de un vehículo, ascendente por timestamp, acotado por
    /// fechas de calendario inclusivas opcionales.
    pub async fn query(
        &self,
        vehicle_id: &str,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<Vec<HistoryRecord>, AppError> {
        let records = sqlx::query_as::<_, HistoryRecord>(&format!(
            r#"
            SELECT {HISTORY_COLUMNS}
            FROM route_history
            WHERE vehicle_id = $1
              AND ($2::date IS NULL OR recorded_at::date >= $2)
              AND ($3::date IS NULL OR recorded_at::date <= $3)
            ORDER BY recorded_at ASC
            "#
        ))
        .bind(vehicle_id)
        .bind(start_date)
        .bind(end_date)
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    /// Registro más reciente de un vehículo; se usa para sembrar el estado
    /// al (re)inicializar la flota.
    pub async fn latest(&self, vehicle_id: &str) -> Result<Option<HistoryRecord>, AppError> {
        let record = sqlx::query_as::<_, HistoryRecord>(&format!(
            r#"
            SELECT {HISTORY_COLUMNS}
            FROM route_history
            WHERE vehicle_id = $1
            ORDER BY recorded_at DESC
            LIMIT 1
            "#
        ))
        .bind(vehicle_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    /// Primer registro del rango filtrado (extremo inferior del resumen)
    pub async fn first_in_range(
        &self,
        vehicle_id: &str,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<Option<HistoryRecord>, AppError> {
        self.boundary_record(vehicle_id, start_date, end_date, "ASC")
            .await
    }

    /// Último registro del rango filtrado (extremo superior del resumen)
    pub async fn last_in_range(
        &self,
        vehicle_id: &str,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<Option<HistoryRecord>, AppError> {
        self.boundary_record(vehicle_id, start_date, end_date, "DESC")
            .await
    }

    async fn boundary_record(
        &self,
        vehicle_id: &str,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
        order: &str,
    ) -> Result<Option<HistoryRecord>, AppError> {
        let record = sqlx::query_as::<_, HistoryRecord>(&format!(
            r#"
            SELECT {HISTORY_COLUMNS}
            FROM route_history
            WHERE vehicle_id = $1
              AND ($2::date IS NULL OR recorded_at::date >= $2)
              AND ($3::date IS NULL OR recorded_at::date <= $3)
            ORDER BY recorded_at {order}
            LIMIT 1
            "#
        ))
        .bind(vehicle_id)
        .bind(start_date)
        .bind(end_date)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }
}
