//! Controlador de historial y resumen operacional

use chrono::NaiveDate;
use sqlx::PgPool;

use crate::dto::history_dto::{HistoryRangeQuery, HistoryRecordResponse};
use crate::repositories::history_repository::HistoryRepository;
use crate::services::fleet::Fleet;
use crate::services::summary::{self, OperationalSummary};
use crate::utils::errors::{not_found_error, AppError};

pub struct HistoryController {
    history: HistoryRepository,
}

impl HistoryController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            history: HistoryRepository::new(pool),
        }
    }

    /// Historial filtrado de un vehículo, ascendente por timestamp
    pub async fn history(
        &self,
        fleet: &Fleet,
        vehicle_id: &str,
        query: HistoryRangeQuery,
    ) -> Result<Vec<HistoryRecordResponse>, AppError> {
        if !fleet.contains(vehicle_id) {
            return Err(not_found_error("Vehicle", vehicle_id));
        }
        let (start_date, end_date) = parse_range(&query)?;

        let records = self.history.query(vehicle_id, start_date, end_date).await?;
        Ok(records.into_iter().map(Into::into).collect())
    }

    /// Resumen operacional del rango: distancia y horas motor entre el
    /// primer y el último registro, más la estimación de combustible.
    pub async fn operational_summary(
        &self,
        fleet: &Fleet,
        vehicle_id: &str,
        query: HistoryRangeQuery,
    ) -> Result<OperationalSummary, AppError> {
        if !fleet.contains(vehicle_id) {
            return Err(not_found_error("Vehicle", vehicle_id));
        }
        let (start_date, end_date) = parse_range(&query)?;

        let first = self
            .history
            .first_in_range(vehicle_id, start_date, end_date)
            .await?;
        let last = self
            .history
            .last_in_range(vehicle_id, start_date, end_date)
            .await?;

        Ok(summary::summarize(first.as_ref(), last.as_ref()))
    }
}

fn parse_range(
    query: &HistoryRangeQuery,
) -> Result<(Option<NaiveDate>, Option<NaiveDate>), AppError> {
    Ok((
        parse_date(query.start_date.as_deref(), "start_date")?,
        parse_date(query.end_date.as_deref(), "end_date")?,
    ))
}

fn parse_date(value: Option<&str>, field: &str) -> Result<Option<NaiveDate>, AppError> {
    match value {
        None => Ok(None),
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| {
                AppError::BadRequest(format!(
                    "'{raw}' is not a valid {field}, expected YYYY-MM-DD"
                ))
            }),
    }
}
