//! Controlador de mantenimiento

use chrono::Utc;
use sqlx::PgPool;

use crate::dto::maintenance_dto::{MaintenanceStatusResponse, ServiceCompletionResponse};
use crate::dto::ApiResponse;
use crate::models::maintenance::find_definition;
use crate::repositories::maintenance_repository::MaintenanceRepository;
use crate::services::fleet::Fleet;
use crate::services::maintenance;
use crate::utils::errors::{not_found_error, AppError};
use crate::utils::round2;

pub struct MaintenanceController {
    repository: MaintenanceRepository,
}

impl MaintenanceController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: MaintenanceRepository::new(pool),
        }
    }

    /// Estado del plan de mantenimiento contra el uso acumulado actual
    pub async fn status(
        &self,
        fleet: &Fleet,
        vehicle_id: &str,
    ) -> Result<MaintenanceStatusResponse, AppError> {
        let slot = fleet
            .get(vehicle_id)
            .ok_or_else(|| not_found_error("Vehicle", vehicle_id))?;

        let (current_odometer, current_engine_hours) = {
            let vehicle = slot.lock().await;
            (vehicle.odometer, vehicle.engine_hours)
        };

        let last_services = self.repository.last_services(vehicle_id).await?;
        let schedule =
            maintenance::schedule_status(current_odometer, current_engine_hours, &last_services);

        Ok(MaintenanceStatusResponse {
            vehicle_id: vehicle_id.to_string(),
            current_odometer: round2(current_odometer),
            current_engine_hours: round2(current_engine_hours),
            maintenance_schedule: schedule,
        })
    }

    /// Registrar un servicio completado capturando el odómetro y las horas
    /// motor actuales del vehículo. Los próximos estados de mantenimiento
    /// miden sus intervalos desde este registro.
    pub async fn complete_service(
        &self,
        fleet: &Fleet,
        vehicle_id: &str,
        service_name: &str,
    ) -> Result<ApiResponse<ServiceCompletionResponse>, AppError> {
        if find_definition(service_name).is_none() {
            return Err(AppError::BadRequest(format!(
                "Unknown maintenance service '{service_name}'"
            )));
        }

        let slot = fleet
            .get(vehicle_id)
            .ok_or_else(|| not_found_error("Vehicle", vehicle_id))?;

        // lock sostenido durante el insert para capturar un snapshot
        // consistente del uso acumulado
        let vehicle = slot.lock().await;
        let performed_at = Utc::now();
        self.repository
            .record_service(
                vehicle_id,
                service_name,
                vehicle.odometer,
                vehicle.engine_hours,
                performed_at,
            )
            .await?;

        tracing::info!(
            "🔧 Servicio '{}' registrado para {} a {:.1} km / {:.1} h",
            service_name,
            vehicle_id,
            vehicle.odometer,
            vehicle.engine_hours,
        );

        Ok(ApiResponse::success_with_message(
            ServiceCompletionResponse {
                vehicle_id: vehicle_id.to_string(),
                service_name: service_name.to_string(),
                odometer: round2(vehicle.odometer),
                engine_hours: round2(vehicle.engine_hours),
                performed_at,
            },
            "Service recorded".to_string(),
        ))
    }
}
