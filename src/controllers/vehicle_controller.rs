//! Controlador de flota
//!
//! Punto de entrada del tick: cada consulta de estado avanza la simulación
//! (no hay reloj propio). El avance en memoria y el append al historial se
//! hacen bajo el lock del vehículo; si el append falla, el error se
//! propaga para que el llamador sepa que el tick quedó sin fila durable.

use chrono::Utc;
use sqlx::PgPool;

use crate::dto::vehicle_dto::VehicleSnapshotResponse;
use crate::repositories::history_repository::HistoryRepository;
use crate::services::fleet::Fleet;
use crate::services::simulation;
use crate::utils::errors::AppError;

pub struct VehicleController {
    history: HistoryRepository,
}

impl VehicleController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            history: HistoryRepository::new(pool),
        }
    }

    /// Avanzar todos los vehículos un tick y devolver sus instantáneas en
    /// el orden de configuración.
    pub async fn tick_fleet(&self, fleet: &Fleet) -> Result<Vec<VehicleSnapshotResponse>, AppError> {
        let now = Utc::now();
        let mut snapshots = Vec::with_capacity(fleet.len());

        for (vehicle_id, slot) in fleet.iter() {
            let mut vehicle = slot.lock().await;
            let record = {
                let mut rng = rand::thread_rng();
                simulation::advance(&mut vehicle, now, &mut rng)
            };
            if let Some(record) = record.as_ref() {
                self.history.append(record).await.map_err(|e| {
                    tracing::error!("Append de historial falló para {}: {}", vehicle_id, e);
                    e
                })?;
            }
            snapshots.push(VehicleSnapshotResponse::from(&*vehicle));
        }

        Ok(snapshots)
    }
}
