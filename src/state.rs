//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum.

use sqlx::PgPool;
use std::sync::Arc;

use crate::services::fleet::Fleet;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub fleet: Arc<Fleet>,
}

impl AppState {
    pub fn new(pool: PgPool, fleet: Arc<Fleet>) -> Self {
        Self { pool, fleet }
    }
}
