//! Shared application state
//!
//! Este módulo define o estado compartilhado da aplicação que é passado
//! através do router do Axum.

use sqlx::PgPool;

use crate::config::environment::EnvironmentConfig;
use crate::utils::audit::LogAuditoria;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: EnvironmentConfig,
    pub auditoria: LogAuditoria,
}

impl AppState {
    pub fn new(pool: PgPool, config: EnvironmentConfig) -> Self {
        Self {
            pool,
            config,
            auditoria: LogAuditoria::default(),
        }
    }
}
