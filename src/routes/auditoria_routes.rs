use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use crate::state::AppState;
use crate::utils::audit::RegistroAuditoria;
use crate::utils::errors::AppError;

const LIMITE_PADRAO: usize = 100;

#[derive(Debug, Deserialize)]
pub struct AuditoriaFilters {
    pub limite: Option<usize>,
}

pub fn create_auditoria_router() -> Router<AppState> {
    Router::new().route("/", get(listar_auditoria))
}

/// Entradas mais recentes do log de auditoria em memória
async fn listar_auditoria(
    State(state): State<AppState>,
    Query(filtros): Query<AuditoriaFilters>,
) -> Result<Json<Vec<RegistroAuditoria>>, AppError> {
    let limite = filtros.limite.unwrap_or(LIMITE_PADRAO);
    Ok(Json(state.auditoria.recentes(limite).await))
}
