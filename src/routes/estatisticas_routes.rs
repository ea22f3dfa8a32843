use axum::{extract::State, routing::get, Json, Router};

use crate::controllers::estatisticas_controller::EstatisticasController;
use crate::dto::estatisticas_dto::{ResumoVendas, VendaPorDia};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_estatisticas_router() -> Router<AppState> {
    Router::new()
        .route("/resumo", get(resumo))
        .route("/vendas-por-dia", get(vendas_por_dia))
}

async fn resumo(State(state): State<AppState>) -> Result<Json<ResumoVendas>, AppError> {
    let controller = EstatisticasController::new(state.pool.clone());
    let response = controller.resumo().await?;
    Ok(Json(response))
}

async fn vendas_por_dia(
    State(state): State<AppState>,
) -> Result<Json<Vec<VendaPorDia>>, AppError> {
    let controller = EstatisticasController::new(state.pool.clone());
    let response = controller.vendas_por_dia().await?;
    Ok(Json(response))
}
