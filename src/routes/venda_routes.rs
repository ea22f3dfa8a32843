use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post, put},
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::controllers::venda_controller::VendaController;
use crate::dto::venda_dto::{CreateVendaRequest, UpdateVendaRequest, VendaFilters, VendaResponse};
use crate::dto::ApiResponse;
use crate::middleware::auth::AuthenticatedUser;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_venda_router() -> Router<AppState> {
    Router::new()
        .route("/", post(criar_venda))
        .route("/", get(listar_vendas))
        .route("/:id", get(buscar_venda))
        .route("/:id", put(atualizar_venda))
        .route("/:id", delete(remover_venda))
}

async fn criar_venda(
    State(state): State<AppState>,
    Extension(usuario): Extension<AuthenticatedUser>,
    Json(request): Json<CreateVendaRequest>,
) -> Result<Json<ApiResponse<VendaResponse>>, AppError> {
    let controller = VendaController::new(state.pool.clone());
    let response = controller.criar(request).await?;

    if let Some(venda) = &response.data {
        state
            .auditoria
            .registrar(
                Some(usuario.email),
                "criar",
                "venda",
                Some(format!("id={} valor={}", venda.id, venda.valor)),
            )
            .await;
    }

    Ok(Json(response))
}

async fn listar_vendas(
    State(state): State<AppState>,
    Query(filtros): Query<VendaFilters>,
) -> Result<Json<Vec<VendaResponse>>, AppError> {
    let controller = VendaController::new(state.pool.clone());
    let response = controller.listar(filtros).await?;
    Ok(Json(response))
}

async fn buscar_venda(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<VendaResponse>, AppError> {
    let controller = VendaController::new(state.pool.clone());
    let response = controller.buscar_por_id(id).await?;
    Ok(Json(response))
}

async fn atualizar_venda(
    State(state): State<AppState>,
    Extension(usuario): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateVendaRequest>,
) -> Result<Json<ApiResponse<VendaResponse>>, AppError> {
    let controller = VendaController::new(state.pool.clone());
    let response = controller.atualizar(id, request).await?;

    state
        .auditoria
        .registrar(
            Some(usuario.email),
            "atualizar",
            "venda",
            Some(format!("id={}", id)),
        )
        .await;

    Ok(Json(response))
}

async fn remover_venda(
    State(state): State<AppState>,
    Extension(usuario): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = VendaController::new(state.pool.clone());
    controller.remover(id).await?;

    state
        .auditoria
        .registrar(
            Some(usuario.email),
            "remover",
            "venda",
            Some(format!("id={}", id)),
        )
        .await;

    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Venda removida com sucesso"
    })))
}
