use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post, put},
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::controllers::cliente_controller::ClienteController;
use crate::dto::cliente_dto::{
    ClienteFilters, ClienteListResponse, ClienteResponse, CreateClienteRequest,
    UpdateClienteRequest,
};
use crate::dto::ApiResponse;
use crate::middleware::auth::AuthenticatedUser;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_cliente_router() -> Router<AppState> {
    Router::new()
        .route("/", post(criar_cliente))
        .route("/", get(listar_clientes))
        .route("/:id", get(buscar_cliente))
        .route("/:id", put(atualizar_cliente))
        .route("/:id", delete(remover_cliente))
}

async fn criar_cliente(
    State(state): State<AppState>,
    Extension(usuario): Extension<AuthenticatedUser>,
    Json(request): Json<CreateClienteRequest>,
) -> Result<Json<ApiResponse<ClienteResponse>>, AppError> {
    let controller = ClienteController::new(state.pool.clone());
    let response = controller.criar(request).await?;

    if let Some(cliente) = &response.data {
        state
            .auditoria
            .registrar(
                Some(usuario.email),
                "criar",
                "cliente",
                Some(format!("id={}", cliente.id)),
            )
            .await;
    }

    Ok(Json(response))
}

async fn listar_clientes(
    State(state): State<AppState>,
    Query(filtros): Query<ClienteFilters>,
) -> Result<Json<ClienteListResponse>, AppError> {
    let controller = ClienteController::new(state.pool.clone());
    let response = controller.listar(filtros).await?;
    Ok(Json(response))
}

async fn buscar_cliente(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ClienteResponse>, AppError> {
    let controller = ClienteController::new(state.pool.clone());
    let response = controller.buscar_por_id(id).await?;
    Ok(Json(response))
}

async fn atualizar_cliente(
    State(state): State<AppState>,
    Extension(usuario): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateClienteRequest>,
) -> Result<Json<ApiResponse<ClienteResponse>>, AppError> {
    let controller = ClienteController::new(state.pool.clone());
    let response = controller.atualizar(id, request).await?;

    state
        .auditoria
        .registrar(
            Some(usuario.email),
            "atualizar",
            "cliente",
            Some(format!("id={}", id)),
        )
        .await;

    Ok(Json(response))
}

async fn remover_cliente(
    State(state): State<AppState>,
    Extension(usuario): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = ClienteController::new(state.pool.clone());
    controller.remover(id).await?;

    state
        .auditoria
        .registrar(
            Some(usuario.email),
            "remover",
            "cliente",
            Some(format!("id={}", id)),
        )
        .await;

    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Cliente removido com sucesso"
    })))
}
