use axum::{
    extract::State,
    routing::post,
    Extension, Json, Router,
};

use crate::controllers::auth_controller::AuthController;
use crate::dto::auth_dto::{LoginRequest, LoginResponse, RegisterRequest, UsuarioResponse};
use crate::dto::ApiResponse;
use crate::middleware::auth::AuthenticatedUser;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_auth_router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<Json<ApiResponse<UsuarioResponse>>, AppError> {
    let controller = AuthController::new(state.pool.clone(), state.config.clone());
    let response = controller.register(request).await?;

    if let Some(usuario) = &response.data {
        state
            .auditoria
            .registrar(Some(usuario.email.clone()), "registrar", "usuario", None)
            .await;
    }

    Ok(Json(response))
}

async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let controller = AuthController::new(state.pool.clone(), state.config.clone());
    let response = controller.login(request).await?;

    if let Some(usuario) = &response.usuario {
        state
            .auditoria
            .registrar(Some(usuario.email.clone()), "login", "usuario", None)
            .await;
    }

    Ok(Json(response))
}

/// GET /api/auth/me - protegido, registrado junto das rotas autenticadas
pub async fn me(
    State(state): State<AppState>,
    Extension(usuario): Extension<AuthenticatedUser>,
) -> Result<Json<UsuarioResponse>, AppError> {
    let controller = AuthController::new(state.pool.clone(), state.config.clone());
    let response = controller.me(usuario.usuario_id).await?;
    Ok(Json(response))
}
