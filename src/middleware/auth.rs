//! Middleware de autenticação JWT
//!
//! Este módulo valida o token Bearer, confirma que o usuário ainda
//! existe e injeta o usuário autenticado nas extensions da request.

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::repositories::usuario_repository::UsuarioRepository;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::verificar_token;

/// Usuário autenticado injetado nas requests protegidas
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub usuario_id: Uuid,
    pub nome: String,
    pub email: String,
}

/// Middleware de autenticação JWT
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|auth_str| auth_str.to_str().ok())
        .and_then(|auth_str| auth_str.strip_prefix("Bearer "))
        .ok_or_else(|| AppError::Unauthorized("Token de autorização requerido".to_string()))?;

    let claims = verificar_token(token, &state.config)?;

    let usuario_id = Uuid::parse_str(&claims.sub)
        .map_err(|_| AppError::Unauthorized("ID de usuário inválido".to_string()))?;

    // O token pode ser válido e o usuário já não existir
    let usuario = UsuarioRepository::new(state.pool.clone())
        .find_by_id(usuario_id)
        .await?
        .ok_or_else(|| AppError::Unauthorized("Usuário não encontrado".to_string()))?;

    log::debug!("Request autenticada para {}", usuario.email);

    let authenticated_user = AuthenticatedUser {
        usuario_id: usuario.id,
        nome: usuario.nome,
        email: usuario.email,
    };

    request.extensions_mut().insert(authenticated_user);

    Ok(next.run(request).await)
}
