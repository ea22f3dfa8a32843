use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::usuario::Usuario;

// Request para registrar um usuário
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 2, max = 255))]
    pub nome: String,

    pub email: String,

    #[validate(length(min = 8, message = "A senha deve ter pelo menos 8 caracteres"))]
    pub senha: String,
}

// Login request
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub senha: String,
}

// Login response
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub token: Option<String>,
    pub message: Option<String>,
    pub usuario: Option<UsuarioResponse>,
}

impl LoginResponse {
    pub fn success(token: String, usuario: UsuarioResponse) -> Self {
        Self {
            success: true,
            token: Some(token),
            message: None,
            usuario: Some(usuario),
        }
    }
}

// Response de usuário (nunca expõe o hash de senha)
#[derive(Debug, Serialize)]
pub struct UsuarioResponse {
    pub id: Uuid,
    pub nome: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<Usuario> for UsuarioResponse {
    fn from(usuario: Usuario) -> Self {
        Self {
            id: usuario.id,
            nome: usuario.nome,
            email: usuario.email,
            created_at: usuario.created_at,
        }
    }
}
