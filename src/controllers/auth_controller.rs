use bcrypt::{hash, verify, DEFAULT_COST};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::config::environment::EnvironmentConfig;
use crate::dto::auth_dto::{LoginRequest, LoginResponse, RegisterRequest, UsuarioResponse};
use crate::dto::ApiResponse;
use crate::models::usuario::Usuario;
use crate::repositories::usuario_repository::UsuarioRepository;
use crate::utils::errors::AppError;
use crate::utils::jwt::gerar_token;
use crate::utils::validation::validar_email;

pub struct AuthController {
    repository: UsuarioRepository,
    config: EnvironmentConfig,
}

impl AuthController {
    pub fn new(pool: PgPool, config: EnvironmentConfig) -> Self {
        Self {
            repository: UsuarioRepository::new(pool),
            config,
        }
    }

    pub async fn register(
        &self,
        request: RegisterRequest,
    ) -> Result<ApiResponse<UsuarioResponse>, AppError> {
        request
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        if !validar_email(&request.email) {
            return Err(AppError::Validation("Email inválido".to_string()));
        }

        let email = request.email.trim().to_lowercase();

        if self.repository.email_exists(&email).await? {
            return Err(AppError::Conflict("O email já está cadastrado".to_string()));
        }

        let senha_hash = hash(&request.senha, DEFAULT_COST)
            .map_err(|e| AppError::Internal(format!("Erro gerando hash de senha: {}", e)))?;

        let usuario = Usuario::new(request.nome.trim().to_string(), email, senha_hash);
        let salvo = self.repository.create(&usuario).await?;

        Ok(ApiResponse::success_with_message(
            salvo.into(),
            "Usuário registrado com sucesso".to_string(),
        ))
    }

    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, AppError> {
        let email = request.email.trim().to_lowercase();

        let usuario = self
            .repository
            .find_by_email(&email)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Credenciais inválidas".to_string()))?;

        let senha_confere = verify(&request.senha, &usuario.senha_hash)
            .map_err(|e| AppError::Internal(format!("Erro verificando senha: {}", e)))?;

        if !senha_confere {
            return Err(AppError::Unauthorized("Credenciais inválidas".to_string()));
        }

        let token = gerar_token(usuario.id, &usuario.email, &self.config)?;

        Ok(LoginResponse::success(token, usuario.into()))
    }

    pub async fn me(&self, usuario_id: Uuid) -> Result<UsuarioResponse, AppError> {
        let usuario = self
            .repository
            .find_by_id(usuario_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Usuário não encontrado".to_string()))?;

        Ok(usuario.into())
    }
}
