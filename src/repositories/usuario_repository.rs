use sqlx::PgPool;
use uuid::Uuid;

use crate::models::usuario::Usuario;
use crate::utils::errors::AppError;

pub struct UsuarioRepository {
    pool: PgPool,
}

impl UsuarioRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, usuario: &Usuario) -> Result<Usuario, AppError> {
        let result = sqlx::query_as::<_, Usuario>(
            r#"
            INSERT INTO usuarios (id, nome, email, senha_hash, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(usuario.id)
        .bind(&usuario.nome)
        .bind(&usuario.email)
        .bind(&usuario.senha_hash)
        .bind(usuario.created_at)
        .bind(usuario.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Erro criando usuário: {}", e)))?;

        Ok(result)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Usuario>, AppError> {
        let result = sqlx::query_as::<_, Usuario>("SELECT * FROM usuarios WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Erro buscando usuário: {}", e)))?;

        Ok(result)
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<Usuario>, AppError> {
        let result = sqlx::query_as::<_, Usuario>("SELECT * FROM usuarios WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Erro buscando usuário por email: {}", e)))?;

        Ok(result)
    }

    pub async fn email_exists(&self, email: &str) -> Result<bool, AppError> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM usuarios WHERE email = $1)")
                .bind(email)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| AppError::Database(format!("Erro verificando email: {}", e)))?;

        Ok(result.0)
    }
}
