use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::cliente::Cliente;
use crate::utils::errors::AppError;

pub struct ClienteRepository {
    pool: PgPool,
}

impl ClienteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, cliente: &Cliente) -> Result<Cliente, AppError> {
        let result = sqlx::query_as::<_, Cliente>(
            r#"
            INSERT INTO clientes (id, nome, email, nascimento, telefone, cpf, created_at, updated_at, deleted_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, NULL)
            RETURNING *
            "#,
        )
        .bind(cliente.id)
        .bind(&cliente.nome)
        .bind(&cliente.email)
        .bind(cliente.nascimento)
        .bind(&cliente.telefone)
        .bind(&cliente.cpf)
        .bind(cliente.created_at)
        .bind(cliente.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Erro criando cliente: {}", e)))?;

        Ok(result)
    }

    /// Buscar cliente ativo por id. Clientes com soft delete não aparecem.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Cliente>, AppError> {
        let result = sqlx::query_as::<_, Cliente>(
            "SELECT * FROM clientes WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Erro buscando cliente: {}", e)))?;

        Ok(result)
    }

    /// Listagem paginada de clientes ativos, com busca opcional por
    /// nome ou email.
    pub async fn list(
        &self,
        busca: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Cliente>, AppError> {
        let padrao = busca.map(|b| format!("%{}%", b));

        let result = sqlx::query_as::<_, Cliente>(
            r#"
            SELECT * FROM clientes
            WHERE deleted_at IS NULL
            AND ($1::text IS NULL OR nome ILIKE $1 OR email ILIKE $1)
            ORDER BY created_at DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(&padrao)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Erro listando clientes: {}", e)))?;

        Ok(result)
    }

    pub async fn count(&self, busca: Option<&str>) -> Result<i64, AppError> {
        let padrao = busca.map(|b| format!("%{}%", b));

        let result: (i64,) = sqlx::query_as(
            r#"
            SELECT COUNT(*) FROM clientes
            WHERE deleted_at IS NULL
            AND ($1::text IS NULL OR nome ILIKE $1 OR email ILIKE $1)
            "#,
        )
        .bind(&padrao)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Erro contando clientes: {}", e)))?;

        Ok(result.0)
    }

    /// Unicidade de email entre clientes ativos, com exclusão opcional
    /// do próprio registro (caso de update).
    pub async fn email_exists(
        &self,
        email: &str,
        excluir_id: Option<Uuid>,
    ) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM clientes
                WHERE email = $1 AND deleted_at IS NULL
                AND ($2::uuid IS NULL OR id <> $2)
            )
            "#,
        )
        .bind(email)
        .bind(excluir_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Erro verificando email: {}", e)))?;

        Ok(result.0)
    }

    pub async fn cpf_exists(&self, cpf: &str, excluir_id: Option<Uuid>) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM clientes
                WHERE cpf = $1 AND deleted_at IS NULL
                AND ($2::uuid IS NULL OR id <> $2)
            )
            "#,
        )
        .bind(cpf)
        .bind(excluir_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Erro verificando CPF: {}", e)))?;

        Ok(result.0)
    }

    pub async fn update(&self, cliente: &Cliente) -> Result<Cliente, AppError> {
        let result = sqlx::query_as::<_, Cliente>(
            r#"
            UPDATE clientes
            SET nome = $2, email = $3, nascimento = $4, telefone = $5, cpf = $6, updated_at = $7
            WHERE id = $1 AND deleted_at IS NULL
            RETURNING *
            "#,
        )
        .bind(cliente.id)
        .bind(&cliente.nome)
        .bind(&cliente.email)
        .bind(cliente.nascimento)
        .bind(&cliente.telefone)
        .bind(&cliente.cpf)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Erro atualizando cliente: {}", e)))?;

        Ok(result)
    }

    /// Soft delete: marca deleted_at sem apagar o histórico de vendas.
    /// Retorna quantas linhas foram afetadas (0 quando já removido).
    pub async fn soft_delete(&self, id: Uuid) -> Result<u64, AppError> {
        let result =
            sqlx::query("UPDATE clientes SET deleted_at = $2 WHERE id = $1 AND deleted_at IS NULL")
                .bind(id)
                .bind(Utc::now())
                .execute(&self.pool)
                .await
                .map_err(|e| AppError::Database(format!("Erro removendo cliente: {}", e)))?;

        Ok(result.rows_affected())
    }
}
