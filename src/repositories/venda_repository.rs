use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::venda::{Venda, VendaComCliente};
use crate::utils::errors::AppError;

pub struct VendaRepository {
    pool: PgPool,
}

impl VendaRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, venda: &Venda) -> Result<Venda, AppError> {
        let result = sqlx::query_as::<_, Venda>(
            r#"
            INSERT INTO vendas (id, valor, data, cliente_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(venda.id)
        .bind(venda.valor)
        .bind(venda.data)
        .bind(venda.cliente_id)
        .bind(venda.created_at)
        .bind(venda.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Erro criando venda: {}", e)))?;

        Ok(result)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Venda>, AppError> {
        let result = sqlx::query_as::<_, Venda>("SELECT * FROM vendas WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Erro buscando venda: {}", e)))?;

        Ok(result)
    }

    /// Buscar venda com o nome do cliente. O join não filtra soft
    /// delete: vendas de clientes removidos continuam consultáveis.
    pub async fn find_by_id_com_cliente(
        &self,
        id: Uuid,
    ) -> Result<Option<VendaComCliente>, AppError> {
        let result = sqlx::query_as::<_, VendaComCliente>(
            r#"
            SELECT v.id, v.valor, v.data, v.cliente_id, c.nome AS cliente_nome
            FROM vendas v
            INNER JOIN clientes c ON c.id = v.cliente_id
            WHERE v.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Erro buscando venda: {}", e)))?;

        Ok(result)
    }

    /// Listar vendas (mais recentes primeiro), com filtro opcional por
    /// cliente. Clientes com soft delete permanecem no resultado.
    pub async fn list_com_cliente(
        &self,
        cliente_id: Option<Uuid>,
    ) -> Result<Vec<VendaComCliente>, AppError> {
        let result = sqlx::query_as::<_, VendaComCliente>(
            r#"
            SELECT v.id, v.valor, v.data, v.cliente_id, c.nome AS cliente_nome
            FROM vendas v
            INNER JOIN clientes c ON c.id = v.cliente_id
            WHERE ($1::uuid IS NULL OR v.cliente_id = $1)
            ORDER BY v.data DESC
            "#,
        )
        .bind(cliente_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Erro listando vendas: {}", e)))?;

        Ok(result)
    }

    pub async fn update(&self, venda: &Venda) -> Result<Venda, AppError> {
        let result = sqlx::query_as::<_, Venda>(
            r#"
            UPDATE vendas
            SET valor = $2, data = $3, updated_at = $4
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(venda.id)
        .bind(venda.valor)
        .bind(venda.data)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Erro atualizando venda: {}", e)))?;

        Ok(result)
    }

    pub async fn delete(&self, id: Uuid) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM vendas WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Erro removendo venda: {}", e)))?;

        Ok(result.rows_affected())
    }
}
