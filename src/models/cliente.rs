//! Modelo de Cliente
//!
//! Este módulo contém o struct Cliente e seu construtor. O cliente usa
//! soft delete: deleted_at não nulo marca o registro como removido sem
//! apagar o histórico de vendas.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Cliente principal - mapeia exatamente a tabela clientes
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Cliente {
    pub id: Uuid,
    pub nome: String,
    pub email: String,
    pub nascimento: NaiveDate,
    /// Armazenado já normalizado no formato de exibição
    pub telefone: Option<String>,
    /// Armazenado apenas com dígitos
    pub cpf: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Cliente {
    pub fn new(
        nome: String,
        email: String,
        nascimento: NaiveDate,
        telefone: Option<String>,
        cpf: Option<String>,
    ) -> Self {
        let agora = Utc::now();
        Self {
            id: Uuid::new_v4(),
            nome,
            email,
            nascimento,
            telefone,
            cpf,
            created_at: agora,
            updated_at: agora,
            deleted_at: None,
        }
    }

    pub fn esta_ativo(&self) -> bool {
        self.deleted_at.is_none()
    }
}
