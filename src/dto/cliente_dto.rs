use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::cliente::Cliente;

/// Request para criar um cliente
#[derive(Debug, Deserialize, Validate)]
pub struct CreateClienteRequest {
    #[validate(length(min = 2, max = 255))]
    pub nome: String,

    pub email: String,

    pub nascimento: NaiveDate,

    pub telefone: Option<String>,

    pub cpf: Option<String>,
}

/// Request para atualizar um cliente existente
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateClienteRequest {
    #[validate(length(min = 2, max = 255))]
    pub nome: Option<String>,

    pub email: Option<String>,

    pub nascimento: Option<NaiveDate>,

    pub telefone: Option<String>,

    pub cpf: Option<String>,
}

/// Response de cliente para a API
#[derive(Debug, Clone, Serialize)]
pub struct ClienteResponse {
    pub id: Uuid,
    pub nome: String,
    pub email: String,
    pub nascimento: NaiveDate,
    pub telefone: Option<String>,
    pub cpf: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Cliente> for ClienteResponse {
    fn from(cliente: Cliente) -> Self {
        Self {
            id: cliente.id,
            nome: cliente.nome,
            email: cliente.email,
            nascimento: cliente.nascimento,
            telefone: cliente.telefone,
            cpf: cliente.cpf,
            created_at: cliente.created_at,
            updated_at: cliente.updated_at,
        }
    }
}

/// Response de clientes para listagens paginadas
#[derive(Debug, Serialize)]
pub struct ClienteListResponse {
    pub clientes: Vec<ClienteResponse>,
    pub total: i64,
    pub page: i64,
    pub per_page: i64,
    pub total_pages: i64,
}

/// Filtros para busca de clientes
#[derive(Debug, Clone, Deserialize)]
pub struct ClienteFilters {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    pub busca: Option<String>,
}
