use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::venda::VendaComCliente;

/// Request para registrar uma venda
#[derive(Debug, Deserialize)]
pub struct CreateVendaRequest {
    pub valor: Decimal,
    /// Quando ausente, a venda é registrada com o horário atual
    pub data: Option<DateTime<Utc>>,
    pub cliente_id: Uuid,
}

/// Request para atualizar uma venda existente
#[derive(Debug, Deserialize)]
pub struct UpdateVendaRequest {
    pub valor: Option<Decimal>,
    pub data: Option<DateTime<Utc>>,
}

/// Response de venda para a API
#[derive(Debug, Clone, Serialize)]
pub struct VendaResponse {
    pub id: Uuid,
    pub valor: Decimal,
    pub data: DateTime<Utc>,
    pub cliente_id: Uuid,
    pub cliente_nome: String,
}

impl From<VendaComCliente> for VendaResponse {
    fn from(venda: VendaComCliente) -> Self {
        Self {
            id: venda.id,
            valor: venda.valor,
            data: venda.data,
            cliente_id: venda.cliente_id,
            cliente_nome: venda.cliente_nome,
        }
    }
}

/// Filtros para listagem de vendas
#[derive(Debug, Clone, Deserialize)]
pub struct VendaFilters {
    pub cliente_id: Option<Uuid>,
}
