//! Modelo de Venda
//!
//! Uma venda pertence a exatamente um cliente. Vendas não usam soft
//! delete: a remoção é definitiva.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Venda principal - mapeia exatamente a tabela vendas
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Venda {
    pub id: Uuid,
    pub valor: Decimal,
    pub data: DateTime<Utc>,
    pub cliente_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Venda {
    pub fn new(valor: Decimal, data: DateTime<Utc>, cliente_id: Uuid) -> Self {
        let agora = Utc::now();
        Self {
            id: Uuid::new_v4(),
            valor,
            data,
            cliente_id,
            created_at: agora,
            updated_at: agora,
        }
    }
}

/// Venda com o nome do cliente, resultado do join usado nas listagens
/// e no cálculo de estatísticas
#[derive(Debug, Clone, FromRow)]
pub struct VendaComCliente {
    pub id: Uuid,
    pub valor: Decimal,
    pub data: DateTime<Utc>,
    pub cliente_id: Uuid,
    pub cliente_nome: String,
}
