//! Modelo de Usuario
//!
//! Usuário do sistema: autentica por senha e recebe um token JWT.
//! Mapeia exatamente a tabela usuarios.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Usuario principal - mapeia a tabela usuarios
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Usuario {
    pub id: Uuid,
    pub nome: String,
    pub email: String,
    pub senha_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Usuario {
    pub fn new(nome: String, email: String, senha_hash: String) -> Self {
        let agora = Utc::now();
        Self {
            id: Uuid::new_v4(),
            nome,
            email,
            senha_hash,
            created_at: agora,
            updated_at: agora,
        }
    }
}
