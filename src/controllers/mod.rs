//! Controllers da API
//!
//! Cada controller valida a entrada, aplica as regras de unicidade e
//! delega a persistência ao repositório correspondente.

pub mod auth_controller;
pub mod cliente_controller;
pub mod estatisticas_controller;
pub mod venda_controller;
