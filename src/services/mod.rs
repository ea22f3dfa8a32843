//! Services module
//!
//! Este módulo contém a lógica de negócio pura da aplicação,
//! separada de banco e HTTP para ser testável isoladamente.

pub mod estatisticas_service;
