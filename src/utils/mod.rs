//! Utilidades do sistema
//!
//! Este módulo contém utilidades para tratamento de erros, validação,
//! JWT e o log de auditoria em memória.

pub mod audit;
pub mod errors;
pub mod jwt;
pub mod validation;
