//! Log de auditoria em memória
//!
//! Este módulo mantém um ring buffer limitado com as últimas operações
//! de escrita da API. É injetado via AppState e serve apenas para
//! observabilidade: nenhuma regra de negócio depende dele.

use std::collections::VecDeque;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::RwLock;

/// Capacidade padrão do buffer: entradas mais antigas são descartadas
pub const CAPACIDADE_PADRAO: usize = 1000;

/// Uma entrada do log de auditoria
#[derive(Debug, Clone, Serialize)]
pub struct RegistroAuditoria {
    pub quando: DateTime<Utc>,
    pub usuario: Option<String>,
    pub acao: String,
    pub recurso: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detalhe: Option<String>,
}

/// Ring buffer de auditoria compartilhado entre handlers
#[derive(Clone)]
pub struct LogAuditoria {
    entradas: Arc<RwLock<VecDeque<RegistroAuditoria>>>,
    capacidade: usize,
}

impl LogAuditoria {
    pub fn new(capacidade: usize) -> Self {
        Self {
            entradas: Arc::new(RwLock::new(VecDeque::with_capacity(capacidade))),
            capacidade,
        }
    }

    /// Registrar uma operação. Quando o buffer enche, a entrada mais
    /// antiga é removida.
    pub async fn registrar(
        &self,
        usuario: Option<String>,
        acao: &str,
        recurso: &str,
        detalhe: Option<String>,
    ) {
        let registro = RegistroAuditoria {
            quando: Utc::now(),
            usuario,
            acao: acao.to_string(),
            recurso: recurso.to_string(),
            detalhe,
        };

        let mut entradas = self.entradas.write().await;
        if entradas.len() == self.capacidade {
            entradas.pop_front();
        }
        entradas.push_back(registro);
    }

    /// Listar as entradas mais recentes primeiro, até `limite`
    pub async fn recentes(&self, limite: usize) -> Vec<RegistroAuditoria> {
        let entradas = self.entradas.read().await;
        entradas.iter().rev().take(limite).cloned().collect()
    }

    /// Quantidade de entradas retidas no momento
    pub async fn tamanho(&self) -> usize {
        self.entradas.read().await.len()
    }
}

impl Default for LogAuditoria {
    fn default() -> Self {
        Self::new(CAPACIDADE_PADRAO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_registrar_e_listar() {
        let log = LogAuditoria::new(10);
        log.registrar(Some("ana@exemplo.com".to_string()), "criar", "cliente", None)
            .await;
        log.registrar(None, "remover", "venda", Some("id=123".to_string()))
            .await;

        let recentes = log.recentes(10).await;
        assert_eq!(recentes.len(), 2);
        // Mais recente primeiro
        assert_eq!(recentes[0].acao, "remover");
        assert_eq!(recentes[1].acao, "criar");
    }

    #[tokio::test]
    async fn test_capacidade_descarta_mais_antigas() {
        let log = LogAuditoria::new(3);
        for i in 0..5 {
            log.registrar(None, &format!("acao-{}", i), "cliente", None).await;
        }

        assert_eq!(log.tamanho().await, 3);
        let recentes = log.recentes(10).await;
        assert_eq!(recentes[0].acao, "acao-4");
        assert_eq!(recentes[2].acao, "acao-2");
    }

    #[tokio::test]
    async fn test_limite_de_listagem() {
        let log = LogAuditoria::new(10);
        for i in 0..8 {
            log.registrar(None, &format!("acao-{}", i), "venda", None).await;
        }

        assert_eq!(log.recentes(3).await.len(), 3);
    }
}
