use chrono::Local;
use sqlx::PgPool;

use crate::dto::estatisticas_dto::{ResumoVendas, VendaPorDia};
use crate::models::venda::VendaComCliente;
use crate::repositories::venda_repository::VendaRepository;
use crate::services::estatisticas_service::{self, RegistroVenda};
use crate::utils::errors::AppError;

pub struct EstatisticasController {
    repository: VendaRepository,
}

impl EstatisticasController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: VendaRepository::new(pool),
        }
    }

    pub async fn resumo(&self) -> Result<ResumoVendas, AppError> {
        let registros = self.carregar_registros().await?;
        let hoje = Local::now().date_naive();
        Ok(estatisticas_service::resumo_vendas(&registros, hoje))
    }

    pub async fn vendas_por_dia(&self) -> Result<Vec<VendaPorDia>, AppError> {
        let registros = self.carregar_registros().await?;
        Ok(estatisticas_service::vendas_por_dia(&registros))
    }

    /// Materializar todas as vendas (inclusive de clientes com soft
    /// delete: o histórico conta nas estatísticas) e converter cada
    /// timestamp para o dia calendário local uma única vez.
    async fn carregar_registros(&self) -> Result<Vec<RegistroVenda>, AppError> {
        let vendas = self.repository.list_com_cliente(None).await?;
        Ok(vendas.into_iter().map(Self::converter).collect())
    }

    fn converter(venda: VendaComCliente) -> RegistroVenda {
        RegistroVenda {
            cliente_id: venda.cliente_id,
            cliente_nome: venda.cliente_nome,
            valor: venda.valor,
            dia: venda.data.with_timezone(&Local).date_naive(),
        }
    }
}
