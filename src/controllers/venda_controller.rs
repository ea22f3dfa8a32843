use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::venda_dto::{CreateVendaRequest, UpdateVendaRequest, VendaFilters, VendaResponse};
use crate::dto::ApiResponse;
use crate::models::venda::Venda;
use crate::repositories::cliente_repository::ClienteRepository;
use crate::repositories::venda_repository::VendaRepository;
use crate::utils::errors::AppError;
use crate::utils::validation::validar_positivo;

pub struct VendaController {
    repository: VendaRepository,
    cliente_repository: ClienteRepository,
}

impl VendaController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: VendaRepository::new(pool.clone()),
            cliente_repository: ClienteRepository::new(pool),
        }
    }

    pub async fn criar(
        &self,
        request: CreateVendaRequest,
    ) -> Result<ApiResponse<VendaResponse>, AppError> {
        if !validar_positivo(&request.valor) {
            return Err(AppError::Validation(
                "O valor da venda deve ser positivo".to_string(),
            ));
        }

        // A venda exige um cliente ativo; o histórico de clientes
        // removidos permanece, mas não recebe vendas novas
        let cliente = self
            .cliente_repository
            .find_by_id(request.cliente_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Cliente não encontrado".to_string()))?;

        let data = request.data.unwrap_or_else(Utc::now);
        let venda = Venda::new(request.valor, data, cliente.id);
        let salva = self.repository.create(&venda).await?;

        let response = VendaResponse {
            id: salva.id,
            valor: salva.valor,
            data: salva.data,
            cliente_id: salva.cliente_id,
            cliente_nome: cliente.nome,
        };

        Ok(ApiResponse::success_with_message(
            response,
            "Venda registrada com sucesso".to_string(),
        ))
    }

    pub async fn buscar_por_id(&self, id: Uuid) -> Result<VendaResponse, AppError> {
        let venda = self
            .repository
            .find_by_id_com_cliente(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Venda não encontrada".to_string()))?;

        Ok(venda.into())
    }

    pub async fn listar(&self, filtros: VendaFilters) -> Result<Vec<VendaResponse>, AppError> {
        let vendas = self.repository.list_com_cliente(filtros.cliente_id).await?;
        Ok(vendas.into_iter().map(VendaResponse::from).collect())
    }

    pub async fn atualizar(
        &self,
        id: Uuid,
        request: UpdateVendaRequest,
    ) -> Result<ApiResponse<VendaResponse>, AppError> {
        let mut venda = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Venda não encontrada".to_string()))?;

        if let Some(valor) = request.valor {
            if !validar_positivo(&valor) {
                return Err(AppError::Validation(
                    "O valor da venda deve ser positivo".to_string(),
                ));
            }
            venda.valor = valor;
        }

        if let Some(data) = request.data {
            venda.data = data;
        }

        self.repository.update(&venda).await?;

        let atualizada = self
            .repository
            .find_by_id_com_cliente(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Venda não encontrada".to_string()))?;

        Ok(ApiResponse::success_with_message(
            atualizada.into(),
            "Venda atualizada com sucesso".to_string(),
        ))
    }

    pub async fn remover(&self, id: Uuid) -> Result<(), AppError> {
        let afetados = self.repository.delete(id).await?;
        if afetados == 0 {
            return Err(AppError::NotFound("Venda não encontrada".to_string()));
        }
        Ok(())
    }
}
