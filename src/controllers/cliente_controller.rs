use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::cliente_dto::{
    ClienteFilters, ClienteListResponse, ClienteResponse, CreateClienteRequest,
    UpdateClienteRequest,
};
use crate::dto::ApiResponse;
use crate::models::cliente::Cliente;
use crate::repositories::cliente_repository::ClienteRepository;
use crate::utils::errors::AppError;
use crate::utils::validation::{formatar_telefone, validar_cpf, validar_email};

const PER_PAGE_PADRAO: i64 = 10;
const PER_PAGE_MAXIMO: i64 = 100;

pub struct ClienteController {
    repository: ClienteRepository,
}

impl ClienteController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: ClienteRepository::new(pool),
        }
    }

    pub async fn criar(
        &self,
        request: CreateClienteRequest,
    ) -> Result<ApiResponse<ClienteResponse>, AppError> {
        request
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        if !validar_email(&request.email) {
            return Err(AppError::Validation("Email inválido".to_string()));
        }
        let email = request.email.trim().to_lowercase();

        if self.repository.email_exists(&email, None).await? {
            return Err(AppError::Conflict(
                "Já existe um cliente ativo com este email".to_string(),
            ));
        }

        let cpf = Self::normalizar_cpf(request.cpf.as_deref())?;
        if let Some(ref cpf) = cpf {
            if self.repository.cpf_exists(cpf, None).await? {
                return Err(AppError::Conflict(
                    "Já existe um cliente ativo com este CPF".to_string(),
                ));
            }
        }

        let telefone = Self::normalizar_telefone(request.telefone.as_deref())?;

        let cliente = Cliente::new(
            request.nome.trim().to_string(),
            email,
            request.nascimento,
            telefone,
            cpf,
        );
        let salvo = self.repository.create(&cliente).await?;

        Ok(ApiResponse::success_with_message(
            salvo.into(),
            "Cliente cadastrado com sucesso".to_string(),
        ))
    }

    pub async fn buscar_por_id(&self, id: Uuid) -> Result<ClienteResponse, AppError> {
        let cliente = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Cliente não encontrado".to_string()))?;

        Ok(cliente.into())
    }

    pub async fn listar(&self, filtros: ClienteFilters) -> Result<ClienteListResponse, AppError> {
        let page = filtros.page.unwrap_or(1).max(1);
        let per_page = filtros
            .per_page
            .unwrap_or(PER_PAGE_PADRAO)
            .clamp(1, PER_PAGE_MAXIMO);
        let offset = (page - 1) * per_page;

        let busca = filtros
            .busca
            .as_deref()
            .map(str::trim)
            .filter(|b| !b.is_empty());

        let total = self.repository.count(busca).await?;
        let clientes = self.repository.list(busca, per_page, offset).await?;

        let total_pages = if total == 0 {
            0
        } else {
            (total + per_page - 1) / per_page
        };

        Ok(ClienteListResponse {
            clientes: clientes.into_iter().map(ClienteResponse::from).collect(),
            total,
            page,
            per_page,
            total_pages,
        })
    }

    pub async fn atualizar(
        &self,
        id: Uuid,
        request: UpdateClienteRequest,
    ) -> Result<ApiResponse<ClienteResponse>, AppError> {
        request
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let mut cliente = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Cliente não encontrado".to_string()))?;

        if let Some(nome) = request.nome {
            cliente.nome = nome.trim().to_string();
        }

        if let Some(email) = request.email {
            if !validar_email(&email) {
                return Err(AppError::Validation("Email inválido".to_string()));
            }
            let email = email.trim().to_lowercase();
            if self.repository.email_exists(&email, Some(id)).await? {
                return Err(AppError::Conflict(
                    "Já existe um cliente ativo com este email".to_string(),
                ));
            }
            cliente.email = email;
        }

        if let Some(nascimento) = request.nascimento {
            cliente.nascimento = nascimento;
        }

        // Campos opcionais: string vazia limpa o valor
        if let Some(telefone) = request.telefone {
            cliente.telefone = Self::normalizar_telefone(Some(&telefone))?;
        }

        if let Some(cpf) = request.cpf {
            let cpf = Self::normalizar_cpf(Some(&cpf))?;
            if let Some(ref cpf) = cpf {
                if self.repository.cpf_exists(cpf, Some(id)).await? {
                    return Err(AppError::Conflict(
                        "Já existe um cliente ativo com este CPF".to_string(),
                    ));
                }
            }
            cliente.cpf = cpf;
        }

        let salvo = self.repository.update(&cliente).await?;

        Ok(ApiResponse::success_with_message(
            salvo.into(),
            "Cliente atualizado com sucesso".to_string(),
        ))
    }

    pub async fn remover(&self, id: Uuid) -> Result<(), AppError> {
        let afetados = self.repository.soft_delete(id).await?;
        if afetados == 0 {
            return Err(AppError::NotFound("Cliente não encontrado".to_string()));
        }
        Ok(())
    }

    /// Validar e reduzir o CPF aos dígitos. Vazio vira None.
    fn normalizar_cpf(cpf: Option<&str>) -> Result<Option<String>, AppError> {
        match cpf.map(str::trim) {
            None => Ok(None),
            Some("") => Ok(None),
            Some(bruto) => {
                if !validar_cpf(bruto) {
                    return Err(AppError::Validation("CPF inválido".to_string()));
                }
                Ok(Some(bruto.chars().filter(|c| c.is_ascii_digit()).collect()))
            }
        }
    }

    /// Validar e formatar o telefone para exibição. Vazio vira None.
    fn normalizar_telefone(telefone: Option<&str>) -> Result<Option<String>, AppError> {
        match telefone.map(str::trim) {
            None => Ok(None),
            Some("") => Ok(None),
            Some(bruto) => formatar_telefone(bruto)
                .map(Some)
                .ok_or_else(|| AppError::Validation("Telefone inválido".to_string())),
        }
    }
}
