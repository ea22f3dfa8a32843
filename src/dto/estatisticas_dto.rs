use rust_decimal::Decimal;
use serde::Serialize;

/// Sentinela usada quando nenhum cliente tem vendas
pub const SEM_DESTAQUE: &str = "Nenhum";

/// Cliente com maior receita total
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DestaqueVolume {
    pub cliente: String,
    pub valor: Decimal,
}

/// Cliente com maior valor médio por venda
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DestaqueMedia {
    pub cliente: String,
    pub media: Decimal,
}

/// Cliente com mais dias distintos com venda
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DestaqueFrequencia {
    pub cliente: String,
    pub dias_distintos: u32,
}

/// Resumo de vendas do dashboard
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResumoVendas {
    pub total_hoje: Decimal,
    pub top_volume: DestaqueVolume,
    pub top_media: DestaqueMedia,
    pub top_frequencia: DestaqueFrequencia,
}

/// Receita agregada de um dia
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VendaPorDia {
    pub data: String,
    pub valor: Decimal,
}
