//! Serviço de estatísticas de vendas
//!
//! Este módulo concentra o cálculo do dashboard: receita do dia,
//! destaques por cliente (volume, média e frequência) e agrupamento de
//! receita por dia. As funções são puras: recebem os registros já
//! materializados e o dia corrente, sem tocar em banco ou relógio.
//!
//! Critério de desempate dos destaques: os agregados são percorridos em
//! ordem crescente de cliente_id com comparação estrita, portanto o
//! menor id vence empates, independente da ordem dos registros de
//! entrada.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::dto::estatisticas_dto::{
    DestaqueFrequencia, DestaqueMedia, DestaqueVolume, ResumoVendas, VendaPorDia, SEM_DESTAQUE,
};

/// Registro de venda já reduzido ao que o agregador precisa. O dia é
/// calculado uma única vez na borda (controller), no fuso do servidor.
#[derive(Debug, Clone)]
pub struct RegistroVenda {
    pub cliente_id: Uuid,
    pub cliente_nome: String,
    pub valor: Decimal,
    pub dia: NaiveDate,
}

/// Acumulador por cliente durante a passada única
struct AgregadoCliente {
    nome: String,
    total: Decimal,
    quantidade: u32,
    dias: BTreeSet<NaiveDate>,
}

/// Calcular o resumo do dashboard: total do dia e os três destaques
pub fn resumo_vendas(registros: &[RegistroVenda], hoje: NaiveDate) -> ResumoVendas {
    let total_hoje: Decimal = registros
        .iter()
        .filter(|r| r.dia == hoje)
        .map(|r| r.valor)
        .sum();

    let mut por_cliente: BTreeMap<Uuid, AgregadoCliente> = BTreeMap::new();
    for registro in registros {
        let agregado = por_cliente
            .entry(registro.cliente_id)
            .or_insert_with(|| AgregadoCliente {
                nome: registro.cliente_nome.clone(),
                total: Decimal::ZERO,
                quantidade: 0,
                dias: BTreeSet::new(),
            });
        agregado.total += registro.valor;
        agregado.quantidade += 1;
        agregado.dias.insert(registro.dia);
    }

    let mut top_volume = DestaqueVolume {
        cliente: SEM_DESTAQUE.to_string(),
        valor: Decimal::ZERO,
    };
    let mut top_media = DestaqueMedia {
        cliente: SEM_DESTAQUE.to_string(),
        media: Decimal::ZERO,
    };
    let mut top_frequencia = DestaqueFrequencia {
        cliente: SEM_DESTAQUE.to_string(),
        dias_distintos: 0,
    };

    // BTreeMap garante ordem crescente de cliente_id
    for agregado in por_cliente.values() {
        if agregado.total > top_volume.valor {
            top_volume = DestaqueVolume {
                cliente: agregado.nome.clone(),
                valor: agregado.total,
            };
        }

        let media = agregado.total / Decimal::from(agregado.quantidade);
        if media > top_media.media {
            top_media = DestaqueMedia {
                cliente: agregado.nome.clone(),
                media,
            };
        }

        let dias_distintos = agregado.dias.len() as u32;
        if dias_distintos > top_frequencia.dias_distintos {
            top_frequencia = DestaqueFrequencia {
                cliente: agregado.nome.clone(),
                dias_distintos,
            };
        }
    }

    ResumoVendas {
        total_hoje,
        top_volume,
        top_media,
        top_frequencia,
    }
}

/// Agrupar receita por dia, em ordem crescente de data
pub fn vendas_por_dia(registros: &[RegistroVenda]) -> Vec<VendaPorDia> {
    let mut por_dia: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();
    for registro in registros {
        *por_dia.entry(registro.dia).or_insert(Decimal::ZERO) += registro.valor;
    }

    por_dia
        .into_iter()
        .map(|(dia, valor)| VendaPorDia {
            data: dia.format("%Y-%m-%d").to_string(),
            valor,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dia(ano: i32, mes: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(ano, mes, d).unwrap()
    }

    fn registro(id: u128, nome: &str, valor: i64, d: NaiveDate) -> RegistroVenda {
        RegistroVenda {
            cliente_id: Uuid::from_u128(id),
            cliente_nome: nome.to_string(),
            valor: Decimal::from(valor),
            dia: d,
        }
    }

    #[test]
    fn test_resumo_vazio_usa_sentinelas() {
        let resumo = resumo_vendas(&[], dia(2024, 3, 1));

        assert_eq!(resumo.total_hoje, Decimal::ZERO);
        assert_eq!(resumo.top_volume.cliente, SEM_DESTAQUE);
        assert_eq!(resumo.top_volume.valor, Decimal::ZERO);
        assert_eq!(resumo.top_media.cliente, SEM_DESTAQUE);
        assert_eq!(resumo.top_media.media, Decimal::ZERO);
        assert_eq!(resumo.top_frequencia.cliente, SEM_DESTAQUE);
        assert_eq!(resumo.top_frequencia.dias_distintos, 0);
    }

    #[test]
    fn test_resumo_com_dois_clientes() {
        let d1 = dia(2024, 3, 1);
        let d2 = dia(2024, 3, 2);
        let registros = vec![
            registro(1, "Ana", 100, d1),
            registro(1, "Ana", 300, d1),
            registro(2, "Bruno", 150, d2),
        ];

        let resumo = resumo_vendas(&registros, d2);

        // Hoje é d2: só a venda do Bruno conta
        assert_eq!(resumo.total_hoje, Decimal::from(150));

        // Ana: total 400, média 200; Bruno: total 150, média 150
        assert_eq!(resumo.top_volume.cliente, "Ana");
        assert_eq!(resumo.top_volume.valor, Decimal::from(400));
        assert_eq!(resumo.top_media.cliente, "Ana");
        assert_eq!(resumo.top_media.media, Decimal::from(200));

        // Ambos têm 1 dia distinto: empate fica com o menor cliente_id
        assert_eq!(resumo.top_frequencia.cliente, "Ana");
        assert_eq!(resumo.top_frequencia.dias_distintos, 1);
    }

    #[test]
    fn test_desempate_independe_da_ordem_de_entrada() {
        let d1 = dia(2024, 3, 1);
        let d2 = dia(2024, 3, 2);
        // Bruno aparece primeiro na entrada, mas Ana tem o menor id
        let registros = vec![
            registro(2, "Bruno", 100, d1),
            registro(1, "Ana", 100, d2),
        ];

        let resumo = resumo_vendas(&registros, d2);

        assert_eq!(resumo.top_volume.cliente, "Ana");
        assert_eq!(resumo.top_media.cliente, "Ana");
        assert_eq!(resumo.top_frequencia.cliente, "Ana");
    }

    #[test]
    fn test_frequencia_conta_dias_distintos() {
        let registros = vec![
            // Carla: 3 vendas em 2 dias distintos
            registro(3, "Carla", 10, dia(2024, 3, 1)),
            registro(3, "Carla", 10, dia(2024, 3, 1)),
            registro(3, "Carla", 10, dia(2024, 3, 5)),
            // Davi: 1 venda de valor alto em 1 dia
            registro(4, "Davi", 500, dia(2024, 3, 2)),
        ];

        let resumo = resumo_vendas(&registros, dia(2024, 3, 9));

        assert_eq!(resumo.top_volume.cliente, "Davi");
        assert_eq!(resumo.top_media.cliente, "Davi");
        assert_eq!(resumo.top_frequencia.cliente, "Carla");
        assert_eq!(resumo.top_frequencia.dias_distintos, 2);
        assert_eq!(resumo.total_hoje, Decimal::ZERO);
    }

    #[test]
    fn test_resumo_e_idempotente() {
        let registros = vec![
            registro(1, "Ana", 100, dia(2024, 3, 1)),
            registro(2, "Bruno", 150, dia(2024, 3, 2)),
        ];

        let primeiro = resumo_vendas(&registros, dia(2024, 3, 2));
        let segundo = resumo_vendas(&registros, dia(2024, 3, 2));

        assert_eq!(primeiro, segundo);
        assert_eq!(vendas_por_dia(&registros), vendas_por_dia(&registros));
    }

    #[test]
    fn test_vendas_por_dia_agrupa_e_ordena() {
        let registros = vec![
            registro(1, "Ana", 50, dia(2024, 3, 5)),
            registro(2, "Bruno", 70, dia(2024, 3, 1)),
            registro(1, "Ana", 30, dia(2024, 3, 5)),
            registro(2, "Bruno", 20, dia(2024, 3, 3)),
        ];

        let agrupado = vendas_por_dia(&registros);

        assert_eq!(agrupado.len(), 3);
        assert_eq!(agrupado[0].data, "2024-03-01");
        assert_eq!(agrupado[0].valor, Decimal::from(70));
        assert_eq!(agrupado[1].data, "2024-03-03");
        assert_eq!(agrupado[1].valor, Decimal::from(20));
        // Vendas do mesmo dia somam num único bucket
        assert_eq!(agrupado[2].data, "2024-03-05");
        assert_eq!(agrupado[2].valor, Decimal::from(80));
    }

    #[test]
    fn test_vendas_por_dia_vazio() {
        assert!(vendas_por_dia(&[]).is_empty());
    }
}
