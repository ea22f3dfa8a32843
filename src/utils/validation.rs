//! Utilidades de validação
//!
//! Este módulo contém as funções de validação de dados cadastrais:
//! CPF (dígitos verificadores módulo 11), email e telefone brasileiro.
//! Todas são funções puras que retornam sentinelas (bool/Option) e
//! deixam a tradução para erro HTTP a cargo dos controllers.

use lazy_static::lazy_static;
use num_traits::Zero;
use regex::Regex;

lazy_static! {
    /// Padrão geral local@dominio.tld, com ao menos um ponto no domínio
    /// e TLD de 2+ letras. Maiúsculas e minúsculas são equivalentes.
    static ref EMAIL_REGEX: Regex =
        Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,}$")
            .expect("regex de email inválida");
}

/// Validar CPF pelos dois dígitos verificadores (módulo 11)
///
/// Aceita o valor com ou sem pontuação. Rejeita sequências com todos
/// os dígitos iguais, que passariam na conta mas não são CPFs reais.
pub fn validar_cpf(valor: &str) -> bool {
    let digitos: Vec<u32> = valor.chars().filter_map(|c| c.to_digit(10)).collect();

    if digitos.len() != 11 {
        return false;
    }

    if digitos.iter().all(|&d| d == digitos[0]) {
        return false;
    }

    digito_verificador(&digitos[..9], 10) == digitos[9]
        && digito_verificador(&digitos[..10], 11) == digitos[10]
}

/// Calcular um dígito verificador: soma ponderada com pesos decrescentes
/// a partir de `peso_inicial`, resto = (soma * 10) mod 11, 10 e 11 viram 0.
fn digito_verificador(digitos: &[u32], peso_inicial: u32) -> u32 {
    let soma: u32 = digitos
        .iter()
        .zip((2..=peso_inicial).rev())
        .map(|(d, peso)| d * peso)
        .sum();

    let resto = (soma * 10) % 11;
    if resto >= 10 {
        0
    } else {
        resto
    }
}

/// Validar formato de email
pub fn validar_email(valor: &str) -> bool {
    let email = valor.trim();

    if email.is_empty() || email.contains(' ') || email.contains("..") {
        return false;
    }

    if email.starts_with('.') || email.ends_with('.') {
        return false;
    }

    // Ponto colado no @ também é rejeitado
    let Some((local, dominio)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty()
        || dominio.is_empty()
        || local.ends_with('.')
        || dominio.starts_with('.')
    {
        return false;
    }

    EMAIL_REGEX.is_match(email)
}

/// Normalizar e formatar telefone brasileiro
///
/// Remove tudo que não for dígito e descarta o prefixo de país "55"
/// quando sobram 13 dígitos. Celular (11 dígitos) vira (DD) DDDDD-DDDD,
/// fixo (10 dígitos) vira (DD) DDDD-DDDD. Qualquer outra coisa é None.
pub fn formatar_telefone(valor: &str) -> Option<String> {
    let mut digitos: String = valor.chars().filter(|c| c.is_ascii_digit()).collect();

    if digitos.len() == 13 && digitos.starts_with("55") {
        digitos = digitos[2..].to_string();
    }

    if digitos.is_empty() || digitos.chars().all(|c| c == '0') {
        return None;
    }

    match digitos.len() {
        11 => Some(format!(
            "({}) {}-{}",
            &digitos[..2],
            &digitos[2..7],
            &digitos[7..]
        )),
        10 => Some(format!(
            "({}) {}-{}",
            &digitos[..2],
            &digitos[2..6],
            &digitos[6..]
        )),
        _ => None,
    }
}

/// Validar telefone: válido quando a formatação é possível
pub fn validar_telefone(valor: &str) -> bool {
    formatar_telefone(valor).is_some()
}

/// Validar que um valor numérico seja estritamente positivo
pub fn validar_positivo<T: PartialOrd + Zero>(valor: &T) -> bool {
    *valor > T::zero()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_cpf_validos() {
        assert!(validar_cpf("52998224725"));
        assert!(validar_cpf("11144477735"));
        // Pontuação é ignorada
        assert!(validar_cpf("529.982.247-25"));
        assert!(validar_cpf("111.444.777-35"));
    }

    #[test]
    fn test_cpf_digito_corrompido() {
        // Qualquer dígito alterado de um CPF válido invalida o checksum
        let valido = "52998224725";
        for pos in 0..valido.len() {
            let mut corrompido: Vec<char> = valido.chars().collect();
            let original = corrompido[pos].to_digit(10).unwrap();
            corrompido[pos] = char::from_digit((original + 1) % 10, 10).unwrap();
            let corrompido: String = corrompido.into_iter().collect();
            assert!(!validar_cpf(&corrompido), "CPF {} deveria ser inválido", corrompido);
        }
    }

    #[test]
    fn test_cpf_digitos_repetidos() {
        for d in 0..=9 {
            let repetido = d.to_string().repeat(11);
            assert!(!validar_cpf(&repetido), "CPF {} deveria ser inválido", repetido);
        }
    }

    #[test]
    fn test_cpf_tamanho_errado() {
        assert!(!validar_cpf(""));
        assert!(!validar_cpf("5299822472"));
        assert!(!validar_cpf("529982247251"));
        assert!(!validar_cpf("abc"));
    }

    #[test]
    fn test_email_validos() {
        assert!(validar_email("a@b.co"));
        assert!(validar_email("maria.silva@reinodosbrinquedos.com.br"));
        assert!(validar_email("  com.espacos@exemplo.com  "));
        // Caixa alta não muda o resultado
        assert!(validar_email("A@B.CO"));
        assert!(validar_email("Maria.Silva@Exemplo.COM"));
    }

    #[test]
    fn test_email_invalidos() {
        assert!(!validar_email(""));
        assert!(!validar_email("   "));
        assert!(!validar_email("a..b@c.com"));
        assert!(!validar_email("a@b"));
        assert!(!validar_email(".comeca@exemplo.com"));
        assert!(!validar_email("termina.@exemplo.com"));
        assert!(!validar_email("com espaco@exemplo.com"));
        assert!(!validar_email("sem-arroba.exemplo.com"));
        assert!(!validar_email("a@b.c"));
    }

    #[test]
    fn test_telefone_celular() {
        assert_eq!(
            formatar_telefone("11999999999"),
            Some("(11) 99999-9999".to_string())
        );
        assert_eq!(
            formatar_telefone("(11) 98765-4321"),
            Some("(11) 98765-4321".to_string())
        );
    }

    #[test]
    fn test_telefone_fixo() {
        assert_eq!(
            formatar_telefone("1133334444"),
            Some("(11) 3333-4444".to_string())
        );
    }

    #[test]
    fn test_telefone_com_codigo_de_pais() {
        assert_eq!(
            formatar_telefone("5511999999999"),
            Some("(11) 99999-9999".to_string())
        );
        assert_eq!(
            formatar_telefone("+55 (11) 99999-9999"),
            Some("(11) 99999-9999".to_string())
        );
    }

    #[test]
    fn test_telefone_invalidos() {
        assert_eq!(formatar_telefone("0000000000"), None);
        assert_eq!(formatar_telefone("00000000000"), None);
        assert_eq!(formatar_telefone(""), None);
        assert_eq!(formatar_telefone("123"), None);
        assert_eq!(formatar_telefone("123456789012"), None);
        assert!(!validar_telefone("123"));
        assert!(validar_telefone("11999999999"));
    }

    #[test]
    fn test_validar_positivo() {
        assert!(validar_positivo(&Decimal::from(10)));
        assert!(!validar_positivo(&Decimal::ZERO));
        assert!(!validar_positivo(&Decimal::from(-5)));
        assert!(validar_positivo(&1i64));
        assert!(!validar_positivo(&0i64));
    }
}
