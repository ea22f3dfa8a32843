//! Utilidades JWT
//!
//! Este módulo contém funções helper para emissão e verificação
//! de tokens JWT de sessão.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{config::environment::EnvironmentConfig, utils::errors::AppError};

/// Claims do token de sessão
#[derive(Debug, Serialize, Deserialize)]
pub struct JwtClaims {
    pub sub: String,   // usuario_id
    pub email: String, // email do usuário
    pub exp: usize,    // expiração (timestamp)
    pub iat: usize,    // emissão (timestamp)
}

/// Gerar token JWT para um usuário autenticado
pub fn gerar_token(
    usuario_id: Uuid,
    email: &str,
    config: &EnvironmentConfig,
) -> Result<String, AppError> {
    let agora = chrono::Utc::now();
    let expira_em = agora + chrono::Duration::seconds(config.jwt_expiration as i64);

    let claims = JwtClaims {
        sub: usuario_id.to_string(),
        email: email.to_string(),
        exp: expira_em.timestamp() as usize,
        iat: agora.timestamp() as usize,
    };

    let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_ref());

    encode(&Header::default(), &claims, &encoding_key)
        .map_err(|e| AppError::Jwt(format!("Erro gerando token: {}", e)))
}

/// Verificar e decodificar token JWT
pub fn verificar_token(token: &str, config: &EnvironmentConfig) -> Result<JwtClaims, AppError> {
    let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_ref());

    let token_data = decode::<JwtClaims>(token, &decoding_key, &Validation::default())
        .map_err(|e| AppError::Jwt(format!("Token inválido: {}", e)))?;

    Ok(token_data.claims)
}

/// Extrair token do header Authorization
pub fn extrair_token_do_header(auth_header: &str) -> Result<&str, AppError> {
    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::Jwt("Header Authorization deve começar com 'Bearer '".to_string()))?;

    if token.is_empty() {
        return Err(AppError::Jwt("Token não pode estar vazio".to_string()));
    }

    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_de_teste() -> EnvironmentConfig {
        EnvironmentConfig {
            environment: "test".to_string(),
            port: 3000,
            host: "localhost".to_string(),
            jwt_secret: "segredo-de-teste".to_string(),
            jwt_expiration: 3600,
            cors_origins: vec![],
        }
    }

    #[test]
    fn test_gerar_e_verificar_token() {
        let config = config_de_teste();
        let usuario_id = Uuid::new_v4();

        let token = gerar_token(usuario_id, "ana@exemplo.com", &config).unwrap();
        let claims = verificar_token(&token, &config).unwrap();

        assert_eq!(claims.sub, usuario_id.to_string());
        assert_eq!(claims.email, "ana@exemplo.com");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_token_com_segredo_errado() {
        let config = config_de_teste();
        let mut outra = config_de_teste();
        outra.jwt_secret = "outro-segredo".to_string();

        let token = gerar_token(Uuid::new_v4(), "ana@exemplo.com", &config).unwrap();
        assert!(verificar_token(&token, &outra).is_err());
    }

    #[test]
    fn test_extrair_token_do_header() {
        assert_eq!(extrair_token_do_header("Bearer abc.def.ghi").unwrap(), "abc.def.ghi");
        assert!(extrair_token_do_header("Token abc").is_err());
        assert!(extrair_token_do_header("Bearer ").is_err());
    }
}
