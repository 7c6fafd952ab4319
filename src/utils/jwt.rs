//! HS256 access and refresh tokens.

use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::config::JwtConfig;
use crate::error::{AppError, AppResult};
use crate::models::User;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    Access,
    Refresh,
}

/// Claims carried by both token kinds; `sub` is the user id.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String,
    pub email: String,
    pub nome: String,
    pub token_type: TokenType,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    pub fn new(user: &User, token_type: TokenType, expiration_hours: i64) -> Self {
        let now = Utc::now();
        Self {
            sub: user.id.to_string(),
            email: user.email.clone(),
            nome: user.nome.clone(),
            token_type,
            iat: now.timestamp(),
            exp: (now + Duration::hours(expiration_hours)).timestamp(),
        }
    }

    /// Numeric user id from `sub`.
    pub fn user_id(&self) -> AppResult<i32> {
        self.sub
            .parse()
            .map_err(|_| AppError::unauthorized("Token inválido."))
    }
}

/// Access and refresh token issued together.
#[derive(Debug, Clone)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

pub fn generate_token(
    user: &User,
    token_type: TokenType,
    secret: &str,
    expiration_hours: i64,
) -> AppResult<String> {
    let claims = Claims::new(user, token_type, expiration_hours);

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal {
        source: anyhow::anyhow!("Failed to generate JWT token: {}", e),
    })
}

pub fn generate_token_pair(user: &User, config: &JwtConfig) -> AppResult<TokenPair> {
    Ok(TokenPair {
        access_token: generate_token(
            user,
            TokenType::Access,
            &config.secret,
            config.access_token_expiration,
        )?,
        refresh_token: generate_token(
            user,
            TokenType::Refresh,
            &config.secret,
            config.refresh_token_expiration,
        )?,
    })
}

/// Decodes `token` and checks its signature, expiry and kind.
pub fn validate_token(token: &str, secret: &str, expected: TokenType) -> AppResult<Claims> {
    let claims = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        ErrorKind::ExpiredSignature => AppError::unauthorized("Token expirado."),
        _ => {
            tracing::debug!(error = %e, "rejected bearer token");
            AppError::unauthorized("Token inválido.")
        }
    })?;

    if claims.token_type != expected {
        return Err(AppError::unauthorized("Token inválido."));
    }

    Ok(claims)
}

pub fn validate_access_token(token: &str, secret: &str) -> AppResult<Claims> {
    validate_token(token, secret, TokenType::Access)
}

pub fn validate_refresh_token(token: &str, secret: &str) -> AppResult<Claims> {
    validate_token(token, secret, TokenType::Refresh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    const TEST_SECRET: &str = "test_secret_key_for_jwt_testing";

    fn user() -> User {
        let now = Utc::now().naive_utc();
        User {
            id: 7,
            nome: "Ana Souza".to_string(),
            email: "ana@empresa.com.br".to_string(),
            senha: "hash".to_string(),
            criado_em: now,
            atualizado_em: now,
        }
    }

    fn config() -> JwtConfig {
        JwtConfig {
            secret: TEST_SECRET.to_string(),
            access_token_expiration: 1,
            refresh_token_expiration: 168,
        }
    }

    #[test]
    fn test_token_pair_round_trip() {
        let pair = generate_token_pair(&user(), &config()).unwrap();

        let access = validate_access_token(&pair.access_token, TEST_SECRET).unwrap();
        assert_eq!(access.user_id().unwrap(), 7);
        assert_eq!(access.nome, "Ana Souza");
        assert_eq!(access.token_type, TokenType::Access);

        let refresh = validate_refresh_token(&pair.refresh_token, TEST_SECRET).unwrap();
        assert_eq!(refresh.token_type, TokenType::Refresh);
    }

    #[test]
    fn test_refresh_token_is_not_an_access_token() {
        let pair = generate_token_pair(&user(), &config()).unwrap();

        let result = validate_access_token(&pair.refresh_token, TEST_SECRET);
        assert!(matches!(result, Err(AppError::Unauthorized { .. })));
    }

    #[test]
    fn test_wrong_secret() {
        let token = generate_token(&user(), TokenType::Access, TEST_SECRET, 1).unwrap();

        let result = validate_access_token(&token, "another_secret");
        assert!(matches!(result, Err(AppError::Unauthorized { .. })));
    }

    #[test]
    fn test_expired_token() {
        let token = generate_token(&user(), TokenType::Access, TEST_SECRET, -2).unwrap();

        match validate_access_token(&token, TEST_SECRET) {
            Err(AppError::Unauthorized { message }) => assert_eq!(message, "Token expirado."),
            other => panic!("Expected Unauthorized, got: {:?}", other),
        }
    }

    #[test]
    fn test_garbage_token() {
        let result = validate_access_token("not.a.token", TEST_SECRET);
        assert!(matches!(result, Err(AppError::Unauthorized { .. })));
    }
}
