//! Authentication and user profile DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::{NewUser, User};
use crate::utils::date::format_timestamp;
use crate::utils::jwt::TokenPair;
use crate::utils::validate::not_blank;

/// Register request payload
#[derive(Debug, Default, Deserialize, Serialize, ToSchema, Validate)]
#[serde(default)]
pub struct RegisterRequest {
    #[validate(custom(function = "not_blank", message = "nome should not be empty"))]
    #[schema(example = "Ana Souza")]
    pub nome: String,
    #[validate(email(message = "email must be an email"))]
    #[schema(example = "ana@empresa.com.br", format = "email")]
    pub email: String,
    /// Plain text, hashed before storage
    #[validate(length(min = 6, max = 64, message = "senha must be between 6 and 64 characters"))]
    #[schema(example = "senha123", format = "password", min_length = 6, max_length = 64)]
    pub senha: String,
}

impl RegisterRequest {
    /// `senha_hash` replaces the plain text password.
    pub fn into_new_user(self, senha_hash: String) -> NewUser {
        NewUser {
            nome: self.nome,
            email: self.email.to_lowercase(),
            senha: senha_hash,
        }
    }
}

/// Login request payload
#[derive(Debug, Default, Deserialize, Serialize, ToSchema, Validate)]
#[serde(default)]
pub struct LoginRequest {
    #[validate(email(message = "email must be an email"))]
    #[schema(example = "ana@empresa.com.br", format = "email")]
    pub email: String,
    #[validate(custom(function = "not_blank", message = "senha should not be empty"))]
    #[schema(example = "senha123", format = "password")]
    pub senha: String,
}

/// Refresh token request payload
#[derive(Debug, Default, Deserialize, Serialize, ToSchema, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct RefreshTokenRequest {
    #[validate(custom(function = "not_blank", message = "refreshToken should not be empty"))]
    #[schema(example = "eyJ0eXAiOiJKV1QiLCJhbGc...")]
    pub refresh_token: String,
}

/// Public user profile; the password hash never leaves the service.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Ana Souza")]
    pub nome: String,
    #[schema(example = "ana@empresa.com.br")]
    pub email: String,
    pub criado_em: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            nome: user.nome,
            email: user.email,
            criado_em: format_timestamp(&user.criado_em),
        }
    }
}

/// Login/register response with user info and tokens
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub user: UserResponse,
    #[schema(example = "eyJ0eXAiOiJKV1QiLCJhbGc...")]
    pub access_token: String,
    #[schema(example = "eyJ0eXAiOiJKV1QiLCJhbGc...")]
    pub refresh_token: String,
}

impl AuthResponse {
    pub fn new(user: User, tokens: TokenPair) -> Self {
        Self {
            user: user.into(),
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token,
        }
    }
}

/// Refresh token response with new tokens
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: String,
}

impl From<TokenPair> for TokenResponse {
    fn from(tokens: TokenPair) -> Self {
        Self {
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token,
        }
    }
}
