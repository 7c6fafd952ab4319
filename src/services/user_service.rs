//! User service: registration, credential checks and token issuing.

use std::sync::Arc;

use crate::api::dto::{LoginRequest, RegisterRequest};
use crate::config::JwtConfig;
use crate::error::{AppError, AppResult};
use crate::models::User;
use crate::repositories::UserRepository;
use crate::utils::jwt::{TokenPair, generate_token_pair, validate_refresh_token};
use crate::utils::password::{hash_password, verify_password};

const INVALID_CREDENTIALS: &str = "Credenciais inválidas.";

/// Wraps the `UserRepository` together with the JWT settings used to sign tokens.
#[derive(Clone)]
pub struct UserService {
    users: Arc<dyn UserRepository>,
    jwt_config: JwtConfig,
}

impl UserService {
    pub fn new(users: Arc<dyn UserRepository>, jwt_config: JwtConfig) -> Self {
        Self { users, jwt_config }
    }

    /// Creates an account and signs the user in.
    ///
    /// # Errors
    /// * `Duplicate` - the email is already registered
    pub async fn register(&self, payload: RegisterRequest) -> AppResult<(User, TokenPair)> {
        let email = payload.email.to_lowercase();
        if self.users.find_by_email(&email).await?.is_some() {
            return Err(AppError::Duplicate {
                entity: "users".to_string(),
                field: "email".to_string(),
                value: email,
            });
        }

        let senha_hash = hash_password(&payload.senha)?;
        let user = self.users.create(payload.into_new_user(senha_hash)).await?;
        tracing::info!(user_id = user.id, "user registered");

        let tokens = generate_token_pair(&user, &self.jwt_config)?;
        Ok((user, tokens))
    }

    /// Checks email and password. Unknown email and wrong password fail the
    /// same way.
    pub async fn login(&self, payload: LoginRequest) -> AppResult<(User, TokenPair)> {
        let user = self
            .users
            .find_by_email(&payload.email.to_lowercase())
            .await?
            .ok_or_else(|| AppError::unauthorized(INVALID_CREDENTIALS))?;

        if !verify_password(&payload.senha, &user.senha)? {
            tracing::warn!(user_id = user.id, "login with wrong password");
            return Err(AppError::unauthorized(INVALID_CREDENTIALS));
        }

        let tokens = generate_token_pair(&user, &self.jwt_config)?;
        Ok((user, tokens))
    }

    /// Exchanges a refresh token for a new pair, provided the user still exists.
    pub async fn refresh(&self, refresh_token: &str) -> AppResult<TokenPair> {
        let claims = validate_refresh_token(refresh_token, &self.jwt_config.secret)?;
        let user = self
            .users
            .find_by_id(claims.user_id()?)
            .await?
            .ok_or_else(|| AppError::unauthorized("Token inválido."))?;

        generate_token_pair(&user, &self.jwt_config)
    }

    pub async fn get_user(&self, id: i32) -> AppResult<User> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Usuário não encontrado."))
    }
}

#[cfg(test)]
mod tests {
    use crate::api::dto::{LoginRequest, RegisterRequest};
    use crate::error::AppError;
    use crate::services::test_support::*;
    use crate::utils::jwt::validate_access_token;

    fn register_payload() -> RegisterRequest {
        RegisterRequest {
            nome: "Ana Souza".to_string(),
            email: "Ana@Empresa.com.br".to_string(),
            senha: "senha-forte-123".to_string(),
        }
    }

    #[tokio::test]
    async fn test_register_hashes_password_and_issues_tokens() {
        let fx = Fixture::new();

        let (user, tokens) = fx.services.users.register(register_payload()).await.unwrap();

        assert_eq!(user.email, "ana@empresa.com.br");
        assert_ne!(user.senha, "senha-forte-123");
        let claims = validate_access_token(&tokens.access_token, TEST_JWT_SECRET).unwrap();
        assert_eq!(claims.user_id().unwrap(), user.id);
    }

    #[tokio::test]
    async fn test_register_duplicate_email() {
        let fx = Fixture::new();
        fx.services.users.register(register_payload()).await.unwrap();

        let result = fx.services.users.register(register_payload()).await;
        assert!(matches!(result, Err(AppError::Duplicate { .. })));
    }

    #[tokio::test]
    async fn test_login() {
        let fx = Fixture::new();
        fx.services.users.register(register_payload()).await.unwrap();

        let (user, _) = fx
            .services
            .users
            .login(LoginRequest {
                email: "ana@empresa.com.br".to_string(),
                senha: "senha-forte-123".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(user.nome, "Ana Souza");
    }

    #[tokio::test]
    async fn test_login_failures_look_the_same() {
        let fx = Fixture::new();
        fx.services.users.register(register_payload()).await.unwrap();

        for (email, senha) in [
            ("ana@empresa.com.br", "errada"),
            ("ninguem@empresa.com.br", "senha-forte-123"),
        ] {
            let result = fx
                .services
                .users
                .login(LoginRequest {
                    email: email.to_string(),
                    senha: senha.to_string(),
                })
                .await;
            match result {
                Err(AppError::Unauthorized { message }) => {
                    assert_eq!(message, "Credenciais inválidas.")
                }
                other => panic!("Expected Unauthorized, got: {:?}", other.map(|(u, _)| u.id)),
            }
        }
    }

    #[tokio::test]
    async fn test_refresh_requires_refresh_token() {
        let fx = Fixture::new();
        let (_, tokens) = fx.services.users.register(register_payload()).await.unwrap();

        let refreshed = fx.services.users.refresh(&tokens.refresh_token).await.unwrap();
        assert!(validate_access_token(&refreshed.access_token, TEST_JWT_SECRET).is_ok());

        let result = fx.services.users.refresh(&tokens.access_token).await;
        assert!(matches!(result, Err(AppError::Unauthorized { .. })));
    }
}
