//! Bearer token authentication for the resource routes.

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};

use crate::error::{AppError, AppResult};
use crate::state::AppState;
use crate::utils::jwt::{validate_access_token, Claims};

/// Authenticated user, inserted into request extensions by [`auth_middleware`].
///
/// Handlers extract it with `Extension<AuthUser>` and pass `user_id` as the
/// actor of every write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    pub user_id: i32,
    pub email: String,
    pub nome: String,
}

impl TryFrom<Claims> for AuthUser {
    type Error = AppError;

    fn try_from(claims: Claims) -> AppResult<Self> {
        Ok(Self {
            user_id: claims.user_id()?,
            email: claims.email,
            nome: claims.nome,
        })
    }
}

fn bearer_token(request: &Request) -> AppResult<&str> {
    let value = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::unauthorized("Token não informado."))?;

    value
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| AppError::unauthorized("Token inválido."))
}

/// Validates `Authorization: Bearer <access token>`.
///
/// Missing headers, malformed headers, expired tokens and refresh tokens are
/// all rejected with 401 before any handler runs.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let claims = validate_access_token(bearer_token(&request)?, &state.jwt_config.secret)?;
    let auth_user = AuthUser::try_from(claims)?;

    tracing::Span::current().record("user_id", auth_user.user_id);
    request.extensions_mut().insert(auth_user);

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request as HttpRequest, StatusCode};
    use axum::routing::get;
    use axum::{middleware, Extension, Router};
    use chrono::Utc;
    use tower::ServiceExt;

    use crate::config::JwtConfig;
    use crate::models::User;
    use crate::repositories::MemoryStore;
    use crate::utils::jwt::{generate_token_pair, TokenType};

    fn jwt_config() -> JwtConfig {
        JwtConfig {
            secret: "auth-middleware-test-secret".to_string(),
            access_token_expiration: 1,
            refresh_token_expiration: 168,
        }
    }

    fn user() -> User {
        User {
            id: 7,
            nome: "Ana Souza".to_string(),
            email: "ana@empresa.com.br".to_string(),
            senha: "hash".to_string(),
            criado_em: Utc::now().naive_utc(),
            atualizado_em: Utc::now().naive_utc(),
        }
    }

    fn app() -> Router {
        let state = AppState::in_memory(MemoryStore::new(), jwt_config());
        Router::new()
            .route(
                "/protected",
                get(|Extension(user): Extension<AuthUser>| async move { user.user_id.to_string() }),
            )
            .route_layer(middleware::from_fn_with_state(state.clone(), auth_middleware))
            .with_state(state)
    }

    async fn call(authorization: Option<String>) -> StatusCode {
        let mut builder = HttpRequest::builder().uri("/protected");
        if let Some(value) = authorization {
            builder = builder.header(header::AUTHORIZATION, value);
        }
        app()
            .oneshot(builder.body(Body::empty()).unwrap())
            .await
            .unwrap()
            .status()
    }

    #[test]
    fn test_auth_user_from_claims() {
        let claims = Claims::new(&user(), TokenType::Access, 1);
        let auth_user = AuthUser::try_from(claims).unwrap();
        assert_eq!(auth_user.user_id, 7);
        assert_eq!(auth_user.nome, "Ana Souza");
    }

    #[test]
    fn test_auth_user_rejects_non_numeric_subject() {
        let mut claims = Claims::new(&user(), TokenType::Access, 1);
        claims.sub = "abc".to_string();
        assert!(matches!(
            AuthUser::try_from(claims),
            Err(AppError::Unauthorized { .. })
        ));
    }

    #[tokio::test]
    async fn test_valid_access_token_passes() {
        let tokens = generate_token_pair(&user(), &jwt_config()).unwrap();
        let status = call(Some(format!("Bearer {}", tokens.access_token))).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_missing_header_is_unauthorized() {
        assert_eq!(call(None).await, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_wrong_scheme_is_unauthorized() {
        let tokens = generate_token_pair(&user(), &jwt_config()).unwrap();
        let status = call(Some(format!("Token {}", tokens.access_token))).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_refresh_token_is_rejected() {
        let tokens = generate_token_pair(&user(), &jwt_config()).unwrap();
        let status = call(Some(format!("Bearer {}", tokens.refresh_token))).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }
}
