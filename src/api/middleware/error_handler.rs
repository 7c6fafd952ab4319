//! Error handler for converting AppError to HTTP responses.
//!
//! Every error leaves the API as
//! `{ "statusCode": <u16>, "message": <string | string[]>, "error": <reason> }`.
//! Internal causes are logged here and never rendered.

use axum::{
    extract::Request,
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use crate::api::dto::ErrorResponse;
use crate::error::AppError;

const DATABASE_FAILURE: &str = "Erro ao processar a consulta no banco de dados.";
const SERVICE_UNAVAILABLE: &str = "Serviço temporariamente indisponível.";
const UNKNOWN_FAILURE: &str = "Erro desconhecido. Contate o administrador.";

/// Maps an AppError variant to its HTTP status code.
pub fn error_to_status_code(error: &AppError) -> StatusCode {
    match error {
        AppError::NotFound { .. } => StatusCode::NOT_FOUND,
        AppError::Conflict { .. } | AppError::Duplicate { .. } => StatusCode::CONFLICT,
        AppError::Validation { .. }
        | AppError::ValidationErrors { .. }
        | AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
        AppError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
        AppError::ConnectionPool { .. } => StatusCode::SERVICE_UNAVAILABLE,
        AppError::Database { .. } | AppError::Configuration { .. } | AppError::Internal { .. } => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

fn reason(status: StatusCode) -> &'static str {
    status.canonical_reason().unwrap_or("Error")
}

/// Builds the client-facing body. 5xx variants get a fixed safe message.
fn error_body(error: &AppError, status: StatusCode) -> ErrorResponse {
    let code = status.as_u16();
    match error {
        AppError::Validation { reason: message, .. } => {
            ErrorResponse::with_messages(code, vec![message.clone()], reason(status))
        }
        AppError::ValidationErrors { errors } => ErrorResponse::with_messages(
            code,
            errors.iter().map(|e| e.message.clone()).collect(),
            reason(status),
        ),
        AppError::NotFound { message }
        | AppError::Conflict { message }
        | AppError::BadRequest { message }
        | AppError::Unauthorized { message } => {
            ErrorResponse::new(code, message.clone(), reason(status))
        }
        AppError::Duplicate { .. } => ErrorResponse::new(code, error.to_string(), reason(status)),
        AppError::Database { .. } => ErrorResponse::new(code, DATABASE_FAILURE, reason(status)),
        AppError::ConnectionPool { .. } => {
            ErrorResponse::new(code, SERVICE_UNAVAILABLE, reason(status))
        }
        AppError::Configuration { .. } | AppError::Internal { .. } => {
            ErrorResponse::new(code, UNKNOWN_FAILURE, reason(status))
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = error_to_status_code(&self);
        if status.is_server_error() {
            tracing::error!(error = ?self, "Request failed");
        } else {
            tracing::debug!(status = status.as_u16(), error = %self, "Request rejected");
        }

        (status, Json(error_body(&self, status))).into_response()
    }
}

/// Rewrites error responses produced outside the handlers (unknown route,
/// method not allowed, ...) into the standard error body.
///
/// Responses that already carry JSON pass through untouched.
pub async fn global_error_handler(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let response = next.run(request).await;

    let status = response.status();
    if !(status.is_client_error() || status.is_server_error()) {
        return response;
    }
    let is_json = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.contains("application/json"));
    if is_json {
        return response;
    }

    let message = match status {
        StatusCode::NOT_FOUND | StatusCode::METHOD_NOT_ALLOWED => {
            format!("Cannot {} {}", method, path)
        }
        _ if status.is_server_error() => UNKNOWN_FAILURE.to_string(),
        _ => reason(status).to_string(),
    };

    (
        status,
        Json(ErrorResponse::new(status.as_u16(), message, reason(status))),
    )
        .into_response()
}
