use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use bigdecimal::BigDecimal;
use serde::de::DeserializeOwned;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::error::{AppError, AppResult, ValidationFieldError};
use crate::utils::date::parse_iso_date;

pub const UUID_EXPECTED: &str = "Validation failed (uuid is expected)";

/// JSON body that has been deserialized and passed `validator` checks.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> AppResult<Self> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(json_rejection)?;
        value.validate()?;
        Ok(ValidatedJson(value))
    }
}

fn json_rejection(rejection: JsonRejection) -> AppError {
    match rejection {
        JsonRejection::JsonDataError(_) | JsonRejection::JsonSyntaxError(_) => {
            AppError::ValidationErrors {
                errors: vec![ValidationFieldError {
                    field: "body".to_string(),
                    message: rejection.body_text(),
                }],
            }
        }
        other => AppError::bad_request(other.body_text()),
    }
}

/// Single UUID path segment; anything else is rejected with 400.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UuidPath(pub Uuid);

impl<S> FromRequestParts<S> for UuidPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> AppResult<Self> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::bad_request(UUID_EXPECTED))?;
        Uuid::parse_str(&raw)
            .map(UuidPath)
            .map_err(|_| AppError::bad_request(UUID_EXPECTED))
    }
}

pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("not_blank"));
    }
    Ok(())
}

pub fn iso_date(value: &str) -> Result<(), ValidationError> {
    match parse_iso_date(value) {
        Some(_) => Ok(()),
        None => Err(ValidationError::new("iso_date")),
    }
}

fn digits(value: &str, len: usize, code: &'static str) -> Result<(), ValidationError> {
    if value.len() == len && value.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(ValidationError::new(code))
    }
}

pub fn cnpj(value: &str) -> Result<(), ValidationError> {
    digits(value, 14, "cnpj")
}

pub fn cpf(value: &str) -> Result<(), ValidationError> {
    digits(value, 11, "cpf")
}

pub fn cno(value: &str) -> Result<(), ValidationError> {
    digits(value, 12, "cno")
}

pub fn cep(value: &str) -> Result<(), ValidationError> {
    digits(value, 8, "cep")
}

/// Two-letter state code (`SP`, `rj`).
pub fn uf(value: &str) -> Result<(), ValidationError> {
    if value.len() == 2 && value.bytes().all(|b| b.is_ascii_alphabetic()) {
        Ok(())
    } else {
        Err(ValidationError::new("uf"))
    }
}

pub fn positive_decimal(value: &BigDecimal) -> Result<(), ValidationError> {
    if *value > BigDecimal::from(0) {
        Ok(())
    } else {
        Err(ValidationError::new("positive"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Method, StatusCode};
    use axum::routing::get;
    use axum::Router;
    use serde::{Deserialize, Serialize};
    use tower::ServiceExt;

    #[derive(Debug, Deserialize, Serialize, Validate)]
    #[serde(rename_all = "camelCase")]
    struct TestBody {
        #[serde(default)]
        #[validate(custom(function = "not_blank", message = "nome should not be empty"))]
        nome: String,
        #[serde(default)]
        #[validate(
            custom(function = "not_blank", message = "dataInicio should not be empty"),
            custom(function = "iso_date", message = "dataInicio must be a valid ISO 8601 date string")
        )]
        data_inicio: String,
    }

    fn json_request(body: &'static str) -> Request {
        Request::builder()
            .method(Method::POST)
            .uri("/test")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_valid_body() {
        let request = json_request(r#"{"nome":"Obra Centro","dataInicio":"2025-03-01"}"#);

        let ValidatedJson(body) = ValidatedJson::<TestBody>::from_request(request, &())
            .await
            .unwrap();

        assert_eq!(body.nome, "Obra Centro");
        assert_eq!(body.data_inicio, "2025-03-01");
    }

    #[tokio::test]
    async fn test_missing_fields_report_every_message() {
        let request = json_request("{}");

        match ValidatedJson::<TestBody>::from_request(request, &()).await {
            Err(AppError::ValidationErrors { errors }) => {
                let messages: Vec<&str> = errors.iter().map(|e| e.message.as_str()).collect();
                assert_eq!(
                    messages,
                    vec![
                        "dataInicio must be a valid ISO 8601 date string",
                        "dataInicio should not be empty",
                        "nome should not be empty",
                    ]
                );
            }
            other => panic!("Expected ValidationErrors, got: {:?}", other.err()),
        }
    }

    #[tokio::test]
    async fn test_malformed_date() {
        let request = json_request(r#"{"nome":"Obra","dataInicio":"01/03/2025"}"#);

        match ValidatedJson::<TestBody>::from_request(request, &()).await {
            Err(AppError::ValidationErrors { errors }) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].field, "data_inicio");
                assert_eq!(
                    errors[0].message,
                    "dataInicio must be a valid ISO 8601 date string"
                );
            }
            other => panic!("Expected ValidationErrors, got: {:?}", other.err()),
        }
    }

    #[tokio::test]
    async fn test_wrong_json_type_is_reported_in_array() {
        let request = json_request(r#"{"nome":42,"dataInicio":"2025-03-01"}"#);

        match ValidatedJson::<TestBody>::from_request(request, &()).await {
            Err(AppError::ValidationErrors { errors }) => {
                assert_eq!(errors.len(), 1);
                assert!(errors[0].message.contains("nome"));
            }
            other => panic!("Expected ValidationErrors, got: {:?}", other.err()),
        }
    }

    #[tokio::test]
    async fn test_missing_content_type_is_bad_request() {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/test")
            .body(Body::from("{}"))
            .unwrap();

        let result = ValidatedJson::<TestBody>::from_request(request, &()).await;
        assert!(matches!(result, Err(AppError::BadRequest { .. })));
    }

    async fn echo(UuidPath(id): UuidPath) -> String {
        id.to_string()
    }

    #[tokio::test]
    async fn test_uuid_path() {
        let app = Router::new().route("/items/{id}", get(echo));
        let id = Uuid::new_v4();

        let ok = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri(format!("/items/{id}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(ok.status(), StatusCode::OK);

        let bad = app
            .oneshot(
                Request::builder()
                    .uri("/items/not-a-uuid")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(bad.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_field_validators() {
        assert!(cnpj("12345678000190").is_ok());
        assert!(cnpj("12.345.678/0001-90").is_err());
        assert!(cpf("12345678901").is_ok());
        assert!(cpf("1234567890").is_err());
        assert!(cno("123456789012").is_ok());
        assert!(cep("01310100").is_ok());
        assert!(uf("SP").is_ok());
        assert!(uf("S1").is_err());
        assert!(not_blank("   ").is_err());
        assert!(positive_decimal(&BigDecimal::from(3500)).is_ok());
        assert!(positive_decimal(&BigDecimal::from(0)).is_err());
    }
}
