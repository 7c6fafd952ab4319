//! Error response DTOs.

use serde::Serialize;
use utoipa::ToSchema;

/// Either one message or every field failure of a rejected payload.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(untagged)]
pub enum ErrorMessage {
    Single(String),
    Many(Vec<String>),
}

/// Error body: `{ "statusCode": 404, "message": "...", "error": "Not Found" }`.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(example = json!({
    "statusCode": 409,
    "message": "O funcionário já foi demitido.",
    "error": "Conflict"
}))]
pub struct ErrorResponse {
    pub status_code: u16,
    pub message: ErrorMessage,
    /// HTTP reason phrase
    pub error: String,
}

impl ErrorResponse {
    pub fn new(status_code: u16, message: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            status_code,
            message: ErrorMessage::Single(message.into()),
            error: error.into(),
        }
    }

    pub fn with_messages(status_code: u16, messages: Vec<String>, error: impl Into<String>) -> Self {
        Self {
            status_code,
            message: ErrorMessage::Many(messages),
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_single_message_shape() {
        let body = ErrorResponse::new(404, "Empresa não encontrada.", "Not Found");
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"statusCode": 404, "message": "Empresa não encontrada.", "error": "Not Found"})
        );
    }

    #[test]
    fn test_message_array_shape() {
        let body = ErrorResponse::with_messages(
            400,
            vec!["data should not be empty".to_string()],
            "Bad Request",
        );
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"statusCode": 400, "message": ["data should not be empty"], "error": "Bad Request"})
        );
    }
}
