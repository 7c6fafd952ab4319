//! Success envelope returned by create, update and remove endpoints.

use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    pub succeeded: bool,
    pub data: T,
    #[schema(example = "Empresa cadastrada com sucesso, id: #2f1c...")]
    pub message: String,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T, message: impl Into<String>) -> Self {
        Self {
            succeeded: true,
            data,
            message: message.into(),
        }
    }
}
