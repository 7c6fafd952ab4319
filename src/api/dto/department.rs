//! Department (`setores`) DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::{Department, NewDepartment, RecordStatus, UpdateDepartment};
use crate::utils::date::format_timestamp;
use crate::utils::validate::not_blank;

#[derive(Debug, Default, Deserialize, Serialize, ToSchema, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateDepartmentRequest {
    #[validate(
        custom(function = "not_blank", message = "nome should not be empty"),
        length(max = 120, message = "nome must be shorter than or equal to 120 characters")
    )]
    #[schema(example = "Financeiro")]
    pub nome: String,
}

impl CreateDepartmentRequest {
    pub fn into_new_department(self, empresa_id: Uuid, actor_id: i32) -> NewDepartment {
        NewDepartment {
            id: Uuid::new_v4(),
            nome: self.nome,
            empresa_id,
            criado_por: actor_id,
        }
    }
}

#[derive(Debug, Default, Deserialize, Serialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDepartmentRequest {
    #[validate(
        custom(function = "not_blank", message = "nome should not be empty"),
        length(max = 120, message = "nome must be shorter than or equal to 120 characters")
    )]
    pub nome: Option<String>,
}

impl UpdateDepartmentRequest {
    pub fn into_update_department(self, actor_id: i32) -> UpdateDepartment {
        UpdateDepartment {
            nome: self.nome,
            atualizado_por: Some(actor_id),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentResponse {
    pub id: Uuid,
    pub nome: String,
    pub empresa_id: Uuid,
    pub status: RecordStatus,
    pub criado_por: i32,
    pub atualizado_por: Option<i32>,
    pub criado_em: String,
    pub atualizado_em: String,
}

impl From<Department> for DepartmentResponse {
    fn from(department: Department) -> Self {
        Self {
            id: department.id,
            nome: department.nome,
            empresa_id: department.empresa_id,
            status: department.status,
            criado_por: department.criado_por,
            atualizado_por: department.atualizado_por,
            criado_em: format_timestamp(&department.criado_em),
            atualizado_em: format_timestamp(&department.atualizado_em),
        }
    }
}
