//! Role (`funcoes`) DTOs. A role carries the set of EPIs its holders must use.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::EpiResponse;
use crate::models::{NewRole, RecordStatus, RoleWithEpis, UpdateRole};
use crate::utils::date::format_timestamp;
use crate::utils::validate::not_blank;

#[derive(Debug, Default, Deserialize, Serialize, ToSchema, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateRoleRequest {
    #[validate(custom(function = "not_blank", message = "nome should not be empty"))]
    #[schema(example = "Pedreiro")]
    pub nome: String,
    /// EPI ids of the same company
    pub epis: Vec<Uuid>,
}

impl CreateRoleRequest {
    pub fn into_new_role(self, empresa_id: Uuid, actor_id: i32) -> (NewRole, Vec<Uuid>) {
        let role = NewRole {
            id: Uuid::new_v4(),
            nome: self.nome,
            empresa_id,
            criado_por: actor_id,
        };
        (role, self.epis)
    }
}

#[derive(Debug, Default, Deserialize, Serialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRoleRequest {
    #[validate(custom(function = "not_blank", message = "nome should not be empty"))]
    pub nome: Option<String>,
    /// Replaces the EPI set when present; `[]` clears it
    pub epis: Option<Vec<Uuid>>,
}

impl UpdateRoleRequest {
    pub fn into_update_role(self, actor_id: i32) -> (UpdateRole, Option<Vec<Uuid>>) {
        let changes = UpdateRole {
            nome: self.nome,
            atualizado_por: Some(actor_id),
        };
        (changes, self.epis)
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoleResponse {
    pub id: Uuid,
    pub nome: String,
    pub empresa_id: Uuid,
    pub epis: Vec<EpiResponse>,
    pub status: RecordStatus,
    pub criado_por: i32,
    pub atualizado_por: Option<i32>,
    pub criado_em: String,
    pub atualizado_em: String,
}

impl From<RoleWithEpis> for RoleResponse {
    fn from(RoleWithEpis { role, epis }: RoleWithEpis) -> Self {
        Self {
            id: role.id,
            nome: role.nome,
            empresa_id: role.empresa_id,
            epis: epis.into_iter().map(EpiResponse::from).collect(),
            status: role.status,
            criado_por: role.criado_por,
            atualizado_por: role.atualizado_por,
            criado_em: format_timestamp(&role.criado_em),
            atualizado_em: format_timestamp(&role.atualizado_em),
        }
    }
}
