//! Cost center (`centros_custo`) DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::{CostCenter, NewCostCenter, RecordStatus, UpdateCostCenter};
use crate::utils::date::format_timestamp;
use crate::utils::validate::not_blank;

#[derive(Debug, Default, Deserialize, Serialize, ToSchema, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateCostCenterRequest {
    #[validate(
        custom(function = "not_blank", message = "nome should not be empty"),
        length(max = 255, message = "nome must be shorter than or equal to 255 characters")
    )]
    #[schema(example = "Obra Residencial Vila Nova")]
    pub nome: String,
    #[validate(length(
        max = 255,
        message = "descricao must be shorter than or equal to 255 characters"
    ))]
    pub descricao: Option<String>,
}

impl CreateCostCenterRequest {
    pub fn into_new_cost_center(self, empresa_id: Uuid, actor_id: i32) -> NewCostCenter {
        NewCostCenter {
            id: Uuid::new_v4(),
            nome: self.nome,
            descricao: self.descricao,
            empresa_id,
            criado_por: actor_id,
        }
    }
}

#[derive(Debug, Default, Deserialize, Serialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCostCenterRequest {
    #[validate(
        custom(function = "not_blank", message = "nome should not be empty"),
        length(max = 255, message = "nome must be shorter than or equal to 255 characters")
    )]
    pub nome: Option<String>,
    #[validate(length(
        max = 255,
        message = "descricao must be shorter than or equal to 255 characters"
    ))]
    pub descricao: Option<String>,
}

impl UpdateCostCenterRequest {
    pub fn into_update_cost_center(self, actor_id: i32) -> UpdateCostCenter {
        UpdateCostCenter {
            nome: self.nome,
            descricao: self.descricao,
            atualizado_por: Some(actor_id),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CostCenterResponse {
    pub id: Uuid,
    pub nome: String,
    pub descricao: Option<String>,
    pub empresa_id: Uuid,
    pub status: RecordStatus,
    pub criado_por: i32,
    pub atualizado_por: Option<i32>,
    pub criado_em: String,
    pub atualizado_em: String,
}

impl From<CostCenter> for CostCenterResponse {
    fn from(cost_center: CostCenter) -> Self {
        Self {
            id: cost_center.id,
            nome: cost_center.nome,
            descricao: cost_center.descricao,
            empresa_id: cost_center.empresa_id,
            status: cost_center.status,
            criado_por: cost_center.criado_por,
            atualizado_por: cost_center.atualizado_por,
            criado_em: format_timestamp(&cost_center.criado_em),
            atualizado_em: format_timestamp(&cost_center.atualizado_em),
        }
    }
}
