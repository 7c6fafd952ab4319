//! EPI (personal protective equipment) DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::{Epi, NewEpi, RecordStatus, UpdateEpi};
use crate::utils::date::format_timestamp;
use crate::utils::validate::not_blank;

#[derive(Debug, Default, Deserialize, Serialize, ToSchema, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateEpiRequest {
    #[validate(custom(function = "not_blank", message = "nome should not be empty"))]
    #[schema(example = "Capacete de segurança")]
    pub nome: String,
    pub descricao: Option<String>,
    /// Certificado de Aprovação (CA) number
    #[schema(example = "31469")]
    pub certificado_aprovacao: Option<String>,
}

impl CreateEpiRequest {
    pub fn into_new_epi(self, empresa_id: Uuid, actor_id: i32) -> NewEpi {
        NewEpi {
            id: Uuid::new_v4(),
            nome: self.nome,
            descricao: self.descricao,
            certificado_aprovacao: self.certificado_aprovacao,
            empresa_id,
            criado_por: actor_id,
        }
    }
}

#[derive(Debug, Default, Deserialize, Serialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEpiRequest {
    #[validate(custom(function = "not_blank", message = "nome should not be empty"))]
    pub nome: Option<String>,
    pub descricao: Option<String>,
    pub certificado_aprovacao: Option<String>,
}

impl UpdateEpiRequest {
    pub fn into_update_epi(self, actor_id: i32) -> UpdateEpi {
        UpdateEpi {
            nome: self.nome,
            descricao: self.descricao,
            certificado_aprovacao: self.certificado_aprovacao,
            atualizado_por: Some(actor_id),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EpiResponse {
    pub id: Uuid,
    pub nome: String,
    pub descricao: Option<String>,
    pub certificado_aprovacao: Option<String>,
    pub empresa_id: Uuid,
    pub status: RecordStatus,
    pub criado_por: i32,
    pub atualizado_por: Option<i32>,
    pub criado_em: String,
    pub atualizado_em: String,
}

impl From<Epi> for EpiResponse {
    fn from(epi: Epi) -> Self {
        Self {
            id: epi.id,
            nome: epi.nome,
            descricao: epi.descricao,
            certificado_aprovacao: epi.certificado_aprovacao,
            empresa_id: epi.empresa_id,
            status: epi.status,
            criado_por: epi.criado_por,
            atualizado_por: epi.atualizado_por,
            criado_em: format_timestamp(&epi.criado_em),
            atualizado_em: format_timestamp(&epi.atualizado_em),
        }
    }
}
