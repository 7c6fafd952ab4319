//! Termination (`demissoes`) DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::error::AppResult;
use crate::models::{NewTermination, RecordStatus, Termination, UpdateTermination};
use crate::utils::date::{format_timestamp, optional_iso_date, require_iso_date, serialize_br_date};
use crate::utils::validate::{iso_date, not_blank};

#[derive(Debug, Default, Deserialize, Serialize, ToSchema, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateTerminationRequest {
    #[validate(
        custom(function = "not_blank", message = "data should not be empty"),
        custom(function = "iso_date", message = "data must be a valid ISO 8601 date string")
    )]
    #[schema(example = "2025-02-16")]
    pub data: String,
    #[validate(custom(function = "not_blank", message = "motivoInterno should not be empty"))]
    #[schema(example = "Reestruturação do setor")]
    pub motivo_interno: String,
    pub motivo_trabalhista: Option<String>,
    pub acao_trabalhista: Option<String>,
    #[validate(custom(function = "not_blank", message = "formaDemissao should not be empty"))]
    #[schema(example = "Sem justa causa")]
    pub forma_demissao: String,
}

impl CreateTerminationRequest {
    pub fn into_new_termination(
        self,
        funcionario_id: Uuid,
        actor_id: i32,
    ) -> AppResult<NewTermination> {
        Ok(NewTermination {
            id: Uuid::new_v4(),
            data: require_iso_date("data", &self.data)?,
            motivo_interno: self.motivo_interno,
            motivo_trabalhista: self.motivo_trabalhista,
            acao_trabalhista: self.acao_trabalhista,
            forma_demissao: self.forma_demissao,
            funcionario_id,
            criado_por: actor_id,
        })
    }
}

#[derive(Debug, Default, Deserialize, Serialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTerminationRequest {
    #[validate(custom(function = "iso_date", message = "data must be a valid ISO 8601 date string"))]
    pub data: Option<String>,
    #[validate(custom(function = "not_blank", message = "motivoInterno should not be empty"))]
    pub motivo_interno: Option<String>,
    pub motivo_trabalhista: Option<String>,
    pub acao_trabalhista: Option<String>,
    #[validate(custom(function = "not_blank", message = "formaDemissao should not be empty"))]
    pub forma_demissao: Option<String>,
}

impl UpdateTerminationRequest {
    pub fn into_update_termination(self, actor_id: i32) -> AppResult<UpdateTermination> {
        Ok(UpdateTermination {
            data: optional_iso_date("data", self.data.as_deref())?,
            motivo_interno: self.motivo_interno,
            motivo_trabalhista: self.motivo_trabalhista,
            acao_trabalhista: self.acao_trabalhista,
            forma_demissao: self.forma_demissao,
            atualizado_por: Some(actor_id),
        })
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TerminationResponse {
    pub id: Uuid,
    #[serde(serialize_with = "serialize_br_date")]
    #[schema(value_type = String, example = "16/02/2025")]
    pub data: NaiveDate,
    pub motivo_interno: String,
    pub motivo_trabalhista: Option<String>,
    pub acao_trabalhista: Option<String>,
    pub forma_demissao: String,
    pub funcionario_id: Uuid,
    pub status: RecordStatus,
    pub criado_por: i32,
    pub atualizado_por: Option<i32>,
    pub criado_em: String,
    pub atualizado_em: String,
}

impl From<Termination> for TerminationResponse {
    fn from(termination: Termination) -> Self {
        Self {
            id: termination.id,
            data: termination.data,
            motivo_interno: termination.motivo_interno,
            motivo_trabalhista: termination.motivo_trabalhista,
            acao_trabalhista: termination.acao_trabalhista,
            forma_demissao: termination.forma_demissao,
            funcionario_id: termination.funcionario_id,
            status: termination.status,
            criado_por: termination.criado_por,
            atualizado_por: termination.atualizado_por,
            criado_em: format_timestamp(&termination.criado_em),
            atualizado_em: format_timestamp(&termination.atualizado_em),
        }
    }
}
