//! Vacation (`ferias`) DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::error::AppResult;
use crate::models::{NewVacation, RecordStatus, UpdateVacation, Vacation};
use crate::utils::date::{format_timestamp, optional_iso_date, require_iso_date, serialize_br_date};
use crate::utils::validate::{iso_date, not_blank};

#[derive(Debug, Default, Deserialize, Serialize, ToSchema, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateVacationRequest {
    #[validate(
        custom(function = "not_blank", message = "dataInicio should not be empty"),
        custom(function = "iso_date", message = "dataInicio must be a valid ISO 8601 date string")
    )]
    #[schema(example = "2025-07-01")]
    pub data_inicio: String,
    #[validate(
        custom(function = "not_blank", message = "dataFim should not be empty"),
        custom(function = "iso_date", message = "dataFim must be a valid ISO 8601 date string")
    )]
    #[schema(example = "2025-07-30")]
    pub data_fim: String,
}

impl CreateVacationRequest {
    pub fn into_new_vacation(self, funcionario_id: Uuid, actor_id: i32) -> AppResult<NewVacation> {
        Ok(NewVacation {
            id: Uuid::new_v4(),
            data_inicio: require_iso_date("dataInicio", &self.data_inicio)?,
            data_fim: require_iso_date("dataFim", &self.data_fim)?,
            funcionario_id,
            criado_por: actor_id,
        })
    }
}

#[derive(Debug, Default, Deserialize, Serialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVacationRequest {
    #[validate(custom(
        function = "iso_date",
        message = "dataInicio must be a valid ISO 8601 date string"
    ))]
    pub data_inicio: Option<String>,
    #[validate(custom(
        function = "iso_date",
        message = "dataFim must be a valid ISO 8601 date string"
    ))]
    pub data_fim: Option<String>,
}

impl UpdateVacationRequest {
    pub fn into_update_vacation(self, actor_id: i32) -> AppResult<UpdateVacation> {
        Ok(UpdateVacation {
            data_inicio: optional_iso_date("dataInicio", self.data_inicio.as_deref())?,
            data_fim: optional_iso_date("dataFim", self.data_fim.as_deref())?,
            atualizado_por: Some(actor_id),
        })
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VacationResponse {
    pub id: Uuid,
    #[serde(serialize_with = "serialize_br_date")]
    #[schema(value_type = String, example = "01/07/2025")]
    pub data_inicio: NaiveDate,
    #[serde(serialize_with = "serialize_br_date")]
    #[schema(value_type = String, example = "30/07/2025")]
    pub data_fim: NaiveDate,
    pub funcionario_id: Uuid,
    pub status: RecordStatus,
    pub criado_por: i32,
    pub atualizado_por: Option<i32>,
    pub criado_em: String,
    pub atualizado_em: String,
}

impl From<Vacation> for VacationResponse {
    fn from(vacation: Vacation) -> Self {
        Self {
            id: vacation.id,
            data_inicio: vacation.data_inicio,
            data_fim: vacation.data_fim,
            funcionario_id: vacation.funcionario_id,
            status: vacation.status,
            criado_por: vacation.criado_por,
            atualizado_por: vacation.atualizado_por,
            criado_em: format_timestamp(&vacation.criado_em),
            atualizado_em: format_timestamp(&vacation.atualizado_em),
        }
    }
}
