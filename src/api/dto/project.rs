//! Project (`projetos`) DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::error::AppResult;
use crate::models::{NewProject, Project, RecordStatus, UpdateProject};
use crate::utils::date::{format_timestamp, optional_iso_date, require_iso_date, serialize_br_date};
use crate::utils::validate::{iso_date, not_blank};

#[derive(Debug, Default, Deserialize, Serialize, ToSchema, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateProjectRequest {
    #[validate(custom(function = "not_blank", message = "nome should not be empty"))]
    #[schema(example = "Residencial Vila Nova")]
    pub nome: String,
    #[validate(custom(function = "not_blank", message = "descricao should not be empty"))]
    pub descricao: String,
    #[validate(
        custom(function = "not_blank", message = "dataInicio should not be empty"),
        custom(function = "iso_date", message = "dataInicio must be a valid ISO 8601 date string")
    )]
    #[schema(example = "2025-03-01")]
    pub data_inicio: String,
    /// Cadastro Nacional de Obras (12 digits)
    #[validate(
        custom(function = "not_blank", message = "cno should not be empty"),
        custom(function = "crate::utils::validate::cno", message = "cno must contain exactly 12 digits")
    )]
    #[schema(example = "900012345678")]
    pub cno: String,
}

impl CreateProjectRequest {
    pub fn into_new_project(self, empresa_id: Uuid, actor_id: i32) -> AppResult<NewProject> {
        Ok(NewProject {
            id: Uuid::new_v4(),
            data_inicio: require_iso_date("dataInicio", &self.data_inicio)?,
            nome: self.nome,
            descricao: self.descricao,
            cno: self.cno,
            empresa_id,
            criado_por: actor_id,
        })
    }
}

#[derive(Debug, Default, Deserialize, Serialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProjectRequest {
    #[validate(custom(function = "not_blank", message = "nome should not be empty"))]
    pub nome: Option<String>,
    #[validate(custom(function = "not_blank", message = "descricao should not be empty"))]
    pub descricao: Option<String>,
    #[validate(custom(
        function = "iso_date",
        message = "dataInicio must be a valid ISO 8601 date string"
    ))]
    pub data_inicio: Option<String>,
    #[validate(custom(function = "crate::utils::validate::cno", message = "cno must contain exactly 12 digits"))]
    pub cno: Option<String>,
}

impl UpdateProjectRequest {
    pub fn into_update_project(self, actor_id: i32) -> AppResult<UpdateProject> {
        Ok(UpdateProject {
            data_inicio: optional_iso_date("dataInicio", self.data_inicio.as_deref())?,
            nome: self.nome,
            descricao: self.descricao,
            cno: self.cno,
            atualizado_por: Some(actor_id),
        })
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectResponse {
    pub id: Uuid,
    pub nome: String,
    pub descricao: String,
    #[serde(serialize_with = "serialize_br_date")]
    #[schema(value_type = String, example = "01/03/2025")]
    pub data_inicio: NaiveDate,
    pub cno: String,
    pub empresa_id: Uuid,
    pub status: RecordStatus,
    pub criado_por: i32,
    pub atualizado_por: Option<i32>,
    pub criado_em: String,
    pub atualizado_em: String,
}

impl From<Project> for ProjectResponse {
    fn from(project: Project) -> Self {
        Self {
            id: project.id,
            nome: project.nome,
            descricao: project.descricao,
            data_inicio: project.data_inicio,
            cno: project.cno,
            empresa_id: project.empresa_id,
            status: project.status,
            criado_por: project.criado_por,
            atualizado_por: project.atualizado_por,
            criado_em: format_timestamp(&project.criado_em),
            atualizado_em: format_timestamp(&project.atualizado_em),
        }
    }
}
