//! Company DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::error::AppResult;
use crate::models::{Company, NewCompany, RecordStatus, UpdateCompany};
use crate::utils::date::{format_timestamp, optional_iso_date, serialize_br_date_opt};
use crate::utils::validate::{iso_date, not_blank, uf};

// ============================================================================
// Request DTOs
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize, ToSchema, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateCompanyRequest {
    #[validate(custom(function = "not_blank", message = "nomeFantasia should not be empty"))]
    #[schema(example = "Construtora Horizonte")]
    pub nome_fantasia: String,
    #[validate(custom(function = "not_blank", message = "razaoSocial should not be empty"))]
    #[schema(example = "Horizonte Engenharia e Construções LTDA")]
    pub razao_social: String,
    #[validate(
        custom(function = "not_blank", message = "cnpj should not be empty"),
        custom(function = "crate::utils::validate::cnpj", message = "cnpj must contain exactly 14 digits")
    )]
    #[schema(example = "12345678000190")]
    pub cnpj: String,
    #[validate(custom(function = "not_blank", message = "rua should not be empty"))]
    pub rua: String,
    #[validate(custom(function = "not_blank", message = "numero should not be empty"))]
    pub numero: String,
    pub complemento: Option<String>,
    #[validate(custom(function = "not_blank", message = "bairro should not be empty"))]
    pub bairro: String,
    #[validate(custom(function = "not_blank", message = "cidade should not be empty"))]
    pub cidade: String,
    #[validate(
        custom(function = "not_blank", message = "estado should not be empty"),
        custom(function = "uf", message = "estado must be a 2-letter state code")
    )]
    #[schema(example = "SP")]
    pub estado: String,
    #[validate(
        custom(function = "not_blank", message = "cep should not be empty"),
        custom(function = "crate::utils::validate::cep", message = "cep must contain exactly 8 digits")
    )]
    #[schema(example = "01310100")]
    pub cep: String,
    #[validate(custom(
        function = "iso_date",
        message = "dataFundacao must be a valid ISO 8601 date string"
    ))]
    #[schema(example = "2010-05-20")]
    pub data_fundacao: Option<String>,
    #[validate(email(message = "email must be an email"))]
    pub email: Option<String>,
    pub celular: Option<String>,
}

impl CreateCompanyRequest {
    pub fn into_new_company(self, actor_id: i32) -> AppResult<NewCompany> {
        Ok(NewCompany {
            id: Uuid::new_v4(),
            data_fundacao: optional_iso_date("dataFundacao", self.data_fundacao.as_deref())?,
            nome_fantasia: self.nome_fantasia,
            razao_social: self.razao_social,
            cnpj: self.cnpj,
            rua: self.rua,
            numero: self.numero,
            complemento: self.complemento,
            bairro: self.bairro,
            cidade: self.cidade,
            estado: self.estado.to_uppercase(),
            cep: self.cep,
            email: self.email,
            celular: self.celular,
            criado_por: actor_id,
        })
    }
}

#[derive(Debug, Default, Deserialize, Serialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCompanyRequest {
    #[validate(custom(function = "not_blank", message = "nomeFantasia should not be empty"))]
    pub nome_fantasia: Option<String>,
    #[validate(custom(function = "not_blank", message = "razaoSocial should not be empty"))]
    pub razao_social: Option<String>,
    #[validate(custom(function = "crate::utils::validate::cnpj", message = "cnpj must contain exactly 14 digits"))]
    pub cnpj: Option<String>,
    #[validate(custom(function = "not_blank", message = "rua should not be empty"))]
    pub rua: Option<String>,
    #[validate(custom(function = "not_blank", message = "numero should not be empty"))]
    pub numero: Option<String>,
    pub complemento: Option<String>,
    #[validate(custom(function = "not_blank", message = "bairro should not be empty"))]
    pub bairro: Option<String>,
    #[validate(custom(function = "not_blank", message = "cidade should not be empty"))]
    pub cidade: Option<String>,
    #[validate(custom(function = "uf", message = "estado must be a 2-letter state code"))]
    pub estado: Option<String>,
    #[validate(custom(function = "crate::utils::validate::cep", message = "cep must contain exactly 8 digits"))]
    pub cep: Option<String>,
    #[validate(custom(
        function = "iso_date",
        message = "dataFundacao must be a valid ISO 8601 date string"
    ))]
    pub data_fundacao: Option<String>,
    #[validate(email(message = "email must be an email"))]
    pub email: Option<String>,
    pub celular: Option<String>,
}

impl UpdateCompanyRequest {
    pub fn into_update_company(self, actor_id: i32) -> AppResult<UpdateCompany> {
        Ok(UpdateCompany {
            data_fundacao: optional_iso_date("dataFundacao", self.data_fundacao.as_deref())?,
            nome_fantasia: self.nome_fantasia,
            razao_social: self.razao_social,
            cnpj: self.cnpj,
            rua: self.rua,
            numero: self.numero,
            complemento: self.complemento,
            bairro: self.bairro,
            cidade: self.cidade,
            estado: self.estado.map(|estado| estado.to_uppercase()),
            cep: self.cep,
            email: self.email,
            celular: self.celular,
            atualizado_por: Some(actor_id),
        })
    }
}

// ============================================================================
// Response DTOs
// ============================================================================

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompanyResponse {
    pub id: Uuid,
    pub nome_fantasia: String,
    pub razao_social: String,
    pub cnpj: String,
    pub rua: String,
    pub numero: String,
    pub complemento: Option<String>,
    pub bairro: String,
    pub cidade: String,
    pub estado: String,
    pub cep: String,
    #[serde(serialize_with = "serialize_br_date_opt")]
    #[schema(value_type = Option<String>, example = "20/05/2010")]
    pub data_fundacao: Option<chrono::NaiveDate>,
    pub email: Option<String>,
    pub celular: Option<String>,
    pub status: RecordStatus,
    pub criado_por: i32,
    pub atualizado_por: Option<i32>,
    pub criado_em: String,
    pub atualizado_em: String,
}

impl From<Company> for CompanyResponse {
    fn from(company: Company) -> Self {
        Self {
            id: company.id,
            nome_fantasia: company.nome_fantasia,
            razao_social: company.razao_social,
            cnpj: company.cnpj,
            rua: company.rua,
            numero: company.numero,
            complemento: company.complemento,
            bairro: company.bairro,
            cidade: company.cidade,
            estado: company.estado,
            cep: company.cep,
            data_fundacao: company.data_fundacao,
            email: company.email,
            celular: company.celular,
            status: company.status,
            criado_por: company.criado_por,
            atualizado_por: company.atualizado_por,
            criado_em: format_timestamp(&company.criado_em),
            atualizado_em: format_timestamp(&company.atualizado_em),
        }
    }
}
