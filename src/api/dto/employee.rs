//! Employee (`funcionarios`) DTOs.

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::models::{
    ContractType, Employee, EmployeeStatus, NewEmployee, RecordStatus, UpdateEmployee,
};
use crate::utils::date::{format_timestamp, optional_iso_date, require_iso_date, serialize_br_date};
use crate::utils::validate::{iso_date, not_blank, positive_decimal, uf};

// ============================================================================
// Request DTOs
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize, ToSchema, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateEmployeeRequest {
    #[validate(custom(function = "not_blank", message = "nome should not be empty"))]
    #[schema(example = "João da Silva")]
    pub nome: String,
    #[validate(
        custom(function = "not_blank", message = "cpf should not be empty"),
        custom(function = "crate::utils::validate::cpf", message = "cpf must contain exactly 11 digits")
    )]
    #[schema(example = "12345678901")]
    pub cpf: String,
    #[validate(
        custom(function = "not_blank", message = "dataNascimento should not be empty"),
        custom(function = "iso_date", message = "dataNascimento must be a valid ISO 8601 date string")
    )]
    #[schema(example = "1990-04-12")]
    pub data_nascimento: String,
    #[validate(
        custom(function = "not_blank", message = "dataAdmissao should not be empty"),
        custom(function = "iso_date", message = "dataAdmissao must be a valid ISO 8601 date string")
    )]
    #[schema(example = "2024-01-08")]
    pub data_admissao: String,
    #[validate(email(message = "email must be an email"))]
    pub email: Option<String>,
    pub celular: Option<String>,
    #[validate(required(message = "regimeContratacao should not be empty"))]
    pub regime_contratacao: Option<ContractType>,
    #[validate(
        required(message = "salario should not be empty"),
        custom(function = "positive_decimal", message = "salario must be a positive number")
    )]
    #[schema(value_type = Option<String>, example = "3500.00")]
    pub salario: Option<BigDecimal>,
    pub funcao_id: Option<Uuid>,
    pub setor_id: Option<Uuid>,
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
    pub estado: String,
    #[validate(
        custom(function = "not_blank", message = "cep should not be empty"),
        custom(function = "crate::utils::validate::cep", message = "cep must contain exactly 8 digits")
    )]
    pub cep: String,
}

impl CreateEmployeeRequest {
    pub fn into_new_employee(self, empresa_id: Uuid, actor_id: i32) -> AppResult<NewEmployee> {
        let regime_contratacao = self.regime_contratacao.ok_or_else(|| {
            AppError::validation("regimeContratacao", "regimeContratacao should not be empty")
        })?;
        let salario = self
            .salario
            .ok_or_else(|| AppError::validation("salario", "salario should not be empty"))?;

        Ok(NewEmployee {
            id: Uuid::new_v4(),
            data_nascimento: require_iso_date("dataNascimento", &self.data_nascimento)?,
            data_admissao: require_iso_date("dataAdmissao", &self.data_admissao)?,
            nome: self.nome,
            cpf: self.cpf,
            email: self.email,
            celular: self.celular,
            regime_contratacao,
            salario,
            funcao_id: self.funcao_id,
            setor_id: self.setor_id,
            rua: self.rua,
            numero: self.numero,
            complemento: self.complemento,
            bairro: self.bairro,
            cidade: self.cidade,
            estado: self.estado.to_uppercase(),
            cep: self.cep,
            empresa_id,
            criado_por: actor_id,
        })
    }
}

#[derive(Debug, Default, Deserialize, Serialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEmployeeRequest {
    #[validate(custom(function = "not_blank", message = "nome should not be empty"))]
    pub nome: Option<String>,
    #[validate(custom(function = "crate::utils::validate::cpf", message = "cpf must contain exactly 11 digits"))]
    pub cpf: Option<String>,
    #[validate(custom(
        function = "iso_date",
        message = "dataNascimento must be a valid ISO 8601 date string"
    ))]
    pub data_nascimento: Option<String>,
    #[validate(custom(
        function = "iso_date",
        message = "dataAdmissao must be a valid ISO 8601 date string"
    ))]
    pub data_admissao: Option<String>,
    #[validate(email(message = "email must be an email"))]
    pub email: Option<String>,
    pub celular: Option<String>,
    pub regime_contratacao: Option<ContractType>,
    #[validate(custom(function = "positive_decimal", message = "salario must be a positive number"))]
    #[schema(value_type = Option<String>, example = "3800.00")]
    pub salario: Option<BigDecimal>,
    pub funcao_id: Option<Uuid>,
    pub setor_id: Option<Uuid>,
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
    /// `DEMITIDO` is rejected; terminations drive that status
    pub status_funcionario: Option<EmployeeStatus>,
}

impl UpdateEmployeeRequest {
    pub fn into_update_employee(self, actor_id: i32) -> AppResult<UpdateEmployee> {
        Ok(UpdateEmployee {
            data_nascimento: optional_iso_date("dataNascimento", self.data_nascimento.as_deref())?,
            data_admissao: optional_iso_date("dataAdmissao", self.data_admissao.as_deref())?,
            nome: self.nome,
            cpf: self.cpf,
            email: self.email,
            celular: self.celular,
            regime_contratacao: self.regime_contratacao,
            salario: self.salario,
            funcao_id: self.funcao_id,
            setor_id: self.setor_id,
            rua: self.rua,
            numero: self.numero,
            complemento: self.complemento,
            bairro: self.bairro,
            cidade: self.cidade,
            estado: self.estado.map(|estado| estado.to_uppercase()),
            cep: self.cep,
            status_funcionario: self.status_funcionario,
            atualizado_por: Some(actor_id),
        })
    }
}

// ============================================================================
// Response DTOs
// ============================================================================

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeResponse {
    pub id: Uuid,
    pub nome: String,
    pub cpf: String,
    #[serde(serialize_with = "serialize_br_date")]
    #[schema(value_type = String, example = "12/04/1990")]
    pub data_nascimento: NaiveDate,
    #[serde(serialize_with = "serialize_br_date")]
    #[schema(value_type = String, example = "08/01/2024")]
    pub data_admissao: NaiveDate,
    pub email: Option<String>,
    pub celular: Option<String>,
    pub regime_contratacao: ContractType,
    #[schema(value_type = String, example = "3500.00")]
    pub salario: BigDecimal,
    pub funcao_id: Option<Uuid>,
    pub setor_id: Option<Uuid>,
    pub rua: String,
    pub numero: String,
    pub complemento: Option<String>,
    pub bairro: String,
    pub cidade: String,
    pub estado: String,
    pub cep: String,
    pub status_funcionario: EmployeeStatus,
    pub empresa_id: Uuid,
    pub status: RecordStatus,
    pub criado_por: i32,
    pub atualizado_por: Option<i32>,
    pub criado_em: String,
    pub atualizado_em: String,
}

impl From<Employee> for EmployeeResponse {
    fn from(employee: Employee) -> Self {
        Self {
            id: employee.id,
            nome: employee.nome,
            cpf: employee.cpf,
            data_nascimento: employee.data_nascimento,
            data_admissao: employee.data_admissao,
            email: employee.email,
            celular: employee.celular,
            regime_contratacao: employee.regime_contratacao,
            salario: employee.salario,
            funcao_id: employee.funcao_id,
            setor_id: employee.setor_id,
            rua: employee.rua,
            numero: employee.numero,
            complemento: employee.complemento,
            bairro: employee.bairro,
            cidade: employee.cidade,
            estado: employee.estado,
            cep: employee.cep,
            status_funcionario: employee.status_funcionario,
            empresa_id: employee.empresa_id,
            status: employee.status,
            criado_por: employee.criado_por,
            atualizado_por: employee.atualizado_por,
            criado_em: format_timestamp(&employee.criado_em),
            atualizado_em: format_timestamp(&employee.atualizado_em),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_required_fields_are_reported() {
        let request: CreateEmployeeRequest = serde_json::from_value(json!({
            "nome": "João da Silva",
            "cpf": "12345678901",
            "dataNascimento": "1990-04-12",
            "dataAdmissao": "2024-01-08",
            "rua": "Rua A",
            "numero": "10",
            "bairro": "Centro",
            "cidade": "Campinas",
            "estado": "SP",
            "cep": "13010000"
        }))
        .unwrap();

        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("regime_contratacao"));
        assert!(fields.contains_key("salario"));
        assert_eq!(fields.len(), 2);
    }

    #[test]
    fn test_salario_accepts_number_and_string() {
        let from_number: UpdateEmployeeRequest =
            serde_json::from_value(json!({"salario": 4200})).unwrap();
        let from_string: UpdateEmployeeRequest =
            serde_json::from_value(json!({"salario": "4200.50"})).unwrap();

        assert_eq!(from_number.salario, Some(BigDecimal::from(4200)));
        assert!(from_string.salario.is_some());
    }

    #[test]
    fn test_negative_salario_rejected() {
        let request: UpdateEmployeeRequest =
            serde_json::from_value(json!({"salario": "-1"})).unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_unknown_employment_status_fails_to_deserialize() {
        let result: Result<UpdateEmployeeRequest, _> =
            serde_json::from_value(json!({"statusFuncionario": "APOSENTADO"}));
        assert!(result.is_err());
    }
}
