use bigdecimal::BigDecimal;
use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use uuid::Uuid;

use super::{ContractType, EmployeeStatus, RecordStatus, merge, merge_opt};

/// Employee (`funcionarios`) of a company.
///
/// `status` is the soft-delete marker; `status_funcionario` is the
/// employment status driven by terminations and manual updates.
#[derive(Debug, Queryable, Selectable, Clone)]
#[diesel(table_name = crate::schema::funcionarios)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Employee {
    pub id: Uuid,
    pub nome: String,
    pub cpf: String,
    pub data_nascimento: NaiveDate,
    pub data_admissao: NaiveDate,
    pub email: Option<String>,
    pub celular: Option<String>,
    pub regime_contratacao: ContractType,
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
    pub criado_em: NaiveDateTime,
    pub atualizado_em: NaiveDateTime,
}

#[derive(Debug, Insertable, Clone)]
#[diesel(table_name = crate::schema::funcionarios)]
pub struct NewEmployee {
    pub id: Uuid,
    pub nome: String,
    pub cpf: String,
    pub data_nascimento: NaiveDate,
    pub data_admissao: NaiveDate,
    pub email: Option<String>,
    pub celular: Option<String>,
    pub regime_contratacao: ContractType,
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
    pub empresa_id: Uuid,
    pub criado_por: i32,
}

#[derive(Debug, AsChangeset, Clone, Default)]
#[diesel(table_name = crate::schema::funcionarios)]
pub struct UpdateEmployee {
    pub nome: Option<String>,
    pub cpf: Option<String>,
    pub data_nascimento: Option<NaiveDate>,
    pub data_admissao: Option<NaiveDate>,
    pub email: Option<String>,
    pub celular: Option<String>,
    pub regime_contratacao: Option<ContractType>,
    pub salario: Option<BigDecimal>,
    pub funcao_id: Option<Uuid>,
    pub setor_id: Option<Uuid>,
    pub rua: Option<String>,
    pub numero: Option<String>,
    pub complemento: Option<String>,
    pub bairro: Option<String>,
    pub cidade: Option<String>,
    pub estado: Option<String>,
    pub cep: Option<String>,
    pub status_funcionario: Option<EmployeeStatus>,
    pub atualizado_por: Option<i32>,
}

impl Employee {
    pub fn from_new(new: NewEmployee, now: NaiveDateTime) -> Self {
        Self {
            id: new.id,
            nome: new.nome,
            cpf: new.cpf,
            data_nascimento: new.data_nascimento,
            data_admissao: new.data_admissao,
            email: new.email,
            celular: new.celular,
            regime_contratacao: new.regime_contratacao,
            salario: new.salario,
            funcao_id: new.funcao_id,
            setor_id: new.setor_id,
            rua: new.rua,
            numero: new.numero,
            complemento: new.complemento,
            bairro: new.bairro,
            cidade: new.cidade,
            estado: new.estado,
            cep: new.cep,
            status_funcionario: EmployeeStatus::Ativo,
            empresa_id: new.empresa_id,
            status: RecordStatus::Ativo,
            criado_por: new.criado_por,
            atualizado_por: None,
            criado_em: now,
            atualizado_em: now,
        }
    }

    pub fn apply_update(&mut self, changes: UpdateEmployee, now: NaiveDateTime) {
        merge(&mut self.nome, changes.nome);
        merge(&mut self.cpf, changes.cpf);
        merge(&mut self.data_nascimento, changes.data_nascimento);
        merge(&mut self.data_admissao, changes.data_admissao);
        merge_opt(&mut self.email, changes.email);
        merge_opt(&mut self.celular, changes.celular);
        merge(&mut self.regime_contratacao, changes.regime_contratacao);
        merge(&mut self.salario, changes.salario);
        merge_opt(&mut self.funcao_id, changes.funcao_id);
        merge_opt(&mut self.setor_id, changes.setor_id);
        merge(&mut self.rua, changes.rua);
        merge(&mut self.numero, changes.numero);
        merge_opt(&mut self.complemento, changes.complemento);
        merge(&mut self.bairro, changes.bairro);
        merge(&mut self.cidade, changes.cidade);
        merge(&mut self.estado, changes.estado);
        merge(&mut self.cep, changes.cep);
        merge(&mut self.status_funcionario, changes.status_funcionario);
        merge_opt(&mut self.atualizado_por, changes.atualizado_por);
        self.atualizado_em = now;
    }
}
