use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use uuid::Uuid;

use super::{RecordStatus, merge, merge_opt};

/// Termination (`demissoes`) of an employee. At most one active
/// termination exists per employee.
#[derive(Debug, Queryable, Selectable, Clone)]
#[diesel(table_name = crate::schema::demissoes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Termination {
    pub id: Uuid,
    pub data: NaiveDate,
    pub motivo_interno: String,
    pub motivo_trabalhista: Option<String>,
    pub acao_trabalhista: Option<String>,
    pub forma_demissao: String,
    pub funcionario_id: Uuid,
    pub status: RecordStatus,
    pub criado_por: i32,
    pub atualizado_por: Option<i32>,
    pub criado_em: NaiveDateTime,
    pub atualizado_em: NaiveDateTime,
}

#[derive(Debug, Insertable, Clone)]
#[diesel(table_name = crate::schema::demissoes)]
pub struct NewTermination {
    pub id: Uuid,
    pub data: NaiveDate,
    pub motivo_interno: String,
    pub motivo_trabalhista: Option<String>,
    pub acao_trabalhista: Option<String>,
    pub forma_demissao: String,
    pub funcionario_id: Uuid,
    pub criado_por: i32,
}

#[derive(Debug, AsChangeset, Clone, Default)]
#[diesel(table_name = crate::schema::demissoes)]
pub struct UpdateTermination {
    pub data: Option<NaiveDate>,
    pub motivo_interno: Option<String>,
    pub motivo_trabalhista: Option<String>,
    pub acao_trabalhista: Option<String>,
    pub forma_demissao: Option<String>,
    pub atualizado_por: Option<i32>,
}

impl Termination {
    pub fn from_new(new: NewTermination, now: NaiveDateTime) -> Self {
        Self {
            id: new.id,
            data: new.data,
            motivo_interno: new.motivo_interno,
            motivo_trabalhista: new.motivo_trabalhista,
            acao_trabalhista: new.acao_trabalhista,
            forma_demissao: new.forma_demissao,
            funcionario_id: new.funcionario_id,
            status: RecordStatus::Ativo,
            criado_por: new.criado_por,
            atualizado_por: None,
            criado_em: now,
            atualizado_em: now,
        }
    }

    pub fn apply_update(&mut self, changes: UpdateTermination, now: NaiveDateTime) {
        merge(&mut self.data, changes.data);
        merge(&mut self.motivo_interno, changes.motivo_interno);
        merge_opt(&mut self.motivo_trabalhista, changes.motivo_trabalhista);
        merge_opt(&mut self.acao_trabalhista, changes.acao_trabalhista);
        merge(&mut self.forma_demissao, changes.forma_demissao);
        merge_opt(&mut self.atualizado_por, changes.atualizado_por);
        self.atualizado_em = now;
    }
}
