use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use uuid::Uuid;

use super::{RecordStatus, merge, merge_opt};

/// Construction project (`projetos`) registered under a company.
#[derive(Debug, Queryable, Selectable, Clone)]
#[diesel(table_name = crate::schema::projetos)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Project {
    pub id: Uuid,
    pub nome: String,
    pub descricao: String,
    pub data_inicio: NaiveDate,
    /// Cadastro Nacional de Obras number
    pub cno: String,
    pub empresa_id: Uuid,
    pub status: RecordStatus,
    pub criado_por: i32,
    pub atualizado_por: Option<i32>,
    pub criado_em: NaiveDateTime,
    pub atualizado_em: NaiveDateTime,
}

#[derive(Debug, Insertable, Clone)]
#[diesel(table_name = crate::schema::projetos)]
pub struct NewProject {
    pub id: Uuid,
    pub nome: String,
    pub descricao: String,
    pub data_inicio: NaiveDate,
    pub cno: String,
    pub empresa_id: Uuid,
    pub criado_por: i32,
}

#[derive(Debug, AsChangeset, Clone, Default)]
#[diesel(table_name = crate::schema::projetos)]
pub struct UpdateProject {
    pub nome: Option<String>,
    pub descricao: Option<String>,
    pub data_inicio: Option<NaiveDate>,
    pub cno: Option<String>,
    pub atualizado_por: Option<i32>,
}

impl Project {
    pub fn from_new(new: NewProject, now: NaiveDateTime) -> Self {
        Self {
            id: new.id,
            nome: new.nome,
            descricao: new.descricao,
            data_inicio: new.data_inicio,
            cno: new.cno,
            empresa_id: new.empresa_id,
            status: RecordStatus::Ativo,
            criado_por: new.criado_por,
            atualizado_por: None,
            criado_em: now,
            atualizado_em: now,
        }
    }

    pub fn apply_update(&mut self, changes: UpdateProject, now: NaiveDateTime) {
        merge(&mut self.nome, changes.nome);
        merge(&mut self.descricao, changes.descricao);
        merge(&mut self.data_inicio, changes.data_inicio);
        merge(&mut self.cno, changes.cno);
        merge_opt(&mut self.atualizado_por, changes.atualizado_por);
        self.atualizado_em = now;
    }
}
