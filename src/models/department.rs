use chrono::NaiveDateTime;
use diesel::prelude::*;
use uuid::Uuid;

use super::{RecordStatus, merge, merge_opt};

/// Department (`setores`) of a company.
#[derive(Debug, Queryable, Selectable, Clone)]
#[diesel(table_name = crate::schema::setores)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Department {
    pub id: Uuid,
    pub nome: String,
    pub empresa_id: Uuid,
    pub status: RecordStatus,
    pub criado_por: i32,
    pub atualizado_por: Option<i32>,
    pub criado_em: NaiveDateTime,
    pub atualizado_em: NaiveDateTime,
}

#[derive(Debug, Insertable, Clone)]
#[diesel(table_name = crate::schema::setores)]
pub struct NewDepartment {
    pub id: Uuid,
    pub nome: String,
    pub empresa_id: Uuid,
    pub criado_por: i32,
}

#[derive(Debug, AsChangeset, Clone, Default)]
#[diesel(table_name = crate::schema::setores)]
pub struct UpdateDepartment {
    pub nome: Option<String>,
    pub atualizado_por: Option<i32>,
}

impl Department {
    pub fn from_new(new: NewDepartment, now: NaiveDateTime) -> Self {
        Self {
            id: new.id,
            nome: new.nome,
            empresa_id: new.empresa_id,
            status: RecordStatus::Ativo,
            criado_por: new.criado_por,
            atualizado_por: None,
            criado_em: now,
            atualizado_em: now,
        }
    }

    pub fn apply_update(&mut self, changes: UpdateDepartment, now: NaiveDateTime) {
        merge(&mut self.nome, changes.nome);
        merge_opt(&mut self.atualizado_por, changes.atualizado_por);
        self.atualizado_em = now;
    }
}
