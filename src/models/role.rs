use chrono::NaiveDateTime;
use diesel::prelude::*;
use uuid::Uuid;

use super::{Epi, RecordStatus, merge, merge_opt};

/// Role (`funcoes`) of a company. Linked to the EPIs it requires through
/// the `funcoes_epis` join table.
#[derive(Debug, Queryable, Selectable, Clone)]
#[diesel(table_name = crate::schema::funcoes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Role {
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
#[diesel(table_name = crate::schema::funcoes)]
pub struct NewRole {
    pub id: Uuid,
    pub nome: String,
    pub empresa_id: Uuid,
    pub criado_por: i32,
}

#[derive(Debug, AsChangeset, Clone, Default)]
#[diesel(table_name = crate::schema::funcoes)]
pub struct UpdateRole {
    pub nome: Option<String>,
    pub atualizado_por: Option<i32>,
}

/// Row of the role/EPI join table.
#[derive(Debug, Queryable, Insertable, Clone, Copy, PartialEq, Eq)]
#[diesel(table_name = crate::schema::funcoes_epis)]
pub struct RoleEpi {
    pub funcao_id: Uuid,
    pub epi_id: Uuid,
}

/// A role together with its active EPIs.
#[derive(Debug, Clone)]
pub struct RoleWithEpis {
    pub role: Role,
    pub epis: Vec<Epi>,
}

impl Role {
    pub fn from_new(new: NewRole, now: NaiveDateTime) -> Self {
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

    pub fn apply_update(&mut self, changes: UpdateRole, now: NaiveDateTime) {
        merge(&mut self.nome, changes.nome);
        merge_opt(&mut self.atualizado_por, changes.atualizado_por);
        self.atualizado_em = now;
    }
}
