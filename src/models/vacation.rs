use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use uuid::Uuid;

use super::{RecordStatus, merge, merge_opt};

/// Vacation period (`ferias`) of an employee.
#[derive(Debug, Queryable, Selectable, Clone)]
#[diesel(table_name = crate::schema::ferias)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Vacation {
    pub id: Uuid,
    pub data_inicio: NaiveDate,
    pub data_fim: NaiveDate,
    pub funcionario_id: Uuid,
    pub status: RecordStatus,
    pub criado_por: i32,
    pub atualizado_por: Option<i32>,
    pub criado_em: NaiveDateTime,
    pub atualizado_em: NaiveDateTime,
}

#[derive(Debug, Insertable, Clone)]
#[diesel(table_name = crate::schema::ferias)]
pub struct NewVacation {
    pub id: Uuid,
    pub data_inicio: NaiveDate,
    pub data_fim: NaiveDate,
    pub funcionario_id: Uuid,
    pub criado_por: i32,
}

#[derive(Debug, AsChangeset, Clone, Default)]
#[diesel(table_name = crate::schema::ferias)]
pub struct UpdateVacation {
    pub data_inicio: Option<NaiveDate>,
    pub data_fim: Option<NaiveDate>,
    pub atualizado_por: Option<i32>,
}

impl Vacation {
    pub fn from_new(new: NewVacation, now: NaiveDateTime) -> Self {
        Self {
            id: new.id,
            data_inicio: new.data_inicio,
            data_fim: new.data_fim,
            funcionario_id: new.funcionario_id,
            status: RecordStatus::Ativo,
            criado_por: new.criado_por,
            atualizado_por: None,
            criado_em: now,
            atualizado_em: now,
        }
    }

    pub fn apply_update(&mut self, changes: UpdateVacation, now: NaiveDateTime) {
        merge(&mut self.data_inicio, changes.data_inicio);
        merge(&mut self.data_fim, changes.data_fim);
        merge_opt(&mut self.atualizado_por, changes.atualizado_por);
        self.atualizado_em = now;
    }
}
