use chrono::NaiveDateTime;
use diesel::prelude::*;
use uuid::Uuid;

use super::{RecordStatus, merge, merge_opt};

/// Personal protective equipment (EPI) registered by a company.
#[derive(Debug, Queryable, Selectable, Clone)]
#[diesel(table_name = crate::schema::epis)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Epi {
    pub id: Uuid,
    pub nome: String,
    pub descricao: Option<String>,
    /// Certificado de Aprovação number issued for the equipment
    pub certificado_aprovacao: Option<String>,
    pub empresa_id: Uuid,
    pub status: RecordStatus,
    pub criado_por: i32,
    pub atualizado_por: Option<i32>,
    pub criado_em: NaiveDateTime,
    pub atualizado_em: NaiveDateTime,
}

#[derive(Debug, Insertable, Clone)]
#[diesel(table_name = crate::schema::epis)]
pub struct NewEpi {
    pub id: Uuid,
    pub nome: String,
    pub descricao: Option<String>,
    pub certificado_aprovacao: Option<String>,
    pub empresa_id: Uuid,
    pub criado_por: i32,
}

#[derive(Debug, AsChangeset, Clone, Default)]
#[diesel(table_name = crate::schema::epis)]
pub struct UpdateEpi {
    pub nome: Option<String>,
    pub descricao: Option<String>,
    pub certificado_aprovacao: Option<String>,
    pub atualizado_por: Option<i32>,
}

impl Epi {
    pub fn from_new(new: NewEpi, now: NaiveDateTime) -> Self {
        Self {
            id: new.id,
            nome: new.nome,
            descricao: new.descricao,
            certificado_aprovacao: new.certificado_aprovacao,
            empresa_id: new.empresa_id,
            status: RecordStatus::Ativo,
            criado_por: new.criado_por,
            atualizado_por: None,
            criado_em: now,
            atualizado_em: now,
        }
    }

    pub fn apply_update(&mut self, changes: UpdateEpi, now: NaiveDateTime) {
        merge(&mut self.nome, changes.nome);
        merge_opt(&mut self.descricao, changes.descricao);
        merge_opt(&mut self.certificado_aprovacao, changes.certificado_aprovacao);
        merge_opt(&mut self.atualizado_por, changes.atualizado_por);
        self.atualizado_em = now;
    }
}
