use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use uuid::Uuid;

use super::{RecordStatus, merge, merge_opt};

/// Company (`empresas`), the scope every other HR record hangs from.
#[derive(Debug, Queryable, Selectable, Clone)]
#[diesel(table_name = crate::schema::empresas)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Company {
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
    pub data_fundacao: Option<NaiveDate>,
    pub email: Option<String>,
    pub celular: Option<String>,
    pub status: RecordStatus,
    pub criado_por: i32,
    pub atualizado_por: Option<i32>,
    pub criado_em: NaiveDateTime,
    pub atualizado_em: NaiveDateTime,
}

#[derive(Debug, Insertable, Clone)]
#[diesel(table_name = crate::schema::empresas)]
pub struct NewCompany {
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
    pub data_fundacao: Option<NaiveDate>,
    pub email: Option<String>,
    pub celular: Option<String>,
    pub criado_por: i32,
}

/// Partial update; `None` leaves the column untouched.
#[derive(Debug, AsChangeset, Clone, Default)]
#[diesel(table_name = crate::schema::empresas)]
pub struct UpdateCompany {
    pub nome_fantasia: Option<String>,
    pub razao_social: Option<String>,
    pub cnpj: Option<String>,
    pub rua: Option<String>,
    pub numero: Option<String>,
    pub complemento: Option<String>,
    pub bairro: Option<String>,
    pub cidade: Option<String>,
    pub estado: Option<String>,
    pub cep: Option<String>,
    pub data_fundacao: Option<NaiveDate>,
    pub email: Option<String>,
    pub celular: Option<String>,
    pub atualizado_por: Option<i32>,
}

impl Company {
    pub fn from_new(new: NewCompany, now: NaiveDateTime) -> Self {
        Self {
            id: new.id,
            nome_fantasia: new.nome_fantasia,
            razao_social: new.razao_social,
            cnpj: new.cnpj,
            rua: new.rua,
            numero: new.numero,
            complemento: new.complemento,
            bairro: new.bairro,
            cidade: new.cidade,
            estado: new.estado,
            cep: new.cep,
            data_fundacao: new.data_fundacao,
            email: new.email,
            celular: new.celular,
            status: RecordStatus::Ativo,
            criado_por: new.criado_por,
            atualizado_por: None,
            criado_em: now,
            atualizado_em: now,
        }
    }

    pub fn apply_update(&mut self, changes: UpdateCompany, now: NaiveDateTime) {
        merge(&mut self.nome_fantasia, changes.nome_fantasia);
        merge(&mut self.razao_social, changes.razao_social);
        merge(&mut self.cnpj, changes.cnpj);
        merge(&mut self.rua, changes.rua);
        merge(&mut self.numero, changes.numero);
        merge_opt(&mut self.complemento, changes.complemento);
        merge(&mut self.bairro, changes.bairro);
        merge(&mut self.cidade, changes.cidade);
        merge(&mut self.estado, changes.estado);
        merge(&mut self.cep, changes.cep);
        merge_opt(&mut self.data_fundacao, changes.data_fundacao);
        merge_opt(&mut self.email, changes.email);
        merge_opt(&mut self.celular, changes.celular);
        merge_opt(&mut self.atualizado_por, changes.atualizado_por);
        self.atualizado_em = now;
    }
}
