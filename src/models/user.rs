use chrono::NaiveDateTime;
use diesel::prelude::*;

/// Application user. Every HR record is stamped with the id of the user who
/// created or last changed it.
#[derive(Debug, Queryable, Selectable, Clone)]
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct User {
    pub id: i32,
    pub nome: String,
    pub email: String,
    /// Argon2 PHC hash
    pub senha: String,
    pub criado_em: NaiveDateTime,
    pub atualizado_em: NaiveDateTime,
}

/// NewUser model for inserting new records
#[derive(Debug, Insertable, Clone)]
#[diesel(table_name = crate::schema::users)]
pub struct NewUser {
    pub nome: String,
    pub email: String,
    pub senha: String,
}

impl User {
    pub fn from_new(id: i32, new: NewUser, now: NaiveDateTime) -> Self {
        Self {
            id,
            nome: new.nome,
            email: new.email,
            senha: new.senha,
            criado_em: now,
            atualizado_em: now,
        }
    }
}
