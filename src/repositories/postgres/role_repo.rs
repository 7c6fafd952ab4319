//! Role repository backed by PostgreSQL.
//!
//! A role's EPI set lives in `funcoes_epis`; writes that touch both tables run
//! inside one transaction.

use std::collections::HashMap;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, AsyncPgConnection, RunQueryDsl};
use uuid::Uuid;

use crate::db::AsyncDbPool;
use crate::error::{AppError, AppResult};
use crate::models::{Epi, NewRole, RecordStatus, Role, RoleEpi, RoleWithEpis, UpdateRole};
use crate::repositories::RoleRepository;
use crate::schema::{epis, funcoes, funcoes_epis};

#[derive(Clone)]
pub struct PgRoleRepository {
    pool: AsyncDbPool,
}

impl PgRoleRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }
}

/// Active EPIs linked to one role, by name.
async fn load_epis(conn: &mut AsyncPgConnection, role_id: Uuid) -> QueryResult<Vec<Epi>> {
    funcoes_epis::table
        .inner_join(epis::table)
        .filter(funcoes_epis::funcao_id.eq(role_id))
        .filter(epis::status.eq(RecordStatus::Ativo))
        .order(epis::nome.asc())
        .select(Epi::as_select())
        .load(conn)
        .await
}

async fn replace_epis(
    conn: &mut AsyncPgConnection,
    role_id: Uuid,
    epi_ids: &[Uuid],
) -> QueryResult<()> {
    diesel::delete(funcoes_epis::table.filter(funcoes_epis::funcao_id.eq(role_id)))
        .execute(conn)
        .await?;

    let links: Vec<RoleEpi> = epi_ids
        .iter()
        .map(|epi_id| RoleEpi {
            funcao_id: role_id,
            epi_id: *epi_id,
        })
        .collect();
    if !links.is_empty() {
        diesel::insert_into(funcoes_epis::table)
            .values(&links)
            .on_conflict_do_nothing()
            .execute(conn)
            .await?;
    }
    Ok(())
}

#[async_trait]
impl RoleRepository for PgRoleRepository {
    async fn create(&self, new_role: NewRole, epi_ids: Vec<Uuid>) -> AppResult<RoleWithEpis> {
        let mut conn = self.pool.get().await?;

        conn.transaction::<_, AppError, _>(|conn| {
            async move {
                let role = diesel::insert_into(funcoes::table)
                    .values(&new_role)
                    .returning(Role::as_returning())
                    .get_result(conn)
                    .await?;
                replace_epis(conn, role.id, &epi_ids).await?;
                let epis = load_epis(conn, role.id).await?;
                Ok(RoleWithEpis { role, epis })
            }
            .scope_boxed()
        })
        .await
    }

    async fn find_active(&self, role_id: Uuid) -> AppResult<Option<RoleWithEpis>> {
        let mut conn = self.pool.get().await?;

        let role = funcoes::table
            .filter(funcoes::id.eq(role_id))
            .filter(funcoes::status.eq(RecordStatus::Ativo))
            .select(Role::as_select())
            .first(&mut conn)
            .await
            .optional()?;

        match role {
            Some(role) => {
                let epis = load_epis(&mut conn, role.id).await?;
                Ok(Some(RoleWithEpis { role, epis }))
            }
            None => Ok(None),
        }
    }

    async fn list_active_by_company(&self, company_id: Uuid) -> AppResult<Vec<RoleWithEpis>> {
        let mut conn = self.pool.get().await?;

        let roles: Vec<Role> = funcoes::table
            .filter(funcoes::empresa_id.eq(company_id))
            .filter(funcoes::status.eq(RecordStatus::Ativo))
            .order(funcoes::nome.asc())
            .select(Role::as_select())
            .load(&mut conn)
            .await?;

        let role_ids: Vec<Uuid> = roles.iter().map(|role| role.id).collect();
        let links: Vec<(Uuid, Epi)> = funcoes_epis::table
            .inner_join(epis::table)
            .filter(funcoes_epis::funcao_id.eq_any(&role_ids))
            .filter(epis::status.eq(RecordStatus::Ativo))
            .order(epis::nome.asc())
            .select((funcoes_epis::funcao_id, Epi::as_select()))
            .load(&mut conn)
            .await?;

        let mut by_role: HashMap<Uuid, Vec<Epi>> = HashMap::new();
        for (role_id, epi) in links {
            by_role.entry(role_id).or_default().push(epi);
        }

        Ok(roles
            .into_iter()
            .map(|role| {
                let epis = by_role.remove(&role.id).unwrap_or_default();
                RoleWithEpis { role, epis }
            })
            .collect())
    }

    async fn update_active(
        &self,
        role_id: Uuid,
        changes: UpdateRole,
        epi_ids: Option<Vec<Uuid>>,
    ) -> AppResult<Option<RoleWithEpis>> {
        let mut conn = self.pool.get().await?;

        conn.transaction::<_, AppError, _>(|conn| {
            async move {
                let role = diesel::update(
                    funcoes::table
                        .filter(funcoes::id.eq(role_id))
                        .filter(funcoes::status.eq(RecordStatus::Ativo)),
                )
                .set(&changes)
                .returning(Role::as_returning())
                .get_result(conn)
                .await
                .optional()?;

                let Some(role) = role else {
                    return Ok(None);
                };
                if let Some(epi_ids) = epi_ids {
                    replace_epis(conn, role.id, &epi_ids).await?;
                }
                let epis = load_epis(conn, role.id).await?;
                Ok(Some(RoleWithEpis { role, epis }))
            }
            .scope_boxed()
        })
        .await
    }

    async fn soft_delete(&self, role_id: Uuid, actor_id: i32) -> AppResult<Option<RoleWithEpis>> {
        let mut conn = self.pool.get().await?;

        let role = diesel::update(
            funcoes::table
                .filter(funcoes::id.eq(role_id))
                .filter(funcoes::status.eq(RecordStatus::Ativo)),
        )
        .set((
            funcoes::status.eq(RecordStatus::Excluido),
            funcoes::atualizado_por.eq(Some(actor_id)),
        ))
        .returning(Role::as_returning())
        .get_result(&mut conn)
        .await
        .optional()?;

        match role {
            Some(role) => {
                let epis = load_epis(&mut conn, role.id).await?;
                Ok(Some(RoleWithEpis { role, epis }))
            }
            None => Ok(None),
        }
    }
}
