//! Termination repository backed by PostgreSQL.
//!
//! Creating or removing a termination also moves the employee's employment
//! status. Both writes happen in one transaction that holds a row lock on the
//! employee, and the partial unique index `demissoes_funcionario_id_ativa_key`
//! backs the one-open-termination rule.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, AsyncPgConnection, RunQueryDsl};
use uuid::Uuid;

use crate::db::AsyncDbPool;
use crate::error::{AppError, AppResult};
use crate::models::{
    EMPLOYEE_ALREADY_TERMINATED, EmployeeStatus, NewTermination, RecordStatus, Termination,
    UpdateTermination,
};
use crate::repositories::{StatusTransition, TerminationRepository};
use crate::schema::{demissoes, funcionarios};

#[derive(Clone)]
pub struct PgTerminationRepository {
    pool: AsyncDbPool,
}

impl PgTerminationRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }
}

/// Reads the employment status with `SELECT ... FOR UPDATE`, together with
/// the employee's soft-delete marker.
async fn lock_employee(
    conn: &mut AsyncPgConnection,
    employee_id: Uuid,
) -> QueryResult<Option<(EmployeeStatus, RecordStatus)>> {
    funcionarios::table
        .filter(funcionarios::id.eq(employee_id))
        .select((funcionarios::status_funcionario, funcionarios::status))
        .for_update()
        .first(conn)
        .await
        .optional()
}

async fn store_employee_status(
    conn: &mut AsyncPgConnection,
    employee_id: Uuid,
    next: EmployeeStatus,
    actor_id: i32,
) -> QueryResult<usize> {
    diesel::update(funcionarios::table.filter(funcionarios::id.eq(employee_id)))
        .set((
            funcionarios::status_funcionario.eq(next),
            funcionarios::atualizado_por.eq(Some(actor_id)),
        ))
        .execute(conn)
        .await
}

#[async_trait]
impl TerminationRepository for PgTerminationRepository {
    async fn create_with_transition(
        &self,
        new_termination: NewTermination,
        transition: StatusTransition,
    ) -> AppResult<Option<Termination>> {
        let mut conn = self.pool.get().await?;

        conn.transaction::<_, AppError, _>(|conn| {
            async move {
                let employee_id = new_termination.funcionario_id;
                let current = match lock_employee(conn, employee_id).await? {
                    Some((current, RecordStatus::Ativo)) => current,
                    _ => return Ok(None),
                };
                let next = transition(current)?;

                let open: i64 = demissoes::table
                    .filter(demissoes::funcionario_id.eq(employee_id))
                    .filter(demissoes::status.eq(RecordStatus::Ativo))
                    .count()
                    .get_result(conn)
                    .await?;
                if open > 0 {
                    return Err(AppError::conflict(EMPLOYEE_ALREADY_TERMINATED));
                }

                let termination = diesel::insert_into(demissoes::table)
                    .values(&new_termination)
                    .returning(Termination::as_returning())
                    .get_result(conn)
                    .await?;
                store_employee_status(conn, employee_id, next, new_termination.criado_por)
                    .await?;

                Ok(Some(termination))
            }
            .scope_boxed()
        })
        .await
    }

    async fn find_active(&self, termination_id: Uuid) -> AppResult<Option<Termination>> {
        use crate::schema::demissoes::dsl::*;
        let mut conn = self.pool.get().await?;

        demissoes
            .filter(id.eq(termination_id))
            .filter(status.eq(RecordStatus::Ativo))
            .select(Termination::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    async fn list_active_by_employee(&self, employee_id: Uuid) -> AppResult<Vec<Termination>> {
        use crate::schema::demissoes::dsl::*;
        let mut conn = self.pool.get().await?;

        demissoes
            .filter(funcionario_id.eq(employee_id))
            .filter(status.eq(RecordStatus::Ativo))
            .order((data.desc(), criado_em.desc()))
            .select(Termination::as_select())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    async fn list_active_by_company(&self, company_id: Uuid) -> AppResult<Vec<Termination>> {
        let mut conn = self.pool.get().await?;

        demissoes::table
            .inner_join(funcionarios::table)
            .filter(funcionarios::empresa_id.eq(company_id))
            .filter(demissoes::status.eq(RecordStatus::Ativo))
            .order((demissoes::data.desc(), demissoes::criado_em.desc()))
            .select(Termination::as_select())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    async fn update_active(
        &self,
        termination_id: Uuid,
        changes: UpdateTermination,
    ) -> AppResult<Option<Termination>> {
        use crate::schema::demissoes::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::update(demissoes.filter(id.eq(termination_id)).filter(status.eq(RecordStatus::Ativo)))
            .set(&changes)
            .returning(Termination::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    async fn soft_delete_with_transition(
        &self,
        termination_id: Uuid,
        actor_id: i32,
        transition: StatusTransition,
    ) -> AppResult<Option<Termination>> {
        let mut conn = self.pool.get().await?;

        conn.transaction::<_, AppError, _>(|conn| {
            async move {
                let employee_id: Option<Uuid> = demissoes::table
                    .filter(demissoes::id.eq(termination_id))
                    .filter(demissoes::status.eq(RecordStatus::Ativo))
                    .select(demissoes::funcionario_id)
                    .first(conn)
                    .await
                    .optional()?;
                let Some(employee_id) = employee_id else {
                    return Ok(None);
                };

                // Same lock order as creation: employee first, then termination.
                let current = lock_employee(conn, employee_id).await?;

                let removed = diesel::update(
                    demissoes::table
                        .filter(demissoes::id.eq(termination_id))
                        .filter(demissoes::status.eq(RecordStatus::Ativo)),
                )
                .set((
                    demissoes::status.eq(RecordStatus::Excluido),
                    demissoes::atualizado_por.eq(Some(actor_id)),
                ))
                .returning(Termination::as_returning())
                .get_result(conn)
                .await
                .optional()?;
                let Some(removed) = removed else {
                    return Ok(None);
                };

                if let Some((current, _)) = current {
                    let next = transition(current)?;
                    if next != current {
                        store_employee_status(conn, employee_id, next, actor_id).await?;
                    }
                }

                Ok(Some(removed))
            }
            .scope_boxed()
        })
        .await
    }
}
