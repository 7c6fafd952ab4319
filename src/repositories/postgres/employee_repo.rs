//! Employee repository backed by PostgreSQL.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};
use uuid::Uuid;

use crate::db::AsyncDbPool;
use crate::error::{AppError, AppResult};
use crate::models::{Employee, EmployeeStatus, NewEmployee, RecordStatus, UpdateEmployee};
use crate::repositories::EmployeeRepository;

/// Employee rows. Manual status changes lock the row the same way the
/// termination repository does, so the two writers are serialized.
#[derive(Clone)]
pub struct PgEmployeeRepository {
    pool: AsyncDbPool,
}

impl PgEmployeeRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmployeeRepository for PgEmployeeRepository {
    async fn create(&self, new_record: NewEmployee) -> AppResult<Employee> {
        use crate::schema::funcionarios::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::insert_into(funcionarios)
            .values(&new_record)
            .returning(Employee::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    async fn find_active(&self, record_id: Uuid) -> AppResult<Option<Employee>> {
        use crate::schema::funcionarios::dsl::*;
        let mut conn = self.pool.get().await?;

        funcionarios
            .filter(id.eq(record_id))
            .filter(status.eq(RecordStatus::Ativo))
            .select(Employee::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    async fn list_active_by_company(&self, company_id: Uuid) -> AppResult<Vec<Employee>> {
        use crate::schema::funcionarios::dsl::*;
        let mut conn = self.pool.get().await?;

        funcionarios
            .filter(empresa_id.eq(company_id))
            .filter(status.eq(RecordStatus::Ativo))
            .order(nome.asc())
            .select(Employee::as_select())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    async fn update_active(
        &self,
        record_id: Uuid,
        changes: UpdateEmployee,
    ) -> AppResult<Option<Employee>> {
        use crate::schema::funcionarios::dsl::*;
        let mut conn = self.pool.get().await?;

        conn.transaction::<_, AppError, _>(|conn| {
            async move {
                if let Some(target) = changes.status_funcionario {
                    let current: Option<EmployeeStatus> = funcionarios
                        .filter(id.eq(record_id))
                        .filter(status.eq(RecordStatus::Ativo))
                        .select(status_funcionario)
                        .for_update()
                        .first(conn)
                        .await
                        .optional()?;
                    let Some(current) = current else {
                        return Ok(None);
                    };
                    current.change_to(target)?;
                }

                let updated = diesel::update(
                    funcionarios.filter(id.eq(record_id)).filter(status.eq(RecordStatus::Ativo)),
                )
                .set(&changes)
                .returning(Employee::as_returning())
                .get_result(conn)
                .await
                .optional()?;
                Ok(updated)
            }
            .scope_boxed()
        })
        .await
    }

    async fn soft_delete(&self, record_id: Uuid, actor_id: i32) -> AppResult<Option<Employee>> {
        use crate::schema::funcionarios::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::update(funcionarios.filter(id.eq(record_id)).filter(status.eq(RecordStatus::Ativo)))
            .set((status.eq(RecordStatus::Excluido), atualizado_por.eq(Some(actor_id))))
            .returning(Employee::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }
}
