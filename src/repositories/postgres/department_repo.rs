//! Department repository backed by PostgreSQL.
//!
//! Departments are listed per company, alphabetically.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::db::AsyncDbPool;
use crate::error::{AppError, AppResult};
use crate::models::{Department, NewDepartment, RecordStatus, UpdateDepartment};
use crate::repositories::DepartmentRepository;

#[derive(Clone)]
pub struct PgDepartmentRepository {
    pool: AsyncDbPool,
}

impl PgDepartmentRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DepartmentRepository for PgDepartmentRepository {
    async fn create(&self, new_record: NewDepartment) -> AppResult<Department> {
        use crate::schema::setores::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::insert_into(setores)
            .values(&new_record)
            .returning(Department::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    async fn find_active(&self, record_id: Uuid) -> AppResult<Option<Department>> {
        use crate::schema::setores::dsl::*;
        let mut conn = self.pool.get().await?;

        setores
            .filter(id.eq(record_id))
            .filter(status.eq(RecordStatus::Ativo))
            .select(Department::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    async fn list_active_by_company(&self, company_id: Uuid) -> AppResult<Vec<Department>> {
        use crate::schema::setores::dsl::*;
        let mut conn = self.pool.get().await?;

        setores
            .filter(empresa_id.eq(company_id))
            .filter(status.eq(RecordStatus::Ativo))
            .order(nome.asc())
            .select(Department::as_select())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    async fn update_active(
        &self,
        record_id: Uuid,
        changes: UpdateDepartment,
    ) -> AppResult<Option<Department>> {
        use crate::schema::setores::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::update(setores.filter(id.eq(record_id)).filter(status.eq(RecordStatus::Ativo)))
            .set(&changes)
            .returning(Department::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    async fn soft_delete(&self, record_id: Uuid, actor_id: i32) -> AppResult<Option<Department>> {
        use crate::schema::setores::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::update(setores.filter(id.eq(record_id)).filter(status.eq(RecordStatus::Ativo)))
            .set((status.eq(RecordStatus::Excluido), atualizado_por.eq(Some(actor_id))))
            .returning(Department::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }
}
