//! Project repository backed by PostgreSQL.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::db::AsyncDbPool;
use crate::error::{AppError, AppResult};
use crate::models::{Project, NewProject, RecordStatus, UpdateProject};
use crate::repositories::ProjectRepository;

#[derive(Clone)]
pub struct PgProjectRepository {
    pool: AsyncDbPool,
}

impl PgProjectRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProjectRepository for PgProjectRepository {
    async fn create(&self, new_record: NewProject) -> AppResult<Project> {
        use crate::schema::projetos::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::insert_into(projetos)
            .values(&new_record)
            .returning(Project::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    async fn find_active(&self, record_id: Uuid) -> AppResult<Option<Project>> {
        use crate::schema::projetos::dsl::*;
        let mut conn = self.pool.get().await?;

        projetos
            .filter(id.eq(record_id))
            .filter(status.eq(RecordStatus::Ativo))
            .select(Project::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    async fn list_active_by_company(&self, company_id: Uuid) -> AppResult<Vec<Project>> {
        use crate::schema::projetos::dsl::*;
        let mut conn = self.pool.get().await?;

        projetos
            .filter(empresa_id.eq(company_id))
            .filter(status.eq(RecordStatus::Ativo))
            .order(nome.asc())
            .select(Project::as_select())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    async fn update_active(
        &self,
        record_id: Uuid,
        changes: UpdateProject,
    ) -> AppResult<Option<Project>> {
        use crate::schema::projetos::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::update(projetos.filter(id.eq(record_id)).filter(status.eq(RecordStatus::Ativo)))
            .set(&changes)
            .returning(Project::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    async fn soft_delete(&self, record_id: Uuid, actor_id: i32) -> AppResult<Option<Project>> {
        use crate::schema::projetos::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::update(projetos.filter(id.eq(record_id)).filter(status.eq(RecordStatus::Ativo)))
            .set((status.eq(RecordStatus::Excluido), atualizado_por.eq(Some(actor_id))))
            .returning(Project::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }
}
