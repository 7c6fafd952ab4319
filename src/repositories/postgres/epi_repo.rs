//! Epi repository backed by PostgreSQL.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::db::AsyncDbPool;
use crate::error::{AppError, AppResult};
use crate::models::{Epi, NewEpi, RecordStatus, UpdateEpi};
use crate::repositories::EpiRepository;

#[derive(Clone)]
pub struct PgEpiRepository {
    pool: AsyncDbPool,
}

impl PgEpiRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EpiRepository for PgEpiRepository {
    async fn create(&self, new_record: NewEpi) -> AppResult<Epi> {
        use crate::schema::epis::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::insert_into(epis)
            .values(&new_record)
            .returning(Epi::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    async fn find_active(&self, record_id: Uuid) -> AppResult<Option<Epi>> {
        use crate::schema::epis::dsl::*;
        let mut conn = self.pool.get().await?;

        epis
            .filter(id.eq(record_id))
            .filter(status.eq(RecordStatus::Ativo))
            .select(Epi::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    async fn find_active_in_company(
        &self,
        company_id: Uuid,
        epi_ids: &[Uuid],
    ) -> AppResult<Vec<Epi>> {
        use crate::schema::epis::dsl::*;
        if epi_ids.is_empty() {
            return Ok(Vec::new());
        }
        let mut conn = self.pool.get().await?;

        epis
            .filter(id.eq_any(epi_ids))
            .filter(empresa_id.eq(company_id))
            .filter(status.eq(RecordStatus::Ativo))
            .select(Epi::as_select())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    async fn list_active_by_company(&self, company_id: Uuid) -> AppResult<Vec<Epi>> {
        use crate::schema::epis::dsl::*;
        let mut conn = self.pool.get().await?;

        epis
            .filter(empresa_id.eq(company_id))
            .filter(status.eq(RecordStatus::Ativo))
            .order(nome.asc())
            .select(Epi::as_select())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    async fn update_active(
        &self,
        record_id: Uuid,
        changes: UpdateEpi,
    ) -> AppResult<Option<Epi>> {
        use crate::schema::epis::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::update(epis.filter(id.eq(record_id)).filter(status.eq(RecordStatus::Ativo)))
            .set(&changes)
            .returning(Epi::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    async fn soft_delete(&self, record_id: Uuid, actor_id: i32) -> AppResult<Option<Epi>> {
        use crate::schema::epis::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::update(epis.filter(id.eq(record_id)).filter(status.eq(RecordStatus::Ativo)))
            .set((status.eq(RecordStatus::Excluido), atualizado_por.eq(Some(actor_id))))
            .returning(Epi::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }
}
