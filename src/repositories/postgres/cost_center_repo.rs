//! Cost center repository backed by PostgreSQL.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::db::AsyncDbPool;
use crate::error::{AppError, AppResult};
use crate::models::{CostCenter, NewCostCenter, RecordStatus, UpdateCostCenter};
use crate::repositories::CostCenterRepository;

#[derive(Clone)]
pub struct PgCostCenterRepository {
    pool: AsyncDbPool,
}

impl PgCostCenterRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CostCenterRepository for PgCostCenterRepository {
    async fn create(&self, new_record: NewCostCenter) -> AppResult<CostCenter> {
        use crate::schema::centros_custo::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::insert_into(centros_custo)
            .values(&new_record)
            .returning(CostCenter::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    async fn find_active(&self, record_id: Uuid) -> AppResult<Option<CostCenter>> {
        use crate::schema::centros_custo::dsl::*;
        let mut conn = self.pool.get().await?;

        centros_custo
            .filter(id.eq(record_id))
            .filter(status.eq(RecordStatus::Ativo))
            .select(CostCenter::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    async fn list_active_by_company(&self, company_id: Uuid) -> AppResult<Vec<CostCenter>> {
        use crate::schema::centros_custo::dsl::*;
        let mut conn = self.pool.get().await?;

        centros_custo
            .filter(empresa_id.eq(company_id))
            .filter(status.eq(RecordStatus::Ativo))
            .order(nome.asc())
            .select(CostCenter::as_select())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    async fn update_active(
        &self,
        record_id: Uuid,
        changes: UpdateCostCenter,
    ) -> AppResult<Option<CostCenter>> {
        use crate::schema::centros_custo::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::update(
            centros_custo
                .filter(id.eq(record_id))
                .filter(status.eq(RecordStatus::Ativo)),
        )
        .set(&changes)
        .returning(CostCenter::as_returning())
        .get_result(&mut conn)
        .await
        .optional()
        .map_err(AppError::from)
    }

    async fn soft_delete(&self, record_id: Uuid, actor_id: i32) -> AppResult<Option<CostCenter>> {
        use crate::schema::centros_custo::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::update(
            centros_custo
                .filter(id.eq(record_id))
                .filter(status.eq(RecordStatus::Ativo)),
        )
        .set((status.eq(RecordStatus::Excluido), atualizado_por.eq(Some(actor_id))))
        .returning(CostCenter::as_returning())
        .get_result(&mut conn)
        .await
        .optional()
        .map_err(AppError::from)
    }
}
