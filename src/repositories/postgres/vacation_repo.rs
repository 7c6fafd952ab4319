//! Vacation repository backed by PostgreSQL.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::db::AsyncDbPool;
use crate::error::{AppError, AppResult};
use crate::models::{Vacation, NewVacation, RecordStatus, UpdateVacation};
use crate::repositories::VacationRepository;

#[derive(Clone)]
pub struct PgVacationRepository {
    pool: AsyncDbPool,
}

impl PgVacationRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VacationRepository for PgVacationRepository {
    async fn create(&self, new_record: NewVacation) -> AppResult<Vacation> {
        use crate::schema::ferias::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::insert_into(ferias)
            .values(&new_record)
            .returning(Vacation::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    async fn find_active(&self, record_id: Uuid) -> AppResult<Option<Vacation>> {
        use crate::schema::ferias::dsl::*;
        let mut conn = self.pool.get().await?;

        ferias
            .filter(id.eq(record_id))
            .filter(status.eq(RecordStatus::Ativo))
            .select(Vacation::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    async fn list_active_by_employee(&self, employee_id: Uuid) -> AppResult<Vec<Vacation>> {
        use crate::schema::ferias::dsl::*;
        let mut conn = self.pool.get().await?;

        ferias
            .filter(funcionario_id.eq(employee_id))
            .filter(status.eq(RecordStatus::Ativo))
            .order((data_inicio.desc(), criado_em.desc()))
            .select(Vacation::as_select())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    async fn update_active(
        &self,
        record_id: Uuid,
        changes: UpdateVacation,
    ) -> AppResult<Option<Vacation>> {
        use crate::schema::ferias::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::update(ferias.filter(id.eq(record_id)).filter(status.eq(RecordStatus::Ativo)))
            .set(&changes)
            .returning(Vacation::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    async fn soft_delete(&self, record_id: Uuid, actor_id: i32) -> AppResult<Option<Vacation>> {
        use crate::schema::ferias::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::update(ferias.filter(id.eq(record_id)).filter(status.eq(RecordStatus::Ativo)))
            .set((status.eq(RecordStatus::Excluido), atualizado_por.eq(Some(actor_id))))
            .returning(Vacation::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }
}
