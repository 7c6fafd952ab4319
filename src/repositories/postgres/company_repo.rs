//! Company repository backed by PostgreSQL.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::db::AsyncDbPool;
use crate::error::{AppError, AppResult};
use crate::models::{Company, NewCompany, RecordStatus, UpdateCompany};
use crate::repositories::CompanyRepository;

#[derive(Clone)]
pub struct PgCompanyRepository {
    pool: AsyncDbPool,
}

impl PgCompanyRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CompanyRepository for PgCompanyRepository {
    async fn create(&self, new_company: NewCompany) -> AppResult<Company> {
        use crate::schema::empresas::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::insert_into(empresas)
            .values(&new_company)
            .returning(Company::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    async fn find_active(&self, company_id: Uuid) -> AppResult<Option<Company>> {
        use crate::schema::empresas::dsl::*;
        let mut conn = self.pool.get().await?;

        empresas
            .filter(id.eq(company_id))
            .filter(status.eq(RecordStatus::Ativo))
            .select(Company::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    async fn list_active(&self) -> AppResult<Vec<Company>> {
        use crate::schema::empresas::dsl::*;
        let mut conn = self.pool.get().await?;

        empresas
            .filter(status.eq(RecordStatus::Ativo))
            .order(nome_fantasia.asc())
            .select(Company::as_select())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    async fn update_active(
        &self,
        company_id: Uuid,
        changes: UpdateCompany,
    ) -> AppResult<Option<Company>> {
        use crate::schema::empresas::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::update(empresas.filter(id.eq(company_id)).filter(status.eq(RecordStatus::Ativo)))
            .set(&changes)
            .returning(Company::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    async fn soft_delete(&self, company_id: Uuid, actor_id: i32) -> AppResult<Option<Company>> {
        use crate::schema::empresas::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::update(empresas.filter(id.eq(company_id)).filter(status.eq(RecordStatus::Ativo)))
            .set((status.eq(RecordStatus::Excluido), atualizado_por.eq(Some(actor_id))))
            .returning(Company::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }
}
