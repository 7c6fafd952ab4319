//! Company service: the root scope of every other HR record.

use std::sync::Arc;

use uuid::Uuid;

use crate::api::dto::{CreateCompanyRequest, UpdateCompanyRequest};
use crate::error::{AppError, AppResult};
use crate::models::Company;
use crate::repositories::CompanyRepository;
use crate::services::lookup::{COMPANY_NOT_FOUND, active_company};

const COMPANY_GONE: &str = "Empresa já excluída ou não encontrada.";

#[derive(Clone)]
pub struct CompanyService {
    companies: Arc<dyn CompanyRepository>,
}

impl CompanyService {
    pub fn new(companies: Arc<dyn CompanyRepository>) -> Self {
        Self { companies }
    }

    /// Registers a company. A repeated CNPJ surfaces as `Duplicate` (409).
    pub async fn create(&self, payload: CreateCompanyRequest, actor_id: i32) -> AppResult<Company> {
        let new_company = payload.into_new_company(actor_id)?;
        let company = self.companies.create(new_company).await?;
        tracing::info!(empresa_id = %company.id, actor_id, "company created");
        Ok(company)
    }

    /// Active companies ordered by trade name.
    pub async fn find_all(&self) -> AppResult<Vec<Company>> {
        self.companies.list_active().await
    }

    pub async fn find_one(&self, id: Uuid) -> AppResult<Company> {
        active_company(self.companies.as_ref(), id).await
    }

    pub async fn update(
        &self,
        id: Uuid,
        payload: UpdateCompanyRequest,
        actor_id: i32,
    ) -> AppResult<Company> {
        let changes = payload.into_update_company(actor_id)?;
        self.companies
            .update_active(id, changes)
            .await?
            .ok_or_else(|| AppError::not_found(COMPANY_NOT_FOUND))
    }

    pub async fn remove(&self, id: Uuid, actor_id: i32) -> AppResult<Company> {
        let company = self
            .companies
            .soft_delete(id, actor_id)
            .await?
            .ok_or_else(|| AppError::not_found(COMPANY_GONE))?;
        tracing::info!(empresa_id = %id, actor_id, "company removed");
        Ok(company)
    }
}

#[cfg(test)]
mod tests {
    use crate::error::AppError;
    use crate::models::RecordStatus;
    use crate::services::test_support::*;
    use uuid::Uuid;

    #[tokio::test]
    async fn test_create_and_find() {
        let fx = Fixture::new();
        let company = fx.company().await;

        let found = fx.services.companies.find_one(company.id).await.unwrap();
        assert_eq!(found.cnpj, company.cnpj);
        assert_eq!(found.criado_por, ACTOR_ID);
        assert_eq!(found.status, RecordStatus::Ativo);
    }

    #[tokio::test]
    async fn test_duplicate_cnpj() {
        let fx = Fixture::new();
        fx.services
            .companies
            .create(company_payload("11222333000181"), ACTOR_ID)
            .await
            .unwrap();

        let result = fx
            .services
            .companies
            .create(company_payload("11222333000181"), ACTOR_ID)
            .await;
        assert!(matches!(result, Err(AppError::Duplicate { .. })));
    }

    #[tokio::test]
    async fn test_find_all_is_sorted_and_skips_removed() {
        let fx = Fixture::new();
        let mut zeta = company_payload("11222333000181");
        zeta.nome_fantasia = "Zeta Obras".to_string();
        let mut alfa = company_payload("11222333000262");
        alfa.nome_fantasia = "Alfa Engenharia".to_string();
        let mut gone = company_payload("11222333000343");
        gone.nome_fantasia = "Beta Removida".to_string();

        fx.services.companies.create(zeta, ACTOR_ID).await.unwrap();
        fx.services.companies.create(alfa, ACTOR_ID).await.unwrap();
        let gone = fx.services.companies.create(gone, ACTOR_ID).await.unwrap();
        fx.services.companies.remove(gone.id, ACTOR_ID).await.unwrap();

        let names: Vec<String> = fx
            .services
            .companies
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.nome_fantasia)
            .collect();
        assert_eq!(names, vec!["Alfa Engenharia", "Zeta Obras"]);
    }

    #[tokio::test]
    async fn test_partial_update_keeps_other_fields() {
        let fx = Fixture::new();
        let company = fx.company().await;

        let updated = fx
            .services
            .companies
            .update(
                company.id,
                crate::api::dto::UpdateCompanyRequest {
                    cidade: Some("Campinas".to_string()),
                    ..Default::default()
                },
                OTHER_ACTOR_ID,
            )
            .await
            .unwrap();

        assert_eq!(updated.cidade, "Campinas");
        assert_eq!(updated.nome_fantasia, company.nome_fantasia);
        assert_eq!(updated.cnpj, company.cnpj);
        assert_eq!(updated.email, company.email);
        assert_eq!(updated.atualizado_por, Some(OTHER_ACTOR_ID));
        assert_eq!(updated.criado_por, ACTOR_ID);
    }

    #[tokio::test]
    async fn test_remove_twice() {
        let fx = Fixture::new();
        let company = fx.company().await;

        let removed = fx.services.companies.remove(company.id, ACTOR_ID).await.unwrap();
        assert_eq!(removed.status, RecordStatus::Excluido);

        assert_not_found(
            fx.services.companies.remove(company.id, ACTOR_ID).await,
            "Empresa já excluída ou não encontrada.",
        );
        assert_not_found(
            fx.services.companies.find_one(company.id).await,
            "Empresa não encontrada.",
        );
    }

    #[tokio::test]
    async fn test_update_unknown_company() {
        let fx = Fixture::new();
        assert_not_found(
            fx.services
                .companies
                .update(Uuid::new_v4(), Default::default(), ACTOR_ID)
                .await,
            "Empresa não encontrada.",
        );
    }
}
