//! EPI service. EPIs are company-scoped and linked to roles.

use std::sync::Arc;

use uuid::Uuid;

use crate::api::dto::{CreateEpiRequest, UpdateEpiRequest};
use crate::error::{AppError, AppResult};
use crate::models::Epi;
use crate::repositories::{CompanyRepository, EpiRepository};
use crate::services::lookup::{EPI_NOT_FOUND, active_company};

#[derive(Clone)]
pub struct EpiService {
    epis: Arc<dyn EpiRepository>,
    companies: Arc<dyn CompanyRepository>,
}

impl EpiService {
    pub fn new(epis: Arc<dyn EpiRepository>, companies: Arc<dyn CompanyRepository>) -> Self {
        Self { epis, companies }
    }

    pub async fn create(
        &self,
        empresa_id: Uuid,
        payload: CreateEpiRequest,
        actor_id: i32,
    ) -> AppResult<Epi> {
        active_company(self.companies.as_ref(), empresa_id).await?;
        self.epis
            .create(payload.into_new_epi(empresa_id, actor_id))
            .await
    }

    pub async fn find_all(&self, empresa_id: Uuid) -> AppResult<Vec<Epi>> {
        active_company(self.companies.as_ref(), empresa_id).await?;
        self.epis.list_active_by_company(empresa_id).await
    }

    pub async fn find_one(&self, id: Uuid) -> AppResult<Epi> {
        self.epis
            .find_active(id)
            .await?
            .ok_or_else(|| AppError::not_found(EPI_NOT_FOUND))
    }

    pub async fn update(&self, id: Uuid, payload: UpdateEpiRequest, actor_id: i32) -> AppResult<Epi> {
        self.epis
            .update_active(id, payload.into_update_epi(actor_id))
            .await?
            .ok_or_else(|| AppError::not_found(EPI_NOT_FOUND))
    }

    /// Soft-deletes the EPI. Roles keep the link but stop listing it.
    pub async fn remove(&self, id: Uuid, actor_id: i32) -> AppResult<Epi> {
        self.epis
            .soft_delete(id, actor_id)
            .await?
            .ok_or_else(|| AppError::not_found("EPI já excluído ou não encontrado."))
    }
}

#[cfg(test)]
mod tests {
    use crate::api::dto::UpdateEpiRequest;
    use crate::repositories::EpiRepository;
    use crate::services::test_support::*;
    use uuid::Uuid;

    #[tokio::test]
    async fn test_create_under_missing_company_writes_nothing() {
        let fx = Fixture::new();
        let ghost = Uuid::new_v4();
        assert_not_found(
            fx.services
                .epis
                .create(ghost, epi_payload("Luva"), ACTOR_ID)
                .await,
            "Empresa não encontrada.",
        );
        assert!(
            EpiRepository::list_active_by_company(&fx.store, ghost)
                .await
                .unwrap()
                .is_empty()
        );
    }

    #[tokio::test]
    async fn test_update_keeps_omitted_fields() {
        let fx = Fixture::new();
        let company = fx.company().await;
        let epi = fx.epi(company.id, "Capacete").await;

        let updated = fx
            .services
            .epis
            .update(
                epi.id,
                UpdateEpiRequest {
                    certificado_aprovacao: Some("40001".to_string()),
                    ..Default::default()
                },
                ACTOR_ID,
            )
            .await
            .unwrap();

        assert_eq!(updated.nome, "Capacete");
        assert_eq!(updated.descricao, epi.descricao);
        assert_eq!(updated.certificado_aprovacao.as_deref(), Some("40001"));
    }

    #[tokio::test]
    async fn test_removed_epi_drops_out_of_role() {
        let fx = Fixture::new();
        let company = fx.company().await;
        let capacete = fx.epi(company.id, "Capacete").await;
        let luva = fx.epi(company.id, "Luva").await;
        let role = fx.role(company.id, vec![capacete.id, luva.id]).await;
        assert_eq!(role.epis.len(), 2);

        fx.services.epis.remove(luva.id, ACTOR_ID).await.unwrap();

        let role = fx.services.roles.find_one(role.role.id).await.unwrap();
        let names: Vec<&str> = role.epis.iter().map(|e| e.nome.as_str()).collect();
        assert_eq!(names, vec!["Capacete"]);

        assert_not_found(
            fx.services.epis.remove(luva.id, ACTOR_ID).await,
            "EPI já excluído ou não encontrado.",
        );
    }
}
