//! Cost center (`centros_custo`) service.

use std::sync::Arc;

use uuid::Uuid;

use crate::api::dto::{CreateCostCenterRequest, UpdateCostCenterRequest};
use crate::error::{AppError, AppResult};
use crate::models::CostCenter;
use crate::repositories::{CompanyRepository, CostCenterRepository};
use crate::services::lookup::{COST_CENTER_NOT_FOUND, active_company};

#[derive(Clone)]
pub struct CostCenterService {
    cost_centers: Arc<dyn CostCenterRepository>,
    companies: Arc<dyn CompanyRepository>,
}

impl CostCenterService {
    pub fn new(
        cost_centers: Arc<dyn CostCenterRepository>,
        companies: Arc<dyn CompanyRepository>,
    ) -> Self {
        Self {
            cost_centers,
            companies,
        }
    }

    pub async fn create(
        &self,
        empresa_id: Uuid,
        payload: CreateCostCenterRequest,
        actor_id: i32,
    ) -> AppResult<CostCenter> {
        active_company(self.companies.as_ref(), empresa_id).await?;
        let cost_center = self
            .cost_centers
            .create(payload.into_new_cost_center(empresa_id, actor_id))
            .await?;
        tracing::info!(centro_custo_id = %cost_center.id, %empresa_id, actor_id, "cost center created");
        Ok(cost_center)
    }

    pub async fn find_all(&self, empresa_id: Uuid) -> AppResult<Vec<CostCenter>> {
        active_company(self.companies.as_ref(), empresa_id).await?;
        self.cost_centers.list_active_by_company(empresa_id).await
    }

    pub async fn find_one(&self, id: Uuid) -> AppResult<CostCenter> {
        self.cost_centers
            .find_active(id)
            .await?
            .ok_or_else(|| AppError::not_found(COST_CENTER_NOT_FOUND))
    }

    pub async fn update(
        &self,
        id: Uuid,
        payload: UpdateCostCenterRequest,
        actor_id: i32,
    ) -> AppResult<CostCenter> {
        self.cost_centers
            .update_active(id, payload.into_update_cost_center(actor_id))
            .await?
            .ok_or_else(|| AppError::not_found(COST_CENTER_NOT_FOUND))
    }

    pub async fn remove(&self, id: Uuid, actor_id: i32) -> AppResult<CostCenter> {
        self.cost_centers
            .soft_delete(id, actor_id)
            .await?
            .ok_or_else(|| AppError::not_found("Centro de custo já excluído ou não encontrado."))
    }
}

#[cfg(test)]
mod tests {
    use crate::api::dto::{CreateCostCenterRequest, UpdateCostCenterRequest};
    use crate::models::RecordStatus;
    use crate::repositories::CostCenterRepository;
    use crate::services::test_support::*;
    use uuid::Uuid;

    fn payload(nome: &str) -> CreateCostCenterRequest {
        CreateCostCenterRequest {
            nome: nome.to_string(),
            descricao: Some("Despesas da obra".to_string()),
        }
    }

    #[tokio::test]
    async fn test_create_under_missing_company_writes_nothing() {
        let fx = Fixture::new();
        let ghost = Uuid::new_v4();

        assert_not_found(
            fx.services
                .cost_centers
                .create(ghost, payload("Obra Vila Nova"), ACTOR_ID)
                .await,
            "Empresa não encontrada.",
        );
        assert!(
            CostCenterRepository::list_active_by_company(&fx.store, ghost)
                .await
                .unwrap()
                .is_empty()
        );
    }

    #[tokio::test]
    async fn test_create_under_removed_company() {
        let fx = Fixture::new();
        let company = fx.company().await;
        fx.services.companies.remove(company.id, ACTOR_ID).await.unwrap();

        assert_not_found(
            fx.services
                .cost_centers
                .create(company.id, payload("Obra Vila Nova"), ACTOR_ID)
                .await,
            "Empresa não encontrada.",
        );
        assert_not_found(
            fx.services.cost_centers.find_all(company.id).await,
            "Empresa não encontrada.",
        );
    }

    #[tokio::test]
    async fn test_list_is_scoped_to_company() {
        let fx = Fixture::new();
        let company = fx.company().await;
        let other = fx.company_with_cnpj("99888777000166").await;
        for nome in ["Manutenção", "Administrativo"] {
            fx.services
                .cost_centers
                .create(company.id, payload(nome), ACTOR_ID)
                .await
                .unwrap();
        }
        fx.services
            .cost_centers
            .create(other.id, payload("Comercial"), ACTOR_ID)
            .await
            .unwrap();

        let names: Vec<String> = fx
            .services
            .cost_centers
            .find_all(company.id)
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.nome)
            .collect();
        assert_eq!(names, vec!["Administrativo", "Manutenção"]);
    }

    #[tokio::test]
    async fn test_partial_update_keeps_description() {
        let fx = Fixture::new();
        let company = fx.company().await;
        let cost_center = fx
            .services
            .cost_centers
            .create(company.id, payload("Obra Vila Nova"), ACTOR_ID)
            .await
            .unwrap();

        let updated = fx
            .services
            .cost_centers
            .update(
                cost_center.id,
                UpdateCostCenterRequest {
                    nome: Some("Obra Vila Nova - Fase 2".to_string()),
                    ..Default::default()
                },
                OTHER_ACTOR_ID,
            )
            .await
            .unwrap();

        assert_eq!(updated.nome, "Obra Vila Nova - Fase 2");
        assert_eq!(updated.descricao.as_deref(), Some("Despesas da obra"));
        assert_eq!(updated.criado_por, ACTOR_ID);
        assert_eq!(updated.atualizado_por, Some(OTHER_ACTOR_ID));
    }

    #[tokio::test]
    async fn test_remove_twice() {
        let fx = Fixture::new();
        let company = fx.company().await;
        let cost_center = fx
            .services
            .cost_centers
            .create(company.id, payload("Obra Vila Nova"), ACTOR_ID)
            .await
            .unwrap();

        let removed = fx
            .services
            .cost_centers
            .remove(cost_center.id, ACTOR_ID)
            .await
            .unwrap();
        assert_eq!(removed.status, RecordStatus::Excluido);

        assert_not_found(
            fx.services.cost_centers.remove(cost_center.id, ACTOR_ID).await,
            "Centro de custo já excluído ou não encontrado.",
        );
        assert_not_found(
            fx.services.cost_centers.find_one(cost_center.id).await,
            "Centro de custo não encontrado.",
        );
        assert!(fx.services.cost_centers.find_all(company.id).await.unwrap().is_empty());
    }
}
