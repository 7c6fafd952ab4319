//! Role (`funcoes`) service.
//!
//! A role's EPI set is validated against the role's company before it is
//! written: every id must be an active EPI of that company.

use std::sync::Arc;

use uuid::Uuid;

use crate::api::dto::{CreateRoleRequest, UpdateRoleRequest};
use crate::error::{AppError, AppResult};
use crate::models::RoleWithEpis;
use crate::repositories::{CompanyRepository, EpiRepository, RoleRepository};
use crate::services::lookup::{ROLE_NOT_FOUND, active_company, epis_in_company};

#[derive(Clone)]
pub struct RoleService {
    roles: Arc<dyn RoleRepository>,
    epis: Arc<dyn EpiRepository>,
    companies: Arc<dyn CompanyRepository>,
}

impl RoleService {
    pub fn new(
        roles: Arc<dyn RoleRepository>,
        epis: Arc<dyn EpiRepository>,
        companies: Arc<dyn CompanyRepository>,
    ) -> Self {
        Self {
            roles,
            epis,
            companies,
        }
    }

    pub async fn create(
        &self,
        empresa_id: Uuid,
        payload: CreateRoleRequest,
        actor_id: i32,
    ) -> AppResult<RoleWithEpis> {
        active_company(self.companies.as_ref(), empresa_id).await?;
        let (new_role, epi_ids) = payload.into_new_role(empresa_id, actor_id);
        let epi_ids = epis_in_company(self.epis.as_ref(), empresa_id, epi_ids).await?;
        self.roles.create(new_role, epi_ids).await
    }

    pub async fn find_all(&self, empresa_id: Uuid) -> AppResult<Vec<RoleWithEpis>> {
        active_company(self.companies.as_ref(), empresa_id).await?;
        self.roles.list_active_by_company(empresa_id).await
    }

    pub async fn find_one(&self, id: Uuid) -> AppResult<RoleWithEpis> {
        self.roles
            .find_active(id)
            .await?
            .ok_or_else(|| AppError::not_found(ROLE_NOT_FOUND))
    }

    /// Updates the role; a present `epis` list replaces the whole EPI set.
    pub async fn update(
        &self,
        id: Uuid,
        payload: UpdateRoleRequest,
        actor_id: i32,
    ) -> AppResult<RoleWithEpis> {
        let (changes, epi_ids) = payload.into_update_role(actor_id);
        let epi_ids = match epi_ids {
            Some(ids) => {
                let current = self.find_one(id).await?;
                Some(epis_in_company(self.epis.as_ref(), current.role.empresa_id, ids).await?)
            }
            None => None,
        };

        self.roles
            .update_active(id, changes, epi_ids)
            .await?
            .ok_or_else(|| AppError::not_found(ROLE_NOT_FOUND))
    }

    pub async fn remove(&self, id: Uuid, actor_id: i32) -> AppResult<RoleWithEpis> {
        self.roles
            .soft_delete(id, actor_id)
            .await?
            .ok_or_else(|| AppError::not_found("Função já excluída ou não encontrada."))
    }
}

#[cfg(test)]
mod tests {
    use crate::api::dto::{CreateRoleRequest, UpdateRoleRequest};
    use crate::services::test_support::*;
    use uuid::Uuid;

    #[tokio::test]
    async fn test_create_with_epis_of_same_company() {
        let fx = Fixture::new();
        let company = fx.company().await;
        let luva = fx.epi(company.id, "Luva").await;
        let bota = fx.epi(company.id, "Bota").await;

        let role = fx
            .services
            .roles
            .create(
                company.id,
                CreateRoleRequest {
                    nome: "Pedreiro".to_string(),
                    epis: vec![luva.id, bota.id, luva.id],
                },
                ACTOR_ID,
            )
            .await
            .unwrap();

        let names: Vec<&str> = role.epis.iter().map(|e| e.nome.as_str()).collect();
        assert_eq!(names, vec!["Bota", "Luva"]);
    }

    #[tokio::test]
    async fn test_epi_of_another_company_is_rejected() {
        let fx = Fixture::new();
        let company = fx.company().await;
        let other = fx.company_with_cnpj("99888777000166").await;
        let foreign = fx.epi(other.id, "Luva").await;

        assert_not_found(
            fx.services
                .roles
                .create(
                    company.id,
                    CreateRoleRequest {
                        nome: "Pedreiro".to_string(),
                        epis: vec![foreign.id],
                    },
                    ACTOR_ID,
                )
                .await,
            "EPI não encontrado.",
        );
        assert!(fx.services.roles.find_all(company.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_epi_is_rejected() {
        let fx = Fixture::new();
        let company = fx.company().await;

        assert_not_found(
            fx.services
                .roles
                .create(
                    company.id,
                    CreateRoleRequest {
                        nome: "Pedreiro".to_string(),
                        epis: vec![Uuid::new_v4()],
                    },
                    ACTOR_ID,
                )
                .await,
            "EPI não encontrado.",
        );
    }

    #[tokio::test]
    async fn test_update_without_epis_keeps_set() {
        let fx = Fixture::new();
        let company = fx.company().await;
        let luva = fx.epi(company.id, "Luva").await;
        let role = fx.role(company.id, vec![luva.id]).await;

        let updated = fx
            .services
            .roles
            .update(
                role.role.id,
                UpdateRoleRequest {
                    nome: Some("Mestre de obras".to_string()),
                    epis: None,
                },
                ACTOR_ID,
            )
            .await
            .unwrap();

        assert_eq!(updated.role.nome, "Mestre de obras");
        assert_eq!(updated.epis.len(), 1);
    }

    #[tokio::test]
    async fn test_update_replaces_epi_set() {
        let fx = Fixture::new();
        let company = fx.company().await;
        let luva = fx.epi(company.id, "Luva").await;
        let oculos = fx.epi(company.id, "Óculos").await;
        let role = fx.role(company.id, vec![luva.id]).await;

        let updated = fx
            .services
            .roles
            .update(
                role.role.id,
                UpdateRoleRequest {
                    nome: None,
                    epis: Some(vec![oculos.id]),
                },
                ACTOR_ID,
            )
            .await
            .unwrap();
        assert_eq!(updated.epis.len(), 1);
        assert_eq!(updated.epis[0].id, oculos.id);

        let cleared = fx
            .services
            .roles
            .update(
                role.role.id,
                UpdateRoleRequest {
                    nome: None,
                    epis: Some(vec![]),
                },
                ACTOR_ID,
            )
            .await
            .unwrap();
        assert!(cleared.epis.is_empty());
    }

    #[tokio::test]
    async fn test_create_under_missing_company_and_remove_twice() {
        let fx = Fixture::new();
        assert_not_found(
            fx.services
                .roles
                .create(Uuid::new_v4(), CreateRoleRequest::default(), ACTOR_ID)
                .await,
            "Empresa não encontrada.",
        );

        let company = fx.company().await;
        let role = fx.role(company.id, vec![]).await;
        fx.services.roles.remove(role.role.id, ACTOR_ID).await.unwrap();
        assert_not_found(
            fx.services.roles.remove(role.role.id, ACTOR_ID).await,
            "Função já excluída ou não encontrada.",
        );
    }
}
