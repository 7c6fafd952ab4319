//! Project (`projetos`) service.

use std::sync::Arc;

use uuid::Uuid;

use crate::api::dto::{CreateProjectRequest, UpdateProjectRequest};
use crate::error::{AppError, AppResult};
use crate::models::Project;
use crate::repositories::{CompanyRepository, ProjectRepository};
use crate::services::lookup::{PROJECT_NOT_FOUND, active_company};

#[derive(Clone)]
pub struct ProjectService {
    projects: Arc<dyn ProjectRepository>,
    companies: Arc<dyn CompanyRepository>,
}

impl ProjectService {
    pub fn new(
        projects: Arc<dyn ProjectRepository>,
        companies: Arc<dyn CompanyRepository>,
    ) -> Self {
        Self {
            projects,
            companies,
        }
    }

    pub async fn create(
        &self,
        empresa_id: Uuid,
        payload: CreateProjectRequest,
        actor_id: i32,
    ) -> AppResult<Project> {
        active_company(self.companies.as_ref(), empresa_id).await?;
        let new_project = payload.into_new_project(empresa_id, actor_id)?;
        self.projects.create(new_project).await
    }

    pub async fn find_all(&self, empresa_id: Uuid) -> AppResult<Vec<Project>> {
        active_company(self.companies.as_ref(), empresa_id).await?;
        self.projects.list_active_by_company(empresa_id).await
    }

    pub async fn find_one(&self, id: Uuid) -> AppResult<Project> {
        self.projects
            .find_active(id)
            .await?
            .ok_or_else(|| AppError::not_found(PROJECT_NOT_FOUND))
    }

    pub async fn update(
        &self,
        id: Uuid,
        payload: UpdateProjectRequest,
        actor_id: i32,
    ) -> AppResult<Project> {
        let changes = payload.into_update_project(actor_id)?;
        self.projects
            .update_active(id, changes)
            .await?
            .ok_or_else(|| AppError::not_found(PROJECT_NOT_FOUND))
    }

    pub async fn remove(&self, id: Uuid, actor_id: i32) -> AppResult<Project> {
        self.projects
            .soft_delete(id, actor_id)
            .await?
            .ok_or_else(|| AppError::not_found("Projeto já excluído ou não encontrado."))
    }
}
