//! Department (`setores`) service.

use std::sync::Arc;

use uuid::Uuid;

use crate::api::dto::{CreateDepartmentRequest, UpdateDepartmentRequest};
use crate::error::{AppError, AppResult};
use crate::models::Department;
use crate::repositories::{CompanyRepository, DepartmentRepository};
use crate::services::lookup::{DEPARTMENT_NOT_FOUND, active_company};

#[derive(Clone)]
pub struct DepartmentService {
    departments: Arc<dyn DepartmentRepository>,
    companies: Arc<dyn CompanyRepository>,
}

impl DepartmentService {
    pub fn new(
        departments: Arc<dyn DepartmentRepository>,
        companies: Arc<dyn CompanyRepository>,
    ) -> Self {
        Self {
            departments,
            companies,
        }
    }

    pub async fn create(
        &self,
        empresa_id: Uuid,
        payload: CreateDepartmentRequest,
        actor_id: i32,
    ) -> AppResult<Department> {
        active_company(self.companies.as_ref(), empresa_id).await?;
        self.departments
            .create(payload.into_new_department(empresa_id, actor_id))
            .await
    }

    pub async fn find_all(&self, empresa_id: Uuid) -> AppResult<Vec<Department>> {
        active_company(self.companies.as_ref(), empresa_id).await?;
        self.departments.list_active_by_company(empresa_id).await
    }

    pub async fn find_one(&self, id: Uuid) -> AppResult<Department> {
        self.departments
            .find_active(id)
            .await?
            .ok_or_else(|| AppError::not_found(DEPARTMENT_NOT_FOUND))
    }

    pub async fn update(
        &self,
        id: Uuid,
        payload: UpdateDepartmentRequest,
        actor_id: i32,
    ) -> AppResult<Department> {
        self.departments
            .update_active(id, payload.into_update_department(actor_id))
            .await?
            .ok_or_else(|| AppError::not_found(DEPARTMENT_NOT_FOUND))
    }

    pub async fn remove(&self, id: Uuid, actor_id: i32) -> AppResult<Department> {
        self.departments
            .soft_delete(id, actor_id)
            .await?
            .ok_or_else(|| AppError::not_found("Setor já excluído ou não encontrado."))
    }
}
