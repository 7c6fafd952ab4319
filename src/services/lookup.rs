//! Parent-existence checks shared by the resource services.
//!
//! Each check turns a missing or soft-deleted row into the resource's
//! NotFound message before any write is attempted.

use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::{Company, Employee, RoleWithEpis};
use crate::repositories::{
    CompanyRepository, DepartmentRepository, EmployeeRepository, EpiRepository, RoleRepository,
};

pub const COMPANY_NOT_FOUND: &str = "Empresa não encontrada.";
pub const DEPARTMENT_NOT_FOUND: &str = "Setor não encontrado.";
pub const COST_CENTER_NOT_FOUND: &str = "Centro de custo não encontrado.";
pub const ROLE_NOT_FOUND: &str = "Função não encontrada.";
pub const EPI_NOT_FOUND: &str = "EPI não encontrado.";
pub const PROJECT_NOT_FOUND: &str = "Projeto não encontrado.";
pub const EMPLOYEE_NOT_FOUND: &str = "Funcionário não encontrado.";
pub const VACATION_NOT_FOUND: &str = "Férias não encontradas.";
pub const TERMINATION_NOT_FOUND: &str = "Demissão não encontrada.";

pub(crate) async fn active_company(
    companies: &dyn CompanyRepository,
    id: Uuid,
) -> AppResult<Company> {
    companies
        .find_active(id)
        .await?
        .ok_or_else(|| AppError::not_found(COMPANY_NOT_FOUND))
}

pub(crate) async fn active_employee(
    employees: &dyn EmployeeRepository,
    id: Uuid,
) -> AppResult<Employee> {
    employees
        .find_active(id)
        .await?
        .ok_or_else(|| AppError::not_found(EMPLOYEE_NOT_FOUND))
}

/// The role must be active and belong to `empresa_id`.
pub(crate) async fn role_in_company(
    roles: &dyn RoleRepository,
    empresa_id: Uuid,
    id: Uuid,
) -> AppResult<RoleWithEpis> {
    match roles.find_active(id).await? {
        Some(found) if found.role.empresa_id == empresa_id => Ok(found),
        _ => Err(AppError::not_found(ROLE_NOT_FOUND)),
    }
}

/// The department must be active and belong to `empresa_id`.
pub(crate) async fn department_in_company(
    departments: &dyn DepartmentRepository,
    empresa_id: Uuid,
    id: Uuid,
) -> AppResult<()> {
    match departments.find_active(id).await? {
        Some(department) if department.empresa_id == empresa_id => Ok(()),
        _ => Err(AppError::not_found(DEPARTMENT_NOT_FOUND)),
    }
}

/// Deduplicates `ids` (first occurrence wins) and requires every one to be
/// an active EPI of `empresa_id`.
pub(crate) async fn epis_in_company(
    epis: &dyn EpiRepository,
    empresa_id: Uuid,
    ids: Vec<Uuid>,
) -> AppResult<Vec<Uuid>> {
    let mut unique = Vec::with_capacity(ids.len());
    for id in ids {
        if !unique.contains(&id) {
            unique.push(id);
        }
    }
    if unique.is_empty() {
        return Ok(unique);
    }

    let found = epis.find_active_in_company(empresa_id, &unique).await?;
    if found.len() != unique.len() {
        return Err(AppError::not_found(EPI_NOT_FOUND));
    }
    Ok(unique)
}
