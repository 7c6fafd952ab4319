//! Service layer for business logic.
//!
//! Services sit between the handlers and the repositories. They check that
//! referenced parents exist and are active, enforce the cross-entity rules,
//! and turn "no row matched" into the resource's NotFound message.

mod company_service;
mod cost_center_service;
mod department_service;
mod employee_service;
mod epi_service;
pub mod lookup;
mod project_service;
mod role_service;
mod termination_service;
mod user_service;
mod vacation_service;

#[cfg(test)]
pub(crate) mod test_support;

pub use company_service::CompanyService;
pub use cost_center_service::CostCenterService;
pub use department_service::DepartmentService;
pub use employee_service::EmployeeService;
pub use epi_service::EpiService;
pub use project_service::ProjectService;
pub use role_service::RoleService;
pub use termination_service::TerminationService;
pub use user_service::UserService;
pub use vacation_service::VacationService;

use crate::config::JwtConfig;
use crate::repositories::Repositories;

/// Aggregates all services for convenient access.
///
/// Cloning is cheap: every service holds `Arc`ed repositories.
#[derive(Clone)]
pub struct Services {
    pub users: UserService,
    pub companies: CompanyService,
    pub departments: DepartmentService,
    pub cost_centers: CostCenterService,
    pub epis: EpiService,
    pub roles: RoleService,
    pub projects: ProjectService,
    pub employees: EmployeeService,
    pub vacations: VacationService,
    pub terminations: TerminationService,
}

impl Services {
    /// Creates all services from the repository aggregate.
    ///
    /// # Arguments
    /// * `repos` - PostgreSQL or in-memory repositories
    /// * `jwt_config` - signing settings for the user service
    pub fn new(repos: Repositories, jwt_config: JwtConfig) -> Self {
        Self {
            users: UserService::new(repos.users, jwt_config),
            companies: CompanyService::new(repos.companies.clone()),
            departments: DepartmentService::new(repos.departments.clone(), repos.companies.clone()),
            cost_centers: CostCenterService::new(repos.cost_centers, repos.companies.clone()),
            epis: EpiService::new(repos.epis.clone(), repos.companies.clone()),
            roles: RoleService::new(repos.roles.clone(), repos.epis, repos.companies.clone()),
            projects: ProjectService::new(repos.projects, repos.companies.clone()),
            employees: EmployeeService::new(
                repos.employees.clone(),
                repos.companies.clone(),
                repos.roles,
                repos.departments,
            ),
            vacations: VacationService::new(repos.vacations, repos.employees.clone()),
            terminations: TerminationService::new(
                repos.terminations,
                repos.employees,
                repos.companies,
            ),
        }
    }
}
