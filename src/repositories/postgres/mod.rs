//! PostgreSQL repositories built on diesel-async.

mod company_repo;
mod cost_center_repo;
mod department_repo;
mod employee_repo;
mod epi_repo;
mod project_repo;
mod role_repo;
mod termination_repo;
mod user_repo;
mod vacation_repo;

pub use company_repo::PgCompanyRepository;
pub use cost_center_repo::PgCostCenterRepository;
pub use department_repo::PgDepartmentRepository;
pub use employee_repo::PgEmployeeRepository;
pub use epi_repo::PgEpiRepository;
pub use project_repo::PgProjectRepository;
pub use role_repo::PgRoleRepository;
pub use termination_repo::PgTerminationRepository;
pub use user_repo::PgUserRepository;
pub use vacation_repo::PgVacationRepository;
