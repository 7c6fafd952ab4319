//! Repository layer for data access operations.
//!
//! Services depend on the traits in [`traits`]; `postgres` implements them
//! with diesel-async and `memory` implements them in process.

pub mod memory;
pub mod postgres;
mod traits;

use std::sync::Arc;

pub use memory::MemoryStore;
pub use traits::{
    CompanyRepository, CostCenterRepository, DepartmentRepository, EmployeeRepository,
    EpiRepository, ProjectRepository, RoleRepository, StatusTransition, TerminationRepository,
    UserRepository, VacationRepository,
};

use crate::db::AsyncDbPool;

/// Aggregates all repositories for convenient access.
///
/// Every field is an `Arc<dyn ...>`, so cloning is cheap.
#[derive(Clone)]
pub struct Repositories {
    pub users: Arc<dyn UserRepository>,
    pub companies: Arc<dyn CompanyRepository>,
    pub departments: Arc<dyn DepartmentRepository>,
    pub cost_centers: Arc<dyn CostCenterRepository>,
    pub epis: Arc<dyn EpiRepository>,
    pub roles: Arc<dyn RoleRepository>,
    pub projects: Arc<dyn ProjectRepository>,
    pub employees: Arc<dyn EmployeeRepository>,
    pub vacations: Arc<dyn VacationRepository>,
    pub terminations: Arc<dyn TerminationRepository>,
}

impl Repositories {
    /// Creates PostgreSQL-backed repositories sharing one pool.
    ///
    /// # Arguments
    /// * `pool` - The async database connection pool
    pub fn postgres(pool: AsyncDbPool) -> Self {
        Self {
            users: Arc::new(postgres::PgUserRepository::new(pool.clone())),
            companies: Arc::new(postgres::PgCompanyRepository::new(pool.clone())),
            departments: Arc::new(postgres::PgDepartmentRepository::new(pool.clone())),
            cost_centers: Arc::new(postgres::PgCostCenterRepository::new(pool.clone())),
            epis: Arc::new(postgres::PgEpiRepository::new(pool.clone())),
            roles: Arc::new(postgres::PgRoleRepository::new(pool.clone())),
            projects: Arc::new(postgres::PgProjectRepository::new(pool.clone())),
            employees: Arc::new(postgres::PgEmployeeRepository::new(pool.clone())),
            vacations: Arc::new(postgres::PgVacationRepository::new(pool.clone())),
            terminations: Arc::new(postgres::PgTerminationRepository::new(pool)),
        }
    }

    /// Creates repositories over one shared in-memory store.
    pub fn in_memory(store: MemoryStore) -> Self {
        let store = Arc::new(store);
        Self {
            users: store.clone(),
            companies: store.clone(),
            departments: store.clone(),
            cost_centers: store.clone(),
            epis: store.clone(),
            roles: store.clone(),
            projects: store.clone(),
            employees: store.clone(),
            vacations: store.clone(),
            terminations: store,
        }
    }
}
