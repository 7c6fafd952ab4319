//! Repository seams used by the services.
//!
//! Every read returns only active (`RecordStatus::Ativo`) rows. Conditional
//! writes return `None` when no active row matched, leaving the choice of
//! error message to the caller.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::AppResult;
use crate::models::{
    Company, CostCenter, Department, Employee, EmployeeStatus, Epi, NewCompany, NewCostCenter,
    NewDepartment, NewEmployee, NewEpi, NewProject, NewRole, NewTermination, NewUser, NewVacation,
    Project, RoleWithEpis, Termination, UpdateCompany, UpdateCostCenter, UpdateDepartment,
    UpdateEmployee, UpdateEpi, UpdateProject, UpdateRole, UpdateTermination, UpdateVacation, User,
    Vacation,
};

/// Employment status transition applied atomically alongside a termination write.
pub type StatusTransition = fn(EmployeeStatus) -> AppResult<EmployeeStatus>;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, new_user: NewUser) -> AppResult<User>;

    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>>;

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;
}

#[async_trait]
pub trait CompanyRepository: Send + Sync {
    async fn create(&self, new_company: NewCompany) -> AppResult<Company>;

    async fn find_active(&self, id: Uuid) -> AppResult<Option<Company>>;

    /// Active companies ordered by trade name.
    async fn list_active(&self) -> AppResult<Vec<Company>>;

    async fn update_active(&self, id: Uuid, changes: UpdateCompany) -> AppResult<Option<Company>>;

    async fn soft_delete(&self, id: Uuid, actor_id: i32) -> AppResult<Option<Company>>;
}

#[async_trait]
pub trait DepartmentRepository: Send + Sync {
    async fn create(&self, new_department: NewDepartment) -> AppResult<Department>;

    async fn find_active(&self, id: Uuid) -> AppResult<Option<Department>>;

    async fn list_active_by_company(&self, empresa_id: Uuid) -> AppResult<Vec<Department>>;

    async fn update_active(
        &self,
        id: Uuid,
        changes: UpdateDepartment,
    ) -> AppResult<Option<Department>>;

    async fn soft_delete(&self, id: Uuid, actor_id: i32) -> AppResult<Option<Department>>;
}

#[async_trait]
pub trait CostCenterRepository: Send + Sync {
    async fn create(&self, new_cost_center: NewCostCenter) -> AppResult<CostCenter>;

    async fn find_active(&self, id: Uuid) -> AppResult<Option<CostCenter>>;

    async fn list_active_by_company(&self, empresa_id: Uuid) -> AppResult<Vec<CostCenter>>;

    async fn update_active(
        &self,
        id: Uuid,
        changes: UpdateCostCenter,
    ) -> AppResult<Option<CostCenter>>;

    async fn soft_delete(&self, id: Uuid, actor_id: i32) -> AppResult<Option<CostCenter>>;
}

#[async_trait]
pub trait EpiRepository: Send + Sync {
    async fn create(&self, new_epi: NewEpi) -> AppResult<Epi>;

    async fn find_active(&self, id: Uuid) -> AppResult<Option<Epi>>;

    /// Active EPIs of `empresa_id` among `ids`; missing ids are simply absent.
    async fn find_active_in_company(&self, empresa_id: Uuid, ids: &[Uuid]) -> AppResult<Vec<Epi>>;

    async fn list_active_by_company(&self, empresa_id: Uuid) -> AppResult<Vec<Epi>>;

    async fn update_active(&self, id: Uuid, changes: UpdateEpi) -> AppResult<Option<Epi>>;

    async fn soft_delete(&self, id: Uuid, actor_id: i32) -> AppResult<Option<Epi>>;
}

#[async_trait]
pub trait RoleRepository: Send + Sync {
    /// Inserts the role and its EPI links in one transaction.
    async fn create(&self, new_role: NewRole, epi_ids: Vec<Uuid>) -> AppResult<RoleWithEpis>;

    async fn find_active(&self, id: Uuid) -> AppResult<Option<RoleWithEpis>>;

    async fn list_active_by_company(&self, empresa_id: Uuid) -> AppResult<Vec<RoleWithEpis>>;

    /// Updates the role; when `epi_ids` is present the EPI set is replaced.
    async fn update_active(
        &self,
        id: Uuid,
        changes: UpdateRole,
        epi_ids: Option<Vec<Uuid>>,
    ) -> AppResult<Option<RoleWithEpis>>;

    async fn soft_delete(&self, id: Uuid, actor_id: i32) -> AppResult<Option<RoleWithEpis>>;
}

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn create(&self, new_project: NewProject) -> AppResult<Project>;

    async fn find_active(&self, id: Uuid) -> AppResult<Option<Project>>;

    async fn list_active_by_company(&self, empresa_id: Uuid) -> AppResult<Vec<Project>>;

    async fn update_active(&self, id: Uuid, changes: UpdateProject) -> AppResult<Option<Project>>;

    async fn soft_delete(&self, id: Uuid, actor_id: i32) -> AppResult<Option<Project>>;
}

#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    async fn create(&self, new_employee: NewEmployee) -> AppResult<Employee>;

    async fn find_active(&self, id: Uuid) -> AppResult<Option<Employee>>;

    async fn list_active_by_company(&self, empresa_id: Uuid) -> AppResult<Vec<Employee>>;

    /// When `changes` carries a `status_funcionario`, the transition is
    /// checked with `EmployeeStatus::change_to` against the stored status in
    /// the same critical section as the write, so a termination committed in
    /// between is never overwritten.
    async fn update_active(
        &self,
        id: Uuid,
        changes: UpdateEmployee,
    ) -> AppResult<Option<Employee>>;

    async fn soft_delete(&self, id: Uuid, actor_id: i32) -> AppResult<Option<Employee>>;
}

#[async_trait]
pub trait VacationRepository: Send + Sync {
    async fn create(&self, new_vacation: NewVacation) -> AppResult<Vacation>;

    async fn find_active(&self, id: Uuid) -> AppResult<Option<Vacation>>;

    /// Most recent period first.
    async fn list_active_by_employee(&self, funcionario_id: Uuid) -> AppResult<Vec<Vacation>>;

    async fn update_active(
        &self,
        id: Uuid,
        changes: UpdateVacation,
    ) -> AppResult<Option<Vacation>>;

    async fn soft_delete(&self, id: Uuid, actor_id: i32) -> AppResult<Option<Vacation>>;
}

#[async_trait]
pub trait TerminationRepository: Send + Sync {
    /// Locks the employee, applies `transition` to its employment status,
    /// inserts the termination and stores the new status, all in one
    /// transaction.
    ///
    /// Returns `None` when the employee does not exist or is deleted. Fails
    /// with Conflict when an active termination already exists.
    async fn create_with_transition(
        &self,
        new_termination: NewTermination,
        transition: StatusTransition,
    ) -> AppResult<Option<Termination>>;

    async fn find_active(&self, id: Uuid) -> AppResult<Option<Termination>>;

    /// Most recent termination first.
    async fn list_active_by_employee(&self, funcionario_id: Uuid) -> AppResult<Vec<Termination>>;

    /// Terminations of every employee of the company, most recent first.
    async fn list_active_by_company(&self, empresa_id: Uuid) -> AppResult<Vec<Termination>>;

    async fn update_active(
        &self,
        id: Uuid,
        changes: UpdateTermination,
    ) -> AppResult<Option<Termination>>;

    /// Soft-deletes the termination and applies `transition` to the
    /// employee's status in one transaction. `None` when no active
    /// termination matched.
    async fn soft_delete_with_transition(
        &self,
        id: Uuid,
        actor_id: i32,
        transition: StatusTransition,
    ) -> AppResult<Option<Termination>>;
}
