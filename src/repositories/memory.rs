//! In-process repository implementation.
//!
//! `MemoryStore` keeps every table behind one `tokio::sync::RwLock`, so each
//! trait method runs as a single critical section. That gives the same
//! conditional-update and transactional behaviour as the PostgreSQL
//! repositories. The unique constraints on `cnpj`, `cpf` and user email
//! surface as the same `AppError::Duplicate`.

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{NaiveDateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::{
    Company, CostCenter, Department, EMPLOYEE_ALREADY_TERMINATED, Employee, Epi, NewCompany,
    NewCostCenter, NewDepartment, NewEmployee, NewEpi, NewProject, NewRole, NewTermination,
    NewUser, NewVacation, Project, RecordStatus, Role, RoleWithEpis, Termination, UpdateCompany,
    UpdateCostCenter, UpdateDepartment, UpdateEmployee, UpdateEpi, UpdateProject, UpdateRole,
    UpdateTermination, UpdateVacation, User, Vacation,
};
use crate::repositories::{
    CompanyRepository, CostCenterRepository, DepartmentRepository, EmployeeRepository,
    EpiRepository, ProjectRepository, RoleRepository, StatusTransition, TerminationRepository,
    UserRepository, VacationRepository,
};

#[derive(Debug, Default)]
struct Tables {
    next_user_id: i32,
    users: HashMap<i32, User>,
    companies: HashMap<Uuid, Company>,
    departments: HashMap<Uuid, Department>,
    cost_centers: HashMap<Uuid, CostCenter>,
    epis: HashMap<Uuid, Epi>,
    roles: HashMap<Uuid, Role>,
    role_epis: BTreeSet<(Uuid, Uuid)>,
    projects: HashMap<Uuid, Project>,
    employees: HashMap<Uuid, Employee>,
    vacations: HashMap<Uuid, Vacation>,
    terminations: HashMap<Uuid, Termination>,
}

impl Tables {
    fn role_with_epis(&self, role: Role) -> RoleWithEpis {
        let mut epis: Vec<Epi> = self
            .role_epis
            .iter()
            .filter(|(funcao_id, _)| *funcao_id == role.id)
            .filter_map(|(_, epi_id)| self.epis.get(epi_id))
            .filter(|epi| epi.status.is_active())
            .cloned()
            .collect();
        epis.sort_by(|a, b| a.nome.cmp(&b.nome));
        RoleWithEpis { role, epis }
    }

    fn replace_role_epis(&mut self, role_id: Uuid, epi_ids: &[Uuid]) -> AppResult<()> {
        if let Some(missing) = epi_ids.iter().find(|id| !self.epis.contains_key(*id)) {
            return Err(foreign_key_violation("epi_id", missing));
        }
        self.role_epis.retain(|(funcao_id, _)| *funcao_id != role_id);
        self.role_epis.extend(epi_ids.iter().map(|epi_id| (role_id, *epi_id)));
        Ok(())
    }
}

/// Shared in-memory tables. Cloning shares the same data.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}

fn duplicate(entity: &str, field: &str, value: impl ToString) -> AppError {
    AppError::Duplicate {
        entity: entity.to_string(),
        field: field.to_string(),
        value: value.to_string(),
    }
}

fn foreign_key_violation(field: &str, value: impl std::fmt::Display) -> AppError {
    AppError::validation(
        field,
        format!("{} referencia um registro inexistente: {}", field, value),
    )
}

fn active<T: Clone>(row: Option<&T>, status: impl Fn(&T) -> RecordStatus) -> Option<T> {
    row.filter(|row| status(row).is_active()).cloned()
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn create(&self, new_user: NewUser) -> AppResult<User> {
        let mut tables = self.tables.write().await;
        if tables.users.values().any(|u| u.email == new_user.email) {
            return Err(duplicate("users", "email", &new_user.email));
        }
        tables.next_user_id += 1;
        let user = User::from_new(tables.next_user_id, new_user, now());
        tables.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>> {
        Ok(self.tables.read().await.users.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let tables = self.tables.read().await;
        Ok(tables.users.values().find(|u| u.email == email).cloned())
    }
}

#[async_trait]
impl CompanyRepository for MemoryStore {
    async fn create(&self, new_company: NewCompany) -> AppResult<Company> {
        let mut tables = self.tables.write().await;
        if tables.companies.values().any(|c| c.cnpj == new_company.cnpj) {
            return Err(duplicate("empresas", "cnpj", &new_company.cnpj));
        }
        let company = Company::from_new(new_company, now());
        tables.companies.insert(company.id, company.clone());
        Ok(company)
    }

    async fn find_active(&self, id: Uuid) -> AppResult<Option<Company>> {
        let tables = self.tables.read().await;
        Ok(active(tables.companies.get(&id), |c| c.status))
    }

    async fn list_active(&self) -> AppResult<Vec<Company>> {
        let tables = self.tables.read().await;
        let mut rows: Vec<Company> = tables
            .companies
            .values()
            .filter(|c| c.status.is_active())
            .cloned()
            .collect();
        rows.sort_by(|a, b| a.nome_fantasia.cmp(&b.nome_fantasia));
        Ok(rows)
    }

    async fn update_active(&self, id: Uuid, changes: UpdateCompany) -> AppResult<Option<Company>> {
        let mut tables = self.tables.write().await;
        if let Some(cnpj) = &changes.cnpj {
            if tables.companies.values().any(|c| c.id != id && &c.cnpj == cnpj) {
                return Err(duplicate("empresas", "cnpj", cnpj));
            }
        }
        Ok(tables
            .companies
            .get_mut(&id)
            .filter(|c| c.status.is_active())
            .map(|company| {
                company.apply_update(changes, now());
                company.clone()
            }))
    }

    async fn soft_delete(&self, id: Uuid, actor_id: i32) -> AppResult<Option<Company>> {
        let mut tables = self.tables.write().await;
        Ok(tables
            .companies
            .get_mut(&id)
            .filter(|c| c.status.is_active())
            .map(|company| {
                company.status = RecordStatus::Excluido;
                company.atualizado_por = Some(actor_id);
                company.atualizado_em = now();
                company.clone()
            }))
    }
}

#[async_trait]
impl DepartmentRepository for MemoryStore {
    async fn create(&self, new_department: NewDepartment) -> AppResult<Department> {
        let mut tables = self.tables.write().await;
        if !tables.companies.contains_key(&new_department.empresa_id) {
            return Err(foreign_key_violation("empresa_id", new_department.empresa_id));
        }
        let department = Department::from_new(new_department, now());
        tables.departments.insert(department.id, department.clone());
        Ok(department)
    }

    async fn find_active(&self, id: Uuid) -> AppResult<Option<Department>> {
        let tables = self.tables.read().await;
        Ok(active(tables.departments.get(&id), |d| d.status))
    }

    async fn list_active_by_company(&self, empresa_id: Uuid) -> AppResult<Vec<Department>> {
        let tables = self.tables.read().await;
        let mut rows: Vec<Department> = tables
            .departments
            .values()
            .filter(|d| d.empresa_id == empresa_id && d.status.is_active())
            .cloned()
            .collect();
        rows.sort_by(|a, b| a.nome.cmp(&b.nome));
        Ok(rows)
    }

    async fn update_active(
        &self,
        id: Uuid,
        changes: UpdateDepartment,
    ) -> AppResult<Option<Department>> {
        let mut tables = self.tables.write().await;
        Ok(tables
            .departments
            .get_mut(&id)
            .filter(|d| d.status.is_active())
            .map(|department| {
                department.apply_update(changes, now());
                department.clone()
            }))
    }

    async fn soft_delete(&self, id: Uuid, actor_id: i32) -> AppResult<Option<Department>> {
        let mut tables = self.tables.write().await;
        Ok(tables
            .departments
            .get_mut(&id)
            .filter(|d| d.status.is_active())
            .map(|department| {
                department.status = RecordStatus::Excluido;
                department.atualizado_por = Some(actor_id);
                department.atualizado_em = now();
                department.clone()
            }))
    }
}

#[async_trait]
impl CostCenterRepository for MemoryStore {
    async fn create(&self, new_cost_center: NewCostCenter) -> AppResult<CostCenter> {
        let mut tables = self.tables.write().await;
        if !tables.companies.contains_key(&new_cost_center.empresa_id) {
            return Err(foreign_key_violation("empresa_id", new_cost_center.empresa_id));
        }
        let cost_center = CostCenter::from_new(new_cost_center, now());
        tables.cost_centers.insert(cost_center.id, cost_center.clone());
        Ok(cost_center)
    }

    async fn find_active(&self, id: Uuid) -> AppResult<Option<CostCenter>> {
        let tables = self.tables.read().await;
        Ok(active(tables.cost_centers.get(&id), |c| c.status))
    }

    async fn list_active_by_company(&self, empresa_id: Uuid) -> AppResult<Vec<CostCenter>> {
        let tables = self.tables.read().await;
        let mut rows: Vec<CostCenter> = tables
            .cost_centers
            .values()
            .filter(|c| c.empresa_id == empresa_id && c.status.is_active())
            .cloned()
            .collect();
        rows.sort_by(|a, b| a.nome.cmp(&b.nome));
        Ok(rows)
    }

    async fn update_active(
        &self,
        id: Uuid,
        changes: UpdateCostCenter,
    ) -> AppResult<Option<CostCenter>> {
        let mut tables = self.tables.write().await;
        Ok(tables
            .cost_centers
            .get_mut(&id)
            .filter(|c| c.status.is_active())
            .map(|cost_center| {
                cost_center.apply_update(changes, now());
                cost_center.clone()
            }))
    }

    async fn soft_delete(&self, id: Uuid, actor_id: i32) -> AppResult<Option<CostCenter>> {
        let mut tables = self.tables.write().await;
        Ok(tables
            .cost_centers
            .get_mut(&id)
            .filter(|c| c.status.is_active())
            .map(|cost_center| {
                cost_center.status = RecordStatus::Excluido;
                cost_center.atualizado_por = Some(actor_id);
                cost_center.atualizado_em = now();
                cost_center.clone()
            }))
    }
}

#[async_trait]
impl EpiRepository for MemoryStore {
    async fn create(&self, new_epi: NewEpi) -> AppResult<Epi> {
        let mut tables = self.tables.write().await;
        if !tables.companies.contains_key(&new_epi.empresa_id) {
            return Err(foreign_key_violation("empresa_id", new_epi.empresa_id));
        }
        let epi = Epi::from_new(new_epi, now());
        tables.epis.insert(epi.id, epi.clone());
        Ok(epi)
    }

    async fn find_active(&self, id: Uuid) -> AppResult<Option<Epi>> {
        let tables = self.tables.read().await;
        Ok(active(tables.epis.get(&id), |e| e.status))
    }

    async fn find_active_in_company(&self, empresa_id: Uuid, ids: &[Uuid]) -> AppResult<Vec<Epi>> {
        let tables = self.tables.read().await;
        Ok(ids
            .iter()
            .filter_map(|id| tables.epis.get(id))
            .filter(|e| e.empresa_id == empresa_id && e.status.is_active())
            .cloned()
            .collect())
    }

    async fn list_active_by_company(&self, empresa_id: Uuid) -> AppResult<Vec<Epi>> {
        let tables = self.tables.read().await;
        let mut rows: Vec<Epi> = tables
            .epis
            .values()
            .filter(|e| e.empresa_id == empresa_id && e.status.is_active())
            .cloned()
            .collect();
        rows.sort_by(|a, b| a.nome.cmp(&b.nome));
        Ok(rows)
    }

    async fn update_active(&self, id: Uuid, changes: UpdateEpi) -> AppResult<Option<Epi>> {
        let mut tables = self.tables.write().await;
        Ok(tables
            .epis
            .get_mut(&id)
            .filter(|e| e.status.is_active())
            .map(|epi| {
                epi.apply_update(changes, now());
                epi.clone()
            }))
    }

    async fn soft_delete(&self, id: Uuid, actor_id: i32) -> AppResult<Option<Epi>> {
        let mut tables = self.tables.write().await;
        Ok(tables
            .epis
            .get_mut(&id)
            .filter(|e| e.status.is_active())
            .map(|epi| {
                epi.status = RecordStatus::Excluido;
                epi.atualizado_por = Some(actor_id);
                epi.atualizado_em = now();
                epi.clone()
            }))
    }
}

#[async_trait]
impl RoleRepository for MemoryStore {
    async fn create(&self, new_role: NewRole, epi_ids: Vec<Uuid>) -> AppResult<RoleWithEpis> {
        let mut tables = self.tables.write().await;
        if !tables.companies.contains_key(&new_role.empresa_id) {
            return Err(foreign_key_violation("empresa_id", new_role.empresa_id));
        }
        let role = Role::from_new(new_role, now());
        tables.replace_role_epis(role.id, &epi_ids)?;
        tables.roles.insert(role.id, role.clone());
        Ok(tables.role_with_epis(role))
    }

    async fn find_active(&self, id: Uuid) -> AppResult<Option<RoleWithEpis>> {
        let tables = self.tables.read().await;
        Ok(active(tables.roles.get(&id), |r| r.status).map(|role| tables.role_with_epis(role)))
    }

    async fn list_active_by_company(&self, empresa_id: Uuid) -> AppResult<Vec<RoleWithEpis>> {
        let tables = self.tables.read().await;
        let mut rows: Vec<Role> = tables
            .roles
            .values()
            .filter(|r| r.empresa_id == empresa_id && r.status.is_active())
            .cloned()
            .collect();
        rows.sort_by(|a, b| a.nome.cmp(&b.nome));
        Ok(rows
            .into_iter()
            .map(|role| tables.role_with_epis(role))
            .collect())
    }

    async fn update_active(
        &self,
        id: Uuid,
        changes: UpdateRole,
        epi_ids: Option<Vec<Uuid>>,
    ) -> AppResult<Option<RoleWithEpis>> {
        let mut tables = self.tables.write().await;
        if active(tables.roles.get(&id), |r| r.status).is_none() {
            return Ok(None);
        }
        if let Some(epi_ids) = epi_ids {
            tables.replace_role_epis(id, &epi_ids)?;
        }
        let role = match tables.roles.get_mut(&id) {
            Some(role) => {
                role.apply_update(changes, now());
                role.clone()
            }
            None => return Ok(None),
        };
        Ok(Some(tables.role_with_epis(role)))
    }

    async fn soft_delete(&self, id: Uuid, actor_id: i32) -> AppResult<Option<RoleWithEpis>> {
        let mut tables = self.tables.write().await;
        let role = tables
            .roles
            .get_mut(&id)
            .filter(|r| r.status.is_active())
            .map(|role| {
                role.status = RecordStatus::Excluido;
                role.atualizado_por = Some(actor_id);
                role.atualizado_em = now();
                role.clone()
            });
        Ok(role.map(|role| tables.role_with_epis(role)))
    }
}

#[async_trait]
impl ProjectRepository for MemoryStore {
    async fn create(&self, new_project: NewProject) -> AppResult<Project> {
        let mut tables = self.tables.write().await;
        if !tables.companies.contains_key(&new_project.empresa_id) {
            return Err(foreign_key_violation("empresa_id", new_project.empresa_id));
        }
        let project = Project::from_new(new_project, now());
        tables.projects.insert(project.id, project.clone());
        Ok(project)
    }

    async fn find_active(&self, id: Uuid) -> AppResult<Option<Project>> {
        let tables = self.tables.read().await;
        Ok(active(tables.projects.get(&id), |p| p.status))
    }

    async fn list_active_by_company(&self, empresa_id: Uuid) -> AppResult<Vec<Project>> {
        let tables = self.tables.read().await;
        let mut rows: Vec<Project> = tables
            .projects
            .values()
            .filter(|p| p.empresa_id == empresa_id && p.status.is_active())
            .cloned()
            .collect();
        rows.sort_by(|a, b| a.nome.cmp(&b.nome));
        Ok(rows)
    }

    async fn update_active(&self, id: Uuid, changes: UpdateProject) -> AppResult<Option<Project>> {
        let mut tables = self.tables.write().await;
        Ok(tables
            .projects
            .get_mut(&id)
            .filter(|p| p.status.is_active())
            .map(|project| {
                project.apply_update(changes, now());
                project.clone()
            }))
    }

    async fn soft_delete(&self, id: Uuid, actor_id: i32) -> AppResult<Option<Project>> {
        let mut tables = self.tables.write().await;
        Ok(tables
            .projects
            .get_mut(&id)
            .filter(|p| p.status.is_active())
            .map(|project| {
                project.status = RecordStatus::Excluido;
                project.atualizado_por = Some(actor_id);
                project.atualizado_em = now();
                project.clone()
            }))
    }
}

#[async_trait]
impl EmployeeRepository for MemoryStore {
    async fn create(&self, new_employee: NewEmployee) -> AppResult<Employee> {
        let mut tables = self.tables.write().await;
        if !tables.companies.contains_key(&new_employee.empresa_id) {
            return Err(foreign_key_violation("empresa_id", new_employee.empresa_id));
        }
        if tables.employees.values().any(|e| e.cpf == new_employee.cpf) {
            return Err(duplicate("funcionarios", "cpf", &new_employee.cpf));
        }
        let employee = Employee::from_new(new_employee, now());
        tables.employees.insert(employee.id, employee.clone());
        Ok(employee)
    }

    async fn find_active(&self, id: Uuid) -> AppResult<Option<Employee>> {
        let tables = self.tables.read().await;
        Ok(active(tables.employees.get(&id), |e| e.status))
    }

    async fn list_active_by_company(&self, empresa_id: Uuid) -> AppResult<Vec<Employee>> {
        let tables = self.tables.read().await;
        let mut rows: Vec<Employee> = tables
            .employees
            .values()
            .filter(|e| e.empresa_id == empresa_id && e.status.is_active())
            .cloned()
            .collect();
        rows.sort_by(|a, b| a.nome.cmp(&b.nome));
        Ok(rows)
    }

    async fn update_active(
        &self,
        id: Uuid,
        changes: UpdateEmployee,
    ) -> AppResult<Option<Employee>> {
        let mut tables = self.tables.write().await;
        if let Some(cpf) = &changes.cpf {
            if tables.employees.values().any(|e| e.id != id && &e.cpf == cpf) {
                return Err(duplicate("funcionarios", "cpf", cpf));
            }
        }
        let Some(employee) = tables.employees.get_mut(&id).filter(|e| e.status.is_active())
        else {
            return Ok(None);
        };
        if let Some(target) = changes.status_funcionario {
            employee.status_funcionario.change_to(target)?;
        }
        employee.apply_update(changes, now());
        Ok(Some(employee.clone()))
    }

    async fn soft_delete(&self, id: Uuid, actor_id: i32) -> AppResult<Option<Employee>> {
        let mut tables = self.tables.write().await;
        Ok(tables
            .employees
            .get_mut(&id)
            .filter(|e| e.status.is_active())
            .map(|employee| {
                employee.status = RecordStatus::Excluido;
                employee.atualizado_por = Some(actor_id);
                employee.atualizado_em = now();
                employee.clone()
            }))
    }
}

#[async_trait]
impl VacationRepository for MemoryStore {
    async fn create(&self, new_vacation: NewVacation) -> AppResult<Vacation> {
        let mut tables = self.tables.write().await;
        if !tables.employees.contains_key(&new_vacation.funcionario_id) {
            return Err(foreign_key_violation(
                "funcionario_id",
                new_vacation.funcionario_id,
            ));
        }
        let vacation = Vacation::from_new(new_vacation, now());
        tables.vacations.insert(vacation.id, vacation.clone());
        Ok(vacation)
    }

    async fn find_active(&self, id: Uuid) -> AppResult<Option<Vacation>> {
        let tables = self.tables.read().await;
        Ok(active(tables.vacations.get(&id), |v| v.status))
    }

    async fn list_active_by_employee(&self, funcionario_id: Uuid) -> AppResult<Vec<Vacation>> {
        let tables = self.tables.read().await;
        let mut rows: Vec<Vacation> = tables
            .vacations
            .values()
            .filter(|v| v.funcionario_id == funcionario_id && v.status.is_active())
            .cloned()
            .collect();
        rows.sort_by(|a, b| {
            b.data_inicio
                .cmp(&a.data_inicio)
                .then_with(|| b.criado_em.cmp(&a.criado_em))
        });
        Ok(rows)
    }

    async fn update_active(
        &self,
        id: Uuid,
        changes: UpdateVacation,
    ) -> AppResult<Option<Vacation>> {
        let mut tables = self.tables.write().await;
        Ok(tables
            .vacations
            .get_mut(&id)
            .filter(|v| v.status.is_active())
            .map(|vacation| {
                vacation.apply_update(changes, now());
                vacation.clone()
            }))
    }

    async fn soft_delete(&self, id: Uuid, actor_id: i32) -> AppResult<Option<Vacation>> {
        let mut tables = self.tables.write().await;
        Ok(tables
            .vacations
            .get_mut(&id)
            .filter(|v| v.status.is_active())
            .map(|vacation| {
                vacation.status = RecordStatus::Excluido;
                vacation.atualizado_por = Some(actor_id);
                vacation.atualizado_em = now();
                vacation.clone()
            }))
    }
}

fn sort_terminations(rows: &mut [Termination]) {
    rows.sort_by(|a, b| b.data.cmp(&a.data).then_with(|| b.criado_em.cmp(&a.criado_em)));
}

#[async_trait]
impl TerminationRepository for MemoryStore {
    async fn create_with_transition(
        &self,
        new_termination: NewTermination,
        transition: StatusTransition,
    ) -> AppResult<Option<Termination>> {
        let mut tables = self.tables.write().await;
        let employee_id = new_termination.funcionario_id;

        let current = match tables.employees.get(&employee_id) {
            Some(employee) if employee.status.is_active() => employee.status_funcionario,
            _ => return Ok(None),
        };
        let next = transition(current)?;

        let open = tables
            .terminations
            .values()
            .any(|t| t.funcionario_id == employee_id && t.status.is_active());
        if open {
            return Err(AppError::conflict(EMPLOYEE_ALREADY_TERMINATED));
        }

        let stamp = now();
        let actor_id = new_termination.criado_por;
        let termination = Termination::from_new(new_termination, stamp);
        tables.terminations.insert(termination.id, termination.clone());
        if let Some(employee) = tables.employees.get_mut(&employee_id) {
            employee.status_funcionario = next;
            employee.atualizado_por = Some(actor_id);
            employee.atualizado_em = stamp;
        }
        Ok(Some(termination))
    }

    async fn find_active(&self, id: Uuid) -> AppResult<Option<Termination>> {
        let tables = self.tables.read().await;
        Ok(active(tables.terminations.get(&id), |t| t.status))
    }

    async fn list_active_by_employee(&self, funcionario_id: Uuid) -> AppResult<Vec<Termination>> {
        let tables = self.tables.read().await;
        let mut rows: Vec<Termination> = tables
            .terminations
            .values()
            .filter(|t| t.funcionario_id == funcionario_id && t.status.is_active())
            .cloned()
            .collect();
        sort_terminations(&mut rows);
        Ok(rows)
    }

    async fn list_active_by_company(&self, empresa_id: Uuid) -> AppResult<Vec<Termination>> {
        let tables = self.tables.read().await;
        let mut rows: Vec<Termination> = tables
            .terminations
            .values()
            .filter(|t| t.status.is_active())
            .filter(|t| {
                tables
                    .employees
                    .get(&t.funcionario_id)
                    .is_some_and(|e| e.empresa_id == empresa_id)
            })
            .cloned()
            .collect();
        sort_terminations(&mut rows);
        Ok(rows)
    }

    async fn update_active(
        &self,
        id: Uuid,
        changes: UpdateTermination,
    ) -> AppResult<Option<Termination>> {
        let mut tables = self.tables.write().await;
        Ok(tables
            .terminations
            .get_mut(&id)
            .filter(|t| t.status.is_active())
            .map(|termination| {
                termination.apply_update(changes, now());
                termination.clone()
            }))
    }

    async fn soft_delete_with_transition(
        &self,
        id: Uuid,
        actor_id: i32,
        transition: StatusTransition,
    ) -> AppResult<Option<Termination>> {
        let mut tables = self.tables.write().await;
        let Some(termination) = active(tables.terminations.get(&id), |t| t.status) else {
            return Ok(None);
        };

        let next = match tables.employees.get(&termination.funcionario_id) {
            Some(employee) => Some(transition(employee.status_funcionario)?),
            None => None,
        };

        let stamp = now();
        let removed = match tables.terminations.get_mut(&id) {
            Some(row) => {
                row.status = RecordStatus::Excluido;
                row.atualizado_por = Some(actor_id);
                row.atualizado_em = stamp;
                row.clone()
            }
            None => return Ok(None),
        };

        if let (Some(next), Some(employee)) =
            (next, tables.employees.get_mut(&termination.funcionario_id))
        {
            if employee.status_funcionario != next {
                employee.status_funcionario = next;
                employee.atualizado_por = Some(actor_id);
                employee.atualizado_em = stamp;
            }
        }
        Ok(Some(removed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EmployeeStatus;
    use bigdecimal::BigDecimal;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    async fn seed_employee(store: &MemoryStore) -> Employee {
        let company = CompanyRepository::create(
            store,
            NewCompany {
                id: Uuid::new_v4(),
                nome_fantasia: "Construtora Alfa".to_string(),
                razao_social: "Construtora Alfa LTDA".to_string(),
                cnpj: "11222333000181".to_string(),
                rua: "Rua A".to_string(),
                numero: "10".to_string(),
                complemento: None,
                bairro: "Centro".to_string(),
                cidade: "Curitiba".to_string(),
                estado: "PR".to_string(),
                cep: "80000000".to_string(),
                data_fundacao: None,
                email: None,
                celular: None,
                criado_por: 1,
            },
        )
        .await
        .unwrap();

        EmployeeRepository::create(
            store,
            NewEmployee {
                id: Uuid::new_v4(),
                nome: "Ana".to_string(),
                cpf: "12345678901".to_string(),
                data_nascimento: date(1990, 5, 1),
                data_admissao: date(2020, 1, 2),
                email: None,
                celular: None,
                regime_contratacao: crate::models::ContractType::Clt,
                salario: BigDecimal::from_str("3500.00").unwrap(),
                funcao_id: None,
                setor_id: None,
                rua: "Rua B".to_string(),
                numero: "20".to_string(),
                complemento: None,
                bairro: "Centro".to_string(),
                cidade: "Curitiba".to_string(),
                estado: "PR".to_string(),
                cep: "80000000".to_string(),
                empresa_id: company.id,
                criado_por: 1,
            },
        )
        .await
        .unwrap()
    }

    fn new_termination(funcionario_id: Uuid) -> NewTermination {
        NewTermination {
            id: Uuid::new_v4(),
            data: date(2025, 2, 16),
            motivo_interno: "Motivo teste".to_string(),
            motivo_trabalhista: None,
            acao_trabalhista: None,
            forma_demissao: "Sem justa causa".to_string(),
            funcionario_id,
            criado_por: 1,
        }
    }

    #[tokio::test]
    async fn test_create_with_transition_updates_employee() {
        let store = MemoryStore::new();
        let employee = seed_employee(&store).await;

        let created = store
            .create_with_transition(new_termination(employee.id), EmployeeStatus::terminate)
            .await
            .unwrap();
        assert!(created.is_some());

        let employee = EmployeeRepository::find_active(&store, employee.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(employee.status_funcionario, EmployeeStatus::Demitido);
    }

    #[tokio::test]
    async fn test_failed_transition_writes_nothing() {
        let store = MemoryStore::new();
        let employee = seed_employee(&store).await;
        store
            .create_with_transition(new_termination(employee.id), EmployeeStatus::terminate)
            .await
            .unwrap();

        let second = store
            .create_with_transition(new_termination(employee.id), EmployeeStatus::terminate)
            .await;
        assert!(matches!(second, Err(AppError::Conflict { .. })));

        let rows = TerminationRepository::list_active_by_employee(&store, employee.id)
            .await
            .unwrap();
        assert_eq!(rows.len(), 1);
    }

    #[tokio::test]
    async fn test_unique_cnpj_is_duplicate() {
        let store = MemoryStore::new();
        seed_employee(&store).await;

        let again = CompanyRepository::create(
            &store,
            NewCompany {
                id: Uuid::new_v4(),
                nome_fantasia: "Outra".to_string(),
                razao_social: "Outra SA".to_string(),
                cnpj: "11222333000181".to_string(),
                rua: "Rua C".to_string(),
                numero: "1".to_string(),
                complemento: None,
                bairro: "Centro".to_string(),
                cidade: "Curitiba".to_string(),
                estado: "PR".to_string(),
                cep: "80000000".to_string(),
                data_fundacao: None,
                email: None,
                celular: None,
                criado_por: 1,
            },
        )
        .await;

        match again {
            Err(AppError::Duplicate { entity, field, .. }) => {
                assert_eq!(entity, "empresas");
                assert_eq!(field, "cnpj");
            }
            other => panic!("Expected Duplicate, got: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_soft_delete_is_not_repeatable() {
        let store = MemoryStore::new();
        let employee = seed_employee(&store).await;

        assert!(
            EmployeeRepository::soft_delete(&store, employee.id, 2)
                .await
                .unwrap()
                .is_some()
        );
        assert!(
            EmployeeRepository::soft_delete(&store, employee.id, 2)
                .await
                .unwrap()
                .is_none()
        );
        assert!(
            EmployeeRepository::find_active(&store, employee.id)
                .await
                .unwrap()
                .is_none()
        );
    }
}
