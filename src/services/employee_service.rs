//! Employee (`funcionarios`) service.
//!
//! Role and department references are checked against the employee's
//! company. The employment status may be changed here only among `ATIVO`,
//! `AFASTADO` and `FERIAS`; `DEMITIDO` belongs to the termination workflow.

use std::sync::Arc;

use uuid::Uuid;

use crate::api::dto::{CreateEmployeeRequest, UpdateEmployeeRequest};
use crate::error::{AppError, AppResult};
use crate::models::Employee;
use crate::repositories::{
    CompanyRepository, DepartmentRepository, EmployeeRepository, RoleRepository,
};
use crate::services::lookup::{
    EMPLOYEE_NOT_FOUND, active_company, active_employee, department_in_company, role_in_company,
};

#[derive(Clone)]
pub struct EmployeeService {
    employees: Arc<dyn EmployeeRepository>,
    companies: Arc<dyn CompanyRepository>,
    roles: Arc<dyn RoleRepository>,
    departments: Arc<dyn DepartmentRepository>,
}

impl EmployeeService {
    pub fn new(
        employees: Arc<dyn EmployeeRepository>,
        companies: Arc<dyn CompanyRepository>,
        roles: Arc<dyn RoleRepository>,
        departments: Arc<dyn DepartmentRepository>,
    ) -> Self {
        Self {
            employees,
            companies,
            roles,
            departments,
        }
    }

    async fn check_references(
        &self,
        empresa_id: Uuid,
        funcao_id: Option<Uuid>,
        setor_id: Option<Uuid>,
    ) -> AppResult<()> {
        if let Some(funcao_id) = funcao_id {
            role_in_company(self.roles.as_ref(), empresa_id, funcao_id).await?;
        }
        if let Some(setor_id) = setor_id {
            department_in_company(self.departments.as_ref(), empresa_id, setor_id).await?;
        }
        Ok(())
    }

    /// Hires an employee into `empresa_id` with status `ATIVO`.
    ///
    /// # Errors
    /// * `NotFound` - company, role or department missing (or of another company)
    /// * `Duplicate` - CPF already registered
    pub async fn create(
        &self,
        empresa_id: Uuid,
        payload: CreateEmployeeRequest,
        actor_id: i32,
    ) -> AppResult<Employee> {
        active_company(self.companies.as_ref(), empresa_id).await?;
        let new_employee = payload.into_new_employee(empresa_id, actor_id)?;
        self.check_references(empresa_id, new_employee.funcao_id, new_employee.setor_id)
            .await?;

        let employee = self.employees.create(new_employee).await?;
        tracing::info!(funcionario_id = %employee.id, %empresa_id, actor_id, "employee created");
        Ok(employee)
    }

    pub async fn find_all(&self, empresa_id: Uuid) -> AppResult<Vec<Employee>> {
        active_company(self.companies.as_ref(), empresa_id).await?;
        self.employees.list_active_by_company(empresa_id).await
    }

    pub async fn find_one(&self, id: Uuid) -> AppResult<Employee> {
        active_employee(self.employees.as_ref(), id).await
    }

    /// Partial update.
    ///
    /// # Errors
    /// * `Validation` - `statusFuncionario` set to `DEMITIDO`
    /// * `Conflict` - the employee is `DEMITIDO` and a status change was requested
    pub async fn update(
        &self,
        id: Uuid,
        payload: UpdateEmployeeRequest,
        actor_id: i32,
    ) -> AppResult<Employee> {
        let changes = payload.into_update_employee(actor_id)?;
        let current = active_employee(self.employees.as_ref(), id).await?;

        // Early answer from the read; the repository checks again under its lock.
        if let Some(target) = changes.status_funcionario {
            current.status_funcionario.change_to(target)?;
        }
        self.check_references(current.empresa_id, changes.funcao_id, changes.setor_id)
            .await?;

        self.employees
            .update_active(id, changes)
            .await?
            .ok_or_else(|| AppError::not_found(EMPLOYEE_NOT_FOUND))
    }

    pub async fn remove(&self, id: Uuid, actor_id: i32) -> AppResult<Employee> {
        let employee = self
            .employees
            .soft_delete(id, actor_id)
            .await?
            .ok_or_else(|| AppError::not_found("Funcionário já excluído ou não encontrado."))?;
        tracing::info!(funcionario_id = %id, actor_id, "employee removed");
        Ok(employee)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use bigdecimal::BigDecimal;
    use chrono::NaiveDate;

    use super::EmployeeService;
    use crate::api::dto::{CreateDepartmentRequest, UpdateEmployeeRequest};
    use crate::error::{AppError, AppResult};
    use crate::models::{
        Employee, EmployeeStatus, NewEmployee, NewTermination, RecordStatus, UpdateEmployee,
    };
    use crate::repositories::{EmployeeRepository, MemoryStore, Repositories, TerminationRepository};
    use crate::services::Services;
    use crate::services::test_support::*;
    use uuid::Uuid;

    #[tokio::test]
    async fn test_create_starts_active() {
        let fx = Fixture::new();
        let company = fx.company().await;
        let employee = fx.employee(company.id).await;

        assert_eq!(employee.status_funcionario, EmployeeStatus::Ativo);
        assert_eq!(employee.status, RecordStatus::Ativo);
        assert_eq!(employee.empresa_id, company.id);
        assert_eq!(employee.estado, "SP");
    }

    #[tokio::test]
    async fn test_create_under_missing_company() {
        let fx = Fixture::new();
        assert_not_found(
            fx.services
                .employees
                .create(Uuid::new_v4(), employee_payload("12345678901"), ACTOR_ID)
                .await,
            "Empresa não encontrada.",
        );
    }

    #[tokio::test]
    async fn test_role_must_belong_to_company() {
        let fx = Fixture::new();
        let company = fx.company().await;
        let other = fx.company_with_cnpj("99888777000166").await;
        let foreign_role = fx.role(other.id, vec![]).await;

        let mut payload = employee_payload("12345678901");
        payload.funcao_id = Some(foreign_role.role.id);

        assert_not_found(
            fx.services
                .employees
                .create(company.id, payload, ACTOR_ID)
                .await,
            "Função não encontrada.",
        );
        assert!(fx.services.employees.find_all(company.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_removed_department_is_rejected() {
        let fx = Fixture::new();
        let company = fx.company().await;
        let setor = fx
            .services
            .departments
            .create(
                company.id,
                CreateDepartmentRequest {
                    nome: "Obras".to_string(),
                },
                ACTOR_ID,
            )
            .await
            .unwrap();
        fx.services.departments.remove(setor.id, ACTOR_ID).await.unwrap();

        let mut payload = employee_payload("12345678901");
        payload.setor_id = Some(setor.id);

        assert_not_found(
            fx.services
                .employees
                .create(company.id, payload, ACTOR_ID)
                .await,
            "Setor não encontrado.",
        );
    }

    #[tokio::test]
    async fn test_duplicate_cpf() {
        let fx = Fixture::new();
        let company = fx.company().await;
        fx.services
            .employees
            .create(company.id, employee_payload("12345678901"), ACTOR_ID)
            .await
            .unwrap();

        let result = fx
            .services
            .employees
            .create(company.id, employee_payload("12345678901"), ACTOR_ID)
            .await;
        assert!(matches!(result, Err(AppError::Duplicate { .. })));
    }

    #[tokio::test]
    async fn test_partial_update() {
        let fx = Fixture::new();
        let company = fx.company().await;
        let employee = fx.employee(company.id).await;

        let updated = fx
            .services
            .employees
            .update(
                employee.id,
                UpdateEmployeeRequest {
                    salario: Some(BigDecimal::from(4100)),
                    status_funcionario: Some(EmployeeStatus::Ferias),
                    ..Default::default()
                },
                OTHER_ACTOR_ID,
            )
            .await
            .unwrap();

        assert_eq!(updated.salario, BigDecimal::from(4100));
        assert_eq!(updated.status_funcionario, EmployeeStatus::Ferias);
        assert_eq!(updated.nome, employee.nome);
        assert_eq!(updated.cpf, employee.cpf);
        assert_eq!(updated.data_admissao, employee.data_admissao);
        assert_eq!(updated.atualizado_por, Some(OTHER_ACTOR_ID));
    }

    #[tokio::test]
    async fn test_status_cannot_be_set_to_demitido() {
        let fx = Fixture::new();
        let company = fx.company().await;
        let employee = fx.employee(company.id).await;

        let result = fx
            .services
            .employees
            .update(
                employee.id,
                UpdateEmployeeRequest {
                    status_funcionario: Some(EmployeeStatus::Demitido),
                    ..Default::default()
                },
                ACTOR_ID,
            )
            .await;
        assert!(matches!(result, Err(AppError::Validation { .. })));

        let unchanged = fx.services.employees.find_one(employee.id).await.unwrap();
        assert_eq!(unchanged.status_funcionario, EmployeeStatus::Ativo);
    }

    #[tokio::test]
    async fn test_terminated_employee_cannot_be_reactivated_by_update() {
        let fx = Fixture::new();
        let company = fx.company().await;
        let employee = fx.employee(company.id).await;
        fx.services
            .terminations
            .create(employee.id, termination_payload(), ACTOR_ID)
            .await
            .unwrap();

        let result = fx
            .services
            .employees
            .update(
                employee.id,
                UpdateEmployeeRequest {
                    status_funcionario: Some(EmployeeStatus::Ativo),
                    ..Default::default()
                },
                ACTOR_ID,
            )
            .await;
        assert_conflict(result, "O funcionário já foi demitido.");
    }

    #[tokio::test]
    async fn test_remove_twice() {
        let fx = Fixture::new();
        let company = fx.company().await;
        let employee = fx.employee(company.id).await;

        fx.services.employees.remove(employee.id, ACTOR_ID).await.unwrap();
        assert_not_found(
            fx.services.employees.remove(employee.id, ACTOR_ID).await,
            "Funcionário já excluído ou não encontrado.",
        );
    }

    /// Delegates to the memory store, but a termination of the employee
    /// commits right after the service has read it.
    struct TerminatedAfterRead(MemoryStore);

    #[async_trait]
    impl EmployeeRepository for TerminatedAfterRead {
        async fn create(&self, new_employee: NewEmployee) -> AppResult<Employee> {
            EmployeeRepository::create(&self.0, new_employee).await
        }

        async fn find_active(&self, id: Uuid) -> AppResult<Option<Employee>> {
            let snapshot = EmployeeRepository::find_active(&self.0, id).await?;
            let termination = NewTermination {
                id: Uuid::new_v4(),
                data: NaiveDate::from_ymd_opt(2025, 2, 16).unwrap(),
                motivo_interno: "Motivo teste".to_string(),
                motivo_trabalhista: None,
                acao_trabalhista: None,
                forma_demissao: "Sem justa causa".to_string(),
                funcionario_id: id,
                criado_por: OTHER_ACTOR_ID,
            };
            self.0
                .create_with_transition(termination, EmployeeStatus::terminate)
                .await?;
            Ok(snapshot)
        }

        async fn list_active_by_company(&self, empresa_id: Uuid) -> AppResult<Vec<Employee>> {
            EmployeeRepository::list_active_by_company(&self.0, empresa_id).await
        }

        async fn update_active(
            &self,
            id: Uuid,
            changes: UpdateEmployee,
        ) -> AppResult<Option<Employee>> {
            EmployeeRepository::update_active(&self.0, id, changes).await
        }

        async fn soft_delete(&self, id: Uuid, actor_id: i32) -> AppResult<Option<Employee>> {
            EmployeeRepository::soft_delete(&self.0, id, actor_id).await
        }
    }

    #[tokio::test]
    async fn test_status_change_does_not_overwrite_concurrent_termination() {
        let store = MemoryStore::new();
        let services = Services::new(Repositories::in_memory(store.clone()), test_jwt_config());
        let company = services
            .companies
            .create(company_payload("12345678000190"), ACTOR_ID)
            .await
            .unwrap();
        let employee = services
            .employees
            .create(company.id, employee_payload("12345678901"), ACTOR_ID)
            .await
            .unwrap();

        let racing = EmployeeService::new(
            Arc::new(TerminatedAfterRead(store.clone())),
            Arc::new(store.clone()),
            Arc::new(store.clone()),
            Arc::new(store),
        );
        let result = racing
            .update(
                employee.id,
                UpdateEmployeeRequest {
                    status_funcionario: Some(EmployeeStatus::Afastado),
                    ..Default::default()
                },
                ACTOR_ID,
            )
            .await;
        assert_conflict(result, "O funcionário já foi demitido.");

        let stored = services.employees.find_one(employee.id).await.unwrap();
        assert_eq!(stored.status_funcionario, EmployeeStatus::Demitido);
        assert_eq!(stored.atualizado_por, Some(OTHER_ACTOR_ID));
        let open = services
            .terminations
            .find_all_by_employee(employee.id)
            .await
            .unwrap();
        assert_eq!(open.len(), 1);
    }

    #[tokio::test]
    async fn test_other_fields_still_update_after_termination() {
        let fx = Fixture::new();
        let company = fx.company().await;
        let employee = fx.employee(company.id).await;
        fx.services
            .terminations
            .create(employee.id, termination_payload(), ACTOR_ID)
            .await
            .unwrap();

        let updated = fx
            .services
            .employees
            .update(
                employee.id,
                UpdateEmployeeRequest {
                    celular: Some("11987654321".to_string()),
                    ..Default::default()
                },
                ACTOR_ID,
            )
            .await
            .unwrap();
        assert_eq!(updated.celular.as_deref(), Some("11987654321"));
        assert_eq!(updated.status_funcionario, EmployeeStatus::Demitido);
    }
}
