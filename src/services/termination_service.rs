//! Termination (`demissoes`) service.
//!
//! Recording a termination moves the employee to `DEMITIDO`; removing it
//! moves the employee back to `ATIVO`. The repository applies the status
//! transition in the same transaction as the termination write, so an
//! employee never has two open terminations.

use std::sync::Arc;

use uuid::Uuid;

use crate::api::dto::{CreateTerminationRequest, UpdateTerminationRequest};
use crate::error::{AppError, AppResult};
use crate::models::{EMPLOYEE_ALREADY_TERMINATED, EmployeeStatus, Termination};
use crate::repositories::{CompanyRepository, EmployeeRepository, TerminationRepository};
use crate::services::lookup::{
    EMPLOYEE_NOT_FOUND, TERMINATION_NOT_FOUND, active_company, active_employee,
};

#[derive(Clone)]
pub struct TerminationService {
    terminations: Arc<dyn TerminationRepository>,
    employees: Arc<dyn EmployeeRepository>,
    companies: Arc<dyn CompanyRepository>,
}

impl TerminationService {
    pub fn new(
        terminations: Arc<dyn TerminationRepository>,
        employees: Arc<dyn EmployeeRepository>,
        companies: Arc<dyn CompanyRepository>,
    ) -> Self {
        Self {
            terminations,
            employees,
            companies,
        }
    }

    /// Records a termination and marks the employee `DEMITIDO`.
    ///
    /// # Errors
    /// * `NotFound` - "Funcionário não encontrado."
    /// * `Conflict` - "O funcionário já foi demitido." when the employee is
    ///   already `DEMITIDO` or has an open termination
    pub async fn create(
        &self,
        funcionario_id: Uuid,
        payload: CreateTerminationRequest,
        actor_id: i32,
    ) -> AppResult<Termination> {
        let new_termination = payload.into_new_termination(funcionario_id, actor_id)?;

        let termination = self
            .terminations
            .create_with_transition(new_termination, EmployeeStatus::terminate)
            .await
            .map_err(|err| match err {
                // The partial unique index on open terminations lost a race.
                AppError::Duplicate { ref entity, .. } if entity == "demissoes" => {
                    AppError::conflict(EMPLOYEE_ALREADY_TERMINATED)
                }
                other => other,
            })?
            .ok_or_else(|| AppError::not_found(EMPLOYEE_NOT_FOUND))?;

        tracing::info!(
            demissao_id = %termination.id,
            %funcionario_id,
            actor_id,
            "termination recorded"
        );
        Ok(termination)
    }

    pub async fn find_all_by_employee(&self, funcionario_id: Uuid) -> AppResult<Vec<Termination>> {
        active_employee(self.employees.as_ref(), funcionario_id).await?;
        self.terminations
            .list_active_by_employee(funcionario_id)
            .await
    }

    pub async fn find_all_by_company(&self, empresa_id: Uuid) -> AppResult<Vec<Termination>> {
        active_company(self.companies.as_ref(), empresa_id).await?;
        self.terminations.list_active_by_company(empresa_id).await
    }

    pub async fn find_one(&self, id: Uuid) -> AppResult<Termination> {
        self.terminations
            .find_active(id)
            .await?
            .ok_or_else(|| AppError::not_found(TERMINATION_NOT_FOUND))
    }

    /// Edits the termination record only; the employee status is untouched.
    pub async fn update(
        &self,
        id: Uuid,
        payload: UpdateTerminationRequest,
        actor_id: i32,
    ) -> AppResult<Termination> {
        let changes = payload.into_update_termination(actor_id)?;
        self.terminations
            .update_active(id, changes)
            .await?
            .ok_or_else(|| AppError::not_found(TERMINATION_NOT_FOUND))
    }

    /// Soft-deletes the termination and reinstates a `DEMITIDO` employee.
    pub async fn remove(&self, id: Uuid, actor_id: i32) -> AppResult<Termination> {
        let termination = self
            .terminations
            .soft_delete_with_transition(id, actor_id, EmployeeStatus::reinstate)
            .await?
            .ok_or_else(|| AppError::not_found("Demissão já excluída ou não encontrada."))?;

        tracing::info!(
            demissao_id = %id,
            funcionario_id = %termination.funcionario_id,
            actor_id,
            "termination removed"
        );
        Ok(termination)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use chrono::NaiveDate;

    use super::TerminationService;
    use crate::api::dto::{CreateTerminationRequest, UpdateEmployeeRequest, UpdateTerminationRequest};
    use crate::error::{AppError, AppResult};
    use crate::models::{EmployeeStatus, NewTermination, Termination, UpdateTermination};
    use crate::repositories::{MemoryStore, StatusTransition, TerminationRepository};
    use crate::services::test_support::*;
    use uuid::Uuid;

    async fn status_of(fx: &Fixture, id: Uuid) -> EmployeeStatus {
        fx.services
            .employees
            .find_one(id)
            .await
            .unwrap()
            .status_funcionario
    }

    #[tokio::test]
    async fn test_create_marks_employee_demitido() {
        let fx = Fixture::new();
        let company = fx.company().await;
        let employee = fx.employee(company.id).await;

        let termination = fx
            .services
            .terminations
            .create(employee.id, termination_payload(), ACTOR_ID)
            .await
            .unwrap();

        assert_eq!(termination.motivo_interno, "Motivo teste");
        assert_eq!(termination.data, NaiveDate::from_ymd_opt(2025, 2, 16).unwrap());
        assert_eq!(termination.funcionario_id, employee.id);
        assert_eq!(status_of(&fx, employee.id).await, EmployeeStatus::Demitido);
    }

    #[tokio::test]
    async fn test_second_termination_conflicts_and_writes_nothing() {
        let fx = Fixture::new();
        let company = fx.company().await;
        let employee = fx.employee(company.id).await;
        fx.services
            .terminations
            .create(employee.id, termination_payload(), ACTOR_ID)
            .await
            .unwrap();

        assert_conflict(
            fx.services
                .terminations
                .create(employee.id, termination_payload(), ACTOR_ID)
                .await,
            "O funcionário já foi demitido.",
        );
        let open = fx
            .services
            .terminations
            .find_all_by_employee(employee.id)
            .await
            .unwrap();
        assert_eq!(open.len(), 1);
    }

    #[tokio::test]
    async fn test_afastado_and_ferias_can_be_terminated() {
        let fx = Fixture::new();
        let company = fx.company().await;

        for (cpf, status) in [
            ("11111111111", EmployeeStatus::Afastado),
            ("22222222222", EmployeeStatus::Ferias),
        ] {
            let employee = fx
                .services
                .employees
                .create(company.id, employee_payload(cpf), ACTOR_ID)
                .await
                .unwrap();
            fx.services
                .employees
                .update(
                    employee.id,
                    UpdateEmployeeRequest {
                        status_funcionario: Some(status),
                        ..Default::default()
                    },
                    ACTOR_ID,
                )
                .await
                .unwrap();

            fx.services
                .terminations
                .create(employee.id, termination_payload(), ACTOR_ID)
                .await
                .unwrap();
            assert_eq!(status_of(&fx, employee.id).await, EmployeeStatus::Demitido);
        }
    }

    #[tokio::test]
    async fn test_create_for_missing_or_removed_employee() {
        let fx = Fixture::new();
        assert_not_found(
            fx.services
                .terminations
                .create(Uuid::new_v4(), termination_payload(), ACTOR_ID)
                .await,
            "Funcionário não encontrado.",
        );

        let company = fx.company().await;
        let employee = fx.employee(company.id).await;
        fx.services.employees.remove(employee.id, ACTOR_ID).await.unwrap();
        assert_not_found(
            fx.services
                .terminations
                .create(employee.id, termination_payload(), ACTOR_ID)
                .await,
            "Funcionário não encontrado.",
        );
    }

    #[tokio::test]
    async fn test_remove_reinstates_employee() {
        let fx = Fixture::new();
        let company = fx.company().await;
        let employee = fx.employee(company.id).await;
        let termination = fx
            .services
            .terminations
            .create(employee.id, termination_payload(), ACTOR_ID)
            .await
            .unwrap();

        fx.services
            .terminations
            .remove(termination.id, OTHER_ACTOR_ID)
            .await
            .unwrap();

        let employee = fx.services.employees.find_one(employee.id).await.unwrap();
        assert_eq!(employee.status_funcionario, EmployeeStatus::Ativo);
        assert_eq!(employee.atualizado_por, Some(OTHER_ACTOR_ID));

        // A new termination is allowed once the previous one is gone.
        fx.services
            .terminations
            .create(employee.id, termination_payload(), ACTOR_ID)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_remove_twice() {
        let fx = Fixture::new();
        let company = fx.company().await;
        let employee = fx.employee(company.id).await;
        let termination = fx
            .services
            .terminations
            .create(employee.id, termination_payload(), ACTOR_ID)
            .await
            .unwrap();

        fx.services
            .terminations
            .remove(termination.id, ACTOR_ID)
            .await
            .unwrap();
        assert_not_found(
            fx.services.terminations.remove(termination.id, ACTOR_ID).await,
            "Demissão já excluída ou não encontrada.",
        );
        assert_eq!(status_of(&fx, employee.id).await, EmployeeStatus::Ativo);
    }

    #[tokio::test]
    async fn test_update_leaves_employee_status() {
        let fx = Fixture::new();
        let company = fx.company().await;
        let employee = fx.employee(company.id).await;
        let termination = fx
            .services
            .terminations
            .create(employee.id, termination_payload(), ACTOR_ID)
            .await
            .unwrap();

        let updated = fx
            .services
            .terminations
            .update(
                termination.id,
                UpdateTerminationRequest {
                    acao_trabalhista: Some("Processo 0001234-56.2025".to_string()),
                    ..Default::default()
                },
                ACTOR_ID,
            )
            .await
            .unwrap();

        assert_eq!(updated.motivo_interno, "Motivo teste");
        assert_eq!(
            updated.acao_trabalhista.as_deref(),
            Some("Processo 0001234-56.2025")
        );
        assert_eq!(status_of(&fx, employee.id).await, EmployeeStatus::Demitido);
    }

    #[tokio::test]
    async fn test_list_by_company_spans_employees() {
        let fx = Fixture::new();
        let company = fx.company().await;
        let first = fx.employee(company.id).await;
        let second = fx
            .services
            .employees
            .create(company.id, employee_payload("98765432100"), ACTOR_ID)
            .await
            .unwrap();

        let mut older = termination_payload();
        older.data = "2024-11-04".to_string();
        fx.services
            .terminations
            .create(first.id, older, ACTOR_ID)
            .await
            .unwrap();
        fx.services
            .terminations
            .create(second.id, termination_payload(), ACTOR_ID)
            .await
            .unwrap();

        let listed = fx
            .services
            .terminations
            .find_all_by_company(company.id)
            .await
            .unwrap();
        let employees: Vec<Uuid> = listed.iter().map(|t| t.funcionario_id).collect();
        assert_eq!(employees, vec![second.id, first.id]);

        assert_not_found(
            fx.services
                .terminations
                .find_all_by_company(Uuid::new_v4())
                .await,
            "Empresa não encontrada.",
        );
    }

    /// Delegates to the memory store but reports the partial unique index
    /// violation PostgreSQL raises when two creates race.
    struct RacingIndex(MemoryStore);

    #[async_trait]
    impl TerminationRepository for RacingIndex {
        async fn create_with_transition(
            &self,
            _new_termination: NewTermination,
            _transition: StatusTransition,
        ) -> AppResult<Option<Termination>> {
            Err(AppError::Duplicate {
                entity: "demissoes".to_string(),
                field: "funcionario_id".to_string(),
                value: Uuid::nil().to_string(),
            })
        }

        async fn find_active(&self, id: Uuid) -> AppResult<Option<Termination>> {
            TerminationRepository::find_active(&self.0, id).await
        }

        async fn list_active_by_employee(&self, id: Uuid) -> AppResult<Vec<Termination>> {
            TerminationRepository::list_active_by_employee(&self.0, id).await
        }

        async fn list_active_by_company(&self, id: Uuid) -> AppResult<Vec<Termination>> {
            TerminationRepository::list_active_by_company(&self.0, id).await
        }

        async fn update_active(
            &self,
            id: Uuid,
            changes: UpdateTermination,
        ) -> AppResult<Option<Termination>> {
            TerminationRepository::update_active(&self.0, id, changes).await
        }

        async fn soft_delete_with_transition(
            &self,
            id: Uuid,
            actor_id: i32,
            transition: StatusTransition,
        ) -> AppResult<Option<Termination>> {
            self.0
                .soft_delete_with_transition(id, actor_id, transition)
                .await
        }
    }

    #[tokio::test]
    async fn test_unique_index_violation_maps_to_conflict() {
        let store = MemoryStore::new();
        let service = TerminationService::new(
            Arc::new(RacingIndex(store.clone())),
            Arc::new(store.clone()),
            Arc::new(store),
        );

        let payload = CreateTerminationRequest {
            data: "2025-02-16".to_string(),
            motivo_interno: "Motivo teste".to_string(),
            forma_demissao: "Sem justa causa".to_string(),
            ..Default::default()
        };

        assert_conflict(
            service.create(Uuid::new_v4(), payload, ACTOR_ID).await,
            "O funcionário já foi demitido.",
        );
    }
}
