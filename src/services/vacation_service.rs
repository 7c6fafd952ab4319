//! Vacation (`ferias`) service.

use std::sync::Arc;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::api::dto::{CreateVacationRequest, UpdateVacationRequest};
use crate::error::{AppError, AppResult};
use crate::models::Vacation;
use crate::repositories::{EmployeeRepository, VacationRepository};
use crate::services::lookup::{VACATION_NOT_FOUND, active_employee};

fn check_period(data_inicio: NaiveDate, data_fim: NaiveDate) -> AppResult<()> {
    if data_fim < data_inicio {
        return Err(AppError::validation(
            "dataFim",
            "dataFim deve ser igual ou posterior a dataInicio.",
        ));
    }
    Ok(())
}

#[derive(Clone)]
pub struct VacationService {
    vacations: Arc<dyn VacationRepository>,
    employees: Arc<dyn EmployeeRepository>,
}

impl VacationService {
    pub fn new(
        vacations: Arc<dyn VacationRepository>,
        employees: Arc<dyn EmployeeRepository>,
    ) -> Self {
        Self {
            vacations,
            employees,
        }
    }

    pub async fn create(
        &self,
        funcionario_id: Uuid,
        payload: CreateVacationRequest,
        actor_id: i32,
    ) -> AppResult<Vacation> {
        active_employee(self.employees.as_ref(), funcionario_id).await?;
        let new_vacation = payload.into_new_vacation(funcionario_id, actor_id)?;
        check_period(new_vacation.data_inicio, new_vacation.data_fim)?;
        self.vacations.create(new_vacation).await
    }

    /// Most recent period first.
    pub async fn find_all(&self, funcionario_id: Uuid) -> AppResult<Vec<Vacation>> {
        active_employee(self.employees.as_ref(), funcionario_id).await?;
        self.vacations.list_active_by_employee(funcionario_id).await
    }

    pub async fn find_one(&self, id: Uuid) -> AppResult<Vacation> {
        self.vacations
            .find_active(id)
            .await?
            .ok_or_else(|| AppError::not_found(VACATION_NOT_FOUND))
    }

    /// The period is checked after merging the given dates into the stored ones.
    pub async fn update(
        &self,
        id: Uuid,
        payload: UpdateVacationRequest,
        actor_id: i32,
    ) -> AppResult<Vacation> {
        let changes = payload.into_update_vacation(actor_id)?;
        if changes.data_inicio.is_some() || changes.data_fim.is_some() {
            let current = self.find_one(id).await?;
            check_period(
                changes.data_inicio.unwrap_or(current.data_inicio),
                changes.data_fim.unwrap_or(current.data_fim),
            )?;
        }

        self.vacations
            .update_active(id, changes)
            .await?
            .ok_or_else(|| AppError::not_found(VACATION_NOT_FOUND))
    }

    pub async fn remove(&self, id: Uuid, actor_id: i32) -> AppResult<Vacation> {
        self.vacations
            .soft_delete(id, actor_id)
            .await?
            .ok_or_else(|| AppError::not_found("Férias já excluídas ou não encontradas."))
    }
}
