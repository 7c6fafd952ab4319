//! Table-row models.
//!
//! Each resource has a `Queryable` row type, an `Insertable` `New*` type and
//! an `AsChangeset` `Update*` type whose `None` fields are left untouched.

mod company;
mod cost_center;
mod department;
mod employee;
mod epi;
mod project;
mod role;
mod status;
mod termination;
mod user;
mod vacation;

pub use company::{Company, NewCompany, UpdateCompany};
pub use cost_center::{CostCenter, NewCostCenter, UpdateCostCenter};
pub use department::{Department, NewDepartment, UpdateDepartment};
pub use employee::{Employee, NewEmployee, UpdateEmployee};
pub use epi::{Epi, NewEpi, UpdateEpi};
pub use project::{NewProject, Project, UpdateProject};
pub use role::{NewRole, Role, RoleEpi, RoleWithEpis, UpdateRole};
pub use status::{ContractType, EMPLOYEE_ALREADY_TERMINATED, EmployeeStatus, RecordStatus};
pub use termination::{NewTermination, Termination, UpdateTermination};
pub use user::{NewUser, User};
pub use vacation::{NewVacation, UpdateVacation, Vacation};

/// Overwrites `field` only when a value was provided.
pub(crate) fn merge<T>(field: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *field = value;
    }
}

/// Nullable-column variant of [`merge`]; a missing value never clears the column.
pub(crate) fn merge_opt<T>(field: &mut Option<T>, value: Option<T>) {
    if value.is_some() {
        *field = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use uuid::Uuid;

    fn new_department() -> NewDepartment {
        NewDepartment {
            id: Uuid::new_v4(),
            nome: "Financeiro".to_string(),
            empresa_id: Uuid::new_v4(),
            criado_por: 1,
        }
    }

    #[test]
    fn test_from_new_starts_active() {
        let department = Department::from_new(new_department(), Utc::now().naive_utc());
        assert_eq!(department.status, RecordStatus::Ativo);
        assert_eq!(department.atualizado_por, None);
    }

    #[test]
    fn test_apply_update_keeps_omitted_fields() {
        let now = Utc::now().naive_utc();
        let mut vacation = Vacation::from_new(
            NewVacation {
                id: Uuid::new_v4(),
                data_inicio: NaiveDate::from_ymd_opt(2025, 1, 6).unwrap(),
                data_fim: NaiveDate::from_ymd_opt(2025, 1, 20).unwrap(),
                funcionario_id: Uuid::new_v4(),
                criado_por: 1,
            },
            now,
        );

        vacation.apply_update(
            UpdateVacation {
                data_fim: NaiveDate::from_ymd_opt(2025, 1, 25),
                atualizado_por: Some(2),
                ..Default::default()
            },
            now,
        );

        assert_eq!(vacation.data_inicio, NaiveDate::from_ymd_opt(2025, 1, 6).unwrap());
        assert_eq!(vacation.data_fim, NaiveDate::from_ymd_opt(2025, 1, 25).unwrap());
        assert_eq!(vacation.atualizado_por, Some(2));
        assert_eq!(vacation.criado_por, 1);
    }

    #[test]
    fn test_merge_opt_never_clears() {
        let mut email = Some("rh@empresa.com.br".to_string());
        merge_opt(&mut email, None);
        assert_eq!(email.as_deref(), Some("rh@empresa.com.br"));
    }
}
