//! Closed status enums shared by the HR records.
//!
//! Each enum maps to a PostgreSQL enum type through `diesel-derive-enum`
//! (database labels are snake_case) and serializes to the wire labels the
//! API exposes (`"A"`/`"E"`, `"ATIVO"`, `"CLT"`, ...).

use diesel_derive_enum::DbEnum;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{AppError, AppResult};

/// Message returned whenever a termination would touch an already terminated employee.
pub const EMPLOYEE_ALREADY_TERMINATED: &str = "O funcionário já foi demitido.";

/// Soft-delete marker carried by every record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, DbEnum, Serialize, Deserialize, ToSchema)]
#[db_enum(existing_type_path = "crate::schema::sql_types::RecordStatus")]
pub enum RecordStatus {
    #[serde(rename = "A")]
    Ativo,
    #[serde(rename = "E")]
    Excluido,
}

impl RecordStatus {
    pub fn is_active(self) -> bool {
        matches!(self, RecordStatus::Ativo)
    }
}

/// Employment status of an employee, independent of the soft-delete marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, DbEnum, Serialize, Deserialize, ToSchema)]
#[db_enum(existing_type_path = "crate::schema::sql_types::EmployeeStatus")]
#[serde(rename_all = "UPPERCASE")]
pub enum EmployeeStatus {
    Ativo,
    Demitido,
    Afastado,
    Ferias,
}

impl EmployeeStatus {
    /// Transition applied when a termination is recorded.
    ///
    /// Any status other than `Demitido` may be terminated.
    pub fn terminate(self) -> AppResult<Self> {
        match self {
            EmployeeStatus::Demitido => Err(AppError::conflict(EMPLOYEE_ALREADY_TERMINATED)),
            _ => Ok(EmployeeStatus::Demitido),
        }
    }

    /// Transition applied when a termination is removed.
    ///
    /// Only `Demitido` reverts to `Ativo`; `Afastado` and `Ferias` are left alone.
    pub fn reinstate(self) -> AppResult<Self> {
        match self {
            EmployeeStatus::Demitido => Ok(EmployeeStatus::Ativo),
            other => Ok(other),
        }
    }

    /// Transition requested through a manual employee update.
    ///
    /// `Demitido` is reserved to the termination workflow: it can neither be
    /// set (400) nor left (409) through an update.
    pub fn change_to(self, target: Self) -> AppResult<Self> {
        if target == EmployeeStatus::Demitido {
            return Err(AppError::validation(
                "statusFuncionario",
                "statusFuncionario não pode ser DEMITIDO; registre uma demissão.",
            ));
        }
        if self == EmployeeStatus::Demitido {
            return Err(AppError::conflict(EMPLOYEE_ALREADY_TERMINATED));
        }
        Ok(target)
    }
}

/// Employment contract regime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, DbEnum, Serialize, Deserialize, ToSchema)]
#[db_enum(existing_type_path = "crate::schema::sql_types::ContractType")]
#[serde(rename_all = "UPPERCASE")]
pub enum ContractType {
    Clt,
    Pj,
    Estagio,
    Temporario,
    Aprendiz,
}
