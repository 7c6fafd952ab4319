use crate::error::{AppError, ConstraintParser};
use diesel::result::{DatabaseErrorInformation, DatabaseErrorKind, Error as DieselError};

/// Utility for converting database errors to structured AppError variants.
///
/// Constraint violations become client errors (unique to 409, not null,
/// foreign key and check to 400); everything else is an opaque 500.
pub struct DatabaseErrorConverter;

impl DatabaseErrorConverter {
    /// Converts a Diesel error to an appropriate AppError variant.
    ///
    /// # Arguments
    /// * `error` - The Diesel error to convert
    /// * `operation` - Description of the database operation that failed
    pub fn convert_diesel_error(error: DieselError, operation: &str) -> AppError {
        match error {
            DieselError::DatabaseError(kind, info) => {
                Self::convert_database_error(kind, info.as_ref(), operation)
            }
            DieselError::NotFound => AppError::not_found("Registro não encontrado."),
            other => AppError::Database {
                operation: operation.to_string(),
                source: anyhow::Error::from(other),
            },
        }
    }

    fn convert_database_error(
        kind: DatabaseErrorKind,
        info: &(dyn DatabaseErrorInformation + Send + Sync),
        operation: &str,
    ) -> AppError {
        let text = match info.details() {
            Some(details) => format!("{}\n{}", info.message(), details),
            None => info.message().to_string(),
        };
        let violation =
            ConstraintParser::parse_violation(&text, info.constraint_name(), info.table_name());

        let fallback = |label: &str| AppError::Database {
            operation: operation.to_string(),
            source: anyhow::Error::msg(format!("{}: {}", label, text)),
        };

        match (kind, violation) {
            (DatabaseErrorKind::UniqueViolation, Some(v)) => AppError::Duplicate {
                entity: v.table,
                field: v.field,
                value: v.value.unwrap_or_default(),
            },
            (DatabaseErrorKind::NotNullViolation, Some(v)) => {
                AppError::validation(&v.field, format!("{} é obrigatório.", v.field))
            }
            (DatabaseErrorKind::ForeignKeyViolation, Some(v)) => {
                let reason = match v.value {
                    Some(value) => format!("{} referencia um registro inexistente: {}", v.field, value),
                    None => format!("{} referencia um registro inexistente", v.field),
                };
                AppError::validation(&v.field, reason)
            }
            (DatabaseErrorKind::CheckViolation, Some(v)) => {
                AppError::validation(&v.field, format!("Valor inválido para {}.", v.field))
            }
            (DatabaseErrorKind::UniqueViolation, None) => fallback("Unique constraint violation"),
            (DatabaseErrorKind::NotNullViolation, None) => fallback("Not null constraint violation"),
            (DatabaseErrorKind::ForeignKeyViolation, None) => {
                fallback("Foreign key constraint violation")
            }
            (DatabaseErrorKind::CheckViolation, None) => fallback("Check constraint violation"),
            _ => fallback("Database error"),
        }
    }
}
