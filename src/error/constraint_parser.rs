use std::sync::OnceLock;

use regex::Regex;

/// Kind of constraint, taken from the PostgreSQL naming suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintKind {
    PrimaryKey,
    Unique,
    ForeignKey,
    Check,
}

/// Structured view of a constraint violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintViolation {
    pub table: String,
    pub field: String,
    pub value: Option<String>,
}

/// Utility for parsing PostgreSQL constraint violation messages.
///
/// PostgreSQL names implicit constraints `<table>_<columns>_<suffix>`
/// (`funcionarios_cpf_key`, `ferias_funcionario_id_fkey`); messages carry the
/// offending column and value as `Key (column)=(value)`.
pub struct ConstraintParser;

struct RegexPatterns {
    key_value: Regex,
    column_name: Regex,
    relation_name: Regex,
    constraint_name: Regex,
}

impl RegexPatterns {
    fn new() -> Self {
        Self {
            key_value: compile(r"Key \(([^)]+)\)=\(([^)]*)\)"),
            column_name: compile(r#"column "([^"]+)""#),
            relation_name: compile(r#"(?:relation|table) "([^"]+)""#),
            constraint_name: compile(r#"constraint "([^"]+)""#),
        }
    }
}

// Patterns are literals covered by the tests below.
fn compile(pattern: &str) -> Regex {
    match Regex::new(pattern) {
        Ok(regex) => regex,
        Err(err) => panic!("invalid constraint pattern {pattern}: {err}"),
    }
}

static REGEX_PATTERNS: OnceLock<RegexPatterns> = OnceLock::new();

impl ConstraintParser {
    fn patterns() -> &'static RegexPatterns {
        REGEX_PATTERNS.get_or_init(RegexPatterns::new)
    }

    /// Parses a violation from the pieces PostgreSQL reports.
    ///
    /// # Arguments
    /// * `message` - Primary error message, optionally followed by the DETAIL text
    /// * `constraint_name` - Constraint name when the driver exposes it
    /// * `table_name` - Table name when the driver exposes it
    ///
    /// # Returns
    /// The table, column and offending value, or `None` when nothing useful
    /// could be recovered.
    pub fn parse_violation(
        message: &str,
        constraint_name: Option<&str>,
        table_name: Option<&str>,
    ) -> Option<ConstraintViolation> {
        let constraint = constraint_name
            .map(str::to_string)
            .or_else(|| Self::extract_constraint_from_message(message));
        let table_hint = table_name
            .map(str::to_string)
            .or_else(|| Self::extract_table_from_message(message));

        let from_constraint = constraint
            .as_deref()
            .and_then(|c| Self::split_constraint_name(c, table_hint.as_deref()));

        let key_value = Self::extract_key_value_from_message(message);
        let column = Self::extract_column_from_message(message);

        let table = from_constraint
            .as_ref()
            .map(|(table, _, _)| table.clone())
            .or(table_hint)?;

        // Multi-column keys report "(a, b)"; the constraint name is more useful there.
        let field = match (&key_value, column, &from_constraint) {
            (Some((field, _)), _, _) if !field.contains(',') => field.clone(),
            (_, Some(column), _) => column,
            (_, _, Some((_, field, _))) => field.clone(),
            _ => return None,
        };

        Some(ConstraintViolation {
            table,
            field,
            value: key_value.map(|(_, value)| value),
        })
    }

    /// Splits a constraint name into table, column part and kind.
    ///
    /// The table hint resolves names whose table itself contains underscores,
    /// e.g. `funcoes_epis_epi_id_fkey` with hint `funcoes_epis`.
    pub fn split_constraint_name(
        constraint_name: &str,
        table_hint: Option<&str>,
    ) -> Option<(String, String, ConstraintKind)> {
        let (rest, kind) = [
            ("_pkey", ConstraintKind::PrimaryKey),
            ("_fkey", ConstraintKind::ForeignKey),
            ("_key", ConstraintKind::Unique),
            ("_check", ConstraintKind::Check),
        ]
        .into_iter()
        .find_map(|(suffix, kind)| constraint_name.strip_suffix(suffix).map(|rest| (rest, kind)))?;

        if let Some(table) = table_hint {
            if let Some(field) = rest.strip_prefix(table).and_then(|r| r.strip_prefix('_')) {
                if !field.is_empty() {
                    return Some((table.to_string(), field.to_string(), kind));
                }
            }
        }

        let (table, field) = rest.split_once('_')?;
        if table.is_empty() || field.is_empty() {
            return None;
        }
        Some((table.to_string(), field.to_string(), kind))
    }

    pub fn extract_column_from_message(message: &str) -> Option<String> {
        Self::patterns()
            .column_name
            .captures(message)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    }

    pub fn extract_table_from_message(message: &str) -> Option<String> {
        Self::patterns()
            .relation_name
            .captures(message)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    }

    pub fn extract_constraint_from_message(message: &str) -> Option<String> {
        Self::patterns()
            .constraint_name
            .captures(message)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    }

    /// Extracts `(column, value)` from a `Key (column)=(value)` detail.
    pub fn extract_key_value_from_message(message: &str) -> Option<(String, String)> {
        Self::patterns().key_value.captures(message).and_then(|caps| {
            let field = caps.get(1)?.as_str().to_string();
            let value = caps.get(2)?.as_str().to_string();
            Some((field, value))
        })
    }
}
