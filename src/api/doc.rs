//! OpenAPI document root. Paths are collected from the handler routers.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

pub const AUTH_TAG: &str = "Auth";
pub const USER_TAG: &str = "Usuários";
pub const HEALTH_TAG: &str = "Health";
pub const COMPANY_TAG: &str = "Empresas";
pub const DEPARTMENT_TAG: &str = "Setores";
pub const COST_CENTER_TAG: &str = "Centros de custo";
pub const ROLE_TAG: &str = "Funções";
pub const EPI_TAG: &str = "EPIs";
pub const PROJECT_TAG: &str = "Projetos";
pub const EMPLOYEE_TAG: &str = "Funcionários";
pub const VACATION_TAG: &str = "Férias";
pub const TERMINATION_TAG: &str = "Demissões";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "RH API",
        description = "Human resources backend: companies, employees and their records",
    ),
    modifiers(&SecurityAddon),
    components(
        schemas(
            crate::api::dto::ErrorResponse,
            crate::api::dto::ErrorMessage,
            crate::models::RecordStatus,
            crate::models::EmployeeStatus,
            crate::models::ContractType,
        )
    ),
    tags(
        (name = AUTH_TAG, description = "Registration, login and token refresh"),
        (name = USER_TAG, description = "Authenticated user profile"),
        (name = HEALTH_TAG, description = "Liveness and readiness probes"),
        (name = COMPANY_TAG, description = "Companies"),
        (name = DEPARTMENT_TAG, description = "Departments of a company"),
        (name = COST_CENTER_TAG, description = "Cost centers of a company"),
        (name = ROLE_TAG, description = "Job roles and their required EPIs"),
        (name = EPI_TAG, description = "Personal protective equipment"),
        (name = PROJECT_TAG, description = "Construction projects"),
        (name = EMPLOYEE_TAG, description = "Employees"),
        (name = VACATION_TAG, description = "Employee vacations"),
        (name = TERMINATION_TAG, description = "Employee terminations"),
    )
)]
pub struct ApiDoc;

pub struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Access token issued by /v1/auth/login"))
                        .build(),
                ),
            )
        }
    }
}
