//! Employee (`funcionarios`) request handlers.
//!
//! Employees are created and listed under their company; single-record
//! routes address the employee directly.

use axum::{extract::State, http::StatusCode, Extension, Json};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::EMPLOYEE_TAG;
use crate::api::dto::{
    ApiResponse, CreateEmployeeRequest, EmployeeResponse, ErrorResponse, UpdateEmployeeRequest,
};
use crate::api::middleware::AuthUser;
use crate::error::AppResult;
use crate::state::AppState;
use crate::utils::validate::{UuidPath, ValidatedJson};

pub fn employee_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(create_employee, list_employees))
        .routes(routes!(get_employee, update_employee, delete_employee))
}

/// POST /v1/empresas/{id}/funcionarios
///
/// `funcaoId` and `setorId`, when given, must be active and belong to the
/// same company.
#[utoipa::path(
    post,
    path = "/empresas/{id}/funcionarios",
    tag = EMPLOYEE_TAG,
    params(("id" = uuid::Uuid, Path, description = "Company id")),
    request_body = CreateEmployeeRequest,
    responses(
        (status = 201, description = "Employee created", body = ApiResponse<EmployeeResponse>),
        (status = 400, description = "Invalid payload", body = ErrorResponse),
        (status = 404, description = "Company, role or department not found", body = ErrorResponse),
        (status = 409, description = "CPF already registered", body = ErrorResponse)
    ),
    security(("bearerAuth" = []))
)]
async fn create_employee(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    UuidPath(empresa_id): UuidPath,
    ValidatedJson(payload): ValidatedJson<CreateEmployeeRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<EmployeeResponse>>)> {
    let employee = state
        .services
        .employees
        .create(empresa_id, payload, auth_user.user_id)
        .await?;
    let message = format!("Funcionário cadastrado com sucesso, id: #{}.", employee.id);
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(EmployeeResponse::from(employee), message)),
    ))
}

/// GET /v1/empresas/{id}/funcionarios
#[utoipa::path(
    get,
    path = "/empresas/{id}/funcionarios",
    tag = EMPLOYEE_TAG,
    params(("id" = uuid::Uuid, Path, description = "Company id")),
    responses(
        (status = 200, description = "Active employees of the company", body = Vec<EmployeeResponse>),
        (status = 404, description = "Company not found", body = ErrorResponse)
    ),
    security(("bearerAuth" = []))
)]
async fn list_employees(
    State(state): State<AppState>,
    UuidPath(empresa_id): UuidPath,
) -> AppResult<Json<Vec<EmployeeResponse>>> {
    let employees = state.services.employees.find_all(empresa_id).await?;
    Ok(Json(employees.into_iter().map(EmployeeResponse::from).collect()))
}

/// GET /v1/funcionarios/{id}
#[utoipa::path(
    get,
    path = "/funcionarios/{id}",
    tag = EMPLOYEE_TAG,
    params(("id" = uuid::Uuid, Path, description = "Employee id")),
    responses(
        (status = 200, description = "Employee found", body = EmployeeResponse),
        (status = 404, description = "Employee not found", body = ErrorResponse)
    ),
    security(("bearerAuth" = []))
)]
async fn get_employee(
    State(state): State<AppState>,
    UuidPath(id): UuidPath,
) -> AppResult<Json<EmployeeResponse>> {
    let employee = state.services.employees.find_one(id).await?;
    Ok(Json(EmployeeResponse::from(employee)))
}

/// PATCH /v1/funcionarios/{id}
///
/// `statusFuncionario` may move between `ATIVO`, `AFASTADO` and `FERIAS`;
/// `DEMITIDO` is only reachable by recording a termination.
#[utoipa::path(
    patch,
    path = "/funcionarios/{id}",
    tag = EMPLOYEE_TAG,
    params(("id" = uuid::Uuid, Path, description = "Employee id")),
    request_body = UpdateEmployeeRequest,
    responses(
        (status = 200, description = "Employee updated", body = ApiResponse<EmployeeResponse>),
        (status = 400, description = "Invalid payload", body = ErrorResponse),
        (status = 404, description = "Employee not found", body = ErrorResponse),
        (status = 409, description = "Employee is terminated", body = ErrorResponse)
    ),
    security(("bearerAuth" = []))
)]
async fn update_employee(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    UuidPath(id): UuidPath,
    ValidatedJson(payload): ValidatedJson<UpdateEmployeeRequest>,
) -> AppResult<Json<ApiResponse<EmployeeResponse>>> {
    let employee = state
        .services
        .employees
        .update(id, payload, auth_user.user_id)
        .await?;
    let message = format!("Funcionário id: #{} atualizado com sucesso.", employee.id);
    Ok(Json(ApiResponse::ok(EmployeeResponse::from(employee), message)))
}

/// DELETE /v1/funcionarios/{id}
#[utoipa::path(
    delete,
    path = "/funcionarios/{id}",
    tag = EMPLOYEE_TAG,
    params(("id" = uuid::Uuid, Path, description = "Employee id")),
    responses(
        (status = 200, description = "Employee deleted", body = ApiResponse<EmployeeResponse>),
        (status = 404, description = "Employee already deleted or not found", body = ErrorResponse)
    ),
    security(("bearerAuth" = []))
)]
async fn delete_employee(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    UuidPath(id): UuidPath,
) -> AppResult<Json<ApiResponse<EmployeeResponse>>> {
    let employee = state
        .services
        .employees
        .remove(id, auth_user.user_id)
        .await?;
    let message = format!("Funcionário id: #{} excluído com sucesso.", employee.id);
    Ok(Json(ApiResponse::ok(EmployeeResponse::from(employee), message)))
}
