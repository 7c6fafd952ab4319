//! Termination (`demissoes`) request handlers.
//!
//! Recording a termination moves the employee to `DEMITIDO`; deleting it
//! reinstates the employee.

use axum::{extract::State, http::StatusCode, Extension, Json};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::TERMINATION_TAG;
use crate::api::dto::{
    ApiResponse, CreateTerminationRequest, ErrorResponse, TerminationResponse,
    UpdateTerminationRequest,
};
use crate::api::middleware::AuthUser;
use crate::error::AppResult;
use crate::state::AppState;
use crate::utils::validate::{UuidPath, ValidatedJson};

pub fn termination_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(create_termination, list_employee_terminations))
        .routes(routes!(list_company_terminations))
        .routes(routes!(get_termination, update_termination, delete_termination))
}

#[utoipa::path(
    post,
    path = "/funcionarios/{id}/demissoes",
    tag = TERMINATION_TAG,
    params(("id" = uuid::Uuid, Path, description = "Employee id")),
    request_body = CreateTerminationRequest,
    responses(
        (status = 201, description = "Termination recorded", body = ApiResponse<TerminationResponse>),
        (status = 400, description = "Invalid payload", body = ErrorResponse),
        (status = 404, description = "Employee not found", body = ErrorResponse),
        (status = 409, description = "Employee already terminated", body = ErrorResponse)
    ),
    security(("bearerAuth" = []))
)]
async fn create_termination(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    UuidPath(funcionario_id): UuidPath,
    ValidatedJson(payload): ValidatedJson<CreateTerminationRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<TerminationResponse>>)> {
    let termination = state
        .services
        .terminations
        .create(funcionario_id, payload, auth_user.user_id)
        .await?;
    let message = format!("Demissão cadastrada com sucesso, id: #{}.", termination.id);
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(TerminationResponse::from(termination), message)),
    ))
}

#[utoipa::path(
    get,
    path = "/funcionarios/{id}/demissoes",
    tag = TERMINATION_TAG,
    params(("id" = uuid::Uuid, Path, description = "Employee id")),
    responses(
        (status = 200, description = "Active terminations of the employee", body = Vec<TerminationResponse>),
        (status = 404, description = "Employee not found", body = ErrorResponse)
    ),
    security(("bearerAuth" = []))
)]
async fn list_employee_terminations(
    State(state): State<AppState>,
    UuidPath(funcionario_id): UuidPath,
) -> AppResult<Json<Vec<TerminationResponse>>> {
    let terminations = state
        .services
        .terminations
        .find_all_by_employee(funcionario_id)
        .await?;
    Ok(Json(
        terminations.into_iter().map(TerminationResponse::from).collect(),
    ))
}

#[utoipa::path(
    get,
    path = "/empresas/{id}/demissoes",
    tag = TERMINATION_TAG,
    params(("id" = uuid::Uuid, Path, description = "Company id")),
    responses(
        (status = 200, description = "Active terminations of the company's employees", body = Vec<TerminationResponse>),
        (status = 404, description = "Company not found", body = ErrorResponse)
    ),
    security(("bearerAuth" = []))
)]
async fn list_company_terminations(
    State(state): State<AppState>,
    UuidPath(empresa_id): UuidPath,
) -> AppResult<Json<Vec<TerminationResponse>>> {
    let terminations = state
        .services
        .terminations
        .find_all_by_company(empresa_id)
        .await?;
    Ok(Json(
        terminations.into_iter().map(TerminationResponse::from).collect(),
    ))
}

#[utoipa::path(
    get,
    path = "/funcionarios/demissoes/{id}",
    tag = TERMINATION_TAG,
    params(("id" = uuid::Uuid, Path, description = "Termination id")),
    responses(
        (status = 200, description = "Termination found", body = TerminationResponse),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 404, description = "Termination not found", body = ErrorResponse)
    ),
    security(("bearerAuth" = []))
)]
async fn get_termination(
    State(state): State<AppState>,
    UuidPath(id): UuidPath,
) -> AppResult<Json<TerminationResponse>> {
    let termination = state.services.terminations.find_one(id).await?;
    Ok(Json(TerminationResponse::from(termination)))
}

/// Edits the record only; the employee's status is left as is.
#[utoipa::path(
    patch,
    path = "/funcionarios/demissoes/{id}",
    tag = TERMINATION_TAG,
    params(("id" = uuid::Uuid, Path, description = "Termination id")),
    request_body = UpdateTerminationRequest,
    responses(
        (status = 200, description = "Termination updated", body = ApiResponse<TerminationResponse>),
        (status = 404, description = "Termination not found", body = ErrorResponse)
    ),
    security(("bearerAuth" = []))
)]
async fn update_termination(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    UuidPath(id): UuidPath,
    ValidatedJson(payload): ValidatedJson<UpdateTerminationRequest>,
) -> AppResult<Json<ApiResponse<TerminationResponse>>> {
    let termination = state
        .services
        .terminations
        .update(id, payload, auth_user.user_id)
        .await?;
    let message = format!("Demissão id: #{} atualizada com sucesso.", termination.id);
    Ok(Json(ApiResponse::ok(TerminationResponse::from(termination), message)))
}

#[utoipa::path(
    delete,
    path = "/funcionarios/demissoes/{id}",
    tag = TERMINATION_TAG,
    params(("id" = uuid::Uuid, Path, description = "Termination id")),
    responses(
        (status = 200, description = "Termination deleted, employee reinstated", body = ApiResponse<TerminationResponse>),
        (status = 404, description = "Termination already deleted or not found", body = ErrorResponse)
    ),
    security(("bearerAuth" = []))
)]
async fn delete_termination(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    UuidPath(id): UuidPath,
) -> AppResult<Json<ApiResponse<TerminationResponse>>> {
    let termination = state
        .services
        .terminations
        .remove(id, auth_user.user_id)
        .await?;
    let message = format!("Demissão id: #{} excluída com sucesso.", termination.id);
    Ok(Json(ApiResponse::ok(TerminationResponse::from(termination), message)))
}
