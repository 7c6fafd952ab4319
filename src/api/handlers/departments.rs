//! Department (`setores`) request handlers. Departments are scoped to a company.

use axum::{extract::State, http::StatusCode, Extension, Json};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::DEPARTMENT_TAG;
use crate::api::dto::{
    ApiResponse, CreateDepartmentRequest, DepartmentResponse, ErrorResponse,
    UpdateDepartmentRequest,
};
use crate::api::middleware::AuthUser;
use crate::error::AppResult;
use crate::state::AppState;
use crate::utils::validate::{UuidPath, ValidatedJson};

pub fn department_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(create_department, list_departments))
        .routes(routes!(get_department, update_department, delete_department))
}

#[utoipa::path(
    post,
    path = "/empresas/{id}/setores",
    tag = DEPARTMENT_TAG,
    params(("id" = uuid::Uuid, Path, description = "Company id")),
    request_body = CreateDepartmentRequest,
    responses(
        (status = 201, description = "Department created", body = ApiResponse<DepartmentResponse>),
        (status = 400, description = "Invalid payload", body = ErrorResponse),
        (status = 404, description = "Company not found", body = ErrorResponse)
    ),
    security(("bearerAuth" = []))
)]
async fn create_department(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    UuidPath(empresa_id): UuidPath,
    ValidatedJson(payload): ValidatedJson<CreateDepartmentRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<DepartmentResponse>>)> {
    let department = state
        .services
        .departments
        .create(empresa_id, payload, auth_user.user_id)
        .await?;
    let message = format!("Setor cadastrado com sucesso, id: #{}.", department.id);
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(DepartmentResponse::from(department), message)),
    ))
}

#[utoipa::path(
    get,
    path = "/empresas/{id}/setores",
    tag = DEPARTMENT_TAG,
    params(("id" = uuid::Uuid, Path, description = "Company id")),
    responses(
        (status = 200, description = "Active departments of the company", body = Vec<DepartmentResponse>),
        (status = 404, description = "Company not found", body = ErrorResponse)
    ),
    security(("bearerAuth" = []))
)]
async fn list_departments(
    State(state): State<AppState>,
    UuidPath(empresa_id): UuidPath,
) -> AppResult<Json<Vec<DepartmentResponse>>> {
    let departments = state.services.departments.find_all(empresa_id).await?;
    Ok(Json(
        departments.into_iter().map(DepartmentResponse::from).collect(),
    ))
}

#[utoipa::path(
    get,
    path = "/empresas/setores/{id}",
    tag = DEPARTMENT_TAG,
    params(("id" = uuid::Uuid, Path, description = "Department id")),
    responses(
        (status = 200, description = "Department found", body = DepartmentResponse),
        (status = 404, description = "Department not found", body = ErrorResponse)
    ),
    security(("bearerAuth" = []))
)]
async fn get_department(
    State(state): State<AppState>,
    UuidPath(id): UuidPath,
) -> AppResult<Json<DepartmentResponse>> {
    let department = state.services.departments.find_one(id).await?;
    Ok(Json(DepartmentResponse::from(department)))
}

#[utoipa::path(
    patch,
    path = "/empresas/setores/{id}",
    tag = DEPARTMENT_TAG,
    params(("id" = uuid::Uuid, Path, description = "Department id")),
    request_body = UpdateDepartmentRequest,
    responses(
        (status = 200, description = "Department updated", body = ApiResponse<DepartmentResponse>),
        (status = 404, description = "Department not found", body = ErrorResponse)
    ),
    security(("bearerAuth" = []))
)]
async fn update_department(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    UuidPath(id): UuidPath,
    ValidatedJson(payload): ValidatedJson<UpdateDepartmentRequest>,
) -> AppResult<Json<ApiResponse<DepartmentResponse>>> {
    let department = state
        .services
        .departments
        .update(id, payload, auth_user.user_id)
        .await?;
    let message = format!("Setor id: #{} atualizado com sucesso.", department.id);
    Ok(Json(ApiResponse::ok(DepartmentResponse::from(department), message)))
}

#[utoipa::path(
    delete,
    path = "/empresas/setores/{id}",
    tag = DEPARTMENT_TAG,
    params(("id" = uuid::Uuid, Path, description = "Department id")),
    responses(
        (status = 200, description = "Department deleted", body = ApiResponse<DepartmentResponse>),
        (status = 404, description = "Department already deleted or not found", body = ErrorResponse)
    ),
    security(("bearerAuth" = []))
)]
async fn delete_department(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    UuidPath(id): UuidPath,
) -> AppResult<Json<ApiResponse<DepartmentResponse>>> {
    let department = state
        .services
        .departments
        .remove(id, auth_user.user_id)
        .await?;
    let message = format!("Setor id: #{} excluído com sucesso.", department.id);
    Ok(Json(ApiResponse::ok(DepartmentResponse::from(department), message)))
}
