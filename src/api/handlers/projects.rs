//! Project (`projetos`) request handlers.

use axum::{extract::State, http::StatusCode, Extension, Json};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::PROJECT_TAG;
use crate::api::dto::{
    ApiResponse, CreateProjectRequest, ErrorResponse, ProjectResponse, UpdateProjectRequest,
};
use crate::api::middleware::AuthUser;
use crate::error::AppResult;
use crate::state::AppState;
use crate::utils::validate::{UuidPath, ValidatedJson};

pub fn project_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(create_project, list_projects))
        .routes(routes!(get_project, update_project, delete_project))
}

#[utoipa::path(
    post,
    path = "/empresas/{id}/projetos",
    tag = PROJECT_TAG,
    params(("id" = uuid::Uuid, Path, description = "Company id")),
    request_body = CreateProjectRequest,
    responses(
        (status = 201, description = "Project created", body = ApiResponse<ProjectResponse>),
        (status = 400, description = "Invalid payload", body = ErrorResponse),
        (status = 404, description = "Company not found", body = ErrorResponse)
    ),
    security(("bearerAuth" = []))
)]
async fn create_project(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    UuidPath(empresa_id): UuidPath,
    ValidatedJson(payload): ValidatedJson<CreateProjectRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<ProjectResponse>>)> {
    let project = state
        .services
        .projects
        .create(empresa_id, payload, auth_user.user_id)
        .await?;
    let message = format!("Projeto cadastrado com sucesso, id: #{}.", project.id);
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(ProjectResponse::from(project), message)),
    ))
}

#[utoipa::path(
    get,
    path = "/empresas/{id}/projetos",
    tag = PROJECT_TAG,
    params(("id" = uuid::Uuid, Path, description = "Company id")),
    responses(
        (status = 200, description = "Active projects of the company", body = Vec<ProjectResponse>),
        (status = 404, description = "Company not found", body = ErrorResponse)
    ),
    security(("bearerAuth" = []))
)]
async fn list_projects(
    State(state): State<AppState>,
    UuidPath(empresa_id): UuidPath,
) -> AppResult<Json<Vec<ProjectResponse>>> {
    let projects = state.services.projects.find_all(empresa_id).await?;
    Ok(Json(projects.into_iter().map(ProjectResponse::from).collect()))
}

#[utoipa::path(
    get,
    path = "/empresas/projetos/{id}",
    tag = PROJECT_TAG,
    params(("id" = uuid::Uuid, Path, description = "Project id")),
    responses(
        (status = 200, description = "Project found", body = ProjectResponse),
        (status = 404, description = "Project not found", body = ErrorResponse)
    ),
    security(("bearerAuth" = []))
)]
async fn get_project(
    State(state): State<AppState>,
    UuidPath(id): UuidPath,
) -> AppResult<Json<ProjectResponse>> {
    let project = state.services.projects.find_one(id).await?;
    Ok(Json(ProjectResponse::from(project)))
}

#[utoipa::path(
    patch,
    path = "/empresas/projetos/{id}",
    tag = PROJECT_TAG,
    params(("id" = uuid::Uuid, Path, description = "Project id")),
    request_body = UpdateProjectRequest,
    responses(
        (status = 200, description = "Project updated", body = ApiResponse<ProjectResponse>),
        (status = 404, description = "Project not found", body = ErrorResponse)
    ),
    security(("bearerAuth" = []))
)]
async fn update_project(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    UuidPath(id): UuidPath,
    ValidatedJson(payload): ValidatedJson<UpdateProjectRequest>,
) -> AppResult<Json<ApiResponse<ProjectResponse>>> {
    let project = state
        .services
        .projects
        .update(id, payload, auth_user.user_id)
        .await?;
    let message = format!("Projeto id: #{} atualizado com sucesso.", project.id);
    Ok(Json(ApiResponse::ok(ProjectResponse::from(project), message)))
}

#[utoipa::path(
    delete,
    path = "/empresas/projetos/{id}",
    tag = PROJECT_TAG,
    params(("id" = uuid::Uuid, Path, description = "Project id")),
    responses(
        (status = 200, description = "Project deleted", body = ApiResponse<ProjectResponse>),
        (status = 404, description = "Project already deleted or not found", body = ErrorResponse)
    ),
    security(("bearerAuth" = []))
)]
async fn delete_project(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    UuidPath(id): UuidPath,
) -> AppResult<Json<ApiResponse<ProjectResponse>>> {
    let project = state
        .services
        .projects
        .remove(id, auth_user.user_id)
        .await?;
    let message = format!("Projeto id: #{} excluído com sucesso.", project.id);
    Ok(Json(ApiResponse::ok(ProjectResponse::from(project), message)))
}
