//! Role (`funcoes`) request handlers.
//!
//! Role payloads carry the ids of the EPIs required for the role; responses
//! embed the active EPIs.

use axum::{extract::State, http::StatusCode, Extension, Json};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::ROLE_TAG;
use crate::api::dto::{
    ApiResponse, CreateRoleRequest, ErrorResponse, RoleResponse, UpdateRoleRequest,
};
use crate::api::middleware::AuthUser;
use crate::error::AppResult;
use crate::state::AppState;
use crate::utils::validate::{UuidPath, ValidatedJson};

pub fn role_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(create_role, list_roles))
        .routes(routes!(get_role, update_role, delete_role))
}

#[utoipa::path(
    post,
    path = "/empresas/{id}/funcoes",
    tag = ROLE_TAG,
    params(("id" = uuid::Uuid, Path, description = "Company id")),
    request_body = CreateRoleRequest,
    responses(
        (status = 201, description = "Role created", body = ApiResponse<RoleResponse>),
        (status = 400, description = "Invalid payload", body = ErrorResponse),
        (status = 404, description = "Company or EPI not found", body = ErrorResponse)
    ),
    security(("bearerAuth" = []))
)]
async fn create_role(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    UuidPath(empresa_id): UuidPath,
    ValidatedJson(payload): ValidatedJson<CreateRoleRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<RoleResponse>>)> {
    let role = state
        .services
        .roles
        .create(empresa_id, payload, auth_user.user_id)
        .await?;
    let message = format!("Função cadastrada com sucesso, id: #{}.", role.role.id);
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(RoleResponse::from(role), message)),
    ))
}

#[utoipa::path(
    get,
    path = "/empresas/{id}/funcoes",
    tag = ROLE_TAG,
    params(("id" = uuid::Uuid, Path, description = "Company id")),
    responses(
        (status = 200, description = "Active roles of the company", body = Vec<RoleResponse>),
        (status = 404, description = "Company not found", body = ErrorResponse)
    ),
    security(("bearerAuth" = []))
)]
async fn list_roles(
    State(state): State<AppState>,
    UuidPath(empresa_id): UuidPath,
) -> AppResult<Json<Vec<RoleResponse>>> {
    let roles = state.services.roles.find_all(empresa_id).await?;
    Ok(Json(roles.into_iter().map(RoleResponse::from).collect()))
}

#[utoipa::path(
    get,
    path = "/empresas/funcoes/{id}",
    tag = ROLE_TAG,
    params(("id" = uuid::Uuid, Path, description = "Role id")),
    responses(
        (status = 200, description = "Role found", body = RoleResponse),
        (status = 404, description = "Role not found", body = ErrorResponse)
    ),
    security(("bearerAuth" = []))
)]
async fn get_role(
    State(state): State<AppState>,
    UuidPath(id): UuidPath,
) -> AppResult<Json<RoleResponse>> {
    let role = state.services.roles.find_one(id).await?;
    Ok(Json(RoleResponse::from(role)))
}

/// Replaces the EPI set only when `epis` is present in the body.
#[utoipa::path(
    patch,
    path = "/empresas/funcoes/{id}",
    tag = ROLE_TAG,
    params(("id" = uuid::Uuid, Path, description = "Role id")),
    request_body = UpdateRoleRequest,
    responses(
        (status = 200, description = "Role updated", body = ApiResponse<RoleResponse>),
        (status = 404, description = "Role or EPI not found", body = ErrorResponse)
    ),
    security(("bearerAuth" = []))
)]
async fn update_role(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    UuidPath(id): UuidPath,
    ValidatedJson(payload): ValidatedJson<UpdateRoleRequest>,
) -> AppResult<Json<ApiResponse<RoleResponse>>> {
    let role = state
        .services
        .roles
        .update(id, payload, auth_user.user_id)
        .await?;
    let message = format!("Função id: #{} atualizada com sucesso.", role.role.id);
    Ok(Json(ApiResponse::ok(RoleResponse::from(role), message)))
}

#[utoipa::path(
    delete,
    path = "/empresas/funcoes/{id}",
    tag = ROLE_TAG,
    params(("id" = uuid::Uuid, Path, description = "Role id")),
    responses(
        (status = 200, description = "Role deleted", body = ApiResponse<RoleResponse>),
        (status = 404, description = "Role already deleted or not found", body = ErrorResponse)
    ),
    security(("bearerAuth" = []))
)]
async fn delete_role(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    UuidPath(id): UuidPath,
) -> AppResult<Json<ApiResponse<RoleResponse>>> {
    let role = state.services.roles.remove(id, auth_user.user_id).await?;
    let message = format!("Função id: #{} excluída com sucesso.", role.role.id);
    Ok(Json(ApiResponse::ok(RoleResponse::from(role), message)))
}
