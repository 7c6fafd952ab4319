//! EPI (personal protective equipment) request handlers.

use axum::{extract::State, http::StatusCode, Extension, Json};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::EPI_TAG;
use crate::api::dto::{ApiResponse, CreateEpiRequest, EpiResponse, ErrorResponse, UpdateEpiRequest};
use crate::api::middleware::AuthUser;
use crate::error::AppResult;
use crate::state::AppState;
use crate::utils::validate::{UuidPath, ValidatedJson};

pub fn epi_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(create_epi, list_epis))
        .routes(routes!(get_epi, update_epi, delete_epi))
}

#[utoipa::path(
    post,
    path = "/empresas/{id}/epis",
    tag = EPI_TAG,
    params(("id" = uuid::Uuid, Path, description = "Company id")),
    request_body = CreateEpiRequest,
    responses(
        (status = 201, description = "EPI created", body = ApiResponse<EpiResponse>),
        (status = 400, description = "Invalid payload", body = ErrorResponse),
        (status = 404, description = "Company not found", body = ErrorResponse)
    ),
    security(("bearerAuth" = []))
)]
async fn create_epi(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    UuidPath(empresa_id): UuidPath,
    ValidatedJson(payload): ValidatedJson<CreateEpiRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<EpiResponse>>)> {
    let epi = state
        .services
        .epis
        .create(empresa_id, payload, auth_user.user_id)
        .await?;
    let message = format!("EPI cadastrado com sucesso, id: #{}.", epi.id);
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(EpiResponse::from(epi), message)),
    ))
}

#[utoipa::path(
    get,
    path = "/empresas/{id}/epis",
    tag = EPI_TAG,
    params(("id" = uuid::Uuid, Path, description = "Company id")),
    responses(
        (status = 200, description = "Active EPIs of the company", body = Vec<EpiResponse>),
        (status = 404, description = "Company not found", body = ErrorResponse)
    ),
    security(("bearerAuth" = []))
)]
async fn list_epis(
    State(state): State<AppState>,
    UuidPath(empresa_id): UuidPath,
) -> AppResult<Json<Vec<EpiResponse>>> {
    let epis = state.services.epis.find_all(empresa_id).await?;
    Ok(Json(epis.into_iter().map(EpiResponse::from).collect()))
}

#[utoipa::path(
    get,
    path = "/empresas/epis/{id}",
    tag = EPI_TAG,
    params(("id" = uuid::Uuid, Path, description = "EPI id")),
    responses(
        (status = 200, description = "EPI found", body = EpiResponse),
        (status = 404, description = "EPI not found", body = ErrorResponse)
    ),
    security(("bearerAuth" = []))
)]
async fn get_epi(
    State(state): State<AppState>,
    UuidPath(id): UuidPath,
) -> AppResult<Json<EpiResponse>> {
    let epi = state.services.epis.find_one(id).await?;
    Ok(Json(EpiResponse::from(epi)))
}

#[utoipa::path(
    patch,
    path = "/empresas/epis/{id}",
    tag = EPI_TAG,
    params(("id" = uuid::Uuid, Path, description = "EPI id")),
    request_body = UpdateEpiRequest,
    responses(
        (status = 200, description = "EPI updated", body = ApiResponse<EpiResponse>),
        (status = 404, description = "EPI not found", body = ErrorResponse)
    ),
    security(("bearerAuth" = []))
)]
async fn update_epi(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    UuidPath(id): UuidPath,
    ValidatedJson(payload): ValidatedJson<UpdateEpiRequest>,
) -> AppResult<Json<ApiResponse<EpiResponse>>> {
    let epi = state
        .services
        .epis
        .update(id, payload, auth_user.user_id)
        .await?;
    let message = format!("EPI id: #{} atualizado com sucesso.", epi.id);
    Ok(Json(ApiResponse::ok(EpiResponse::from(epi), message)))
}

#[utoipa::path(
    delete,
    path = "/empresas/epis/{id}",
    tag = EPI_TAG,
    params(("id" = uuid::Uuid, Path, description = "EPI id")),
    responses(
        (status = 200, description = "EPI deleted", body = ApiResponse<EpiResponse>),
        (status = 404, description = "EPI already deleted or not found", body = ErrorResponse)
    ),
    security(("bearerAuth" = []))
)]
async fn delete_epi(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    UuidPath(id): UuidPath,
) -> AppResult<Json<ApiResponse<EpiResponse>>> {
    let epi = state.services.epis.remove(id, auth_user.user_id).await?;
    let message = format!("EPI id: #{} excluído com sucesso.", epi.id);
    Ok(Json(ApiResponse::ok(EpiResponse::from(epi), message)))
}
