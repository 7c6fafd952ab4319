//! Cost center (`centros-custo`) request handlers, scoped to a company.

use axum::{extract::State, http::StatusCode, Extension, Json};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::COST_CENTER_TAG;
use crate::api::dto::{
    ApiResponse, CostCenterResponse, CreateCostCenterRequest, ErrorResponse,
    UpdateCostCenterRequest,
};
use crate::api::middleware::AuthUser;
use crate::error::AppResult;
use crate::state::AppState;
use crate::utils::validate::{UuidPath, ValidatedJson};

pub fn cost_center_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(create_cost_center, list_cost_centers))
        .routes(routes!(get_cost_center, update_cost_center, delete_cost_center))
}

#[utoipa::path(
    post,
    path = "/empresas/{id}/centros-custo",
    tag = COST_CENTER_TAG,
    params(("id" = uuid::Uuid, Path, description = "Company id")),
    request_body = CreateCostCenterRequest,
    responses(
        (status = 201, description = "Cost center created", body = ApiResponse<CostCenterResponse>),
        (status = 400, description = "Invalid payload", body = ErrorResponse),
        (status = 404, description = "Company not found", body = ErrorResponse)
    ),
    security(("bearerAuth" = []))
)]
async fn create_cost_center(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    UuidPath(empresa_id): UuidPath,
    ValidatedJson(payload): ValidatedJson<CreateCostCenterRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<CostCenterResponse>>)> {
    let cost_center = state
        .services
        .cost_centers
        .create(empresa_id, payload, auth_user.user_id)
        .await?;
    let message = format!("Centro de custo cadastrado com sucesso, id: #{}.", cost_center.id);
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(CostCenterResponse::from(cost_center), message)),
    ))
}

#[utoipa::path(
    get,
    path = "/empresas/{id}/centros-custo",
    tag = COST_CENTER_TAG,
    params(("id" = uuid::Uuid, Path, description = "Company id")),
    responses(
        (status = 200, description = "Active cost centers of the company", body = Vec<CostCenterResponse>),
        (status = 404, description = "Company not found", body = ErrorResponse)
    ),
    security(("bearerAuth" = []))
)]
async fn list_cost_centers(
    State(state): State<AppState>,
    UuidPath(empresa_id): UuidPath,
) -> AppResult<Json<Vec<CostCenterResponse>>> {
    let cost_centers = state.services.cost_centers.find_all(empresa_id).await?;
    Ok(Json(
        cost_centers.into_iter().map(CostCenterResponse::from).collect(),
    ))
}

#[utoipa::path(
    get,
    path = "/empresas/centros-custo/{id}",
    tag = COST_CENTER_TAG,
    params(("id" = uuid::Uuid, Path, description = "Cost center id")),
    responses(
        (status = 200, description = "Cost center found", body = CostCenterResponse),
        (status = 404, description = "Cost center not found", body = ErrorResponse)
    ),
    security(("bearerAuth" = []))
)]
async fn get_cost_center(
    State(state): State<AppState>,
    UuidPath(id): UuidPath,
) -> AppResult<Json<CostCenterResponse>> {
    let cost_center = state.services.cost_centers.find_one(id).await?;
    Ok(Json(CostCenterResponse::from(cost_center)))
}

#[utoipa::path(
    patch,
    path = "/empresas/centros-custo/{id}",
    tag = COST_CENTER_TAG,
    params(("id" = uuid::Uuid, Path, description = "Cost center id")),
    request_body = UpdateCostCenterRequest,
    responses(
        (status = 200, description = "Cost center updated", body = ApiResponse<CostCenterResponse>),
        (status = 404, description = "Cost center not found", body = ErrorResponse)
    ),
    security(("bearerAuth" = []))
)]
async fn update_cost_center(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    UuidPath(id): UuidPath,
    ValidatedJson(payload): ValidatedJson<UpdateCostCenterRequest>,
) -> AppResult<Json<ApiResponse<CostCenterResponse>>> {
    let cost_center = state
        .services
        .cost_centers
        .update(id, payload, auth_user.user_id)
        .await?;
    let message = format!("Centro de custo id: #{} atualizado com sucesso.", cost_center.id);
    Ok(Json(ApiResponse::ok(CostCenterResponse::from(cost_center), message)))
}

#[utoipa::path(
    delete,
    path = "/empresas/centros-custo/{id}",
    tag = COST_CENTER_TAG,
    params(("id" = uuid::Uuid, Path, description = "Cost center id")),
    responses(
        (status = 200, description = "Cost center deleted", body = ApiResponse<CostCenterResponse>),
        (status = 404, description = "Cost center already deleted or not found", body = ErrorResponse)
    ),
    security(("bearerAuth" = []))
)]
async fn delete_cost_center(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    UuidPath(id): UuidPath,
) -> AppResult<Json<ApiResponse<CostCenterResponse>>> {
    let cost_center = state
        .services
        .cost_centers
        .remove(id, auth_user.user_id)
        .await?;
    let message = format!("Centro de custo id: #{} excluído com sucesso.", cost_center.id);
    Ok(Json(ApiResponse::ok(CostCenterResponse::from(cost_center), message)))
}
