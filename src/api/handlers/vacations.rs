//! Vacation (`ferias`) request handlers.

use axum::{extract::State, http::StatusCode, Extension, Json};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::VACATION_TAG;
use crate::api::dto::{
    ApiResponse, CreateVacationRequest, ErrorResponse, UpdateVacationRequest, VacationResponse,
};
use crate::api::middleware::AuthUser;
use crate::error::AppResult;
use crate::state::AppState;
use crate::utils::validate::{UuidPath, ValidatedJson};

pub fn vacation_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(create_vacation, list_vacations))
        .routes(routes!(get_vacation, update_vacation, delete_vacation))
}

#[utoipa::path(
    post,
    path = "/funcionarios/{id}/ferias",
    tag = VACATION_TAG,
    params(("id" = uuid::Uuid, Path, description = "Employee id")),
    request_body = CreateVacationRequest,
    responses(
        (status = 201, description = "Vacation created", body = ApiResponse<VacationResponse>),
        (status = 400, description = "Invalid payload or period", body = ErrorResponse),
        (status = 404, description = "Employee not found", body = ErrorResponse)
    ),
    security(("bearerAuth" = []))
)]
async fn create_vacation(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    UuidPath(funcionario_id): UuidPath,
    ValidatedJson(payload): ValidatedJson<CreateVacationRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<VacationResponse>>)> {
    let vacation = state
        .services
        .vacations
        .create(funcionario_id, payload, auth_user.user_id)
        .await?;
    let message = format!("Férias cadastradas com sucesso, id: #{}.", vacation.id);
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(VacationResponse::from(vacation), message)),
    ))
}

#[utoipa::path(
    get,
    path = "/funcionarios/{id}/ferias",
    tag = VACATION_TAG,
    params(("id" = uuid::Uuid, Path, description = "Employee id")),
    responses(
        (status = 200, description = "Active vacations of the employee", body = Vec<VacationResponse>),
        (status = 404, description = "Employee not found", body = ErrorResponse)
    ),
    security(("bearerAuth" = []))
)]
async fn list_vacations(
    State(state): State<AppState>,
    UuidPath(funcionario_id): UuidPath,
) -> AppResult<Json<Vec<VacationResponse>>> {
    let vacations = state.services.vacations.find_all(funcionario_id).await?;
    Ok(Json(vacations.into_iter().map(VacationResponse::from).collect()))
}

#[utoipa::path(
    get,
    path = "/funcionarios/ferias/{id}",
    tag = VACATION_TAG,
    params(("id" = uuid::Uuid, Path, description = "Vacation id")),
    responses(
        (status = 200, description = "Vacation found", body = VacationResponse),
        (status = 404, description = "Vacation not found", body = ErrorResponse)
    ),
    security(("bearerAuth" = []))
)]
async fn get_vacation(
    State(state): State<AppState>,
    UuidPath(id): UuidPath,
) -> AppResult<Json<VacationResponse>> {
    let vacation = state.services.vacations.find_one(id).await?;
    Ok(Json(VacationResponse::from(vacation)))
}

#[utoipa::path(
    patch,
    path = "/funcionarios/ferias/{id}",
    tag = VACATION_TAG,
    params(("id" = uuid::Uuid, Path, description = "Vacation id")),
    request_body = UpdateVacationRequest,
    responses(
        (status = 200, description = "Vacation updated", body = ApiResponse<VacationResponse>),
        (status = 400, description = "Invalid payload or period", body = ErrorResponse),
        (status = 404, description = "Vacation not found", body = ErrorResponse)
    ),
    security(("bearerAuth" = []))
)]
async fn update_vacation(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    UuidPath(id): UuidPath,
    ValidatedJson(payload): ValidatedJson<UpdateVacationRequest>,
) -> AppResult<Json<ApiResponse<VacationResponse>>> {
    let vacation = state
        .services
        .vacations
        .update(id, payload, auth_user.user_id)
        .await?;
    let message = format!("Férias id: #{} atualizadas com sucesso.", vacation.id);
    Ok(Json(ApiResponse::ok(VacationResponse::from(vacation), message)))
}

#[utoipa::path(
    delete,
    path = "/funcionarios/ferias/{id}",
    tag = VACATION_TAG,
    params(("id" = uuid::Uuid, Path, description = "Vacation id")),
    responses(
        (status = 200, description = "Vacation deleted", body = ApiResponse<VacationResponse>),
        (status = 404, description = "Vacation already deleted or not found", body = ErrorResponse)
    ),
    security(("bearerAuth" = []))
)]
async fn delete_vacation(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    UuidPath(id): UuidPath,
) -> AppResult<Json<ApiResponse<VacationResponse>>> {
    let vacation = state
        .services
        .vacations
        .remove(id, auth_user.user_id)
        .await?;
    let message = format!("Férias id: #{} excluídas com sucesso.", vacation.id);
    Ok(Json(ApiResponse::ok(VacationResponse::from(vacation), message)))
}
