//! Company (`empresas`) request handlers.

use axum::{extract::State, http::StatusCode, Extension, Json};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::COMPANY_TAG;
use crate::api::dto::{
    ApiResponse, CompanyResponse, CreateCompanyRequest, ErrorResponse, UpdateCompanyRequest,
};
use crate::api::middleware::AuthUser;
use crate::error::AppResult;
use crate::state::AppState;
use crate::utils::validate::{UuidPath, ValidatedJson};

/// Creates company routes.
///
/// # Routes
/// - `POST /empresas` - Register a company
/// - `GET /empresas` - List active companies
/// - `GET /empresas/{id}` - Get one company
/// - `PATCH /empresas/{id}` - Partially update a company
/// - `DELETE /empresas/{id}` - Soft-delete a company
pub fn company_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(create_company, list_companies))
        .routes(routes!(get_company, update_company, delete_company))
}

/// POST /v1/empresas - Register a company
#[utoipa::path(
    post,
    path = "/empresas",
    tag = COMPANY_TAG,
    request_body = CreateCompanyRequest,
    responses(
        (status = 201, description = "Company created", body = ApiResponse<CompanyResponse>),
        (status = 400, description = "Invalid payload", body = ErrorResponse),
        (status = 409, description = "CNPJ already registered", body = ErrorResponse)
    ),
    security(("bearerAuth" = []))
)]
async fn create_company(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    ValidatedJson(payload): ValidatedJson<CreateCompanyRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<CompanyResponse>>)> {
    let company = state
        .services
        .companies
        .create(payload, auth_user.user_id)
        .await?;
    let message = format!("Empresa cadastrada com sucesso, id: #{}.", company.id);
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(CompanyResponse::from(company), message)),
    ))
}

/// GET /v1/empresas - List active companies
///
/// Returns a bare JSON array ordered by trade name.
#[utoipa::path(
    get,
    path = "/empresas",
    tag = COMPANY_TAG,
    responses(
        (status = 200, description = "Active companies", body = Vec<CompanyResponse>)
    ),
    security(("bearerAuth" = []))
)]
async fn list_companies(State(state): State<AppState>) -> AppResult<Json<Vec<CompanyResponse>>> {
    let companies = state.services.companies.find_all().await?;
    Ok(Json(companies.into_iter().map(CompanyResponse::from).collect()))
}

/// GET /v1/empresas/{id} - Get one active company
#[utoipa::path(
    get,
    path = "/empresas/{id}",
    tag = COMPANY_TAG,
    params(("id" = uuid::Uuid, Path, description = "Company id")),
    responses(
        (status = 200, description = "Company found", body = CompanyResponse),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 404, description = "Company not found or deleted", body = ErrorResponse)
    ),
    security(("bearerAuth" = []))
)]
async fn get_company(
    State(state): State<AppState>,
    UuidPath(id): UuidPath,
) -> AppResult<Json<CompanyResponse>> {
    let company = state.services.companies.find_one(id).await?;
    Ok(Json(CompanyResponse::from(company)))
}

/// PATCH /v1/empresas/{id} - Update the given fields of a company
#[utoipa::path(
    patch,
    path = "/empresas/{id}",
    tag = COMPANY_TAG,
    params(("id" = uuid::Uuid, Path, description = "Company id")),
    request_body = UpdateCompanyRequest,
    responses(
        (status = 200, description = "Company updated", body = ApiResponse<CompanyResponse>),
        (status = 400, description = "Invalid payload", body = ErrorResponse),
        (status = 404, description = "Company not found or deleted", body = ErrorResponse)
    ),
    security(("bearerAuth" = []))
)]
async fn update_company(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    UuidPath(id): UuidPath,
    ValidatedJson(payload): ValidatedJson<UpdateCompanyRequest>,
) -> AppResult<Json<ApiResponse<CompanyResponse>>> {
    let company = state
        .services
        .companies
        .update(id, payload, auth_user.user_id)
        .await?;
    let message = format!("Empresa id: #{} atualizada com sucesso.", company.id);
    Ok(Json(ApiResponse::ok(CompanyResponse::from(company), message)))
}

/// DELETE /v1/empresas/{id} - Soft-delete a company
#[utoipa::path(
    delete,
    path = "/empresas/{id}",
    tag = COMPANY_TAG,
    params(("id" = uuid::Uuid, Path, description = "Company id")),
    responses(
        (status = 200, description = "Company deleted", body = ApiResponse<CompanyResponse>),
        (status = 404, description = "Company already deleted or not found", body = ErrorResponse)
    ),
    security(("bearerAuth" = []))
)]
async fn delete_company(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    UuidPath(id): UuidPath,
) -> AppResult<Json<ApiResponse<CompanyResponse>>> {
    let company = state
        .services
        .companies
        .remove(id, auth_user.user_id)
        .await?;
    let message = format!("Empresa id: #{} excluída com sucesso.", company.id);
    Ok(Json(ApiResponse::ok(CompanyResponse::from(company), message)))
}
