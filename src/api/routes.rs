//! Router configuration for the API.
//!
//! Resource routes live under `/v1` behind the bearer token check; auth,
//! health and the OpenAPI document are public.

use axum::{middleware, routing::get, Json, Router};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;

use crate::api::doc::ApiDoc;
use crate::api::handlers::{
    auth, companies, cost_centers, departments, employees, epis, health, me, projects, roles,
    terminations, vacations,
};
use crate::api::middleware::{
    auth_middleware, global_error_handler, logging_middleware, request_id_middleware,
    REQUEST_ID_HEADER,
};
use crate::state::AppState;

pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

/// Routes under `/v1` together with their OpenAPI description.
fn api_routes(state: &AppState) -> OpenApiRouter<AppState> {
    let protected = OpenApiRouter::new()
        .merge(companies::company_routes())
        .merge(departments::department_routes())
        .merge(cost_centers::cost_center_routes())
        .merge(roles::role_routes())
        .merge(epis::epi_routes())
        .merge(projects::project_routes())
        .merge(employees::employee_routes())
        .merge(vacations::vacation_routes())
        .merge(terminations::termination_routes())
        .nest("/usuarios", me::me_routes())
        .route_layer(middleware::from_fn_with_state(state.clone(), auth_middleware));

    OpenApiRouter::new()
        .nest("/auth", auth::auth_routes())
        .merge(protected)
}

/// Creates the main application router with all routes and middleware.
///
/// # Middleware Order
/// Last added runs first:
/// 1. CORS and compression
/// 2. Request ID - generates/propagates `x-request-id`
/// 3. Logging - opens the `http_request` span
/// 4. Global error handler - normalizes non-JSON error responses
pub fn create_router(state: AppState) -> Router {
    let (router, openapi) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .nest("/v1", api_routes(&state))
        .merge(health::health_routes())
        .split_for_parts();

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .expose_headers([REQUEST_ID_HEADER]);

    router
        .route(
            OPENAPI_PATH,
            get(move || {
                let doc = openapi.clone();
                async move { Json(doc) }
            }),
        )
        .layer(middleware::from_fn(global_error_handler))
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(CompressionLayer::new())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::JwtConfig;
    use crate::repositories::MemoryStore;

    #[test]
    fn test_openapi_lists_resource_paths() {
        let state = AppState::in_memory(MemoryStore::new(), JwtConfig::default());
        let (_, openapi) = OpenApiRouter::with_openapi(ApiDoc::openapi())
            .nest("/v1", api_routes(&state))
            .merge(health::health_routes())
            .split_for_parts();

        for path in [
            "/v1/auth/login",
            "/v1/usuarios/me",
            "/v1/empresas",
            "/v1/empresas/{id}",
            "/v1/empresas/{id}/setores",
            "/v1/empresas/{id}/centros-custo",
            "/v1/empresas/centros-custo/{id}",
            "/v1/empresas/funcoes/{id}",
            "/v1/funcionarios/{id}/demissoes",
            "/v1/empresas/{id}/demissoes",
            "/v1/funcionarios/demissoes/{id}",
            "/health/ready",
        ] {
            assert!(openapi.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
