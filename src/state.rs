//! Application state for Axum web framework.
//!
//! Contains shared services and resources that are accessible
//! across all request handlers.

use crate::config::JwtConfig;
use crate::db::AsyncDbPool;
use crate::repositories::{MemoryStore, Repositories};
use crate::services::Services;

/// Application state containing all shared services and resources.
///
/// Cloning is cheap since both Services and AsyncDbPool use Arc internally.
#[derive(Clone)]
pub struct AppState {
    /// All business logic services
    pub services: Services,
    /// Connection pool, absent when the services run over the in-memory store
    pub db_pool: Option<AsyncDbPool>,
    /// JWT configuration for token generation and validation
    pub jwt_config: JwtConfig,
}

impl AppState {
    /// Creates a new AppState backed by PostgreSQL.
    ///
    /// # Example
    /// ```ignore
    /// let pool = establish_async_connection_pool(&settings.database).await?;
    /// let state = AppState::new(pool, settings.jwt.clone());
    /// ```
    pub fn new(pool: AsyncDbPool, jwt_config: JwtConfig) -> Self {
        let repos = Repositories::postgres(pool.clone());
        Self {
            services: Services::new(repos, jwt_config.clone()),
            db_pool: Some(pool),
            jwt_config,
        }
    }

    /// Creates an AppState whose repositories live in process.
    ///
    /// Used by the HTTP tests; the readiness probe reports the database as
    /// not configured.
    pub fn in_memory(store: MemoryStore, jwt_config: JwtConfig) -> Self {
        let repos = Repositories::in_memory(store);
        Self {
            services: Services::new(repos, jwt_config.clone()),
            db_pool: None,
            jwt_config,
        }
    }
}
