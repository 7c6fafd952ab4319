//! HTTP request handlers for API endpoints.
//!
//! One module per resource; each exposes an `OpenApiRouter` with paths
//! relative to the `/v1` prefix.

pub mod auth;
pub mod companies;
pub mod cost_centers;
pub mod departments;
pub mod employees;
pub mod epis;
pub mod health;
pub mod me;
pub mod projects;
pub mod roles;
pub mod terminations;
pub mod vacations;
