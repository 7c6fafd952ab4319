//! Data Transfer Objects for API requests and responses.
//!
//! Request DTOs validate with `validator` and convert into the `New*` /
//! `Update*` models; response DTOs render models in camelCase with pt-BR dates.

mod auth;
mod company;
mod cost_center;
mod department;
mod employee;
mod epi;
mod error;
mod health;
mod project;
mod response;
mod role;
mod termination;
mod vacation;

pub use auth::{
    AuthResponse, LoginRequest, RefreshTokenRequest, RegisterRequest, TokenResponse, UserResponse,
};
pub use company::{CompanyResponse, CreateCompanyRequest, UpdateCompanyRequest};
pub use cost_center::{CostCenterResponse, CreateCostCenterRequest, UpdateCostCenterRequest};
pub use department::{CreateDepartmentRequest, DepartmentResponse, UpdateDepartmentRequest};
pub use employee::{CreateEmployeeRequest, EmployeeResponse, UpdateEmployeeRequest};
pub use epi::{CreateEpiRequest, EpiResponse, UpdateEpiRequest};
pub use error::{ErrorMessage, ErrorResponse};
pub use health::{ComponentHealth, HealthResponse, HealthStatus};
pub use project::{CreateProjectRequest, ProjectResponse, UpdateProjectRequest};
pub use response::ApiResponse;
pub use role::{CreateRoleRequest, RoleResponse, UpdateRoleRequest};
pub use termination::{CreateTerminationRequest, TerminationResponse, UpdateTerminationRequest};
pub use vacation::{CreateVacationRequest, UpdateVacationRequest, VacationResponse};
