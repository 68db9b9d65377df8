//! Request and response payloads for the HTTP API.

mod common;
mod permissions;
mod roles;
mod users;

pub use common::HealthResponse;
pub use permissions::AddPermissionRequest;
pub use roles::{CreateRoleRequest, RoleResponse, UpdateRoleRequest};
pub use users::{
    CreateUserRequest, SearchUsersParams, UpdateUserRequest, UserCountResponse, UserPageParams,
    UserResponse,
};
