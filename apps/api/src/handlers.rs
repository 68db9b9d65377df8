//! HTTP handlers for the directory API.

use std::str::FromStr;

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;

use staffdir_application::{NewRole, NewUser, RolePatch, UserPageQuery, UserPatch};
use staffdir_domain::{RoleId, SortField, SortOrder, UserId, UserStatus};

use crate::dto::{
    AddPermissionRequest, CreateRoleRequest, CreateUserRequest, RoleResponse, SearchUsersParams,
    UpdateRoleRequest, UpdateUserRequest, UserCountResponse, UserPageParams, UserResponse,
};
use crate::error::ApiResult;
use crate::state::AppState;

mod health;
mod permissions;
mod roles;
mod users;

#[cfg(test)]
mod tests;

pub use health::health_handler;
pub use permissions::{add_permission_handler, delete_permission_handler, list_permissions_handler};
pub use roles::{create_role_handler, delete_role_handler, list_roles_handler, update_role_handler};
pub use users::{
    count_users_handler, create_user_handler, delete_user_handler, paginate_users_handler,
    search_users_handler, update_user_handler,
};
