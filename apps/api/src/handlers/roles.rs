use super::*;

pub async fn list_roles_handler(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<RoleResponse>>> {
    let roles = state
        .directory_service
        .list_roles()
        .await?
        .into_iter()
        .map(RoleResponse::from)
        .collect();

    Ok(Json(roles))
}

pub async fn create_role_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateRoleRequest>,
) -> ApiResult<(StatusCode, Json<RoleResponse>)> {
    let role = state
        .directory_service
        .add_role(NewRole {
            name: payload.name,
            permissions: payload.permissions,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(RoleResponse::from(role))))
}

pub async fn update_role_handler(
    State(state): State<AppState>,
    Path(role_id): Path<String>,
    Json(payload): Json<UpdateRoleRequest>,
) -> ApiResult<Json<RoleResponse>> {
    let role_id = RoleId::parse(role_id.as_str())?;

    let role = state
        .directory_service
        .update_role(
            role_id,
            RolePatch {
                name: payload.name,
                permissions: payload.permissions,
            },
        )
        .await?;

    Ok(Json(RoleResponse::from(role)))
}

pub async fn delete_role_handler(
    State(state): State<AppState>,
    Path(role_id): Path<String>,
) -> ApiResult<StatusCode> {
    // Deletion is idempotent: malformed or unknown ids delete nothing.
    if let Ok(role_id) = RoleId::parse(role_id.as_str()) {
        state.directory_service.delete_role(role_id).await?;
    }

    Ok(StatusCode::NO_CONTENT)
}
