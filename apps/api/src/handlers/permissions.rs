use super::*;

pub async fn list_permissions_handler(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<String>>> {
    Ok(Json(state.directory_service.list_permissions().await?))
}

pub async fn add_permission_handler(
    State(state): State<AppState>,
    Json(payload): Json<AddPermissionRequest>,
) -> ApiResult<StatusCode> {
    state
        .directory_service
        .add_permission(payload.permission)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_permission_handler(
    State(state): State<AppState>,
    Path(permission): Path<String>,
) -> ApiResult<StatusCode> {
    state
        .directory_service
        .delete_permission(permission.as_str())
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
