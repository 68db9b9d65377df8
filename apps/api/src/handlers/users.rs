use super::*;

const DEFAULT_PAGE_SIZE: usize = 10;

pub async fn create_user_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserRequest>,
) -> ApiResult<(StatusCode, Json<UserResponse>)> {
    let status = UserStatus::parse(payload.status.as_str())?;

    let user = state
        .directory_service
        .add_user(NewUser {
            name: payload.name,
            email: payload.email,
            role: payload.role,
            status,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

pub async fn update_user_handler(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(payload): Json<UpdateUserRequest>,
) -> ApiResult<Json<UserResponse>> {
    let user_id = UserId::parse(user_id.as_str())?;
    let status = payload
        .status
        .as_deref()
        .map(UserStatus::parse)
        .transpose()?;

    let user = state
        .directory_service
        .update_user(
            user_id,
            UserPatch {
                name: payload.name,
                email: payload.email,
                role: payload.role,
                status,
            },
        )
        .await?;

    Ok(Json(UserResponse::from(user)))
}

pub async fn delete_user_handler(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> ApiResult<StatusCode> {
    // Deletion is idempotent: malformed or unknown ids delete nothing.
    if let Ok(user_id) = UserId::parse(user_id.as_str()) {
        state.directory_service.delete_user(user_id).await?;
    }

    Ok(StatusCode::NO_CONTENT)
}

pub async fn paginate_users_handler(
    State(state): State<AppState>,
    Query(params): Query<UserPageParams>,
) -> ApiResult<Json<Vec<UserResponse>>> {
    let sort_field = SortField::from_str(
        params
            .sort_field
            .as_deref()
            .unwrap_or(SortField::Name.as_str()),
    )?;
    let sort_order = SortOrder::from_str(
        params
            .sort_order
            .as_deref()
            .unwrap_or(SortOrder::Asc.as_str()),
    )?;

    let users = state
        .directory_service
        .paginate_users(UserPageQuery {
            page: params.page.unwrap_or(1),
            page_size: params.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
            sort_field,
            sort_order,
        })
        .await?
        .into_iter()
        .map(UserResponse::from)
        .collect();

    Ok(Json(users))
}

pub async fn search_users_handler(
    State(state): State<AppState>,
    Query(params): Query<SearchUsersParams>,
) -> ApiResult<Json<Vec<UserResponse>>> {
    let users = state
        .directory_service
        .search_users(params.q.as_deref().unwrap_or(""))
        .await?
        .into_iter()
        .map(UserResponse::from)
        .collect();

    Ok(Json(users))
}

pub async fn count_users_handler(
    State(state): State<AppState>,
) -> ApiResult<Json<UserCountResponse>> {
    let count = state.directory_service.count_users().await?;

    Ok(Json(UserCountResponse { count }))
}
