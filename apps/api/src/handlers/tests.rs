use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use staffdir_application::DirectoryService;
use staffdir_infrastructure::InMemoryDirectoryRepository;

use crate::dto::{CreateUserRequest, SearchUsersParams, UpdateUserRequest, UserPageParams};
use crate::seed;
use crate::state::AppState;

use super::{
    count_users_handler, create_user_handler, delete_user_handler, paginate_users_handler,
    search_users_handler, update_user_handler,
};

fn app_state() -> AppState {
    AppState {
        directory_service: DirectoryService::new(Arc::new(InMemoryDirectoryRepository::new())),
    }
}

async fn seeded_state() -> AppState {
    let state = app_state();
    assert!(seed::run(&state.directory_service).await.is_ok());
    state
}

fn page_params(page: usize) -> UserPageParams {
    UserPageParams {
        page: Some(page),
        page_size: Some(10),
        sort_field: Some("name".to_owned()),
        sort_order: Some("asc".to_owned()),
    }
}

#[tokio::test]
async fn create_update_delete_roundtrip() {
    let state = app_state();

    let created = create_user_handler(
        State(state.clone()),
        Json(CreateUserRequest {
            name: "Kara Voss".to_owned(),
            email: "kara@example.com".to_owned(),
            role: "User".to_owned(),
            status: "Inactive".to_owned(),
        }),
    )
    .await;
    assert!(created.is_ok());
    let (status, Json(user)) = created.unwrap_or_else(|_| unreachable!());
    assert_eq!(status, StatusCode::CREATED);

    let updated = update_user_handler(
        State(state.clone()),
        Path(user.id.clone()),
        Json(UpdateUserRequest {
            name: None,
            email: None,
            role: None,
            status: Some("Active".to_owned()),
        }),
    )
    .await;
    assert!(updated.is_ok());
    let Json(updated) = updated.unwrap_or_else(|_| unreachable!());
    assert_eq!(updated.name, "Kara Voss");
    assert_eq!(updated.email, "kara@example.com");
    assert_eq!(updated.role, "User");
    assert_eq!(updated.status, "Active");

    let first_delete = delete_user_handler(State(state.clone()), Path(user.id.clone())).await;
    assert_eq!(first_delete.ok(), Some(StatusCode::NO_CONTENT));
    let second_delete = delete_user_handler(State(state.clone()), Path(user.id)).await;
    assert_eq!(second_delete.ok(), Some(StatusCode::NO_CONTENT));
}

#[tokio::test]
async fn empty_name_maps_to_bad_request() {
    let state = app_state();

    let result = create_user_handler(
        State(state),
        Json(CreateUserRequest {
            name: "  ".to_owned(),
            email: "kara@example.com".to_owned(),
            role: "User".to_owned(),
            status: "Active".to_owned(),
        }),
    )
    .await;

    let response = result
        .err()
        .unwrap_or_else(|| unreachable!())
        .into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_user_update_maps_to_not_found() {
    let state = app_state();

    let result = update_user_handler(
        State(state),
        Path("00000000-0000-0000-0000-000000000000".to_owned()),
        Json(UpdateUserRequest {
            name: Some("Nobody".to_owned()),
            email: None,
            role: None,
            status: None,
        }),
    )
    .await;

    let response = result
        .err()
        .unwrap_or_else(|| unreachable!())
        .into_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn seeded_directory_pages_ten_two_zero() {
    let state = seeded_state().await;

    let counted = count_users_handler(State(state.clone())).await;
    assert!(counted.is_ok());
    assert_eq!(counted.unwrap_or_else(|_| unreachable!()).0.count, 12);

    let first = paginate_users_handler(State(state.clone()), Query(page_params(1))).await;
    assert!(first.is_ok());
    assert_eq!(first.unwrap_or_else(|_| unreachable!()).0.len(), 10);

    let second = paginate_users_handler(State(state.clone()), Query(page_params(2))).await;
    assert!(second.is_ok());
    assert_eq!(second.unwrap_or_else(|_| unreachable!()).0.len(), 2);

    let third = paginate_users_handler(State(state), Query(page_params(3))).await;
    assert!(third.is_ok());
    assert!(third.unwrap_or_else(|_| unreachable!()).0.is_empty());
}

#[tokio::test]
async fn search_is_case_insensitive_over_seeded_users() {
    let state = seeded_state().await;

    let upper = search_users_handler(
        State(state.clone()),
        Query(SearchUsersParams {
            q: Some("JOHN".to_owned()),
        }),
    )
    .await;
    assert!(upper.is_ok());

    let names: Vec<String> = upper
        .unwrap_or_else(|_| unreachable!())
        .0
        .into_iter()
        .map(|user| user.name)
        .collect();
    assert_eq!(names, vec!["John Doe".to_owned(), "Alice Johnson".to_owned()]);
}

#[tokio::test]
async fn unknown_sort_field_maps_to_bad_request() {
    let state = seeded_state().await;

    let result = paginate_users_handler(
        State(state),
        Query(UserPageParams {
            page: Some(1),
            page_size: Some(10),
            sort_field: Some("id".to_owned()),
            sort_order: Some("asc".to_owned()),
        }),
    )
    .await;

    let response = result
        .err()
        .unwrap_or_else(|| unreachable!())
        .into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
