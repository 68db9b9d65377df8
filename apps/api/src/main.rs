//! Staffdir API composition root.

#![forbid(unsafe_code)]

mod api_config;
mod dto;
mod error;
mod handlers;
mod seed;
mod state;

use std::sync::Arc;

use axum::Router;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, Method};
use axum::routing::{delete, get, put};
use staffdir_application::DirectoryService;
use staffdir_core::AppError;
use staffdir_infrastructure::InMemoryDirectoryRepository;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::api_config::ApiConfig;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    api_config::init_tracing();

    let config = ApiConfig::load();

    let repository = Arc::new(InMemoryDirectoryRepository::new());
    let directory_service = DirectoryService::new(repository);
    seed::run(&directory_service).await?;

    let app_state = AppState { directory_service };

    let cors_layer = CorsLayer::new()
        .allow_origin(
            HeaderValue::from_str(&config.frontend_url)
                .map_err(|error| AppError::Internal(format!("invalid FRONTEND_URL: {error}")))?,
        )
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE]);

    let app = Router::new()
        .route("/health", get(handlers::health_handler))
        .route(
            "/api/users",
            get(handlers::paginate_users_handler).post(handlers::create_user_handler),
        )
        .route("/api/users/search", get(handlers::search_users_handler))
        .route("/api/users/count", get(handlers::count_users_handler))
        .route(
            "/api/users/{user_id}",
            put(handlers::update_user_handler).delete(handlers::delete_user_handler),
        )
        .route(
            "/api/roles",
            get(handlers::list_roles_handler).post(handlers::create_role_handler),
        )
        .route(
            "/api/roles/{role_id}",
            put(handlers::update_role_handler).delete(handlers::delete_role_handler),
        )
        .route(
            "/api/permissions",
            get(handlers::list_permissions_handler).post(handlers::add_permission_handler),
        )
        .route(
            "/api/permissions/{permission}",
            delete(handlers::delete_permission_handler),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer)
        .with_state(app_state);

    let address = config.socket_address()?;

    let listener = tokio::net::TcpListener::bind(address)
        .await
        .map_err(|error| AppError::Internal(format!("failed to bind listener: {error}")))?;

    info!(%address, "staffdir-api listening");

    axum::serve(listener, app)
        .await
        .map_err(|error| AppError::Internal(format!("api server error: {error}")))
}
