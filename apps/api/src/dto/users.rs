use serde::{Deserialize, Serialize};
use staffdir_domain::UserRecord;

/// Incoming payload for user creation.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub role: String,
    pub status: String,
}

/// Incoming payload for partial user updates. Absent fields stay unchanged.
#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
    pub status: Option<String>,
}

/// Query parameters for the paged user listing.
#[derive(Debug, Deserialize)]
pub struct UserPageParams {
    pub page: Option<usize>,
    pub page_size: Option<usize>,
    pub sort_field: Option<String>,
    pub sort_order: Option<String>,
}

/// Query parameters for user search.
#[derive(Debug, Deserialize)]
pub struct SearchUsersParams {
    pub q: Option<String>,
}

/// API representation of a directory user.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub status: String,
}

/// Current size of the user collection.
#[derive(Debug, Serialize)]
pub struct UserCountResponse {
    pub count: usize,
}

impl From<UserRecord> for UserResponse {
    fn from(value: UserRecord) -> Self {
        Self {
            id: value.id.to_string(),
            name: value.name,
            email: value.email,
            role: value.role,
            status: value.status.as_str().to_owned(),
        }
    }
}
