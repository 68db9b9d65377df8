//! Fixed demo dataset loaded once at startup.
//!
//! The store's initialization contract is seed-or-empty: the repository
//! starts empty and this module fills it exactly once before the listener
//! starts accepting requests.

use staffdir_application::{DirectoryService, NewRole, NewUser};
use staffdir_core::AppResult;
use staffdir_domain::UserStatus;
use tracing::info;

const DEMO_PERMISSIONS: &[&str] = &["read", "write", "delete"];

const DEMO_ROLES: &[(&str, &[&str])] = &[
    ("Admin", &["read", "write", "delete"]),
    ("User", &["read"]),
    ("Manager", &["read", "write"]),
];

const DEMO_USERS: &[(&str, &str, &str, UserStatus)] = &[
    ("John Doe", "john@example.com", "Admin", UserStatus::Active),
    ("Jane Smith", "jane@example.com", "User", UserStatus::Active),
    (
        "Alice Johnson",
        "alice@example.com",
        "User",
        UserStatus::Inactive,
    ),
    (
        "Bob Williams",
        "bob@example.com",
        "Manager",
        UserStatus::Active,
    ),
    (
        "Charlie Brown",
        "charlie@example.com",
        "User",
        UserStatus::Active,
    ),
    (
        "Diana Prince",
        "diana@example.com",
        "User",
        UserStatus::Active,
    ),
    (
        "Evan Parker",
        "evan@example.com",
        "Manager",
        UserStatus::Inactive,
    ),
    ("Fiona Lee", "fiona@example.com", "Admin", UserStatus::Active),
    (
        "George Chen",
        "george@example.com",
        "User",
        UserStatus::Inactive,
    ),
    (
        "Hannah Kim",
        "hannah@example.com",
        "User",
        UserStatus::Active,
    ),
    (
        "Ian Murphy",
        "ian@example.com",
        "Manager",
        UserStatus::Inactive,
    ),
    (
        "Julia Rodriguez",
        "julia@example.com",
        "Admin",
        UserStatus::Active,
    ),
];

/// Seeds the demo directory through the facade.
pub async fn run(directory_service: &DirectoryService) -> AppResult<()> {
    for permission in DEMO_PERMISSIONS {
        directory_service
            .add_permission((*permission).to_owned())
            .await?;
    }

    for (name, permissions) in DEMO_ROLES {
        directory_service
            .add_role(NewRole {
                name: (*name).to_owned(),
                permissions: permissions
                    .iter()
                    .map(|permission| (*permission).to_owned())
                    .collect(),
            })
            .await?;
    }

    for (name, email, role, status) in DEMO_USERS {
        directory_service
            .add_user(NewUser {
                name: (*name).to_owned(),
                email: (*email).to_owned(),
                role: (*role).to_owned(),
                status: *status,
            })
            .await?;
    }

    info!(
        users = DEMO_USERS.len(),
        roles = DEMO_ROLES.len(),
        permissions = DEMO_PERMISSIONS.len(),
        "demo directory seeded"
    );

    Ok(())
}
