//! Repository port for the directory collections.

use async_trait::async_trait;
use staffdir_core::AppResult;
use staffdir_domain::{RoleId, RoleRecord, UserId, UserRecord, UserStatus};

/// Input payload for creating users. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Role name, matched against the Role collection by value only.
    pub role: String,
    /// Initial activation state.
    pub status: UserStatus,
}

/// Partial update applied to one user record. `None` fields are left as-is;
/// the id can never change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    /// Replacement display name.
    pub name: Option<String>,
    /// Replacement contact email.
    pub email: Option<String>,
    /// Replacement role name.
    pub role: Option<String>,
    /// Replacement activation state.
    pub status: Option<UserStatus>,
}

impl UserPatch {
    /// Returns true when the patch changes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.role.is_none() && self.status.is_none()
    }
}

/// Input payload for creating roles. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRole {
    /// Role name.
    pub name: String,
    /// Granted permission names, in grant order.
    pub permissions: Vec<String>,
}

/// Partial update applied to one role record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RolePatch {
    /// Replacement role name. Users holding the old name are not rewritten.
    pub name: Option<String>,
    /// Replacement grant list.
    pub permissions: Option<Vec<String>>,
}

impl RolePatch {
    /// Returns true when the patch changes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.permissions.is_none()
    }
}

/// Storage port owning the three directory collections.
///
/// Implementations must keep each collection in insertion order and hand out
/// consistent snapshots: a read never observes a mutation mid-flight.
#[async_trait]
pub trait DirectoryRepository: Send + Sync {
    /// Appends a user with a freshly assigned unique id.
    async fn add_user(&self, input: NewUser) -> AppResult<UserRecord>;

    /// Merges the patch into the matching record. `NotFound` when the id is
    /// unknown.
    async fn update_user(&self, id: UserId, patch: UserPatch) -> AppResult<UserRecord>;

    /// Removes the matching record. Unknown ids are a no-op, not an error.
    async fn delete_user(&self, id: UserId) -> AppResult<()>;

    /// Snapshot of the user collection in insertion order.
    async fn list_users(&self) -> AppResult<Vec<UserRecord>>;

    /// Current size of the user collection.
    async fn count_users(&self) -> AppResult<usize>;

    /// Appends a role with a freshly assigned unique id.
    async fn add_role(&self, input: NewRole) -> AppResult<RoleRecord>;

    /// Merges the patch into the matching record. `NotFound` when the id is
    /// unknown.
    async fn update_role(&self, id: RoleId, patch: RolePatch) -> AppResult<RoleRecord>;

    /// Removes the matching record without cascading to users that name the
    /// role. Unknown ids are a no-op.
    async fn delete_role(&self, id: RoleId) -> AppResult<()>;

    /// Snapshot of the role collection in insertion order.
    async fn list_roles(&self) -> AppResult<Vec<RoleRecord>>;

    /// Appends a permission value unless it is already present.
    async fn add_permission(&self, value: String) -> AppResult<()>;

    /// Removes every occurrence of the value without touching role grants
    /// that reference it.
    async fn delete_permission(&self, value: &str) -> AppResult<()>;

    /// Snapshot of the permission collection in insertion order.
    async fn list_permissions(&self) -> AppResult<Vec<String>>;
}
