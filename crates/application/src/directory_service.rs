//! Directory facade composing the store port with the query engine.

use std::sync::Arc;

use staffdir_core::{AppError, AppResult};
use staffdir_domain::{
    RoleId, RoleRecord, SortField, SortOrder, UserId, UserRecord, page_users, search_users,
};

use crate::directory_ports::{DirectoryRepository, NewRole, NewUser, RolePatch, UserPatch};

/// Page request over the user collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserPageQuery {
    /// 1-based page number. Values below 1 are treated as 1.
    pub page: usize,
    /// Window size; must be at least 1.
    pub page_size: usize,
    /// Field supplying the sort key.
    pub sort_field: SortField,
    /// Direction applied to the sort key.
    pub sort_order: SortOrder,
}

/// The single call surface presentation collaborators depend on.
///
/// Wires the collection store to the query engine and enforces the
/// caller-facing preconditions (required fields, page clamping). Collections
/// live for the process lifetime; there is no teardown.
#[derive(Clone)]
pub struct DirectoryService {
    repository: Arc<dyn DirectoryRepository>,
}

impl DirectoryService {
    /// Creates a new facade over the given store.
    #[must_use]
    pub fn new(repository: Arc<dyn DirectoryRepository>) -> Self {
        Self { repository }
    }

    /// Creates a user after checking the required text fields.
    pub async fn add_user(&self, input: NewUser) -> AppResult<UserRecord> {
        require_field("user name", input.name.as_str())?;
        require_field("user email", input.email.as_str())?;
        require_field("user role", input.role.as_str())?;

        self.repository.add_user(input).await
    }

    /// Merges the patch into the matching user. Unknown ids surface
    /// `NotFound`.
    pub async fn update_user(&self, id: UserId, patch: UserPatch) -> AppResult<UserRecord> {
        if patch.is_empty() {
            return Err(AppError::Validation(
                "user update must change at least one field".to_owned(),
            ));
        }

        self.repository.update_user(id, patch).await
    }

    /// Deletes the matching user. Deletion is idempotent: unknown ids
    /// succeed silently.
    pub async fn delete_user(&self, id: UserId) -> AppResult<()> {
        self.repository.delete_user(id).await
    }

    /// Case-insensitive substring search over name, email, and role, against
    /// one consistent snapshot of the user collection.
    pub async fn search_users(&self, query: &str) -> AppResult<Vec<UserRecord>> {
        let users = self.repository.list_users().await?;

        Ok(search_users(&users, query))
    }

    /// Returns one sorted page of the user collection.
    ///
    /// Pages below 1 are clamped to 1; pages past the end come back empty.
    pub async fn paginate_users(&self, query: UserPageQuery) -> AppResult<Vec<UserRecord>> {
        if query.page_size == 0 {
            return Err(AppError::Validation(
                "page size must be at least 1".to_owned(),
            ));
        }

        let users = self.repository.list_users().await?;

        Ok(page_users(
            &users,
            query.page.max(1),
            query.page_size,
            query.sort_field,
            query.sort_order,
        ))
    }

    /// Current size of the user collection.
    pub async fn count_users(&self) -> AppResult<usize> {
        self.repository.count_users().await
    }

    /// Creates a role after checking the required name.
    pub async fn add_role(&self, input: NewRole) -> AppResult<RoleRecord> {
        require_field("role name", input.name.as_str())?;

        self.repository.add_role(input).await
    }

    /// Merges the patch into the matching role. Unknown ids surface
    /// `NotFound`; users holding the old role name are not rewritten.
    pub async fn update_role(&self, id: RoleId, patch: RolePatch) -> AppResult<RoleRecord> {
        if patch.is_empty() {
            return Err(AppError::Validation(
                "role update must change at least one field".to_owned(),
            ));
        }
        if let Some(name) = patch.name.as_deref() {
            require_field("role name", name)?;
        }

        self.repository.update_role(id, patch).await
    }

    /// Deletes the matching role. Users naming the role keep the dangling
    /// name; deletion of unknown ids is a no-op.
    pub async fn delete_role(&self, id: RoleId) -> AppResult<()> {
        self.repository.delete_role(id).await
    }

    /// Snapshot of the role collection in insertion order.
    pub async fn list_roles(&self) -> AppResult<Vec<RoleRecord>> {
        self.repository.list_roles().await
    }

    /// Records a permission value; inserting an existing value is a no-op.
    pub async fn add_permission(&self, value: String) -> AppResult<()> {
        self.repository.add_permission(value).await
    }

    /// Removes a permission value. Role grants referencing it are left
    /// untouched.
    pub async fn delete_permission(&self, value: &str) -> AppResult<()> {
        self.repository.delete_permission(value).await
    }

    /// Snapshot of the permission collection in insertion order.
    pub async fn list_permissions(&self) -> AppResult<Vec<String>> {
        self.repository.list_permissions().await
    }
}

fn require_field(field: &str, value: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{field} must not be empty")));
    }

    Ok(())
}
