use async_trait::async_trait;
use staffdir_application::{DirectoryRepository, NewRole, NewUser, RolePatch, UserPatch};
use staffdir_core::{AppError, AppResult};
use staffdir_domain::{RoleId, RoleRecord, UserId, UserRecord};
use tokio::sync::RwLock;

/// In-memory directory store.
///
/// Each collection sits behind its own lock and keeps insertion order.
/// Reads clone a consistent snapshot under the read lock; mutations take the
/// write lock, so interleaved callers never observe a partially applied
/// record. State lives for the process lifetime only.
#[derive(Debug, Default)]
pub struct InMemoryDirectoryRepository {
    users: RwLock<Vec<UserRecord>>,
    roles: RwLock<Vec<RoleRecord>>,
    permissions: RwLock<Vec<String>>,
}

impl InMemoryDirectoryRepository {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            users: RwLock::new(Vec::new()),
            roles: RwLock::new(Vec::new()),
            permissions: RwLock::new(Vec::new()),
        }
    }
}

#[async_trait]
impl DirectoryRepository for InMemoryDirectoryRepository {
    async fn add_user(&self, input: NewUser) -> AppResult<UserRecord> {
        let record = UserRecord {
            id: UserId::new(),
            name: input.name,
            email: input.email,
            role: input.role,
            status: input.status,
        };

        self.users.write().await.push(record.clone());

        Ok(record)
    }

    async fn update_user(&self, id: UserId, patch: UserPatch) -> AppResult<UserRecord> {
        let mut users = self.users.write().await;

        let Some(user) = users.iter_mut().find(|user| user.id == id) else {
            return Err(AppError::NotFound(format!("user '{id}' does not exist")));
        };

        if let Some(name) = patch.name {
            user.name = name;
        }
        if let Some(email) = patch.email {
            user.email = email;
        }
        if let Some(role) = patch.role {
            user.role = role;
        }
        if let Some(status) = patch.status {
            user.status = status;
        }

        Ok(user.clone())
    }

    async fn delete_user(&self, id: UserId) -> AppResult<()> {
        // Unknown ids are a no-op; deletion is idempotent.
        self.users.write().await.retain(|user| user.id != id);

        Ok(())
    }

    async fn list_users(&self) -> AppResult<Vec<UserRecord>> {
        Ok(self.users.read().await.clone())
    }

    async fn count_users(&self) -> AppResult<usize> {
        Ok(self.users.read().await.len())
    }

    async fn add_role(&self, input: NewRole) -> AppResult<RoleRecord> {
        let record = RoleRecord {
            id: RoleId::new(),
            name: input.name,
            permissions: input.permissions,
        };

        self.roles.write().await.push(record.clone());

        Ok(record)
    }

    async fn update_role(&self, id: RoleId, patch: RolePatch) -> AppResult<RoleRecord> {
        let mut roles = self.roles.write().await;

        let Some(role) = roles.iter_mut().find(|role| role.id == id) else {
            return Err(AppError::NotFound(format!("role '{id}' does not exist")));
        };

        if let Some(name) = patch.name {
            role.name = name;
        }
        if let Some(permissions) = patch.permissions {
            role.permissions = permissions;
        }

        Ok(role.clone())
    }

    async fn delete_role(&self, id: RoleId) -> AppResult<()> {
        // Users naming the role keep the dangling name; no cascade.
        self.roles.write().await.retain(|role| role.id != id);

        Ok(())
    }

    async fn list_roles(&self) -> AppResult<Vec<RoleRecord>> {
        Ok(self.roles.read().await.clone())
    }

    async fn add_permission(&self, value: String) -> AppResult<()> {
        let mut permissions = self.permissions.write().await;

        if !permissions.contains(&value) {
            permissions.push(value);
        }

        Ok(())
    }

    async fn delete_permission(&self, value: &str) -> AppResult<()> {
        // Role grants referencing the value are left untouched.
        self.permissions
            .write()
            .await
            .retain(|permission| permission != value);

        Ok(())
    }

    async fn list_permissions(&self) -> AppResult<Vec<String>> {
        Ok(self.permissions.read().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use staffdir_application::{DirectoryRepository, NewRole, NewUser, RolePatch, UserPatch};
    use staffdir_core::AppError;
    use staffdir_domain::{RoleId, UserId, UserStatus};

    use super::InMemoryDirectoryRepository;

    fn new_user(name: &str, role: &str, status: UserStatus) -> NewUser {
        NewUser {
            name: name.to_owned(),
            email: format!("{}@example.com", name.to_lowercase()),
            role: role.to_owned(),
            status,
        }
    }

    #[tokio::test]
    async fn add_user_assigns_unique_ids_under_rapid_succession() {
        let repository = InMemoryDirectoryRepository::new();

        let mut ids = HashSet::new();
        for index in 0..64 {
            let added = repository
                .add_user(new_user(
                    format!("User {index}").as_str(),
                    "User",
                    UserStatus::Active,
                ))
                .await;
            assert!(added.is_ok());
            ids.insert(added.unwrap_or_else(|_| unreachable!()).id);
        }

        assert_eq!(ids.len(), 64);
    }

    #[tokio::test]
    async fn list_users_preserves_insertion_order() {
        let repository = InMemoryDirectoryRepository::new();

        for name in ["Zoe", "Ada", "Mia"] {
            assert!(
                repository
                    .add_user(new_user(name, "User", UserStatus::Active))
                    .await
                    .is_ok()
            );
        }

        let listed = repository.list_users().await;
        assert!(listed.is_ok());

        let names: Vec<String> = listed
            .unwrap_or_default()
            .into_iter()
            .map(|user| user.name)
            .collect();
        assert_eq!(names, vec!["Zoe", "Ada", "Mia"]);
    }

    #[tokio::test]
    async fn delete_user_twice_is_a_noop_both_times() {
        let repository = InMemoryDirectoryRepository::new();

        let added = repository
            .add_user(new_user("Jane", "User", UserStatus::Active))
            .await;
        assert!(added.is_ok());
        let id = added.unwrap_or_else(|_| unreachable!()).id;

        assert!(repository.delete_user(id).await.is_ok());
        assert!(repository.delete_user(id).await.is_ok());
        assert_eq!(repository.count_users().await.unwrap_or(usize::MAX), 0);
    }

    #[tokio::test]
    async fn update_user_merges_only_patched_fields() {
        let repository = InMemoryDirectoryRepository::new();

        let added = repository
            .add_user(new_user("Alice Johnson", "User", UserStatus::Inactive))
            .await;
        assert!(added.is_ok());
        let before = added.unwrap_or_else(|_| unreachable!());

        let updated = repository
            .update_user(
                before.id,
                UserPatch {
                    status: Some(UserStatus::Active),
                    ..UserPatch::default()
                },
            )
            .await;
        assert!(updated.is_ok());

        let after = updated.unwrap_or_else(|_| unreachable!());
        assert_eq!(after.id, before.id);
        assert_eq!(after.name, before.name);
        assert_eq!(after.email, before.email);
        assert_eq!(after.role, before.role);
        assert_eq!(after.status, UserStatus::Active);
    }

    #[tokio::test]
    async fn update_unknown_user_is_not_found() {
        let repository = InMemoryDirectoryRepository::new();

        let result = repository
            .update_user(
                UserId::new(),
                UserPatch {
                    name: Some("Nobody".to_owned()),
                    ..UserPatch::default()
                },
            )
            .await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn delete_role_leaves_user_role_names_dangling() {
        let repository = InMemoryDirectoryRepository::new();

        let role = repository
            .add_role(NewRole {
                name: "Manager".to_owned(),
                permissions: vec!["read".to_owned(), "write".to_owned()],
            })
            .await;
        assert!(role.is_ok());
        let role_id = role.unwrap_or_else(|_| unreachable!()).id;

        assert!(
            repository
                .add_user(new_user("Bob", "Manager", UserStatus::Active))
                .await
                .is_ok()
        );

        assert!(repository.delete_role(role_id).await.is_ok());

        let users = repository.list_users().await.unwrap_or_default();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].role, "Manager");
        assert!(repository.list_roles().await.unwrap_or_default().is_empty());
    }

    #[tokio::test]
    async fn renaming_a_role_does_not_rewrite_users() {
        let repository = InMemoryDirectoryRepository::new();

        let role = repository
            .add_role(NewRole {
                name: "User".to_owned(),
                permissions: vec!["read".to_owned()],
            })
            .await;
        assert!(role.is_ok());
        let role_id = role.unwrap_or_else(|_| unreachable!()).id;

        assert!(
            repository
                .add_user(new_user("Hannah", "User", UserStatus::Active))
                .await
                .is_ok()
        );

        let renamed = repository
            .update_role(
                role_id,
                RolePatch {
                    name: Some("Member".to_owned()),
                    permissions: None,
                },
            )
            .await;
        assert!(renamed.is_ok());

        let users = repository.list_users().await.unwrap_or_default();
        assert_eq!(users[0].role, "User");
    }

    #[tokio::test]
    async fn update_unknown_role_is_not_found() {
        let repository = InMemoryDirectoryRepository::new();

        let result = repository
            .update_role(
                RoleId::new(),
                RolePatch {
                    name: Some("Ghost".to_owned()),
                    permissions: None,
                },
            )
            .await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn duplicate_permission_insert_keeps_a_single_entry() {
        let repository = InMemoryDirectoryRepository::new();

        assert!(repository.add_permission("read".to_owned()).await.is_ok());
        assert!(repository.add_permission("read".to_owned()).await.is_ok());

        assert_eq!(
            repository.list_permissions().await.unwrap_or_default(),
            vec!["read".to_owned()]
        );
    }

    #[tokio::test]
    async fn delete_permission_does_not_touch_role_grants() {
        let repository = InMemoryDirectoryRepository::new();

        assert!(repository.add_permission("read".to_owned()).await.is_ok());
        let role = repository
            .add_role(NewRole {
                name: "QA".to_owned(),
                permissions: vec!["read".to_owned()],
            })
            .await;
        assert!(role.is_ok());

        assert!(repository.delete_permission("read").await.is_ok());

        assert!(
            repository
                .list_permissions()
                .await
                .unwrap_or_default()
                .is_empty()
        );
        let roles = repository.list_roles().await.unwrap_or_default();
        assert_eq!(roles[0].permissions, vec!["read".to_owned()]);
    }
}
