//! Domain entities and the user query engine.

#![forbid(unsafe_code)]

mod query;
mod role;
mod user;

pub use query::{SortField, SortOrder, page_users, search_users};
pub use role::{RoleId, RoleRecord};
pub use user::{UserId, UserRecord, UserStatus};
