//! Read views over a snapshot of the user collection.
//!
//! Every function here is a full scan over the snapshot it is handed. There
//! is no incremental index; results are recomputed on every call.

use std::cmp::Ordering;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use staffdir_core::AppError;

use crate::user::UserRecord;

/// User field used as the sort key when paging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    /// Sort by display name.
    Name,
    /// Sort by email address.
    Email,
    /// Sort by role name.
    Role,
    /// Sort by the literal status strings `"Active"` / `"Inactive"`.
    Status,
}

impl SortField {
    /// Returns the transport string for this field.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Role => "role",
            Self::Status => "status",
        }
    }
}

impl FromStr for SortField {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "name" => Ok(Self::Name),
            "email" => Ok(Self::Email),
            "role" => Ok(Self::Role),
            "status" => Ok(Self::Status),
            _ => Err(AppError::Validation(format!(
                "unknown sort field '{value}'"
            ))),
        }
    }
}

/// Direction applied to the sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Ascending order.
    Asc,
    /// Descending order.
    Desc,
}

impl SortOrder {
    /// Returns the transport string for this order.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl FromStr for SortOrder {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            _ => Err(AppError::Validation(format!(
                "unknown sort order '{value}'"
            ))),
        }
    }
}

/// Returns users whose name, email, or role contains `query`.
///
/// Matching is a case-insensitive substring test; an empty query matches
/// every record. Result order is the snapshot's insertion order.
#[must_use]
pub fn search_users(users: &[UserRecord], query: &str) -> Vec<UserRecord> {
    let needle = query.to_lowercase();

    users
        .iter()
        .filter(|user| {
            user.name.to_lowercase().contains(&needle)
                || user.email.to_lowercase().contains(&needle)
                || user.role.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

/// Returns one page of the snapshot sorted by `sort_field`.
///
/// The whole snapshot is sorted with a stable sort, then the half-open
/// window `[(page - 1) * page_size, (page - 1) * page_size + page_size)` is
/// taken. Records comparing equal on the sort key keep their relative
/// insertion order for both directions, so windows partition the sorted
/// sequence without gap or overlap. Pages past the end are empty, never an
/// error. Callers are responsible for passing `page >= 1`.
#[must_use]
pub fn page_users(
    users: &[UserRecord],
    page: usize,
    page_size: usize,
    sort_field: SortField,
    sort_order: SortOrder,
) -> Vec<UserRecord> {
    let mut sorted: Vec<UserRecord> = users.to_vec();
    sorted.sort_by(|left, right| compare(left, right, sort_field, sort_order));

    sorted
        .into_iter()
        .skip(page.saturating_sub(1).saturating_mul(page_size))
        .take(page_size)
        .collect()
}

fn compare(
    left: &UserRecord,
    right: &UserRecord,
    sort_field: SortField,
    sort_order: SortOrder,
) -> Ordering {
    let ordering = sort_key(left, sort_field).cmp(sort_key(right, sort_field));

    match sort_order {
        SortOrder::Asc => ordering,
        // Reversing the comparison keeps equal keys at Ordering::Equal, so
        // the stable sort preserves insertion order among them.
        SortOrder::Desc => ordering.reverse(),
    }
}

fn sort_key(user: &UserRecord, sort_field: SortField) -> &str {
    match sort_field {
        SortField::Name => user.name.as_str(),
        SortField::Email => user.email.as_str(),
        SortField::Role => user.role.as_str(),
        SortField::Status => user.status.as_str(),
    }
}
