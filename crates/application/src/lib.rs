//! Application services and ports.

#![forbid(unsafe_code)]

mod directory_ports;
mod directory_service;

pub use directory_ports::{DirectoryRepository, NewRole, NewUser, RolePatch, UserPatch};
pub use directory_service::{DirectoryService, UserPageQuery};
