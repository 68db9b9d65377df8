use serde::Deserialize;

/// Incoming payload for permission creation.
#[derive(Debug, Deserialize)]
pub struct AddPermissionRequest {
    pub permission: String,
}
