//! SSH key models.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

use super::{Extra, Meta};

#[derive(Debug, Clone, PartialEq, Deserialize)]
/// Server a key is installed on, as referenced from `used_by`.
pub struct KeyUser {
    pub id: u64,
    pub name: String,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SshKey {
    pub id: u64,
    pub name: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub used_by: Vec<KeyUser>,
    pub is_default: bool,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SshKeyResponse {
    pub response_id: Option<Uuid>,
    pub ssh_key: SshKey,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SshKeysResponse {
    pub response_id: Option<Uuid>,
    pub meta: Option<Meta>,
    pub ssh_keys: Vec<SshKey>,
    #[serde(flatten)]
    pub extra: Extra,
}
