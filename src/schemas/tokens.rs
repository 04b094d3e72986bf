//! API token models.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

use super::{Extra, Meta};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiKey {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub name: String,
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
/// Freshly issued token; `token` is returned exactly once.
pub struct CreatedApiKey {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub name: String,
    pub expires_at: Option<DateTime<Utc>>,
    pub token: String,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiKeyResponse {
    pub response_id: Option<Uuid>,
    pub api_key: ApiKey,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreatedApiKeyResponse {
    pub response_id: Option<Uuid>,
    pub api_key: CreatedApiKey,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiKeysResponse {
    pub response_id: Option<Uuid>,
    pub meta: Option<Meta>,
    pub api_keys: Option<Vec<ApiKey>>,
    #[serde(flatten)]
    pub extra: Extra,
}
