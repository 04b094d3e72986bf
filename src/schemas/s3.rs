//! Object storage models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Extra, Meta};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BucketStatus {
    NoPaid,
    Created,
    Transfer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BucketType {
    Private,
    Public,
}

impl BucketType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Private => "private",
            Self::Public => "public",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
/// Disk usage, in kilobytes.
pub struct BucketDiskStats {
    pub used: u64,
    pub size: u64,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Bucket {
    pub id: u64,
    pub name: String,
    pub dist_stats: BucketDiskStats,
    #[serde(rename = "type")]
    pub bucket_type: BucketType,
    pub preset_id: Option<u64>,
    pub status: BucketStatus,
    pub object_amount: u64,
    pub location: String,
    pub hostname: String,
    pub access_key: String,
    pub secret_key: String,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BucketResponse {
    pub response_id: Option<Uuid>,
    pub bucket: Bucket,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BucketsResponse {
    pub response_id: Option<Uuid>,
    pub meta: Option<Meta>,
    pub buckets: Vec<Bucket>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StoragePreset {
    pub id: u64,
    pub description: String,
    pub disk: u64,
    pub price: Decimal,
    pub location: String,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StoragePresetsResponse {
    pub response_id: Option<Uuid>,
    pub meta: Option<Meta>,
    pub storages_presets: Vec<StoragePreset>,
    #[serde(flatten)]
    pub extra: Extra,
}
