//! Disk image models.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

use super::{Extra, Meta};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageStatus {
    New,
    Created,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Image {
    pub id: Uuid,
    pub status: ImageStatus,
    pub created_at: DateTime<Utc>,
    pub description: String,
    pub disk_id: u64,
    pub size: u64,
    pub location: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ImageResponse {
    pub response_id: Option<Uuid>,
    pub image: Image,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ImagesResponse {
    pub response_id: Option<Uuid>,
    pub meta: Option<Meta>,
    pub images: Vec<Image>,
    #[serde(flatten)]
    pub extra: Extra,
}
