//! Disk image operations.

use uuid::Uuid;

use super::Client;
use crate::domain::CreateImage;
use crate::domain::request::check_text;
use crate::error::Error;
use crate::schemas::images::{ImageResponse, ImagesResponse};
use crate::transport;

/// Disk image operations, reached via [`Client::images`].
pub struct Images<'a> {
    client: &'a Client,
}

impl Client {
    pub fn images(&self) -> Images<'_> {
        Images { client: self }
    }
}

impl Images<'_> {
    pub async fn list(
        &self,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<ImagesResponse, Error> {
        self.client
            .fetch(transport::images::list(limit, offset))
            .await
    }

    pub async fn get(&self, image_id: Uuid) -> Result<ImageResponse, Error> {
        self.client.fetch(transport::images::get(image_id)).await
    }

    pub async fn create(&self, request: &CreateImage) -> Result<ImageResponse, Error> {
        self.client.fetch(transport::images::create(request)).await
    }

    pub async fn update(&self, image_id: Uuid, description: &str) -> Result<ImageResponse, Error> {
        check_text("description", description)?;
        self.client
            .fetch(transport::images::update(image_id, description))
            .await
    }

    pub async fn delete(&self, image_id: Uuid) -> Result<(), Error> {
        self.client.execute(transport::images::delete(image_id)).await
    }
}
