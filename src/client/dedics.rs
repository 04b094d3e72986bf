//! Dedicated server operations.

use super::Client;
use crate::domain::CreateDedicatedServer;
use crate::domain::request::check_text;
use crate::error::Error;
use crate::schemas::dedics::{
    DedicatedServerPresetsResponse, DedicatedServerResponse, DedicatedServersResponse,
};
use crate::transport;

/// Dedicated server operations, reached via [`Client::dedicated_servers`].
pub struct DedicatedServers<'a> {
    client: &'a Client,
}

impl Client {
    pub fn dedicated_servers(&self) -> DedicatedServers<'_> {
        DedicatedServers { client: self }
    }
}

impl DedicatedServers<'_> {
    pub async fn list(
        &self,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<DedicatedServersResponse, Error> {
        self.client.fetch(transport::dedics::list(limit, offset)).await
    }

    pub async fn get(&self, dedicated_id: u64) -> Result<DedicatedServerResponse, Error> {
        self.client.fetch(transport::dedics::get(dedicated_id)).await
    }

    pub async fn create(
        &self,
        request: &CreateDedicatedServer,
    ) -> Result<DedicatedServerResponse, Error> {
        self.client.fetch(transport::dedics::create(request)).await
    }

    /// Only the comment is mutable after provisioning.
    pub async fn update(
        &self,
        dedicated_id: u64,
        comment: &str,
    ) -> Result<DedicatedServerResponse, Error> {
        check_text("comment", comment)?;
        self.client
            .fetch(transport::dedics::update(dedicated_id, comment))
            .await
    }

    pub async fn delete(&self, dedicated_id: u64) -> Result<(), Error> {
        self.client
            .execute(transport::dedics::delete(dedicated_id))
            .await
    }

    pub async fn presets(
        &self,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<DedicatedServerPresetsResponse, Error> {
        self.client
            .fetch(transport::dedics::presets(limit, offset))
            .await
    }
}
