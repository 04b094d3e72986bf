//! Cloud server operations.

use super::Client;
use crate::domain::request::check_disk_size;
use crate::domain::{CreateServer, ServerAction, UpdateServer};
use crate::error::Error;
use crate::schemas::servers::{
    ServerDiskResponse, ServerDisksResponse, ServerResponse, ServersResponse,
};
use crate::transport;

/// Cloud server operations, reached via [`Client::servers`].
pub struct Servers<'a> {
    client: &'a Client,
}

impl Client {
    pub fn servers(&self) -> Servers<'_> {
        Servers { client: self }
    }
}

impl Servers<'_> {
    pub async fn list(
        &self,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<ServersResponse, Error> {
        self.client
            .fetch(transport::servers::list(limit, offset))
            .await
    }

    pub async fn get(&self, server_id: u64) -> Result<ServerResponse, Error> {
        self.client.fetch(transport::servers::get(server_id)).await
    }

    pub async fn create(&self, request: &CreateServer) -> Result<ServerResponse, Error> {
        self.client.fetch(transport::servers::create(request)).await
    }

    pub async fn update(
        &self,
        server_id: u64,
        request: &UpdateServer,
    ) -> Result<ServerResponse, Error> {
        self.client
            .fetch(transport::servers::update(server_id, request))
            .await
    }

    pub async fn delete(&self, server_id: u64) -> Result<(), Error> {
        self.client
            .execute(transport::servers::delete(server_id))
            .await
    }

    /// Performs a power action (start, shutdown, reboot, clone, ...).
    pub async fn action(&self, server_id: u64, action: ServerAction) -> Result<(), Error> {
        self.client
            .execute(transport::servers::action(server_id, action))
            .await
    }

    pub async fn disks(&self, server_id: u64) -> Result<ServerDisksResponse, Error> {
        self.client.fetch(transport::servers::disks(server_id)).await
    }

    pub async fn disk(&self, server_id: u64, disk_id: u64) -> Result<ServerDiskResponse, Error> {
        self.client
            .fetch(transport::servers::disk(server_id, disk_id))
            .await
    }

    /// Attaches an additional disk. `size` is in megabytes and must be a
    /// multiple of 5120 within 5120..=512000.
    pub async fn create_disk(&self, server_id: u64, size: u32) -> Result<ServerDiskResponse, Error> {
        check_disk_size(size)?;
        self.client
            .fetch(transport::servers::create_disk(server_id, size))
            .await
    }

    /// Grows or shrinks a disk; the same size bounds as creation apply.
    pub async fn resize_disk(
        &self,
        server_id: u64,
        disk_id: u64,
        size: u32,
    ) -> Result<ServerDiskResponse, Error> {
        check_disk_size(size)?;
        self.client
            .fetch(transport::servers::resize_disk(server_id, disk_id, size))
            .await
    }

    pub async fn delete_disk(&self, server_id: u64, disk_id: u64) -> Result<(), Error> {
        self.client
            .execute(transport::servers::delete_disk(server_id, disk_id))
            .await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::client::testing::{FakeTransport, make_client};
    use crate::error::Error;
    use crate::transport::Method;

    #[tokio::test]
    async fn create_disk_sends_the_size_body() {
        let transport = FakeTransport::new(
            200,
            json!({
                "response_id": null,
                "server_disk": {
                    "id": 11,
                    "size": 10240,
                    "used": 0,
                    "type": "nvme",
                    "is_mounted": false,
                    "is_system": false,
                    "system_name": "vdb",
                    "status": "done",
                },
            })
            .to_string(),
        );
        let client = make_client(transport.clone());

        let created = client.servers().create_disk(5, 10240).await.unwrap();
        assert_eq!(created.server_disk.id, 11);

        let sent = transport.last_request();
        assert_eq!(sent.method, Method::Post);
        assert_eq!(sent.url.path(), "/api/v1/servers/5/disks");
        assert_eq!(sent.body, Some(json!({"size": 10240})));
    }

    #[tokio::test]
    async fn off_step_disk_size_never_reaches_the_wire() {
        let transport = FakeTransport::new(200, String::new());
        let client = make_client(transport.clone());

        let err = client.servers().resize_disk(5, 11, 6000).await.unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert!(transport.requests().is_empty());
    }
}
