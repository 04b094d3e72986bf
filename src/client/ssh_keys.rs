//! SSH key operations.

use super::Client;
use crate::domain::{CreateSshKey, UpdateSshKey};
use crate::error::Error;
use crate::schemas::ssh_keys::{SshKeyResponse, SshKeysResponse};
use crate::transport;

/// SSH key operations, reached via [`Client::ssh_keys`].
pub struct SshKeys<'a> {
    client: &'a Client,
}

impl Client {
    pub fn ssh_keys(&self) -> SshKeys<'_> {
        SshKeys { client: self }
    }
}

impl SshKeys<'_> {
    pub async fn list(&self) -> Result<SshKeysResponse, Error> {
        self.client.fetch(transport::ssh_keys::list()).await
    }

    pub async fn get(&self, ssh_key_id: u64) -> Result<SshKeyResponse, Error> {
        self.client.fetch(transport::ssh_keys::get(ssh_key_id)).await
    }

    pub async fn create(&self, request: &CreateSshKey) -> Result<SshKeyResponse, Error> {
        self.client.fetch(transport::ssh_keys::create(request)).await
    }

    pub async fn update(
        &self,
        ssh_key_id: u64,
        request: &UpdateSshKey,
    ) -> Result<SshKeyResponse, Error> {
        self.client
            .fetch(transport::ssh_keys::update(ssh_key_id, request))
            .await
    }

    pub async fn delete(&self, ssh_key_id: u64) -> Result<(), Error> {
        self.client
            .execute(transport::ssh_keys::delete(ssh_key_id))
            .await
    }

    /// Installs existing keys onto a running server.
    pub async fn add_to_server(&self, server_id: u64, ssh_key_ids: &[u64]) -> Result<(), Error> {
        self.client
            .execute(transport::ssh_keys::add_to_server(server_id, ssh_key_ids))
            .await
    }

    pub async fn remove_from_server(&self, server_id: u64, ssh_key_id: u64) -> Result<(), Error> {
        self.client
            .execute(transport::ssh_keys::remove_from_server(server_id, ssh_key_id))
            .await
    }
}
