//! Managed database operations.

use super::Client;
use crate::domain::{CreateDatabase, UpdateDatabase};
use crate::error::Error;
use crate::schemas::databases::{
    BackupResponse, BackupsResponse, DatabaseResponse, DatabasesResponse,
};
use crate::transport;

/// Managed database operations, reached via [`Client::databases`].
pub struct Databases<'a> {
    client: &'a Client,
}

impl Client {
    pub fn databases(&self) -> Databases<'_> {
        Databases { client: self }
    }
}

impl Databases<'_> {
    pub async fn list(
        &self,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<DatabasesResponse, Error> {
        self.client
            .fetch(transport::databases::list(limit, offset))
            .await
    }

    pub async fn get(&self, db_id: u64) -> Result<DatabaseResponse, Error> {
        self.client.fetch(transport::databases::get(db_id)).await
    }

    pub async fn create(&self, request: &CreateDatabase) -> Result<DatabaseResponse, Error> {
        self.client
            .fetch(transport::databases::create(request))
            .await
    }

    pub async fn update(
        &self,
        db_id: u64,
        request: &UpdateDatabase,
    ) -> Result<DatabaseResponse, Error> {
        self.client
            .fetch(transport::databases::update(db_id, request))
            .await
    }

    pub async fn delete(&self, db_id: u64) -> Result<(), Error> {
        self.client
            .execute(transport::databases::delete(db_id))
            .await
    }

    pub async fn backups(
        &self,
        db_id: u64,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<BackupsResponse, Error> {
        self.client
            .fetch(transport::databases::backups(db_id, limit, offset))
            .await
    }

    pub async fn create_backup(&self, db_id: u64) -> Result<BackupResponse, Error> {
        self.client
            .fetch(transport::databases::create_backup(db_id))
            .await
    }

    pub async fn get_backup(&self, db_id: u64, backup_id: u64) -> Result<BackupResponse, Error> {
        self.client
            .fetch(transport::databases::get_backup(db_id, backup_id))
            .await
    }

    pub async fn delete_backup(&self, db_id: u64, backup_id: u64) -> Result<(), Error> {
        self.client
            .execute(transport::databases::delete_backup(db_id, backup_id))
            .await
    }

    /// Restores the database to the state captured by the backup.
    pub async fn restore_backup(&self, db_id: u64, backup_id: u64) -> Result<(), Error> {
        self.client
            .execute(transport::databases::restore_backup(db_id, backup_id))
            .await
    }
}
