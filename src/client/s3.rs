//! Object storage operations.

use super::Client;
use crate::domain::{CreateBucket, UpdateBucket};
use crate::error::Error;
use crate::schemas::s3::{BucketResponse, BucketsResponse, StoragePresetsResponse};
use crate::transport;

/// Object storage operations, reached via [`Client::buckets`].
pub struct Buckets<'a> {
    client: &'a Client,
}

impl Client {
    pub fn buckets(&self) -> Buckets<'_> {
        Buckets { client: self }
    }
}

impl Buckets<'_> {
    pub async fn list(
        &self,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<BucketsResponse, Error> {
        self.client.fetch(transport::s3::list(limit, offset)).await
    }

    pub async fn create(&self, request: &CreateBucket) -> Result<BucketResponse, Error> {
        self.client.fetch(transport::s3::create(request)).await
    }

    pub async fn update(
        &self,
        bucket_id: u64,
        request: &UpdateBucket,
    ) -> Result<BucketResponse, Error> {
        self.client
            .fetch(transport::s3::update(bucket_id, request))
            .await
    }

    pub async fn delete(&self, bucket_id: u64) -> Result<(), Error> {
        self.client.execute(transport::s3::delete(bucket_id)).await
    }

    pub async fn presets(
        &self,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<StoragePresetsResponse, Error> {
        self.client.fetch(transport::s3::presets(limit, offset)).await
    }
}
