//! API key operations.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::Client;
use crate::domain::CreateApiKey;
use crate::domain::request::check_name;
use crate::error::Error;
use crate::schemas::tokens::{ApiKeyResponse, ApiKeysResponse, CreatedApiKeyResponse};
use crate::transport;

/// API key operations, reached via [`Client::api_keys`].
pub struct ApiKeys<'a> {
    client: &'a Client,
}

impl Client {
    pub fn api_keys(&self) -> ApiKeys<'_> {
        ApiKeys { client: self }
    }
}

impl ApiKeys<'_> {
    pub async fn list(&self) -> Result<ApiKeysResponse, Error> {
        self.client.fetch(transport::tokens::list()).await
    }

    /// Issues a new key. The secret token is only present in this response.
    pub async fn create(&self, request: &CreateApiKey) -> Result<CreatedApiKeyResponse, Error> {
        self.client.fetch(transport::tokens::create(request)).await
    }

    pub async fn rename(&self, token_id: Uuid, name: &str) -> Result<ApiKeyResponse, Error> {
        check_name(name)?;
        self.client
            .fetch(transport::tokens::rename(token_id, name))
            .await
    }

    /// Replaces the secret while keeping the key's identity.
    pub async fn reissue(
        &self,
        token_id: Uuid,
        expires_at: Option<DateTime<Utc>>,
    ) -> Result<CreatedApiKeyResponse, Error> {
        self.client
            .fetch(transport::tokens::reissue(token_id, expires_at))
            .await
    }

    pub async fn delete(&self, token_id: Uuid) -> Result<(), Error> {
        self.client.execute(transport::tokens::delete(token_id)).await
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use crate::client::testing::{FakeTransport, make_client};
    use crate::error::Error;

    #[tokio::test]
    async fn blank_rename_never_reaches_the_wire() {
        let transport = FakeTransport::new(200, String::new());
        let client = make_client(transport.clone());

        let err = client
            .api_keys()
            .rename(Uuid::nil(), "  ")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert!(transport.requests().is_empty());
    }
}
