//! Client layer: dispatches request descriptors over an HTTP transport.
//!
//! Every API call funnels through [`Client::dispatch`]: one place that
//! attaches authentication, resolves the URL, logs the exchange, and turns
//! non-2xx responses into typed errors.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::domain::validation::{ValidationError, Violation};
use crate::error::{self, Error, TransportError};
use crate::transport::{Method, RequestDescriptor};

mod account;
mod balancers;
mod databases;
mod dedics;
mod domains;
mod images;
mod kubernetes;
mod mail;
mod projects;
mod s3;
mod servers;
mod ssh_keys;
mod tokens;

pub use account::Account;
pub use balancers::Balancers;
pub use databases::Databases;
pub use dedics::DedicatedServers;
pub use domains::Domains;
pub use images::Images;
pub use kubernetes::Kubernetes;
pub use mail::Mail;
pub use projects::Projects;
pub use s3::Buckets;
pub use servers::Servers;
pub use ssh_keys::SshKeys;
pub use tokens::ApiKeys;

pub(crate) const DEFAULT_BASE_URL: &str = "https://api.timeweb.cloud/api/v1/";
pub(crate) const DEFAULT_USER_AGENT: &str = concat!("twcloud/", env!("CARGO_PKG_VERSION"));

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
pub(crate) struct HttpResponse {
    pub(crate) status: u16,
    pub(crate) body: String,
}

pub(crate) trait HttpTransport: Send + Sync {
    fn send<'a>(
        &'a self,
        method: Method,
        url: Url,
        headers: Vec<(&'static str, String)>,
        body: Option<Value>,
    ) -> BoxFuture<'a, Result<HttpResponse, TransportError>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn send<'a>(
        &'a self,
        method: Method,
        url: Url,
        headers: Vec<(&'static str, String)>,
        body: Option<Value>,
    ) -> BoxFuture<'a, Result<HttpResponse, TransportError>> {
        Box::pin(async move {
            let method = match method {
                Method::Get => reqwest::Method::GET,
                Method::Post => reqwest::Method::POST,
                Method::Patch => reqwest::Method::PATCH,
                Method::Put => reqwest::Method::PUT,
                Method::Delete => reqwest::Method::DELETE,
            };
            let mut request = self.client.request(method, url);
            for (name, value) in headers {
                request = request.header(name, value);
            }
            if let Some(body) = &body {
                request = request.json(body);
            }
            let response = request.send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, Clone)]
/// Builder for [`Client`].
///
/// Use this when you need to customize the base URL, timeout, or user-agent.
pub struct ClientBuilder {
    token: String,
    base_url: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl ClientBuilder {
    /// Create a builder with the production API root and default settings.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: None,
            user_agent: None,
        }
    }

    /// Override the API root. A trailing slash is appended when missing so
    /// relative paths resolve under the root.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set an HTTP timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`Client`].
    pub fn build(self) -> Result<Client, Error> {
        let base_url = parse_base_url(&self.base_url)?;
        let token = validate_token(self.token)?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        builder = builder.user_agent(
            self.user_agent
                .unwrap_or_else(|| DEFAULT_USER_AGENT.to_owned()),
        );
        let client = builder
            .build()
            .map_err(|err| Error::Configuration(Box::new(err)))?;

        Ok(Client {
            token,
            base_url,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

pub(crate) fn parse_base_url(raw: &str) -> Result<Url, Error> {
    let normalized = if raw.ends_with('/') {
        raw.to_owned()
    } else {
        format!("{raw}/")
    };
    normalized
        .parse()
        .map_err(|err: url::ParseError| Error::Configuration(Box::new(err)))
}

pub(crate) fn validate_token(token: String) -> Result<String, Error> {
    if token.trim().is_empty() {
        return Err(Error::Validation(ValidationError::single(
            Violation::Empty { field: "token" },
        )));
    }
    Ok(token)
}

#[derive(Clone)]
/// Asynchronous API client.
///
/// Cheap to clone; clones share the underlying connection pool. Resource
/// groups are reached through accessors such as [`Client::servers`] and
/// [`Client::kubernetes`].
pub struct Client {
    token: String,
    base_url: Url,
    http: Arc<dyn HttpTransport>,
}

impl Client {
    /// Create a client for the production API.
    ///
    /// For more customization, use [`Client::builder`].
    pub fn new(token: impl Into<String>) -> Result<Self, Error> {
        ClientBuilder::new(token).build()
    }

    /// Start building a client with custom settings.
    pub fn builder(token: impl Into<String>) -> ClientBuilder {
        ClientBuilder::new(token)
    }

    fn headers(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Authorization", format!("Bearer {}", self.token)),
            ("Accept", "application/json".to_owned()),
        ]
    }

    fn url_for(&self, descriptor: &RequestDescriptor) -> Result<Url, Error> {
        let mut url = self
            .base_url
            .join(descriptor.path())
            .map_err(|err| Error::Transport {
                request: descriptor.clone(),
                source: Box::new(err),
            })?;
        if !descriptor.query_pairs().is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in descriptor.query_pairs() {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    /// Sends a descriptor and classifies non-2xx responses.
    ///
    /// The descriptor is handed back on success so callers that need the
    /// raw response can still build precise errors from it.
    pub(crate) async fn dispatch(
        &self,
        descriptor: RequestDescriptor,
    ) -> Result<(RequestDescriptor, HttpResponse), Error> {
        let url = self.url_for(&descriptor)?;
        tracing::debug!(
            method = %descriptor.method(),
            path = descriptor.path(),
            "sending API request"
        );
        let response = self
            .http
            .send(
                descriptor.method(),
                url,
                self.headers(),
                descriptor.body().cloned(),
            )
            .await
            .map_err(|source| Error::Transport {
                request: descriptor.clone(),
                source,
            })?;
        tracing::debug!(
            method = %descriptor.method(),
            path = descriptor.path(),
            status = response.status,
            "received API response"
        );
        if (200..=299).contains(&response.status) {
            Ok((descriptor, response))
        } else {
            Err(error::classify(descriptor, response.status, &response.body))
        }
    }

    /// Sends a descriptor and decodes the 2xx body into `T`.
    pub(crate) async fn fetch<T: DeserializeOwned>(
        &self,
        descriptor: RequestDescriptor,
    ) -> Result<T, Error> {
        let (descriptor, response) = self.dispatch(descriptor).await?;
        decode(descriptor, response)
    }

    /// Sends a descriptor and discards the response body.
    pub(crate) async fn execute(&self, descriptor: RequestDescriptor) -> Result<(), Error> {
        self.dispatch(descriptor).await.map(|_| ())
    }
}

pub(crate) fn decode<T: DeserializeOwned>(
    descriptor: RequestDescriptor,
    response: HttpResponse,
) -> Result<T, Error> {
    serde_json::from_str(&response.body).map_err(|err| Error::MalformedResponse {
        request: descriptor,
        status: response.status,
        reason: err.to_string(),
        body: response.body,
    })
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::{Arc, Mutex};

    use serde_json::Value;
    use url::Url;

    use super::{BoxFuture, Client, HttpResponse, HttpTransport, Method};
    use crate::error::TransportError;

    #[derive(Debug, Clone)]
    pub(crate) struct RecordedRequest {
        pub(crate) method: Method,
        pub(crate) url: Url,
        pub(crate) headers: Vec<(&'static str, String)>,
        pub(crate) body: Option<Value>,
    }

    #[derive(Debug, Clone)]
    pub(crate) struct FakeTransport {
        state: Arc<Mutex<FakeTransportState>>,
    }

    #[derive(Debug)]
    struct FakeTransportState {
        requests: Vec<RecordedRequest>,
        responses: Vec<(u16, String)>,
    }

    impl FakeTransport {
        pub(crate) fn new(status: u16, body: impl Into<String>) -> Self {
            Self {
                state: Arc::new(Mutex::new(FakeTransportState {
                    requests: Vec::new(),
                    responses: vec![(status, body.into())],
                })),
            }
        }

        /// Queues responses served in order; the last one repeats.
        pub(crate) fn with_responses(responses: Vec<(u16, String)>) -> Self {
            Self {
                state: Arc::new(Mutex::new(FakeTransportState {
                    requests: Vec::new(),
                    responses,
                })),
            }
        }

        pub(crate) fn requests(&self) -> Vec<RecordedRequest> {
            self.state.lock().unwrap().requests.clone()
        }

        pub(crate) fn last_request(&self) -> RecordedRequest {
            self.requests().last().cloned().expect("no request recorded")
        }
    }

    impl HttpTransport for FakeTransport {
        fn send<'a>(
            &'a self,
            method: Method,
            url: Url,
            headers: Vec<(&'static str, String)>,
            body: Option<Value>,
        ) -> BoxFuture<'a, Result<HttpResponse, TransportError>> {
            Box::pin(async move {
                let mut state = self.state.lock().unwrap();
                state.requests.push(RecordedRequest {
                    method,
                    url,
                    headers,
                    body,
                });
                let (status, body) = if state.responses.len() > 1 {
                    state.responses.remove(0)
                } else {
                    state.responses[0].clone()
                };
                Ok(HttpResponse { status, body })
            })
        }
    }

    pub(crate) fn make_client(transport: FakeTransport) -> Client {
        Client {
            token: "test-token".to_owned(),
            base_url: "https://api.example.invalid/api/v1/".parse().unwrap(),
            http: Arc::new(transport),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::testing::{FakeTransport, make_client};
    use super::*;
    use crate::domain::{CreateServer, ServerHardware};

    fn server_json(id: u64, name: &str) -> Value {
        json!({
            "id": id,
            "name": name,
            "comment": "",
            "os": {"id": 1, "name": "ubuntu", "version": "22.04"},
            "software": null,
            "preset_id": 42,
            "location": "ru-1",
            "configurator_id": null,
            "boot_mode": "std",
            "status": "on",
            "start_at": null,
            "is_ddos_guard": false,
            "cpu": 2,
            "cpu_frequency": "3.3",
            "ram": 4096,
            "avatar_id": null,
            "vnc_pass": "secret",
            "networks": [],
            "disks": [],
            "created_at": "2023-06-01T00:00:00Z",
        })
    }

    #[tokio::test]
    async fn create_server_round_trip() {
        let transport = FakeTransport::new(
            201,
            json!({
                "response_id": "8f2d7bfc-df69-4e19-87a5-f0f8a5a54a33",
                "server": server_json(100, "srv1"),
            })
            .to_string(),
        );
        let client = make_client(transport.clone());

        let request = CreateServer::builder("srv1", 1, 500, ServerHardware::Preset(42))
            .ddos_guard(false)
            .build()
            .unwrap();
        let response = client.servers().create(&request).await.unwrap();
        assert_eq!(response.server.id, 100);
        assert_eq!(response.server.name, "srv1");

        let sent = transport.last_request();
        assert_eq!(sent.method, Method::Post);
        assert_eq!(sent.url.path(), "/api/v1/servers");
        assert_eq!(
            sent.body.unwrap(),
            json!({
                "name": "srv1",
                "os_id": 1,
                "is_ddos_guard": false,
                "bandwidth": 500,
                "preset_id": 42,
            })
        );
    }

    #[tokio::test]
    async fn bearer_token_and_accept_header_are_attached() {
        let transport = FakeTransport::new(
            200,
            json!({"response_id": null, "meta": {"total": 0}, "servers": []}).to_string(),
        );
        let client = make_client(transport.clone());
        client.servers().list(None, None).await.unwrap();

        let sent = transport.last_request();
        assert!(
            sent.headers
                .contains(&("Authorization", "Bearer test-token".to_owned()))
        );
        assert!(
            sent.headers
                .contains(&("Accept", "application/json".to_owned()))
        );
    }

    #[tokio::test]
    async fn validation_failure_sends_nothing() {
        let transport = FakeTransport::new(200, "{}".to_owned());
        let client = make_client(transport.clone());

        let result = CreateServer::builder("srv1", 1, 150, ServerHardware::Preset(42)).build();
        assert!(result.is_err());
        // The descriptor was never built, so no request can have been sent.
        assert!(transport.requests().is_empty());

        drop(client);
    }

    #[tokio::test]
    async fn deleting_missing_server_maps_to_not_found() {
        let transport = FakeTransport::new(
            404,
            json!({
                "status_code": 404,
                "error_code": "not_found",
                "message": "server not found",
                "response_id": "8f2d7bfc-df69-4e19-87a5-f0f8a5a54a33",
            })
            .to_string(),
        );
        let client = make_client(transport);

        let err = client.servers().delete(999).await.unwrap_err();
        match err {
            Error::NotFound(failure) => {
                assert_eq!(failure.status_code, 404);
                assert_eq!(failure.error_code.as_deref(), Some("not_found"));
                assert_eq!(failure.messages, ["server not found"]);
                assert!(failure.response_id.is_some());
                assert_eq!(failure.request.path(), "servers/999");
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn query_pairs_are_appended_to_the_url() {
        let transport = FakeTransport::new(
            200,
            json!({"response_id": null, "meta": {"total": 0}, "servers": []}).to_string(),
        );
        let client = make_client(transport.clone());
        client.servers().list(Some(25), Some(50)).await.unwrap();

        let sent = transport.last_request();
        assert_eq!(sent.url.query(), Some("limit=25&offset=50"));
    }

    #[tokio::test]
    async fn list_exposes_the_collection_total() {
        let transport = FakeTransport::new(
            200,
            json!({
                "response_id": "8f2d7bfc-df69-4e19-87a5-f0f8a5a54a33",
                "meta": {"total": 57},
                "servers": [server_json(1, "a"), server_json(2, "b")],
            })
            .to_string(),
        );
        let client = make_client(transport);

        let page = client.servers().list(Some(10), None).await.unwrap();
        assert_eq!(page.meta.unwrap().total, Some(57));
        assert_eq!(page.servers.len(), 2);
    }

    #[tokio::test]
    async fn malformed_success_body_is_reported_with_the_request() {
        let transport = FakeTransport::new(200, "not json".to_owned());
        let client = make_client(transport);

        let err = client.servers().get(5).await.unwrap_err();
        match err {
            Error::MalformedResponse { request, status, .. } => {
                assert_eq!(request.path(), "servers/5");
                assert_eq!(status, 200);
            }
            other => panic!("expected MalformedResponse, got {other:?}"),
        }
    }

    #[test]
    fn builder_rejects_blank_tokens() {
        assert!(matches!(
            ClientBuilder::new("   ").build(),
            Err(Error::Validation(_))
        ));
    }

    #[test]
    fn builder_normalizes_the_base_url() {
        let client = ClientBuilder::new("token")
            .base_url("https://api.example.invalid/api/v1")
            .build()
            .unwrap();
        assert_eq!(
            client.base_url.as_str(),
            "https://api.example.invalid/api/v1/"
        );
    }
}
