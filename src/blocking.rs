//! Blocking variant of the client.
//!
//! Mirrors the async surface one-to-one over `reqwest::blocking` and is only
//! compiled with the `blocking` cargo feature. Request construction, error
//! classification, and response models are shared with the async client, so
//! the two cannot drift apart on the wire.

use std::net::IpAddr;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;
use uuid::Uuid;

use crate::client::{DEFAULT_BASE_URL, DEFAULT_USER_AGENT, parse_base_url, validate_token};
use crate::domain::request::{check_disk_size, check_name, check_text};
use crate::domain::{
    AllowedCountries, AllowedIps, BalancerRuleSpec, CreateApiKey, CreateBalancer, CreateBucket,
    CreateCluster, CreateDatabase, CreateDedicatedServer, CreateImage, CreateMailbox,
    CreateProject, CreateServer, CreateSshKey, DnsRecordSpec, ProjectResourceKind, ServerAction,
    UpdateBalancer, UpdateBucket, UpdateDatabase, UpdateMailbox, UpdateProject, UpdateServer,
    UpdateSshKey,
};
use crate::error::{self, Error, TransportError};
use crate::schemas::account::{
    AccessResponse, AddCountriesResponse, AddIpsResponse, CountriesResponse, FinancesResponse,
    RemoveCountriesResponse, RemoveIpsResponse, StatusResponse,
};
use crate::schemas::balancers::{
    BalancerIpsResponse, BalancerResponse, BalancerRuleResponse, BalancerRulesResponse,
    BalancersResponse,
};
use crate::schemas::databases::{
    BackupResponse, BackupsResponse, DatabaseResponse, DatabasesResponse,
};
use crate::schemas::dedics::{
    DedicatedServerPresetsResponse, DedicatedServerResponse, DedicatedServersResponse,
};
use crate::schemas::domains::{
    DnsRecordResponse, DnsRecordsResponse, DomainAvailabilityResponse, DomainResponse,
    DomainsResponse, TopLevelDomainResponse, TopLevelDomainsResponse,
};
use crate::schemas::images::{ImageResponse, ImagesResponse};
use crate::schemas::kubernetes::{
    ClusterDeletion, ClusterResourcesResponse, ClusterResponse, ClustersResponse,
    K8sPresetsResponse, K8sVersionsResponse, NetworkDriversResponse, NodeGroupResponse,
    NodeGroupsResponse, NodesResponse,
};
use crate::schemas::mail::{
    MailDomainInfoResponse, MailboxResponse, MailboxesResponse, QuotaResponse,
};
use crate::schemas::projects::{
    ProjectResourceResponse, ProjectResourcesResponse, ProjectResponse, ProjectsResponse,
};
use crate::schemas::s3::{BucketResponse, BucketsResponse, StoragePresetsResponse};
use crate::schemas::servers::{
    ServerDiskResponse, ServerDisksResponse, ServerResponse, ServersResponse,
};
use crate::schemas::ssh_keys::{SshKeyResponse, SshKeysResponse};
use crate::schemas::tokens::{ApiKeyResponse, ApiKeysResponse, CreatedApiKeyResponse};
use crate::transport::{Method, RequestDescriptor};

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn send(
        &self,
        method: Method,
        url: Url,
        headers: Vec<(&'static str, String)>,
        body: Option<Value>,
    ) -> Result<HttpResponse, TransportError>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport for ReqwestTransport {
    fn send(
        &self,
        method: Method,
        url: Url,
        headers: Vec<(&'static str, String)>,
        body: Option<Value>,
    ) -> Result<HttpResponse, TransportError> {
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
        let response = request.send()?;
        let status = response.status().as_u16();
        let body = response.text()?;
        Ok(HttpResponse { status, body })
    }
}

#[derive(Debug, Clone)]
/// Builder for the blocking [`Client`].
pub struct ClientBuilder {
    token: String,
    base_url: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl ClientBuilder {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: None,
            user_agent: None,
        }
    }

    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn build(self) -> Result<Client, Error> {
        let base_url = parse_base_url(&self.base_url)?;
        let token = validate_token(self.token)?;

        let mut builder = reqwest::blocking::Client::builder();
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

#[derive(Clone)]
/// Synchronous API client for callers without an async runtime.
pub struct Client {
    token: String,
    base_url: Url,
    http: Arc<dyn HttpTransport>,
}

impl Client {
    pub fn new(token: impl Into<String>) -> Result<Self, Error> {
        ClientBuilder::new(token).build()
    }

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

    fn dispatch(
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

    fn fetch<T: DeserializeOwned>(&self, descriptor: RequestDescriptor) -> Result<T, Error> {
        let (descriptor, response) = self.dispatch(descriptor)?;
        decode(descriptor, response)
    }

    fn execute(&self, descriptor: RequestDescriptor) -> Result<(), Error> {
        self.dispatch(descriptor).map(|_| ())
    }

    pub fn servers(&self) -> Servers<'_> {
        Servers { client: self }
    }

    pub fn balancers(&self) -> Balancers<'_> {
        Balancers { client: self }
    }

    pub fn databases(&self) -> Databases<'_> {
        Databases { client: self }
    }

    pub fn kubernetes(&self) -> Kubernetes<'_> {
        Kubernetes { client: self }
    }

    pub fn ssh_keys(&self) -> SshKeys<'_> {
        SshKeys { client: self }
    }

    pub fn api_keys(&self) -> ApiKeys<'_> {
        ApiKeys { client: self }
    }

    pub fn images(&self) -> Images<'_> {
        Images { client: self }
    }

    pub fn projects(&self) -> Projects<'_> {
        Projects { client: self }
    }

    pub fn domains(&self) -> Domains<'_> {
        Domains { client: self }
    }

    pub fn dedicated_servers(&self) -> DedicatedServers<'_> {
        DedicatedServers { client: self }
    }

    pub fn account(&self) -> Account<'_> {
        Account { client: self }
    }

    pub fn buckets(&self) -> Buckets<'_> {
        Buckets { client: self }
    }

    pub fn mail(&self) -> Mail<'_> {
        Mail { client: self }
    }
}

fn decode<T: DeserializeOwned>(
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

pub struct Servers<'a> {
    client: &'a Client,
}

impl Servers<'_> {
    pub fn list(&self, limit: Option<u32>, offset: Option<u32>) -> Result<ServersResponse, Error> {
        self.client.fetch(crate::transport::servers::list(limit, offset))
    }

    pub fn get(&self, server_id: u64) -> Result<ServerResponse, Error> {
        self.client.fetch(crate::transport::servers::get(server_id))
    }

    pub fn create(&self, request: &CreateServer) -> Result<ServerResponse, Error> {
        self.client.fetch(crate::transport::servers::create(request))
    }

    pub fn update(&self, server_id: u64, request: &UpdateServer) -> Result<ServerResponse, Error> {
        self.client
            .fetch(crate::transport::servers::update(server_id, request))
    }

    pub fn delete(&self, server_id: u64) -> Result<(), Error> {
        self.client.execute(crate::transport::servers::delete(server_id))
    }

    pub fn action(&self, server_id: u64, action: ServerAction) -> Result<(), Error> {
        self.client
            .execute(crate::transport::servers::action(server_id, action))
    }

    pub fn disks(&self, server_id: u64) -> Result<ServerDisksResponse, Error> {
        self.client.fetch(crate::transport::servers::disks(server_id))
    }

    pub fn disk(&self, server_id: u64, disk_id: u64) -> Result<ServerDiskResponse, Error> {
        self.client
            .fetch(crate::transport::servers::disk(server_id, disk_id))
    }

    pub fn create_disk(&self, server_id: u64, size: u32) -> Result<ServerDiskResponse, Error> {
        check_disk_size(size)?;
        self.client
            .fetch(crate::transport::servers::create_disk(server_id, size))
    }

    pub fn resize_disk(
        &self,
        server_id: u64,
        disk_id: u64,
        size: u32,
    ) -> Result<ServerDiskResponse, Error> {
        check_disk_size(size)?;
        self.client
            .fetch(crate::transport::servers::resize_disk(server_id, disk_id, size))
    }

    pub fn delete_disk(&self, server_id: u64, disk_id: u64) -> Result<(), Error> {
        self.client
            .execute(crate::transport::servers::delete_disk(server_id, disk_id))
    }
}

pub struct Balancers<'a> {
    client: &'a Client,
}

impl Balancers<'_> {
    pub fn list(&self, limit: Option<u32>, offset: Option<u32>) -> Result<BalancersResponse, Error> {
        self.client
            .fetch(crate::transport::balancers::list(limit, offset))
    }

    pub fn get(&self, balancer_id: u64) -> Result<BalancerResponse, Error> {
        self.client.fetch(crate::transport::balancers::get(balancer_id))
    }

    pub fn create(&self, request: &CreateBalancer) -> Result<BalancerResponse, Error> {
        self.client.fetch(crate::transport::balancers::create(request))
    }

    pub fn update(
        &self,
        balancer_id: u64,
        request: &UpdateBalancer,
    ) -> Result<BalancerResponse, Error> {
        self.client
            .fetch(crate::transport::balancers::update(balancer_id, request))
    }

    pub fn delete(&self, balancer_id: u64) -> Result<(), Error> {
        self.client
            .execute(crate::transport::balancers::delete(balancer_id))
    }

    pub fn ips(&self, balancer_id: u64) -> Result<BalancerIpsResponse, Error> {
        self.client.fetch(crate::transport::balancers::ips(balancer_id))
    }

    pub fn rules(&self, balancer_id: u64) -> Result<BalancerRulesResponse, Error> {
        self.client
            .fetch(crate::transport::balancers::rules(balancer_id))
    }

    pub fn add_rule(
        &self,
        balancer_id: u64,
        rule: &BalancerRuleSpec,
    ) -> Result<BalancerRuleResponse, Error> {
        self.client
            .fetch(crate::transport::balancers::add_rule(balancer_id, rule))
    }

    pub fn update_rule(
        &self,
        balancer_id: u64,
        rule_id: u64,
        rule: &BalancerRuleSpec,
    ) -> Result<BalancerRuleResponse, Error> {
        self.client.fetch(crate::transport::balancers::update_rule(
            balancer_id,
            rule_id,
            rule,
        ))
    }

    pub fn delete_rule(&self, balancer_id: u64, rule_id: u64) -> Result<(), Error> {
        self.client
            .execute(crate::transport::balancers::delete_rule(balancer_id, rule_id))
    }
}

pub struct Databases<'a> {
    client: &'a Client,
}

impl Databases<'_> {
    pub fn list(&self, limit: Option<u32>, offset: Option<u32>) -> Result<DatabasesResponse, Error> {
        self.client
            .fetch(crate::transport::databases::list(limit, offset))
    }

    pub fn get(&self, db_id: u64) -> Result<DatabaseResponse, Error> {
        self.client.fetch(crate::transport::databases::get(db_id))
    }

    pub fn create(&self, request: &CreateDatabase) -> Result<DatabaseResponse, Error> {
        self.client.fetch(crate::transport::databases::create(request))
    }

    pub fn update(&self, db_id: u64, request: &UpdateDatabase) -> Result<DatabaseResponse, Error> {
        self.client
            .fetch(crate::transport::databases::update(db_id, request))
    }

    pub fn delete(&self, db_id: u64) -> Result<(), Error> {
        self.client.execute(crate::transport::databases::delete(db_id))
    }

    pub fn backups(
        &self,
        db_id: u64,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<BackupsResponse, Error> {
        self.client
            .fetch(crate::transport::databases::backups(db_id, limit, offset))
    }

    pub fn create_backup(&self, db_id: u64) -> Result<BackupResponse, Error> {
        self.client
            .fetch(crate::transport::databases::create_backup(db_id))
    }

    pub fn get_backup(&self, db_id: u64, backup_id: u64) -> Result<BackupResponse, Error> {
        self.client
            .fetch(crate::transport::databases::get_backup(db_id, backup_id))
    }

    pub fn delete_backup(&self, db_id: u64, backup_id: u64) -> Result<(), Error> {
        self.client
            .execute(crate::transport::databases::delete_backup(db_id, backup_id))
    }

    pub fn restore_backup(&self, db_id: u64, backup_id: u64) -> Result<(), Error> {
        self.client
            .execute(crate::transport::databases::restore_backup(db_id, backup_id))
    }
}

pub struct Kubernetes<'a> {
    client: &'a Client,
}

impl Kubernetes<'_> {
    pub fn list(&self, limit: Option<u32>, offset: Option<u32>) -> Result<ClustersResponse, Error> {
        self.client
            .fetch(crate::transport::kubernetes::list(limit, offset))
    }

    pub fn get(&self, cluster_id: u64) -> Result<ClusterResponse, Error> {
        self.client.fetch(crate::transport::kubernetes::get(cluster_id))
    }

    pub fn create(&self, request: &CreateCluster) -> Result<ClusterResponse, Error> {
        self.client.fetch(crate::transport::kubernetes::create(request))
    }

    pub fn update(&self, cluster_id: u64, description: &str) -> Result<ClusterResponse, Error> {
        check_text("description", description)?;
        self.client
            .fetch(crate::transport::kubernetes::update(cluster_id, description))
    }

    pub fn resources(&self, cluster_id: u64) -> Result<ClusterResourcesResponse, Error> {
        self.client
            .fetch(crate::transport::kubernetes::resources(cluster_id))
    }

    /// Fetches the cluster's kubeconfig as the raw YAML document.
    pub fn kubeconfig(&self, cluster_id: u64) -> Result<String, Error> {
        let (_, response) = self
            .client
            .dispatch(crate::transport::kubernetes::kubeconfig(cluster_id))?;
        Ok(response.body)
    }

    /// See the async counterpart for the two-phase delete protocol.
    pub fn delete(&self, cluster_id: u64) -> Result<ClusterDeletion, Error> {
        let (descriptor, response) = self
            .client
            .dispatch(crate::transport::kubernetes::delete(cluster_id))?;
        if response.status == 204 {
            Ok(ClusterDeletion::Deleted)
        } else {
            decode(descriptor, response).map(ClusterDeletion::ConfirmationRequired)
        }
    }

    pub fn confirm_delete(&self, cluster_id: u64, hash: &str, code: u32) -> Result<(), Error> {
        self.client.execute(crate::transport::kubernetes::confirm_delete(
            cluster_id, hash, code,
        ))
    }

    pub fn node_groups(&self, cluster_id: u64) -> Result<NodeGroupsResponse, Error> {
        self.client
            .fetch(crate::transport::kubernetes::node_groups(cluster_id))
    }

    pub fn node_group(&self, cluster_id: u64, group_id: u64) -> Result<NodeGroupResponse, Error> {
        self.client
            .fetch(crate::transport::kubernetes::node_group(cluster_id, group_id))
    }

    pub fn create_node_group(
        &self,
        cluster_id: u64,
        name: &str,
        preset_id: u64,
        node_count: u32,
    ) -> Result<NodeGroupResponse, Error> {
        check_name(name)?;
        self.client
            .fetch(crate::transport::kubernetes::create_node_group(
                cluster_id, name, preset_id, node_count,
            ))
    }

    pub fn delete_node_group(&self, cluster_id: u64, group_id: u64) -> Result<(), Error> {
        self.client
            .execute(crate::transport::kubernetes::delete_node_group(
                cluster_id, group_id,
            ))
    }

    pub fn nodes(&self, cluster_id: u64) -> Result<NodesResponse, Error> {
        self.client.fetch(crate::transport::kubernetes::nodes(cluster_id))
    }

    pub fn delete_node(&self, cluster_id: u64, node_id: u64) -> Result<(), Error> {
        self.client
            .execute(crate::transport::kubernetes::delete_node(cluster_id, node_id))
    }

    pub fn versions(&self) -> Result<K8sVersionsResponse, Error> {
        self.client.fetch(crate::transport::kubernetes::versions())
    }

    pub fn network_drivers(&self) -> Result<NetworkDriversResponse, Error> {
        self.client
            .fetch(crate::transport::kubernetes::network_drivers())
    }

    pub fn presets(&self) -> Result<K8sPresetsResponse, Error> {
        self.client.fetch(crate::transport::kubernetes::presets())
    }
}

pub struct SshKeys<'a> {
    client: &'a Client,
}

impl SshKeys<'_> {
    pub fn list(&self) -> Result<SshKeysResponse, Error> {
        self.client.fetch(crate::transport::ssh_keys::list())
    }

    pub fn get(&self, ssh_key_id: u64) -> Result<SshKeyResponse, Error> {
        self.client.fetch(crate::transport::ssh_keys::get(ssh_key_id))
    }

    pub fn create(&self, request: &CreateSshKey) -> Result<SshKeyResponse, Error> {
        self.client.fetch(crate::transport::ssh_keys::create(request))
    }

    pub fn update(&self, ssh_key_id: u64, request: &UpdateSshKey) -> Result<SshKeyResponse, Error> {
        self.client
            .fetch(crate::transport::ssh_keys::update(ssh_key_id, request))
    }

    pub fn delete(&self, ssh_key_id: u64) -> Result<(), Error> {
        self.client.execute(crate::transport::ssh_keys::delete(ssh_key_id))
    }

    pub fn add_to_server(&self, server_id: u64, ssh_key_ids: &[u64]) -> Result<(), Error> {
        self.client
            .execute(crate::transport::ssh_keys::add_to_server(server_id, ssh_key_ids))
    }

    pub fn remove_from_server(&self, server_id: u64, ssh_key_id: u64) -> Result<(), Error> {
        self.client.execute(crate::transport::ssh_keys::remove_from_server(
            server_id, ssh_key_id,
        ))
    }
}

pub struct ApiKeys<'a> {
    client: &'a Client,
}

impl ApiKeys<'_> {
    pub fn list(&self) -> Result<ApiKeysResponse, Error> {
        self.client.fetch(crate::transport::tokens::list())
    }

    pub fn create(&self, request: &CreateApiKey) -> Result<CreatedApiKeyResponse, Error> {
        self.client.fetch(crate::transport::tokens::create(request))
    }

    pub fn rename(&self, token_id: Uuid, name: &str) -> Result<ApiKeyResponse, Error> {
        check_name(name)?;
        self.client.fetch(crate::transport::tokens::rename(token_id, name))
    }

    pub fn reissue(
        &self,
        token_id: Uuid,
        expires_at: Option<DateTime<Utc>>,
    ) -> Result<CreatedApiKeyResponse, Error> {
        self.client
            .fetch(crate::transport::tokens::reissue(token_id, expires_at))
    }

    pub fn delete(&self, token_id: Uuid) -> Result<(), Error> {
        self.client.execute(crate::transport::tokens::delete(token_id))
    }
}

pub struct Images<'a> {
    client: &'a Client,
}

impl Images<'_> {
    pub fn list(&self, limit: Option<u32>, offset: Option<u32>) -> Result<ImagesResponse, Error> {
        self.client.fetch(crate::transport::images::list(limit, offset))
    }

    pub fn get(&self, image_id: Uuid) -> Result<ImageResponse, Error> {
        self.client.fetch(crate::transport::images::get(image_id))
    }

    pub fn create(&self, request: &CreateImage) -> Result<ImageResponse, Error> {
        self.client.fetch(crate::transport::images::create(request))
    }

    pub fn update(&self, image_id: Uuid, description: &str) -> Result<ImageResponse, Error> {
        check_text("description", description)?;
        self.client
            .fetch(crate::transport::images::update(image_id, description))
    }

    pub fn delete(&self, image_id: Uuid) -> Result<(), Error> {
        self.client.execute(crate::transport::images::delete(image_id))
    }
}

pub struct Projects<'a> {
    client: &'a Client,
}

impl Projects<'_> {
    pub fn list(&self) -> Result<ProjectsResponse, Error> {
        self.client.fetch(crate::transport::projects::list())
    }

    pub fn get(&self, project_id: u64) -> Result<ProjectResponse, Error> {
        self.client.fetch(crate::transport::projects::get(project_id))
    }

    pub fn create(&self, request: &CreateProject) -> Result<ProjectResponse, Error> {
        self.client.fetch(crate::transport::projects::create(request))
    }

    pub fn update(&self, project_id: u64, request: &UpdateProject) -> Result<ProjectResponse, Error> {
        self.client
            .fetch(crate::transport::projects::update(project_id, request))
    }

    pub fn delete(&self, project_id: u64) -> Result<(), Error> {
        self.client.execute(crate::transport::projects::delete(project_id))
    }

    pub fn resources(&self, project_id: u64) -> Result<ProjectResourcesResponse, Error> {
        self.client
            .fetch(crate::transport::projects::resources(project_id))
    }

    /// Moves an existing resource into the project.
    pub fn add_resource(
        &self,
        project_id: u64,
        kind: ProjectResourceKind,
        resource_id: u64,
    ) -> Result<ProjectResourceResponse, Error> {
        self.client
            .fetch(crate::transport::projects::add_resource(project_id, kind, resource_id))
    }

    /// Transfers a resource to another project.
    pub fn move_resource(
        &self,
        project_id: u64,
        to_project: u64,
        resource_id: u64,
        resource_type: &str,
    ) -> Result<ProjectResourceResponse, Error> {
        self.client.fetch(crate::transport::projects::move_resource(
            project_id,
            to_project,
            resource_id,
            resource_type,
        ))
    }
}

pub struct Domains<'a> {
    client: &'a Client,
}

impl Domains<'_> {
    pub fn list(&self, limit: Option<u32>, offset: Option<u32>) -> Result<DomainsResponse, Error> {
        self.client.fetch(crate::transport::domains::list(limit, offset))
    }

    pub fn get(&self, fqdn: &str) -> Result<DomainResponse, Error> {
        self.client.fetch(crate::transport::domains::get(fqdn))
    }

    pub fn update(
        &self,
        fqdn: &str,
        linked_ip: Option<IpAddr>,
        is_autoprolong_enabled: Option<bool>,
    ) -> Result<DomainResponse, Error> {
        self.client.fetch(crate::transport::domains::update(
            fqdn,
            linked_ip,
            is_autoprolong_enabled,
        ))
    }

    pub fn delete(&self, fqdn: &str) -> Result<(), Error> {
        self.client.execute(crate::transport::domains::delete(fqdn))
    }

    pub fn check_availability(&self, fqdn: &str) -> Result<DomainAvailabilityResponse, Error> {
        self.client
            .fetch(crate::transport::domains::check_availability(fqdn))
    }

    pub fn dns_records(
        &self,
        fqdn: &str,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<DnsRecordsResponse, Error> {
        self.client
            .fetch(crate::transport::domains::dns_records(fqdn, limit, offset))
    }

    pub fn add_dns_record(
        &self,
        fqdn: &str,
        record: &DnsRecordSpec,
    ) -> Result<DnsRecordResponse, Error> {
        self.client
            .fetch(crate::transport::domains::add_dns_record(fqdn, record))
    }

    pub fn update_dns_record(
        &self,
        fqdn: &str,
        record_id: u64,
        record: &DnsRecordSpec,
    ) -> Result<DnsRecordResponse, Error> {
        self.client.fetch(crate::transport::domains::update_dns_record(
            fqdn, record_id, record,
        ))
    }

    pub fn delete_dns_record(&self, fqdn: &str, record_id: u64) -> Result<(), Error> {
        self.client
            .execute(crate::transport::domains::delete_dns_record(fqdn, record_id))
    }

    pub fn tlds(
        &self,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<TopLevelDomainsResponse, Error> {
        self.client.fetch(crate::transport::domains::tlds(limit, offset))
    }

    pub fn tld(&self, tld_id: u64) -> Result<TopLevelDomainResponse, Error> {
        self.client.fetch(crate::transport::domains::tld(tld_id))
    }
}

pub struct DedicatedServers<'a> {
    client: &'a Client,
}

impl DedicatedServers<'_> {
    pub fn list(
        &self,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<DedicatedServersResponse, Error> {
        self.client.fetch(crate::transport::dedics::list(limit, offset))
    }

    pub fn get(&self, dedicated_id: u64) -> Result<DedicatedServerResponse, Error> {
        self.client.fetch(crate::transport::dedics::get(dedicated_id))
    }

    pub fn create(&self, request: &CreateDedicatedServer) -> Result<DedicatedServerResponse, Error> {
        self.client.fetch(crate::transport::dedics::create(request))
    }

    pub fn update(&self, dedicated_id: u64, comment: &str) -> Result<DedicatedServerResponse, Error> {
        check_text("comment", comment)?;
        self.client
            .fetch(crate::transport::dedics::update(dedicated_id, comment))
    }

    pub fn delete(&self, dedicated_id: u64) -> Result<(), Error> {
        self.client.execute(crate::transport::dedics::delete(dedicated_id))
    }

    pub fn presets(
        &self,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<DedicatedServerPresetsResponse, Error> {
        self.client.fetch(crate::transport::dedics::presets(limit, offset))
    }
}

pub struct Account<'a> {
    client: &'a Client,
}

impl Account<'_> {
    pub fn status(&self) -> Result<StatusResponse, Error> {
        self.client.fetch(crate::transport::account::status())
    }

    pub fn finances(&self) -> Result<FinancesResponse, Error> {
        self.client.fetch(crate::transport::account::finances())
    }

    pub fn access_restrictions(&self) -> Result<AccessResponse, Error> {
        self.client.fetch(crate::transport::account::access_restrictions())
    }

    pub fn countries(&self) -> Result<CountriesResponse, Error> {
        self.client.fetch(crate::transport::account::countries())
    }

    pub fn toggle_country_restrictions(&self, enabled: bool) -> Result<(), Error> {
        self.client
            .execute(crate::transport::account::toggle_country_restrictions(enabled))
    }

    pub fn add_allowed_countries(
        &self,
        countries: &AllowedCountries,
    ) -> Result<AddCountriesResponse, Error> {
        self.client
            .fetch(crate::transport::account::add_allowed_countries(countries))
    }

    pub fn remove_allowed_countries(
        &self,
        countries: &AllowedCountries,
    ) -> Result<RemoveCountriesResponse, Error> {
        self.client
            .fetch(crate::transport::account::remove_allowed_countries(countries))
    }

    pub fn toggle_ip_restrictions(&self, enabled: bool) -> Result<(), Error> {
        self.client
            .execute(crate::transport::account::toggle_ip_restrictions(enabled))
    }

    pub fn add_allowed_ips(&self, ips: &AllowedIps) -> Result<AddIpsResponse, Error> {
        self.client.fetch(crate::transport::account::add_allowed_ips(ips))
    }

    pub fn remove_allowed_ips(&self, ips: &AllowedIps) -> Result<RemoveIpsResponse, Error> {
        self.client
            .fetch(crate::transport::account::remove_allowed_ips(ips))
    }
}

pub struct Buckets<'a> {
    client: &'a Client,
}

impl Buckets<'_> {
    pub fn list(&self, limit: Option<u32>, offset: Option<u32>) -> Result<BucketsResponse, Error> {
        self.client.fetch(crate::transport::s3::list(limit, offset))
    }

    pub fn create(&self, request: &CreateBucket) -> Result<BucketResponse, Error> {
        self.client.fetch(crate::transport::s3::create(request))
    }

    pub fn update(&self, bucket_id: u64, request: &UpdateBucket) -> Result<BucketResponse, Error> {
        self.client.fetch(crate::transport::s3::update(bucket_id, request))
    }

    pub fn delete(&self, bucket_id: u64) -> Result<(), Error> {
        self.client.execute(crate::transport::s3::delete(bucket_id))
    }

    pub fn presets(
        &self,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<StoragePresetsResponse, Error> {
        self.client.fetch(crate::transport::s3::presets(limit, offset))
    }
}

pub struct Mail<'a> {
    client: &'a Client,
}

impl Mail<'_> {
    pub fn list(&self, limit: Option<u32>, offset: Option<u32>) -> Result<MailboxesResponse, Error> {
        self.client.fetch(crate::transport::mail::list(limit, offset))
    }

    pub fn domain_mailboxes(
        &self,
        fqdn: &str,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<MailboxesResponse, Error> {
        self.client
            .fetch(crate::transport::mail::domain_mailboxes(fqdn, limit, offset))
    }

    pub fn get(&self, fqdn: &str, mailbox: &str) -> Result<MailboxResponse, Error> {
        self.client.fetch(crate::transport::mail::get(fqdn, mailbox))
    }

    pub fn create(&self, fqdn: &str, request: &CreateMailbox) -> Result<MailboxResponse, Error> {
        self.client.fetch(crate::transport::mail::create(fqdn, request))
    }

    pub fn update(
        &self,
        fqdn: &str,
        mailbox: &str,
        request: &UpdateMailbox,
    ) -> Result<MailboxResponse, Error> {
        self.client
            .fetch(crate::transport::mail::update(fqdn, mailbox, request))
    }

    pub fn delete(&self, fqdn: &str, mailbox: &str) -> Result<(), Error> {
        self.client.execute(crate::transport::mail::delete(fqdn, mailbox))
    }

    pub fn domain_info(&self, fqdn: &str) -> Result<MailDomainInfoResponse, Error> {
        self.client.fetch(crate::transport::mail::domain_info(fqdn))
    }

    pub fn update_domain_info(
        &self,
        fqdn: &str,
        email: Option<&str>,
    ) -> Result<MailDomainInfoResponse, Error> {
        self.client
            .fetch(crate::transport::mail::update_domain_info(fqdn, email))
    }

    pub fn quota(&self) -> Result<QuotaResponse, Error> {
        self.client.fetch(crate::transport::mail::quota())
    }

    pub fn set_quota(&self, total: u64) -> Result<QuotaResponse, Error> {
        self.client.fetch(crate::transport::mail::set_quota(total))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use serde_json::json;

    use super::*;
    use crate::domain::ServerHardware;

    #[derive(Debug, Clone)]
    struct FakeTransport {
        state: Arc<Mutex<FakeTransportState>>,
    }

    #[derive(Debug)]
    struct FakeTransportState {
        last_url: Option<Url>,
        last_body: Option<Value>,
        response_status: u16,
        response_body: String,
    }

    impl FakeTransport {
        fn new(status: u16, body: impl Into<String>) -> Self {
            Self {
                state: Arc::new(Mutex::new(FakeTransportState {
                    last_url: None,
                    last_body: None,
                    response_status: status,
                    response_body: body.into(),
                })),
            }
        }
    }

    impl HttpTransport for FakeTransport {
        fn send(
            &self,
            _method: Method,
            url: Url,
            _headers: Vec<(&'static str, String)>,
            body: Option<Value>,
        ) -> Result<HttpResponse, TransportError> {
            let mut state = self.state.lock().unwrap();
            state.last_url = Some(url);
            state.last_body = body;
            Ok(HttpResponse {
                status: state.response_status,
                body: state.response_body.clone(),
            })
        }
    }

    fn make_client(transport: FakeTransport) -> Client {
        Client {
            token: "test-token".to_owned(),
            base_url: "https://api.example.invalid/api/v1/".parse().unwrap(),
            http: Arc::new(transport),
        }
    }

    #[test]
    fn create_server_round_trip_without_a_runtime() {
        let transport = FakeTransport::new(
            201,
            json!({
                "response_id": null,
                "server": {
                    "id": 100,
                    "name": "srv1",
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
                },
            })
            .to_string(),
        );
        let client = make_client(transport.clone());

        let request = CreateServer::builder("srv1", 1, 500, ServerHardware::Preset(42))
            .build()
            .unwrap();
        let response = client.servers().create(&request).unwrap();
        assert_eq!(response.server.id, 100);

        let state = transport.state.lock().unwrap();
        assert_eq!(
            state.last_url.as_ref().unwrap().path(),
            "/api/v1/servers"
        );
        assert_eq!(state.last_body.as_ref().unwrap()["name"], json!("srv1"));
    }

    #[test]
    fn error_envelopes_classify_the_same_as_async() {
        let transport = FakeTransport::new(
            403,
            json!({
                "status_code": 403,
                "error_code": "forbidden",
                "message": "no access",
            })
            .to_string(),
        );
        let client = make_client(transport);

        let err = client.servers().get(5).unwrap_err();
        assert!(matches!(err, Error::Forbidden(_)));
    }
}
