use std::net::IpAddr;

use chrono::{DateTime, Utc};

use crate::domain::period::PaymentPeriod;
use crate::domain::validation::{Checks, ValidationError, Violation};
use crate::schemas::balancers::{BalancerAlgorithm, Protocol};
use crate::schemas::databases::{DbHashType, DbType};
use crate::schemas::s3::BucketType;

/// Maximum length accepted for resource names.
pub const NAME_MAX_LEN: usize = 255;
/// Maximum length accepted for free-form comments and descriptions.
pub const COMMENT_MAX_LEN: usize = 255;
/// Server bandwidth bounds, in Mbit/s; only multiples of
/// [`BANDWIDTH_STEP`] inside the range are accepted.
pub const BANDWIDTH_MIN: u32 = 100;
pub const BANDWIDTH_MAX: u32 = 1000;
pub const BANDWIDTH_STEP: u32 = 100;
/// Additional server disk size bounds, in megabytes; only multiples of
/// [`DISK_SIZE_STEP`] inside the range are accepted.
pub const DISK_SIZE_MIN: u32 = 5120;
pub const DISK_SIZE_MAX: u32 = 512_000;
pub const DISK_SIZE_STEP: u32 = 5120;

/// Shared name check for operations that take a bare name instead of a
/// request struct (key rename, node group creation).
pub(crate) fn check_name(name: &str) -> Result<(), ValidationError> {
    let mut checks = Checks::new();
    checks.non_empty("name", name);
    checks.max_len("name", name, NAME_MAX_LEN);
    checks.finish()
}

/// Shared length check for bare comment/description parameters.
pub(crate) fn check_text(field: &'static str, value: &str) -> Result<(), ValidationError> {
    let mut checks = Checks::new();
    checks.max_len(field, value, COMMENT_MAX_LEN);
    checks.finish()
}

pub(crate) fn check_disk_size(size: u32) -> Result<(), ValidationError> {
    let mut checks = Checks::new();
    checks.stepped("size", size, DISK_SIZE_MIN, DISK_SIZE_MAX, DISK_SIZE_STEP);
    checks.finish()
}

// ---------------------------------------------------------------------------
// Cloud servers
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Custom hardware configuration for a cloud server.
///
/// All four values are required together; absence of any of them is not
/// representable.
pub struct Configurator {
    pub configurator_id: u64,
    pub disk: u64,
    pub cpu: u64,
    pub ram: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Hardware selection for server creation: a preset tariff or a custom
/// configurator, never both and never neither.
pub enum ServerHardware {
    Preset(u64),
    Configurator(Configurator),
}

#[derive(Debug, Clone, PartialEq)]
/// Validated payload for `POST /servers`.
pub struct CreateServer {
    pub(crate) name: String,
    pub(crate) os_id: u64,
    pub(crate) is_ddos_guard: bool,
    pub(crate) bandwidth: u32,
    pub(crate) hardware: ServerHardware,
    pub(crate) software_id: Option<u64>,
    pub(crate) avatar_id: Option<String>,
    pub(crate) comment: Option<String>,
    pub(crate) ssh_key_ids: Vec<u64>,
    pub(crate) is_local_network: Option<bool>,
}

impl CreateServer {
    pub fn builder(
        name: impl Into<String>,
        os_id: u64,
        bandwidth: u32,
        hardware: ServerHardware,
    ) -> CreateServerBuilder {
        CreateServerBuilder {
            name: name.into(),
            os_id,
            bandwidth,
            hardware,
            is_ddos_guard: false,
            software_id: None,
            avatar_id: None,
            comment: None,
            ssh_key_ids: Vec::new(),
            is_local_network: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateServerBuilder {
    name: String,
    os_id: u64,
    is_ddos_guard: bool,
    bandwidth: u32,
    hardware: ServerHardware,
    software_id: Option<u64>,
    avatar_id: Option<String>,
    comment: Option<String>,
    ssh_key_ids: Vec<u64>,
    is_local_network: Option<bool>,
}

impl CreateServerBuilder {
    pub fn ddos_guard(mut self, enabled: bool) -> Self {
        self.is_ddos_guard = enabled;
        self
    }

    pub fn software_id(mut self, software_id: u64) -> Self {
        self.software_id = Some(software_id);
        self
    }

    pub fn avatar_id(mut self, avatar_id: impl Into<String>) -> Self {
        self.avatar_id = Some(avatar_id.into());
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn ssh_key_ids(mut self, ids: Vec<u64>) -> Self {
        self.ssh_key_ids = ids;
        self
    }

    pub fn local_network(mut self, enabled: bool) -> Self {
        self.is_local_network = Some(enabled);
        self
    }

    /// Validates every constraint and reports all violations at once.
    pub fn build(self) -> Result<CreateServer, ValidationError> {
        let mut checks = Checks::new();
        checks.non_empty("name", &self.name);
        checks.max_len("name", &self.name, NAME_MAX_LEN);
        checks.opt_max_len("comment", self.comment.as_deref(), COMMENT_MAX_LEN);
        checks.stepped(
            "bandwidth",
            self.bandwidth,
            BANDWIDTH_MIN,
            BANDWIDTH_MAX,
            BANDWIDTH_STEP,
        );
        checks.finish()?;

        Ok(CreateServer {
            name: self.name,
            os_id: self.os_id,
            is_ddos_guard: self.is_ddos_guard,
            bandwidth: self.bandwidth,
            hardware: self.hardware,
            software_id: self.software_id,
            avatar_id: self.avatar_id,
            comment: self.comment,
            ssh_key_ids: self.ssh_key_ids,
            is_local_network: self.is_local_network,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
/// Validated payload for `PATCH /servers/{id}`; only set fields are sent.
pub struct UpdateServer {
    pub(crate) name: Option<String>,
    pub(crate) os_id: Option<u64>,
    pub(crate) bandwidth: Option<u32>,
    pub(crate) preset_id: Option<u64>,
    pub(crate) configurator: Option<Configurator>,
    pub(crate) software_id: Option<u64>,
    pub(crate) avatar_id: Option<String>,
    pub(crate) comment: Option<String>,
}

impl UpdateServer {
    pub fn builder() -> UpdateServerBuilder {
        UpdateServerBuilder::default()
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateServerBuilder {
    name: Option<String>,
    os_id: Option<u64>,
    bandwidth: Option<u32>,
    preset_id: Option<u64>,
    configurator: Option<Configurator>,
    software_id: Option<u64>,
    avatar_id: Option<String>,
    comment: Option<String>,
}

impl UpdateServerBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn os_id(mut self, os_id: u64) -> Self {
        self.os_id = Some(os_id);
        self
    }

    pub fn bandwidth(mut self, bandwidth: u32) -> Self {
        self.bandwidth = Some(bandwidth);
        self
    }

    pub fn preset_id(mut self, preset_id: u64) -> Self {
        self.preset_id = Some(preset_id);
        self
    }

    pub fn configurator(mut self, configurator: Configurator) -> Self {
        self.configurator = Some(configurator);
        self
    }

    pub fn software_id(mut self, software_id: u64) -> Self {
        self.software_id = Some(software_id);
        self
    }

    pub fn avatar_id(mut self, avatar_id: impl Into<String>) -> Self {
        self.avatar_id = Some(avatar_id.into());
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn build(self) -> Result<UpdateServer, ValidationError> {
        let mut checks = Checks::new();
        checks.opt_max_len("name", self.name.as_deref(), NAME_MAX_LEN);
        checks.opt_max_len("comment", self.comment.as_deref(), COMMENT_MAX_LEN);
        checks.opt_stepped(
            "bandwidth",
            self.bandwidth,
            BANDWIDTH_MIN,
            BANDWIDTH_MAX,
            BANDWIDTH_STEP,
        );
        if self.preset_id.is_some() && self.configurator.is_some() {
            checks.push(Violation::MutuallyExclusive {
                first: "preset_id",
                second: "configurator",
            });
        }
        checks.finish()?;

        Ok(UpdateServer {
            name: self.name,
            os_id: self.os_id,
            bandwidth: self.bandwidth,
            preset_id: self.preset_id,
            configurator: self.configurator,
            software_id: self.software_id,
            avatar_id: self.avatar_id,
            comment: self.comment,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Power-management actions for `POST /servers/{id}/action`.
pub enum ServerAction {
    Start,
    Shutdown,
    HardShutdown,
    Reboot,
    HardReboot,
    Clone,
}

impl ServerAction {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Shutdown => "shutdown",
            Self::HardShutdown => "hard_shutdown",
            Self::Reboot => "reboot",
            Self::HardReboot => "hard_reboot",
            Self::Clone => "clone",
        }
    }
}

// ---------------------------------------------------------------------------
// Balancers
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
/// Validated payload for `POST /balancers`.
pub struct CreateBalancer {
    pub(crate) name: String,
    pub(crate) algo: BalancerAlgorithm,
    pub(crate) proto: Protocol,
    pub(crate) preset_id: u64,
    pub(crate) port: u16,
    pub(crate) path: String,
    pub(crate) inter: u32,
    pub(crate) timeout: u32,
    pub(crate) fall: u32,
    pub(crate) rise: u32,
    pub(crate) is_sticky: bool,
    pub(crate) is_use_proxy: bool,
    pub(crate) is_ssl: bool,
    pub(crate) is_keepalive: bool,
}

impl CreateBalancer {
    pub fn builder(
        name: impl Into<String>,
        algo: BalancerAlgorithm,
        proto: Protocol,
        preset_id: u64,
    ) -> CreateBalancerBuilder {
        CreateBalancerBuilder {
            name: name.into(),
            algo,
            proto,
            preset_id,
            port: 80,
            path: "/".to_owned(),
            inter: 10,
            timeout: 5,
            fall: 3,
            rise: 2,
            is_sticky: false,
            is_use_proxy: false,
            is_ssl: false,
            is_keepalive: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateBalancerBuilder {
    name: String,
    algo: BalancerAlgorithm,
    proto: Protocol,
    preset_id: u64,
    port: u16,
    path: String,
    inter: u32,
    timeout: u32,
    fall: u32,
    rise: u32,
    is_sticky: bool,
    is_use_proxy: bool,
    is_ssl: bool,
    is_keepalive: bool,
}

impl CreateBalancerBuilder {
    pub fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn health_check(mut self, inter: u32, timeout: u32, fall: u32, rise: u32) -> Self {
        self.inter = inter;
        self.timeout = timeout;
        self.fall = fall;
        self.rise = rise;
        self
    }

    pub fn sticky(mut self, enabled: bool) -> Self {
        self.is_sticky = enabled;
        self
    }

    pub fn use_proxy(mut self, enabled: bool) -> Self {
        self.is_use_proxy = enabled;
        self
    }

    pub fn ssl(mut self, enabled: bool) -> Self {
        self.is_ssl = enabled;
        self
    }

    pub fn keepalive(mut self, enabled: bool) -> Self {
        self.is_keepalive = enabled;
        self
    }

    pub fn build(self) -> Result<CreateBalancer, ValidationError> {
        let mut checks = Checks::new();
        checks.non_empty("name", &self.name);
        checks.max_len("name", &self.name, NAME_MAX_LEN);
        checks.non_empty("path", &self.path);
        checks.finish()?;

        Ok(CreateBalancer {
            name: self.name,
            algo: self.algo,
            proto: self.proto,
            preset_id: self.preset_id,
            port: self.port,
            path: self.path,
            inter: self.inter,
            timeout: self.timeout,
            fall: self.fall,
            rise: self.rise,
            is_sticky: self.is_sticky,
            is_use_proxy: self.is_use_proxy,
            is_ssl: self.is_ssl,
            is_keepalive: self.is_keepalive,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
/// Payload for `PATCH /balancers/{id}`; only set fields are sent.
pub struct UpdateBalancer {
    pub(crate) name: Option<String>,
    pub(crate) algo: Option<BalancerAlgorithm>,
    pub(crate) proto: Option<Protocol>,
    pub(crate) preset_id: Option<u64>,
    pub(crate) port: Option<u16>,
    pub(crate) path: Option<String>,
    pub(crate) inter: Option<u32>,
    pub(crate) timeout: Option<u32>,
    pub(crate) fall: Option<u32>,
    pub(crate) rise: Option<u32>,
    pub(crate) is_sticky: Option<bool>,
    pub(crate) is_use_proxy: Option<bool>,
    pub(crate) is_ssl: Option<bool>,
    pub(crate) is_keepalive: Option<bool>,
}

impl UpdateBalancer {
    pub fn builder() -> UpdateBalancerBuilder {
        UpdateBalancerBuilder(Self::default())
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateBalancerBuilder(UpdateBalancer);

impl UpdateBalancerBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.0.name = Some(name.into());
        self
    }

    pub fn algo(mut self, algo: BalancerAlgorithm) -> Self {
        self.0.algo = Some(algo);
        self
    }

    pub fn proto(mut self, proto: Protocol) -> Self {
        self.0.proto = Some(proto);
        self
    }

    pub fn preset_id(mut self, preset_id: u64) -> Self {
        self.0.preset_id = Some(preset_id);
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.0.port = Some(port);
        self
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.0.path = Some(path.into());
        self
    }

    pub fn inter(mut self, inter: u32) -> Self {
        self.0.inter = Some(inter);
        self
    }

    pub fn timeout(mut self, timeout: u32) -> Self {
        self.0.timeout = Some(timeout);
        self
    }

    pub fn fall(mut self, fall: u32) -> Self {
        self.0.fall = Some(fall);
        self
    }

    pub fn rise(mut self, rise: u32) -> Self {
        self.0.rise = Some(rise);
        self
    }

    pub fn sticky(mut self, enabled: bool) -> Self {
        self.0.is_sticky = Some(enabled);
        self
    }

    pub fn use_proxy(mut self, enabled: bool) -> Self {
        self.0.is_use_proxy = Some(enabled);
        self
    }

    pub fn ssl(mut self, enabled: bool) -> Self {
        self.0.is_ssl = Some(enabled);
        self
    }

    pub fn keepalive(mut self, enabled: bool) -> Self {
        self.0.is_keepalive = Some(enabled);
        self
    }

    pub fn build(self) -> Result<UpdateBalancer, ValidationError> {
        let mut checks = Checks::new();
        checks.opt_max_len("name", self.0.name.as_deref(), NAME_MAX_LEN);
        checks.finish()?;
        Ok(self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Forwarding rule payload for the balancer rule endpoints.
pub struct BalancerRuleSpec {
    pub balancer_proto: Protocol,
    pub balancer_port: u16,
    pub server_proto: Protocol,
    pub server_port: u16,
}

// ---------------------------------------------------------------------------
// Managed databases
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Engine configuration overrides; unset parameters are not sent.
pub struct DbConfig {
    pub auto_increment_increment: Option<String>,
    pub auto_increment_offset: Option<String>,
    pub innodb_read_io_threads: Option<String>,
    pub innodb_write_io_threads: Option<String>,
    pub join_buffer_size: Option<String>,
    pub max_allowed_packet: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
/// Validated payload for `POST /dbs`.
pub struct CreateDatabase {
    pub(crate) name: String,
    pub(crate) password: String,
    pub(crate) db_type: DbType,
    pub(crate) preset_id: u64,
    pub(crate) login: Option<String>,
    pub(crate) hash_type: Option<DbHashType>,
    pub(crate) config_parameters: Option<DbConfig>,
}

impl CreateDatabase {
    pub fn builder(
        name: impl Into<String>,
        password: impl Into<String>,
        db_type: DbType,
        preset_id: u64,
    ) -> CreateDatabaseBuilder {
        CreateDatabaseBuilder {
            name: name.into(),
            password: password.into(),
            db_type,
            preset_id,
            login: None,
            hash_type: None,
            config_parameters: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateDatabaseBuilder {
    name: String,
    password: String,
    db_type: DbType,
    preset_id: u64,
    login: Option<String>,
    hash_type: Option<DbHashType>,
    config_parameters: Option<DbConfig>,
}

impl CreateDatabaseBuilder {
    pub fn login(mut self, login: impl Into<String>) -> Self {
        self.login = Some(login.into());
        self
    }

    pub fn hash_type(mut self, hash_type: DbHashType) -> Self {
        self.hash_type = Some(hash_type);
        self
    }

    pub fn config_parameters(mut self, config: DbConfig) -> Self {
        self.config_parameters = Some(config);
        self
    }

    pub fn build(self) -> Result<CreateDatabase, ValidationError> {
        let mut checks = Checks::new();
        checks.non_empty("name", &self.name);
        checks.max_len("name", &self.name, NAME_MAX_LEN);
        checks.non_empty("password", &self.password);
        checks.finish()?;

        Ok(CreateDatabase {
            name: self.name,
            password: self.password,
            db_type: self.db_type,
            preset_id: self.preset_id,
            login: self.login,
            hash_type: self.hash_type,
            config_parameters: self.config_parameters,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
/// Payload for `PATCH /dbs/{id}`; only set fields are sent.
pub struct UpdateDatabase {
    pub(crate) name: Option<String>,
    pub(crate) password: Option<String>,
    pub(crate) preset_id: Option<u64>,
    pub(crate) config_parameters: Option<DbConfig>,
    pub(crate) is_external_ip: Option<bool>,
}

impl UpdateDatabase {
    pub fn builder() -> UpdateDatabaseBuilder {
        UpdateDatabaseBuilder(Self::default())
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateDatabaseBuilder(UpdateDatabase);

impl UpdateDatabaseBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.0.name = Some(name.into());
        self
    }

    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.0.password = Some(password.into());
        self
    }

    pub fn preset_id(mut self, preset_id: u64) -> Self {
        self.0.preset_id = Some(preset_id);
        self
    }

    pub fn config_parameters(mut self, config: DbConfig) -> Self {
        self.0.config_parameters = Some(config);
        self
    }

    pub fn external_ip(mut self, enabled: bool) -> Self {
        self.0.is_external_ip = Some(enabled);
        self
    }

    pub fn build(self) -> Result<UpdateDatabase, ValidationError> {
        let mut checks = Checks::new();
        checks.opt_max_len("name", self.0.name.as_deref(), NAME_MAX_LEN);
        checks.finish()?;
        Ok(self.0)
    }
}

// ---------------------------------------------------------------------------
// Kubernetes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
/// Worker node group definition used at cluster creation.
pub struct WorkerGroup {
    pub name: String,
    pub preset_id: u64,
    pub node_count: u32,
}

#[derive(Debug, Clone, PartialEq)]
/// Validated payload for `POST /k8s/clusters`.
pub struct CreateCluster {
    pub(crate) name: String,
    pub(crate) ha: bool,
    pub(crate) k8s_version: String,
    pub(crate) network_driver: String,
    pub(crate) ingress: bool,
    pub(crate) preset_id: u64,
    pub(crate) worker_groups: Vec<WorkerGroup>,
    pub(crate) description: Option<String>,
}

impl CreateCluster {
    pub fn builder(
        name: impl Into<String>,
        k8s_version: impl Into<String>,
        network_driver: impl Into<String>,
        preset_id: u64,
    ) -> CreateClusterBuilder {
        CreateClusterBuilder {
            name: name.into(),
            k8s_version: k8s_version.into(),
            network_driver: network_driver.into(),
            preset_id,
            ha: false,
            ingress: true,
            worker_groups: Vec::new(),
            description: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateClusterBuilder {
    name: String,
    ha: bool,
    k8s_version: String,
    network_driver: String,
    ingress: bool,
    preset_id: u64,
    worker_groups: Vec<WorkerGroup>,
    description: Option<String>,
}

impl CreateClusterBuilder {
    pub fn ha(mut self, enabled: bool) -> Self {
        self.ha = enabled;
        self
    }

    pub fn ingress(mut self, enabled: bool) -> Self {
        self.ingress = enabled;
        self
    }

    pub fn worker_groups(mut self, groups: Vec<WorkerGroup>) -> Self {
        self.worker_groups = groups;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn build(self) -> Result<CreateCluster, ValidationError> {
        let mut checks = Checks::new();
        checks.non_empty("name", &self.name);
        checks.max_len("name", &self.name, NAME_MAX_LEN);
        checks.opt_max_len("description", self.description.as_deref(), COMMENT_MAX_LEN);
        checks.non_empty_list("worker_groups", &self.worker_groups);
        for group in &self.worker_groups {
            checks.non_empty("worker_groups.name", &group.name);
        }
        checks.finish()?;

        Ok(CreateCluster {
            name: self.name,
            ha: self.ha,
            k8s_version: self.k8s_version,
            network_driver: self.network_driver,
            ingress: self.ingress,
            preset_id: self.preset_id,
            worker_groups: self.worker_groups,
            description: self.description,
        })
    }
}

// ---------------------------------------------------------------------------
// SSH keys
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
/// Validated payload for `POST /ssh-keys`.
pub struct CreateSshKey {
    pub(crate) name: String,
    pub(crate) body: String,
    pub(crate) is_default: bool,
}

impl CreateSshKey {
    pub fn new(
        name: impl Into<String>,
        body: impl Into<String>,
        is_default: bool,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        let body = body.into();
        let mut checks = Checks::new();
        checks.non_empty("name", &name);
        checks.max_len("name", &name, NAME_MAX_LEN);
        checks.non_empty("body", &body);
        checks.finish()?;
        Ok(Self {
            name,
            body,
            is_default,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Payload for `PATCH /ssh-keys/{id}`; only set fields are sent.
pub struct UpdateSshKey {
    pub name: Option<String>,
    pub body: Option<String>,
    pub is_default: Option<bool>,
}

// ---------------------------------------------------------------------------
// API tokens
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
/// Validated payload for `POST /auth/api-keys`.
pub struct CreateApiKey {
    pub(crate) name: String,
    pub(crate) expires_at: Option<DateTime<Utc>>,
}

impl CreateApiKey {
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        let mut checks = Checks::new();
        checks.non_empty("name", &name);
        checks.max_len("name", &name, NAME_MAX_LEN);
        checks.finish()?;
        Ok(Self {
            name,
            expires_at: None,
        })
    }

    pub fn expires_at(mut self, expires_at: DateTime<Utc>) -> Self {
        self.expires_at = Some(expires_at);
        self
    }
}

// ---------------------------------------------------------------------------
// Images
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
/// Validated payload for `POST /images`.
pub struct CreateImage {
    pub(crate) disk_id: u64,
    pub(crate) description: String,
}

impl CreateImage {
    pub fn new(disk_id: u64, description: impl Into<String>) -> Result<Self, ValidationError> {
        let description = description.into();
        let mut checks = Checks::new();
        checks.max_len("description", &description, COMMENT_MAX_LEN);
        checks.finish()?;
        Ok(Self {
            disk_id,
            description,
        })
    }
}

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
/// Validated payload for `POST /projects`.
pub struct CreateProject {
    pub(crate) name: String,
    pub(crate) description: Option<String>,
    pub(crate) avatar_id: Option<String>,
}

impl CreateProject {
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        let mut checks = Checks::new();
        checks.non_empty("name", &name);
        checks.max_len("name", &name, NAME_MAX_LEN);
        checks.finish()?;
        Ok(Self {
            name,
            description: None,
            avatar_id: None,
        })
    }

    pub fn description(mut self, description: impl Into<String>) -> Result<Self, ValidationError> {
        let description = description.into();
        let mut checks = Checks::new();
        checks.max_len("description", &description, COMMENT_MAX_LEN);
        checks.finish()?;
        self.description = Some(description);
        Ok(self)
    }

    pub fn avatar_id(mut self, avatar_id: impl Into<String>) -> Self {
        self.avatar_id = Some(avatar_id.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Payload for `PATCH /projects/{id}`; only set fields are sent.
pub struct UpdateProject {
    pub name: Option<String>,
    pub description: Option<String>,
    pub avatar_id: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Resource kinds a project can hold; selects the nested collection path.
pub enum ProjectResourceKind {
    Balancer,
    Bucket,
    Cluster,
    Database,
    DedicatedServer,
    Server,
}

impl ProjectResourceKind {
    pub(crate) const fn path_segment(self) -> &'static str {
        match self {
            Self::Balancer => "balancers",
            Self::Bucket => "buckets",
            Self::Cluster => "clusters",
            Self::Database => "databases",
            Self::DedicatedServer => "dedicated",
            Self::Server => "servers",
        }
    }
}

// ---------------------------------------------------------------------------
// Domains and DNS
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// DNS record types accepted by the DNS-record endpoints.
pub enum DnsRecordType {
    A,
    Aaaa,
    Cname,
    Mx,
    Txt,
    Srv,
    Ns,
}

impl DnsRecordType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::Aaaa => "AAAA",
            Self::Cname => "CNAME",
            Self::Mx => "MX",
            Self::Txt => "TXT",
            Self::Srv => "SRV",
            Self::Ns => "NS",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Validated payload for the DNS-record create/update endpoints.
pub struct DnsRecordSpec {
    pub(crate) record_type: DnsRecordType,
    pub(crate) value: String,
    pub(crate) priority: Option<u32>,
    pub(crate) subdomain: Option<String>,
}

impl DnsRecordSpec {
    pub fn new(record_type: DnsRecordType, value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let mut checks = Checks::new();
        checks.non_empty("value", &value);
        checks.finish()?;
        Ok(Self {
            record_type,
            value,
            priority: None,
            subdomain: None,
        })
    }

    pub fn priority(mut self, priority: u32) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn subdomain(mut self, subdomain: impl Into<String>) -> Self {
        self.subdomain = Some(subdomain.into());
        self
    }
}

// ---------------------------------------------------------------------------
// Dedicated servers
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
/// Validated payload for `POST /dedicated-servers`.
pub struct CreateDedicatedServer {
    pub(crate) plan_id: u64,
    pub(crate) preset_id: u64,
    pub(crate) name: String,
    pub(crate) payment_period: PaymentPeriod,
    pub(crate) os_id: Option<u64>,
    pub(crate) cp_id: Option<u64>,
    pub(crate) bandwidth_id: Option<u64>,
    pub(crate) network_drive_id: Option<u64>,
    pub(crate) additional_ip_addr_id: Option<u64>,
    pub(crate) comment: Option<String>,
}

impl CreateDedicatedServer {
    pub fn builder(
        plan_id: u64,
        preset_id: u64,
        name: impl Into<String>,
        payment_period: PaymentPeriod,
    ) -> CreateDedicatedServerBuilder {
        CreateDedicatedServerBuilder {
            plan_id,
            preset_id,
            name: name.into(),
            payment_period,
            os_id: None,
            cp_id: None,
            bandwidth_id: None,
            network_drive_id: None,
            additional_ip_addr_id: None,
            comment: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateDedicatedServerBuilder {
    plan_id: u64,
    preset_id: u64,
    name: String,
    payment_period: PaymentPeriod,
    os_id: Option<u64>,
    cp_id: Option<u64>,
    bandwidth_id: Option<u64>,
    network_drive_id: Option<u64>,
    additional_ip_addr_id: Option<u64>,
    comment: Option<String>,
}

impl CreateDedicatedServerBuilder {
    pub fn os_id(mut self, os_id: u64) -> Self {
        self.os_id = Some(os_id);
        self
    }

    pub fn cp_id(mut self, cp_id: u64) -> Self {
        self.cp_id = Some(cp_id);
        self
    }

    pub fn bandwidth_id(mut self, bandwidth_id: u64) -> Self {
        self.bandwidth_id = Some(bandwidth_id);
        self
    }

    pub fn network_drive_id(mut self, network_drive_id: u64) -> Self {
        self.network_drive_id = Some(network_drive_id);
        self
    }

    pub fn additional_ip_addr_id(mut self, ip_addr_id: u64) -> Self {
        self.additional_ip_addr_id = Some(ip_addr_id);
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn build(self) -> Result<CreateDedicatedServer, ValidationError> {
        let mut checks = Checks::new();
        checks.non_empty("name", &self.name);
        checks.max_len("name", &self.name, NAME_MAX_LEN);
        checks.opt_max_len("comment", self.comment.as_deref(), COMMENT_MAX_LEN);
        checks.finish()?;

        Ok(CreateDedicatedServer {
            plan_id: self.plan_id,
            preset_id: self.preset_id,
            name: self.name,
            payment_period: self.payment_period,
            os_id: self.os_id,
            cp_id: self.cp_id,
            bandwidth_id: self.bandwidth_id,
            network_drive_id: self.network_drive_id,
            additional_ip_addr_id: self.additional_ip_addr_id,
            comment: self.comment,
        })
    }
}

// ---------------------------------------------------------------------------
// S3 buckets
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
/// Validated payload for `POST /storages/buckets`.
pub struct CreateBucket {
    pub(crate) name: String,
    pub(crate) bucket_type: BucketType,
    pub(crate) preset_id: u64,
}

impl CreateBucket {
    pub fn new(
        name: impl Into<String>,
        bucket_type: BucketType,
        preset_id: u64,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        let mut checks = Checks::new();
        checks.non_empty("name", &name);
        checks.max_len("name", &name, NAME_MAX_LEN);
        checks.finish()?;
        Ok(Self {
            name,
            bucket_type,
            preset_id,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Payload for `PATCH /storages/buckets/{id}`; only set fields are sent.
pub struct UpdateBucket {
    pub preset_id: Option<u64>,
    pub bucket_type: Option<BucketType>,
}

// ---------------------------------------------------------------------------
// Mail
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
/// Validated payload for `POST /mail/domains/{fqdn}`.
pub struct CreateMailbox {
    pub(crate) mailbox: String,
    pub(crate) password: String,
    pub(crate) comment: Option<String>,
}

impl CreateMailbox {
    pub fn new(
        mailbox: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let mailbox = mailbox.into();
        let password = password.into();
        let mut checks = Checks::new();
        checks.non_empty("mailbox", &mailbox);
        checks.non_empty("password", &password);
        checks.finish()?;
        Ok(Self {
            mailbox,
            password,
            comment: None,
        })
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Payload for `PATCH /mail/domains/{fqdn}/mailboxes/{mailbox}`.
pub struct UpdateMailbox {
    pub password: Option<String>,
    pub comment: Option<String>,
}

// ---------------------------------------------------------------------------
// Account access restrictions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
/// Non-empty list of IP addresses for the access-restriction endpoints.
pub struct AllowedIps {
    pub(crate) ips: Vec<IpAddr>,
}

impl AllowedIps {
    pub fn new(ips: Vec<IpAddr>) -> Result<Self, ValidationError> {
        if ips.is_empty() {
            return Err(ValidationError::single(Violation::EmptyList {
                field: "ips",
            }));
        }
        Ok(Self { ips })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Non-empty list of ISO country codes for the access-restriction endpoints.
pub struct AllowedCountries {
    pub(crate) countries: Vec<String>,
}

impl AllowedCountries {
    pub fn new(countries: Vec<String>) -> Result<Self, ValidationError> {
        if countries.is_empty() {
            return Err(ValidationError::single(Violation::EmptyList {
                field: "countries",
            }));
        }
        Ok(Self { countries })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_server_accepts_valid_input() {
        let request = CreateServer::builder("srv1", 1, 500, ServerHardware::Preset(42))
            .ddos_guard(false)
            .build()
            .unwrap();
        assert_eq!(request.name, "srv1");
        assert_eq!(request.bandwidth, 500);
    }

    #[test]
    fn create_server_rejects_off_step_bandwidth() {
        let err = CreateServer::builder("srv1", 1, 150, ServerHardware::Preset(42))
            .build()
            .unwrap_err();
        assert!(matches!(
            err.violations(),
            [Violation::OutOfSteppedRange {
                field: "bandwidth",
                actual: 150,
                ..
            }]
        ));
    }

    #[test]
    fn create_server_reports_every_violation_at_once() {
        let err = CreateServer::builder("x".repeat(256), 1, 150, ServerHardware::Preset(42))
            .comment("y".repeat(256))
            .build()
            .unwrap_err();
        assert_eq!(err.violations().len(), 3);
    }

    #[test]
    fn update_server_rejects_preset_and_configurator_together() {
        let err = UpdateServer::builder()
            .preset_id(42)
            .configurator(Configurator {
                configurator_id: 1,
                disk: 10240,
                cpu: 2,
                ram: 4096,
            })
            .build()
            .unwrap_err();
        assert!(matches!(
            err.violations(),
            [Violation::MutuallyExclusive {
                first: "preset_id",
                second: "configurator",
            }]
        ));
    }

    #[test]
    fn update_server_accepts_either_alone() {
        assert!(UpdateServer::builder().preset_id(42).build().is_ok());
        assert!(
            UpdateServer::builder()
                .configurator(Configurator {
                    configurator_id: 1,
                    disk: 10240,
                    cpu: 2,
                    ram: 4096,
                })
                .build()
                .is_ok()
        );
    }

    #[test]
    fn create_cluster_requires_worker_groups() {
        let err = CreateCluster::builder("prod", "1.28", "flannel", 7)
            .build()
            .unwrap_err();
        assert!(matches!(
            err.violations(),
            [Violation::EmptyList {
                field: "worker_groups",
            }]
        ));
    }

    #[test]
    fn create_ssh_key_rejects_blank_body() {
        let err = CreateSshKey::new("key", "   ", false).unwrap_err();
        assert!(matches!(
            err.violations(),
            [Violation::Empty { field: "body" }]
        ));
    }

    #[test]
    fn allowed_ips_must_not_be_empty() {
        assert!(AllowedIps::new(Vec::new()).is_err());
        assert!(AllowedIps::new(vec![IpAddr::from([127, 0, 0, 1])]).is_ok());
    }

    #[test]
    fn project_description_length_is_enforced() {
        let project = CreateProject::new("infra").unwrap();
        assert!(project.clone().description("ok").is_ok());
        assert!(project.description("d".repeat(256)).is_err());
    }
}
