//! Kubernetes cluster models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;

use super::{Extra, Meta};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Cluster {
    pub id: u64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub status: String,
    pub description: String,
    pub ha: bool,
    pub k8s_version: String,
    pub network_driver: String,
    pub ingress: bool,
    pub preset_id: u64,
    pub cpu: Option<u32>,
    pub ram: Option<u64>,
    pub disk: Option<u64>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ClusterResponse {
    pub response_id: Option<Uuid>,
    pub cluster: Cluster,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ClustersResponse {
    pub response_id: Option<Uuid>,
    pub meta: Option<Meta>,
    pub clusters: Vec<Cluster>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
/// Hash handed back when cluster deletion needs out-of-band confirmation.
pub struct DeleteConfirmation {
    pub hash: String,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ClusterDeleteResponse {
    pub response_id: Option<Uuid>,
    pub cluster_delete: DeleteConfirmation,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Outcome of a cluster delete request.
///
/// The API either deletes immediately (HTTP 204) or demands confirmation
/// (HTTP 200 with a hash to replay together with a one-time code).
#[derive(Debug, Clone, PartialEq)]
pub enum ClusterDeletion {
    Deleted,
    ConfirmationRequired(ClusterDeleteResponse),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
/// Usage counters for one cluster resource axis.
pub struct ResourceUsage {
    #[serde(default)]
    pub requested: u64,
    #[serde(default)]
    pub allocatable: u64,
    #[serde(default)]
    pub capacity: u64,
    #[serde(default)]
    pub used: u64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ClusterResources {
    #[serde(default)]
    pub nodes: u64,
    pub cores: ResourceUsage,
    pub memory: ResourceUsage,
    pub pods: ResourceUsage,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ClusterResourcesResponse {
    pub response_id: Option<Uuid>,
    pub resources: ClusterResources,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NodeGroup {
    pub id: u64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub preset_id: u64,
    pub node_count: u32,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Node {
    pub id: u64,
    pub created_at: DateTime<Utc>,
    #[serde(rename = "type")]
    pub node_type: String,
    pub group_id: u64,
    pub status: String,
    pub preset_id: u64,
    pub cpu: u32,
    pub ram: u64,
    pub disk: u64,
    pub network: u64,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NodeGroupResponse {
    pub response_id: Option<Uuid>,
    pub node_group: NodeGroup,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NodeGroupsResponse {
    pub response_id: Option<Uuid>,
    pub meta: Option<Meta>,
    pub node_groups: Vec<NodeGroup>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NodesResponse {
    pub response_id: Option<Uuid>,
    pub meta: Option<Meta>,
    pub nodes: Vec<Node>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct K8sVersionsResponse {
    pub response_id: Option<Uuid>,
    pub meta: Option<Meta>,
    pub k8s_versions: Vec<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NetworkDriversResponse {
    pub response_id: Option<Uuid>,
    pub meta: Option<Meta>,
    pub network_drivers: Vec<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct K8sPreset {
    pub id: u64,
    pub description: String,
    pub description_short: String,
    pub price: Decimal,
    pub cpu: u32,
    pub ram: u64,
    pub disk: u64,
    pub network: u64,
    #[serde(rename = "type")]
    pub preset_type: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct K8sPresetsResponse {
    pub response_id: Option<Uuid>,
    pub meta: Option<Meta>,
    pub k8s_presets: Vec<K8sPreset>,
    #[serde(flatten)]
    pub extra: Extra,
}
