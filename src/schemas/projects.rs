//! Project models.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

use super::balancers::Balancer;
use super::databases::Database;
use super::dedics::DedicatedServer;
use super::kubernetes::Cluster;
use super::s3::Bucket;
use super::servers::Server;
use super::{Extra, Meta};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Project {
    pub id: u64,
    pub account_id: String,
    pub avatar_id: Option<String>,
    pub description: String,
    pub name: String,
    pub is_default: bool,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProjectResource {
    pub id: u64,
    pub created_at: DateTime<Utc>,
    pub resource_id: u64,
    pub project: Project,
    #[serde(rename = "type")]
    pub resource_type: String,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProjectResponse {
    pub response_id: Option<Uuid>,
    pub project: Project,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProjectsResponse {
    pub response_id: Option<Uuid>,
    pub meta: Option<Meta>,
    pub projects: Vec<Project>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
/// Everything attached to a project, one list per resource kind.
pub struct ProjectResourcesResponse {
    pub response_id: Option<Uuid>,
    pub meta: Option<Meta>,
    #[serde(default)]
    pub servers: Vec<Server>,
    #[serde(default)]
    pub balancers: Vec<Balancer>,
    #[serde(default)]
    pub buckets: Vec<Bucket>,
    #[serde(default)]
    pub clusters: Vec<Cluster>,
    #[serde(default)]
    pub databases: Vec<Database>,
    #[serde(default)]
    pub dedicated_servers: Vec<DedicatedServer>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProjectResourceResponse {
    pub response_id: Option<Uuid>,
    pub resource: ProjectResource,
    #[serde(flatten)]
    pub extra: Extra,
}
