//! Load balancer models.

use std::net::IpAddr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Extra, Meta};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Protocol {
    Http,
    Http2,
    Https,
    Tcp,
}

impl Protocol {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::Http2 => "http2",
            Self::Https => "https",
            Self::Tcp => "tcp",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BalancerAlgorithm {
    #[serde(rename = "roundrobin")]
    RoundRobin,
    #[serde(rename = "leastconn")]
    LeastConnections,
}

impl BalancerAlgorithm {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RoundRobin => "roundrobin",
            Self::LeastConnections => "leastconn",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BalancerStatus {
    Started,
    Stoped,
    Starting,
    NoPaid,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BalancerRule {
    pub id: u64,
    pub balancer_proto: Protocol,
    pub balancer_port: u16,
    pub server_proto: Protocol,
    pub server_port: u16,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Balancer {
    pub id: u64,
    pub algo: BalancerAlgorithm,
    pub created_at: DateTime<Utc>,
    pub fall: u32,
    pub inter: u32,
    pub ip: Option<IpAddr>,
    pub local_ip: Option<IpAddr>,
    pub is_keepalive: bool,
    pub name: String,
    pub path: String,
    pub proto: Protocol,
    pub rise: u32,
    pub preset_id: u64,
    pub is_ssl: bool,
    pub status: BalancerStatus,
    pub is_sticky: bool,
    pub timeout: u32,
    pub is_use_proxy: bool,
    pub ips: Vec<String>,
    pub rules: Vec<BalancerRule>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BalancerResponse {
    pub response_id: Option<Uuid>,
    pub balancer: Balancer,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BalancersResponse {
    pub response_id: Option<Uuid>,
    pub meta: Option<Meta>,
    pub balancers: Vec<Balancer>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BalancerRuleResponse {
    pub response_id: Option<Uuid>,
    pub rule: BalancerRule,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BalancerRulesResponse {
    pub response_id: Option<Uuid>,
    pub meta: Option<Meta>,
    pub rules: Vec<BalancerRule>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BalancerIpsResponse {
    pub response_id: Option<Uuid>,
    pub meta: Option<Meta>,
    pub ips: Vec<String>,
    #[serde(flatten)]
    pub extra: Extra,
}
