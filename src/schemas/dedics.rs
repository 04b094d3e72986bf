//! Dedicated server models.

use std::net::{Ipv4Addr, Ipv6Addr};

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;

use super::{Extra, Meta};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DedicatedServerStatus {
    Installing,
    Installed,
    On,
    Off,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DedicatedServer {
    pub id: u64,
    pub cpu_description: String,
    pub hdd_description: String,
    pub ram_description: String,
    pub created_at: DateTime<Utc>,
    pub ip: Option<Ipv4Addr>,
    pub ipmi_ip: Option<Ipv4Addr>,
    pub ipmi_login: Option<String>,
    pub ipmi_password: Option<String>,
    pub ipv6: Option<Ipv6Addr>,
    pub mode_id: Option<u64>,
    pub name: String,
    pub comment: String,
    pub vnc_pass: Option<String>,
    pub status: DedicatedServerStatus,
    pub os_id: Option<u64>,
    pub cp_id: Option<u64>,
    pub bandwidth_id: Option<u64>,
    pub network_drive_id: Option<Vec<u64>>,
    pub additional_ip_addr_id: Option<Vec<u64>>,
    pub plan_id: Option<u64>,
    pub price: Decimal,
    pub location: String,
    // 0 means manual provisioning through support engineers.
    pub autoinstall_ready: u32,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DedicatedServerResponse {
    pub response_id: Option<Uuid>,
    pub dedicated_server: DedicatedServer,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DedicatedServersResponse {
    pub response_id: Option<Uuid>,
    pub meta: Option<Meta>,
    pub dedicated_servers: Vec<DedicatedServer>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DedicatedServerPreset {
    pub id: u64,
    pub description: String,
    pub is_ipmi_enabled: bool,
    pub price: Decimal,
    pub location: String,
    pub memory: String,
    pub disk: String,
    pub cpu: String,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DedicatedServerPresetsResponse {
    pub response_id: Option<Uuid>,
    pub meta: Option<Meta>,
    pub dedicated_server_presets: Vec<DedicatedServerPreset>,
    #[serde(flatten)]
    pub extra: Extra,
}
