//! Cloud server models.

use std::net::IpAddr;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

use super::{Extra, Meta};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OsName {
    Bitrix,
    Brainycp,
    Centos,
    Debian,
    Fedora,
    Freebsd,
    Gentoo,
    Routeros,
    Ubuntu,
    Windows,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Os {
    pub id: u64,
    pub name: OsName,
    pub version: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Software {
    pub id: u64,
    pub name: String,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum BootMode {
    #[serde(rename = "std")]
    Standard,
    #[serde(rename = "single")]
    Single,
    #[serde(rename = "cd")]
    Cd,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServerStatus {
    Installing,
    SoftwareInstall,
    Reinstalling,
    On,
    Off,
    TurningOn,
    TurningOff,
    HardTurningOff,
    Rebooting,
    HardRebooting,
    Removing,
    Removed,
    Cloning,
    Transfer,
    Blocked,
    Configuring,
    NoPaid,
    PermanentBlocked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NetworkType {
    Public,
    Local,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NatMode {
    DnatAndSnat,
    Snat,
    NoNat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IpVersion {
    Ipv4,
    Ipv6,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NetworkIp {
    #[serde(rename = "type")]
    pub version: IpVersion,
    pub ip: IpAddr,
    pub ptr: String,
    pub is_main: bool,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Network {
    #[serde(rename = "type")]
    pub network_type: NetworkType,
    pub nat_mode: NatMode,
    pub bandwidth: Option<u32>,
    pub ips: Option<Vec<NetworkIp>>,
    // Only meaningful for public networks.
    pub is_ddos_guard: bool,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Disk {
    pub id: u64,
    pub size: u64,
    pub used: u64,
    #[serde(rename = "type")]
    pub disk_type: String,
    pub is_mounted: bool,
    pub is_system: bool,
    pub system_name: String,
    pub status: String,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Server {
    pub id: u64,
    pub name: String,
    pub comment: String,
    pub os: Os,
    pub software: Option<Software>,
    pub preset_id: Option<u64>,
    pub location: String,
    pub configurator_id: Option<u64>,
    pub boot_mode: BootMode,
    pub status: ServerStatus,
    pub start_at: Option<DateTime<Utc>>,
    pub is_ddos_guard: bool,
    pub cpu: u32,
    pub cpu_frequency: String,
    pub ram: u64,
    pub avatar_id: Option<String>,
    pub vnc_pass: Option<String>,
    pub networks: Vec<Network>,
    pub disks: Vec<Disk>,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ServerDiskResponse {
    pub response_id: Option<Uuid>,
    pub server_disk: Disk,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ServerDisksResponse {
    pub response_id: Option<Uuid>,
    pub meta: Option<Meta>,
    pub server_disks: Vec<Disk>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ServerResponse {
    pub response_id: Option<Uuid>,
    pub server: Server,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ServersResponse {
    pub response_id: Option<Uuid>,
    pub meta: Option<Meta>,
    pub servers: Vec<Server>,
    #[serde(flatten)]
    pub extra: Extra,
}
