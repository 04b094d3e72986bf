//! Managed database models.

use std::net::Ipv4Addr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Extra, Meta};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DbType {
    Mysql,
    Mysql5,
    Postgresql,
    Redis,
    Mongodb,
}

impl DbType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mysql => "mysql",
            Self::Mysql5 => "mysql5",
            Self::Postgresql => "postgresql",
            Self::Redis => "redis",
            Self::Mongodb => "mongodb",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DbHashType {
    CachingSha2,
    MysqlNative,
}

impl DbHashType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CachingSha2 => "caching_sha2",
            Self::MysqlNative => "mysql_native",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DbStatus {
    Started,
    Starting,
    Stoped,
    NoPaid,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
/// Disk usage, in kilobytes.
pub struct DbDiskStats {
    pub size: u64,
    pub used: u64,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
/// Engine parameters as reported by the API; values not listed here stay in
/// `extra`.
pub struct DbConfigParameters {
    pub auto_increment_increment: Option<String>,
    pub auto_increment_offset: Option<String>,
    pub innodb_read_io_threads: Option<String>,
    pub innodb_write_io_threads: Option<String>,
    pub join_buffer_size: Option<String>,
    pub max_allowed_packet: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Database {
    pub id: u64,
    pub created_at: DateTime<Utc>,
    pub account_id: String,
    pub login: String,
    pub password: String,
    pub name: String,
    pub host: String,
    #[serde(rename = "type")]
    pub db_type: DbType,
    pub hash_type: DbHashType,
    pub port: u16,
    pub ip: Option<Ipv4Addr>,
    pub local_ip: Option<Ipv4Addr>,
    pub status: DbStatus,
    pub preset_id: u64,
    pub dist_stats: Option<DbDiskStats>,
    pub config_parameters: DbConfigParameters,
    pub is_only_local_ip_access: bool,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DatabaseResponse {
    pub response_id: Option<Uuid>,
    pub db: Database,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DatabasesResponse {
    pub response_id: Option<Uuid>,
    pub meta: Option<Meta>,
    pub dbs: Vec<Database>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackupStatus {
    Precreate,
    Delete,
    Shutdown,
    Recover,
    Create,
    Fail,
    Done,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackupType {
    Manual,
    Auto,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Backup {
    pub id: u64,
    pub name: String,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
    pub status: BackupStatus,
    pub size: u64,
    #[serde(rename = "type")]
    pub backup_type: BackupType,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BackupResponse {
    pub response_id: Option<Uuid>,
    pub backup: Backup,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BackupsResponse {
    pub response_id: Option<Uuid>,
    pub meta: Option<Meta>,
    pub backups: Vec<Backup>,
    #[serde(flatten)]
    pub extra: Extra,
}
