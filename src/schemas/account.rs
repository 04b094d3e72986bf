//! Account status, finances, and access-restriction models.

use std::collections::BTreeMap;
use std::net::IpAddr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;

use super::Extra;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CompanyInfo {
    pub id: u64,
    pub name: String,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Status {
    pub is_blocked: bool,
    pub is_permanent_blocked: bool,
    pub is_send_bill_letters: bool,
    pub company_info: CompanyInfo,
    pub last_password_changed_at: DateTime<Utc>,
    pub ym_client_id: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StatusResponse {
    pub response_id: Option<Uuid>,
    pub status: Status,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Finances {
    pub balance: Decimal,
    pub currency: String,
    pub discount_end_date_at: Option<DateTime<Utc>>,
    pub discount_percent: u32,
    pub hourly_cost: Decimal,
    pub hourly_fee: Decimal,
    pub monthly_cost: Decimal,
    pub monthly_fee: Decimal,
    pub total_paid: Decimal,
    pub hours_left: Option<u64>,
    pub autopay_card_info: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FinancesResponse {
    pub response_id: Option<Uuid>,
    pub finances: Finances,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
/// Allow-lists currently applied to authorization.
pub struct WhiteList {
    pub ips: Vec<IpAddr>,
    pub countries: Vec<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AccessResponse {
    pub response_id: Option<Uuid>,
    pub is_ip_restrictions_enabled: bool,
    pub is_country_restrictions_enabled: bool,
    pub white_list: WhiteList,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
/// Alpha-2 country code to display name.
pub struct CountriesResponse {
    pub response_id: Option<Uuid>,
    pub countries: BTreeMap<String, String>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
/// Per-entry outcome when adding allow-list entries.
pub enum AddEntryStatus {
    Success,
    Conflict,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
/// Per-entry outcome when removing allow-list entries.
pub enum RemoveEntryStatus {
    Success,
    NotFound,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AddedIp {
    pub value: IpAddr,
    pub status: AddEntryStatus,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RemovedIp {
    pub value: IpAddr,
    pub status: RemoveEntryStatus,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AddIpsResponse {
    pub response_id: Option<Uuid>,
    pub ips: Vec<AddedIp>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RemoveIpsResponse {
    pub response_id: Option<Uuid>,
    pub ips: Vec<RemovedIp>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AddedCountry {
    pub value: String,
    pub status: AddEntryStatus,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RemovedCountry {
    pub value: String,
    pub status: RemoveEntryStatus,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AddCountriesResponse {
    pub response_id: Option<Uuid>,
    pub countries: Vec<AddedCountry>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RemoveCountriesResponse {
    pub response_id: Option<Uuid>,
    pub countries: Vec<RemovedCountry>,
    #[serde(flatten)]
    pub extra: Extra,
}
