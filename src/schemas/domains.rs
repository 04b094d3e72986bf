//! Domain and DNS models.

use std::net::IpAddr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;

use super::{Extra, Meta};
use crate::domain::Period;

#[derive(Debug, Clone, PartialEq, Deserialize)]
/// Registration period offered for a domain or zone, with its price.
pub struct AllowedBuyPeriod {
    pub period: Period,
    pub price: Decimal,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Subdomain {
    pub fqdn: String,
    pub id: u64,
    pub linked_ip: Option<IpAddr>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Domain {
    pub days_left: i64,
    pub allowed_buy_periods: Vec<AllowedBuyPeriod>,
    pub domain_status: String,
    // Free-form upstream; not always a parseable timestamp.
    pub expiration: String,
    pub fqdn: String,
    pub id: u64,
    pub is_autoprolong_enabled: Option<bool>,
    pub is_premium: bool,
    pub is_prolong_allowed: bool,
    pub is_technical: bool,
    pub is_whois_privacy_enabled: Option<bool>,
    pub linked_ip: Option<IpAddr>,
    pub paid_till: Option<DateTime<Utc>>,
    pub person_id: Option<u64>,
    pub premium_prolong_cost: Option<Decimal>,
    pub provider: Option<String>,
    pub request_status: Option<String>,
    pub tld_id: Option<u64>,
    pub subdomains: Vec<Subdomain>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DomainResponse {
    pub response_id: Option<Uuid>,
    pub domain: Domain,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DomainsResponse {
    pub response_id: Option<Uuid>,
    pub meta: Option<Meta>,
    pub domains: Vec<Domain>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DomainAvailabilityResponse {
    pub response_id: Option<Uuid>,
    pub is_domain_available: bool,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DnsData {
    pub value: String,
    pub priority: Option<u32>,
    pub subdomain: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DnsRecord {
    #[serde(rename = "type")]
    pub record_type: String,
    pub data: DnsData,
    pub id: Option<u64>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DnsRecordResponse {
    pub response_id: Option<Uuid>,
    pub dns_record: DnsRecord,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DnsRecordsResponse {
    pub response_id: Option<Uuid>,
    pub meta: Option<Meta>,
    pub dns_records: Vec<DnsRecord>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TopLevelDomain {
    pub allowed_buy_periods: Vec<AllowedBuyPeriod>,
    pub early_renew_period: Option<i64>,
    pub grace_period: i64,
    pub id: u64,
    pub is_published: bool,
    pub is_registered: bool,
    pub is_whois_privacy_default_enabled: bool,
    pub is_whois_privacy_enabled: bool,
    pub name: String,
    pub price: Decimal,
    pub prolong_price: Decimal,
    pub registrar: String,
    pub transfer: Decimal,
    pub whois_privacy_price: Decimal,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TopLevelDomainResponse {
    pub response_id: Option<Uuid>,
    pub top_level_domain: TopLevelDomain,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TopLevelDomainsResponse {
    pub response_id: Option<Uuid>,
    pub meta: Option<Meta>,
    pub top_level_domains: Vec<TopLevelDomain>,
    #[serde(flatten)]
    pub extra: Extra,
}
