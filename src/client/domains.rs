//! Domain and DNS operations.

use std::net::IpAddr;

use super::Client;
use crate::domain::DnsRecordSpec;
use crate::error::Error;
use crate::schemas::domains::{
    DnsRecordResponse, DnsRecordsResponse, DomainAvailabilityResponse, DomainResponse,
    DomainsResponse, TopLevelDomainResponse, TopLevelDomainsResponse,
};
use crate::transport;

/// Domain and DNS operations, reached via [`Client::domains`].
pub struct Domains<'a> {
    client: &'a Client,
}

impl Client {
    pub fn domains(&self) -> Domains<'_> {
        Domains { client: self }
    }
}

impl Domains<'_> {
    pub async fn list(
        &self,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<DomainsResponse, Error> {
        self.client
            .fetch(transport::domains::list(limit, offset))
            .await
    }

    pub async fn get(&self, fqdn: &str) -> Result<DomainResponse, Error> {
        self.client.fetch(transport::domains::get(fqdn)).await
    }

    pub async fn update(
        &self,
        fqdn: &str,
        linked_ip: Option<IpAddr>,
        is_autoprolong_enabled: Option<bool>,
    ) -> Result<DomainResponse, Error> {
        self.client
            .fetch(transport::domains::update(fqdn, linked_ip, is_autoprolong_enabled))
            .await
    }

    /// Removes the domain from the account; registration is unaffected.
    pub async fn delete(&self, fqdn: &str) -> Result<(), Error> {
        self.client.execute(transport::domains::delete(fqdn)).await
    }

    pub async fn check_availability(&self, fqdn: &str) -> Result<DomainAvailabilityResponse, Error> {
        self.client
            .fetch(transport::domains::check_availability(fqdn))
            .await
    }

    pub async fn dns_records(
        &self,
        fqdn: &str,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<DnsRecordsResponse, Error> {
        self.client
            .fetch(transport::domains::dns_records(fqdn, limit, offset))
            .await
    }

    pub async fn add_dns_record(
        &self,
        fqdn: &str,
        record: &DnsRecordSpec,
    ) -> Result<DnsRecordResponse, Error> {
        self.client
            .fetch(transport::domains::add_dns_record(fqdn, record))
            .await
    }

    pub async fn update_dns_record(
        &self,
        fqdn: &str,
        record_id: u64,
        record: &DnsRecordSpec,
    ) -> Result<DnsRecordResponse, Error> {
        self.client
            .fetch(transport::domains::update_dns_record(fqdn, record_id, record))
            .await
    }

    pub async fn delete_dns_record(&self, fqdn: &str, record_id: u64) -> Result<(), Error> {
        self.client
            .execute(transport::domains::delete_dns_record(fqdn, record_id))
            .await
    }

    pub async fn tlds(
        &self,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<TopLevelDomainsResponse, Error> {
        self.client.fetch(transport::domains::tlds(limit, offset)).await
    }

    pub async fn tld(&self, tld_id: u64) -> Result<TopLevelDomainResponse, Error> {
        self.client.fetch(transport::domains::tld(tld_id)).await
    }
}
