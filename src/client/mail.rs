//! Mailbox and mail quota operations.

use super::Client;
use crate::domain::{CreateMailbox, UpdateMailbox};
use crate::error::Error;
use crate::schemas::mail::{
    MailDomainInfoResponse, MailboxResponse, MailboxesResponse, QuotaResponse,
};
use crate::transport;

/// Mail operations, reached via [`Client::mail`].
pub struct Mail<'a> {
    client: &'a Client,
}

impl Client {
    pub fn mail(&self) -> Mail<'_> {
        Mail { client: self }
    }
}

impl Mail<'_> {
    /// Mailboxes across every domain on the account.
    pub async fn list(
        &self,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<MailboxesResponse, Error> {
        self.client.fetch(transport::mail::list(limit, offset)).await
    }

    /// Mailboxes under a single domain.
    pub async fn domain_mailboxes(
        &self,
        fqdn: &str,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<MailboxesResponse, Error> {
        self.client
            .fetch(transport::mail::domain_mailboxes(fqdn, limit, offset))
            .await
    }

    pub async fn get(&self, fqdn: &str, mailbox: &str) -> Result<MailboxResponse, Error> {
        self.client.fetch(transport::mail::get(fqdn, mailbox)).await
    }

    pub async fn create(
        &self,
        fqdn: &str,
        request: &CreateMailbox,
    ) -> Result<MailboxResponse, Error> {
        self.client
            .fetch(transport::mail::create(fqdn, request))
            .await
    }

    pub async fn update(
        &self,
        fqdn: &str,
        mailbox: &str,
        request: &UpdateMailbox,
    ) -> Result<MailboxResponse, Error> {
        self.client
            .fetch(transport::mail::update(fqdn, mailbox, request))
            .await
    }

    pub async fn delete(&self, fqdn: &str, mailbox: &str) -> Result<(), Error> {
        self.client
            .execute(transport::mail::delete(fqdn, mailbox))
            .await
    }

    pub async fn domain_info(&self, fqdn: &str) -> Result<MailDomainInfoResponse, Error> {
        self.client.fetch(transport::mail::domain_info(fqdn)).await
    }

    /// Points mail addressed to nonexistent mailboxes at `email`.
    pub async fn update_domain_info(
        &self,
        fqdn: &str,
        email: Option<&str>,
    ) -> Result<MailDomainInfoResponse, Error> {
        self.client
            .fetch(transport::mail::update_domain_info(fqdn, email))
            .await
    }

    pub async fn quota(&self) -> Result<QuotaResponse, Error> {
        self.client.fetch(transport::mail::quota()).await
    }

    /// Sets the account-wide quota, in megabytes.
    pub async fn set_quota(&self, total: u64) -> Result<QuotaResponse, Error> {
        self.client.fetch(transport::mail::set_quota(total)).await
    }
}
