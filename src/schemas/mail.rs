//! Mailbox and mail quota models.

use serde::Deserialize;
use uuid::Uuid;

use super::{Extra, Meta};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AutoReply {
    pub is_enabled: bool,
    pub message: String,
    pub subject: String,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SpamFilter {
    pub is_enabled: bool,
    pub action: String,
    pub forward_to: String,
    pub white_list: Vec<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ForwardingIncoming {
    pub is_enabled: bool,
    pub is_delete_messages: bool,
    pub incoming_list: Vec<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ForwardingOutgoing {
    pub is_enabled: bool,
    pub outgoing_to: String,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Mailbox {
    pub auto_reply: AutoReply,
    pub spam_filter: SpamFilter,
    pub forwarding_incoming: ForwardingIncoming,
    pub forwarding_outgoing: ForwardingOutgoing,
    pub comment: String,
    pub fqdn: String,
    pub mailbox: String,
    pub password: String,
    pub usage_space: u64,
    pub is_webmail: bool,
    pub idn_name: String,
    pub is_dovecot: bool,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MailboxResponse {
    pub response_id: Option<Uuid>,
    pub mailbox: Mailbox,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MailboxesResponse {
    pub response_id: Option<Uuid>,
    pub meta: Option<Meta>,
    pub mailboxes: Vec<Mailbox>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
/// Account-wide mail quota, in megabytes.
pub struct Quota {
    pub total: u64,
    pub used: u64,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct QuotaResponse {
    pub response_id: Option<Uuid>,
    pub quota: Quota,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MailDomainInfo {
    pub email: String,
    pub used: u64,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MailDomainInfoResponse {
    pub response_id: Option<Uuid>,
    pub domain_info: MailDomainInfo,
    #[serde(flatten)]
    pub extra: Extra,
}
