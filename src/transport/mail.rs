//! Mailbox and mail quota endpoints.

use serde_json::{Map, Value, json};

use super::{RequestDescriptor, set, set_opt};
use crate::domain::{CreateMailbox, UpdateMailbox};

pub(crate) fn list(limit: Option<u32>, offset: Option<u32>) -> RequestDescriptor {
    RequestDescriptor::get("mail")
        .opt_query("limit", limit)
        .opt_query("offset", offset)
}

pub(crate) fn domain_mailboxes(
    fqdn: &str,
    limit: Option<u32>,
    offset: Option<u32>,
) -> RequestDescriptor {
    RequestDescriptor::get(format!("mail/{fqdn}"))
        .opt_query("limit", limit)
        .opt_query("offset", offset)
}

pub(crate) fn get(fqdn: &str, mailbox: &str) -> RequestDescriptor {
    RequestDescriptor::get(format!("mail/domains/{fqdn}/mailboxes/{mailbox}"))
}

pub(crate) fn create(fqdn: &str, request: &CreateMailbox) -> RequestDescriptor {
    let mut body = Map::new();
    set(&mut body, "mailbox", &request.mailbox);
    set(&mut body, "password", &request.password);
    set_opt(&mut body, "comment", request.comment.as_deref());
    RequestDescriptor::post(format!("mail/domains/{fqdn}")).json(Value::Object(body))
}

pub(crate) fn update(fqdn: &str, mailbox: &str, request: &UpdateMailbox) -> RequestDescriptor {
    let mut body = Map::new();
    set_opt(&mut body, "password", request.password.as_deref());
    set_opt(&mut body, "comment", request.comment.as_deref());
    RequestDescriptor::patch(format!("mail/domains/{fqdn}/mailboxes/{mailbox}"))
        .json(Value::Object(body))
}

pub(crate) fn delete(fqdn: &str, mailbox: &str) -> RequestDescriptor {
    RequestDescriptor::delete(format!("mail/domains/{fqdn}/mailboxes/{mailbox}"))
}

pub(crate) fn domain_info(fqdn: &str) -> RequestDescriptor {
    RequestDescriptor::get(format!("mail/domains/{fqdn}/info"))
}

/// `email` is the address that collects mail sent to nonexistent mailboxes.
pub(crate) fn update_domain_info(fqdn: &str, email: Option<&str>) -> RequestDescriptor {
    let mut body = Map::new();
    set_opt(&mut body, "email", email);
    RequestDescriptor::patch(format!("mail/domains/{fqdn}/info")).json(Value::Object(body))
}

pub(crate) fn quota() -> RequestDescriptor {
    RequestDescriptor::get("mail/quota")
}

pub(crate) fn set_quota(total: u64) -> RequestDescriptor {
    RequestDescriptor::patch("mail/quota").json(json!({"total": total}))
}

#[cfg(test)]
mod tests {
    use super::super::Method;
    use super::*;

    #[test]
    fn create_posts_to_the_domain_path() {
        let request = CreateMailbox::new("info", "s3cret").unwrap();
        let descriptor = create("example.com", &request);
        assert_eq!(descriptor.method(), Method::Post);
        assert_eq!(descriptor.path(), "mail/domains/example.com");
        assert_eq!(
            descriptor.body().unwrap(),
            &json!({"mailbox": "info", "password": "s3cret"})
        );
    }

    #[test]
    fn domain_info_lives_under_the_info_suffix() {
        assert_eq!(domain_info("example.com").path(), "mail/domains/example.com/info");
        let descriptor = update_domain_info("example.com", Some("catchall@example.com"));
        assert_eq!(descriptor.path(), "mail/domains/example.com/info");
        assert_eq!(
            descriptor.body().unwrap(),
            &json!({"email": "catchall@example.com"})
        );
    }

    #[test]
    fn quota_update_patches_the_total() {
        let descriptor = set_quota(2048);
        assert_eq!(descriptor.path(), "mail/quota");
        assert_eq!(descriptor.body().unwrap(), &json!({"total": 2048}));
    }
}
