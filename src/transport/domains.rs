//! Domain and DNS endpoints.

use std::net::IpAddr;

use serde_json::{Map, Value};

use super::{RequestDescriptor, set, set_opt};
use crate::domain::DnsRecordSpec;

pub(crate) fn list(limit: Option<u32>, offset: Option<u32>) -> RequestDescriptor {
    RequestDescriptor::get("domains")
        .opt_query("limit", limit)
        .opt_query("offset", offset)
}

pub(crate) fn get(fqdn: &str) -> RequestDescriptor {
    RequestDescriptor::get(format!("domains/{fqdn}"))
}

pub(crate) fn update(
    fqdn: &str,
    linked_ip: Option<IpAddr>,
    is_autoprolong_enabled: Option<bool>,
) -> RequestDescriptor {
    let mut body = Map::new();
    set_opt(&mut body, "linked_ip", linked_ip.map(|ip| ip.to_string()));
    set_opt(&mut body, "is_autoprolong_enabled", is_autoprolong_enabled);
    RequestDescriptor::patch(format!("domains/{fqdn}")).json(Value::Object(body))
}

pub(crate) fn delete(fqdn: &str) -> RequestDescriptor {
    RequestDescriptor::delete(format!("domains/{fqdn}"))
}

pub(crate) fn check_availability(fqdn: &str) -> RequestDescriptor {
    RequestDescriptor::get(format!("check-domain/{fqdn}"))
}

pub(crate) fn dns_records(fqdn: &str, limit: Option<u32>, offset: Option<u32>) -> RequestDescriptor {
    RequestDescriptor::get(format!("domains/{fqdn}/dns-records"))
        .opt_query("limit", limit)
        .opt_query("offset", offset)
}

fn record_body(record: &DnsRecordSpec) -> Value {
    let mut body = Map::new();
    set(&mut body, "type", record.record_type.as_str());
    set(&mut body, "value", &record.value);
    set_opt(&mut body, "priority", record.priority);
    set_opt(&mut body, "subdomain", record.subdomain.as_deref());
    Value::Object(body)
}

pub(crate) fn add_dns_record(fqdn: &str, record: &DnsRecordSpec) -> RequestDescriptor {
    RequestDescriptor::post(format!("domains/{fqdn}/dns-records")).json(record_body(record))
}

pub(crate) fn update_dns_record(
    fqdn: &str,
    record_id: u64,
    record: &DnsRecordSpec,
) -> RequestDescriptor {
    RequestDescriptor::patch(format!("domains/{fqdn}/dns-records/{record_id}"))
        .json(record_body(record))
}

pub(crate) fn delete_dns_record(fqdn: &str, record_id: u64) -> RequestDescriptor {
    RequestDescriptor::delete(format!("domains/{fqdn}/dns-records/{record_id}"))
}

pub(crate) fn tlds(limit: Option<u32>, offset: Option<u32>) -> RequestDescriptor {
    RequestDescriptor::get("tlds")
        .opt_query("limit", limit)
        .opt_query("offset", offset)
}

pub(crate) fn tld(tld_id: u64) -> RequestDescriptor {
    RequestDescriptor::get(format!("tlds/{tld_id}"))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::super::Method;
    use super::*;
    use crate::domain::DnsRecordType;

    #[test]
    fn mx_record_carries_priority() {
        let record = DnsRecordSpec::new(DnsRecordType::Mx, "mail.example.com")
            .unwrap()
            .priority(10);
        let descriptor = add_dns_record("example.com", &record);
        assert_eq!(descriptor.path(), "domains/example.com/dns-records");
        assert_eq!(
            descriptor.body().unwrap(),
            &json!({"type": "MX", "value": "mail.example.com", "priority": 10})
        );
    }

    #[test]
    fn a_record_without_extras_sends_type_and_value_only() {
        let record = DnsRecordSpec::new(DnsRecordType::A, "203.0.113.7").unwrap();
        let descriptor = update_dns_record("example.com", 15, &record);
        assert_eq!(descriptor.method(), Method::Patch);
        assert_eq!(descriptor.path(), "domains/example.com/dns-records/15");
        assert_eq!(
            descriptor.body().unwrap(),
            &json!({"type": "A", "value": "203.0.113.7"})
        );
    }

    #[test]
    fn availability_check_uses_its_own_prefix() {
        assert_eq!(
            check_availability("example.dev").path(),
            "check-domain/example.dev"
        );
    }
}
