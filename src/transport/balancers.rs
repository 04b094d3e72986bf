//! Load balancer endpoints.

use serde_json::{Map, Value, json};

use super::{RequestDescriptor, set, set_opt};
use crate::domain::{BalancerRuleSpec, CreateBalancer, UpdateBalancer};

pub(crate) fn list(limit: Option<u32>, offset: Option<u32>) -> RequestDescriptor {
    RequestDescriptor::get("balancers")
        .opt_query("limit", limit)
        .opt_query("offset", offset)
}

pub(crate) fn get(balancer_id: u64) -> RequestDescriptor {
    RequestDescriptor::get(format!("balancers/{balancer_id}"))
}

pub(crate) fn create(request: &CreateBalancer) -> RequestDescriptor {
    let mut body = Map::new();
    set(&mut body, "name", &request.name);
    set(&mut body, "algo", request.algo.as_str());
    set(&mut body, "proto", request.proto.as_str());
    set(&mut body, "preset_id", request.preset_id);
    set(&mut body, "port", request.port);
    set(&mut body, "path", &request.path);
    set(&mut body, "inter", request.inter);
    set(&mut body, "timeout", request.timeout);
    set(&mut body, "fall", request.fall);
    set(&mut body, "rise", request.rise);
    set(&mut body, "is_sticky", request.is_sticky);
    set(&mut body, "is_use_proxy", request.is_use_proxy);
    set(&mut body, "is_ssl", request.is_ssl);
    set(&mut body, "is_keepalive", request.is_keepalive);
    RequestDescriptor::post("balancers").json(Value::Object(body))
}

pub(crate) fn update(balancer_id: u64, request: &UpdateBalancer) -> RequestDescriptor {
    let mut body = Map::new();
    set_opt(&mut body, "name", request.name.as_deref());
    set_opt(&mut body, "algo", request.algo.map(|a| a.as_str()));
    set_opt(&mut body, "proto", request.proto.map(|p| p.as_str()));
    set_opt(&mut body, "preset_id", request.preset_id);
    set_opt(&mut body, "port", request.port);
    set_opt(&mut body, "path", request.path.as_deref());
    set_opt(&mut body, "inter", request.inter);
    set_opt(&mut body, "timeout", request.timeout);
    set_opt(&mut body, "fall", request.fall);
    set_opt(&mut body, "rise", request.rise);
    set_opt(&mut body, "is_sticky", request.is_sticky);
    set_opt(&mut body, "is_use_proxy", request.is_use_proxy);
    set_opt(&mut body, "is_ssl", request.is_ssl);
    set_opt(&mut body, "is_keepalive", request.is_keepalive);
    RequestDescriptor::patch(format!("balancers/{balancer_id}")).json(Value::Object(body))
}

pub(crate) fn delete(balancer_id: u64) -> RequestDescriptor {
    RequestDescriptor::delete(format!("balancers/{balancer_id}"))
}

pub(crate) fn ips(balancer_id: u64) -> RequestDescriptor {
    RequestDescriptor::get(format!("balancers/{balancer_id}/ips"))
}

pub(crate) fn rules(balancer_id: u64) -> RequestDescriptor {
    RequestDescriptor::get(format!("balancers/{balancer_id}/rules"))
}

fn rule_body(rule: &BalancerRuleSpec) -> Value {
    json!({
        "balancer_proto": rule.balancer_proto.as_str(),
        "balancer_port": rule.balancer_port,
        "server_proto": rule.server_proto.as_str(),
        "server_port": rule.server_port,
    })
}

pub(crate) fn add_rule(balancer_id: u64, rule: &BalancerRuleSpec) -> RequestDescriptor {
    RequestDescriptor::post(format!("balancers/{balancer_id}/rules")).json(rule_body(rule))
}

pub(crate) fn update_rule(
    balancer_id: u64,
    rule_id: u64,
    rule: &BalancerRuleSpec,
) -> RequestDescriptor {
    RequestDescriptor::patch(format!("balancers/{balancer_id}/rules/{rule_id}"))
        .json(rule_body(rule))
}

pub(crate) fn delete_rule(balancer_id: u64, rule_id: u64) -> RequestDescriptor {
    RequestDescriptor::delete(format!("balancers/{balancer_id}/rules/{rule_id}"))
}

#[cfg(test)]
mod tests {
    use super::super::Method;
    use super::*;
    use crate::schemas::balancers::{BalancerAlgorithm, Protocol};

    #[test]
    fn create_serializes_enums_as_wire_strings() {
        let request = CreateBalancer::builder(
            "edge",
            BalancerAlgorithm::RoundRobin,
            Protocol::Http2,
            3,
        )
        .build()
        .unwrap();
        let body = create(&request).body().unwrap().clone();
        assert_eq!(body["algo"], json!("roundrobin"));
        assert_eq!(body["proto"], json!("http2"));
        assert_eq!(body["port"], json!(80));
    }

    #[test]
    fn update_omits_unset_fields() {
        let request = UpdateBalancer::builder()
            .algo(BalancerAlgorithm::LeastConnections)
            .build()
            .unwrap();
        let descriptor = update(5, &request);
        assert_eq!(descriptor.path(), "balancers/5");
        assert_eq!(descriptor.body().unwrap(), &json!({"algo": "leastconn"}));
    }

    #[test]
    fn rule_endpoints_address_the_nested_resource() {
        let rule = BalancerRuleSpec {
            balancer_proto: Protocol::Https,
            balancer_port: 443,
            server_proto: Protocol::Http,
            server_port: 8080,
        };
        let descriptor = update_rule(5, 12, &rule);
        assert_eq!(descriptor.method(), Method::Patch);
        assert_eq!(descriptor.path(), "balancers/5/rules/12");
        assert_eq!(
            descriptor.body().unwrap(),
            &json!({
                "balancer_proto": "https",
                "balancer_port": 443,
                "server_proto": "http",
                "server_port": 8080,
            })
        );

        assert_eq!(delete_rule(5, 12).method(), Method::Delete);
    }
}
