//! Kubernetes cluster endpoints.

use serde_json::{Map, Value, json};

use super::{RequestDescriptor, set, set_opt};
use crate::domain::CreateCluster;

pub(crate) fn list(limit: Option<u32>, offset: Option<u32>) -> RequestDescriptor {
    RequestDescriptor::get("k8s/clusters")
        .opt_query("limit", limit)
        .opt_query("offset", offset)
}

pub(crate) fn get(cluster_id: u64) -> RequestDescriptor {
    RequestDescriptor::get(format!("k8s/clusters/{cluster_id}"))
}

pub(crate) fn create(request: &CreateCluster) -> RequestDescriptor {
    let mut body = Map::new();
    set(&mut body, "name", &request.name);
    set(&mut body, "ha", request.ha);
    set(&mut body, "k8s_version", &request.k8s_version);
    set(&mut body, "network_driver", &request.network_driver);
    set(&mut body, "ingress", request.ingress);
    set(&mut body, "preset_id", request.preset_id);
    set_opt(&mut body, "description", request.description.as_deref());
    let groups: Vec<Value> = request
        .worker_groups
        .iter()
        .map(|group| {
            json!({
                "name": group.name,
                "preset_id": group.preset_id,
                "node_count": group.node_count,
            })
        })
        .collect();
    set(&mut body, "worker_groups", groups);
    RequestDescriptor::post("k8s/clusters").json(Value::Object(body))
}

pub(crate) fn update(cluster_id: u64, description: &str) -> RequestDescriptor {
    RequestDescriptor::patch(format!("k8s/clusters/{cluster_id}"))
        .json(json!({"description": description}))
}

pub(crate) fn delete(cluster_id: u64) -> RequestDescriptor {
    RequestDescriptor::delete(format!("k8s/clusters/{cluster_id}"))
}

/// Replays a delete with the confirmation hash and one-time code.
pub(crate) fn confirm_delete(cluster_id: u64, hash: &str, code: u32) -> RequestDescriptor {
    RequestDescriptor::delete(format!("k8s/clusters/{cluster_id}"))
        .query("hash", hash)
        .query("code", code)
}

pub(crate) fn resources(cluster_id: u64) -> RequestDescriptor {
    RequestDescriptor::get(format!("k8s/clusters/{cluster_id}/resources"))
}

/// The response body is a raw YAML document, not a JSON envelope.
pub(crate) fn kubeconfig(cluster_id: u64) -> RequestDescriptor {
    RequestDescriptor::get(format!("k8s/clusters/{cluster_id}/kubeconfig"))
}

pub(crate) fn node_groups(cluster_id: u64) -> RequestDescriptor {
    RequestDescriptor::get(format!("k8s/clusters/{cluster_id}/groups"))
}

pub(crate) fn node_group(cluster_id: u64, group_id: u64) -> RequestDescriptor {
    RequestDescriptor::get(format!("k8s/clusters/{cluster_id}/groups/{group_id}"))
}

pub(crate) fn create_node_group(
    cluster_id: u64,
    name: &str,
    preset_id: u64,
    node_count: u32,
) -> RequestDescriptor {
    RequestDescriptor::post(format!("k8s/clusters/{cluster_id}/groups")).json(json!({
        "name": name,
        "preset_id": preset_id,
        "node_count": node_count,
    }))
}

pub(crate) fn delete_node_group(cluster_id: u64, group_id: u64) -> RequestDescriptor {
    RequestDescriptor::delete(format!("k8s/clusters/{cluster_id}/groups/{group_id}"))
}

pub(crate) fn nodes(cluster_id: u64) -> RequestDescriptor {
    RequestDescriptor::get(format!("k8s/clusters/{cluster_id}/nodes"))
}

pub(crate) fn delete_node(cluster_id: u64, node_id: u64) -> RequestDescriptor {
    RequestDescriptor::delete(format!("k8s/clusters/{cluster_id}/nodes/{node_id}"))
}

pub(crate) fn versions() -> RequestDescriptor {
    RequestDescriptor::get("k8s/k8s_versions")
}

pub(crate) fn network_drivers() -> RequestDescriptor {
    RequestDescriptor::get("k8s/network_drivers")
}

pub(crate) fn presets() -> RequestDescriptor {
    RequestDescriptor::get("presets/k8s")
}

#[cfg(test)]
mod tests {
    use super::super::Method;
    use super::*;
    use crate::domain::WorkerGroup;

    #[test]
    fn create_lists_worker_groups_verbatim() {
        let request = CreateCluster::builder("prod", "1.28", "flannel", 7)
            .ha(true)
            .worker_groups(vec![WorkerGroup {
                name: "general".to_owned(),
                preset_id: 9,
                node_count: 3,
            }])
            .build()
            .unwrap();
        let body = create(&request).body().unwrap().clone();
        assert_eq!(body["ha"], json!(true));
        assert_eq!(body["ingress"], json!(true));
        assert_eq!(
            body["worker_groups"],
            json!([{"name": "general", "preset_id": 9, "node_count": 3}])
        );
        assert!(body.get("description").is_none());
    }

    #[test]
    fn confirm_delete_carries_hash_and_code_in_the_query() {
        let descriptor = confirm_delete(4, "a1b2c3", 123456);
        assert_eq!(descriptor.method(), Method::Delete);
        assert_eq!(descriptor.path(), "k8s/clusters/4");
        assert_eq!(
            descriptor.query_pairs(),
            &[("hash", "a1b2c3".to_owned()), ("code", "123456".to_owned())]
        );
    }

    #[test]
    fn catalog_endpoints_have_fixed_paths() {
        assert_eq!(versions().path(), "k8s/k8s_versions");
        assert_eq!(network_drivers().path(), "k8s/network_drivers");
        assert_eq!(presets().path(), "presets/k8s");
    }

    #[test]
    fn cluster_introspection_lives_under_the_cluster() {
        assert_eq!(resources(4).path(), "k8s/clusters/4/resources");
        assert_eq!(kubeconfig(4).path(), "k8s/clusters/4/kubeconfig");
        assert_eq!(kubeconfig(4).method(), Method::Get);
    }
}
