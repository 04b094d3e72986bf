//! Kubernetes cluster operations.

use super::Client;
use crate::domain::CreateCluster;
use crate::domain::request::{check_name, check_text};
use crate::error::Error;
use crate::schemas::kubernetes::{
    ClusterDeletion, ClusterResourcesResponse, ClusterResponse, ClustersResponse,
    K8sPresetsResponse, K8sVersionsResponse, NetworkDriversResponse, NodeGroupResponse,
    NodeGroupsResponse, NodesResponse,
};
use crate::transport;

/// Kubernetes cluster operations, reached via [`Client::kubernetes`].
pub struct Kubernetes<'a> {
    client: &'a Client,
}

impl Client {
    pub fn kubernetes(&self) -> Kubernetes<'_> {
        Kubernetes { client: self }
    }
}

impl Kubernetes<'_> {
    pub async fn list(
        &self,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<ClustersResponse, Error> {
        self.client
            .fetch(transport::kubernetes::list(limit, offset))
            .await
    }

    pub async fn get(&self, cluster_id: u64) -> Result<ClusterResponse, Error> {
        self.client
            .fetch(transport::kubernetes::get(cluster_id))
            .await
    }

    pub async fn create(&self, request: &CreateCluster) -> Result<ClusterResponse, Error> {
        self.client
            .fetch(transport::kubernetes::create(request))
            .await
    }

    pub async fn update(&self, cluster_id: u64, description: &str) -> Result<ClusterResponse, Error> {
        check_text("description", description)?;
        self.client
            .fetch(transport::kubernetes::update(cluster_id, description))
            .await
    }

    /// Aggregate node/core/memory/pod usage across the cluster.
    pub async fn resources(&self, cluster_id: u64) -> Result<ClusterResourcesResponse, Error> {
        self.client
            .fetch(transport::kubernetes::resources(cluster_id))
            .await
    }

    /// Fetches the cluster's kubeconfig as the raw YAML document.
    pub async fn kubeconfig(&self, cluster_id: u64) -> Result<String, Error> {
        let (_, response) = self
            .client
            .dispatch(transport::kubernetes::kubeconfig(cluster_id))
            .await?;
        Ok(response.body)
    }

    /// Requests cluster deletion.
    ///
    /// A 204 response means the cluster is gone. A 200 response means the
    /// service wants confirmation: the returned hash plus the one-time code
    /// sent out-of-band go to [`Kubernetes::confirm_delete`].
    pub async fn delete(&self, cluster_id: u64) -> Result<ClusterDeletion, Error> {
        let (descriptor, response) = self
            .client
            .dispatch(transport::kubernetes::delete(cluster_id))
            .await?;
        if response.status == 204 {
            Ok(ClusterDeletion::Deleted)
        } else {
            super::decode(descriptor, response).map(ClusterDeletion::ConfirmationRequired)
        }
    }

    /// Replays the delete with the confirmation hash and one-time code.
    pub async fn confirm_delete(&self, cluster_id: u64, hash: &str, code: u32) -> Result<(), Error> {
        self.client
            .execute(transport::kubernetes::confirm_delete(cluster_id, hash, code))
            .await
    }

    pub async fn node_groups(&self, cluster_id: u64) -> Result<NodeGroupsResponse, Error> {
        self.client
            .fetch(transport::kubernetes::node_groups(cluster_id))
            .await
    }

    pub async fn node_group(
        &self,
        cluster_id: u64,
        group_id: u64,
    ) -> Result<NodeGroupResponse, Error> {
        self.client
            .fetch(transport::kubernetes::node_group(cluster_id, group_id))
            .await
    }

    pub async fn create_node_group(
        &self,
        cluster_id: u64,
        name: &str,
        preset_id: u64,
        node_count: u32,
    ) -> Result<NodeGroupResponse, Error> {
        check_name(name)?;
        self.client
            .fetch(transport::kubernetes::create_node_group(
                cluster_id, name, preset_id, node_count,
            ))
            .await
    }

    pub async fn delete_node_group(&self, cluster_id: u64, group_id: u64) -> Result<(), Error> {
        self.client
            .execute(transport::kubernetes::delete_node_group(cluster_id, group_id))
            .await
    }

    pub async fn nodes(&self, cluster_id: u64) -> Result<NodesResponse, Error> {
        self.client
            .fetch(transport::kubernetes::nodes(cluster_id))
            .await
    }

    pub async fn delete_node(&self, cluster_id: u64, node_id: u64) -> Result<(), Error> {
        self.client
            .execute(transport::kubernetes::delete_node(cluster_id, node_id))
            .await
    }

    /// Kubernetes versions available for new clusters.
    pub async fn versions(&self) -> Result<K8sVersionsResponse, Error> {
        self.client.fetch(transport::kubernetes::versions()).await
    }

    pub async fn network_drivers(&self) -> Result<NetworkDriversResponse, Error> {
        self.client
            .fetch(transport::kubernetes::network_drivers())
            .await
    }

    pub async fn presets(&self) -> Result<K8sPresetsResponse, Error> {
        self.client.fetch(transport::kubernetes::presets()).await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::client::testing::{FakeTransport, make_client};
    use crate::error::Error;
    use crate::schemas::kubernetes::ClusterDeletion;
    use crate::transport::Method;

    #[tokio::test]
    async fn delete_with_204_reports_deleted() {
        let transport = FakeTransport::new(204, String::new());
        let client = make_client(transport);
        let outcome = client.kubernetes().delete(7).await.unwrap();
        assert_eq!(outcome, ClusterDeletion::Deleted);
    }

    #[tokio::test]
    async fn delete_with_200_surfaces_the_confirmation_hash() {
        let transport = FakeTransport::new(
            200,
            json!({
                "response_id": null,
                "cluster_delete": {"hash": "a1b2c3"},
            })
            .to_string(),
        );
        let client = make_client(transport.clone());

        let outcome = client.kubernetes().delete(7).await.unwrap();
        let confirmation = match outcome {
            ClusterDeletion::ConfirmationRequired(response) => response.cluster_delete,
            other => panic!("expected confirmation, got {other:?}"),
        };
        assert_eq!(confirmation.hash, "a1b2c3");

        client
            .kubernetes()
            .confirm_delete(7, &confirmation.hash, 123456)
            .await
            .unwrap();
        let sent = transport.last_request();
        assert_eq!(sent.method, Method::Delete);
        assert_eq!(sent.url.path(), "/api/v1/k8s/clusters/7");
        assert_eq!(sent.url.query(), Some("hash=a1b2c3&code=123456"));
    }

    #[tokio::test]
    async fn kubeconfig_returns_the_raw_document() {
        let yaml = "apiVersion: v1\nkind: Config\nclusters: []\n";
        let transport = FakeTransport::new(200, yaml.to_owned());
        let client = make_client(transport.clone());

        let config = client.kubernetes().kubeconfig(7).await.unwrap();
        assert_eq!(config, yaml);
        let sent = transport.last_request();
        assert_eq!(sent.url.path(), "/api/v1/k8s/clusters/7/kubeconfig");
    }

    #[tokio::test]
    async fn cluster_resources_decode_per_axis_usage() {
        let transport = FakeTransport::new(
            200,
            json!({
                "response_id": null,
                "resources": {
                    "nodes": 3,
                    "cores": {"requested": 6, "allocatable": 12, "capacity": 12, "used": 4},
                    "memory": {"requested": 8192, "allocatable": 16384, "capacity": 16384},
                    "pods": {"capacity": 330, "used": 41},
                },
            })
            .to_string(),
        );
        let client = make_client(transport);

        let usage = client.kubernetes().resources(7).await.unwrap().resources;
        assert_eq!(usage.nodes, 3);
        assert_eq!(usage.cores.used, 4);
        // Axes the service omits fall back to zero.
        assert_eq!(usage.memory.used, 0);
        assert_eq!(usage.pods.capacity, 330);
    }

    #[tokio::test]
    async fn overlong_description_never_reaches_the_wire() {
        let transport = FakeTransport::new(200, String::new());
        let client = make_client(transport.clone());

        let err = client
            .kubernetes()
            .update(7, &"x".repeat(300))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert!(transport.requests().is_empty());
    }
}
