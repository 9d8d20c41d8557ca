//! Talos Kubernetes endpoints.

use super::{fetch, require};
use crate::models::{ClusterControlPlane, ClusterPool, KubernetesCluster, SuccessResponse};
use xelon_core::{Client, Context, Method, Response, Result};

const BASE_PATH: &str = "kubernetes-talos";

/// Access to `kubernetes-talos` endpoints.
#[derive(Debug, Clone, Copy)]
pub struct KubernetesService<'a> {
    client: &'a Client,
}

impl<'a> KubernetesService<'a> {
    pub(crate) const fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// List Kubernetes clusters.
    pub async fn list(&self, ctx: &Context) -> Result<(Vec<KubernetesCluster>, Response)> {
        let path = format!("{BASE_PATH}/clusters");
        fetch(self.client, ctx, Method::GET, &path).await
    }

    /// Fetch the control plane of a cluster.
    pub async fn list_control_planes(
        &self,
        ctx: &Context,
        cluster_id: &str,
    ) -> Result<(ClusterControlPlane, Response)> {
        require(cluster_id, "kubernetes cluster id")?;
        let path = format!("{BASE_PATH}/{cluster_id}/cluster-control-planes");
        fetch(self.client, ctx, Method::GET, &path).await
    }

    /// List the worker pools of a cluster.
    pub async fn list_cluster_pools(
        &self,
        ctx: &Context,
        cluster_id: &str,
    ) -> Result<(Vec<ClusterPool>, Response)> {
        require(cluster_id, "kubernetes cluster id")?;
        let path = format!("{BASE_PATH}/{cluster_id}/cluster-pools");
        fetch(self.client, ctx, Method::GET, &path).await
    }

    /// Add a worker node to a pool.
    pub async fn add_cluster_node(
        &self,
        ctx: &Context,
        cluster_id: &str,
        pool_id: &str,
    ) -> Result<(SuccessResponse, Response)> {
        require(cluster_id, "kubernetes cluster id")?;
        require(pool_id, "cluster pool id")?;
        let path = format!("{BASE_PATH}/{cluster_id}/add-node/{pool_id}");
        fetch(self.client, ctx, Method::POST, &path).await
    }

    /// Remove a worker node.
    pub async fn delete_cluster_node(
        &self,
        ctx: &Context,
        cluster_id: &str,
        node_id: &str,
    ) -> Result<(SuccessResponse, Response)> {
        require(cluster_id, "kubernetes cluster id")?;
        require(node_id, "cluster node id")?;
        let path = format!("{BASE_PATH}/{cluster_id}/delete-node/{node_id}");
        fetch(self.client, ctx, Method::DELETE, &path).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::setup;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, ResponseTemplate};

    #[tokio::test]
    async fn list_clusters() {
        let (server, client) = setup().await;
        Mock::given(method("GET"))
            .and(path("/api/kubernetes-talos/clusters"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
                "clusterIdentifier": "k8s-1",
                "name": "prod",
                "health": {"health": "healthy", "lastCheckingData": "2024-05-01 10:00:00"}
            }])))
            .mount(&server)
            .await;

        let (clusters, _) = KubernetesService::new(&client)
            .list(&Context::background())
            .await
            .unwrap();
        assert_eq!(clusters[0].id.as_deref(), Some("k8s-1"));
        assert_eq!(
            clusters[0].health.as_ref().and_then(|h| h.health.as_deref()),
            Some("healthy")
        );
    }

    #[tokio::test]
    async fn control_plane_nodes() {
        let (server, client) = setup().await;
        Mock::given(method("GET"))
            .and(path("/api/kubernetes-talos/k8s-1/cluster-control-planes"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "control_plane_cpu": 2,
                "control_plane_ram": 4,
                "nodes": [{"identifier": "n-1", "localvmid": "vm-1", "name": "cp-1"}]
            })))
            .mount(&server)
            .await;

        let (plane, _) = KubernetesService::new(&client)
            .list_control_planes(&Context::background(), "k8s-1")
            .await
            .unwrap();
        assert_eq!(plane.cpu_cores, Some(2));
        assert_eq!(plane.nodes[0].local_vm_id.as_deref(), Some("vm-1"));
    }

    #[tokio::test]
    async fn node_actions_return_confirmation() {
        let (server, client) = setup().await;
        Mock::given(method("POST"))
            .and(path("/api/kubernetes-talos/k8s-1/add-node/pool-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": "Node added"})))
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/api/kubernetes-talos/k8s-1/delete-node/n-4"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"success": "Node deleted"})),
            )
            .mount(&server)
            .await;

        let kubernetes = KubernetesService::new(&client);
        let ctx = Context::background();
        let (added, _) = kubernetes.add_cluster_node(&ctx, "k8s-1", "pool-1").await.unwrap();
        assert_eq!(added.success, "Node added");
        let (deleted, _) = kubernetes.delete_cluster_node(&ctx, "k8s-1", "n-4").await.unwrap();
        assert_eq!(deleted.success, "Node deleted");
    }
}
