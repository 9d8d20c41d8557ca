//! Load balancer cluster endpoints.
//!
//! Unlike most collections these endpoints answer with bare JSON bodies and
//! carry no pagination metadata.

use super::{execute, fetch, require, submit};
use crate::models::{
    ApiResponse, LoadBalancerCluster, LoadBalancerClusterCreateRequest,
    LoadBalancerClusterCreateResponse, LoadBalancerClusterForwardingRule,
    LoadBalancerClusterForwardingRuleUpdateRequest, LoadBalancerClusterVirtualIp,
};
use xelon_core::{Client, Context, Error, Method, Response, Result};

const BASE_PATH: &str = "load-balancer-clusters";

/// Access to `load-balancer-clusters` endpoints.
#[derive(Debug, Clone, Copy)]
pub struct LoadBalancerClustersService<'a> {
    client: &'a Client,
}

impl<'a> LoadBalancerClustersService<'a> {
    pub(crate) const fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// List load balancer clusters.
    pub async fn list(&self, ctx: &Context) -> Result<(Vec<LoadBalancerCluster>, Response)> {
        fetch(self.client, ctx, Method::GET, BASE_PATH).await
    }

    /// Fetch a load balancer cluster.
    pub async fn get(
        &self,
        ctx: &Context,
        cluster_id: &str,
    ) -> Result<(LoadBalancerCluster, Response)> {
        require(cluster_id, "load balancer cluster id")?;
        let path = format!("{BASE_PATH}/{cluster_id}");
        fetch(self.client, ctx, Method::GET, &path).await
    }

    /// Request a new load balancer cluster.
    pub async fn create(
        &self,
        ctx: &Context,
        request: &LoadBalancerClusterCreateRequest,
    ) -> Result<(LoadBalancerClusterCreateResponse, Response)> {
        submit(self.client, ctx, Method::POST, BASE_PATH, request).await
    }

    /// Delete a load balancer cluster.
    pub async fn delete(&self, ctx: &Context, cluster_id: &str) -> Result<Response> {
        require(cluster_id, "load balancer cluster id")?;
        let path = format!("{BASE_PATH}/{cluster_id}");
        execute(self.client, ctx, Method::DELETE, &path).await
    }

    /// List the virtual IPs of a cluster.
    pub async fn list_virtual_ips(
        &self,
        ctx: &Context,
        cluster_id: &str,
    ) -> Result<(Vec<LoadBalancerClusterVirtualIp>, Response)> {
        require(cluster_id, "load balancer cluster id")?;
        let path = format!("{BASE_PATH}/{cluster_id}/virtual-ips");
        fetch(self.client, ctx, Method::GET, &path).await
    }

    /// Fetch one virtual IP.
    pub async fn get_virtual_ip(
        &self,
        ctx: &Context,
        cluster_id: &str,
        virtual_ip_id: &str,
    ) -> Result<(LoadBalancerClusterVirtualIp, Response)> {
        require(cluster_id, "load balancer cluster id")?;
        require(virtual_ip_id, "virtual ip id")?;
        let path = format!("{BASE_PATH}/{cluster_id}/virtual-ips/{virtual_ip_id}");
        fetch(self.client, ctx, Method::GET, &path).await
    }

    /// List forwarding rules of a virtual IP.
    pub async fn list_forwarding_rules(
        &self,
        ctx: &Context,
        cluster_id: &str,
        virtual_ip_id: &str,
    ) -> Result<(Vec<LoadBalancerClusterForwardingRule>, Response)> {
        require(cluster_id, "load balancer cluster id")?;
        require(virtual_ip_id, "virtual ip id")?;
        let path = format!("{BASE_PATH}/{cluster_id}/virtual-ips/{virtual_ip_id}/forwarding-rules");
        fetch(self.client, ctx, Method::GET, &path).await
    }

    /// Add forwarding rules to a virtual IP in one call.
    pub async fn create_forwarding_rules(
        &self,
        ctx: &Context,
        cluster_id: &str,
        virtual_ip_id: &str,
        rules: &[LoadBalancerClusterForwardingRule],
    ) -> Result<(Vec<LoadBalancerClusterForwardingRule>, Response)> {
        require(cluster_id, "load balancer cluster id")?;
        require(virtual_ip_id, "virtual ip id")?;
        if rules.is_empty() {
            return Err(Error::EmptyPayload("forwarding rules"));
        }
        let path = format!("{BASE_PATH}/{cluster_id}/virtual-ips/{virtual_ip_id}/forwarding-rules");
        submit(self.client, ctx, Method::POST, &path, rules).await
    }

    /// Change port or PROXY protocol of a forwarding rule.
    pub async fn update_forwarding_rule(
        &self,
        ctx: &Context,
        cluster_id: &str,
        virtual_ip_id: &str,
        rule_id: &str,
        request: &LoadBalancerClusterForwardingRuleUpdateRequest,
    ) -> Result<(ApiResponse, Response)> {
        require(cluster_id, "load balancer cluster id")?;
        require(virtual_ip_id, "virtual ip id")?;
        require(rule_id, "forwarding rule id")?;
        let path = format!(
            "{BASE_PATH}/{cluster_id}/virtual-ips/{virtual_ip_id}/forwarding-rules/{rule_id}"
        );
        submit(self.client, ctx, Method::PATCH, &path, request).await
    }

    /// Remove a forwarding rule.
    pub async fn delete_forwarding_rule(
        &self,
        ctx: &Context,
        cluster_id: &str,
        virtual_ip_id: &str,
        rule_id: &str,
    ) -> Result<Response> {
        require(cluster_id, "load balancer cluster id")?;
        require(virtual_ip_id, "virtual ip id")?;
        require(rule_id, "forwarding rule id")?;
        let path = format!(
            "{BASE_PATH}/{cluster_id}/virtual-ips/{virtual_ip_id}/forwarding-rules/{rule_id}"
        );
        execute(self.client, ctx, Method::DELETE, &path).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        LoadBalancerClusterForwardingRuleBackend, LoadBalancerClusterForwardingRuleFrontend,
        LoadBalancerClusterNodesSpec,
    };
    use crate::services::testing::setup;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, ResponseTemplate};

    #[tokio::test]
    async fn list_decodes_bare_array() {
        let (server, client) = setup().await;
        Mock::given(method("GET"))
            .and(path("/api/load-balancer-clusters"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"identifier": "lbc-1", "name": "ingress", "nodes": ["n1", "n2"], "hv_system": {"identifier": "c-1"}}
            ])))
            .mount(&server)
            .await;

        let (clusters, response) = LoadBalancerClustersService::new(&client)
            .list(&Context::background())
            .await
            .unwrap();
        assert_eq!(clusters[0].nodes, vec!["n1", "n2"]);
        assert_eq!(
            clusters[0].cloud.as_ref().and_then(|cloud| cloud.id.as_deref()),
            Some("c-1")
        );
        assert!(response.meta().is_none());
    }

    #[tokio::test]
    async fn create_returns_identifier() {
        let (server, client) = setup().await;
        Mock::given(method("POST"))
            .and(path("/api/load-balancer-clusters"))
            .respond_with(
                ResponseTemplate::new(202)
                    .set_body_json(json!({"identifier": "lbc-2", "status": "provisioning"})),
            )
            .mount(&server)
            .await;

        let request = LoadBalancerClusterCreateRequest {
            cloud_id: 1,
            kubernetes_cluster_id: "k8s-1".to_string(),
            name: "ingress".to_string(),
            nodes_spec: LoadBalancerClusterNodesSpec {
                cpu_core_count: 2,
                disk: 10,
                memory: 2,
            },
        };
        let (created, _) = LoadBalancerClustersService::new(&client)
            .create(&Context::background(), &request)
            .await
            .unwrap();
        assert_eq!(created.id, "lbc-2");
        assert_eq!(created.status, "provisioning");
    }

    #[tokio::test]
    async fn create_forwarding_rules_posts_array() {
        let (server, client) = setup().await;
        let body = json!([{"backend": {"port": 8080, "proxy_protocol": 2}, "frontend": {"port": 80}}]);
        Mock::given(method("POST"))
            .and(path("/api/load-balancer-clusters/lbc-1/virtual-ips/vip-1/forwarding-rules"))
            .and(body_json(body.clone()))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&server)
            .await;

        let rules = [LoadBalancerClusterForwardingRule {
            backend: Some(LoadBalancerClusterForwardingRuleBackend {
                id: None,
                port: Some(8080),
                proxy_protocol: 2,
            }),
            frontend: Some(LoadBalancerClusterForwardingRuleFrontend {
                id: None,
                port: Some(80),
            }),
        }];
        let (created, _) = LoadBalancerClustersService::new(&client)
            .create_forwarding_rules(&Context::background(), "lbc-1", "vip-1", &rules)
            .await
            .unwrap();
        assert_eq!(created, rules.to_vec());
    }

    #[tokio::test]
    async fn empty_rule_set_is_rejected() {
        let (_server, client) = setup().await;
        let err = LoadBalancerClustersService::new(&client)
            .create_forwarding_rules(&Context::background(), "lbc-1", "vip-1", &[])
            .await
            .unwrap_err();
        assert!(matches!(err, Error::EmptyPayload("forwarding rules")));
    }

    #[tokio::test]
    async fn update_rule_patches() {
        let (server, client) = setup().await;
        Mock::given(method("PATCH"))
            .and(path(
                "/api/load-balancer-clusters/lbc-1/virtual-ips/vip-1/forwarding-rules/fr-1",
            ))
            .and(body_json(json!({"port": 9090})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "updated"})))
            .mount(&server)
            .await;

        let request = LoadBalancerClusterForwardingRuleUpdateRequest {
            port: Some(9090),
            proxy_protocol: None,
        };
        let (body, _) = LoadBalancerClustersService::new(&client)
            .update_forwarding_rule(&Context::background(), "lbc-1", "vip-1", "fr-1", &request)
            .await
            .unwrap();
        assert_eq!(body.message.as_deref(), Some("updated"));
    }
}
