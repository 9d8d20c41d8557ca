//! Load balancer endpoints.

use super::{execute, execute_with, fetch, list, require, submit_data};
use crate::models::{
    DataRoot, LoadBalancer, LoadBalancerAssignedDevice, LoadBalancerCreateRequest,
    LoadBalancerForwardingRule, LoadBalancerUpdateAssignedDevicesRequest,
    LoadBalancerUpdateRequest, SearchListOptions,
};
use xelon_core::{Client, Context, Error, Method, Response, Result};

const BASE_PATH: &str = "load-balancers";

fn require_rule_id(rule_id: u64) -> Result<()> {
    if rule_id == 0 {
        return Err(Error::EmptyArgument("forwarding rule id"));
    }
    Ok(())
}

/// Access to `load-balancers` endpoints.
#[derive(Debug, Clone, Copy)]
pub struct LoadBalancersService<'a> {
    client: &'a Client,
}

impl<'a> LoadBalancersService<'a> {
    pub(crate) const fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// List load balancers.
    pub async fn list(
        &self,
        ctx: &Context,
        options: Option<&SearchListOptions>,
    ) -> Result<(Vec<LoadBalancer>, Response)> {
        list(self.client, ctx, BASE_PATH, options).await
    }

    /// Fetch a load balancer.
    pub async fn get(
        &self,
        ctx: &Context,
        load_balancer_id: &str,
    ) -> Result<(LoadBalancer, Response)> {
        require(load_balancer_id, "load balancer id")?;
        let path = format!("{BASE_PATH}/{load_balancer_id}");
        fetch(self.client, ctx, Method::GET, &path).await
    }

    /// Deploy a load balancer.
    pub async fn create(
        &self,
        ctx: &Context,
        request: &LoadBalancerCreateRequest,
    ) -> Result<(LoadBalancer, Response)> {
        submit_data(self.client, ctx, Method::POST, BASE_PATH, request).await
    }

    /// Rename a load balancer.
    pub async fn update(
        &self,
        ctx: &Context,
        load_balancer_id: &str,
        request: &LoadBalancerUpdateRequest,
    ) -> Result<(LoadBalancer, Response)> {
        require(load_balancer_id, "load balancer id")?;
        let path = format!("{BASE_PATH}/{load_balancer_id}");
        submit_data(self.client, ctx, Method::PUT, &path, request).await
    }

    /// Delete a load balancer.
    pub async fn delete(&self, ctx: &Context, load_balancer_id: &str) -> Result<Response> {
        require(load_balancer_id, "load balancer id")?;
        let path = format!("{BASE_PATH}/{load_balancer_id}");
        execute(self.client, ctx, Method::DELETE, &path).await
    }

    /// List devices on `network_id` that can be put behind the load balancer.
    pub async fn list_assigned_devices(
        &self,
        ctx: &Context,
        load_balancer_id: &str,
        network_id: &str,
    ) -> Result<(Vec<LoadBalancerAssignedDevice>, Response)> {
        require(load_balancer_id, "load balancer id")?;
        require(network_id, "network id")?;
        let path = format!("{BASE_PATH}/{load_balancer_id}/assignable-devices/{network_id}");
        let (root, response) =
            fetch::<DataRoot<Vec<LoadBalancerAssignedDevice>>>(self.client, ctx, Method::GET, &path)
                .await?;
        Ok((root.into_data(), response))
    }

    /// Replace the devices behind the load balancer.
    pub async fn update_assigned_devices(
        &self,
        ctx: &Context,
        load_balancer_id: &str,
        request: &LoadBalancerUpdateAssignedDevicesRequest,
    ) -> Result<Response> {
        require(load_balancer_id, "load balancer id")?;
        let path = format!("{BASE_PATH}/{load_balancer_id}/assigned-devices");
        execute_with(self.client, ctx, Method::PUT, &path, request).await
    }

    /// Add a forwarding rule.
    pub async fn create_forwarding_rule(
        &self,
        ctx: &Context,
        load_balancer_id: &str,
        rule: &LoadBalancerForwardingRule,
    ) -> Result<(LoadBalancerForwardingRule, Response)> {
        require(load_balancer_id, "load balancer id")?;
        let path = format!("{BASE_PATH}/{load_balancer_id}/rules");
        submit_data(self.client, ctx, Method::POST, &path, rule).await
    }

    /// Replace a forwarding rule.
    pub async fn update_forwarding_rule(
        &self,
        ctx: &Context,
        load_balancer_id: &str,
        rule_id: u64,
        rule: &LoadBalancerForwardingRule,
    ) -> Result<(LoadBalancerForwardingRule, Response)> {
        require(load_balancer_id, "load balancer id")?;
        require_rule_id(rule_id)?;
        let path = format!("{BASE_PATH}/{load_balancer_id}/rules/{rule_id}");
        submit_data(self.client, ctx, Method::PUT, &path, rule).await
    }

    /// Remove a forwarding rule.
    pub async fn delete_forwarding_rule(
        &self,
        ctx: &Context,
        load_balancer_id: &str,
        rule_id: u64,
    ) -> Result<Response> {
        require(load_balancer_id, "load balancer id")?;
        require_rule_id(rule_id)?;
        let path = format!("{BASE_PATH}/{load_balancer_id}/rules/{rule_id}");
        execute(self.client, ctx, Method::DELETE, &path).await
    }
}
