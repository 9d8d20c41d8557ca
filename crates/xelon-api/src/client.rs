//! Entry point tying the resource services to one transport client.

use crate::services::{
    CloudsService, DevicesService, FirewallsService, IsosService, KubernetesService,
    LoadBalancerClustersService, LoadBalancersService, NetworksService, PersistentStoragesService,
    SshKeysService, TemplatesService, TenantsService,
};
use crate::Result;
use std::time::Duration;
use tracing::debug;
use url::Url;
use xelon_core::{Client, ClientBuilder, ClientConfig};

/// Builder for [`XelonClient`].
#[derive(Debug)]
pub struct XelonClientBuilder {
    inner: ClientBuilder,
}

impl XelonClientBuilder {
    /// Create a builder authenticating with `token`.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            inner: ClientBuilder::new(token),
        }
    }

    /// Create a builder from a validated [`ClientConfig`].
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        Ok(Self {
            inner: ClientBuilder::from_config(config)?,
        })
    }

    /// Create a builder from `XELON_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_config(ClientConfig::from_env()?)
    }

    /// Override the API base URL. It must end with `/`.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.inner = self.inner.with_base_url(base_url);
        self
    }

    /// Send the tenant identification header with every request.
    #[must_use]
    pub fn with_client_id(mut self, client_id: impl Into<String>) -> Self {
        self.inner = self.inner.with_client_id(client_id);
        self
    }

    /// Override the user agent.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.inner = self.inner.with_user_agent(user_agent);
        self
    }

    /// Override the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.inner = self.inner.with_timeout(timeout);
        self
    }

    /// Use a preconfigured HTTP client.
    #[must_use]
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.inner = self.inner.with_http_client(http);
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<XelonClient> {
        let inner = self.inner.build()?;
        debug!(base_url = %inner.base_url(), "built Xelon client");
        Ok(XelonClient { inner })
    }
}

/// Client for the Xelon HQ API.
///
/// Cloning is cheap; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct XelonClient {
    inner: Client,
}

impl XelonClient {
    /// Construct a client with default settings.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        XelonClientBuilder::new(token).build()
    }

    /// Start building a client.
    #[must_use]
    pub fn builder(token: impl Into<String>) -> XelonClientBuilder {
        XelonClientBuilder::new(token)
    }

    /// Return the base URL.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        self.inner.base_url()
    }

    /// Transport client shared by all services.
    #[must_use]
    pub const fn core(&self) -> &Client {
        &self.inner
    }

    /// Cloud endpoints.
    #[must_use]
    pub const fn clouds(&self) -> CloudsService<'_> {
        CloudsService::new(&self.inner)
    }

    /// Device endpoints.
    #[must_use]
    pub const fn devices(&self) -> DevicesService<'_> {
        DevicesService::new(&self.inner)
    }

    /// Firewall endpoints.
    #[must_use]
    pub const fn firewalls(&self) -> FirewallsService<'_> {
        FirewallsService::new(&self.inner)
    }

    /// Custom ISO endpoints.
    #[must_use]
    pub const fn isos(&self) -> IsosService<'_> {
        IsosService::new(&self.inner)
    }

    /// Kubernetes endpoints.
    #[must_use]
    pub const fn kubernetes(&self) -> KubernetesService<'_> {
        KubernetesService::new(&self.inner)
    }

    /// Load balancer cluster endpoints.
    #[must_use]
    pub const fn load_balancer_clusters(&self) -> LoadBalancerClustersService<'_> {
        LoadBalancerClustersService::new(&self.inner)
    }

    /// Load balancer endpoints.
    #[must_use]
    pub const fn load_balancers(&self) -> LoadBalancersService<'_> {
        LoadBalancersService::new(&self.inner)
    }

    /// Network endpoints.
    #[must_use]
    pub const fn networks(&self) -> NetworksService<'_> {
        NetworksService::new(&self.inner)
    }

    /// Persistent storage endpoints.
    #[must_use]
    pub const fn persistent_storages(&self) -> PersistentStoragesService<'_> {
        PersistentStoragesService::new(&self.inner)
    }

    /// SSH key endpoints.
    #[must_use]
    pub const fn ssh_keys(&self) -> SshKeysService<'_> {
        SshKeysService::new(&self.inner)
    }

    /// Template endpoints.
    #[must_use]
    pub const fn templates(&self) -> TemplatesService<'_> {
        TemplatesService::new(&self.inner)
    }

    /// Tenant endpoints.
    #[must_use]
    pub const fn tenants(&self) -> TenantsService<'_> {
        TenantsService::new(&self.inner)
    }
}
