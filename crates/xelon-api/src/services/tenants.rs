//! Tenant endpoints.

use super::{fetch, list};
use crate::models::{SearchListOptions, Tenant};
use xelon_core::{Client, Context, Method, Response, Result};

const BASE_PATH: &str = "tenants";

/// Access to `tenants` endpoints.
#[derive(Debug, Clone, Copy)]
pub struct TenantsService<'a> {
    client: &'a Client,
}

impl<'a> TenantsService<'a> {
    pub(crate) const fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Fetch the tenant the token belongs to.
    pub async fn get_current(&self, ctx: &Context) -> Result<(Tenant, Response)> {
        let path = format!("{BASE_PATH}/current");
        fetch(self.client, ctx, Method::GET, &path).await
    }

    /// List tenants visible to the caller.
    pub async fn list(
        &self,
        ctx: &Context,
        options: Option<&SearchListOptions>,
    ) -> Result<(Vec<Tenant>, Response)> {
        list(self.client, ctx, BASE_PATH, options).await
    }
}
