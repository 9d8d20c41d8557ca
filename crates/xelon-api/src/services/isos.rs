//! Custom ISO endpoints.

use super::{execute, fetch, list, require, submit_data};
use crate::models::{Iso, IsoCreateRequest, IsoUpdateRequest, SearchListOptions};
use xelon_core::{Client, Context, Method, Response, Result};

const BASE_PATH: &str = "isos";

/// Access to `isos` endpoints.
#[derive(Debug, Clone, Copy)]
pub struct IsosService<'a> {
    client: &'a Client,
}

impl<'a> IsosService<'a> {
    pub(crate) const fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// List custom ISOs.
    pub async fn list(
        &self,
        ctx: &Context,
        options: Option<&SearchListOptions>,
    ) -> Result<(Vec<Iso>, Response)> {
        list(self.client, ctx, BASE_PATH, options).await
    }

    /// Fetch an ISO.
    pub async fn get(&self, ctx: &Context, iso_id: &str) -> Result<(Iso, Response)> {
        require(iso_id, "iso id")?;
        let path = format!("{BASE_PATH}/{iso_id}");
        fetch(self.client, ctx, Method::GET, &path).await
    }

    /// Upload an ISO from a URL.
    pub async fn create(&self, ctx: &Context, request: &IsoCreateRequest) -> Result<(Iso, Response)> {
        submit_data(self.client, ctx, Method::POST, BASE_PATH, request).await
    }

    /// Edit an ISO.
    pub async fn update(
        &self,
        ctx: &Context,
        iso_id: &str,
        request: &IsoUpdateRequest,
    ) -> Result<(Iso, Response)> {
        require(iso_id, "iso id")?;
        let path = format!("{BASE_PATH}/{iso_id}");
        submit_data(self.client, ctx, Method::PATCH, &path, request).await
    }

    /// Delete an ISO.
    pub async fn delete(&self, ctx: &Context, iso_id: &str) -> Result<Response> {
        require(iso_id, "iso id")?;
        let path = format!("{BASE_PATH}/{iso_id}");
        execute(self.client, ctx, Method::DELETE, &path).await
    }
}
