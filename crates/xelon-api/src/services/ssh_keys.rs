//! SSH key endpoints.

use super::{execute, fetch, list, require, submit_data};
use crate::models::{SearchListOptions, SshKey, SshKeyCreateRequest, SshKeyUpdateRequest};
use xelon_core::{Client, Context, Method, Response, Result};

const BASE_PATH: &str = "ssh-keys";

/// Access to `ssh-keys` endpoints.
#[derive(Debug, Clone, Copy)]
pub struct SshKeysService<'a> {
    client: &'a Client,
}

impl<'a> SshKeysService<'a> {
    pub(crate) const fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// List SSH keys.
    pub async fn list(
        &self,
        ctx: &Context,
        options: Option<&SearchListOptions>,
    ) -> Result<(Vec<SshKey>, Response)> {
        list(self.client, ctx, BASE_PATH, options).await
    }

    /// Fetch an SSH key.
    pub async fn get(&self, ctx: &Context, key_id: &str) -> Result<(SshKey, Response)> {
        require(key_id, "ssh key id")?;
        let path = format!("{BASE_PATH}/{key_id}");
        fetch(self.client, ctx, Method::GET, &path).await
    }

    /// Store a new SSH key.
    pub async fn create(
        &self,
        ctx: &Context,
        request: &SshKeyCreateRequest,
    ) -> Result<(SshKey, Response)> {
        submit_data(self.client, ctx, Method::POST, BASE_PATH, request).await
    }

    /// Edit an SSH key.
    pub async fn update(
        &self,
        ctx: &Context,
        key_id: &str,
        request: &SshKeyUpdateRequest,
    ) -> Result<(SshKey, Response)> {
        require(key_id, "ssh key id")?;
        let path = format!("{BASE_PATH}/{key_id}");
        submit_data(self.client, ctx, Method::PATCH, &path, request).await
    }

    /// Delete an SSH key.
    pub async fn delete(&self, ctx: &Context, key_id: &str) -> Result<Response> {
        require(key_id, "ssh key id")?;
        let path = format!("{BASE_PATH}/{key_id}");
        execute(self.client, ctx, Method::DELETE, &path).await
    }
}
