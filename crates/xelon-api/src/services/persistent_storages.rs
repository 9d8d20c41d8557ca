//! Persistent storage endpoints.

use super::{execute, fetch, list, require, submit, submit_data};
use crate::models::persistent_storage::{AttachDetachDeviceRequest, ExtendRequest};
use crate::models::{
    ApiResponse, PersistentStorage, PersistentStorageCreateRequest, SearchListOptions,
};
use xelon_core::{Client, Context, Method, Response, Result};

const BASE_PATH: &str = "persistent-storages";

/// Access to `persistent-storages` endpoints.
#[derive(Debug, Clone, Copy)]
pub struct PersistentStoragesService<'a> {
    client: &'a Client,
}

impl<'a> PersistentStoragesService<'a> {
    pub(crate) const fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// List volumes.
    pub async fn list(
        &self,
        ctx: &Context,
        options: Option<&SearchListOptions>,
    ) -> Result<(Vec<PersistentStorage>, Response)> {
        list(self.client, ctx, BASE_PATH, options).await
    }

    /// Fetch a volume.
    pub async fn get(
        &self,
        ctx: &Context,
        storage_id: &str,
    ) -> Result<(PersistentStorage, Response)> {
        require(storage_id, "persistent storage id")?;
        let path = format!("{BASE_PATH}/{storage_id}");
        fetch(self.client, ctx, Method::GET, &path).await
    }

    /// Create a volume.
    pub async fn create(
        &self,
        ctx: &Context,
        request: &PersistentStorageCreateRequest,
    ) -> Result<(PersistentStorage, Response)> {
        submit_data(self.client, ctx, Method::POST, BASE_PATH, request).await
    }

    /// Delete a volume.
    pub async fn delete(&self, ctx: &Context, storage_id: &str) -> Result<Response> {
        require(storage_id, "persistent storage id")?;
        let path = format!("{BASE_PATH}/{storage_id}");
        execute(self.client, ctx, Method::DELETE, &path).await
    }

    /// Attach a volume to a device.
    pub async fn attach_to_device(
        &self,
        ctx: &Context,
        storage_id: &str,
        device_id: &str,
    ) -> Result<(ApiResponse, Response)> {
        self.device_action(ctx, storage_id, device_id, "attach-device").await
    }

    /// Detach a volume from a device.
    pub async fn detach_from_device(
        &self,
        ctx: &Context,
        storage_id: &str,
        device_id: &str,
    ) -> Result<(ApiResponse, Response)> {
        self.device_action(ctx, storage_id, device_id, "detach-device").await
    }

    /// Grow a volume to `capacity` GB.
    pub async fn extend(
        &self,
        ctx: &Context,
        storage_id: &str,
        capacity: u64,
    ) -> Result<(ApiResponse, Response)> {
        require(storage_id, "persistent storage id")?;
        let path = format!("{BASE_PATH}/{storage_id}/extend");
        submit(self.client, ctx, Method::POST, &path, &ExtendRequest { capacity }).await
    }

    async fn device_action(
        &self,
        ctx: &Context,
        storage_id: &str,
        device_id: &str,
        action: &str,
    ) -> Result<(ApiResponse, Response)> {
        require(storage_id, "persistent storage id")?;
        require(device_id, "device id")?;
        let path = format!("{BASE_PATH}/{storage_id}/{action}");
        let body = AttachDetachDeviceRequest { device_id };
        submit(self.client, ctx, Method::POST, &path, &body).await
    }
}
