//! Device (virtual machine) endpoints.

use super::{execute, execute_with, fetch, list, require, submit_data};
use crate::models::{
    Device, DeviceAddDiskRequest, DeviceCreateRequest, DeviceDeleteDiskRequest,
    DeviceUpdateDiskRequest, DeviceUpdateHardwareRequest, DeviceUpdateRequest, SearchListOptions,
};
use xelon_core::{Client, Context, Method, Response, Result};

const BASE_PATH: &str = "devices";

/// Access to `devices` endpoints.
#[derive(Debug, Clone, Copy)]
pub struct DevicesService<'a> {
    client: &'a Client,
}

impl<'a> DevicesService<'a> {
    pub(crate) const fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// List devices.
    pub async fn list(
        &self,
        ctx: &Context,
        options: Option<&SearchListOptions>,
    ) -> Result<(Vec<Device>, Response)> {
        list(self.client, ctx, BASE_PATH, options).await
    }

    /// Fetch a device.
    pub async fn get(&self, ctx: &Context, device_id: &str) -> Result<(Device, Response)> {
        require(device_id, "device id")?;
        let path = format!("{BASE_PATH}/{device_id}");
        fetch(self.client, ctx, Method::GET, &path).await
    }

    /// Provision a device.
    pub async fn create(
        &self,
        ctx: &Context,
        request: &DeviceCreateRequest,
    ) -> Result<(Device, Response)> {
        submit_data(self.client, ctx, Method::POST, BASE_PATH, request).await
    }

    /// Rename a device.
    pub async fn update(
        &self,
        ctx: &Context,
        device_id: &str,
        request: &DeviceUpdateRequest,
    ) -> Result<(Device, Response)> {
        require(device_id, "device id")?;
        let path = format!("{BASE_PATH}/{device_id}");
        submit_data(self.client, ctx, Method::PUT, &path, request).await
    }

    /// Change CPU and memory of a device.
    pub async fn update_hardware(
        &self,
        ctx: &Context,
        device_id: &str,
        request: &DeviceUpdateHardwareRequest,
    ) -> Result<(Device, Response)> {
        require(device_id, "device id")?;
        let path = format!("{BASE_PATH}/{device_id}/hardware");
        submit_data(self.client, ctx, Method::PUT, &path, request).await
    }

    /// Delete a device.
    pub async fn delete(&self, ctx: &Context, device_id: &str) -> Result<Response> {
        require(device_id, "device id")?;
        let path = format!("{BASE_PATH}/{device_id}");
        execute(self.client, ctx, Method::DELETE, &path).await
    }

    /// Power a device on.
    pub async fn start(&self, ctx: &Context, device_id: &str) -> Result<Response> {
        require(device_id, "device id")?;
        let path = format!("{BASE_PATH}/{device_id}/start");
        execute(self.client, ctx, Method::POST, &path).await
    }

    /// Power a device off.
    pub async fn stop(&self, ctx: &Context, device_id: &str) -> Result<Response> {
        require(device_id, "device id")?;
        let path = format!("{BASE_PATH}/{device_id}/stop");
        execute(self.client, ctx, Method::POST, &path).await
    }

    /// Attach a new disk.
    pub async fn add_disk(
        &self,
        ctx: &Context,
        device_id: &str,
        request: &DeviceAddDiskRequest,
    ) -> Result<Response> {
        require(device_id, "device id")?;
        let path = format!("{BASE_PATH}/{device_id}/disk");
        execute_with(self.client, ctx, Method::POST, &path, request).await
    }

    /// Grow an existing disk.
    pub async fn update_disk(
        &self,
        ctx: &Context,
        device_id: &str,
        request: &DeviceUpdateDiskRequest,
    ) -> Result<Response> {
        require(device_id, "device id")?;
        require(&request.disk_id, "disk id")?;
        let path = format!("{BASE_PATH}/{device_id}/disk");
        execute_with(self.client, ctx, Method::PUT, &path, request).await
    }

    /// Remove a disk. The disk to remove travels in the request body.
    pub async fn delete_disk(
        &self,
        ctx: &Context,
        device_id: &str,
        request: &DeviceDeleteDiskRequest,
    ) -> Result<Response> {
        require(device_id, "device id")?;
        require(&request.disk_id, "disk id")?;
        let path = format!("{BASE_PATH}/{device_id}/disk");
        execute_with(self.client, ctx, Method::DELETE, &path, request).await
    }
}
