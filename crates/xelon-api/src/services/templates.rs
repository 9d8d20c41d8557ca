//! Template endpoints.

use super::{execute, fetch, list, require, submit_data};
use crate::models::{Template, TemplateCreateRequest, TemplateListOptions, TemplateUpdateRequest};
use xelon_core::{Client, Context, Method, Response, Result};

const BASE_PATH: &str = "templates";

/// Access to `templates` endpoints.
#[derive(Debug, Clone, Copy)]
pub struct TemplatesService<'a> {
    client: &'a Client,
}

impl<'a> TemplatesService<'a> {
    pub(crate) const fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// List templates.
    pub async fn list(
        &self,
        ctx: &Context,
        options: Option<&TemplateListOptions>,
    ) -> Result<(Vec<Template>, Response)> {
        list(self.client, ctx, BASE_PATH, options).await
    }

    /// Fetch a template.
    pub async fn get(&self, ctx: &Context, template_id: &str) -> Result<(Template, Response)> {
        require(template_id, "template id")?;
        let path = format!("{BASE_PATH}/{template_id}");
        fetch(self.client, ctx, Method::GET, &path).await
    }

    /// Capture an existing device as a template.
    pub async fn create(
        &self,
        ctx: &Context,
        request: &TemplateCreateRequest,
    ) -> Result<(Template, Response)> {
        require(&request.device_id, "device id")?;
        let path = format!("{BASE_PATH}/create-from-device");
        submit_data(self.client, ctx, Method::POST, &path, request).await
    }

    /// Edit a template.
    pub async fn update(
        &self,
        ctx: &Context,
        template_id: &str,
        request: &TemplateUpdateRequest,
    ) -> Result<(Template, Response)> {
        require(template_id, "template id")?;
        let path = format!("{BASE_PATH}/{template_id}");
        submit_data(self.client, ctx, Method::PATCH, &path, request).await
    }

    /// Delete a template.
    pub async fn delete(&self, ctx: &Context, template_id: &str) -> Result<Response> {
        require(template_id, "template id")?;
        let path = format!("{BASE_PATH}/{template_id}");
        execute(self.client, ctx, Method::DELETE, &path).await
    }
}
