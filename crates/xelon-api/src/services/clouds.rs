//! Cloud endpoints.

use super::fetch;
use crate::models::{Cloud, SearchListOptions};
use xelon_core::{add_options, Client, Context, Method, Response, Result};

const BASE_PATH: &str = "clouds";

/// Access to `clouds` endpoints.
#[derive(Debug, Clone, Copy)]
pub struct CloudsService<'a> {
    client: &'a Client,
}

impl<'a> CloudsService<'a> {
    pub(crate) const fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// List the clouds available to the tenant.
    pub async fn list(
        &self,
        ctx: &Context,
        options: Option<&SearchListOptions>,
    ) -> Result<(Vec<Cloud>, Response)> {
        let path = add_options(BASE_PATH, options)?;
        fetch(self.client, ctx, Method::GET, &path).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::setup;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, ResponseTemplate};

    #[tokio::test]
    async fn list_clouds() {
        let (server, client) = setup().await;
        Mock::given(method("GET"))
            .and(path("/api/clouds"))
            .and(query_param("sort", "name"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"identifier": "c-1", "name": "Zurich", "type": "public", "hvType": "vmware"}
            ])))
            .mount(&server)
            .await;

        let options = SearchListOptions::new().with_sort("name");
        let (clouds, _) = CloudsService::new(&client)
            .list(&Context::background(), Some(&options))
            .await
            .unwrap();
        assert_eq!(clouds.len(), 1);
        assert_eq!(clouds[0].hv_type.as_deref(), Some("vmware"));
    }
}
