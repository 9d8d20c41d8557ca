//! Resource services.
//!
//! Each service borrows the shared [`Client`], builds a path relative to the
//! base URL and goes through exactly one request builder and one send call.
//! Identifiers are checked before any I/O.

pub mod clouds;
pub mod devices;
pub mod firewalls;
pub mod isos;
pub mod kubernetes;
pub mod load_balancer_clusters;
pub mod load_balancers;
pub mod networks;
pub mod persistent_storages;
pub mod ssh_keys;
pub mod templates;
pub mod tenants;

pub use clouds::CloudsService;
pub use devices::DevicesService;
pub use firewalls::FirewallsService;
pub use isos::IsosService;
pub use kubernetes::KubernetesService;
pub use load_balancer_clusters::LoadBalancerClustersService;
pub use load_balancers::LoadBalancersService;
pub use networks::NetworksService;
pub use persistent_storages::PersistentStoragesService;
pub use ssh_keys::SshKeysService;
pub use templates::TemplatesService;
pub use tenants::TenantsService;

use crate::models::{DataRoot, ListRoot};
use serde::de::DeserializeOwned;
use serde::Serialize;
use xelon_core::{add_options, Client, Context, Error, Method, Response, Result, ToQuery};

/// Reject an empty identifier.
pub(crate) fn require(value: &str, what: &'static str) -> Result<()> {
    if value.is_empty() {
        return Err(Error::EmptyArgument(what));
    }
    Ok(())
}

/// Send a bodiless request and decode the body as `T`.
pub(crate) async fn fetch<T>(
    client: &Client,
    ctx: &Context,
    method: Method,
    path: &str,
) -> Result<(T, Response)>
where
    T: DeserializeOwned + Default,
{
    let request = client.new_request(method, path)?;
    client.send_json(ctx, request).await
}

/// Send a JSON body and decode the response body as `T`.
pub(crate) async fn submit<T, B>(
    client: &Client,
    ctx: &Context,
    method: Method,
    path: &str,
    body: &B,
) -> Result<(T, Response)>
where
    T: DeserializeOwned + Default,
    B: Serialize + ?Sized,
{
    let request = client.new_json_request(method, path, body)?;
    client.send_json(ctx, request).await
}

/// Send a JSON body and unwrap the `data` envelope of the response.
pub(crate) async fn submit_data<T, B>(
    client: &Client,
    ctx: &Context,
    method: Method,
    path: &str,
    body: &B,
) -> Result<(T, Response)>
where
    T: DeserializeOwned + Default,
    B: Serialize + ?Sized,
{
    let (root, response) = submit::<DataRoot<T>, B>(client, ctx, method, path, body).await?;
    Ok((root.into_data(), response))
}

/// GET a paginated collection, forwarding its `meta` to the response.
pub(crate) async fn list<T, O>(
    client: &Client,
    ctx: &Context,
    path: &str,
    options: Option<&O>,
) -> Result<(Vec<T>, Response)>
where
    T: DeserializeOwned,
    O: ToQuery + ?Sized,
{
    let path = add_options(path, options)?;
    let request = client.new_request(Method::GET, &path)?;
    let (root, response) = client.send_paginated::<ListRoot<T>>(ctx, request).await?;
    Ok((root.data, response))
}

/// Send a bodiless request whose response body is ignored.
pub(crate) async fn execute(
    client: &Client,
    ctx: &Context,
    method: Method,
    path: &str,
) -> Result<Response> {
    let request = client.new_request(method, path)?;
    client.send_empty(ctx, request).await
}

/// Send a JSON body and ignore the response body.
pub(crate) async fn execute_with<B>(
    client: &Client,
    ctx: &Context,
    method: Method,
    path: &str,
    body: &B,
) -> Result<Response>
where
    B: Serialize + ?Sized,
{
    let request = client.new_json_request(method, path, body)?;
    client.send_empty(ctx, request).await
}

#[cfg(test)]
pub(crate) mod testing {
    use wiremock::MockServer;
    use xelon_core::Client;

    pub(crate) async fn setup() -> (MockServer, Client) {
        let server = MockServer::start().await;
        let client = Client::builder("test-token")
            .with_base_url(format!("{}/api/", server.uri()))
            .with_client_id("tenant-1")
            .build()
            .unwrap();
        (server, client)
    }
}
