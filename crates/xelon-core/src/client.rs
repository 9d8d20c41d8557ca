//! Authenticated HTTP transport shared by every resource service.
//!
//! A [`Client`] builds [`Request`]s against its base URL and executes them
//! under a [`Context`]. Successful bodies are decoded into the caller's
//! target type (or streamed into a writer); non-2xx responses become
//! [`Error::Api`] carrying the decoded [`ErrorElement`].
//!
//! The client holds no mutable state, so one instance can be cloned and
//! shared across tasks freely.

use crate::config::ClientConfig;
use crate::context::Context;
use crate::error::{ErrorElement, ErrorResponse};
use crate::response::{Paginated, Response};
use crate::sanitize::sanitize_url;
use crate::{Error, Result};
use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use reqwest::Method;
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracing::{debug, warn};
use url::Url;

/// Default API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://hq.xelon.ch/api/service/";

/// Default `User-Agent` header value.
pub const DEFAULT_USER_AGENT: &str = concat!("xelon-sdk-rust/", env!("CARGO_PKG_VERSION"));

/// Default request timeout (seconds).
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Header identifying the client (tenant) on every request.
pub const CLIENT_ID_HEADER: &str = "x-user-id";

/// Response header carrying the support identifier of a request.
pub const STACKIFY_ID_HEADER: &str = "x-stackifyid";

const MEDIA_TYPE: &str = "application/json";

/// Builder for [`Client`].
///
/// All settings are fixed once [`ClientBuilder::build`] returns.
#[derive(Debug)]
pub struct ClientBuilder {
    token: SecretString,
    base_url: String,
    client_id: Option<String>,
    user_agent: String,
    timeout: Duration,
    http: Option<reqwest::Client>,
}

impl ClientBuilder {
    /// Start a builder authenticating with the given bearer token.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: SecretString::from(token.into()),
            base_url: DEFAULT_BASE_URL.to_string(),
            client_id: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            http: None,
        }
    }

    /// Start a builder from a validated [`ClientConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when the configuration does not validate.
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        validator::Validate::validate(&config)?;
        let timeout = config.timeout();
        Ok(Self {
            token: config.token,
            base_url: config.base_url,
            client_id: config.client_id,
            user_agent: config.user_agent,
            timeout,
            http: None,
        })
    }

    /// Override the API endpoint. The URL must end with `/`.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Attach the client identification header to every request.
    #[must_use]
    pub fn with_client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = Some(client_id.into());
        self
    }

    /// Override the `User-Agent` header.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the timeout of the default HTTP client.
    ///
    /// Ignored when a custom client is supplied through
    /// [`ClientBuilder::with_http_client`].
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Use a preconfigured `reqwest` client as the transport.
    #[must_use]
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = Some(http);
        self
    }

    /// Build the client instance.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the base URL cannot be parsed or the
    /// HTTP client cannot be constructed.
    pub fn build(self) -> Result<Client> {
        let base_url = Url::parse(&self.base_url).map_err(|err| {
            Error::Config(format!("Invalid base URL `{}`: {err}", self.base_url))
        })?;
        let trailing_slash = path_part(&self.base_url).ends_with('/');

        let http = match self.http {
            Some(http) => http,
            None => reqwest::Client::builder()
                .timeout(self.timeout)
                .build()
                .map_err(|err| Error::Config(format!("Failed to build HTTP client: {err}")))?,
        };

        let client_id = self.client_id.filter(|id| !id.is_empty());
        if client_id.is_none() {
            warn!("no client id configured, requests will not carry the {CLIENT_ID_HEADER} header");
        }

        Ok(Client {
            inner: Arc::new(ClientInner {
                http,
                base_url,
                trailing_slash,
                token: self.token,
                client_id,
                user_agent: self.user_agent,
            }),
        })
    }
}

// The raw base URL without query or fragment, as the caller wrote it.
fn path_part(raw: &str) -> &str {
    raw.split(['?', '#']).next().unwrap_or(raw)
}

/// Authenticated client for the Xelon HQ API.
#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http: reqwest::Client,
    base_url: Url,
    trailing_slash: bool,
    token: SecretString,
    client_id: Option<String>,
    user_agent: String,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.inner.base_url.as_str())
            .field("client_id", &self.inner.client_id)
            .field("user_agent", &self.inner.user_agent)
            .finish_non_exhaustive()
    }
}

/// A request ready to be executed by [`Client`].
#[derive(Debug, Clone)]
pub struct Request {
    method: Method,
    url: Url,
    headers: HeaderMap,
    body: Option<Bytes>,
}

impl Request {
    /// HTTP method.
    #[must_use]
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Absolute request URL.
    #[must_use]
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Request headers.
    #[must_use]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Encoded JSON body, if any.
    #[must_use]
    pub fn body(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }
}

impl Client {
    /// Build a client with default settings.
    ///
    /// # Errors
    ///
    /// See [`ClientBuilder::build`].
    pub fn new(token: impl Into<String>) -> Result<Self> {
        ClientBuilder::new(token).build()
    }

    /// Start a [`ClientBuilder`].
    pub fn builder(token: impl Into<String>) -> ClientBuilder {
        ClientBuilder::new(token)
    }

    /// Access the base URL.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// The configured client identifier.
    #[must_use]
    pub fn client_id(&self) -> Option<&str> {
        self.inner.client_id.as_deref()
    }

    /// The `User-Agent` header value.
    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.inner.user_agent
    }

    /// Build a request without a body.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the base URL lacks a trailing slash and
    /// [`Error::InvalidUrl`] if `path` cannot be resolved against it.
    pub fn new_request(&self, method: Method, path: &str) -> Result<Request> {
        self.new_request_with_headers::<()>(method, path, None, HeaderMap::new())
    }

    /// Build a request with a JSON body.
    ///
    /// # Errors
    ///
    /// As [`Client::new_request`], plus [`Error::Encode`] if `body` cannot be
    /// serialized.
    pub fn new_json_request<B>(&self, method: Method, path: &str, body: &B) -> Result<Request>
    where
        B: Serialize + ?Sized,
    {
        self.new_request_with_headers(method, path, Some(body), HeaderMap::new())
    }

    /// Build a request on top of caller-supplied headers.
    ///
    /// An `Authorization` header already present in `headers` is kept, which
    /// lets callers pass through pre-authenticated requests.
    ///
    /// # Errors
    ///
    /// As [`Client::new_json_request`], plus [`Error::InvalidHeader`] for
    /// header values HTTP cannot carry.
    pub fn new_request_with_headers<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        mut headers: HeaderMap,
    ) -> Result<Request>
    where
        B: Serialize + ?Sized,
    {
        let inner = &self.inner;
        if !inner.trailing_slash {
            return Err(Error::Config(format!(
                "base URL must have a trailing slash, but `{}` does not",
                inner.base_url
            )));
        }

        let url = inner.base_url.join(path)?;
        let body = body
            .map(serde_json::to_vec::<B>)
            .transpose()
            .map_err(Error::Encode)?
            .map(Bytes::from);

        if !headers.contains_key(AUTHORIZATION) {
            let mut value =
                HeaderValue::from_str(&format!("Bearer {}", inner.token.expose_secret()))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }
        headers.insert(ACCEPT, HeaderValue::from_static(MEDIA_TYPE));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(MEDIA_TYPE));
        headers.insert(USER_AGENT, HeaderValue::from_str(&inner.user_agent)?);
        if let Some(client_id) = &inner.client_id {
            headers.insert(CLIENT_ID_HEADER, HeaderValue::from_str(client_id)?);
        }

        Ok(Request {
            method,
            url,
            headers,
            body,
        })
    }

    /// Execute `request` and decode the JSON body into `T`.
    ///
    /// An empty body yields `T::default()`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Context`] when `ctx` finishes first,
    /// [`Error::Transport`] for network failures, [`Error::Api`] for non-2xx
    /// responses and [`Error::Decode`] for malformed bodies.
    pub async fn send_json<T>(&self, ctx: &Context, request: Request) -> Result<(T, Response)>
    where
        T: DeserializeOwned + Default,
    {
        let (raw, response) = self.execute(ctx, request).await?;
        let body = ctx.run(raw.bytes()).await??;
        Ok((decode_body(&body)?, response))
    }

    /// Like [`Client::send_json`], also copying the root's pagination
    /// metadata into the returned [`Response`].
    ///
    /// # Errors
    ///
    /// See [`Client::send_json`].
    pub async fn send_paginated<T>(&self, ctx: &Context, request: Request) -> Result<(T, Response)>
    where
        T: DeserializeOwned + Default + Paginated,
    {
        let (value, mut response) = self.send_json::<T>(ctx, request).await?;
        response.set_meta(value.meta().copied());
        Ok((value, response))
    }

    /// Execute `request` without decoding the body.
    ///
    /// # Errors
    ///
    /// See [`Client::send_json`].
    pub async fn send_empty(&self, ctx: &Context, request: Request) -> Result<Response> {
        let (_raw, response) = self.execute(ctx, request).await?;
        Ok(response)
    }

    /// Execute `request` and return the raw body.
    ///
    /// # Errors
    ///
    /// See [`Client::send_json`].
    pub async fn send_bytes(&self, ctx: &Context, request: Request) -> Result<(Bytes, Response)> {
        let (raw, response) = self.execute(ctx, request).await?;
        let body = ctx.run(raw.bytes()).await??;
        Ok((body, response))
    }

    /// Execute `request` and copy the raw body into `writer`.
    ///
    /// # Errors
    ///
    /// As [`Client::send_json`], plus [`Error::Io`] when writing fails.
    pub async fn send_to_writer<W>(
        &self,
        ctx: &Context,
        request: Request,
        writer: &mut W,
    ) -> Result<Response>
    where
        W: AsyncWrite + Unpin + ?Sized,
    {
        let (mut raw, response) = self.execute(ctx, request).await?;
        while let Some(chunk) = ctx.run(raw.chunk()).await?? {
            writer.write_all(&chunk).await?;
        }
        writer.flush().await?;
        Ok(response)
    }

    async fn execute(
        &self,
        ctx: &Context,
        request: Request,
    ) -> Result<(reqwest::Response, Response)> {
        if let Some(err) = ctx.err() {
            return Err(err.into());
        }

        let Request {
            method,
            url,
            headers,
            body,
        } = request;
        let sanitized = sanitize_url(&url);
        debug!(method = %method, url = %sanitized, "Xelon request");

        let mut builder = self.inner.http.request(method.clone(), url).headers(headers);
        if let Some(body) = body {
            builder = builder.body(body);
        }

        let outcome = tokio::select! {
            biased;

            err = ctx.done() => return Err(err.into()),
            outcome = builder.send() => outcome,
        };

        let raw = match outcome {
            Ok(raw) => raw,
            Err(err) => {
                if let Some(ctx_err) = ctx.err() {
                    return Err(ctx_err.into());
                }
                return Err(err.into());
            }
        };

        let response = Response::new(method, sanitized, raw.status(), raw.headers().clone());
        debug!(
            status = response.status().as_u16(),
            stackify_id = response.stackify_id(),
            "Xelon response"
        );

        if !response.status().is_success() {
            // A failed read still reports the status with an empty element.
            let body = ctx.run(raw.bytes()).await?.unwrap_or_default();
            let element = ErrorElement::from_body(&body);
            return Err(ErrorResponse::new(response, element).into());
        }

        Ok((raw, response))
    }
}

fn decode_body<T>(bytes: &[u8]) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    serde_json::from_slice(bytes).map_err(Error::Decode)
}
