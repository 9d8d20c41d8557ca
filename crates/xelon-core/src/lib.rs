//! # xelon-core
//!
//! Transport core for the Xelon HQ API.
//!
//! This crate builds authenticated requests, executes them under a
//! cancellation [`Context`], and decodes success and error bodies. The
//! resource services in `xelon-api` are thin callers of [`Client`].
//!
//! ## Modules
//!
//! - [`client`] - Client construction, request building and execution
//! - [`context`] - Cancellation and deadline handles
//! - [`config`] - Serializable client configuration
//! - [`error`] - Error types and the tolerant error body decoder
//! - [`response`] - Response wrapper and pagination metadata
//! - [`query`] - Query string encoding for list options
//! - [`codec`] - String-or-list wire values
//! - [`sanitize`] - Password redaction for URLs

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod codec;
pub mod config;
pub mod context;
pub mod error;
pub mod query;
pub mod response;
pub mod sanitize;

// Re-export commonly used types
pub use client::{Client, ClientBuilder, Request};
pub use codec::OneOrMany;
pub use config::ClientConfig;
pub use context::{Context, ContextError};
pub use error::{Error, ErrorElement, ErrorResponse, Result};
pub use query::{add_options, ListOptions, QueryParams, ToQuery};
pub use response::{Meta, Paginated, Response};
pub use sanitize::sanitize_url;

pub use reqwest::Method;
