//! Response wrapper and pagination metadata.

use crate::client::STACKIFY_ID_HEADER;
use reqwest::header::HeaderMap;
use reqwest::{Method, StatusCode};
use serde::{Deserialize, Deserializer, Serialize};
use url::Url;

/// Pagination metadata attached to list responses.
///
/// Both the camelCase and the snake_case field spellings are accepted, and
/// `null` counts as zero.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    /// Index of the first item on this page.
    #[serde(default, deserialize_with = "null_as_zero", skip_serializing_if = "is_zero")]
    pub from: u64,

    /// Number of the last page.
    #[serde(
        default,
        rename = "lastPage",
        alias = "last_page",
        deserialize_with = "null_as_zero",
        skip_serializing_if = "is_zero"
    )]
    pub last_page: u64,

    /// Number of the current page.
    #[serde(
        default,
        rename = "currentPage",
        alias = "current_page",
        deserialize_with = "null_as_zero",
        skip_serializing_if = "is_zero"
    )]
    pub page: u64,

    /// Page size.
    #[serde(
        default,
        rename = "perPage",
        alias = "per_page",
        deserialize_with = "null_as_zero",
        skip_serializing_if = "is_zero"
    )]
    pub per_page: u64,

    /// Index of the last item on this page.
    #[serde(default, deserialize_with = "null_as_zero", skip_serializing_if = "is_zero")]
    pub to: u64,

    /// Total number of items across all pages.
    #[serde(default, deserialize_with = "null_as_zero", skip_serializing_if = "is_zero")]
    pub total: u64,
}

impl Meta {
    /// Returns true when no pagination field carries a value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// `Some(self)` unless every field is zero.
    ///
    /// Handy for root types that flatten pagination onto the body.
    #[must_use]
    pub fn non_empty(&self) -> Option<&Self> {
        if self.is_empty() {
            None
        } else {
            Some(self)
        }
    }
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_zero(value: &u64) -> bool {
    *value == 0
}

fn null_as_zero<'de, D>(deserializer: D) -> std::result::Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<u64>::deserialize(deserializer)?.unwrap_or_default())
}

/// Implemented by response roots that may carry pagination metadata.
///
/// The transport copies whatever the root exposes into [`Response::meta`],
/// so each root decides where its envelope keeps the fields.
pub trait Paginated {
    /// The decoded pagination metadata, if present.
    fn meta(&self) -> Option<&Meta>;
}

/// Status, headers and pagination of a completed HTTP exchange.
#[derive(Debug, Clone)]
pub struct Response {
    method: Method,
    url: Url,
    status: StatusCode,
    headers: HeaderMap,
    meta: Option<Meta>,
}

impl Response {
    /// Wrap the parts of a response. `url` must already be sanitized.
    #[must_use]
    pub fn new(method: Method, url: Url, status: StatusCode, headers: HeaderMap) -> Self {
        Self {
            method,
            url,
            status,
            headers,
            meta: None,
        }
    }

    /// Method of the originating request.
    #[must_use]
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Request URL with credentials redacted.
    #[must_use]
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// HTTP status code.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Response headers.
    #[must_use]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Pagination metadata, when the decoded body carried it.
    #[must_use]
    pub fn meta(&self) -> Option<&Meta> {
        self.meta.as_ref()
    }

    /// Support identifier the API attaches to each response.
    #[must_use]
    pub fn stackify_id(&self) -> Option<&str> {
        self.headers
            .get(STACKIFY_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .filter(|value| !value.is_empty())
    }

    pub(crate) fn set_meta(&mut self, meta: Option<Meta>) {
        self.meta = meta;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_camel_case_meta() {
        let meta: Meta = serde_json::from_value(json!({
            "total": 20, "lastPage": 2, "perPage": 10, "currentPage": 1, "from": 1, "to": 10
        }))
        .unwrap();
        assert_eq!(
            meta,
            Meta {
                from: 1,
                last_page: 2,
                page: 1,
                per_page: 10,
                to: 10,
                total: 20,
            }
        );
    }

    #[test]
    fn decodes_snake_case_meta_with_nulls() {
        let meta: Meta = serde_json::from_value(json!({
            "current_page": 1, "last_page": 1, "per_page": 15, "from": null, "to": null, "total": 0
        }))
        .unwrap();
        assert_eq!(meta.page, 1);
        assert_eq!(meta.per_page, 15);
        assert_eq!(meta.from, 0);
        assert!(!meta.is_empty());
    }

    #[test]
    fn empty_meta_serializes_to_empty_object() {
        assert!(Meta::default().is_empty());
        assert_eq!(Meta::default().non_empty(), None);
        assert_eq!(serde_json::to_value(Meta::default()).unwrap(), json!({}));
    }

    #[test]
    fn stackify_id_is_read_from_headers() {
        let mut headers = HeaderMap::new();
        headers.insert(STACKIFY_ID_HEADER, "abc-123".parse().unwrap());
        let response = Response::new(
            Method::GET,
            Url::parse("https://hq.example.com/api/").unwrap(),
            StatusCode::OK,
            headers,
        );
        assert_eq!(response.stackify_id(), Some("abc-123"));
        assert!(response.meta().is_none());
    }
}
