//! Error types for Xelon API operations.
//!
//! [`Error`] separates caller mistakes (empty identifiers or payloads) from
//! configuration problems, transport failures, API rejections and decode
//! failures. API rejections keep the decoded [`ErrorElement`] together with
//! the [`Response`] they arrived on.

use crate::context::ContextError;
use crate::response::Response;
use crate::sanitize::redact_password;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Main error type for Xelon operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid client configuration, such as a base URL without a trailing slash.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A required identifier was empty.
    #[error("argument cannot be empty: {0}")]
    EmptyArgument(&'static str),

    /// A required payload was empty.
    #[error("empty payload not allowed: {0}")]
    EmptyPayload(&'static str),

    /// The request context was cancelled or its deadline passed.
    #[error(transparent)]
    Context(#[from] ContextError),

    /// The HTTP exchange failed below the API level.
    #[error("HTTP request failed: {0}")]
    Transport(reqwest::Error),

    /// The API answered with a non-2xx status.
    #[error(transparent)]
    Api(Box<ErrorResponse>),

    /// The request body could not be serialized.
    #[error("Failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// A successful response body could not be decoded.
    #[error("Failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),

    /// A request path or URL could not be parsed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// A header value contained characters HTTP does not allow.
    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    /// Writing a response body into a caller-provided sink failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Specialized result type for Xelon operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns the error code for this error type.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Config(_) => "CONFIG_ERROR",
            Self::EmptyArgument(_) => "EMPTY_ARGUMENT",
            Self::EmptyPayload(_) => "EMPTY_PAYLOAD",
            Self::Context(ContextError::Canceled) => "CANCELED",
            Self::Context(ContextError::DeadlineExceeded) => "DEADLINE_EXCEEDED",
            Self::Transport(_) => "HTTP_ERROR",
            Self::Api(_) => "API_ERROR",
            Self::Encode(_) => "ENCODE_ERROR",
            Self::Decode(_) => "DECODE_ERROR",
            Self::InvalidUrl(_) => "INVALID_URL",
            Self::InvalidHeader(_) => "INVALID_HEADER",
            Self::Io(_) => "IO_ERROR",
        }
    }

    /// Returns true for errors caused by arguments the caller passed.
    #[must_use]
    pub const fn is_argument_error(&self) -> bool {
        matches!(self, Self::EmptyArgument(_) | Self::EmptyPayload(_))
    }

    /// HTTP status of an API rejection.
    #[must_use]
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        self.api_response().map(|api| api.response.status())
    }

    /// The decoded API rejection, if this is one.
    #[must_use]
    pub fn api_response(&self) -> Option<&ErrorResponse> {
        match self {
            Self::Api(api) => Some(api.as_ref()),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(mut err: reqwest::Error) -> Self {
        if let Some(url) = err.url_mut() {
            redact_password(url);
        }
        Self::Transport(err)
    }
}

impl From<validator::ValidationErrors> for Error {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::Config(format!("Invalid configuration: {err}"))
    }
}

impl From<ErrorResponse> for Error {
    fn from(err: ErrorResponse) -> Self {
        Self::Api(Box::new(err))
    }
}

/// A non-2xx response together with its decoded error body.
#[derive(Debug, Clone)]
pub struct ErrorResponse {
    /// The response the error arrived on.
    pub response: Response,
    /// Decoded error body.
    pub element: ErrorElement,
}

impl ErrorResponse {
    /// Pair a response with its decoded body.
    #[must_use]
    pub const fn new(response: Response, element: ErrorElement) -> Self {
        Self { response, element }
    }
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}: {}",
            self.response.method(),
            self.response.url(),
            self.response.status().as_u16()
        )?;
        if let Some(id) = self.response.stackify_id() {
            write!(f, " (stackify id {id})")?;
        }
        if !self.element.is_empty() {
            write!(f, " {}", self.element)?;
        }
        Ok(())
    }
}

impl std::error::Error for ErrorResponse {}

/// Decoded error body.
///
/// The API has used several shapes for error bodies: `error`, `message` and
/// an `errors` validation map, all optional; an `error` field holding either
/// a plain string or a validation map; and `error` plus a numeric `code`.
/// Decoding accepts any of them and never fails on an unexpected shape.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorElement {
    /// Numeric error code.
    pub code: Option<i64>,
    /// Short error text.
    pub error: String,
    /// Human-readable message.
    pub message: String,
    /// Validation messages keyed by field name.
    pub validations: BTreeMap<String, Vec<String>>,
    /// Set when `error` arrived as a bare string rather than a validation map.
    pub partial: bool,
}

impl ErrorElement {
    /// Returns true when nothing was decoded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.code.is_none()
            && self.error.is_empty()
            && self.message.is_empty()
            && self.validations.is_empty()
    }

    /// Decode a raw error body.
    ///
    /// A body that is not JSON is kept verbatim as the message.
    #[must_use]
    pub fn from_body(body: &[u8]) -> Self {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Self::default();
        }
        match serde_json::from_slice::<Value>(body) {
            Ok(value) => Self::from_value(value),
            Err(_) => Self {
                message: String::from_utf8_lossy(body).trim().to_owned(),
                ..Self::default()
            },
        }
    }

    /// Decode an already parsed JSON value.
    #[must_use]
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(fields) => Self::from_fields(fields),
            Value::Null => Self::default(),
            Value::String(message) => Self {
                message,
                ..Self::default()
            },
            other => Self {
                message: other.to_string(),
                ..Self::default()
            },
        }
    }

    fn from_fields(mut fields: Map<String, Value>) -> Self {
        let mut element = Self {
            code: fields.remove("code").and_then(|code| match code {
                Value::Number(number) => number.as_i64(),
                Value::String(text) => text.trim().parse().ok(),
                _ => None,
            }),
            ..Self::default()
        };

        match fields.remove("error") {
            Some(Value::Object(map)) => merge_validations(&mut element.validations, map),
            Some(Value::String(text)) => {
                element.error = text;
                element.partial = true;
            }
            Some(Value::Null) | None => {}
            Some(other) => {
                element.error = other.to_string();
                element.partial = true;
            }
        }

        element.message = fields.remove("message").map(text_of).unwrap_or_default();

        if let Some(Value::Object(map)) = fields.remove("errors") {
            merge_validations(&mut element.validations, map);
        }

        element
    }
}

impl<'de> Deserialize<'de> for ErrorElement {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(Self::from_value)
    }
}

impl fmt::Display for ErrorElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if let Some(code) = self.code {
            parts.push(format!("code: {code}"));
        }
        if !self.error.is_empty() {
            parts.push(format!("error: {}", self.error));
        }
        if !self.message.is_empty() {
            parts.push(format!("message: {}", self.message));
        }
        if !self.validations.is_empty() {
            let fields: Vec<String> = self
                .validations
                .iter()
                .map(|(field, messages)| format!("{field} - {}", messages.join("; ")))
                .collect();
            parts.push(format!("validations: ({})", fields.join(", ")));
        }
        write!(f, "({})", parts.join(", "))
    }
}

fn text_of(value: Value) -> String {
    match value {
        Value::String(text) => text,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn merge_validations(target: &mut BTreeMap<String, Vec<String>>, map: Map<String, Value>) {
    for (field, value) in map {
        let messages = match value {
            Value::Array(items) => items
                .into_iter()
                .map(text_of)
                .filter(|text| !text.is_empty())
                .collect(),
            Value::Null => Vec::new(),
            other => vec![text_of(other)],
        };
        target.entry(field).or_default().extend(messages);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderMap;
    use reqwest::{Method, StatusCode};
    use serde_json::json;
    use url::Url;

    fn decode(value: Value) -> ErrorElement {
        serde_json::from_value(value).unwrap()
    }

    fn response(raw_url: &str, headers: HeaderMap) -> Response {
        Response::new(
            Method::GET,
            crate::sanitize::sanitize_url(&Url::parse(raw_url).unwrap()),
            StatusCode::INTERNAL_SERVER_ERROR,
            headers,
        )
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(Error::Config("x".to_string()).error_code(), "CONFIG_ERROR");
        assert_eq!(Error::EmptyArgument("device id").error_code(), "EMPTY_ARGUMENT");
        assert_eq!(Error::EmptyPayload("rules").error_code(), "EMPTY_PAYLOAD");
        assert_eq!(Error::from(ContextError::Canceled).error_code(), "CANCELED");
        assert_eq!(
            Error::from(ContextError::DeadlineExceeded).error_code(),
            "DEADLINE_EXCEEDED"
        );
    }

    #[test]
    fn argument_errors_are_distinguished() {
        assert!(Error::EmptyArgument("device id").is_argument_error());
        assert!(Error::EmptyPayload("rules").is_argument_error());
        assert!(!Error::Config("x".to_string()).is_argument_error());
        assert_eq!(
            Error::EmptyArgument("device id").to_string(),
            "argument cannot be empty: device id"
        );
    }

    #[test]
    fn decodes_each_field_alone() {
        let error_only = decode(json!({"error": "X"}));
        assert_eq!(error_only.error, "X");
        assert!(error_only.message.is_empty());
        assert!(error_only.validations.is_empty());

        let message_only = decode(json!({"message": "Y"}));
        assert_eq!(message_only.message, "Y");
        assert!(message_only.error.is_empty());
        assert!(!message_only.partial);

        let errors_only = decode(json!({"errors": {"f": ["m"]}}));
        assert_eq!(errors_only.validations["f"], vec!["m".to_string()]);
        assert!(errors_only.error.is_empty());
        assert!(errors_only.message.is_empty());
    }

    #[test]
    fn decodes_combined_fields() {
        let element = decode(json!({
            "error": "Unprocessable",
            "message": "The given data was invalid.",
            "errors": {"name": ["The name field is required."], "cpu": ["Too low", "Not even"]}
        }));
        assert_eq!(element.error, "Unprocessable");
        assert_eq!(element.message, "The given data was invalid.");
        assert_eq!(element.validations.len(), 2);
        assert_eq!(element.validations["cpu"].len(), 2);
    }

    #[test]
    fn bare_string_error_is_partial() {
        let element = decode(json!({"error": "X"}));
        assert!(element.partial);
        assert!(element.validations.is_empty());
    }

    #[test]
    fn object_error_becomes_validations() {
        let element = decode(json!({"error": {"f": ["m"], "g": ["n", "o"]}}));
        assert!(!element.partial);
        assert!(element.error.is_empty());
        assert_eq!(element.validations.len(), 2);
        assert_eq!(element.validations["g"], vec!["n".to_string(), "o".to_string()]);
    }

    #[test]
    fn minimal_shape_with_code() {
        let element = decode(json!({"code": 404, "error": "Not found"}));
        assert_eq!(element.code, Some(404));
        assert_eq!(element.error, "Not found");
    }

    #[test]
    fn lenient_validation_values() {
        let element = decode(json!({"errors": {"size": "too big", "ram": [8, "odd"]}}));
        assert_eq!(element.validations["size"], vec!["too big".to_string()]);
        assert_eq!(
            element.validations["ram"],
            vec!["8".to_string(), "odd".to_string()]
        );
    }

    #[test]
    fn unexpected_shapes_do_not_fail() {
        assert!(decode(json!(null)).is_empty());
        assert_eq!(decode(json!("boom")).message, "boom");
        assert_eq!(decode(json!({"error": 12})).error, "12");
        assert!(decode(json!({"unrelated": true})).is_empty());
    }

    #[test]
    fn non_json_body_becomes_message() {
        let element = ErrorElement::from_body(b"<html>Bad Gateway</html>\n");
        assert_eq!(element.message, "<html>Bad Gateway</html>");
        assert!(ErrorElement::from_body(b"").is_empty());
    }

    #[test]
    fn display_lists_present_parts() {
        let element = decode(json!({
            "error": "Invalid",
            "errors": {"name": ["required", "too short"]}
        }));
        assert_eq!(
            element.to_string(),
            "(error: Invalid, validations: (name - required; too short))"
        );
    }

    #[test]
    fn error_response_string() {
        let element = decode(json!({"error": "Virtual machine is not found"}));
        let err = ErrorResponse::new(
            response("http://localhost/api/testing", HeaderMap::new()),
            element,
        );
        assert_eq!(
            err.to_string(),
            "GET http://localhost/api/testing: 500 (error: Virtual machine is not found)"
        );
    }

    #[test]
    fn error_response_string_with_stackify_id_and_redaction() {
        let mut headers = HeaderMap::new();
        headers.insert(crate::client::STACKIFY_ID_HEADER, "st-1".parse().unwrap());
        let err = Error::from(ErrorResponse::new(
            response("http://localhost/api/login?password=secret", headers),
            decode(json!({"message": "denied"})),
        ));
        assert_eq!(
            err.to_string(),
            "GET http://localhost/api/login?password=REDACTED: 500 (stackify id st-1) (message: denied)"
        );
        assert_eq!(err.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
    }
}
