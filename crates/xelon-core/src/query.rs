//! Query string encoding for list options.
//!
//! Options types declare their key mapping explicitly through [`ToQuery`];
//! [`add_options`] turns such a value into the query string of a relative
//! request path.

use crate::Result;
use std::fmt::Display;
use url::{form_urlencoded, Url};

// Only used to check that a relative path is syntactically valid.
const VALIDATION_BASE: &str = "http://xelon.invalid/";

/// Builder for assembling query parameter pairs.
#[derive(Debug, Default, Clone)]
pub struct QueryParams {
    pairs: Vec<(&'static str, String)>,
}

impl QueryParams {
    /// Create a new, empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Append a key/value pair when the value is present.
    pub fn push_opt<T>(&mut self, key: &'static str, value: Option<T>)
    where
        T: Display,
    {
        if let Some(value) = value {
            self.pairs.push((key, value.to_string()));
        }
    }

    /// Append a string value unless it is empty.
    pub fn push_non_empty(&mut self, key: &'static str, value: &str) {
        if !value.is_empty() {
            self.pairs.push((key, value.to_owned()));
        }
    }

    /// Append every pair produced by another options value.
    pub fn extend_from<O>(&mut self, options: &O)
    where
        O: ToQuery + ?Sized,
    {
        self.pairs.extend(options.to_pairs());
    }

    /// Return the collected key/value pairs.
    #[must_use]
    pub fn into_pairs(self) -> Vec<(&'static str, String)> {
        self.pairs
    }

    /// Returns true if no parameters have been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Static mapping from an options value to query pairs.
///
/// Implementations emit only the fields that carry a value.
pub trait ToQuery {
    /// Convert the options into URL query pairs.
    fn to_pairs(&self) -> Vec<(&'static str, String)>;
}

/// Pagination parameters shared by every list endpoint.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ListOptions {
    /// Page to fetch, starting at 1.
    pub page: Option<u32>,
    /// Number of items per page.
    pub per_page: Option<u32>,
}

impl ListOptions {
    /// Create empty pagination options.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            page: None,
            per_page: None,
        }
    }

    /// Select the page to fetch.
    #[must_use]
    pub const fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Set the page size.
    #[must_use]
    pub const fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }
}

impl ToQuery for ListOptions {
    fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut params = QueryParams::new();
        params.push_opt("page", self.page.filter(|page| *page > 0));
        params.push_opt("per_page", self.per_page.filter(|size| *size > 0));
        params.into_pairs()
    }
}

/// Append the encoded `options` to `path`.
///
/// `None` returns the path unchanged. Otherwise any existing query string is
/// replaced by the options, sorted by key. The `?` is left out when the
/// options produce no pairs.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidUrl`] when `path` is not a valid URL
/// reference.
pub fn add_options<O>(path: &str, options: Option<&O>) -> Result<String>
where
    O: ToQuery + ?Sized,
{
    let Some(options) = options else {
        return Ok(path.to_owned());
    };

    Url::parse(VALIDATION_BASE)?.join(path)?;

    let (rest, fragment) = match path.split_once('#') {
        Some((rest, fragment)) => (rest, Some(fragment)),
        None => (path, None),
    };
    let stem = rest.split_once('?').map_or(rest, |(stem, _)| stem);

    let mut pairs = options.to_pairs();
    pairs.sort_by_key(|(key, _)| *key);
    let query = form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish();

    let mut encoded = stem.to_owned();
    if !query.is_empty() {
        encoded.push('?');
        encoded.push_str(&query);
    }
    if let Some(fragment) = fragment {
        encoded.push('#');
        encoded.push_str(fragment);
    }
    Ok(encoded)
}
