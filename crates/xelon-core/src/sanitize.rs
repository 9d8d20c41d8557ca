//! Credential redaction for URLs that end up in logs and error messages.

use std::borrow::Cow;
use url::{form_urlencoded, Url};

/// Marker substituted for redacted query values.
pub const REDACTED: &str = "REDACTED";

const PASSWORD_PARAM: &str = "password";

/// Replace the value of every `password` query parameter with [`REDACTED`].
///
/// Only the password values change; every other pair keeps its exact
/// encoding and position. URLs without a `password` parameter are left
/// untouched.
pub fn redact_password(url: &mut Url) {
    let Some(query) = url.query() else {
        return;
    };

    let mut redacted = false;
    let pairs: Vec<Cow<'_, str>> = query
        .split('&')
        .map(|pair| {
            let is_password = form_urlencoded::parse(pair.as_bytes())
                .next()
                .is_some_and(|(key, _)| key == PASSWORD_PARAM);
            if !is_password {
                return Cow::Borrowed(pair);
            }
            redacted = true;
            let key = pair.split_once('=').map_or(pair, |(key, _)| key);
            Cow::Owned(format!("{key}={REDACTED}"))
        })
        .collect();

    if redacted {
        let query = pairs.join("&");
        url.set_query(Some(&query));
    }
}

/// Returns a copy of `url` with any `password` query value redacted.
#[must_use]
pub fn sanitize_url(url: &Url) -> Url {
    let mut sanitized = url.clone();
    redact_password(&mut sanitized);
    sanitized
}
