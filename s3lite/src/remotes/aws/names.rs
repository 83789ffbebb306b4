use std::{collections::HashSet, sync::LazyLock};

use http::{
    header::{AUTHORIZATION, CONTENT_LENGTH, CONTENT_TYPE, DATE, HOST},
    HeaderName, HeaderValue,
};
use percent_encoding::utf8_percent_encode;
use regex::Regex;

use super::STRICT_PATH_ENCODE_SET;
use crate::ValidationError;

// `http://<bucket>.s3[-region].amazonaws.com/<object>`
static VIRTUAL_HOSTED_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^http://([.\w]+)\.s3[-\w]*\.amazonaws\.com/(.+)$").expect("valid url pattern")
});
// `http://s3[-region].amazonaws.com/<bucket>/<object>`
static PATH_STYLE_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^http://s3[-\w]*\.amazonaws\.com/([.\w]+)/(.+)$").expect("valid url pattern")
});
// `http://<cname>/<object>`, the whole host is taken as the bucket
static CNAME_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^http://([.\-\w]+)/(.+)$").expect("valid url pattern"));

/// Rejects empty names and names starting with `/` or `\`.
pub fn validate_object(name: &str) -> Result<&str, ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::EmptyObjectName);
    }
    if name.starts_with(['/', '\\']) {
        return Err(ValidationError::LeadingSeparator {
            name: name.to_string(),
        });
    }
    Ok(name)
}

/// An explicit bucket wins over the configured default.
pub fn resolve_bucket(
    explicit: Option<&str>,
    default: Option<&str>,
) -> Result<String, ValidationError> {
    explicit
        .filter(|bucket| !bucket.is_empty())
        .or(default.filter(|bucket| !bucket.is_empty()))
        .map(str::to_string)
        .ok_or(ValidationError::MissingBucket)
}

/// Checks caller-supplied headers before anything is signed.
///
/// Every value is signed as its own line and every header is sent once, so a
/// name may appear only once and may not be one the client writes itself.
pub(crate) fn validate_headers(headers: &[(String, String)]) -> Result<(), ValidationError> {
    let mut seen = HashSet::new();
    for (name, value) in headers {
        let header = HeaderName::try_from(name.as_str())
            .map_err(|_| ValidationError::InvalidHeader { name: name.clone() })?;
        if HeaderValue::try_from(value.as_str()).is_err() {
            return Err(ValidationError::InvalidHeader { name: name.clone() });
        }
        if [AUTHORIZATION, CONTENT_LENGTH, CONTENT_TYPE, DATE, HOST].contains(&header) {
            return Err(ValidationError::ReservedHeader {
                name: header.to_string(),
            });
        }
        if !seen.insert(header.clone()) {
            return Err(ValidationError::DuplicateHeader {
                name: header.to_string(),
            });
        }
    }
    Ok(())
}

/// Percent-encodes an object name for the request path, keeping `/`.
pub(crate) fn encode_key(name: &str) -> String {
    utf8_percent_encode(name, &STRICT_PATH_ENCODE_SET).to_string()
}

/// Splits an object URL into `(bucket, object)`.
///
/// Recognizes virtual-hosted and path-style service URLs (with or without a
/// region suffix) and falls back to treating any other host as a CNAME'd
/// bucket. A URL with nothing after the host gives `(None, None)`.
pub fn names_from_url(url: &str) -> (Option<String>, Option<String>) {
    [&*VIRTUAL_HOSTED_URL, &*PATH_STYLE_URL, &*CNAME_URL]
        .into_iter()
        .find_map(|pattern| pattern.captures(url))
        .map(|captures| (Some(captures[1].to_string()), Some(captures[2].to_string())))
        .unwrap_or((None, None))
}
