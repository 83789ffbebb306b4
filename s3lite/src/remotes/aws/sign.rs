use std::iter;

use base64::{prelude::BASE64_STANDARD, Engine};
use http::{
    header::{AUTHORIZATION, CONTENT_TYPE, DATE},
    HeaderMap, HeaderName, HeaderValue,
};
use itertools::Itertools;
use ring::hmac;

use super::{
    credential::AwsCredential,
    request::{canonical_resource, Request},
    verb::Verb,
};
use crate::remotes::http::HttpError;

/// Everything the signature covers.
///
/// Absent MD5 or content type are empty strings, never dropped: each field
/// owns exactly one line of the string-to-sign.
#[derive(Debug, Clone)]
pub struct CanonicalRequest<'a> {
    pub verb: Verb,
    pub content_md5: &'a str,
    pub content_type: &'a str,
    pub date: &'a str,
    /// Header values only, in the order they are sent.
    pub extra_header_values: Vec<&'a str>,
    pub bucket: Option<&'a str>,
    pub object: &'a str,
}

impl CanonicalRequest<'_> {
    /// Verb, MD5, content type, date, extra header values, resource path;
    /// newline-joined, no trailing newline.
    pub fn string_to_sign(&self) -> String {
        let resource = canonical_resource(self.bucket, self.object);
        let joined = [self.verb.as_str(), self.content_md5, self.content_type, self.date]
            .into_iter()
            .chain(self.extra_header_values.iter().copied())
            .chain(iter::once(resource.as_str()))
            .join("\n");
        joined
    }

    /// Base64 HMAC-SHA1 of the string-to-sign, keyed by the secret.
    pub fn sign(&self, credential: &AwsCredential) -> String {
        let key = hmac::Key::new(
            hmac::HMAC_SHA1_FOR_LEGACY_USE_ONLY,
            credential.secret_key.as_bytes(),
        );
        let tag = hmac::sign(&key, self.string_to_sign().as_bytes());
        BASE64_STANDARD.encode(tag.as_ref())
    }
}

/// Writes the signed header set for one request. A fresh authorizer (and thus
/// a fresh date) is made per request.
pub(crate) struct Authorizer<'a> {
    credential: &'a AwsCredential,
    date: String,
}

impl<'a> Authorizer<'a> {
    pub(crate) fn new(credential: &'a AwsCredential, date: String) -> Self {
        Self { credential, date }
    }

    pub(crate) fn authorize(
        &self,
        request: &Request,
        headers: &mut HeaderMap,
    ) -> Result<(), HttpError> {
        let canonical = CanonicalRequest {
            verb: request.verb,
            content_md5: "",
            content_type: &request.content_type,
            date: &self.date,
            extra_header_values: request.headers.iter().map(|(_, v)| v.as_str()).collect(),
            bucket: request.bucket.as_deref(),
            object: &request.object,
        };
        let signature = canonical.sign(self.credential);

        for (name, value) in &request.headers {
            headers.insert(
                HeaderName::try_from(name.as_str())?,
                HeaderValue::try_from(value.as_str())?,
            );
        }
        if !request.content_type.is_empty() {
            headers.insert(
                CONTENT_TYPE,
                HeaderValue::try_from(request.content_type.as_str())?,
            );
        }
        headers.insert(DATE, HeaderValue::try_from(self.date.as_str())?);
        let mut authorization =
            HeaderValue::try_from(format!("AWS {}:{}", self.credential.key_id, signature))?;
        authorization.set_sensitive(true);
        headers.insert(AUTHORIZATION, authorization);

        Ok(())
    }
}
