use super::request::canonical_resource;

pub const DEFAULT_SERVICE_DOMAIN: &str = "s3.amazonaws.com";
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

/// Settled at build time, read-only afterwards.
#[derive(Debug, Clone)]
pub(crate) struct ClientOptions {
    pub(crate) service_domain: String,
    pub(crate) bucket: Option<String>,
    pub(crate) cname: bool,
    pub(crate) path_style: bool,
    pub(crate) secure: bool,
    pub(crate) max_redirects: usize,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            service_domain: DEFAULT_SERVICE_DOMAIN.to_string(),
            bucket: None,
            cname: false,
            path_style: false,
            secure: false,
            max_redirects: DEFAULT_MAX_REDIRECTS,
        }
    }
}

impl ClientOptions {
    pub(crate) fn scheme(&self) -> &'static str {
        if self.secure {
            "https"
        } else {
            "http"
        }
    }

    /// `<bucket>.<domain>` for virtual-hosted requests, the bare domain for
    /// path-style requests and for requests without a bucket.
    pub(crate) fn host_for(&self, bucket: Option<&str>) -> String {
        match bucket {
            Some(bucket) if !bucket.is_empty() && !self.path_style => {
                format!("{bucket}.{}", self.service_domain)
            }
            _ => self.service_domain.clone(),
        }
    }

    /// Path-style requests carry the bucket in the path, so the path is the
    /// canonical resource itself.
    pub(crate) fn path_for(&self, bucket: Option<&str>, object: &str) -> String {
        if self.path_style {
            canonical_resource(bucket, object)
        } else {
            format!("/{object}")
        }
    }

    /// Public URL of a stored object, as handed back by a PUT.
    pub(crate) fn object_url(&self, bucket: &str, object: &str) -> String {
        let scheme = self.scheme();
        if self.cname {
            format!("{scheme}://{bucket}/{object}")
        } else if self.path_style {
            format!("{scheme}://{}/{bucket}/{object}", self.service_domain)
        } else {
            format!("{scheme}://{bucket}.{}/{object}", self.service_domain)
        }
    }
}
