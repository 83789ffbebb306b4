use thiserror::Error;

use crate::remotes::http::HttpError;

pub type BoxedError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Rejections raised locally, before any request is built.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("object name cannot be empty")]
    EmptyObjectName,
    #[error("object name cannot start with \"/\" or \"\\\": {name}")]
    LeadingSeparator { name: String },
    #[error("bucket is required but no default bucket specified")]
    MissingBucket,
    #[error("invalid header: {name:?}")]
    InvalidHeader { name: String },
    #[error("header is set by the client and cannot be supplied: {name}")]
    ReservedHeader { name: String },
    #[error("header supplied more than once: {name}")]
    DuplicateHeader { name: String },
}

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The service answered with an error body. `code` and `message` are empty
    /// when the body carried no `<Code>` / `<Message>` tags.
    #[error("storage error, code: {code}, message: {message}")]
    Storage { code: String, message: String },
    #[error("gave up after {limit} redirects, last endpoint: {endpoint}")]
    TooManyRedirects { limit: usize, endpoint: String },
    #[error(transparent)]
    Http(#[from] HttpError),
    #[error("invalid configuration: {message}")]
    Config { message: String },
    #[error(transparent)]
    Other(#[from] BoxedError),
}

impl Error {
    /// Service-defined error code, if the failure came from the service.
    pub fn code(&self) -> Option<&str> {
        match self {
            Error::Storage { code, .. } => Some(code.as_str()),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self.code(), Some("NoSuchKey" | "NoSuchBucket"))
    }
}
