use thiserror::Error;

use crate::BoxedError;

/// Failures below the service level: the request never produced a response
/// the service could have rejected.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum HttpError {
    #[error(transparent)]
    Http(#[from] http::Error),
    #[cfg(feature = "tokio-http")]
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),
    #[error(transparent)]
    InvalidHeaderName(#[from] http::header::InvalidHeaderName),
    #[error(transparent)]
    InvalidHeaderValue(#[from] http::header::InvalidHeaderValue),
    #[error(transparent)]
    Other(#[from] BoxedError),
}
