use bytes::Bytes;
use http::{Request, Response};
use http_body::Body;
use reqwest::redirect::Policy;

use super::{HttpClient, HttpError};
use crate::BoxedError;

/// reqwest-backed transport.
///
/// HTTP-level redirects are never followed here: a `307` from the service
/// carries the `TemporaryRedirect` body the dispatcher has to see.
#[derive(Debug, Clone)]
pub struct TokioClient {
    client: reqwest::Client,
}

impl TokioClient {
    pub fn new() -> Result<Self, HttpError> {
        let client = reqwest::Client::builder()
            .redirect(Policy::none())
            .build()?;
        Ok(Self { client })
    }

    /// Wraps a caller-configured client (timeouts, proxies, TLS). The caller is
    /// responsible for disabling redirect following on it.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl HttpClient for TokioClient {
    type RespBody = reqwest::Body;

    async fn send_request<B>(
        &self,
        request: Request<B>,
    ) -> Result<Response<Self::RespBody>, HttpError>
    where
        B: Body + Send + Sync + 'static,
        B::Data: Into<Bytes>,
        B::Error: Into<BoxedError>,
    {
        let (parts, body) = request.into_parts();
        let request = Request::from_parts(parts, reqwest::Body::wrap(body));
        let request = reqwest::Request::try_from(request)?;
        let response = self.client.execute(request).await?;
        Ok(response.into())
    }
}
