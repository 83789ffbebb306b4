use std::sync::Arc;

use bytes::Bytes;
use http::{header::CONTENT_LENGTH, HeaderMap, Request, Response};
use http_body_util::{BodyExt, Empty, Full};
use tracing::{debug, warn};

use super::{tag::ErrorResponse, verb::Verb};
use crate::{
    remotes::http::{BoxBody, DynHttpClient, HttpError},
    Error,
};

/// Sends signed requests and follows the service's `TemporaryRedirect`
/// answers, resending the identical request to the named endpoint.
pub(crate) struct Dispatcher {
    client: Arc<dyn DynHttpClient>,
    scheme: &'static str,
    max_redirects: usize,
}

impl Dispatcher {
    pub(crate) fn new(
        client: Arc<dyn DynHttpClient>,
        scheme: &'static str,
        max_redirects: usize,
    ) -> Self {
        Self {
            client,
            scheme,
            max_redirects,
        }
    }

    /// Returns the response body for GET and `None` for PUT / DELETE.
    ///
    /// Every attempt, redirected or not, carries the same verb, path, payload
    /// and headers; only the host changes.
    pub(crate) async fn send(
        &self,
        host: &str,
        verb: Verb,
        path: &str,
        payload: Option<Bytes>,
        headers: &HeaderMap,
    ) -> Result<Option<Bytes>, Error> {
        let mut host = host.to_string();
        let mut redirects = 0;

        loop {
            let response = self
                .send_once(&host, verb, path, payload.clone(), headers)
                .await?;
            let status = response.status();
            debug!(%verb, %host, path, %status, "received response");

            let body = response
                .into_body()
                .collect()
                .await
                .map_err(Error::Http)?
                .to_bytes();
            if status.is_success() {
                return Ok(verb.returns_body().then_some(body));
            }

            let error = ErrorResponse::parse(&String::from_utf8_lossy(&body));
            if !error.is_temporary_redirect() {
                return Err(Error::Storage {
                    code: error.code,
                    message: error.message,
                });
            }
            // a redirect that names no endpoint cannot be followed
            let endpoint = match error.endpoint {
                Some(endpoint) if !endpoint.is_empty() => endpoint,
                _ => {
                    return Err(Error::Storage {
                        code: error.code,
                        message: error.message,
                    })
                }
            };

            redirects += 1;
            if redirects > self.max_redirects {
                return Err(Error::TooManyRedirects {
                    limit: self.max_redirects,
                    endpoint,
                });
            }
            warn!(%endpoint, redirects, "resend http request to endpoint");
            host = endpoint;
        }
    }

    async fn send_once(
        &self,
        host: &str,
        verb: Verb,
        path: &str,
        payload: Option<Bytes>,
        headers: &HeaderMap,
    ) -> Result<Response<BoxBody>, HttpError> {
        let uri = format!("{}://{}{}", self.scheme, host, path);
        debug!(%verb, %uri, "sending request");

        let mut builder = Request::builder().method(verb.method()).uri(uri);
        let body = match payload {
            Some(payload) => {
                builder = builder.header(CONTENT_LENGTH, payload.len());
                BoxBody::new(Full::new(payload).map_err(|never| match never {}))
            }
            None => BoxBody::new(Empty::<Bytes>::new().map_err(|never| match never {})),
        };
        let mut request = builder.body(body)?;
        for (name, value) in headers {
            request.headers_mut().insert(name.clone(), value.clone());
        }

        self.client.dyn_send_request(request).await
    }
}
