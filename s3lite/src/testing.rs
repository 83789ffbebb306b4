//! Scripted in-memory transport for unit tests.

use std::{
    collections::VecDeque,
    future::Future,
    pin::Pin,
    sync::Mutex,
};

use bytes::Bytes;
use http::{HeaderMap, Method, Request, Response, StatusCode, Uri};
use http_body_util::{BodyExt, Full};

use crate::remotes::http::{BoxBody, DynHttpClient, HttpError};

#[derive(Debug, Clone)]
pub(crate) struct RecordedRequest {
    pub(crate) method: Method,
    pub(crate) uri: Uri,
    pub(crate) headers: HeaderMap,
    pub(crate) body: Bytes,
}

/// Answers requests from a queue of canned responses, in order, and records
/// what it was sent. Runs out of script with a transport error.
#[derive(Default)]
pub(crate) struct MockClient {
    responses: Mutex<VecDeque<(StatusCode, Bytes)>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl MockClient {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn respond(self, status: u16, body: &str) -> Self {
        self.responses.lock().unwrap().push_back((
            StatusCode::from_u16(status).unwrap(),
            Bytes::copy_from_slice(body.as_bytes()),
        ));
        self
    }

    pub(crate) fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl DynHttpClient for MockClient {
    fn dyn_send_request(
        &self,
        request: Request<BoxBody>,
    ) -> Pin<Box<dyn Future<Output = Result<Response<BoxBody>, HttpError>> + Send + '_>> {
        Box::pin(async move {
            let (parts, body) = request.into_parts();
            let body = body.collect().await?.to_bytes();
            self.requests.lock().unwrap().push(RecordedRequest {
                method: parts.method,
                uri: parts.uri,
                headers: parts.headers,
                body,
            });

            let (status, body) = self
                .responses
                .lock()
                .unwrap()
                .pop_front()
                .ok_or_else(|| HttpError::Other("mock client ran out of responses".into()))?;
            let response = Response::builder()
                .status(status)
                .body(BoxBody::new(Full::new(body).map_err(|never| match never {})))?;
            Ok(response)
        })
    }
}
