use std::{fmt, pin::Pin};

use bytes::{Bytes, BytesMut};
use futures_core::Stream;
use futures_util::TryStreamExt;

use super::verb::Verb;
use crate::{BoxedError, Error};

pub type ByteStream = Pin<Box<dyn Stream<Item = Result<Bytes, BoxedError>> + Send>>;

/// Object content handed to a PUT.
///
/// Streams are drained into memory before the request is sent; there is no
/// chunked upload.
pub enum Payload {
    Bytes(Bytes),
    Stream(ByteStream),
}

impl Payload {
    pub fn from_stream<S, E>(stream: S) -> Self
    where
        S: Stream<Item = Result<Bytes, E>> + Send + 'static,
        E: Into<BoxedError> + 'static,
    {
        Payload::Stream(Box::pin(stream.map_err(Into::<BoxedError>::into)))
    }

    pub async fn into_bytes(self) -> Result<Bytes, Error> {
        match self {
            Payload::Bytes(bytes) => Ok(bytes),
            Payload::Stream(stream) => {
                let buf = stream
                    .try_fold(BytesMut::new(), |mut buf, chunk| async move {
                        buf.extend_from_slice(&chunk);
                        Ok(buf)
                    })
                    .await
                    .map_err(Error::Other)?;
                Ok(buf.freeze())
            }
        }
    }
}

impl fmt::Debug for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Payload::Bytes(bytes) => f.debug_tuple("Bytes").field(&bytes.len()).finish(),
            Payload::Stream(_) => f.write_str("Stream"),
        }
    }
}

impl From<Bytes> for Payload {
    fn from(bytes: Bytes) -> Self {
        Payload::Bytes(bytes)
    }
}

impl From<Vec<u8>> for Payload {
    fn from(bytes: Vec<u8>) -> Self {
        Payload::Bytes(bytes.into())
    }
}

impl From<String> for Payload {
    fn from(s: String) -> Self {
        Payload::Bytes(s.into())
    }
}

impl From<&'static str> for Payload {
    fn from(s: &'static str) -> Self {
        Payload::Bytes(Bytes::from_static(s.as_bytes()))
    }
}

impl From<&'static [u8]> for Payload {
    fn from(bytes: &'static [u8]) -> Self {
        Payload::Bytes(Bytes::from_static(bytes))
    }
}

/// One call's worth of request state, consumed by the call.
///
/// `object` is the key exactly as it appears on the wire; it is what the
/// signature covers. `headers` are extra headers whose values are signed in
/// insertion order.
#[derive(Debug)]
pub(crate) struct Request {
    pub(crate) verb: Verb,
    pub(crate) bucket: Option<String>,
    pub(crate) object: String,
    pub(crate) content_type: String,
    pub(crate) payload: Option<Payload>,
    pub(crate) headers: Vec<(String, String)>,
}

impl Request {
    pub(crate) fn new(verb: Verb, bucket: Option<String>, object: String) -> Self {
        Self {
            verb,
            bucket,
            object,
            content_type: String::new(),
            payload: None,
            headers: Vec::new(),
        }
    }

    pub(crate) fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    pub(crate) fn payload(mut self, payload: Payload) -> Self {
        self.payload = Some(payload);
        self
    }

    pub(crate) fn headers(mut self, headers: Vec<(String, String)>) -> Self {
        self.headers = headers;
        self
    }

    /// `/bucket/object` with a bucket, `/object` without one.
    pub(crate) fn resource(&self) -> String {
        canonical_resource(self.bucket.as_deref(), &self.object)
    }
}

pub fn canonical_resource(bucket: Option<&str>, object: &str) -> String {
    match bucket {
        Some(bucket) if !bucket.is_empty() => format!("/{bucket}/{object}"),
        _ => format!("/{object}"),
    }
}
