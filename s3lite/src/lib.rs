//! s3lite is a small client for S3-compatible object storage that signs its
//! requests with the legacy `AWS <key id>:<signature>` HMAC-SHA1 scheme.
//!
//! It covers bucket listing and object GET / PUT / DELETE, and transparently
//! resends a request when the service answers with a `TemporaryRedirect` to a
//! regional endpoint.
//!
//! # Example
//! ```no_run
//! use s3lite::{AwsCredential, Error, StorageClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Error> {
//!     let s3 = StorageClient::builder(AwsCredential::new("access_key_id", "access_key_secret"))
//!         .bucket("my.bucket.name")
//!         .build()?;
//!
//!     let url = s3
//!         .put_object("path/hello.html", "this is just a test", None)
//!         .await?;
//!     // http://my.bucket.name.s3.amazonaws.com/path/hello.html
//!     println!("{url}");
//!
//!     let content = s3.get_object("path/hello.html", None).await?;
//!     assert_eq!(content, "this is just a test");
//!
//!     s3.delete_object("path/hello.html", None).await?;
//!     match s3.get_object("path/hello.html", None).await {
//!         Err(err) if err.is_not_found() => {}
//!         other => panic!("expected NoSuchKey, got {other:?}"),
//!     }
//!     Ok(())
//! }
//! ```

mod error;
pub mod remotes;
#[cfg(test)]
mod testing;

pub use error::{BoxedError, Error, ValidationError};
pub use remotes::aws::{
    names_from_url, AwsCredential, Clock, Payload, PutOptions, StorageClient, StorageClientBuilder,
    SystemClock, Verb,
};
