pub mod client;
pub mod clock;
pub mod credential;
pub(crate) mod dispatch;
pub mod mime;
pub mod names;
pub(crate) mod options;
pub mod request;
pub mod sign;
pub mod tag;
pub mod verb;

pub use client::{PutOptions, StorageClient, StorageClientBuilder};
pub use clock::{Clock, SystemClock};
pub use credential::AwsCredential;
pub use names::names_from_url;
pub use options::{DEFAULT_MAX_REDIRECTS, DEFAULT_SERVICE_DOMAIN};
pub use request::Payload;
pub use verb::Verb;

const STRICT_ENCODE_SET: percent_encoding::AsciiSet = percent_encoding::NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');
const STRICT_PATH_ENCODE_SET: percent_encoding::AsciiSet = STRICT_ENCODE_SET.remove(b'/');
