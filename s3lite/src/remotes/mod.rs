pub mod aws;
pub mod http;
