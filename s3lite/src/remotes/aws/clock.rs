use std::time::SystemTime;

use chrono::{DateTime, Utc};

/// Source of the timestamp that goes into both the `Date` header and the
/// signature.
pub trait Clock: Send + Sync + 'static {
    fn now(&self) -> SystemTime;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> SystemTime {
        SystemTime::now()
    }
}

/// RFC 1123 style GMT timestamp, e.g. `Tue, 27 Mar 2007 21:15:45 +0000`.
pub fn http_date(time: SystemTime) -> String {
    DateTime::<Utc>::from(time)
        .format("%a, %d %b %Y %H:%M:%S +0000")
        .to_string()
}
