use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

/// Source of block timestamps.
pub trait Clock: Send + Sync {
    /// The current time, rendered as the string stored in a block.
    fn now(&self) -> String;
}

/// Wall-clock time in UTC, formatted as RFC 3339.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> String {
        let now = OffsetDateTime::now_utc();
        now.format(&Rfc3339)
            .unwrap_or_else(|_| now.unix_timestamp().to_string())
    }
}

/// Always returns the same timestamp.
#[derive(Clone, Debug)]
pub struct FixedClock(pub String);

impl FixedClock {
    #[must_use]
    pub fn new(timestamp: impl Into<String>) -> Self {
        Self(timestamp.into())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> String {
        self.0.clone()
    }
}
