use chrono::{DateTime, Utc};

/// Wall-clock source for the `date` command.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Reads `Date.now()` from the JS host.
pub struct BrowserClock;

impl Clock for BrowserClock {
    fn now(&self) -> DateTime<Utc> {
        let ms = js_sys::Date::now() as i64;
        DateTime::from_timestamp_millis(ms).unwrap_or_default()
    }
}

pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Locale-independent rendering, e.g. `Sun Oct 18 2026 09:30:00 UTC`.
pub fn format_timestamp(at: &DateTime<Utc>) -> String {
    at.format("%a %b %d %Y %H:%M:%S UTC").to_string()
}
