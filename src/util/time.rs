use anyhow::{Context, Result};
use chrono::{DateTime, TimeZone, Utc};

use crate::period::round_half_up;

/// Source of the current instant.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock stuck at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Signed whole minutes from `then` to `now`, positive when `then` is in
/// the past.
pub fn elapsed_minutes(now: &DateTime<Utc>, then: &DateTime<Utc>) -> i64 {
    let millis = now.signed_duration_since(then).num_milliseconds();
    round_half_up(millis as f64 / 60_000.0)
}

/// Parse an RFC 3339 timestamp or integer milliseconds since the epoch.
pub fn parse_instant(input: &str) -> Result<DateTime<Utc>> {
    let input = input.trim();
    if let Ok(millis) = input.parse::<i64>() {
        return Utc
            .timestamp_millis_opt(millis)
            .single()
            .with_context(|| format!("Timestamp out of range: {input}"));
    }
    let dt = DateTime::parse_from_rfc3339(input)
        .with_context(|| format!("Invalid timestamp: {input}"))?;
    Ok(dt.with_timezone(&Utc))
}
