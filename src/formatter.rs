use chrono::{DateTime, TimeZone, Utc};

use crate::messages::Messages;
use crate::render::describe;
use crate::util::time::{Clock, SystemClock, elapsed_minutes};

/// "Time ago" phrase for `instant` in the default store's locale.
pub fn time_ago(instant: &DateTime<Utc>) -> String {
    time_ago_with(instant, Messages::default_store())
}

/// "Time ago" phrase for `instant` using `messages`.
pub fn time_ago_with(instant: &DateTime<Utc>, messages: &Messages) -> String {
    TimeAgo::new(messages).format(instant)
}

/// Same as [`time_ago`] for milliseconds since the epoch. Out-of-range
/// values render as an empty string.
pub fn time_ago_millis(millis: i64) -> String {
    match Utc.timestamp_millis_opt(millis).single() {
        Some(instant) => time_ago(&instant),
        None => String::new(),
    }
}

/// Formatter bound to a message store and a clock.
pub struct TimeAgo<'a, C = SystemClock> {
    messages: &'a Messages,
    clock: C,
}

impl<'a> TimeAgo<'a> {
    pub fn new(messages: &'a Messages) -> Self {
        Self {
            messages,
            clock: SystemClock,
        }
    }
}

impl<'a, C: Clock> TimeAgo<'a, C> {
    pub fn with_clock<D: Clock>(self, clock: D) -> TimeAgo<'a, D> {
        TimeAgo {
            messages: self.messages,
            clock,
        }
    }

    pub fn messages(&self) -> &Messages {
        self.messages
    }

    pub fn format(&self, instant: &DateTime<Utc>) -> String {
        let minutes = elapsed_minutes(&self.clock.now(), instant);
        describe(minutes, self.messages)
    }
}
