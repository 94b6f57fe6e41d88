//! Localized "time ago" phrases such as "about an hour ago" or "in 3 days".
//!
//! ```
//! use chrono::{Duration, Utc};
//! use timeago::{MessagesBuilder, time_ago_with};
//!
//! let messages = MessagesBuilder::new().with_locale("en").build();
//! let then = Utc::now() - Duration::minutes(6);
//! assert_eq!(time_ago_with(&then, &messages), "6 minutes ago");
//! ```

pub mod formatter;
pub mod messages;
pub mod period;
pub mod render;
pub mod util;

pub use formatter::{TimeAgo, time_ago, time_ago_millis, time_ago_with};
pub use messages::{Messages, MessagesBuilder, MessagesError};
pub use period::{Period, classify};
pub use render::{describe, render};
