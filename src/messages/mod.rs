pub mod builder;
pub mod bundle;
pub mod format;

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::LazyLock;

use thiserror::Error;
use tracing::{debug, warn};

pub use builder::MessagesBuilder;
pub use bundle::{DEFAULT_LOCALE, available_locales};

#[derive(Debug, Error)]
pub enum MessagesError {
    #[error("failed to read bundle file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse bundle {name}: {source}")]
    Parse {
        name: String,
        #[source]
        source: toml::de::Error,
    },
    #[error("malformed template at byte {position}: {template:?}")]
    MalformedTemplate { template: String, position: usize },
}

static DEFAULT_STORE: LazyLock<Messages> = LazyLock::new(|| {
    let messages = MessagesBuilder::new().build();
    debug!(locale = %messages.locale(), "Default message store initialized");
    messages
});

/// Locale-bound, read-only mapping from period keys to templates.
#[derive(Debug, Clone)]
pub struct Messages {
    locale: String,
    templates: HashMap<String, String>,
}

impl Messages {
    pub(crate) fn new(locale: String, templates: HashMap<String, String>) -> Self {
        Self { locale, templates }
    }

    /// Process-wide store for the system locale, built on first use.
    pub fn default_store() -> &'static Messages {
        &DEFAULT_STORE
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.templates.get(key).map(String::as_str)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.templates.keys().map(String::as_str)
    }

    /// The template for `key`, or the key itself when it is missing.
    pub fn message(&self, key: &str) -> String {
        match self.get(key) {
            Some(template) => template.to_string(),
            None => {
                warn!(key = key, locale = %self.locale, "Missing message template");
                key.to_string()
            }
        }
    }

    /// The template for `key` with `{0}` replaced by `value`. A malformed
    /// template is returned as-is.
    pub fn message_with(&self, key: &str, value: i64) -> String {
        let template = self.message(key);
        match format::substitute(&template, value) {
            Ok(text) => text,
            Err(e) => {
                warn!(key = key, error = %e, "Template substitution failed");
                template
            }
        }
    }
}
