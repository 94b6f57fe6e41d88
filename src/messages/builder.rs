use std::collections::HashMap;
use std::path::Path;

use tracing::debug;

use super::bundle::{self, DEFAULT_LOCALE};
use super::{Messages, MessagesError};

/// Configuration for a [`Messages`] store.
///
/// ```
/// use timeago::MessagesBuilder;
///
/// let messages = MessagesBuilder::new().with_locale("es").build();
/// assert_eq!(messages.locale(), "es");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MessagesBuilder {
    locale: Option<String>,
    fallback_locale: Option<String>,
    bundle: Option<HashMap<String, String>>,
}

impl MessagesBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the locale from the environment (`LC_ALL`, `LC_MESSAGES`, `LANG`).
    pub fn default_locale(mut self) -> Self {
        self.locale = bundle::system_locale();
        self
    }

    pub fn with_locale(mut self, tag: impl Into<String>) -> Self {
        self.locale = Some(tag.into());
        self
    }

    pub fn with_fallback_locale(mut self, tag: impl Into<String>) -> Self {
        self.fallback_locale = Some(tag.into());
        self
    }

    /// Use a custom key to template map instead of a shipped locale.
    pub fn with_bundle(mut self, bundle: HashMap<String, String>) -> Self {
        self.bundle = Some(bundle);
        self
    }

    /// Read a custom bundle from a TOML file with a `[messages]` table.
    pub fn with_bundle_file(self, path: &Path) -> Result<Self, MessagesError> {
        let bundle = bundle::load_bundle_file(path)?;
        Ok(self.with_bundle(bundle))
    }

    pub fn build(self) -> Messages {
        let requested = self
            .locale
            .or_else(bundle::system_locale)
            .unwrap_or_else(|| DEFAULT_LOCALE.to_string());

        if let Some(templates) = self.bundle {
            debug!(locale = %requested, count = templates.len(), "Using custom bundle");
            return Messages::new(requested, templates);
        }

        let fallback = self.fallback_locale.as_deref().unwrap_or(DEFAULT_LOCALE);
        let locale = bundle::resolve_locale(&requested, fallback);
        let templates = bundle::layered_templates(&locale);
        Messages::new(locale, templates)
    }
}
