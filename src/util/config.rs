use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::messages::{DEFAULT_LOCALE, Messages, MessagesBuilder};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub locale: LocaleConfig,
    #[serde(default)]
    pub bundles: BundleConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocaleConfig {
    #[serde(default)]
    pub tag: Option<String>,
    #[serde(default = "default_fallback")]
    pub fallback: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BundleConfig {
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_fallback() -> String {
    DEFAULT_LOCALE.to_string()
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            tag: None,
            fallback: default_fallback(),
        }
    }
}

impl AppConfig {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::read(path);
        }

        // Search candidate paths in order
        let mut candidates = Vec::new();

        // 1. ~/.config/timeago/config.toml (standard XDG on all platforms)
        if let Some(home) = std::env::var_os("HOME") {
            candidates.push(PathBuf::from(home).join(".config/timeago/config.toml"));
        }

        // 2. Platform-specific path from `directories` crate
        if let Some(proj_dirs) = ProjectDirs::from("", "", "timeago") {
            candidates.push(proj_dirs.config_dir().join("config.toml"));
        }

        for config_path in &candidates {
            if config_path.exists() {
                return Self::read(config_path);
            }
        }

        Ok(AppConfig::default())
    }

    fn read(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content).with_context(|| "Failed to parse config file")
    }

    /// Build the message store this config describes. `locale` overrides
    /// the configured tag.
    pub fn messages(&self, locale: Option<&str>) -> Result<Messages> {
        let mut builder = MessagesBuilder::new().with_fallback_locale(&self.locale.fallback);
        match locale.or(self.locale.tag.as_deref()) {
            Some(tag) => builder = builder.with_locale(tag),
            None => builder = builder.default_locale(),
        }
        if let Some(ref file) = self.bundles.file {
            builder = builder.with_bundle_file(file)?;
        }
        Ok(builder.build())
    }

    pub fn log_dir(&self) -> PathBuf {
        if let Some(proj_dirs) = ProjectDirs::from("", "", "timeago") {
            return proj_dirs.data_dir().join("logs");
        }
        PathBuf::from(".local/share/timeago/logs")
    }
}
