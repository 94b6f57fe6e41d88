use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, warn};

use super::MessagesError;

pub const DEFAULT_LOCALE: &str = "en";

const BUNDLES: &[(&str, &str)] = &[
    ("en", include_str!("../../locales/en.toml")),
    ("ar", include_str!("../../locales/ar.toml")),
    ("cs", include_str!("../../locales/cs.toml")),
    ("da", include_str!("../../locales/da.toml")),
    ("de", include_str!("../../locales/de.toml")),
    ("es", include_str!("../../locales/es.toml")),
    ("eu", include_str!("../../locales/eu.toml")),
    ("fa", include_str!("../../locales/fa.toml")),
    ("fr", include_str!("../../locales/fr.toml")),
    ("id", include_str!("../../locales/id.toml")),
    ("it", include_str!("../../locales/it.toml")),
    ("nl", include_str!("../../locales/nl.toml")),
    ("pt", include_str!("../../locales/pt.toml")),
    ("tr", include_str!("../../locales/tr.toml")),
    ("zh", include_str!("../../locales/zh.toml")),
    ("zh_TW", include_str!("../../locales/zh_TW.toml")),
];

#[derive(Debug, Deserialize)]
struct BundleFile {
    #[serde(default)]
    messages: HashMap<String, String>,
}

pub fn available_locales() -> Vec<&'static str> {
    BUNDLES.iter().map(|(tag, _)| *tag).collect()
}

pub fn parse_bundle(name: &str, content: &str) -> Result<HashMap<String, String>, MessagesError> {
    let file: BundleFile = toml::from_str(content).map_err(|source| MessagesError::Parse {
        name: name.to_string(),
        source,
    })?;
    Ok(file.messages)
}

pub fn load_bundle_file(path: &Path) -> Result<HashMap<String, String>, MessagesError> {
    let content = std::fs::read_to_string(path).map_err(|source| MessagesError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let messages = parse_bundle(&path.display().to_string(), &content)?;
    debug!(path = %path.display(), count = messages.len(), "Loaded bundle file");
    Ok(messages)
}

fn shipped(tag: &str) -> Option<&'static str> {
    BUNDLES
        .iter()
        .find(|(name, _)| *name == tag)
        .map(|(_, content)| *content)
}

/// Normalize a language tag to `lang` or `lang_REGION`. Accepts `-` or `_`
/// separators, script subtags and POSIX suffixes (`pt_BR.UTF-8@euro`).
/// Legacy ISO 639 codes map to their current form (`in` is `id`), and
/// Traditional Chinese without a region is `zh_TW`.
pub fn normalize_tag(tag: &str) -> Option<String> {
    let tag = tag.split(['.', '@']).next().unwrap_or_default().trim();
    let mut parts = tag.split(['-', '_']);
    let language = parts.next()?.to_ascii_lowercase();
    if language.len() < 2 || !language.bytes().all(|b| b.is_ascii_alphabetic()) {
        return None;
    }
    let language = match language.as_str() {
        "in" => "id".to_string(),
        "iw" => "he".to_string(),
        "ji" => "yi".to_string(),
        _ => language,
    };

    let subtags: Vec<&str> = parts.collect();
    let region = subtags.iter().find(|p| {
        (p.len() == 2 && p.bytes().all(|b| b.is_ascii_alphabetic()))
            || (p.len() == 3 && p.bytes().all(|b| b.is_ascii_digit()))
    });
    let traditional = subtags.iter().any(|p| p.eq_ignore_ascii_case("hant"));

    Some(match region {
        Some(region) => format!("{language}_{}", region.to_ascii_uppercase()),
        None if language == "zh" && traditional => "zh_TW".to_string(),
        None => language,
    })
}

/// Most specific shipped locale for `tag`, trying `lang_REGION` then `lang`.
fn best_match(tag: &str) -> Option<String> {
    let normalized = normalize_tag(tag)?;
    if shipped(&normalized).is_some() {
        return Some(normalized);
    }
    let language = normalized.split('_').next()?;
    shipped(language).map(|_| language.to_string())
}

/// Resolve `requested`, falling back to `fallback` and then the default
/// locale.
pub fn resolve_locale(requested: &str, fallback: &str) -> String {
    if let Some(found) = best_match(requested) {
        debug!(requested = requested, resolved = %found, "Resolved locale");
        return found;
    }
    let resolved = best_match(fallback).unwrap_or_else(|| DEFAULT_LOCALE.to_string());
    debug!(
        requested = requested,
        resolved = %resolved,
        "Locale not shipped, using fallback"
    );
    resolved
}

/// Bundles consulted for `locale`, root first.
pub fn locale_chain(locale: &str) -> Vec<&str> {
    let mut chain = vec![DEFAULT_LOCALE];
    if let Some((language, _)) = locale.split_once('_')
        && language != DEFAULT_LOCALE
    {
        chain.push(language);
    }
    if locale != DEFAULT_LOCALE {
        chain.push(locale);
    }
    chain
}

/// Templates for a resolved locale, layered root first so a regional
/// bundle only needs to override what differs from its language.
pub fn layered_templates(locale: &str) -> HashMap<String, String> {
    merge_chain(&locale_chain(locale), shipped)
}

fn merge_chain<'a, F>(chain: &[&str], lookup: F) -> HashMap<String, String>
where
    F: Fn(&str) -> Option<&'a str>,
{
    let mut templates = HashMap::new();
    for &name in chain {
        let Some(content) = lookup(name) else {
            continue;
        };
        match parse_bundle(name, content) {
            Ok(messages) => templates.extend(messages),
            Err(e) => warn!(locale = name, error = %e, "Skipping unreadable bundle"),
        }
    }
    templates
}

/// Locale from the environment, in POSIX precedence order.
pub fn system_locale() -> Option<String> {
    ["LC_ALL", "LC_MESSAGES", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find(|value| !value.is_empty())
        .filter(|value| value != "C" && value != "POSIX")
}
