use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use ninedays_feed::{endpoint_for_lang, DEFAULT_ENDPOINT};
use serde::{Deserialize, Serialize};

/// Viewer configuration, read from `<config-dir>/ninedays/config.toml`.
///
/// Everything is optional; an absent file means defaults. The
/// `NINEDAYS_ENDPOINT` environment variable overrides both fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Full feed URL. Takes precedence over `lang`.
    pub endpoint: Option<String>,
    /// Bulletin language: `en`, `tc` or `sc`.
    pub lang: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let mut config = match Self::config_dir() {
            Ok(dir) => Self::load_from(&dir.join("config.toml"))?,
            Err(_) => Self::default(),
        };
        if let Ok(endpoint) = std::env::var("NINEDAYS_ENDPOINT") {
            config.endpoint = Some(endpoint);
        }
        Ok(config)
    }

    fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        toml::from_str(&raw)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    pub fn config_dir() -> Result<PathBuf> {
        let dir = dirs::config_dir().context("could not determine the config directory")?;
        Ok(dir.join("ninedays"))
    }

    /// The feed URL this run should hit.
    pub fn endpoint_url(&self) -> String {
        if let Some(endpoint) = &self.endpoint {
            return endpoint.clone();
        }
        match &self.lang {
            Some(lang) => endpoint_for_lang(lang),
            None => DEFAULT_ENDPOINT.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
    use super::*;

    #[test]
    fn defaults_to_the_english_bulletin() {
        let config = Config::default();
        assert_eq!(config.endpoint_url(), DEFAULT_ENDPOINT);
    }

    #[test]
    fn lang_selects_the_bulletin_language() {
        let config = Config {
            lang: Some("tc".into()),
            ..Config::default()
        };
        assert!(config.endpoint_url().ends_with("lang=tc"));
    }

    #[test]
    fn explicit_endpoint_wins_over_lang() {
        let config = Config {
            endpoint: Some("http://localhost:1234/feed".into()),
            lang: Some("tc".into()),
        };
        assert_eq!(config.endpoint_url(), "http://localhost:1234/feed");
    }

    #[test]
    fn missing_file_means_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert!(config.endpoint.is_none());
        assert!(config.lang.is_none());
    }

    #[test]
    fn reads_a_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "lang = \"sc\"\n").unwrap();
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.lang.as_deref(), Some("sc"));
    }

    #[test]
    fn rejects_an_unparseable_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "lang = [not toml").unwrap();
        assert!(Config::load_from(&path).is_err());
    }
}
