use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::Level;

/// Bundled defaults for builds that ship without a `.env` file.
const BUNDLED_CONFIG: &str = include_str!("../assets/config.env");

pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:5000";

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub api_base: String,
    pub data_dir: Option<PathBuf>,
    pub log_level: Level,
}

impl AppConfig {
    /// Process environment first, then the bundled `assets/config.env`.
    pub fn from_env() -> Result<Self> {
        let bundled = parse_env_lines(BUNDLED_CONFIG);
        Self::from_lookup(|key| {
            std::env::var(key).ok().or_else(|| {
                bundled
                    .iter()
                    .find(|(name, _)| *name == key)
                    .map(|(_, value)| value.to_string())
            })
        })
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_base = lookup("DCTM_API_BASE")
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(default_api_base);
        let data_dir = lookup("DCTM_DATA_DIR")
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);
        let log_level = match lookup("DCTM_LOG_LEVEL") {
            Some(raw) => raw
                .trim()
                .parse::<Level>()
                .with_context(|| format!("invalid DCTM_LOG_LEVEL {raw:?}"))?,
            None => Level::INFO,
        };
        Ok(Self {
            api_base,
            data_dir,
            log_level,
        })
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

/// Web builds talk to the server that served the page.
#[cfg(target_arch = "wasm32")]
fn default_api_base() -> String {
    web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
}

/// Loads a `.env` file from the working directory or its parents.
///
/// Runs before logging is configured, so the caller reports the result.
#[cfg(not(target_arch = "wasm32"))]
pub fn load_dotenv() -> Result<PathBuf, dotenvy::Error> {
    dotenvy::dotenv()
}

/// Load a `.env` file from an explicit path.
#[cfg(not(target_arch = "wasm32"))]
pub fn load_dotenv_from(path: &std::path::Path) -> Result<PathBuf, dotenvy::Error> {
    dotenvy::from_path(path).map(|()| path.to_path_buf())
}

#[cfg(target_arch = "wasm32")]
pub fn load_dotenv() -> Result<PathBuf, dotenvy::Error> {
    Err(dotenvy::Error::Io(std::io::Error::new(
        std::io::ErrorKind::Unsupported,
        "no filesystem in the browser",
    )))
}

fn parse_env_lines(source: &str) -> Vec<(&str, &str)> {
    source
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| (key.trim(), value.trim()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert_eq!(config.data_dir, None);
        assert_eq!(config.log_level, Level::INFO);
    }

    #[test]
    fn reads_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("DCTM_API_BASE", " https://enquiry.example.edu "),
            ("DCTM_DATA_DIR", "/tmp/dctm"),
            ("DCTM_LOG_LEVEL", "debug"),
        ]))
        .unwrap();
        assert_eq!(config.api_base, "https://enquiry.example.edu");
        assert_eq!(config.data_dir, Some(PathBuf::from("/tmp/dctm")));
        assert_eq!(config.log_level, Level::DEBUG);
    }

    #[test]
    fn rejects_bad_log_level() {
        let err = AppConfig::from_lookup(lookup_from(&[("DCTM_LOG_LEVEL", "loud")])).unwrap_err();
        assert!(err.to_string().contains("DCTM_LOG_LEVEL"));
    }

    #[test]
    fn dotenv_reports_loaded_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        std::fs::write(&path, "DCTM_DOTENV_TEST_MARKER=loaded\n").unwrap();

        assert_eq!(load_dotenv_from(&path).unwrap(), path);
        assert_eq!(
            std::env::var("DCTM_DOTENV_TEST_MARKER").as_deref(),
            Ok("loaded")
        );
        assert!(load_dotenv_from(&dir.path().join("missing.env")).is_err());
    }

    #[test]
    fn parses_bundled_lines() {
        let parsed = parse_env_lines("# comment\n\nDCTM_API_BASE = http://x\nBROKEN\n");
        assert_eq!(parsed, vec![("DCTM_API_BASE", "http://x")]);
    }
}
