//! Runtime configuration: built-in defaults, an optional `config.toml` in the
//! platform config directory, then environment overrides.
//!
//! Problems with either source are logged and skipped; loading never fails.

use std::path::Path;
use std::time::Duration;

use serde::Serialize;
use tracing::{debug, warn};

use crate::types::Tag;

pub const DEFAULT_ENDPOINT: &str = "https://hn.algolia.com/api/v1/search";

/// Link target for rows without a URL.
pub const FALLBACK_URL: &str = "https://gatinhosfofos.com.br/";

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

pub const ENV_ENDPOINT: &str = "HNSEARCH_ENDPOINT";
pub const ENV_TIMEOUT_SECS: &str = "HNSEARCH_TIMEOUT_SECS";

const KNOWN_CONFIG_KEYS: &[&str] = &["endpoint", "default_tag", "fallback_url", "timeout_secs"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Config {
    pub endpoint: String,
    pub default_tag: Tag,
    pub fallback_url: String,
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            default_tag: Tag::default(),
            fallback_url: FALLBACK_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Config {
    /// Defaults, then `<config_dir>/config.toml`, then the process environment.
    pub fn load() -> Self {
        let mut config = match crate::config_dir() {
            Some(dir) => Self::from_file(&dir.join("config.toml")),
            None => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok());
        config
    }

    /// Defaults merged with `path`, if it exists and parses.
    pub fn from_file(path: &Path) -> Self {
        let mut config = Self::default();
        if !path.exists() {
            return config;
        }

        debug!(path = %path.display(), "Loading config");
        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Could not read config file");
                return config;
            }
        };
        match content.parse::<toml::Table>() {
            Ok(table) => config.apply_table(&table),
            Err(e) => warn!(path = %path.display(), error = %e, "Invalid TOML in config file"),
        }
        config
    }

    /// Merge known keys from a parsed TOML table, warning on anything else.
    pub fn apply_table(&mut self, table: &toml::Table) {
        for key in table.keys() {
            if KNOWN_CONFIG_KEYS.contains(&key.as_str()) {
                continue;
            }
            match KNOWN_CONFIG_KEYS.iter().min_by_key(|k| edit_distance(key, k)) {
                Some(suggestion) if edit_distance(key, suggestion) <= 3 => warn!(
                    key = key.as_str(),
                    suggestion = *suggestion,
                    "Unknown config key — did you mean '{suggestion}'?"
                ),
                _ => warn!(
                    key = key.as_str(),
                    "Unknown config key (known keys: {})",
                    KNOWN_CONFIG_KEYS.join(", ")
                ),
            }
        }

        if let Some(v) = table.get("endpoint") {
            match v.as_str() {
                Some(s) => self.endpoint = s.to_string(),
                None => warn!("'endpoint' must be a string"),
            }
        }

        if let Some(v) = table.get("default_tag") {
            match v.as_str().map(str::parse::<Tag>) {
                Some(Ok(tag)) => self.default_tag = tag,
                Some(Err(e)) => warn!(error = %e, "Ignoring 'default_tag'"),
                None => warn!("'default_tag' must be a string"),
            }
        }

        if let Some(v) = table.get("fallback_url") {
            match v.as_str() {
                Some(s) if !s.is_empty() => self.fallback_url = s.to_string(),
                _ => warn!("'fallback_url' must be a non-empty string"),
            }
        }

        if let Some(v) = table.get("timeout_secs") {
            match v.as_integer() {
                Some(n) if n > 0 => self.timeout_secs = n as u64,
                _ => warn!("'timeout_secs' must be a positive integer"),
            }
        }
    }

    /// Apply `HNSEARCH_*` overrides read through `get`.
    pub fn apply_env(&mut self, get: impl Fn(&str) -> Option<String>) {
        if let Some(endpoint) = get(ENV_ENDPOINT).filter(|s| !s.trim().is_empty()) {
            self.endpoint = endpoint;
        }
        if let Some(raw) = get(ENV_TIMEOUT_SECS) {
            match raw.trim().parse::<u64>() {
                Ok(n) if n > 0 => self.timeout_secs = n,
                _ => warn!(value = %raw, "Ignoring {ENV_TIMEOUT_SECS}: expected a positive integer"),
            }
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Simple Levenshtein edit distance for typo suggestions.
fn edit_distance(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];
    for (i, &ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}
