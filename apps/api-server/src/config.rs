//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use quill_infra::GeminiConfig;
use quill_infra::upstream::{DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL, DEFAULT_RANDOM_USER_URL};

/// Configuration errors that stop the server from starting.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("GOOGLE_API_KEY is missing; set it in the environment or in .env")]
    MissingApiKey,
}

/// Where posts are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    /// The JSON file at `posts_file`.
    File,
    /// Process memory; everything is lost on restart.
    Memory,
}

impl StorageBackend {
    fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "memory" => StorageBackend::Memory,
            "file" => StorageBackend::File,
            other => {
                tracing::warn!(backend = other, "Unknown POSTS_STORE, using the JSON file");
                StorageBackend::File
            }
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub storage: StorageBackend,
    /// JSON file holding every post.
    pub posts_file: PathBuf,
    pub gemini: GeminiConfig,
    pub random_user_url: String,
    pub upstream_timeout: Option<Duration>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key/value source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("GOOGLE_API_KEY")
            .filter(|k| !k.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let upstream_timeout = lookup("UPSTREAM_TIMEOUT_SECS")
            .and_then(|s| s.parse().ok())
            .map(Duration::from_secs);

        let gemini = GeminiConfig {
            api_key,
            base_url: lookup("GEMINI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_GEMINI_BASE_URL.to_string()),
            model: lookup("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
            timeout: upstream_timeout,
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            storage: lookup("POSTS_STORE")
                .map(|s| StorageBackend::from_name(&s))
                .unwrap_or(StorageBackend::File),
            posts_file: lookup("POSTS_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("posts.json")),
            gemini,
            random_user_url: lookup("RANDOM_USER_URL")
                .unwrap_or_else(|| DEFAULT_RANDOM_USER_URL.to_string()),
            upstream_timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn refuses_to_load_without_api_key() {
        assert!(matches!(
            AppConfig::from_lookup(lookup(&[])),
            Err(ConfigError::MissingApiKey)
        ));
        assert!(matches!(
            AppConfig::from_lookup(lookup(&[("GOOGLE_API_KEY", "  ")])),
            Err(ConfigError::MissingApiKey)
        ));
    }

    #[test]
    fn applies_defaults() {
        let config = AppConfig::from_lookup(lookup(&[("GOOGLE_API_KEY", "secret")])).unwrap();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 3000);
        assert_eq!(config.storage, StorageBackend::File);
        assert_eq!(config.posts_file, PathBuf::from("posts.json"));
        assert_eq!(config.gemini.api_key, "secret");
        assert_eq!(config.gemini.model, "gemini-pro");
        assert_eq!(config.random_user_url, "https://randomuser.me/api/");
        assert!(config.upstream_timeout.is_none());
    }

    #[test]
    fn reads_overrides() {
        let config = AppConfig::from_lookup(lookup(&[
            ("GOOGLE_API_KEY", "secret"),
            ("PORT", "8081"),
            ("POSTS_FILE", "/var/lib/quill/posts.json"),
            ("GEMINI_MODEL", "gemini-1.5-flash"),
            ("UPSTREAM_TIMEOUT_SECS", "30"),
        ]))
        .unwrap();

        assert_eq!(config.port, 8081);
        assert_eq!(config.posts_file, PathBuf::from("/var/lib/quill/posts.json"));
        assert_eq!(config.gemini.model, "gemini-1.5-flash");
        assert_eq!(config.gemini.timeout, Some(Duration::from_secs(30)));
    }

    #[test]
    fn selects_storage_backend() {
        let store = |name| {
            AppConfig::from_lookup(lookup(&[("GOOGLE_API_KEY", "secret"), ("POSTS_STORE", name)]))
                .unwrap()
                .storage
        };

        assert_eq!(store("memory"), StorageBackend::Memory);
        assert_eq!(store("MEMORY"), StorageBackend::Memory);
        assert_eq!(store("file"), StorageBackend::File);
        assert_eq!(store("redis"), StorageBackend::File);
    }
}
