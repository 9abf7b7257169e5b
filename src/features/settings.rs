//! Application settings persistence
//!
//! Handles saving and loading user preferences.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Environment variable that overrides the configured backend URL
pub const BACKEND_URL_ENV: &str = "STATSCOUT_BACKEND_URL";

/// Application settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Stats backend connection
    #[serde(default)]
    pub backend: BackendSettings,
    /// Search-as-you-type timing
    #[serde(default)]
    pub search: SearchSettings,
    /// Display and interface settings
    #[serde(default)]
    pub display: DisplaySettings,
    /// Network settings
    #[serde(default)]
    pub network: NetworkSettings,
}

/// Stats backend connection settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendSettings {
    /// Base URL, without the `/api` suffix
    pub base_url: String,
    /// Whole-request timeout in seconds
    pub timeout_secs: u64,
}

/// Search widget timing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Quiet period before a lookup is sent
    pub debounce_ms: u64,
    /// How long the dropdown survives losing focus
    pub blur_grace_ms: u64,
}

impl SearchSettings {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn blur_grace(&self) -> Duration {
        Duration::from_millis(self.blur_grace_ms)
    }
}

/// Display and interface settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Dark mode enabled
    pub dark_mode: bool,
    /// Application language
    pub language: String,
}

/// Proxy type for network settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProxyType {
    /// No proxy
    #[default]
    None,
    /// HTTP proxy
    Http,
    /// HTTPS proxy
    Https,
    /// Use system proxy settings
    System,
}

/// Network settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkSettings {
    /// Proxy type
    pub proxy_type: ProxyType,
    /// Proxy host address
    pub proxy_host: String,
    /// Proxy port
    pub proxy_port: u16,
}

impl NetworkSettings {
    /// Build proxy URL string from settings
    /// Returns None if proxy is disabled or incomplete
    pub fn proxy_url(&self) -> Option<String> {
        let scheme = match self.proxy_type {
            ProxyType::None => return None,
            ProxyType::System => {
                return std::env::var("HTTP_PROXY")
                    .or_else(|_| std::env::var("http_proxy"))
                    .or_else(|_| std::env::var("HTTPS_PROXY"))
                    .or_else(|_| std::env::var("https_proxy"))
                    .ok();
            }
            ProxyType::Http => "http",
            ProxyType::Https => "https",
        };

        if self.proxy_host.is_empty() || self.proxy_port == 0 {
            return None;
        }
        Some(format!("{}://{}:{}", scheme, self.proxy_host, self.proxy_port))
    }
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8001".to_string(),
            timeout_secs: 10,
        }
    }
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            debounce_ms: 300,
            blur_grace_ms: 200,
        }
    }
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            dark_mode: true,
            language: "en".to_string(),
        }
    }
}

impl Settings {
    /// Get the settings file path
    pub fn file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "statscout", "Statscout")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from file, or return defaults if not found.
    /// The backend URL environment override is applied last.
    pub fn load() -> Self {
        let mut settings = match Self::file_path() {
            Some(path) => Self::load_or_create(&path),
            None => Self::default(),
        };
        settings.apply_backend_override(std::env::var(BACKEND_URL_ENV).ok());
        settings
    }

    /// Load `path`, writing the defaults there on first run.
    /// An unreadable file is left alone and defaults are used.
    pub fn load_or_create(path: &Path) -> Self {
        if !path.exists() {
            let settings = Self::default();
            match settings.save_to_file(path) {
                Ok(()) => tracing::info!("Created default settings at {}", path.display()),
                Err(e) => tracing::warn!("Failed to write default settings: {}", e),
            }
            return settings;
        }

        match Self::load_from_file(path) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!("Using default settings ({}): {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load settings from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| SettingsError::Io(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| SettingsError::Parse(e.to_string()))
    }

    /// Save settings to a specific file
    pub fn save_to_file(&self, path: &Path) -> Result<(), SettingsError> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SettingsError::Io(e.to_string()))?;
        }

        let content =
            serde_json::to_string_pretty(self).map_err(|e| SettingsError::Parse(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| SettingsError::Io(e.to_string()))?;
        Ok(())
    }

    /// Replace the backend URL when an override is set and non-blank
    pub fn apply_backend_override(&mut self, url: Option<String>) {
        if let Some(url) = url.map(|u| u.trim().to_string()).filter(|u| !u.is_empty()) {
            tracing::info!("Backend URL overridden by {}: {}", BACKEND_URL_ENV, url);
            self.backend.base_url = url;
        }
    }
}

/// Errors that can occur with settings
#[derive(Debug, Clone)]
pub enum SettingsError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "IO error: {}", e),
            SettingsError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.backend.base_url, "http://localhost:8001");
        assert_eq!(settings.backend.timeout_secs, 10);
        assert_eq!(settings.search.debounce(), Duration::from_millis(300));
        assert_eq!(settings.search.blur_grace(), Duration::from_millis(200));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let mut settings = Settings::default();
        settings.backend.base_url = "https://stats.example.net".to_string();
        settings.search.debounce_ms = 450;
        settings.save_to_file(&path).unwrap();

        let loaded = Settings::load_from_file(&path).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"search": {"debounce_ms": 150}}"#).unwrap();

        let loaded = Settings::load_from_file(&path).unwrap();
        assert_eq!(loaded.search.debounce_ms, 150);
        assert_eq!(loaded.search.blur_grace_ms, 200);
        assert_eq!(loaded.backend, BackendSettings::default());
    }

    #[test]
    fn test_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{not json").unwrap();

        assert!(matches!(
            Settings::load_from_file(&path),
            Err(SettingsError::Parse(_))
        ));
        assert!(matches!(
            Settings::load_from_file(&dir.path().join("missing.json")),
            Err(SettingsError::Io(_))
        ));
    }

    #[test]
    fn test_first_run_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config").join("settings.json");

        let settings = Settings::load_or_create(&path);
        assert_eq!(settings, Settings::default());
        assert!(path.exists());
        assert_eq!(Settings::load_from_file(&path).unwrap(), Settings::default());
    }

    #[test]
    fn test_corrupt_file_is_kept() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{not json").unwrap();

        assert_eq!(Settings::load_or_create(&path), Settings::default());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{not json");
    }

    #[test]
    fn test_backend_override() {
        let mut settings = Settings::default();
        settings.apply_backend_override(Some("   ".to_string()));
        assert_eq!(settings.backend.base_url, "http://localhost:8001");

        settings.apply_backend_override(Some(" http://10.0.0.2:9000 ".to_string()));
        assert_eq!(settings.backend.base_url, "http://10.0.0.2:9000");

        settings.apply_backend_override(None);
        assert_eq!(settings.backend.base_url, "http://10.0.0.2:9000");
    }

    #[test]
    fn test_proxy_url() {
        let mut network = NetworkSettings::default();
        assert_eq!(network.proxy_url(), None);

        network.proxy_type = ProxyType::Http;
        assert_eq!(network.proxy_url(), None);

        network.proxy_host = "127.0.0.1".to_string();
        network.proxy_port = 8080;
        assert_eq!(network.proxy_url().as_deref(), Some("http://127.0.0.1:8080"));
    }
}
