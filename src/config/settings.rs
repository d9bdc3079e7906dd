//! Settings structures for songseek configuration

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main settings structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub server: ServerSettings,
    pub search: SearchSettings,
    pub outgoing: OutgoingSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            general: GeneralSettings::default(),
            server: ServerSettings::default(),
            search: SearchSettings::default(),
            outgoing: OutgoingSettings::default(),
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings: Settings = serde_yaml::from_str(&content)?;
        Ok(settings)
    }

    /// Merge with environment variables
    pub fn merge_env(&mut self) {
        // PORT is the one knob a deployment environment always sets
        if let Ok(val) = std::env::var("PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Ok(val) = std::env::var("SONGSEEK_PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Ok(val) = std::env::var("SONGSEEK_BIND_ADDRESS") {
            self.server.bind_address = val;
        }
        if let Ok(val) = std::env::var("SONGSEEK_DEBUG") {
            self.general.debug = val.parse().unwrap_or(false);
        }
    }
}

/// General settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Enable debug logging
    pub debug: bool,
    /// Instance name displayed in the UI
    pub instance_name: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            debug: false,
            instance_name: "Song Finder".to_string(),
        }
    }
}

/// Server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Server port
    pub port: u16,
    /// Bind address
    pub bind_address: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            port: 5000,
            bind_address: "0.0.0.0".to_string(),
        }
    }
}

/// Lookup behavior settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Duration floor for a qualifying candidate, in seconds
    pub min_duration_secs: u64,
    /// Candidates considered per query
    pub max_candidates: usize,
    /// Concurrent lookups per batch
    pub max_concurrency: usize,
    /// Per-lookup deadline in seconds
    pub lookup_timeout_secs: u64,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            min_duration_secs: crate::DEFAULT_MIN_DURATION_SECS,
            max_candidates: crate::DEFAULT_MAX_CANDIDATES,
            max_concurrency: crate::DEFAULT_MAX_CONCURRENCY,
            lookup_timeout_secs: crate::DEFAULT_LOOKUP_TIMEOUT,
        }
    }
}

/// Outgoing request settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutgoingSettings {
    /// Socket timeout for one backend request, in seconds
    pub request_timeout_secs: u64,
    /// Verify SSL certificates
    pub verify_ssl: bool,
}

impl Default for OutgoingSettings {
    fn default() -> Self {
        Self {
            request_timeout_secs: 10,
            verify_ssl: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.server.port, 5000);
        assert_eq!(settings.search.min_duration_secs, 180);
        assert_eq!(settings.search.max_concurrency, 5);
        assert_eq!(settings.search.lookup_timeout_secs, 15);
        assert_eq!(settings.outgoing.request_timeout_secs, 10);
        assert!(!settings.general.debug);
    }

    #[test]
    fn test_merge_env_port() {
        std::env::set_var("PORT", "8080");
        let mut settings = Settings::default();
        settings.merge_env();
        std::env::remove_var("PORT");

        assert_eq!(settings.server.port, 8080);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let settings: Settings = serde_yaml::from_str("server:\n  port: 9000\n").unwrap();
        assert_eq!(settings.server.port, 9000);
        assert_eq!(settings.server.bind_address, "0.0.0.0");
        assert_eq!(settings.search.max_candidates, 5);
    }
}
