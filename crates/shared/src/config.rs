//! Configuration types for the traffic police service
//!
//! Loaded in layers: built-in defaults, an optional JSON or YAML file,
//! then environment variables. The binary applies CLI flags last.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use crate::error::{ConfigError, Result};

/// How accident records are matched against a plate
///
/// Mirrors `police_domain::PlateMatch`; the binary maps one onto the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlateMatchMode {
    /// Substring containment on the raw delimited field
    #[default]
    Substring,
    /// Exact membership in the parsed plate list
    Token,
}

impl FromStr for PlateMatchMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "substring" => Ok(PlateMatchMode::Substring),
            "token" => Ok(PlateMatchMode::Token),
            other => Err(ConfigError::InvalidOverride {
                key: "ACCIDENT_PLATE_MATCH".to_string(),
                value: other.to_string(),
            }),
        }
    }
}

/// Service configuration (config.json / config.yaml)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServiceConfig {
    /// HTTP listen port
    pub port: u16,

    /// Base URL of the vehicle registry
    pub vehicle_service_url: String,

    /// Base URL of the notification (email) service
    pub notification_service_url: String,

    /// Transport timeout for every outbound call
    pub registry_timeout_ms: u64,

    /// Capacity of the detached notification queue
    pub notification_queue_capacity: usize,

    /// Accident participation matching
    pub accident_plate_match: PlateMatchMode,

    /// Origin allowed by CORS (the police frontend)
    pub cors_allowed_origin: String,

    /// Fallback log filter when RUST_LOG is unset
    pub log_level: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            vehicle_service_url: "http://vehicleservice:8080".to_string(),
            notification_service_url: "http://notificationservice:8080".to_string(),
            registry_timeout_ms: 5000,
            notification_queue_capacity: 256,
            accident_plate_match: PlateMatchMode::Substring,
            cors_allowed_origin: "http://localhost:4200".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl ServiceConfig {
    /// Load defaults, the optional file and environment overrides, then validate
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a JSON or YAML file (chosen by extension)
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let is_yaml = matches!(
            path.extension().and_then(|e| e.to_str()),
            Some("yaml") | Some("yml")
        );

        if is_yaml {
            Ok(serde_yaml::from_str(&content)?)
        } else {
            Ok(serde_json::from_str(&content)?)
        }
    }

    /// Apply overrides from a key lookup (normally the process environment)
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup("PORT") {
            self.port = parse_override("PORT", &value)?;
        }
        if let Some(value) = lookup("VEHICLE_SERVICE_URL") {
            self.vehicle_service_url = value;
        }
        if let Some(value) = lookup("NOTIFICATION_SERVICE_URL") {
            self.notification_service_url = value;
        }
        if let Some(value) = lookup("REGISTRY_TIMEOUT_MS") {
            self.registry_timeout_ms = parse_override("REGISTRY_TIMEOUT_MS", &value)?;
        }
        if let Some(value) = lookup("NOTIFICATION_QUEUE_CAPACITY") {
            self.notification_queue_capacity =
                parse_override("NOTIFICATION_QUEUE_CAPACITY", &value)?;
        }
        if let Some(value) = lookup("ACCIDENT_PLATE_MATCH") {
            self.accident_plate_match = value.parse()?;
        }
        if let Some(value) = lookup("CORS_ALLOWED_ORIGIN") {
            self.cors_allowed_origin = value;
        }
        if let Some(value) = lookup("LOG_LEVEL") {
            self.log_level = value;
        }
        Ok(())
    }

    /// Reject values the service cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.port == 0 {
            return Err(ConfigError::Invalid {
                field: "port",
                reason: "must be non-zero".to_string(),
            });
        }
        if self.registry_timeout_ms == 0 {
            return Err(ConfigError::Invalid {
                field: "registryTimeoutMs",
                reason: "must be non-zero".to_string(),
            });
        }
        if self.notification_queue_capacity == 0 {
            return Err(ConfigError::Invalid {
                field: "notificationQueueCapacity",
                reason: "must be non-zero".to_string(),
            });
        }
        check_base_url("vehicleServiceUrl", &self.vehicle_service_url)?;
        check_base_url("notificationServiceUrl", &self.notification_service_url)?;
        Ok(())
    }

    /// Transport timeout as a Duration
    pub fn registry_timeout(&self) -> Duration {
        Duration::from_millis(self.registry_timeout_ms)
    }
}

fn parse_override<T: FromStr>(key: &str, value: &str) -> Result<T> {
    value.trim().parse().map_err(|_| ConfigError::InvalidOverride {
        key: key.to_string(),
        value: value.to_string(),
    })
}

fn check_base_url(field: &'static str, url: &str) -> Result<()> {
    let rest = url
        .strip_prefix("http://")
        .or_else(|| url.strip_prefix("https://"))
        .ok_or_else(|| ConfigError::Invalid {
            field,
            reason: format!("'{}' must start with http:// or https://", url),
        })?;

    if rest.is_empty() || rest.starts_with('/') {
        return Err(ConfigError::Invalid {
            field,
            reason: format!("'{}' has no host", url),
        });
    }
    Ok(())
}
