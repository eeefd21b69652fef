use super::cache::CacheConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::registry::{RegistryConfig, RegistryKind};
use super::resolver::ResolverConfig;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "uns.toml";

/// Settings given on the command line; they win over the config file.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub log_level: Option<String>,
    pub cache_ttl_secs: Option<u64>,
    /// Records file served by an extra static registry queried first
    pub records_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub resolver: ResolverConfig,

    #[serde(default)]
    pub cache: CacheConfig,

    #[serde(default = "default_registries")]
    pub registries: Vec<RegistryConfig>,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            resolver: ResolverConfig::default(),
            cache: CacheConfig::default(),
            registries: default_registries(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from `path`, falling back to `uns.toml` in the
    /// working directory and then to built-in defaults.
    pub fn load(path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(Path::new(path))?,
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::from_file(Path::new(DEFAULT_CONFIG_FILE))?
            }
            None => Self::default(),
        };

        config.apply_overrides(overrides);
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn apply_overrides(&mut self, overrides: CliOverrides) {
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if let Some(ttl) = overrides.cache_ttl_secs {
            self.cache.ttl_secs = ttl;
        }
        if let Some(records_file) = overrides.records_file {
            let mut registry = RegistryConfig::new(RegistryKind::Static, "cli-records");
            registry.records_file = Some(records_file);
            self.registries.insert(0, registry);
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.registries.is_empty() {
            return Err(ConfigError::Validation(
                "at least one registry must be configured".to_string(),
            ));
        }

        let mut names = HashSet::new();
        for registry in &self.registries {
            if registry.name.trim().is_empty() {
                return Err(ConfigError::Validation(
                    "registry name cannot be empty".to_string(),
                ));
            }
            if !names.insert(registry.name.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "duplicate registry name '{}'",
                    registry.name
                )));
            }
        }

        let timeouts = [
            ("resolver.registry_timeout_ms", self.resolver.registry_timeout_ms),
            ("resolver.resolver_timeout_ms", self.resolver.resolver_timeout_ms),
            ("resolver.resolve_timeout_ms", self.resolver.resolve_timeout_ms),
        ];
        if let Some((field, _)) = timeouts.iter().find(|(_, value)| *value == 0) {
            return Err(ConfigError::Validation(format!("{field} must be greater than 0")));
        }

        if self.cache.enabled && self.cache.ttl_secs == 0 {
            return Err(ConfigError::Validation(
                "cache.ttl_secs must be greater than 0 when the cache is enabled".to_string(),
            ));
        }
        if self.cache.enabled && self.cache.sweep_interval_secs == 0 {
            return Err(ConfigError::Validation(
                "cache.sweep_interval_secs must be greater than 0".to_string(),
            ));
        }

        if !matches!(
            self.logging.level.to_ascii_lowercase().as_str(),
            "trace" | "debug" | "info" | "warn" | "error"
        ) {
            return Err(ConfigError::Validation(format!(
                "unknown log level '{}'",
                self.logging.level
            )));
        }

        Ok(())
    }
}

fn default_registries() -> Vec<RegistryConfig> {
    vec![RegistryConfig::new(RegistryKind::Static, "static")]
}
