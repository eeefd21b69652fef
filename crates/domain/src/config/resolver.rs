use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Timeouts applied by the resolution engine.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    /// Upper bound for a single registry lookup
    #[serde(default = "default_registry_timeout")]
    pub registry_timeout_ms: u64,

    /// Upper bound for a single remote resolver endpoint call
    #[serde(default = "default_resolver_timeout")]
    pub resolver_timeout_ms: u64,

    /// Deadline for a whole resolve call, cache check included
    #[serde(default = "default_resolve_timeout")]
    pub resolve_timeout_ms: u64,
}

impl ResolverConfig {
    pub fn registry_timeout(&self) -> Duration {
        Duration::from_millis(self.registry_timeout_ms)
    }

    pub fn resolver_timeout(&self) -> Duration {
        Duration::from_millis(self.resolver_timeout_ms)
    }

    pub fn resolve_timeout(&self) -> Duration {
        Duration::from_millis(self.resolve_timeout_ms)
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            registry_timeout_ms: default_registry_timeout(),
            resolver_timeout_ms: default_resolver_timeout(),
            resolve_timeout_ms: default_resolve_timeout(),
        }
    }
}

fn default_registry_timeout() -> u64 {
    2000
}

fn default_resolver_timeout() -> u64 {
    5000
}

fn default_resolve_timeout() -> u64 {
    10000
}
