use std::time::Duration;

/// Timeouts used by the core resolver
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// Bound on a single registry lookup (default: 2s)
    pub registry_timeout: Duration,

    /// Bound on a single remote resolver endpoint call (default: 5s)
    pub resolver_timeout: Duration,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            registry_timeout: Duration::from_millis(2000),
            resolver_timeout: Duration::from_millis(5000),
        }
    }
}

impl ResolverConfig {
    pub fn with_registry_timeout(mut self, timeout: Duration) -> Self {
        self.registry_timeout = timeout;
        self
    }

    pub fn with_resolver_timeout(mut self, timeout: Duration) -> Self {
        self.resolver_timeout = timeout;
        self
    }
}

impl From<&uns_domain::config::ResolverConfig> for ResolverConfig {
    fn from(config: &uns_domain::config::ResolverConfig) -> Self {
        Self {
            registry_timeout: config.registry_timeout(),
            resolver_timeout: config.resolver_timeout(),
        }
    }
}
