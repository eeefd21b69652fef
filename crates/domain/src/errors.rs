use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid address '{address}': {reason}")]
    InvalidAddress { address: String, reason: String },

    #[error("Network not found: {0}")]
    NetworkNotFound(String),

    #[error("Resolver endpoint {endpoint} failed: {reason}")]
    ResolverError { endpoint: String, reason: String },

    #[error("Resource not found: {path} in network {network}")]
    ResourceNotFound { network: String, path: String },

    #[error("Resolution timed out")]
    Timeout,

    #[error("Resolution cancelled")]
    Cancelled,

    #[error("Registry {registry} unavailable: {reason}")]
    RegistryUnavailable { registry: String, reason: String },

    #[error("Registry {0} is read-only")]
    ReadOnlyRegistry(String),

    #[error("Network already registered: {0}")]
    NetworkAlreadyRegistered(String),

    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    #[error("Record for {0} is not signed")]
    SignatureMissing(String),

    #[error("Invalid signature on record for {0}")]
    InvalidSignature(String),

    #[error("Owner of network {0} cannot be changed by an update")]
    OwnerMismatch(String),

    #[error("Invalid signing key: {0}")]
    InvalidSigningKey(String),
}

impl DomainError {
    pub fn invalid_address(address: &str, reason: impl Into<String>) -> Self {
        Self::InvalidAddress {
            address: address.to_string(),
            reason: reason.into(),
        }
    }

    /// Stable machine-readable name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidAddress { .. } => "invalid_address",
            Self::NetworkNotFound(_) => "network_not_found",
            Self::ResolverError { .. } => "resolver_error",
            Self::ResourceNotFound { .. } => "resource_not_found",
            Self::Timeout => "timeout",
            Self::Cancelled => "cancelled",
            Self::RegistryUnavailable { .. } => "registry_unavailable",
            Self::ReadOnlyRegistry(_) => "read_only_registry",
            Self::NetworkAlreadyRegistered(_) => "network_already_registered",
            Self::InvalidRecord(_) => "invalid_record",
            Self::SignatureMissing(_) => "signature_missing",
            Self::InvalidSignature(_) => "invalid_signature",
            Self::OwnerMismatch(_) => "owner_mismatch",
            Self::InvalidSigningKey(_) => "invalid_signing_key",
        }
    }
}
