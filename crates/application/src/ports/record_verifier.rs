use uns_domain::{DomainError, NetworkRecord};

/// Checks that a record was signed by its owner before it is written.
pub trait RecordVerifier: Send + Sync {
    fn verify(&self, record: &NetworkRecord) -> Result<(), DomainError>;
}
