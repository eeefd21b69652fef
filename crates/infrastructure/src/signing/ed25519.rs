use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use ring::rand::SystemRandom;
use ring::signature::{self, Ed25519KeyPair, KeyPair};
use tracing::debug;
use uns_application::ports::RecordVerifier;
use uns_domain::{DomainError, NetworkRecord};

const ED25519_PUBLIC_KEY_LEN: usize = 32;

/// Signs network records with an Ed25519 key.
///
/// The record owner becomes the base64 public key, so ownership and
/// signature verification use the same identity.
pub struct Ed25519RecordSigner {
    key_pair: Ed25519KeyPair,
}

impl Ed25519RecordSigner {
    /// Generate a fresh PKCS#8 document suitable for [`Self::from_pkcs8`].
    pub fn generate_pkcs8() -> Result<Vec<u8>, DomainError> {
        let rng = SystemRandom::new();
        Ed25519KeyPair::generate_pkcs8(&rng)
            .map(|document| document.as_ref().to_vec())
            .map_err(|_| DomainError::InvalidSigningKey("key generation failed".to_string()))
    }

    pub fn from_pkcs8(pkcs8: &[u8]) -> Result<Self, DomainError> {
        let key_pair = Ed25519KeyPair::from_pkcs8(pkcs8)
            .map_err(|e| DomainError::InvalidSigningKey(e.to_string()))?;
        Ok(Self { key_pair })
    }

    pub fn public_key_base64(&self) -> String {
        STANDARD.encode(self.key_pair.public_key().as_ref())
    }

    /// Set the owner to this key and attach a fresh signature.
    pub fn sign(&self, record: &mut NetworkRecord) {
        record.owner = self.public_key_base64();
        let signature = self.key_pair.sign(&record.signing_payload());
        record.signature = Some(STANDARD.encode(signature.as_ref()));
        debug!(network = %record.network, "Record signed");
    }
}

/// Verifies record signatures against the owner's Ed25519 public key.
#[derive(Debug, Default, Clone, Copy)]
pub struct Ed25519RecordVerifier;

impl Ed25519RecordVerifier {
    pub fn new() -> Self {
        Self
    }
}

impl RecordVerifier for Ed25519RecordVerifier {
    fn verify(&self, record: &NetworkRecord) -> Result<(), DomainError> {
        let invalid = || DomainError::InvalidSignature(record.network.clone());

        let encoded = record
            .signature
            .as_deref()
            .ok_or_else(|| DomainError::SignatureMissing(record.network.clone()))?;

        let public_key = STANDARD.decode(&record.owner).map_err(|_| invalid())?;
        if public_key.len() != ED25519_PUBLIC_KEY_LEN {
            return Err(invalid());
        }
        let signature_bytes = STANDARD.decode(encoded).map_err(|_| invalid())?;

        signature::UnparsedPublicKey::new(&signature::ED25519, &public_key)
            .verify(&record.signing_payload(), &signature_bytes)
            .map_err(|_| invalid())
    }
}
