pub mod ed25519;

pub use ed25519::{Ed25519RecordSigner, Ed25519RecordVerifier};
