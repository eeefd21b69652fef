use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Backend behind a configured registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistryKind {
    /// Fixed in-memory table
    Static,
    /// Content-addressed blob store (in-memory stand-in)
    ContentAddressed,
    /// DNS TXT records (in-memory stand-in)
    DnsTxt,
}

impl fmt::Display for RegistryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Static => "static",
            Self::ContentAddressed => "content_addressed",
            Self::DnsTxt => "dns_txt",
        };
        f.write_str(name)
    }
}

/// One entry of the ordered registry chain.
///
/// Registries are queried in the order they appear in the config file.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RegistryConfig {
    pub kind: RegistryKind,

    pub name: String,

    /// JSON array of network records published into the backend at startup
    #[serde(default)]
    pub records_file: Option<PathBuf>,
}

impl RegistryConfig {
    pub fn new(kind: RegistryKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            records_file: None,
        }
    }
}
