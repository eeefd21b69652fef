use crate::address::UnsAddress;
use crate::validators::{validate_endpoint, validate_network_name, validate_url};
use crate::DomainError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Registration of a network, as stored and transmitted by registries.
///
/// Treated as immutable for the duration of a single resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkRecord {
    pub network: String,
    pub owner: String,
    #[serde(default)]
    pub resolvers: Vec<String>,
    /// `.token` -> base URL. Keys are matched case-sensitively.
    #[serde(default)]
    pub subdomains: BTreeMap<String, String>,
    #[serde(rename = "defaultURL", default, skip_serializing_if = "Option::is_none")]
    pub default_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
    #[serde(
        rename = "lastUpdate",
        default,
        skip_serializing_if = "Option::is_none",
        with = "chrono::serde::ts_milliseconds_option"
    )]
    pub last_update: Option<DateTime<Utc>>,
}

/// How a resolver URI is used during mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolverEndpoint<'a> {
    /// `http`/`https`: ask the endpoint for the URL.
    Remote(&'a str),
    /// Any other scheme (`mock:` included): map from the record itself.
    Direct(&'a str),
}

impl<'a> ResolverEndpoint<'a> {
    pub fn classify(uri: &'a str) -> Self {
        let scheme = uri.split_once(':').map(|(s, _)| s).unwrap_or_default();
        if scheme.eq_ignore_ascii_case("http") || scheme.eq_ignore_ascii_case("https") {
            Self::Remote(uri)
        } else {
            Self::Direct(uri)
        }
    }

    pub fn uri(&self) -> &'a str {
        match self {
            Self::Remote(uri) | Self::Direct(uri) => uri,
        }
    }
}

impl NetworkRecord {
    pub fn new(network: impl Into<String>, owner: impl Into<String>) -> Self {
        Self {
            network: network.into(),
            owner: owner.into(),
            resolvers: Vec::new(),
            subdomains: BTreeMap::new(),
            default_url: None,
            signature: None,
            timestamp: Utc::now(),
            last_update: None,
        }
    }

    pub fn with_resolver(mut self, uri: impl Into<String>) -> Self {
        self.resolvers.push(uri.into());
        self
    }

    pub fn with_subdomain(mut self, token: impl Into<String>, base_url: impl Into<String>) -> Self {
        self.subdomains.insert(token.into(), base_url.into());
        self
    }

    pub fn with_default_url(mut self, url: impl Into<String>) -> Self {
        self.default_url = Some(url.into());
        self
    }

    pub fn endpoints(&self) -> impl Iterator<Item = ResolverEndpoint<'_>> {
        self.resolvers
            .iter()
            .map(|uri| ResolverEndpoint::classify(uri))
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        validate_network_name(&self.network).map_err(DomainError::InvalidRecord)?;
        if self.network != self.network.to_ascii_lowercase() {
            return Err(DomainError::InvalidRecord(format!(
                "network name '{}' must be lowercase",
                self.network
            )));
        }
        if self.owner.trim().is_empty() {
            return Err(DomainError::InvalidRecord("owner cannot be empty".to_string()));
        }
        for uri in &self.resolvers {
            validate_endpoint(uri).map_err(DomainError::InvalidRecord)?;
        }
        for (token, base) in &self.subdomains {
            if !token.starts_with('.') || token.len() < 2 {
                return Err(DomainError::InvalidRecord(format!(
                    "subdomain key '{token}' must be a dot-prefixed token"
                )));
            }
            validate_url(base).map_err(DomainError::InvalidRecord)?;
        }
        if let Some(default_url) = &self.default_url {
            validate_url(default_url).map_err(DomainError::InvalidRecord)?;
        }
        Ok(())
    }

    /// Canonical bytes covered by the record signature.
    pub fn signing_payload(&self) -> Vec<u8> {
        let mut payload = String::from("uns-record-v1\n");
        payload.push_str(&format!("network={}\n", self.network));
        payload.push_str(&format!("owner={}\n", self.owner));
        for uri in &self.resolvers {
            payload.push_str(&format!("resolver={uri}\n"));
        }
        for (token, base) in &self.subdomains {
            payload.push_str(&format!("subdomain={token}={base}\n"));
        }
        if let Some(default_url) = &self.default_url {
            payload.push_str(&format!("default={default_url}\n"));
        }
        payload.push_str(&format!("timestamp={}\n", self.timestamp.timestamp_millis()));
        payload.into_bytes()
    }

    /// Maps an address onto this record without contacting any endpoint.
    pub fn map_direct(&self, address: &UnsAddress) -> Result<String, DomainError> {
        if let Some(base) = address
            .subdomain
            .as_ref()
            .and_then(|token| self.subdomains.get(token))
        {
            let mut url = base.clone();
            if address.has_resource() {
                url.push_str(&address.resource_path);
            }
            if let Some(query) = &address.query {
                url.push('?');
                url.push_str(query);
            }
            if let Some(fragment) = &address.fragment {
                url.push('#');
                url.push_str(fragment);
            }
            return Ok(url);
        }

        if let Some(default_url) = &self.default_url {
            return Ok(format!(
                "{}/{}",
                default_url.trim_end_matches('/'),
                address.raw_path.trim_start_matches('/')
            ));
        }

        Err(DomainError::ResourceNotFound {
            network: self.network.clone(),
            path: address.raw_path.clone(),
        })
    }
}
