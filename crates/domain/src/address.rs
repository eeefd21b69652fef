use crate::validators::validate_network_name;
use crate::DomainError;
use std::fmt;
use std::str::FromStr;

/// Literal that every UNS address starts with (matched case-insensitively).
pub const ADDRESS_PREFIX: &str = "utopia.";

/// Separator between the network name and the path.
pub const PATH_SEPARATOR: &str = "//";

/// A parsed `utopia.<network>//<path>` address.
///
/// The network is always lowercase. Subdomain and resource path keep the
/// caller's case. Exactly one of the following holds: a subdomain is present,
/// or `resource_path` starts with `/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsAddress {
    pub network: String,
    pub raw_path: String,
    pub subdomain: Option<String>,
    pub resource_path: String,
    pub query: Option<String>,
    pub fragment: Option<String>,
}

impl UnsAddress {
    pub fn parse(address: &str) -> Result<Self, DomainError> {
        let trimmed = address.trim();

        let rest = trimmed
            .get(..ADDRESS_PREFIX.len())
            .filter(|prefix| prefix.eq_ignore_ascii_case(ADDRESS_PREFIX))
            .map(|_| &trimmed[ADDRESS_PREFIX.len()..])
            .ok_or_else(|| {
                DomainError::invalid_address(address, "expected utopia.<network>//<path>")
            })?;

        let (network, raw_path) = rest.split_once(PATH_SEPARATOR).ok_or_else(|| {
            DomainError::invalid_address(address, "missing '//' after network name")
        })?;

        validate_network_name(network)
            .map_err(|reason| DomainError::invalid_address(address, reason))?;

        let (before_fragment, fragment) = split_suffix(raw_path, '#');
        let (remaining, query) = split_suffix(before_fragment, '?');

        let (subdomain, resource_path) = if remaining.starts_with('.') {
            match remaining.find('/') {
                Some(slash) => (
                    Some(remaining[..slash].to_string()),
                    remaining[slash..].to_string(),
                ),
                None => (Some(remaining.to_string()), String::new()),
            }
        } else if remaining.starts_with('/') {
            (None, remaining.to_string())
        } else {
            (None, format!("/{remaining}"))
        };

        Ok(Self {
            network: network.to_ascii_lowercase(),
            raw_path: raw_path.to_string(),
            subdomain,
            resource_path,
            query: query.map(str::to_string),
            fragment: fragment.map(str::to_string),
        })
    }

    /// Path reassembled from its decomposed parts.
    pub fn path(&self) -> String {
        let mut path = String::with_capacity(self.raw_path.len() + 1);
        if let Some(subdomain) = &self.subdomain {
            path.push_str(subdomain);
        }
        path.push_str(&self.resource_path);
        if let Some(query) = &self.query {
            path.push('?');
            path.push_str(query);
        }
        if let Some(fragment) = &self.fragment {
            path.push('#');
            path.push_str(fragment);
        }
        path
    }

    /// True when the resource path carries something beyond the root.
    pub fn has_resource(&self) -> bool {
        !self.resource_path.is_empty() && self.resource_path != "/"
    }
}

impl FromStr for UnsAddress {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for UnsAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}{}",
            ADDRESS_PREFIX,
            self.network,
            PATH_SEPARATOR,
            self.path()
        )
    }
}

/// Cache key for a raw address string.
pub fn cache_key(address: &str) -> String {
    address.trim().to_lowercase()
}

/// Prefix shared by the cache keys of every address in `network`.
pub fn network_key_prefix(network: &str) -> String {
    format!(
        "{}{}{}",
        ADDRESS_PREFIX,
        network.to_ascii_lowercase(),
        PATH_SEPARATOR
    )
}

fn split_suffix(input: &str, delimiter: char) -> (&str, Option<&str>) {
    match input.split_once(delimiter) {
        Some((head, tail)) => (head, Some(tail)),
        None => (input, None),
    }
}
