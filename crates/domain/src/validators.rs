pub const NETWORK_MIN_LEN: usize = 3;
pub const NETWORK_MAX_LEN: usize = 63;

/// Checks a network identifier against the address grammar.
///
/// Accepts ASCII letters, digits and internal hyphens only. Case is not
/// checked here; callers lowercase before storing.
pub fn validate_network_name(name: &str) -> Result<(), String> {
    if name.len() < NETWORK_MIN_LEN {
        return Err(format!(
            "network name must be at least {NETWORK_MIN_LEN} characters"
        ));
    }
    if name.len() > NETWORK_MAX_LEN {
        return Err(format!(
            "network name cannot exceed {NETWORK_MAX_LEN} characters"
        ));
    }
    if let Some(c) = name
        .chars()
        .find(|c| !c.is_ascii_alphanumeric() && *c != '-')
    {
        return Err(format!("network name contains invalid character '{c}'"));
    }
    if name.starts_with('-') || name.ends_with('-') {
        return Err("network name cannot start or end with a hyphen".to_string());
    }
    Ok(())
}

pub fn validate_url(url: &str) -> Result<(), String> {
    if url.len() > 2048 {
        return Err("URL cannot exceed 2048 characters".to_string());
    }
    match url.split_once("://") {
        Some((scheme, rest)) if is_scheme(scheme) && !rest.is_empty() => Ok(()),
        _ => Err(format!("'{url}' is not an absolute URL")),
    }
}

/// Checks a resolver endpoint URI. Only a scheme is required, so opaque
/// forms such as `mock:static` are accepted.
pub fn validate_endpoint(uri: &str) -> Result<(), String> {
    match uri.split_once(':') {
        Some((scheme, rest)) if is_scheme(scheme) && !rest.is_empty() => Ok(()),
        _ => Err(format!("resolver endpoint '{uri}' has no scheme")),
    }
}

fn is_scheme(scheme: &str) -> bool {
    let mut chars = scheme.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}
