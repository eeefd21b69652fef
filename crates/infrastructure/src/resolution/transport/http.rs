use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use std::time::Duration;
use tracing::debug;
use uns_application::ports::RemoteResolver;
use uns_domain::DomainError;

/// Shared HTTP client with connection pooling.
static SHARED_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    reqwest::Client::builder()
        .use_rustls_tls()
        .pool_max_idle_per_host(4)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
});

const JSON_CONTENT_TYPE: &str = "application/json";

#[derive(Debug, Serialize)]
struct ResolveRequest<'a> {
    network: &'a str,
    path: &'a str,
}

#[derive(Debug, Deserialize)]
struct ResolveResponse {
    #[serde(default)]
    url: Option<String>,
}

/// Remote resolver endpoint client speaking `{network, path}` -> `{url}` JSON.
#[derive(Debug, Default, Clone, Copy)]
pub struct HttpRemoteResolver;

impl HttpRemoteResolver {
    pub fn new() -> Self {
        Self
    }

    fn endpoint_error(endpoint: &str, reason: impl Into<String>) -> DomainError {
        DomainError::ResolverError {
            endpoint: endpoint.to_string(),
            reason: reason.into(),
        }
    }

    fn request_error(endpoint: &str, error: reqwest::Error) -> DomainError {
        if error.is_timeout() {
            DomainError::Timeout
        } else {
            Self::endpoint_error(endpoint, format!("request failed: {error}"))
        }
    }
}

#[async_trait]
impl RemoteResolver for HttpRemoteResolver {
    async fn resolve_remote(
        &self,
        endpoint: &str,
        network: &str,
        path: &str,
        timeout: Duration,
    ) -> Result<String, DomainError> {
        let body = serde_json::to_vec(&ResolveRequest { network, path })
            .map_err(|e| Self::endpoint_error(endpoint, format!("cannot encode request: {e}")))?;

        debug!(endpoint = %endpoint, network = %network, path = %path, "Calling resolver endpoint");

        let response = tokio::time::timeout(
            timeout,
            SHARED_CLIENT
                .post(endpoint)
                .header("Content-Type", JSON_CONTENT_TYPE)
                .header("Accept", JSON_CONTENT_TYPE)
                .body(body)
                .send(),
        )
        .await
        .map_err(|_| DomainError::Timeout)?
        .map_err(|e| Self::request_error(endpoint, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Self::endpoint_error(
                endpoint,
                format!(
                    "HTTP {}: {}",
                    status.as_u16(),
                    status.canonical_reason().unwrap_or("Unknown")
                ),
            ));
        }

        let bytes = tokio::time::timeout(timeout, response.bytes())
            .await
            .map_err(|_| DomainError::Timeout)?
            .map_err(|e| Self::request_error(endpoint, e))?;

        let reply: ResolveResponse = serde_json::from_slice(&bytes)
            .map_err(|e| Self::endpoint_error(endpoint, format!("malformed reply: {e}")))?;

        match reply.url {
            Some(url) if !url.trim().is_empty() => {
                debug!(endpoint = %endpoint, url = %url, "Resolver endpoint answered");
                Ok(url)
            }
            _ => Err(Self::endpoint_error(endpoint, "reply has no url")),
        }
    }
}
