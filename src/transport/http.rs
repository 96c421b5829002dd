use std::time::Duration;

use anyhow::Context;
use tracing::debug;

use super::{Transport, TransportReply};
use crate::config::ClientConfig;

/// HTTP transport backed by a blocking `reqwest` client.
///
/// One GET per `fetch`: no headers beyond reqwest's defaults, no body, no
/// authentication. When `timeout_ms` is unset no timeout is configured at
/// all, so a request that never completes is waited on indefinitely -
/// matching the upstream client, which never armed a timer.
pub struct HttpTransport {
    client: reqwest::blocking::Client,
    endpoint: String,
}

impl HttpTransport {
    /// Build a transport from the client configuration.
    ///
    /// # Errors
    ///
    /// Fails if the underlying HTTP client cannot be constructed (e.g. TLS
    /// backend initialization failure).
    pub fn new(cfg: &ClientConfig) -> anyhow::Result<Self> {
        let timeout = cfg.timeout_ms.map(Duration::from_millis);
        let client = reqwest::blocking::Client::builder()
            // Explicit None clears reqwest's default 30s timeout.
            .timeout(timeout)
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self {
            client,
            endpoint: cfg.endpoint.trim_end_matches('/').to_string(),
        })
    }

    fn absolute_url(&self, target: &str) -> String {
        format!("{}/{}", self.endpoint, target)
    }
}

impl Transport for HttpTransport {
    fn fetch(&self, target: &str) -> anyhow::Result<TransportReply> {
        let url = self.absolute_url(target);
        debug!(url = %url, "Issuing GET");

        let response = self
            .client
            .get(&url)
            .send()
            .with_context(|| format!("GET {url} failed"))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .with_context(|| format!("failed to read response body for GET {url}"))?;

        debug!(url = %url, status = status, body_bytes = body.len(), "GET complete");
        Ok(TransportReply { status, body })
    }
}
