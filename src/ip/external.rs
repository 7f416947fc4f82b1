use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use super::IpResolver;
use crate::config::{IPV4_ECHO_ENDPOINT, IPV6_ECHO_ENDPOINT};
use crate::error::Result;

/// Resolves the public address by asking a plain-text echo service.
pub struct EchoIpResolver {
    client: Client,
    ipv4_endpoint: String,
    ipv6_endpoint: String,
}

impl EchoIpResolver {
    pub fn new(timeout: Duration) -> Result<Self> {
        Self::with_endpoints(timeout, IPV4_ECHO_ENDPOINT, IPV6_ECHO_ENDPOINT)
    }

    pub fn with_endpoints(
        timeout: Duration,
        ipv4_endpoint: impl Into<String>,
        ipv6_endpoint: impl Into<String>,
    ) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            ipv4_endpoint: ipv4_endpoint.into(),
            ipv6_endpoint: ipv6_endpoint.into(),
        })
    }

    fn endpoint(&self, ipv6: bool) -> &str {
        if ipv6 {
            &self.ipv6_endpoint
        } else {
            &self.ipv4_endpoint
        }
    }
}

#[async_trait]
impl IpResolver for EchoIpResolver {
    async fn resolve(&self, ipv6: bool) -> Result<String> {
        let url = self.endpoint(ipv6);
        tracing::debug!(url, "Requesting public IP");

        let body = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        Ok(body.trim().to_string())
    }
}
