use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::provider::{DnsProvider, DnsRecord, RecordChange, Reply};
use crate::config::NAMESILO_API_BASE;
use crate::error::{Error, Result};

/// Reply code NameSilo uses for a successful operation.
pub const SUCCESS_CODE: u32 = 300;

pub struct NameSiloProvider {
    client: Client,
    api_key: String,
    api_base: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RequestInfo {
    #[serde(default)]
    pub operation: String,
    #[serde(default)]
    pub ip: String,
}

/// Envelope shared by every NameSilo JSON response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    #[serde(default)]
    pub request: RequestInfo,
    pub reply: Reply,
}

impl ApiResponse {
    pub fn parse(body: &str) -> Result<Self> {
        Ok(serde_json::from_str(body)?)
    }

    /// Unwrap the reply, turning any code other than 300 into an API error.
    pub fn into_reply(self) -> Result<Reply> {
        if self.reply.code != SUCCESS_CODE {
            return Err(Error::Api {
                code: self.reply.code,
                detail: self.reply.detail,
            });
        }
        Ok(self.reply)
    }
}

impl NameSiloProvider {
    pub fn new(api_key: impl Into<String>, timeout: Duration) -> Result<Self> {
        Self::with_base_url(api_key, timeout, NAMESILO_API_BASE)
    }

    pub fn with_base_url(
        api_key: impl Into<String>,
        timeout: Duration,
        api_base: impl Into<String>,
    ) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            api_base: api_base.into().trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, operation: &str) -> String {
        format!("{}/{}", self.api_base, operation)
    }

    async fn call(&self, operation: &str, params: &[(&str, &str)]) -> Result<Reply> {
        let url = self.endpoint(operation);
        tracing::debug!(operation, "Calling NameSilo API");

        let body = self
            .client
            .get(&url)
            .query(&[
                ("version", "1"),
                ("type", "json"),
                ("key", self.api_key.as_str()),
            ])
            .query(params)
            .send()
            .await?
            .text()
            .await?;

        ApiResponse::parse(&body)?.into_reply()
    }
}

#[async_trait]
impl DnsProvider for NameSiloProvider {
    async fn list_records(&self, domain: &str) -> Result<Vec<DnsRecord>> {
        let reply = self
            .call("dnsListRecords", &[("domain", domain)])
            .await?;

        Ok(reply.resource_record)
    }

    async fn add_record(&self, domain: &str, change: &RecordChange) -> Result<Reply> {
        let ttl = change.ttl.to_string();

        self.call(
            "dnsAddRecord",
            &[
                ("domain", domain),
                ("rrtype", change.record_type.as_str()),
                ("rrhost", change.host.as_str()),
                ("rrvalue", change.value.as_str()),
                ("rrttl", ttl.as_str()),
            ],
        )
        .await
    }

    async fn update_record(
        &self,
        domain: &str,
        record_id: &str,
        change: &RecordChange,
    ) -> Result<Reply> {
        let ttl = change.ttl.to_string();

        self.call(
            "dnsUpdateRecord",
            &[
                ("domain", domain),
                ("rrid", record_id),
                ("rrhost", change.host.as_str()),
                ("rrvalue", change.value.as_str()),
                ("rrttl", ttl.as_str()),
            ],
        )
        .await
    }

    fn provider_name(&self) -> &'static str {
        "namesilo"
    }
}
