use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::RecordType;
use crate::error::Result;

/// A resource record as listed by the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsRecord {
    pub record_id: String,
    #[serde(rename = "type")]
    pub record_type: String,
    /// Fully-qualified host name, e.g. `home.example.com`
    pub host: String,
    pub value: String,
    #[serde(default)]
    pub ttl: String,
    #[serde(default)]
    pub distance: i64,
}

/// Value to write for a host when adding or updating a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordChange {
    pub record_type: RecordType,
    /// Subdomain label relative to the domain, e.g. `home`
    pub host: String,
    pub value: String,
    pub ttl: u32,
}

/// Reply section of the provider's response envelope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    pub code: u32,
    #[serde(default)]
    pub detail: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub record_id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resource_record: Vec<DnsRecord>,
}

#[async_trait]
pub trait DnsProvider: Send + Sync {
    /// List every record under the domain, in the order the provider returns them
    async fn list_records(&self, domain: &str) -> Result<Vec<DnsRecord>>;

    /// Create a new record; the reply carries the new record id
    async fn add_record(&self, domain: &str, change: &RecordChange) -> Result<Reply>;

    /// Overwrite the record identified by `record_id`
    async fn update_record(
        &self,
        domain: &str,
        record_id: &str,
        change: &RecordChange,
    ) -> Result<Reply>;

    fn provider_name(&self) -> &'static str;
}
