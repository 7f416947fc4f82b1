use std::fmt;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// TTL in seconds written with every added or updated record.
pub const DEFAULT_TTL: u32 = 7207;

pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

pub const NAMESILO_API_BASE: &str = "https://www.namesilo.com/api";
pub const IPV4_ECHO_ENDPOINT: &str = "https://4.ipw.cn";
pub const IPV6_ECHO_ENDPOINT: &str = "https://6.ipw.cn";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "UPPERCASE")]
pub enum RecordType {
    #[default]
    #[value(name = "A")]
    A,
    #[value(name = "AAAA")]
    Aaaa,
    #[value(name = "TXT")]
    Txt,
    #[value(name = "CNAME")]
    Cname,
}

impl RecordType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::A => "A",
            RecordType::Aaaa => "AAAA",
            RecordType::Txt => "TXT",
            RecordType::Cname => "CNAME",
        }
    }

    /// Whether auto-discovery should ask for an IPv6 address.
    pub fn wants_ipv6(&self) -> bool {
        matches!(self, RecordType::Aaaa)
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inputs gathered from the command line and the optional config file.
/// Every field is optional here; [`RunConfig::resolve`] enforces what is required.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PartialConfig {
    pub domain: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub record_type: Option<RecordType>,
    pub record: Option<String>,
    pub key: Option<String>,
    pub debug: Option<bool>,
    pub ttl: Option<u32>,
    pub timeout_seconds: Option<u64>,
    pub api_base: Option<String>,
    pub ipv4_endpoint: Option<String>,
    pub ipv6_endpoint: Option<String>,
}

impl PartialConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: PartialConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Layers `overrides` on top of `self`; values present in `overrides` win.
    pub fn merge(self, overrides: PartialConfig) -> Self {
        Self {
            domain: overrides.domain.or(self.domain),
            name: overrides.name.or(self.name),
            record_type: overrides.record_type.or(self.record_type),
            record: overrides.record.or(self.record),
            key: overrides.key.or(self.key),
            debug: overrides.debug.or(self.debug),
            ttl: overrides.ttl.or(self.ttl),
            timeout_seconds: overrides.timeout_seconds.or(self.timeout_seconds),
            api_base: overrides.api_base.or(self.api_base),
            ipv4_endpoint: overrides.ipv4_endpoint.or(self.ipv4_endpoint),
            ipv6_endpoint: overrides.ipv6_endpoint.or(self.ipv6_endpoint),
        }
    }

    pub fn debug(&self) -> bool {
        self.debug.unwrap_or(false)
    }
}

/// Fully resolved inputs for a single update run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub domain: String,
    pub name: String,
    pub record_type: RecordType,
    /// Explicit record value; `None` means discover the public IP.
    pub record: Option<String>,
    pub key: String,
    pub debug: bool,
    pub ttl: u32,
    pub timeout: Duration,
    pub api_base: String,
    pub ipv4_endpoint: String,
    pub ipv6_endpoint: String,
}

impl RunConfig {
    pub fn resolve(input: PartialConfig) -> Result<Self, Error> {
        let domain = non_empty(input.domain);
        let name = non_empty(input.name);
        let key = non_empty(input.key);

        let mut missing = Vec::new();
        if domain.is_none() {
            missing.push("--domain");
        }
        if name.is_none() {
            missing.push("--name");
        }
        if key.is_none() {
            missing.push("--key");
        }

        let (Some(domain), Some(name), Some(key)) = (domain, name, key) else {
            return Err(Error::config(format!(
                "missing required parameter(s): {}",
                missing.join(", ")
            )));
        };

        Ok(Self {
            domain,
            name,
            record_type: input.record_type.unwrap_or_default(),
            record: non_empty(input.record),
            key,
            debug: input.debug.unwrap_or(false),
            ttl: input.ttl.unwrap_or(DEFAULT_TTL),
            timeout: Duration::from_secs(input.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS)),
            api_base: input
                .api_base
                .unwrap_or_else(|| NAMESILO_API_BASE.to_string()),
            ipv4_endpoint: input
                .ipv4_endpoint
                .unwrap_or_else(|| IPV4_ECHO_ENDPOINT.to_string()),
            ipv6_endpoint: input
                .ipv6_endpoint
                .unwrap_or_else(|| IPV6_ECHO_ENDPOINT.to_string()),
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
