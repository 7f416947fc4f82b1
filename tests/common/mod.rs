#![allow(dead_code)]

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use namesilo_ddns::config::{RecordType, RunConfig, DEFAULT_TTL};
use namesilo_ddns::dns::{DnsProvider, DnsRecord, RecordChange, Reply};
use namesilo_ddns::ip::IpResolver;
use namesilo_ddns::{Error, Result};

pub fn run_config(record_type: RecordType, record: Option<&str>) -> RunConfig {
    RunConfig {
        domain: "example.com".to_string(),
        name: "home".to_string(),
        record_type,
        record: record.map(str::to_string),
        key: "K".to_string(),
        debug: true,
        ttl: DEFAULT_TTL,
        timeout: Duration::from_secs(5),
        api_base: "http://unused.invalid/api".to_string(),
        ipv4_endpoint: "http://unused.invalid/v4".to_string(),
        ipv6_endpoint: "http://unused.invalid/v6".to_string(),
    }
}

pub fn record(id: &str, record_type: &str, host: &str) -> DnsRecord {
    DnsRecord {
        record_id: id.to_string(),
        record_type: record_type.to_string(),
        host: host.to_string(),
        value: "198.51.100.1".to_string(),
        ttl: "7207".to_string(),
        distance: 0,
    }
}

pub fn success(record_id: &str) -> Reply {
    Reply {
        code: 300,
        detail: "success".to_string(),
        record_id: Some(record_id.to_string()),
        resource_record: Vec::new(),
    }
}

/// Resolver returning a fixed answer and remembering each requested family.
pub struct FakeResolver {
    answer: String,
    pub calls: Mutex<Vec<bool>>,
}

impl FakeResolver {
    pub fn new(answer: &str) -> Self {
        Self {
            answer: answer.to_string(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<bool> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl IpResolver for FakeResolver {
    async fn resolve(&self, ipv6: bool) -> Result<String> {
        self.calls.lock().unwrap().push(ipv6);
        Ok(self.answer.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    List { domain: String },
    Add { domain: String, change: RecordChange },
    Update { domain: String, record_id: String, change: RecordChange },
}

/// Provider serving a fixed record list; writes answer with `write_reply`.
pub struct FakeProvider {
    records: Vec<DnsRecord>,
    list_error: Option<(u32, String)>,
    write_reply: Reply,
    pub calls: Mutex<Vec<Call>>,
}

impl FakeProvider {
    pub fn new(records: Vec<DnsRecord>) -> Self {
        Self {
            records,
            list_error: None,
            write_reply: success("new-id"),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing_list(code: u32, detail: &str) -> Self {
        Self {
            list_error: Some((code, detail.to_string())),
            ..Self::new(Vec::new())
        }
    }

    pub fn with_write_reply(mut self, reply: Reply) -> Self {
        self.write_reply = reply;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn write_result(&self) -> Result<Reply> {
        if self.write_reply.code != 300 {
            return Err(Error::Api {
                code: self.write_reply.code,
                detail: self.write_reply.detail.clone(),
            });
        }
        Ok(self.write_reply.clone())
    }
}

#[async_trait]
impl DnsProvider for FakeProvider {
    async fn list_records(&self, domain: &str) -> Result<Vec<DnsRecord>> {
        self.calls.lock().unwrap().push(Call::List {
            domain: domain.to_string(),
        });
        if let Some((code, detail)) = &self.list_error {
            return Err(Error::Api {
                code: *code,
                detail: detail.clone(),
            });
        }
        Ok(self.records.clone())
    }

    async fn add_record(&self, domain: &str, change: &RecordChange) -> Result<Reply> {
        self.calls.lock().unwrap().push(Call::Add {
            domain: domain.to_string(),
            change: change.clone(),
        });
        self.write_result()
    }

    async fn update_record(
        &self,
        domain: &str,
        record_id: &str,
        change: &RecordChange,
    ) -> Result<Reply> {
        self.calls.lock().unwrap().push(Call::Update {
            domain: domain.to_string(),
            record_id: record_id.to_string(),
            change: change.clone(),
        });
        self.write_result()
    }

    fn provider_name(&self) -> &'static str {
        "fake"
    }
}
