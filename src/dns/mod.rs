mod matcher;
mod namesilo;
mod provider;

pub use matcher::{domain_prefix, find_match};
pub use namesilo::{ApiResponse, NameSiloProvider, RequestInfo, SUCCESS_CODE};
pub use provider::{DnsProvider, DnsRecord, RecordChange, Reply};
