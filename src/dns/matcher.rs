use super::provider::DnsRecord;
use crate::config::RecordType;

/// Everything but the last two labels of `host`.
///
/// `sub.example.com` gives `sub`, `example.com` gives an empty string.
pub fn domain_prefix(host: &str) -> String {
    let labels: Vec<&str> = host.split('.').collect();
    if labels.len() <= 2 {
        return String::new();
    }
    labels[..labels.len() - 2].join(".")
}

/// Find the record managed for `name` with the given type.
///
/// When several records match, the last one in list order is returned.
pub fn find_match<'a>(
    records: &'a [DnsRecord],
    name: &str,
    record_type: RecordType,
) -> Option<&'a DnsRecord> {
    records
        .iter()
        .rev()
        .find(|r| r.record_type == record_type.as_str() && domain_prefix(&r.host) == name)
}
