use tracing::{debug, info};

use crate::config::RunConfig;
use crate::dns::{find_match, DnsProvider, DnsRecord, RecordChange, Reply};
use crate::error::{Error, Stage, StageError};
use crate::ip::IpResolver;

/// Which write the run performed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Added,
    Updated { record_id: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub action: Action,
    /// Value written to the record
    pub value: String,
    pub reply: Reply,
}

/// Point `config.name` at the current address: resolve the value, list the
/// domain's records, then update the matching record or add a new one.
///
/// Any failure ends the run; nothing is retried.
pub async fn run(
    config: &RunConfig,
    resolver: &dyn IpResolver,
    provider: &dyn DnsProvider,
) -> Result<Outcome, StageError> {
    let value = record_value(config, resolver)
        .await
        .map_err(|e| StageError::new(Stage::ResolveIp, e))?;
    info!(ip = %value, "Successfully obtained IP.");

    let records = provider
        .list_records(&config.domain)
        .await
        .map_err(|e| StageError::new(Stage::ListRecords, e))?;
    log_records(&records);

    let change = RecordChange {
        record_type: config.record_type,
        host: config.name.clone(),
        value: value.clone(),
        ttl: config.ttl,
    };

    let (action, reply) = match find_match(&records, &config.name, config.record_type) {
        Some(existing) => {
            let record_id = existing.record_id.clone();
            info!(
                record_id = %record_id,
                name = %config.name,
                value = %value,
                "Update DNS Record"
            );

            let reply = provider
                .update_record(&config.domain, &record_id, &change)
                .await
                .map_err(|e| StageError::new(Stage::UpdateRecord, e))?;
            (Action::Updated { record_id }, reply)
        }
        None => {
            info!(
                record_type = %config.record_type,
                name = %config.name,
                value = %value,
                "Add DNS Record"
            );

            let reply = provider
                .add_record(&config.domain, &change)
                .await
                .map_err(|e| StageError::new(Stage::AddRecord, e))?;
            (Action::Added, reply)
        }
    };

    info!(
        provider = provider.provider_name(),
        code = reply.code,
        detail = %reply.detail,
        record_id = reply.record_id.as_deref().unwrap_or(""),
        resource_record = ?reply.resource_record,
        "{} DNS record completed",
        match action {
            Action::Added => "Add",
            Action::Updated { .. } => "Update",
        }
    );

    Ok(Outcome {
        action,
        value,
        reply,
    })
}

async fn record_value(config: &RunConfig, resolver: &dyn IpResolver) -> Result<String, Error> {
    if let Some(value) = &config.record {
        return Ok(value.clone());
    }

    let ipv6 = config.record_type.wants_ipv6();
    let ip = resolver.resolve(ipv6).await?;
    if ip.is_empty() {
        let family = if ipv6 { "IPv6" } else { "IPv4" };
        return Err(Error::EmptyResult(format!("{family} address discovery")));
    }

    Ok(ip)
}

fn log_records(records: &[DnsRecord]) {
    for record in records {
        debug!(
            record_id = %record.record_id,
            record_type = %record.record_type,
            host = %record.host,
            value = %record.value,
            ttl = %record.ttl,
            "Record value"
        );
    }
}
