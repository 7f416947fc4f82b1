use std::path::PathBuf;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing::{error, info};

use namesilo_ddns::config::{PartialConfig, RecordType, RunConfig};
use namesilo_ddns::dns::NameSiloProvider;
use namesilo_ddns::ip::EchoIpResolver;
use namesilo_ddns::{logging, updater};

#[derive(Parser)]
#[command(name = "namesilo-ddns")]
#[command(about = "Point a NameSilo DNS record at this machine's public IP")]
#[command(version)]
struct Cli {
    /// Registrable domain, e.g. example.com
    #[arg(long)]
    domain: Option<String>,

    /// Record type to manage [default: A]
    #[arg(long = "type", value_enum, ignore_case = true)]
    record_type: Option<RecordType>,

    /// Subdomain label to manage, e.g. home
    #[arg(long)]
    name: Option<String>,

    /// Record value; discovered from the internet when omitted
    #[arg(long)]
    record: Option<String>,

    /// NameSilo API key
    #[arg(long)]
    key: Option<String>,

    /// Log every fetched record
    #[arg(long)]
    debug: bool,

    /// TOML file supplying any of the above; command-line values win
    #[arg(long)]
    config: Option<PathBuf>,

    /// TTL in seconds for the written record [default: 7207]
    #[arg(long)]
    ttl: Option<u32>,

    /// Timeout in seconds for each HTTP request [default: 30]
    #[arg(long)]
    timeout: Option<u64>,
}

impl Cli {
    fn overrides(&self) -> PartialConfig {
        PartialConfig {
            domain: self.domain.clone(),
            name: self.name.clone(),
            record_type: self.record_type,
            record: self.record.clone(),
            key: self.key.clone(),
            debug: self.debug.then_some(true),
            ttl: self.ttl,
            timeout_seconds: self.timeout,
            ..Default::default()
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let file = match cli.config.as_deref().map(PartialConfig::load).transpose() {
        Ok(file) => file.unwrap_or_default(),
        Err(e) => {
            let _guard = tracing::subscriber::set_default(logging::subscriber(cli.debug));
            error!("{:#}", e);
            return ExitCode::FAILURE;
        }
    };
    let input = file.merge(cli.overrides());

    let _guard = tracing::subscriber::set_default(logging::subscriber(input.debug()));

    let config = match RunConfig::resolve(input) {
        Ok(config) => config,
        Err(e) => {
            let _ = Cli::command().print_help();
            error!("Please verify the parameters you have entered: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match execute(&config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn execute(config: &RunConfig) -> anyhow::Result<()> {
    let resolver = EchoIpResolver::with_endpoints(
        config.timeout,
        config.ipv4_endpoint.as_str(),
        config.ipv6_endpoint.as_str(),
    )?;
    let provider = NameSiloProvider::with_base_url(
        config.key.as_str(),
        config.timeout,
        config.api_base.as_str(),
    )?;

    let outcome = updater::run(config, &resolver, &provider).await?;
    info!(
        domain = %config.domain,
        name = %config.name,
        value = %outcome.value,
        "DNS record is up to date"
    );

    Ok(())
}
