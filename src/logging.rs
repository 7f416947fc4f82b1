use std::io::IsTerminal;

use tracing::Subscriber;
use tracing_subscriber::{layer::SubscriberExt, EnvFilter};

/// Build the subscriber for a run. `RUST_LOG` takes precedence; otherwise this
/// crate logs at `info`, or `debug` when `debug` is set, and dependencies at `warn`.
pub fn subscriber(debug: bool) -> impl Subscriber + Send + Sync + 'static {
    let level = if debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,{}={}", env!("CARGO_CRATE_NAME"), level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stdout)
                .with_ansi(std::io::stdout().is_terminal()),
        )
}
