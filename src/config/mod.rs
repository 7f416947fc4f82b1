mod settings;

pub use settings::{
    PartialConfig, RecordType, RunConfig, DEFAULT_TIMEOUT_SECONDS, DEFAULT_TTL,
    IPV4_ECHO_ENDPOINT, IPV6_ECHO_ENDPOINT, NAMESILO_API_BASE,
};
