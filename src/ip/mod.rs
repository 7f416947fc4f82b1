mod external;

pub use external::EchoIpResolver;

use async_trait::async_trait;

use crate::error::Result;

#[async_trait]
pub trait IpResolver: Send + Sync {
    /// Fetch the caller's public address as the service reports it, trimmed
    /// of surrounding whitespace. The text is not validated.
    async fn resolve(&self, ipv6: bool) -> Result<String>;
}
