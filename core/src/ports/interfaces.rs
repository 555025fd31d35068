//! Interface address port (interface).

use crate::domain::InterfaceAddr;
use crate::error::Result;

/// Port for looking up the addresses configured on local interfaces.
///
/// Implementations handle platform-specific details (ip, ifconfig, etc.)
pub trait InterfaceAddrsPort: Send + Sync {
    /// List every address currently configured on a local interface.
    fn interface_addrs(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<InterfaceAddr>>> + Send;
}
