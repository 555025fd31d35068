//! Local address application service.

use std::net::IpAddr;

use parking_lot::RwLock;
use tracing::debug;

use crate::domain::{parse_scoped_ip, InterfaceAddr};
use crate::error::Result;
use crate::ports::InterfaceAddrsPort;

/// Application service for questions about local interface addresses.
///
/// It uses the `InterfaceAddrsPort` trait for the actual lookup,
/// allowing different implementations to be injected, and keeps the
/// result of the last lookup for cheap repeated queries.
pub struct AddrService<I: InterfaceAddrsPort> {
    source: I,
    addrs_cache: RwLock<Vec<InterfaceAddr>>,
}

impl<I: InterfaceAddrsPort> AddrService<I> {
    /// Create a new address service with the given interface source.
    pub fn new(source: I) -> Self {
        Self {
            source,
            addrs_cache: RwLock::new(Vec::new()),
        }
    }

    /// Refresh the address cache by looking up the interfaces.
    pub async fn refresh(&self) -> Result<Vec<InterfaceAddr>> {
        let addrs = self.source.interface_addrs().await?;
        debug!(count = addrs.len(), "refreshed interface addresses");
        *self.addrs_cache.write() = addrs.clone();
        Ok(addrs)
    }

    /// Get all cached addresses.
    pub fn cached_addrs(&self) -> Vec<InterfaceAddr> {
        self.addrs_cache.read().clone()
    }

    /// Find the cached interface address equal to `ip`.
    pub fn find_by_ip(&self, ip: &IpAddr) -> Option<InterfaceAddr> {
        self.addrs_cache
            .read()
            .iter()
            .find(|a| a.matches(ip))
            .cloned()
    }

    /// Report whether `ip` is configured on a local network interface.
    ///
    /// An empty `ip` is never on an interface and skips the lookup.
    /// An invalid literal or a failed lookup is an error. Every call looks
    /// the interfaces up again and refreshes the cache.
    ///
    /// Addresses are compared as values, not as text: an IPv4-mapped IPv6
    /// address (`::ffff:10.0.0.1`) matches the IPv4 address configured on an
    /// interface. A zoned IPv6 query (`fe80::1%eth0`) only matches an
    /// address on the interface named by the zone.
    pub async fn ip_is_on(&self, ip: &str) -> Result<bool> {
        if ip.is_empty() {
            return Ok(false);
        }

        let (ip, zone) = parse_scoped_ip(ip)?;
        let addrs = self.refresh().await?;
        Ok(addrs
            .iter()
            .any(|a| a.matches(&ip) && zone.map_or(true, |z| a.name == z)))
    }
}
