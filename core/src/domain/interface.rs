//! Local interface address domain model.

use std::net::IpAddr;

use serde::{Deserialize, Serialize};

/// An IP address configured on a local network interface.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterfaceAddr {
    /// Interface name (e.g., "lo", "en0").
    pub name: String,
    /// The configured address, without prefix length or zone.
    pub ip: IpAddr,
    /// Network prefix length, when the platform reports one.
    #[serde(default)]
    pub prefix_len: Option<u8>,
}

impl InterfaceAddr {
    /// Create a new interface address.
    pub fn new(name: impl Into<String>, ip: IpAddr, prefix_len: Option<u8>) -> Self {
        Self {
            name: name.into(),
            ip,
            prefix_len,
        }
    }

    /// Whether this is a loopback address.
    pub fn is_loopback(&self) -> bool {
        self.ip.is_loopback()
    }

    /// Whether this address matches `ip`.
    ///
    /// IPv4-mapped IPv6 addresses compare equal to their IPv4 form.
    pub fn matches(&self, ip: &IpAddr) -> bool {
        self.ip.to_canonical() == ip.to_canonical()
    }
}

impl std::fmt::Display for InterfaceAddr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.prefix_len {
            Some(prefix) => write!(f, "{} {}/{}", self.name, self.ip, prefix),
            None => write!(f, "{} {}", self.name, self.ip),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches() {
        let addr = InterfaceAddr::new("lo", "127.0.0.1".parse().unwrap(), Some(8));
        assert!(addr.is_loopback());
        assert!(addr.matches(&"127.0.0.1".parse().unwrap()));
        assert!(addr.matches(&"::ffff:127.0.0.1".parse().unwrap()));
        assert!(!addr.matches(&"127.0.0.2".parse().unwrap()));
    }

    #[test]
    fn test_display() {
        let addr = InterfaceAddr::new("eth0", "10.0.0.5".parse().unwrap(), Some(24));
        assert_eq!(addr.to_string(), "eth0 10.0.0.5/24");

        let addr = InterfaceAddr::new("en0", "10.0.0.6".parse().unwrap(), None);
        assert_eq!(addr.to_string(), "en0 10.0.0.6");
    }
}
