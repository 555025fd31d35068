//! Network address values and IP extraction.

use std::fmt;
use std::net::{IpAddr, SocketAddr};

use super::authority::split_host_port;
use crate::error::{Error, Result};

/// A network endpoint as reported by a socket or a peer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NetAddr {
    /// A TCP socket address.
    Tcp(SocketAddr),
    /// A UDP socket address.
    Udp(SocketAddr),
    /// Any other address, kept in its textual form.
    Other { network: String, address: String },
}

impl NetAddr {
    /// Build an address from a network name and its textual form.
    ///
    /// `tcp`/`udp` networks (including the `4`/`6` suffixed names) whose
    /// address parses as a socket address become [`NetAddr::Tcp`] or
    /// [`NetAddr::Udp`]; everything else is kept as [`NetAddr::Other`].
    pub fn parse(network: &str, address: &str) -> Self {
        let socket = address.parse::<SocketAddr>().ok();
        match (network, socket) {
            ("tcp" | "tcp4" | "tcp6", Some(addr)) => NetAddr::Tcp(addr),
            ("udp" | "udp4" | "udp6", Some(addr)) => NetAddr::Udp(addr),
            _ => NetAddr::Other {
                network: network.to_string(),
                address: address.to_string(),
            },
        }
    }

    /// Get the network name.
    pub fn network(&self) -> &str {
        match self {
            NetAddr::Tcp(_) => "tcp",
            NetAddr::Udp(_) => "udp",
            NetAddr::Other { network, .. } => network,
        }
    }

    /// Extract the IP address.
    ///
    /// Textual addresses are split with [`split_host_port`] and the host is
    /// parsed as an IP literal.
    pub fn ip(&self) -> Result<IpAddr> {
        match self {
            NetAddr::Tcp(addr) | NetAddr::Udp(addr) => Ok(addr.ip()),
            NetAddr::Other { address, .. } => {
                let (host, _) = split_host_port(address);
                parse_ip(host)
            }
        }
    }
}

impl From<SocketAddr> for NetAddr {
    fn from(addr: SocketAddr) -> Self {
        NetAddr::Tcp(addr)
    }
}

impl fmt::Display for NetAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetAddr::Tcp(addr) | NetAddr::Udp(addr) => write!(f, "{}", addr),
            NetAddr::Other { address, .. } => f.write_str(address),
        }
    }
}

/// Parse an IP literal, dropping any IPv6 zone (`fe80::1%eth0`).
pub fn parse_ip(s: &str) -> Result<IpAddr> {
    parse_scoped_ip(s).map(|(ip, _zone)| ip)
}

/// Parse an IP literal and return its IPv6 zone, if any.
///
/// Zones are only valid on IPv6 literals and must not be empty.
pub fn parse_scoped_ip(s: &str) -> Result<(IpAddr, Option<&str>)> {
    let (literal, zone) = match s.split_once('%') {
        Some((_, "")) => return Err(Error::invalid_address(s, "empty zone")),
        Some((addr, zone)) if addr.contains(':') => (addr, Some(zone)),
        _ => (s, None),
    };
    let ip = literal
        .parse::<IpAddr>()
        .map_err(|e| Error::invalid_address(s, e))?;
    Ok((ip, zone))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::{Ipv4Addr, Ipv6Addr};

    #[test]
    fn test_socket_addrs() {
        let tcp = NetAddr::from(SocketAddr::from(([192, 168, 1, 1], 0)));
        assert_eq!(tcp.ip().unwrap().to_string(), "192.168.1.1");
        assert_eq!(tcp.network(), "tcp");

        let udp = NetAddr::Udp(SocketAddr::from(([192, 168, 1, 2], 53)));
        assert_eq!(udp.ip().unwrap().to_string(), "192.168.1.2");
        assert_eq!(udp.network(), "udp");
    }

    #[test]
    fn test_textual_addrs() {
        let addr = NetAddr::parse("unix", "192.168.1.3:80");
        assert_eq!(addr.ip().unwrap(), IpAddr::V4(Ipv4Addr::new(192, 168, 1, 3)));

        let addr = NetAddr::parse("ip", "192.168.1.4");
        assert_eq!(addr.ip().unwrap(), IpAddr::V4(Ipv4Addr::new(192, 168, 1, 4)));

        let addr = NetAddr::parse("ip", "[::1]:80");
        assert_eq!(addr.ip().unwrap(), IpAddr::V6(Ipv6Addr::LOCALHOST));

        let err = NetAddr::parse("ip", "abc").ip().unwrap_err();
        assert!(matches!(err, Error::InvalidAddress { .. }));
    }

    #[test]
    fn test_parse_chooses_variant() {
        assert!(matches!(NetAddr::parse("tcp", "127.0.0.1:80"), NetAddr::Tcp(_)));
        assert!(matches!(NetAddr::parse("udp6", "[::1]:53"), NetAddr::Udp(_)));
        assert!(matches!(
            NetAddr::parse("tcp", "localhost:80"),
            NetAddr::Other { .. }
        ));
    }

    #[test]
    fn test_parse_ip_zone() {
        let ip = parse_ip("fe80::1%eth0").unwrap();
        assert_eq!(ip.to_string(), "fe80::1");
        assert!(parse_ip("10.0.0.1%eth0").is_err());
        assert!(parse_ip("").is_err());
        assert!(parse_ip("fe80::1%").is_err());
    }

    #[test]
    fn test_parse_scoped_ip() {
        let (ip, zone) = parse_scoped_ip("fe80::1%wlan0").unwrap();
        assert_eq!(ip, "fe80::1".parse::<IpAddr>().unwrap());
        assert_eq!(zone, Some("wlan0"));

        let (_, zone) = parse_scoped_ip("fe80::1").unwrap();
        assert_eq!(zone, None);

        let err = parse_scoped_ip("fe80::1%").unwrap_err();
        assert!(matches!(err, Error::InvalidAddress { .. }));
    }
}
