//! Parsers for interface listing command output.

use std::net::IpAddr;

use regex::Regex;
use tracing::warn;

use crate::domain::{parse_ip, InterfaceAddr};
use crate::error::{Error, Result};

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| Error::ParseError(format!("Invalid pattern: {}", e)))
}

fn ip_or_warn(literal: &str, name: &str) -> Option<IpAddr> {
    match parse_ip(literal) {
        Ok(ip) => Some(ip),
        Err(e) => {
            warn!(interface = name, error = %e, "skipping unparsable interface address");
            None
        }
    }
}

/// Parse the one-line-per-address output of `ip -o addr show`.
///
/// ```text
/// 1: lo    inet 127.0.0.1/8 scope host lo\       valid_lft forever preferred_lft forever
/// 2: eth0    inet6 fe80::42:acff:fe11:2/64 scope link \       valid_lft forever preferred_lft forever
/// ```
pub fn parse_ip_addr_output(output: &str) -> Result<Vec<InterfaceAddr>> {
    let regex = compile(r"^\d+:\s+(\S+?)(?:@\S+)?\s+inet6?\s+([0-9A-Fa-f:.]+)(?:/(\d+))?")?;

    let mut addrs = Vec::new();
    for line in output.lines() {
        let Some(caps) = regex.captures(line) else {
            continue;
        };

        let name = &caps[1];
        let Some(ip) = ip_or_warn(&caps[2], name) else {
            continue;
        };
        let prefix_len = caps.get(3).and_then(|m| m.as_str().parse().ok());

        addrs.push(InterfaceAddr::new(name, ip, prefix_len));
    }

    Ok(addrs)
}

/// Parse the block output of BSD `ifconfig`.
///
/// ```text
/// lo0: flags=8049<UP,LOOPBACK,RUNNING,MULTICAST> mtu 16384
///     inet 127.0.0.1 netmask 0xff000000
///     inet6 fe80::1%lo0 prefixlen 64 scopeid 0x1
/// ```
pub fn parse_ifconfig_output(output: &str) -> Result<Vec<InterfaceAddr>> {
    let header = compile(r"^([A-Za-z0-9_.\-]+):\s+flags=")?;
    let address = compile(
        r"^\s+inet6?\s+([0-9A-Fa-f:.]+)(?:%\S+)?(?:\s+netmask\s+0x([0-9A-Fa-f]+))?(?:\s+prefixlen\s+(\d+))?",
    )?;

    let mut addrs = Vec::new();
    let mut current: Option<String> = None;

    for line in output.lines() {
        if let Some(caps) = header.captures(line) {
            current = Some(caps[1].to_string());
            continue;
        }

        let Some(name) = current.as_deref() else {
            continue;
        };
        let Some(caps) = address.captures(line) else {
            continue;
        };

        let Some(ip) = ip_or_warn(&caps[1], name) else {
            continue;
        };

        let prefix_len = match (caps.get(2), caps.get(3)) {
            (Some(mask), _) => u32::from_str_radix(mask.as_str(), 16)
                .ok()
                .map(|m| m.count_ones() as u8),
            (None, Some(prefix)) => prefix.as_str().parse().ok(),
            (None, None) => None,
        };

        addrs.push(InterfaceAddr::new(name, ip, prefix_len));
    }

    Ok(addrs)
}

#[cfg(test)]
mod tests {
    use super::*;

    const IP_ADDR_OUTPUT: &str = "\
1: lo    inet 127.0.0.1/8 scope host lo\\       valid_lft forever preferred_lft forever
1: lo    inet6 ::1/128 scope host noprefixroute \\       valid_lft forever preferred_lft forever
2: eth0    inet 172.17.0.2/16 brd 172.17.255.255 scope global eth0\\       valid_lft forever preferred_lft forever
2: eth0    inet6 fe80::42:acff:fe11:2/64 scope link \\       valid_lft forever preferred_lft forever
5: veth1@if4    inet 10.1.0.1/24 scope global veth1\\       valid_lft forever preferred_lft forever
";

    const IFCONFIG_OUTPUT: &str = "\
lo0: flags=8049<UP,LOOPBACK,RUNNING,MULTICAST> mtu 16384
\toptions=1203<RXCSUM,TXCSUM,TXSTATUS,SW_TIMESTAMP>
\tinet 127.0.0.1 netmask 0xff000000
\tinet6 ::1 prefixlen 128
\tinet6 fe80::1%lo0 prefixlen 64 scopeid 0x1
en0: flags=8863<UP,BROADCAST,SMART,RUNNING,SIMPLEX,MULTICAST> mtu 1500
\tether 3c:22:fb:00:00:01
\tinet6 fe80::1c3a:9f2b:1d4e:77a1%en0 prefixlen 64 secured scopeid 0x6
\tinet 192.168.1.23 netmask 0xffffff00 broadcast 192.168.1.255
\tstatus: active
";

    #[test]
    fn test_parse_ip_addr_output() {
        let addrs = parse_ip_addr_output(IP_ADDR_OUTPUT).unwrap();
        assert_eq!(addrs.len(), 5);

        assert_eq!(addrs[0].name, "lo");
        assert_eq!(addrs[0].ip.to_string(), "127.0.0.1");
        assert_eq!(addrs[0].prefix_len, Some(8));

        assert_eq!(addrs[1].ip.to_string(), "::1");
        assert_eq!(addrs[1].prefix_len, Some(128));

        assert_eq!(addrs[3].name, "eth0");
        assert_eq!(addrs[3].ip.to_string(), "fe80::42:acff:fe11:2");

        assert_eq!(addrs[4].name, "veth1");
        assert_eq!(addrs[4].ip.to_string(), "10.1.0.1");
    }

    #[test]
    fn test_parse_ifconfig_output() {
        let addrs = parse_ifconfig_output(IFCONFIG_OUTPUT).unwrap();
        assert_eq!(addrs.len(), 5);

        assert_eq!(addrs[0].name, "lo0");
        assert_eq!(addrs[0].ip.to_string(), "127.0.0.1");
        assert_eq!(addrs[0].prefix_len, Some(8));

        assert_eq!(addrs[2].ip.to_string(), "fe80::1");
        assert_eq!(addrs[2].prefix_len, Some(64));

        assert_eq!(addrs[4].name, "en0");
        assert_eq!(addrs[4].ip.to_string(), "192.168.1.23");
        assert_eq!(addrs[4].prefix_len, Some(24));
    }

    #[test]
    fn test_parse_empty_output() {
        assert!(parse_ip_addr_output("").unwrap().is_empty());
        assert!(parse_ifconfig_output("\tinet 10.0.0.1 netmask 0xff000000\n")
            .unwrap()
            .is_empty());
    }
}
