//! Host:port splitting.
//!
//! Separates an authority string (`host[:port]`) into its host and port parts
//! without validating either. Two policies exist:
//!
//! - [`SplitPolicy::Lenient`]: always split at the last colon.
//! - [`SplitPolicy::Strict`]: only split when the port is empty or all digits.
//!
//! Both are total: malformed input is echoed back as the host.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

// ============================================================================
// SplitPolicy
// ============================================================================

/// How the port part of an authority is recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum SplitPolicy {
    /// Split at the last colon whatever follows it.
    #[default]
    Lenient,
    /// Split only when the text after the last colon is empty or all digits.
    Strict,
}

impl SplitPolicy {
    /// All available policies.
    pub const ALL: [SplitPolicy; 2] = [SplitPolicy::Lenient, SplitPolicy::Strict];

    /// Get the lowercase name of this policy.
    pub fn as_str(&self) -> &'static str {
        match self {
            SplitPolicy::Lenient => "lenient",
            SplitPolicy::Strict => "strict",
        }
    }

    /// Split an authority with this policy.
    pub fn split<'a>(&self, authority: &'a str) -> (&'a str, &'a str) {
        match self {
            SplitPolicy::Lenient => split_host_port(authority),
            SplitPolicy::Strict => split_host_port_strict(authority),
        }
    }
}

impl fmt::Display for SplitPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for SplitPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SplitPolicy::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::Config(format!("Unknown split policy: {}", s)))
    }
}

// ============================================================================
// Splitting
// ============================================================================

/// Split `authority` into host and port, splitting at the last colon.
///
/// A leading `[` starts a bracketed IPv6 literal whose brackets are removed
/// when the `]` ends the input or is directly followed by the last colon.
/// Any other bracket shape is returned unchanged as the host. Unbracketed
/// IPv6 addresses lose their last group to the port.
///
/// The colon check runs first, so a bracketed host without any colon
/// (`"[abc]"`) keeps its brackets.
///
/// ```
/// use netkit_core::split_host_port;
///
/// assert_eq!(split_host_port("example.com:80"), ("example.com", "80"));
/// assert_eq!(split_host_port("[ff00::1]:80"), ("ff00::1", "80"));
/// assert_eq!(split_host_port("[ff00::]"), ("ff00::", ""));
/// assert_eq!(split_host_port("ff00::"), ("ff00:", ""));
/// assert_eq!(split_host_port("localhost:8.0"), ("localhost", "8.0"));
/// ```
pub fn split_host_port(authority: &str) -> (&str, &str) {
    let Some(colon) = authority.rfind(':') else {
        return (authority, "");
    };

    if !authority.starts_with('[') {
        return (&authority[..colon], &authority[colon + 1..]);
    }

    let Some(end) = authority.find(']') else {
        return (authority, "");
    };

    if end + 1 == authority.len() {
        (&authority[1..end], "")
    } else if end + 1 == colon {
        (&authority[1..end], &authority[colon + 1..])
    } else {
        (authority, "")
    }
}

/// Split `authority` into host and port, accepting only numeric ports.
///
/// The split happens at the last colon only if what follows is empty or all
/// ASCII digits; otherwise the whole input is the host. A host wrapped in
/// `[` and `]` then has the brackets removed.
///
/// ```
/// use netkit_core::split_host_port_strict;
///
/// assert_eq!(split_host_port_strict("localhost:80"), ("localhost", "80"));
/// assert_eq!(split_host_port_strict("localhost:8.0"), ("localhost:8.0", ""));
/// assert_eq!(split_host_port_strict("[abc]"), ("abc", ""));
/// ```
pub fn split_host_port_strict(authority: &str) -> (&str, &str) {
    let (mut host, mut port) = (authority, "");

    if let Some(colon) = authority.rfind(':') {
        if valid_optional_port(&authority[colon..]) {
            host = &authority[..colon];
            port = &authority[colon + 1..];
        }
    }

    if host.len() >= 2 && host.starts_with('[') && host.ends_with(']') {
        host = &host[1..host.len() - 1];
    }

    (host, port)
}

/// Reports whether `port` is empty or a colon followed by digits only.
pub fn valid_optional_port(port: &str) -> bool {
    match port.strip_prefix(':') {
        Some(digits) => digits.bytes().all(|b| b.is_ascii_digit()),
        None => port.is_empty(),
    }
}

// ============================================================================
// HostPort
// ============================================================================

/// The host and port parts of an authority, borrowed from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct HostPort<'a> {
    /// Host part, brackets removed for recognized IPv6 literals.
    pub host: &'a str,
    /// Port part, possibly empty and not validated by the lenient policy.
    pub port: &'a str,
}

impl<'a> HostPort<'a> {
    /// Split `authority` using `policy`.
    pub fn split(authority: &'a str, policy: SplitPolicy) -> Self {
        let (host, port) = policy.split(authority);
        Self { host, port }
    }

    /// Split `authority` with [`SplitPolicy::Lenient`].
    pub fn lenient(authority: &'a str) -> Self {
        Self::split(authority, SplitPolicy::Lenient)
    }

    /// Split `authority` with [`SplitPolicy::Strict`].
    pub fn strict(authority: &'a str) -> Self {
        Self::split(authority, SplitPolicy::Strict)
    }

    /// Whether a non-empty port was found.
    pub fn has_port(&self) -> bool {
        !self.port.is_empty()
    }

    /// The port as a number, if it is one.
    pub fn port_number(&self) -> Option<u16> {
        self.port.parse().ok()
    }
}

impl fmt::Display for HostPort<'_> {
    /// Brackets are not restored, so this does not round-trip IPv6 literals.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.port.is_empty() {
            f.write_str(self.host)
        } else {
            write!(f, "{}:{}", self.host, self.port)
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
