//! netkit Core Library
//!
//! Host:port splitting and local network address helpers.
//! Provides functionality to:
//! - Split `host[:port]` authorities with a lenient or strict policy
//! - Extract the IP of a socket or textual network address
//! - Check whether an IP is configured on a local interface
//! - Classify errors as timeouts
//! - Persist user configuration (default split policy, command timeout)
//!
//! # Architecture
//! This library follows hexagonal architecture (ports & adapters):
//! - `domain`: Pure parsing logic and data models
//! - `ports`: Trait definitions (interfaces)
//! - `adapters`: External system implementations
//! - `application`: Use case services
//!
//! # Platform Support
//! - macOS: Uses `ifconfig`
//! - Linux: Uses `ip -o addr show`
//! - Others: Splitting works everywhere; interface lookup is unsupported

// Hexagonal architecture layers
pub mod adapters;
pub mod application;
pub mod domain;
pub mod ports;

pub mod config;
pub mod error;
pub mod timeout;

// Re-export domain types (primary API)
pub use domain::{
    parse_ip, parse_scoped_ip, split_host_port, split_host_port_strict, valid_optional_port,
    HostPort, InterfaceAddr, NetAddr, SplitPolicy,
};

// Re-export other commonly used types
pub use adapters::InterfaceLister;
pub use application::AddrService;
pub use config::{Config, ConfigStore};
pub use error::{Error, Result};
pub use ports::InterfaceAddrsPort;
pub use timeout::is_timeout;
