//! Domain layer - Pure business logic and data models.
//!
//! This module contains the address types and parsing rules.
//! These types have no I/O dependencies and can be tested in isolation.

mod authority;
mod interface;
mod net_addr;

// Re-export all domain types
pub use authority::{
    split_host_port, split_host_port_strict, valid_optional_port, HostPort, SplitPolicy,
};
pub use interface::InterfaceAddr;
pub use net_addr::{parse_ip, parse_scoped_ip, NetAddr};
