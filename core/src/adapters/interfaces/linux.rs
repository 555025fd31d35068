//! Linux interface lister implementation using iproute2.

use std::time::Duration;

use crate::domain::InterfaceAddr;
use crate::error::Result;

use super::{parse_ip_addr_output, run_command, Lister};

/// Linux-specific interface lister.
pub struct LinuxLister;

impl LinuxLister {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LinuxLister {
    fn default() -> Self {
        Self::new()
    }
}

impl Lister for LinuxLister {
    async fn list(&self, timeout: Duration) -> Result<Vec<InterfaceAddr>> {
        let stdout = run_command("ip", &["-o", "addr", "show"], timeout).await?;
        parse_ip_addr_output(&stdout)
    }
}
