//! macOS interface lister implementation using ifconfig.

use std::time::Duration;

use crate::domain::InterfaceAddr;
use crate::error::Result;

use super::{parse_ifconfig_output, run_command, Lister};

/// macOS-specific interface lister.
pub struct DarwinLister;

impl DarwinLister {
    /// Create a new macOS lister.
    pub fn new() -> Self {
        Self
    }
}

impl Default for DarwinLister {
    fn default() -> Self {
        Self::new()
    }
}

impl Lister for DarwinLister {
    async fn list(&self, timeout: Duration) -> Result<Vec<InterfaceAddr>> {
        let stdout = run_command("/sbin/ifconfig", &[], timeout).await?;
        parse_ifconfig_output(&stdout)
    }
}
