//! Fallback interface lister for platforms without a parser.

use std::time::Duration;

use crate::domain::InterfaceAddr;
use crate::error::{Error, Result};

use super::Lister;

/// Lister that always reports the platform as unsupported.
pub struct UnsupportedLister;

impl UnsupportedLister {
    pub fn new() -> Self {
        Self
    }
}

impl Default for UnsupportedLister {
    fn default() -> Self {
        Self::new()
    }
}

impl Lister for UnsupportedLister {
    async fn list(&self, _timeout: Duration) -> Result<Vec<InterfaceAddr>> {
        // TODO: Parse `ipconfig` output on Windows
        Err(Error::UnsupportedPlatform(format!(
            "Interface listing not implemented for {}",
            std::env::consts::OS
        )))
    }
}
