//! Interface address adapters.
//!
//! Platform-specific implementations of interface address lookup.

#[cfg(target_os = "macos")]
mod darwin;

#[cfg(target_os = "linux")]
mod linux;

#[cfg(not(any(target_os = "linux", target_os = "macos")))]
mod unsupported;

mod parse;

use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;
use tracing::{debug, warn};

use crate::domain::InterfaceAddr;
use crate::error::{Error, Result};
use crate::ports::InterfaceAddrsPort;

pub use parse::{parse_ifconfig_output, parse_ip_addr_output};

/// How long a listing command may run before it is killed.
pub const DEFAULT_COMMAND_TIMEOUT: Duration = Duration::from_secs(3);

/// The main interface lister that uses platform-specific implementations.
pub struct InterfaceLister {
    #[cfg(target_os = "macos")]
    inner: darwin::DarwinLister,

    #[cfg(target_os = "linux")]
    inner: linux::LinuxLister,

    #[cfg(not(any(target_os = "linux", target_os = "macos")))]
    inner: unsupported::UnsupportedLister,

    timeout: Duration,
}

impl InterfaceLister {
    /// Create a new lister for the current platform.
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_COMMAND_TIMEOUT)
    }

    /// Create a lister whose commands are killed after `timeout`.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            #[cfg(target_os = "macos")]
            inner: darwin::DarwinLister::new(),

            #[cfg(target_os = "linux")]
            inner: linux::LinuxLister::new(),

            #[cfg(not(any(target_os = "linux", target_os = "macos")))]
            inner: unsupported::UnsupportedLister::new(),

            timeout,
        }
    }

    /// The command timeout in use.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// List all local interface addresses.
    pub async fn list(&self) -> Result<Vec<InterfaceAddr>> {
        self.inner.list(self.timeout).await
    }
}

impl Default for InterfaceLister {
    fn default() -> Self {
        Self::new()
    }
}

impl InterfaceAddrsPort for InterfaceLister {
    async fn interface_addrs(&self) -> Result<Vec<InterfaceAddr>> {
        self.list().await
    }
}

/// Internal trait for platform-specific implementations.
trait Lister: Send + Sync {
    fn list(
        &self,
        timeout: Duration,
    ) -> impl std::future::Future<Output = Result<Vec<InterfaceAddr>>> + Send;
}

/// Run a command to completion and return its stdout.
///
/// The child is killed if it outlives `timeout`.
pub(crate) async fn run_command(program: &str, args: &[&str], timeout: Duration) -> Result<String> {
    debug!(program, ?args, ?timeout, "running command");

    let child = Command::new(program)
        .args(args)
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .kill_on_drop(true)
        .output();

    let output = match tokio::time::timeout(timeout, child).await {
        Ok(result) => {
            result.map_err(|e| Error::CommandFailed(format!("Failed to run {}: {}", program, e)))?
        }
        Err(_) => {
            warn!(program, ?timeout, "command timed out");
            return Err(Error::Timeout(format!(
                "{} did not finish within {:?}",
                program, timeout
            )));
        }
    };

    if !output.status.success() {
        return Err(Error::CommandFailed(format!(
            "{} exited with {}",
            program, output.status
        )));
    }

    String::from_utf8(output.stdout)
        .map_err(|e| Error::ParseError(format!("Invalid UTF-8 in {} output: {}", program, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_program() {
        let err = run_command("/nonexistent/netkit-test", &[], DEFAULT_COMMAND_TIMEOUT)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::CommandFailed(_)));
        assert!(!err.is_timeout());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_command_timeout() {
        let err = run_command("sleep", &["5"], Duration::from_millis(50))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Timeout(_)));
        assert!(err.is_timeout());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_command_output() {
        let out = run_command("echo", &["inet"], DEFAULT_COMMAND_TIMEOUT)
            .await
            .unwrap();
        assert_eq!(out.trim(), "inet");
    }

    #[test]
    fn test_lister_timeout() {
        let lister = InterfaceLister::with_timeout(Duration::from_millis(250));
        assert_eq!(lister.timeout(), Duration::from_millis(250));
        assert_eq!(InterfaceLister::new().timeout(), DEFAULT_COMMAND_TIMEOUT);
    }
}
