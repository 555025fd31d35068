//! Split command - separate host and port.

use anyhow::Result;
use netkit_core::{ConfigStore, HostPort, SplitPolicy};
use serde::Serialize;
use tracing::debug;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SplitOutput<'a> {
    authority: &'a str,
    policy: SplitPolicy,
    #[serde(flatten)]
    parts: HostPort<'a>,
    port_number: Option<u16>,
}

/// Split `authority`, falling back to the configured policy.
pub async fn run(authority: &str, policy: Option<SplitPolicy>, json: bool) -> Result<()> {
    let policy = match policy {
        Some(p) => p,
        None => ConfigStore::new()?.get_split_policy().await?,
    };

    debug!(%policy, authority, "splitting authority");
    let parts = HostPort::split(authority, policy);

    if json {
        let output = SplitOutput {
            authority,
            policy,
            parts,
            port_number: parts.port_number(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("host: {}", parts.host);
    println!("port: {}", parts.port);
    Ok(())
}
