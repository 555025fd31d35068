//! IP commands - extract IPs and look them up locally.

use anyhow::{Context, Result};
use netkit_core::{parse_ip, AddrService, ConfigStore, InterfaceLister, NetAddr};
use serde_json::json;

/// Print whether `ip` is configured on a local interface.
pub async fn is_on(ip: &str, json: bool) -> Result<()> {
    let timeout = ConfigStore::new()?.get_command_timeout().await?;
    let service = AddrService::new(InterfaceLister::with_timeout(timeout));

    let on = service
        .ip_is_on(ip)
        .await
        .with_context(|| format!("checking whether {} is local", ip))?;

    if json {
        let interface = parse_ip(ip)
            .ok()
            .and_then(|parsed| service.find_by_ip(&parsed))
            .map(|a| a.name);
        println!(
            "{}",
            serde_json::to_string_pretty(&json!({ "ip": ip, "on": on, "interface": interface }))?
        );
        return Ok(());
    }

    if on {
        println!("{} is configured on this host", ip);
    } else {
        println!("{} is not configured on this host", ip);
    }
    Ok(())
}

/// Print the IP carried by `address`.
pub fn extract(network: &str, address: &str, json: bool) -> Result<()> {
    let addr = NetAddr::parse(network, address);
    let ip = addr.ip()?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&json!({
                "network": addr.network(),
                "address": addr.to_string(),
                "ip": ip,
            }))?
        );
        return Ok(());
    }

    println!("{}", ip);
    Ok(())
}
