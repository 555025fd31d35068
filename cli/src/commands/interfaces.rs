//! Interfaces command - show all local interface addresses.

use anyhow::Result;
use netkit_core::{ConfigStore, InterfaceLister};

pub async fn list(json: bool) -> Result<()> {
    let timeout = ConfigStore::new()?.get_command_timeout().await?;
    let addrs = InterfaceLister::with_timeout(timeout).list().await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&addrs)?);
        return Ok(());
    }

    if addrs.is_empty() {
        println!("No interface addresses found.");
        return Ok(());
    }

    // Table header
    println!("{:<16} {:<40} PREFIX", "INTERFACE", "ADDRESS");
    println!("{}", "-".repeat(64));

    for addr in &addrs {
        let prefix = addr
            .prefix_len
            .map(|p| p.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!("{:<16} {:<40} {}", truncate(&addr.name, 16), addr.ip, prefix);
    }

    println!("\nTotal: {} addresses", addrs.len());
    Ok(())
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let head: String = s.chars().take(max - 1).collect();
        format!("{}…", head)
    }
}
