//! Config commands - show and update settings.

use std::time::Duration;

use anyhow::Result;
use netkit_core::{ConfigStore, SplitPolicy};

pub async fn show(json: bool) -> Result<()> {
    let store = ConfigStore::new()?;
    let config = store.load().await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    println!("Config file:     {}", store.path().display());
    println!("Split policy:    {}", config.split_policy);
    println!("Command timeout: {} ms", config.command_timeout_ms);
    Ok(())
}

pub async fn set_policy(policy: SplitPolicy) -> Result<()> {
    ConfigStore::new()?.set_split_policy(policy).await?;
    println!("Default split policy set to {}", policy);
    Ok(())
}

pub async fn set_timeout(millis: u64) -> Result<()> {
    ConfigStore::new()?
        .set_command_timeout(Duration::from_millis(millis))
        .await?;
    println!("Command timeout set to {} ms", millis);
    Ok(())
}
