//! Show server version, device counts, and fetch errors for one cycle.

use habvoice_core::{Bridge, BridgeConfig};

use crate::error::CliError;

pub async fn handle(config: BridgeConfig) -> Result<(), CliError> {
    let snapshot = Bridge::oneshot(config, |bridge| async move { Ok(bridge.snapshot()) }).await?;

    println!(
        "server version: {}",
        snapshot.version.as_deref().unwrap_or("unknown")
    );
    if let Some(at) = snapshot.refreshed_at {
        println!("refreshed at:   {}", at.to_rfc3339());
    }
    println!("locations:      {}", snapshot.locations.len());
    println!("switches:       {}", snapshot.switches.len());
    println!("shutters:       {}", snapshot.shutters.len());

    if snapshot.errors.is_empty() {
        println!("errors:         none");
    } else {
        println!("errors:");
        for error in &snapshot.errors {
            println!("  - {error}");
        }
    }

    Ok(())
}
