//! Print the rendered agent instruction text after one sync cycle.

use habvoice_core::{Bridge, BridgeConfig};

use crate::error::CliError;

pub async fn handle(config: BridgeConfig) -> Result<(), CliError> {
    let text = Bridge::oneshot(config, |bridge| async move { Ok(bridge.instructions()) }).await?;
    println!("{text}");
    Ok(())
}
