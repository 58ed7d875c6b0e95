//! Print the currently meaningful capability schemas as JSON.

use habvoice_core::{Bridge, BridgeConfig};

use crate::error::CliError;

pub async fn handle(config: BridgeConfig) -> Result<(), CliError> {
    let schemas =
        Bridge::oneshot(config, |bridge| async move { Ok(bridge.capabilities()) }).await?;

    let json = serde_json::to_string_pretty(&schemas)
        .map_err(|e| CliError::Internal(format!("failed to serialize schemas: {e}")))?;
    println!("{json}");
    Ok(())
}
