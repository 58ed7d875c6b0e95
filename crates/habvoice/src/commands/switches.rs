//! Dispatch an on/off action to a batch of switches.

use habvoice_core::{Bridge, BridgeConfig};

use crate::cli::SwitchesArgs;
use crate::error::CliError;

pub async fn handle(config: BridgeConfig, args: SwitchesArgs) -> Result<(), CliError> {
    // The dispatcher only needs the connection -- no sync cycle first.
    let bridge = Bridge::new(config)?;
    let result = bridge.update_switches(args.action.token(), &args.ids).await;
    println!("{result}");
    Ok(())
}
