//! Dispatch an open/close/stop action to a batch of shutters.

use habvoice_core::{Bridge, BridgeConfig};

use crate::cli::ShuttersArgs;
use crate::error::CliError;

pub async fn handle(config: BridgeConfig, args: ShuttersArgs) -> Result<(), CliError> {
    // The dispatcher only needs the connection -- no sync cycle first.
    let bridge = Bridge::new(config)?;
    let result = bridge.update_shutters(args.action.token(), &args.ids).await;
    println!("{result}");
    Ok(())
}
