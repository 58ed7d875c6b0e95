//! The continuous sync loop: the deployment mode of the bridge.

use std::time::Duration;

use habvoice_core::{Bridge, BridgeConfig};

use crate::cli::{GlobalOpts, RunArgs};
use crate::error::CliError;

pub async fn handle(
    mut config: BridgeConfig,
    args: &RunArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    if let Some(secs) = args.poll_delay {
        config.poll_delay = Duration::from_secs(secs);
    }

    let bridge = Bridge::new(config)?;
    bridge.start().await;

    if !global.quiet {
        eprintln!(
            "habvoice: syncing {} every {}s (ctrl-c to stop)",
            bridge.config().url,
            bridge.config().poll_delay.as_secs()
        );
    }

    tokio::signal::ctrl_c().await?;
    bridge.shutdown().await;

    if !global.quiet {
        eprintln!("habvoice: stopped");
    }
    Ok(())
}
