//! Command dispatch: bridges CLI args -> Bridge operations -> output.

pub mod capabilities;
pub mod config_cmd;
pub mod instructions;
pub mod run;
pub mod shutters;
pub mod status;
pub mod switches;

use habvoice_core::BridgeConfig;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Dispatch a server-bound command to the appropriate handler.
pub async fn dispatch(
    cmd: Command,
    config: BridgeConfig,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match cmd {
        Command::Run(args) => run::handle(config, &args, global).await,
        Command::Instructions => instructions::handle(config).await,
        Command::Capabilities => capabilities::handle(config).await,
        Command::Status => status::handle(config).await,
        Command::Switches(args) => switches::handle(config, args).await,
        Command::Shutters(args) => shutters::handle(config, args).await,
        // Config and Completions are handled before dispatch
        Command::Config(_) | Command::Completions(_) => unreachable!(),
    }
}
