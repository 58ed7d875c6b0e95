//! Clap derive structures for the `habvoice` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// habvoice -- voice-assistant bridge for openHAB
#[derive(Debug, Parser)]
#[command(
    name = "habvoice",
    version,
    about = "Bridge an openHAB server to a voice assistant",
    long_about = "Synchronizes the openHAB inventory into a device model, renders the\n\
        instruction payload and capability schemas consumed by a conversational\n\
        agent, and dispatches switch/shutter commands back to the server.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Server profile to use
    #[arg(long, short = 'p', env = "HABVOICE_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Server base URL (overrides profile)
    #[arg(long, short = 's', env = "HABVOICE_SERVER", global = true)]
    pub server: Option<String>,

    /// API token
    #[arg(long, env = "HABVOICE_API_TOKEN", global = true, hide_env = true)]
    pub api_token: Option<String>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Accept self-signed TLS certificates
    #[arg(long, short = 'k', env = "HABVOICE_INSECURE", global = true)]
    pub insecure: bool,

    /// Request timeout in seconds
    #[arg(long, env = "HABVOICE_TIMEOUT", global = true)]
    pub timeout: Option<u64>,
}

// ── Commands ─────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the continuous inventory sync loop
    Run(RunArgs),

    /// Print the current agent instruction text (one sync cycle)
    Instructions,

    /// Print the currently meaningful capability schemas as JSON
    Capabilities,

    /// Show server version, device counts, and fetch errors
    Status,

    /// Turn switches on or off
    Switches(SwitchesArgs),

    /// Open, close or stop shutters
    Shutters(ShuttersArgs),

    /// Inspect the configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Debug, Args)]
pub struct RunArgs {
    /// Delay between sync cycles in seconds (measured from the end of a cycle)
    #[arg(long)]
    pub poll_delay: Option<u64>,
}

#[derive(Debug, Args)]
pub struct SwitchesArgs {
    /// Action to perform
    #[arg(value_enum)]
    pub action: SwitchAction,

    /// Item ids to update, in dispatch order
    #[arg(required = true)]
    pub ids: Vec<String>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SwitchAction {
    On,
    Off,
}

impl SwitchAction {
    /// The action token handed to the dispatcher.
    pub fn token(self) -> &'static str {
        match self {
            Self::On => "on",
            Self::Off => "off",
        }
    }
}

#[derive(Debug, Args)]
pub struct ShuttersArgs {
    /// Action to perform
    #[arg(value_enum)]
    pub action: ShutterAction,

    /// Item ids to update, in dispatch order
    #[arg(required = true)]
    pub ids: Vec<String>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ShutterAction {
    Open,
    Close,
    Stop,
}

impl ShutterAction {
    /// The action token handed to the dispatcher.
    pub fn token(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Close => "close",
            Self::Stop => "stop",
        }
    }
}

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the merged configuration as TOML
    Show,
    /// Print the config file path
    Path,
}

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}
