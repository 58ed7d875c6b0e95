//! Configuration inspection commands.

use crate::cli::{ConfigArgs, ConfigCommand};
use crate::error::CliError;

pub fn handle(args: &ConfigArgs) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Path => {
            println!("{}", habvoice_config::config_path().display());
            Ok(())
        }
        ConfigCommand::Show => {
            let config = habvoice_config::load_config_or_default();
            let toml = toml::to_string_pretty(&config)
                .map_err(habvoice_config::ConfigError::from)?;
            print!("{toml}");
            Ok(())
        }
    }
}
