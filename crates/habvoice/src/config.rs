//! Bridges the profile configuration (habvoice-config) with CLI flag
//! overrides into a ready-to-use `BridgeConfig`.

use std::time::Duration;

use secrecy::SecretString;

use habvoice_config::{Config, Defaults, Profile};
use habvoice_core::{BridgeConfig, DEFAULT_POLL_DELAY, TlsVerification};

use crate::cli::GlobalOpts;
use crate::error::CliError;

/// The profile name to use: `--profile` flag, then the config file's
/// `default_profile`, then "default".
pub fn active_profile_name(global: &GlobalOpts, config: &Config) -> String {
    global
        .profile
        .clone()
        .or_else(|| config.default_profile.clone())
        .unwrap_or_else(|| "default".into())
}

/// Resolve a profile into a `BridgeConfig`, applying CLI flag overrides.
pub fn resolve_profile(
    profile: &Profile,
    profile_name: &str,
    defaults: &Defaults,
    global: &GlobalOpts,
) -> Result<BridgeConfig, CliError> {
    let mut bridge = habvoice_config::profile_to_bridge_config(profile, profile_name, defaults)?;

    if let Some(ref server) = global.server {
        bridge.url = parse_server_url(server)?;
    }
    if let Some(ref token) = global.api_token {
        bridge.api_token = SecretString::from(token.clone());
    }
    if global.insecure {
        bridge.tls = TlsVerification::DangerAcceptInvalid;
    }
    if let Some(timeout) = global.timeout {
        bridge.timeout = Duration::from_secs(timeout);
    }

    Ok(bridge)
}

/// Build a `BridgeConfig` from the config file, active profile, and CLI
/// overrides -- falling back to flags/env alone when no profile exists.
pub fn build_bridge_config(global: &GlobalOpts) -> Result<BridgeConfig, CliError> {
    let config = habvoice_config::load_config_or_default();
    let profile_name = active_profile_name(global, &config);

    if let Some(profile) = config.profiles.get(&profile_name) {
        return resolve_profile(profile, &profile_name, &config.defaults, global);
    }

    // No profile found -- try to build from CLI flags / env vars alone
    let server = global.server.as_deref().ok_or_else(|| CliError::NoConfig {
        path: habvoice_config::config_path().display().to_string(),
    })?;
    let url = parse_server_url(server)?;

    let api_token = global
        .api_token
        .as_ref()
        .map(|t| SecretString::from(t.clone()))
        .ok_or(CliError::NoCredentials {
            profile: profile_name,
        })?;

    let tls = if global.insecure {
        TlsVerification::DangerAcceptInvalid
    } else {
        TlsVerification::SystemDefaults
    };

    Ok(BridgeConfig {
        url,
        api_token,
        tls,
        timeout: Duration::from_secs(global.timeout.unwrap_or(30)),
        poll_delay: DEFAULT_POLL_DELAY,
    })
}

fn parse_server_url(raw: &str) -> Result<url::Url, CliError> {
    raw.parse().map_err(|_| CliError::Validation {
        field: "server".into(),
        reason: format!("invalid URL: {raw}"),
    })
}
