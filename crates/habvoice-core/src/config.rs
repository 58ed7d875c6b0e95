// ── Runtime connection configuration ──
//
// Describes *how* to reach an openHAB server. Carries credential data and
// connection tuning, but never touches disk -- the CLI (or another
// consumer) constructs a `BridgeConfig` and hands it in.

use std::time::Duration;

use secrecy::SecretString;
use url::Url;

/// Delay between the end of one sync cycle and the start of the next.
pub const DEFAULT_POLL_DELAY: Duration = Duration::from_secs(5);

/// TLS verification strategy.
#[derive(Debug, Clone, Default)]
pub enum TlsVerification {
    /// System CA store (strict).
    #[default]
    SystemDefaults,
    /// Custom CA certificate file.
    CustomCa(std::path::PathBuf),
    /// Skip verification (self-signed certs).
    DangerAcceptInvalid,
}

/// Configuration for connecting to a single openHAB server.
#[derive(Debug, Clone)]
pub struct BridgeConfig {
    /// Server base URL (e.g., `http://openhab:8080`).
    pub url: Url,
    /// Bearer API token.
    pub api_token: SecretString,
    /// TLS verification strategy.
    pub tls: TlsVerification,
    /// Request timeout.
    pub timeout: Duration,
    /// Delay between sync cycles, measured from the end of one cycle to
    /// the start of the next.
    pub poll_delay: Duration,
}
