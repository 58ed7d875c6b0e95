// habvoice-core: the layer between habvoice-api and consumers (CLI, agent
// transports). Owns the poll-classify-publish cycle and command dispatch.

pub mod bridge;
pub mod capabilities;
pub mod classify;
pub mod config;
pub mod error;
pub mod instructions;
pub mod model;
pub mod store;

// ── Primary re-exports ──────────────────────────────────────────────
pub use bridge::Bridge;
pub use capabilities::{CapabilitySchema, select};
pub use classify::{Classified, classify};
pub use config::{BridgeConfig, DEFAULT_POLL_DELAY, TlsVerification};
pub use error::CoreError;
pub use instructions::render;
pub use store::SnapshotStore;

// Re-export model types at the crate root for ergonomics.
pub use model::{Location, Shutter, ShutterState, Snapshot, Switch, SwitchState};
