// ── Controllable devices ──

use serde::{Deserialize, Serialize};
use strum::Display;

/// Reported state of a switchable device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SwitchState {
    On,
    Off,
}

/// A switchable device (lamp, plug, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Switch {
    pub id: String,
    pub name: String,
    pub state: SwitchState,
    pub parent_id: Option<String>,
}

/// Derived state of a motorized shutter.
///
/// There is no partial-position tier: anything that is not fully open
/// reads as closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ShutterState {
    Opened,
    Closed,
}

/// A motorized shutter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shutter {
    pub id: String,
    pub name: String,
    pub state: ShutterState,
    pub parent_id: Option<String>,
}
