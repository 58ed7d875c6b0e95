use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Location, Shutter, Switch};

/// The atomic bundle produced by one synchronization cycle.
///
/// Built wholesale and published with a single pointer swap -- readers see
/// either the previous complete snapshot or the next complete one, never a
/// mix. No history is retained; the previous snapshot is dropped once the
/// last reader releases its `Arc`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub locations: Vec<Location>,
    pub switches: Vec<Switch>,
    pub shutters: Vec<Shutter>,
    /// Server version from the system-info read, absent when the read failed.
    pub version: Option<String>,
    /// Fetch failure messages from this cycle only; empty on a clean cycle.
    pub errors: Vec<String>,
    /// When this snapshot was produced. `None` only for the pre-first-cycle
    /// placeholder readers must tolerate.
    pub refreshed_at: Option<DateTime<Utc>>,
}

impl Snapshot {
    /// Whether any controllable device is present. Locations alone don't
    /// count -- a room with nothing in it is still "no connected devices".
    pub fn has_devices(&self) -> bool {
        !self.switches.is_empty() || !self.shutters.is_empty()
    }
}
