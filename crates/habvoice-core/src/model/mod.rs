// ── Canonical domain model ──
//
// Small, serde-friendly types produced by classification. One file per
// entity kind, re-exported flat.

mod location;
mod device;
mod snapshot;

pub use device::{Shutter, ShutterState, Switch, SwitchState};
pub use location::Location;
pub use snapshot::Snapshot;
