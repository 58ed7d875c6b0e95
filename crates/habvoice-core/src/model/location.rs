use serde::{Deserialize, Serialize};

/// A grouping node in the home topology (room, floor, zone).
///
/// `id` is the server-assigned item name; `parent_id` is the first group
/// membership of the source record and may reference a location that was
/// never classified -- dangling references are tolerated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub id: String,
    pub name: String,
    pub parent_id: Option<String>,
}
