// openHAB REST API response types
//
// Models for the `/rest/systeminfo` and `/rest/items` endpoints. Fields use
// `#[serde(default)]` liberally because the item payload varies with the
// item type and the bindings installed on the server.

use serde::{Deserialize, Serialize};

// ── System info ──────────────────────────────────────────────────────

/// Response envelope of `GET /rest/systeminfo`.
#[derive(Debug, Clone, Deserialize)]
pub struct SystemInfoResponse {
    #[serde(rename = "systemInfo")]
    pub system_info: SystemInfo,
}

/// The interesting subset of the `systemInfo` object.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SystemInfo {
    #[serde(default, rename = "osName")]
    pub os_name: Option<String>,
    #[serde(default, rename = "osVersion")]
    pub os_version: Option<String>,
    #[serde(default, rename = "javaVersion")]
    pub java_version: Option<String>,
}

// ── Items ────────────────────────────────────────────────────────────

/// One entry from `GET /rest/items`.
///
/// Carries the item kind (`type` on the wire), its semantic role tags,
/// ordered group memberships, machine id (`name`), display label, and the
/// current state rendered as a string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawItem {
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, rename = "groupNames")]
    pub group_names: Vec<String>,
    /// Catch-all for fields we don't model (link, category, members, ...).
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl RawItem {
    /// Does this item carry the given semantic tag?
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// The first group membership, if any.
    pub fn first_group(&self) -> Option<&str> {
        self.group_names.first().map(String::as_str)
    }
}
