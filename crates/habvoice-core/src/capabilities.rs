// ── Capability schema selection ──
//
// The invocable action schemas offered to the conversational agent, gated
// on whether matching devices currently exist.

use serde::Serialize;
use serde_json::json;

use crate::model::Snapshot;

/// A machine-readable description of one invocable action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CapabilitySchema {
    pub name: &'static str,
    pub description: &'static str,
    pub parameters: serde_json::Value,
}

/// Schema of the switch-update action.
pub fn update_switches_schema() -> CapabilitySchema {
    CapabilitySchema {
        name: "update_switches",
        description: "Turn switches on or off.",
        parameters: json!({
            "type": "object",
            "properties": {
                "action": {
                    "type": "string",
                    "enum": ["on", "off"],
                    "description": "The action to perform on the switches."
                },
                "ids": {
                    "type": "array",
                    "items": { "type": "string" },
                    "description": "The identifiers of the switches to update."
                }
            },
            "required": ["action", "ids"]
        }),
    }
}

/// Schema of the shutter-update action.
pub fn update_shutters_schema() -> CapabilitySchema {
    CapabilitySchema {
        name: "update_shutters",
        description: "Open, close or stop shutters.",
        parameters: json!({
            "type": "object",
            "properties": {
                "action": {
                    "type": "string",
                    "enum": ["open", "close", "stop"],
                    "description": "The action to perform on the shutters."
                },
                "ids": {
                    "type": "array",
                    "items": { "type": "string" },
                    "description": "The identifiers of the shutters to update."
                }
            },
            "required": ["action", "ids"]
        }),
    }
}

/// Select the schemas that are currently meaningful, in fixed order:
/// switches first, shutters second. Empty when no device of either class
/// exists.
pub fn select(snapshot: &Snapshot) -> Vec<CapabilitySchema> {
    let mut schemas = Vec::new();
    if !snapshot.switches.is_empty() {
        schemas.push(update_switches_schema());
    }
    if !snapshot.shutters.is_empty() {
        schemas.push(update_shutters_schema());
    }
    schemas
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Shutter, ShutterState, Switch, SwitchState};

    fn switch() -> Switch {
        Switch {
            id: "lamp1".into(),
            name: "Lamp".into(),
            state: SwitchState::Off,
            parent_id: None,
        }
    }

    fn shutter() -> Shutter {
        Shutter {
            id: "sh1".into(),
            name: "Shutter".into(),
            state: ShutterState::Closed,
            parent_id: None,
        }
    }

    #[test]
    fn empty_snapshot_selects_nothing() {
        assert!(select(&Snapshot::default()).is_empty());
    }

    #[test]
    fn switches_only() {
        let snapshot = Snapshot {
            switches: vec![switch()],
            ..Snapshot::default()
        };

        let schemas = select(&snapshot);
        assert_eq!(schemas.len(), 1);
        assert_eq!(schemas[0].name, "update_switches");
    }

    #[test]
    fn shutters_only() {
        let snapshot = Snapshot {
            shutters: vec![shutter()],
            ..Snapshot::default()
        };

        let schemas = select(&snapshot);
        assert_eq!(schemas.len(), 1);
        assert_eq!(schemas[0].name, "update_shutters");
    }

    #[test]
    fn both_in_fixed_order() {
        let snapshot = Snapshot {
            switches: vec![switch()],
            shutters: vec![shutter()],
            ..Snapshot::default()
        };

        let names: Vec<&str> = select(&snapshot).iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["update_switches", "update_shutters"]);
    }

    #[test]
    fn schema_parameters_carry_the_action_tokens() {
        let params = update_shutters_schema().parameters;
        let actions = params["properties"]["action"]["enum"]
            .as_array()
            .map(|a| a.iter().filter_map(|v| v.as_str()).collect::<Vec<_>>());

        assert_eq!(actions, Some(vec!["open", "close", "stop"]));
    }
}
