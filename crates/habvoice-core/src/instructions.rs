// ── Instruction rendering ──
//
// Turns a snapshot into the textual briefing handed to the conversational
// agent: a fixed preamble, then either a no-devices fallback or a fenced
// YAML block with the domain-model descriptions and the live collections.

use serde::Serialize;
use serde_json::json;
use tracing::warn;

use crate::model::{Location, Shutter, Snapshot, Switch};

/// Fixed preamble: restricted role plus the arithmetic rounding rule.
const BASE_INSTRUCTIONS: &str = "\
You are a home automation assistant, focused solely on managing connected devices in the home.
When asked to calculate an average, **round to the nearest whole number** without explaining the calculation.";

/// Fallback when no controllable device exists yet.
const NO_DEVICES_INSTRUCTIONS: &str = "\
Currently, there is no connected devices.
Your sole task is to ask the user to install one or more connected devices in the home before proceeding.";

/// Everything serialized into the YAML block: static shape descriptions
/// first, live data after.
#[derive(Serialize)]
struct InstructionData<'a> {
    locations_model: serde_json::Value,
    switches_model: serde_json::Value,
    shutters_model: serde_json::Value,
    locations: &'a [Location],
    switches: &'a [Switch],
    shutters: &'a [Shutter],
}

fn locations_model() -> serde_json::Value {
    json!({
        "type": "array",
        "description": "The locations of the home, organized as a hierarchy.",
        "items": {
            "type": "object",
            "properties": {
                "id": { "type": "string", "description": "The unique identifier of the location." },
                "name": { "type": "string", "description": "The display name of the location." },
                "parent_id": {
                    "type": ["string", "null"],
                    "description": "The identifier of the parent location, null at the top level."
                }
            }
        }
    })
}

fn switches_model() -> serde_json::Value {
    json!({
        "type": "array",
        "description": "The switchable devices of the home.",
        "items": {
            "type": "object",
            "properties": {
                "id": { "type": "string", "description": "The unique identifier of the switch." },
                "name": { "type": "string", "description": "The display name of the switch." },
                "state": { "type": "string", "enum": ["on", "off"], "description": "The current state of the switch." },
                "parent_id": {
                    "type": ["string", "null"],
                    "description": "The identifier of the location containing the switch."
                }
            }
        }
    })
}

fn shutters_model() -> serde_json::Value {
    json!({
        "type": "array",
        "description": "The motorized shutters of the home.",
        "items": {
            "type": "object",
            "properties": {
                "id": { "type": "string", "description": "The unique identifier of the shutter." },
                "name": { "type": "string", "description": "The display name of the shutter." },
                "state": { "type": "string", "enum": ["opened", "closed"], "description": "The current state of the shutter." },
                "parent_id": {
                    "type": ["string", "null"],
                    "description": "The identifier of the location containing the shutter."
                }
            }
        }
    })
}

/// Render the instruction payload for the given snapshot.
///
/// Pure function of its argument: callers pass the snapshot they want
/// reflected, so an accessor reading the live store always renders the
/// latest cycle's data.
pub fn render(snapshot: &Snapshot) -> String {
    let mut sections = vec![BASE_INSTRUCTIONS.to_owned()];

    if snapshot.has_devices() {
        let data = InstructionData {
            locations_model: locations_model(),
            switches_model: switches_model(),
            shutters_model: shutters_model(),
            locations: &snapshot.locations,
            switches: &snapshot.switches,
            shutters: &snapshot.shutters,
        };
        let yaml = match serde_yaml::to_string(&data) {
            Ok(yaml) => yaml,
            Err(e) => {
                warn!(error = %e, "instruction payload serialization failed");
                format!("# device model unavailable: {e}\n")
            }
        };
        sections.push("``` yaml".to_owned());
        sections.push(yaml);
        sections.push("```".to_owned());
    } else {
        sections.push(NO_DEVICES_INSTRUCTIONS.to_owned());
    }

    sections.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ShutterState, SwitchState};

    fn snapshot_with_switch() -> Snapshot {
        Snapshot {
            locations: vec![Location {
                id: "living_room".into(),
                name: "Living Room".into(),
                parent_id: None,
            }],
            switches: vec![Switch {
                id: "lamp1".into(),
                name: "Lamp".into(),
                state: SwitchState::On,
                parent_id: Some("living_room".into()),
            }],
            ..Snapshot::default()
        }
    }

    #[test]
    fn empty_snapshot_renders_fallback() {
        let text = render(&Snapshot::default());

        assert!(text.starts_with("You are a home automation assistant"));
        assert!(text.contains("there is no connected devices"));
        assert!(!text.contains("``` yaml"));
    }

    #[test]
    fn locations_alone_still_render_fallback() {
        let snapshot = Snapshot {
            locations: vec![Location {
                id: "attic".into(),
                name: "Attic".into(),
                parent_id: None,
            }],
            ..Snapshot::default()
        };

        let text = render(&snapshot);
        assert!(text.contains("there is no connected devices"));
        assert!(!text.contains("``` yaml"));
    }

    #[test]
    fn devices_render_models_and_data_in_yaml_block() {
        let text = render(&snapshot_with_switch());

        assert!(text.starts_with("You are a home automation assistant"));
        assert!(!text.contains("there is no connected devices"));
        assert!(text.contains("``` yaml"));
        assert!(text.ends_with("```"));
        // Static shape descriptions...
        assert!(text.contains("locations_model:"));
        assert!(text.contains("switches_model:"));
        assert!(text.contains("shutters_model:"));
        // ...and the live collections.
        assert!(text.contains("id: lamp1"));
        assert!(text.contains("state: on"));
        assert!(text.contains("parent_id: living_room"));
        assert!(text.contains("shutters: []"));
    }

    #[test]
    fn shutters_alone_count_as_devices() {
        let snapshot = Snapshot {
            shutters: vec![Shutter {
                id: "sh1".into(),
                name: "Bedroom Shutter".into(),
                state: ShutterState::Closed,
                parent_id: None,
            }],
            ..Snapshot::default()
        };

        let text = render(&snapshot);
        assert!(text.contains("``` yaml"));
        assert!(text.contains("state: closed"));
    }
}
