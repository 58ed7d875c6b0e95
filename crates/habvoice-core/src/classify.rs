// ── Raw-item classification ──
//
// Maps raw inventory records into the typed domain collections. Each record
// matches at most one rule; unmatched records are dropped. A pure function
// of its input: input order is preserved so rendered output stays
// deterministic.

use habvoice_api::RawItem;

use crate::model::{Location, Shutter, ShutterState, Switch, SwitchState};

/// Semantic tag marking a group item as a physical space.
const TAG_LOCATION: &str = "Location";
/// Semantic tag marking an item as a controllable device.
const TAG_EQUIPMENT: &str = "Equipment";

/// The three typed collections produced by one classification pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classified {
    pub locations: Vec<Location>,
    pub switches: Vec<Switch>,
    pub shutters: Vec<Shutter>,
}

/// Classify a raw item list into typed domain collections.
pub fn classify(items: &[RawItem]) -> Classified {
    let mut out = Classified::default();

    for item in items {
        match item.kind.as_str() {
            "Group" if item.has_tag(TAG_LOCATION) => out.locations.push(Location {
                id: item.name.clone(),
                name: display_name(item),
                parent_id: parent_id(item),
            }),
            "Switch" if item.has_tag(TAG_EQUIPMENT) => out.switches.push(Switch {
                id: item.name.clone(),
                name: display_name(item),
                state: map_switch_state(&item.state),
                parent_id: parent_id(item),
            }),
            "Rollershutter" if item.has_tag(TAG_EQUIPMENT) => out.shutters.push(Shutter {
                id: item.name.clone(),
                name: display_name(item),
                state: map_shutter_state(&item.state),
                parent_id: parent_id(item),
            }),
            _ => {}
        }
    }

    out
}

// ── Helpers ────────────────────────────────────────────────────────

/// Display label, falling back to the machine name when the server sends none.
fn display_name(item: &RawItem) -> String {
    item.label.clone().unwrap_or_else(|| item.name.clone())
}

/// First group membership, or `None` for ungrouped items.
fn parent_id(item: &RawItem) -> Option<String> {
    item.first_group().map(str::to_owned)
}

/// Case-normalize the reported switch state. Anything that isn't "on"
/// (including NULL/UNDEF placeholders) reads as off.
fn map_switch_state(raw: &str) -> SwitchState {
    if raw.eq_ignore_ascii_case("on") {
        SwitchState::On
    } else {
        SwitchState::Off
    }
}

/// A reported position of exactly "0" means fully open; every other value
/// (unknown and intermediate positions included) means closed.
fn map_shutter_state(raw: &str) -> ShutterState {
    if raw == "0" {
        ShutterState::Opened
    } else {
        ShutterState::Closed
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn item(kind: &str, name: &str, label: &str, state: &str, tags: &[&str], groups: &[&str]) -> RawItem {
        RawItem {
            kind: kind.into(),
            name: name.into(),
            label: if label.is_empty() { None } else { Some(label.into()) },
            state: state.into(),
            tags: tags.iter().map(|t| (*t).to_owned()).collect(),
            group_names: groups.iter().map(|g| (*g).to_owned()).collect(),
            extra: serde_json::Map::new(),
        }
    }

    #[test]
    fn switch_state_is_case_normalized() {
        let items = vec![
            item("Switch", "lamp1", "Lamp", "ON", &["Equipment"], &[]),
            item("Switch", "lamp2", "Lamp 2", "OFF", &["Equipment"], &[]),
        ];

        let classified = classify(&items);

        assert_eq!(classified.switches.len(), 2);
        assert_eq!(classified.switches[0].state, SwitchState::On);
        assert_eq!(classified.switches[1].state, SwitchState::Off);
    }

    #[test]
    fn shutter_opened_iff_position_is_exactly_zero() {
        let items = vec![
            item("Rollershutter", "s1", "Shutter 1", "0", &["Equipment"], &[]),
            item("Rollershutter", "s2", "Shutter 2", "100", &["Equipment"], &[]),
            item("Rollershutter", "s3", "Shutter 3", "50", &["Equipment"], &[]),
            item("Rollershutter", "s4", "Shutter 4", "NULL", &["Equipment"], &[]),
        ];

        let classified = classify(&items);

        let states: Vec<ShutterState> = classified.shutters.iter().map(|s| s.state).collect();
        assert_eq!(
            states,
            vec![
                ShutterState::Opened,
                ShutterState::Closed,
                ShutterState::Closed,
                ShutterState::Closed,
            ]
        );
    }

    #[test]
    fn parent_id_is_first_group_or_none() {
        let items = vec![
            item("Group", "first_floor", "First Floor", "NULL", &["Location"], &[]),
            item(
                "Group",
                "kitchen",
                "Kitchen",
                "NULL",
                &["Location"],
                &["first_floor", "house"],
            ),
            item(
                "Switch",
                "lamp1",
                "Lamp",
                "ON",
                &["Equipment"],
                &["kitchen", "first_floor"],
            ),
            item(
                "Rollershutter",
                "sh1",
                "Shutter",
                "0",
                &["Equipment"],
                &["kitchen"],
            ),
        ];

        let classified = classify(&items);

        assert_eq!(classified.locations[0].parent_id, None);
        assert_eq!(classified.locations[1].parent_id.as_deref(), Some("first_floor"));
        // The same first-group rule applies to every entity kind.
        assert_eq!(classified.switches[0].parent_id.as_deref(), Some("kitchen"));
        assert_eq!(classified.shutters[0].parent_id.as_deref(), Some("kitchen"));
    }

    #[test]
    fn unmatched_records_are_dropped() {
        let items = vec![
            // Right kind, missing role tag
            item("Switch", "relay1", "Relay", "ON", &["Control"], &[]),
            item("Group", "gBattery", "Batteries", "NULL", &["Equipment"], &[]),
            // Kind outside the closed rule set
            item("Dimmer", "dim1", "Dimmer", "42", &["Equipment"], &[]),
            item("Number", "temp1", "Temperature", "21.5", &[], &[]),
        ];

        let classified = classify(&items);

        assert_eq!(classified, Classified::default());
    }

    #[test]
    fn classification_is_idempotent() {
        let items = vec![
            item("Group", "living_room", "Living Room", "NULL", &["Location"], &[]),
            item("Switch", "lamp1", "Lamp", "ON", &["Equipment"], &["living_room"]),
            item("Rollershutter", "sh1", "Shutter", "0", &["Equipment"], &["living_room"]),
        ];

        assert_eq!(classify(&items), classify(&items));
    }

    #[test]
    fn input_order_is_preserved() {
        let items = vec![
            item("Switch", "b", "B", "ON", &["Equipment"], &[]),
            item("Switch", "a", "A", "OFF", &["Equipment"], &[]),
            item("Switch", "c", "C", "ON", &["Equipment"], &[]),
        ];

        let classified = classify(&items);
        let ids: Vec<&str> = classified.switches.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }

    #[test]
    fn missing_label_falls_back_to_name() {
        let items = vec![item("Switch", "lamp1", "", "ON", &["Equipment"], &[])];

        let classified = classify(&items);
        assert_eq!(classified.switches[0].name, "lamp1");
    }

    #[test]
    fn classifies_mixed_inventory_end_to_end() {
        let items = vec![
            item("Group", "living_room", "Living Room", "NULL", &["Location"], &[]),
            item("Switch", "lamp1", "Lamp", "ON", &["Equipment"], &["living_room"]),
        ];

        let classified = classify(&items);

        assert_eq!(
            classified.locations,
            vec![Location {
                id: "living_room".into(),
                name: "Living Room".into(),
                parent_id: None,
            }]
        );
        assert_eq!(
            classified.switches,
            vec![Switch {
                id: "lamp1".into(),
                name: "Lamp".into(),
                state: SwitchState::On,
                parent_id: Some("living_room".into()),
            }]
        );
        assert!(classified.shutters.is_empty());
    }
}
