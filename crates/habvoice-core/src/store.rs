// ── Live snapshot store ──
//
// One atomically-replaced snapshot value. The poll loop is the only
// writer; renderer/selector/external accessors read at call time.

use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::model::Snapshot;

/// Holder for the live [`Snapshot`].
///
/// Publication is a single pointer swap, so readers always observe a fully
/// formed snapshot -- either the previous cycle's or the next one's. Starts
/// out holding the empty snapshot, which callers before the first cycle
/// must tolerate.
pub struct SnapshotStore {
    current: ArcSwap<Snapshot>,
}

impl SnapshotStore {
    pub fn new() -> Self {
        Self {
            current: ArcSwap::from_pointee(Snapshot::default()),
        }
    }

    /// The live snapshot (cheap `Arc` clone).
    pub fn current(&self) -> Arc<Snapshot> {
        self.current.load_full()
    }

    /// Replace the live snapshot wholesale. The previous value stays alive
    /// until its last reader drops it.
    pub fn publish(&self, snapshot: Snapshot) {
        self.current.store(Arc::new(snapshot));
    }
}

impl Default for SnapshotStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::model::{Location, Snapshot};

    #[test]
    fn starts_with_the_empty_snapshot() {
        let store = SnapshotStore::new();
        let snap = store.current();

        assert!(!snap.has_devices());
        assert!(snap.errors.is_empty());
        assert!(snap.version.is_none());
        assert!(snap.refreshed_at.is_none());
    }

    #[test]
    fn publish_replaces_wholesale() {
        let store = SnapshotStore::new();

        store.publish(Snapshot {
            version: Some("4.1.0".into()),
            errors: vec!["boom".into()],
            refreshed_at: Some(Utc::now()),
            ..Snapshot::default()
        });
        // A clean cycle clears errors: nothing carries over from the
        // previous snapshot.
        store.publish(Snapshot {
            locations: vec![Location {
                id: "kitchen".into(),
                name: "Kitchen".into(),
                parent_id: None,
            }],
            refreshed_at: Some(Utc::now()),
            ..Snapshot::default()
        });

        let snap = store.current();
        assert!(snap.errors.is_empty());
        assert!(snap.version.is_none());
        assert_eq!(snap.locations.len(), 1);
    }

    #[test]
    fn readers_keep_their_snapshot_across_publishes() {
        let store = SnapshotStore::new();
        store.publish(Snapshot {
            version: Some("old".into()),
            ..Snapshot::default()
        });

        let held = store.current();
        store.publish(Snapshot {
            version: Some("new".into()),
            ..Snapshot::default()
        });

        assert_eq!(held.version.as_deref(), Some("old"));
        assert_eq!(store.current().version.as_deref(), Some("new"));
    }
}
