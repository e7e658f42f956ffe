use mindease_core::models::snapshot::AssessmentSnapshot;
use mindease_core::store_keys;

use crate::KeyValueStore;

/// Best-effort persistence of the latest snapshot and the opt-in flag.
///
/// Nothing here returns an error. Reads degrade to "absent" (or `false` for
/// the preference) and writes report success as a `bool`; every swallowed
/// failure is logged. The assessment flow keeps working without storage.
pub struct SnapshotPersistence<S> {
    store: S,
}

impl<S: KeyValueStore> SnapshotPersistence<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// The stored snapshot, or `None` if absent, unreadable or malformed.
    pub fn read(&self) -> Option<AssessmentSnapshot> {
        let raw = match self.store.get(store_keys::LATEST_SNAPSHOT) {
            Ok(Some(raw)) if !raw.is_empty() => raw,
            Ok(_) => {
                tracing::debug!("no saved snapshot");
                return None;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to read saved snapshot");
                return None;
            }
        };

        match AssessmentSnapshot::validate_json(&raw) {
            Ok(snapshot) => {
                tracing::debug!(ts = snapshot.ts, "saved snapshot loaded");
                Some(snapshot)
            }
            Err(e) => {
                tracing::warn!(error = %e, "discarding malformed snapshot");
                None
            }
        }
    }

    /// Overwrite the stored snapshot. Returns whether it was stored.
    pub fn write(&self, snapshot: &AssessmentSnapshot) -> bool {
        let json = match serde_json::to_string(snapshot) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!(error = %e, "failed to serialize snapshot");
                return false;
            }
        };
        match self.store.set(store_keys::LATEST_SNAPSHOT, &json) {
            Ok(()) => {
                tracing::debug!(ts = snapshot.ts, "snapshot saved");
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to save snapshot, continuing without history");
                false
            }
        }
    }

    /// Remove the stored snapshot. Returns whether the store accepted it.
    pub fn clear(&self) -> bool {
        match self.store.remove(store_keys::LATEST_SNAPSHOT) {
            Ok(()) => {
                tracing::debug!("saved snapshot cleared");
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to clear saved snapshot");
                false
            }
        }
    }

    /// The opt-in flag. Anything other than a stored `"true"` is `false`.
    pub fn read_allow_save(&self) -> bool {
        match self.store.get(store_keys::ALLOW_SAVE) {
            Ok(value) => value.as_deref() == Some(store_keys::ALLOW_SAVE_TRUE),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read save preference, assuming opted out");
                false
            }
        }
    }

    pub fn write_allow_save(&self, allow: bool) -> bool {
        let value = if allow {
            store_keys::ALLOW_SAVE_TRUE
        } else {
            store_keys::ALLOW_SAVE_FALSE
        };
        match self.store.set(store_keys::ALLOW_SAVE, value) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(error = %e, allow, "failed to save preference");
                false
            }
        }
    }
}
