//! Key conventions for the local key-value store.
//!
//! Both keys are independent: the opt-in preference is read and written
//! without touching the snapshot record, and vice versa.

/// Holds `"true"` or `"false"`. Anything else reads as opted out.
pub const ALLOW_SAVE: &str = "cbt-diagnostic-allow-save";

/// Holds the JSON-encoded [`AssessmentSnapshot`](crate::models::snapshot::AssessmentSnapshot).
pub const LATEST_SNAPSHOT: &str = "cbt-diagnostic-latest";

pub const ALLOW_SAVE_TRUE: &str = "true";
pub const ALLOW_SAVE_FALSE: &str = "false";
