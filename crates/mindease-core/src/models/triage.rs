use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Overall risk classification, lowest to highest.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum TriageLevel {
    None,
    High,
    Crisis,
}

impl TriageLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            TriageLevel::None => "none",
            TriageLevel::High => "high",
            TriageLevel::Crisis => "crisis",
        }
    }
}

impl fmt::Display for TriageLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of one triage evaluation. Carries no state beyond its inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TriageVerdict {
    pub level: TriageLevel,
    /// Every risk signal that fired, in evaluation order.
    pub reasons: Vec<String>,
}

impl TriageVerdict {
    pub fn needs_attention(&self) -> bool {
        self.level != TriageLevel::None
    }
}
