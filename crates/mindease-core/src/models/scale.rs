use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Lowest score a single item can receive.
pub const MIN_ITEM_SCORE: i32 = 0;

/// Highest score a single item can receive.
pub const MAX_ITEM_SCORE: i32 = 3;

/// Which of the two screening questionnaires a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ScaleKind {
    /// Nine-item depression screen.
    Phq9,
    /// Seven-item anxiety screen.
    Gad7,
}

impl ScaleKind {
    pub const ALL: [ScaleKind; 2] = [ScaleKind::Phq9, ScaleKind::Gad7];

    pub fn id(&self) -> &'static str {
        match self {
            ScaleKind::Phq9 => "phq9",
            ScaleKind::Gad7 => "gad7",
        }
    }

    pub fn item_count(&self) -> usize {
        match self {
            ScaleKind::Phq9 => 9,
            ScaleKind::Gad7 => 7,
        }
    }

    /// Largest total the scale can produce.
    pub fn max_total(&self) -> u32 {
        self.item_count() as u32 * MAX_ITEM_SCORE as u32
    }
}

impl fmt::Display for ScaleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScaleKind::Phq9 => f.write_str("PHQ-9"),
            ScaleKind::Gad7 => f.write_str("GAD-7"),
        }
    }
}
