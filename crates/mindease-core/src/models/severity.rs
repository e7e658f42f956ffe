use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::scale::ScaleKind;

/// PHQ-9 severity bands, least to most severe.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Phq9Severity {
    /// 0–4
    Minimal,
    /// 5–9
    Mild,
    /// 10–14
    Moderate,
    /// 15–19
    ModeratelySevere,
    /// 20–27
    Severe,
}

/// GAD-7 severity bands, least to most severe.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Gad7Severity {
    /// 0–4
    Minimal,
    /// 5–9
    Mild,
    /// 10–14
    Moderate,
    /// 15–21
    Severe,
}

impl Phq9Severity {
    pub const ALL: [Phq9Severity; 5] = [
        Phq9Severity::Minimal,
        Phq9Severity::Mild,
        Phq9Severity::Moderate,
        Phq9Severity::ModeratelySevere,
        Phq9Severity::Severe,
    ];

    /// Position in the ordering, 0 for the mildest band.
    pub fn rank(&self) -> u8 {
        *self as u8
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Phq9Severity::Minimal => "minimal",
            Phq9Severity::Mild => "mild",
            Phq9Severity::Moderate => "moderate",
            Phq9Severity::ModeratelySevere => "moderately_severe",
            Phq9Severity::Severe => "severe",
        }
    }
}

impl Gad7Severity {
    pub const ALL: [Gad7Severity; 4] = [
        Gad7Severity::Minimal,
        Gad7Severity::Mild,
        Gad7Severity::Moderate,
        Gad7Severity::Severe,
    ];

    pub fn rank(&self) -> u8 {
        *self as u8
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Gad7Severity::Minimal => "minimal",
            Gad7Severity::Mild => "mild",
            Gad7Severity::Moderate => "moderate",
            Gad7Severity::Severe => "severe",
        }
    }
}

impl fmt::Display for Phq9Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Gad7Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A severity band tagged with the scale it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(tag = "scale", content = "level", rename_all = "snake_case")]
#[ts(export)]
pub enum Severity {
    Phq9(Phq9Severity),
    Gad7(Gad7Severity),
}

impl Severity {
    pub fn kind(&self) -> ScaleKind {
        match self {
            Severity::Phq9(_) => ScaleKind::Phq9,
            Severity::Gad7(_) => ScaleKind::Gad7,
        }
    }

    pub fn rank(&self) -> u8 {
        match self {
            Severity::Phq9(level) => level.rank(),
            Severity::Gad7(level) => level.rank(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Phq9(level) => level.as_str(),
            Severity::Gad7(level) => level.as_str(),
        }
    }
}

impl From<Phq9Severity> for Severity {
    fn from(level: Phq9Severity) -> Self {
        Severity::Phq9(level)
    }
}

impl From<Gad7Severity> for Severity {
    fn from(level: Gad7Severity) -> Self {
        Severity::Gad7(level)
    }
}
