use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use mindease_core::models::responses::ResponseSet;
use mindease_core::models::scale::ScaleKind;
use mindease_core::models::severity::{Gad7Severity, Phq9Severity, Severity};

/// A single question within an instrument.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Item {
    /// 1-based position shown to the user.
    pub number: u8,
    pub prompt: String,
}

/// One answer choice on the shared 0–3 frequency scale.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ResponseOption {
    pub value: i32,
    pub label: String,
}

/// Response options shared by both instruments: "over the last two weeks,
/// how often have you been bothered by…".
pub static COMMON_OPTIONS: LazyLock<Vec<ResponseOption>> = LazyLock::new(|| {
    [
        (0, "Not at all"),
        (1, "Several days"),
        (2, "More than half the days"),
        (3, "Nearly every day"),
    ]
    .iter()
    .map(|(value, label)| ResponseOption {
        value: *value,
        label: label.to_string(),
    })
    .collect()
});

/// Sum of effective item scores. Unanswered and out-of-range entries count
/// as zero, so the result is always within `0..=3 * item_count`.
pub fn total(responses: &ResponseSet) -> u32 {
    (0..responses.len()).map(|i| responses.effective(i)).sum()
}

pub fn phq9_severity(total: u32) -> Phq9Severity {
    match total {
        0..=4 => Phq9Severity::Minimal,
        5..=9 => Phq9Severity::Mild,
        10..=14 => Phq9Severity::Moderate,
        15..=19 => Phq9Severity::ModeratelySevere,
        _ => Phq9Severity::Severe,
    }
}

pub fn gad7_severity(total: u32) -> Gad7Severity {
    match total {
        0..=4 => Gad7Severity::Minimal,
        5..=9 => Gad7Severity::Mild,
        10..=14 => Gad7Severity::Moderate,
        _ => Gad7Severity::Severe,
    }
}

/// Severity band for `total` on the given scale.
pub fn severity(total: u32, kind: ScaleKind) -> Severity {
    match kind {
        ScaleKind::Phq9 => phq9_severity(total).into(),
        ScaleKind::Gad7 => gad7_severity(total).into(),
    }
}
