use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::models::responses::{ResponseSet, UNANSWERED};
use crate::models::scale::{MAX_ITEM_SCORE, ScaleKind};
use crate::models::severity::{Gad7Severity, Phq9Severity};

/// The persisted record of the most recently completed assessment.
///
/// Field names on the wire are camelCase (`ts`, `phq9`, `gad7`, `phqTotal`,
/// `gadTotal`, `phqLevel`, `gadLevel`). There is no version field: a record
/// that does not match this shape exactly is discarded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AssessmentSnapshot {
    /// Completion time in milliseconds since the Unix epoch.
    pub ts: i64,
    pub phq9: Vec<i32>,
    pub gad7: Vec<i32>,
    pub phq_total: u32,
    pub gad_total: u32,
    pub phq_level: Phq9Severity,
    pub gad_level: Gad7Severity,
}

impl AssessmentSnapshot {
    /// Parse and structurally validate a stored record.
    pub fn validate_json(raw: &str) -> Result<Self, CoreError> {
        let value: serde_json::Value = serde_json::from_str(raw)?;
        Self::validate_value(value)
    }

    pub fn validate_value(value: serde_json::Value) -> Result<Self, CoreError> {
        let obj = value
            .as_object()
            .ok_or_else(|| invalid("record is not a JSON object"))?;

        if !obj.get("ts").is_some_and(|v| v.is_number()) {
            return Err(invalid("ts is not a number"));
        }
        check_responses(obj.get("phq9"), ScaleKind::Phq9)?;
        check_responses(obj.get("gad7"), ScaleKind::Gad7)?;
        for field in ["phqTotal", "gadTotal"] {
            if !obj.get(field).is_some_and(|v| v.is_number()) {
                return Err(invalid(format!("{field} is not a number")));
            }
        }
        for field in ["phqLevel", "gadLevel"] {
            if !obj.get(field).is_some_and(|v| v.is_string()) {
                return Err(invalid(format!("{field} is not a string")));
            }
        }

        // Shape is right; typed decoding still rejects a fractional ts,
        // fractional or negative totals and unknown severity names.
        serde_json::from_value(value).map_err(|e| invalid(e.to_string()))
    }

    /// Completion time, if `ts` is inside jiff's supported range.
    pub fn taken_at(&self) -> Option<jiff::Timestamp> {
        jiff::Timestamp::from_millisecond(self.ts).ok()
    }

    pub fn phq9_responses(&self) -> Result<ResponseSet, CoreError> {
        ResponseSet::from_values(ScaleKind::Phq9, self.phq9.clone())
    }

    pub fn gad7_responses(&self) -> Result<ResponseSet, CoreError> {
        ResponseSet::from_values(ScaleKind::Gad7, self.gad7.clone())
    }
}

fn check_responses(value: Option<&serde_json::Value>, kind: ScaleKind) -> Result<(), CoreError> {
    let field = kind.id();
    let arr = value
        .and_then(|v| v.as_array())
        .ok_or_else(|| invalid(format!("{field} is not an array")))?;
    if arr.len() != kind.item_count() {
        return Err(invalid(format!(
            "{field} has {} entries, expected {}",
            arr.len(),
            kind.item_count()
        )));
    }
    if !arr.iter().all(|v| v.is_number()) {
        return Err(invalid(format!("{field} contains a non-numeric entry")));
    }
    let allowed = i64::from(UNANSWERED)..=i64::from(MAX_ITEM_SCORE);
    if let Some((index, entry)) = arr
        .iter()
        .enumerate()
        .find(|(_, v)| !v.as_i64().is_some_and(|n| allowed.contains(&n)))
    {
        return Err(invalid(format!(
            "{field}[{index}] = {entry} is neither unanswered nor a valid score"
        )));
    }
    Ok(())
}

fn invalid(message: impl Into<String>) -> CoreError {
    CoreError::InvalidSnapshot(message.into())
}
