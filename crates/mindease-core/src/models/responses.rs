use serde::Serialize;
use ts_rs::TS;

use crate::error::CoreError;
use crate::models::scale::{MAX_ITEM_SCORE, MIN_ITEM_SCORE, ScaleKind};

/// Marker stored for an item the user has not answered yet.
pub const UNANSWERED: i32 = -1;

/// Answers to one questionnaire, one slot per item.
///
/// The length always equals the scale's item count. Each slot holds either
/// [`UNANSWERED`] or a score in `0..=3`; values loaded from storage may
/// hold anything else, which scoring treats as zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct ResponseSet {
    kind: ScaleKind,
    values: Vec<i32>,
}

impl ResponseSet {
    /// A fully unanswered set for `kind`.
    pub fn new(kind: ScaleKind) -> Self {
        Self {
            kind,
            values: vec![UNANSWERED; kind.item_count()],
        }
    }

    /// Wrap raw values, rejecting anything that is not exactly one per item.
    pub fn from_values(kind: ScaleKind, values: Vec<i32>) -> Result<Self, CoreError> {
        if values.len() != kind.item_count() {
            return Err(CoreError::WrongLength {
                kind,
                expected: kind.item_count(),
                actual: values.len(),
            });
        }
        Ok(Self { kind, values })
    }

    pub fn kind(&self) -> ScaleKind {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[i32] {
        &self.values
    }

    pub fn get(&self, index: usize) -> Option<i32> {
        self.values.get(index).copied()
    }

    /// Record an answer. `value` must be a valid score or [`UNANSWERED`].
    pub fn set(&mut self, index: usize, value: i32) -> Result<(), CoreError> {
        if value != UNANSWERED && !is_score(value) {
            return Err(CoreError::InvalidResponse {
                value,
                min: MIN_ITEM_SCORE,
                max: MAX_ITEM_SCORE,
            });
        }
        let kind = self.kind;
        let slot = self
            .values
            .get_mut(index)
            .ok_or(CoreError::ItemOutOfRange { kind, index })?;
        *slot = value;
        Ok(())
    }

    pub fn clear(&mut self, index: usize) -> Result<(), CoreError> {
        self.set(index, UNANSWERED)
    }

    /// The score an item contributes to the total. Unanswered, out-of-range
    /// and missing items all contribute 0.
    pub fn effective(&self, index: usize) -> u32 {
        self.get(index).map(effective_value).unwrap_or(0)
    }

    pub fn is_answered(&self, index: usize) -> bool {
        self.get(index).is_some_and(is_score)
    }

    pub fn answered_count(&self) -> usize {
        self.values.iter().filter(|v| is_score(**v)).count()
    }

    pub fn all_answered(&self) -> bool {
        self.values.iter().all(|v| is_score(*v))
    }
}

/// Coerce a raw slot into its scoring contribution.
pub fn effective_value(value: i32) -> u32 {
    if is_score(value) { value as u32 } else { 0 }
}

fn is_score(value: i32) -> bool {
    (MIN_ITEM_SCORE..=MAX_ITEM_SCORE).contains(&value)
}
