use thiserror::Error;

use crate::models::scale::ScaleKind;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{kind} expects {expected} responses, got {actual}")]
    WrongLength {
        kind: ScaleKind,
        expected: usize,
        actual: usize,
    },

    #[error("{kind} has no item at index {index}")]
    ItemOutOfRange { kind: ScaleKind, index: usize },

    #[error("invalid response value {value} (expected {min}..={max} or unanswered)")]
    InvalidResponse { value: i32, min: i32, max: i32 },

    #[error("invalid snapshot: {0}")]
    InvalidSnapshot(String),
}
