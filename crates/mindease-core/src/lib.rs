//! mindease-core
//!
//! Pure domain types and store key conventions.
//! No I/O. This is the shared vocabulary of the MindEase screening engine.

pub mod error;
pub mod models;
pub mod store_keys;
