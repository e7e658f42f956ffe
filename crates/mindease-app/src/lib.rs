//! mindease-app library root.
//!
//! Exposes the assessment session, the text runner and configuration so the
//! binary and the integration tests drive the same code.

pub mod config;
pub mod runner;
pub mod session;
