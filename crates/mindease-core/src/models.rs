pub mod responses;
pub mod scale;
pub mod severity;
pub mod snapshot;
pub mod triage;
