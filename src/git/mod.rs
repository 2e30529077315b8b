//! Git subprocess operations: per-path status, stage, commit, and push.

pub mod ops;
pub mod status;

pub use ops::{commit, push, push_with_retry, stage};
pub use status::{StatusCode, file_status};
