//! drip - commit and push pending changes one file at a time.
//!
//! # Overview
//!
//! drip walks the working directory, and for each file with pending git
//! changes stages it, derives a human-readable commit message from its
//! filename, commits it individually, and pushes upstream, retrying the push
//! once after a fixed delay on failure.

pub mod error;
pub mod files;
pub mod git;
pub mod message;
pub mod sweep;

// Re-export commonly used types
pub use error::{GitError, WalkError};
pub use git::StatusCode;
pub use message::describe_change;
pub use sweep::{PUSH_RETRY_DELAY, run_sweep};
