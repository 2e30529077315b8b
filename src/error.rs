//! Error types for drip modules using thiserror.

use thiserror::Error;

/// Errors from shelling out to git.
///
/// Stage, commit, and push failures carry the captured stderr so the sweep
/// can report exactly what git said before moving on.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Failed to run git {operation}: {source}")]
    SpawnFailed {
        operation: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("git status --porcelain {path} failed: {stderr}")]
    StatusFailed { path: String, stderr: String },

    #[error("git add {path} failed: {stderr}")]
    StageFailed { path: String, stderr: String },

    #[error("git commit failed for {path}: {stderr}")]
    CommitFailed { path: String, stderr: String },

    #[error("git push failed: {stderr}")]
    PushFailed { stderr: String },
}

/// Errors from enumerating the working tree.
#[derive(Error, Debug)]
pub enum WalkError {
    #[error("Failed to read directory entry: {0}")]
    Traversal(#[from] walkdir::Error),
}
