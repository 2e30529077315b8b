//! Per-path change detection via `git status --porcelain`.

use std::path::Path;

use tokio::process::Command;

use crate::error::GitError;

/// The two-character porcelain status code for a path (e.g. `"M "`, `" M"`,
/// `"??"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusCode(String);

impl StatusCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// True if either the index or worktree column reports a modification.
    ///
    /// Only used to pick the action verb ("updated" vs "added"); no further
    /// distinction between modified, added, deleted, or renamed is made.
    pub fn is_modified(&self) -> bool {
        self.0.contains('M')
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Query the porcelain status of a single path.
///
/// Returns `None` when the output is empty (no pending changes), otherwise
/// the first two characters of the first porcelain line.
pub async fn file_status(repo_dir: &Path, path: &Path) -> Result<Option<StatusCode>, GitError> {
    let output = Command::new("git")
        .current_dir(repo_dir)
        .args(["status", "--porcelain", "--"])
        .arg(path)
        .output()
        .await
        .map_err(|source| GitError::SpawnFailed {
            operation: "status",
            source,
        })?;

    if !output.status.success() {
        return Err(GitError::StatusFailed {
            path: path.display().to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let line = stdout.lines().next().unwrap_or("");
    if line.trim().is_empty() {
        return Ok(None);
    }

    Ok(Some(StatusCode::new(
        line.chars().take(2).collect::<String>(),
    )))
}
