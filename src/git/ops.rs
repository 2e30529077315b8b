//! Stage, commit, and push operations for one file at a time.
//!
//! All operations use `tokio::process::Command` to shell out to the system
//! `git` binary, inheriting the user's existing git config, SSH agent, and
//! credential store.

use std::path::Path;
use std::time::Duration;

use tokio::process::Command;
use tokio::time::sleep;
use tracing::{debug, warn};

use crate::error::GitError;

struct GitOutcome {
    success: bool,
    stderr: String,
}

/// Run a git command and capture its outcome.
async fn run(cmd: &mut Command, operation: &'static str) -> Result<GitOutcome, GitError> {
    debug!("running git {operation}");
    let output = cmd
        .output()
        .await
        .map_err(|source| GitError::SpawnFailed { operation, source })?;

    Ok(GitOutcome {
        success: output.status.success(),
        stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
    })
}

/// Stage a single path.
pub async fn stage(repo_dir: &Path, path: &Path) -> Result<(), GitError> {
    let mut cmd = Command::new("git");
    cmd.current_dir(repo_dir).arg("add").arg(path);

    let outcome = run(&mut cmd, "add").await?;
    if !outcome.success {
        return Err(GitError::StageFailed {
            path: path.display().to_string(),
            stderr: outcome.stderr,
        });
    }
    Ok(())
}

/// Commit the staged changes with the given message.
///
/// `path` is only carried for error reporting.
pub async fn commit(repo_dir: &Path, path: &Path, message: &str) -> Result<(), GitError> {
    let mut cmd = Command::new("git");
    cmd.current_dir(repo_dir).args(["commit", "-m", message]);

    let outcome = run(&mut cmd, "commit").await?;
    if !outcome.success {
        return Err(GitError::CommitFailed {
            path: path.display().to_string(),
            stderr: outcome.stderr,
        });
    }
    Ok(())
}

/// Push to the configured upstream.
pub async fn push(repo_dir: &Path) -> Result<(), GitError> {
    let mut cmd = Command::new("git");
    cmd.current_dir(repo_dir).arg("push");

    let outcome = run(&mut cmd, "push").await?;
    if !outcome.success {
        return Err(GitError::PushFailed {
            stderr: outcome.stderr,
        });
    }
    Ok(())
}

/// Push, retrying exactly once after `retry_delay` if the first attempt
/// fails. The retry outcome is returned either way.
pub async fn push_with_retry(repo_dir: &Path, retry_delay: Duration) -> Result<(), GitError> {
    match push(repo_dir).await {
        Ok(()) => Ok(()),
        Err(first) => {
            warn!("push failed, will retry once: {first}");
            println!("Push failed, retrying in {}s...", retry_delay.as_secs());
            sleep(retry_delay).await;
            push(repo_dir).await
        }
    }
}
