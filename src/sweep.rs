//! The sequential commit driver.
//!
//! One file at a time: check status, stage, commit, push. Everything runs
//! serialized against the same repository, so there is no parallelism across
//! files by design.

use std::path::Path;
use std::time::Duration;

use tracing::warn;

use crate::error::WalkError;
use crate::files::enumerate_files;
use crate::git;
use crate::message::describe_change;

/// Fixed wait before the single push retry.
pub const PUSH_RETRY_DELAY: Duration = Duration::from_secs(2);

/// Sweep the tree under `root`, committing and pushing each changed file.
pub async fn run_sweep(root: &Path) -> Result<(), WalkError> {
    sweep_with_delay(root, PUSH_RETRY_DELAY).await
}

/// Sweep with an explicit push retry delay. Split out so tests don't have to
/// wait out the real delay.
///
/// Stage, commit, and push failures are reported and skip the current file
/// only; the sweep always runs to completion. Skipped files still consume a
/// progress index.
pub async fn sweep_with_delay(root: &Path, retry_delay: Duration) -> Result<(), WalkError> {
    let files = enumerate_files(root)?;
    let total = files.len();
    println!("Found {total} files to commit.");

    for (i, path) in files.iter().enumerate() {
        let status = match git::file_status(root, path).await {
            Ok(Some(status)) => status,
            Ok(None) => {
                println!("Skipping {} (no changes)", path.display());
                continue;
            }
            Err(e) => {
                warn!("status check failed for {}: {e}", path.display());
                eprintln!("Error: {e}");
                continue;
            }
        };

        println!("[{}/{}] Committing {}...", i + 1, total, path.display());

        if let Err(e) = git::stage(root, path).await {
            eprintln!("Error: {e}");
            continue;
        }

        let message = describe_change(path, &status);
        if let Err(e) = git::commit(root, path, &message).await {
            eprintln!("Error: {e}");
            continue;
        }

        println!("Pushing {}...", path.display());
        if let Err(e) = git::push_with_retry(root, retry_delay).await {
            eprintln!("Error: {e}");
        }
    }

    println!("Done!");
    Ok(())
}
