//! drip - CLI entry point.

use std::path::Path;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tokio::process::Command;
use tracing_subscriber::EnvFilter;

use drip::sweep::run_sweep;

/// Commit and push pending changes one file at a time.
#[derive(Parser, Debug)]
#[command(name = "drip")]
#[command(about = "Commit and push pending changes one file at a time")]
#[command(version)]
struct Cli {}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let Cli {} = Cli::parse();

    // Step 1: Check prerequisites
    check_git_installed().await.context("git is required")?;

    // Step 2: Confirm we're inside a work tree
    ensure_work_tree()
        .await
        .context("Not a git repository. Run drip from within a git work tree.")?;

    // Step 3: Sweep the current directory
    run_sweep(Path::new("."))
        .await
        .context("Failed to sweep working tree")?;

    Ok(())
}

/// Check that the git binary is installed and runnable.
async fn check_git_installed() -> Result<()> {
    if which::which("git").is_err() {
        bail!("git not found on PATH");
    }

    let version_check = Command::new("git").arg("--version").output().await?;
    if !version_check.status.success() {
        bail!("git --version exited with failure");
    }

    Ok(())
}

/// Check that the current directory is inside a git work tree.
async fn ensure_work_tree() -> Result<()> {
    let output = Command::new("git")
        .args(["rev-parse", "--is-inside-work-tree"])
        .output()
        .await?;

    if !output.status.success() {
        bail!("{}", String::from_utf8_lossy(&output.stderr).trim());
    }

    Ok(())
}
