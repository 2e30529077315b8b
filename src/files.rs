//! Working-tree enumeration for the sweep.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::error::WalkError;

/// Directories never swept: dependencies and build output.
const EXCLUDED_DIRS: &[&str] = &["node_modules", "dist"];

/// List candidate files under `root` as relative paths, lexicographically
/// sorted.
///
/// Hidden entries (names starting with `.`), excluded directories, and the
/// running executable itself are skipped. Only regular files are returned,
/// so symlinks and directories never reach the driver.
pub fn enumerate_files(root: &Path) -> Result<Vec<PathBuf>, WalkError> {
    let own_name = own_executable_name();

    let mut files = Vec::new();
    let walker = WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .filter_entry(|entry| !is_excluded(entry.file_name()));

    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        if own_name.as_deref() == Some(entry.file_name()) {
            debug!("skipping own executable {}", entry.path().display());
            continue;
        }
        let rel = entry
            .path()
            .strip_prefix(root)
            .unwrap_or_else(|_| entry.path())
            .to_path_buf();
        files.push(rel);
    }

    files.sort();
    Ok(files)
}

fn is_excluded(name: &OsStr) -> bool {
    let name = name.to_string_lossy();
    name.starts_with('.') || EXCLUDED_DIRS.contains(&name.as_ref())
}

fn own_executable_name() -> Option<OsString> {
    std::env::current_exe()
        .ok()
        .and_then(|path| path.file_name().map(OsStr::to_os_string))
}
