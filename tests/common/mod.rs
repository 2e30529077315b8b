//! Shared test utilities for integration tests.
//!
//! Not all functions are used by every test file, but they're shared across tests.
#![allow(dead_code)]

use std::path::Path;

use git2::{Repository, Signature};

/// A disposable git work tree wired to a bare local "origin", so `git push`
/// works without network access or credentials.
pub struct TestRepo {
    pub dir: tempfile::TempDir,
    pub remote_dir: tempfile::TempDir,
    pub repo: Repository,
}

impl TestRepo {
    /// Create a work-tree repository with a bare local remote.
    ///
    /// `push.default = current` lets a bare `git push` work even before any
    /// upstream tracking exists.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp directory");
        let remote_dir = tempfile::tempdir().expect("Failed to create remote directory");

        Repository::init_bare(remote_dir.path()).expect("Failed to init bare remote");
        let repo = Repository::init(dir.path()).expect("Failed to init git repo");

        let mut config = repo.config().expect("Failed to open repo config");
        config.set_str("user.name", "Test User").expect("Failed to set user.name");
        config
            .set_str("user.email", "test@example.com")
            .expect("Failed to set user.email");
        config
            .set_str("push.default", "current")
            .expect("Failed to set push.default");

        repo.remote(
            "origin",
            remote_dir.path().to_str().expect("non-UTF8 temp path"),
        )
        .expect("Failed to add origin remote");

        Self {
            dir,
            remote_dir,
            repo,
        }
    }

    /// Path of the work tree.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file relative to the work tree root, creating parent
    /// directories as needed.
    pub fn write_file(&self, name: &str, content: &str) {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        std::fs::write(path, content).expect("Failed to write test file");
    }

    fn signature(&self) -> Signature<'_> {
        Signature::now("Test User", "test@example.com").expect("Failed to create signature")
    }

    /// Write, stage, and commit a single file with a baseline message.
    pub fn commit_file(&self, name: &str, content: &str) {
        self.write_file(name, content);

        let mut index = self.repo.index().expect("Failed to get index");
        index
            .add_path(Path::new(name))
            .expect("Failed to add file to index");
        index.write().expect("Failed to write index");
        let tree_id = index.write_tree().expect("Failed to write tree");
        let tree = self.repo.find_tree(tree_id).expect("Failed to find tree");

        let sig = self.signature();
        let parent = self.repo.head().ok().and_then(|h| h.peel_to_commit().ok());
        let parents: Vec<&git2::Commit> = parent.iter().collect();

        self.repo
            .commit(
                Some("HEAD"),
                &sig,
                &sig,
                &format!("add {name}"),
                &tree,
                &parents,
            )
            .expect("Failed to create commit");
    }

    /// Commit subjects of the work tree, newest first.
    pub fn log_messages(&self) -> Vec<String> {
        messages_from(&self.repo)
    }

    /// Commit subjects on the bare remote, newest first. Empty if nothing
    /// was ever pushed.
    pub fn remote_messages(&self) -> Vec<String> {
        let remote = Repository::open_bare(self.remote_dir.path()).expect("Failed to open remote");
        messages_from(&remote)
    }
}

fn messages_from(repo: &Repository) -> Vec<String> {
    let mut revwalk = match repo.revwalk() {
        Ok(walk) => walk,
        Err(_) => return Vec::new(),
    };
    if revwalk.push_glob("refs/heads/*").is_err() {
        return Vec::new();
    }

    revwalk
        .filter_map(|oid| {
            let oid = oid.ok()?;
            let commit = repo.find_commit(oid).ok()?;
            Some(commit.summary().unwrap_or("").to_string())
        })
        .collect()
}
