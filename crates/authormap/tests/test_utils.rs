// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Test utilities for authormap integration tests
//!
//! This module provides utilities for:
//! - Temporary directory management
//! - Git repository scaffolding with controlled signatures and times

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU32, Ordering};

use git2::{Oid, Repository, Signature, Time};

// ============================================================================
// Temporary Directory Management
// ============================================================================

/// Counter for generating unique test directory names
static TEST_DIR_COUNTER: AtomicU32 = AtomicU32::new(0);

/// A temporary directory that is automatically cleaned up when dropped
pub struct TempTestDir {
    path: PathBuf,
}

impl TempTestDir {
    /// Create a new, uniquely named directory under the system temp directory
    pub fn new(test_name: &str) -> Self {
        let counter = TEST_DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
        let dir_name = format!(
            "authormap-test-{}-{}-{}",
            test_name,
            std::process::id(),
            counter
        );
        let path = std::env::temp_dir().join(dir_name);

        fs::create_dir_all(&path).expect("Failed to create temp test directory");

        Self { path }
    }

    /// Get the path to the temporary directory
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempTestDir {
    fn drop(&mut self) {
        if self.path.exists() {
            let _ = fs::remove_dir_all(&self.path);
        }
    }
}

// ============================================================================
// Git Repository Scaffolding
// ============================================================================

/// A temporary git repository for testing
///
/// Commits are written directly with `git2` so each one can carry its own
/// author, committer and timestamp.
pub struct TestGitRepo {
    repo: Repository,
    clock: i64,
    temp_dir: TempTestDir,
}

impl TestGitRepo {
    /// Create and initialise a new test repository
    pub fn new(test_name: &str) -> Self {
        let temp_dir = TempTestDir::new(test_name);
        let repo = Repository::init(temp_dir.path()).expect("Failed to init repository");
        Self {
            repo,
            clock: 1_700_000_000,
            temp_dir,
        }
    }

    /// Get the path to the repository
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Commit by `author`, also recorded as committer, one minute after the previous commit
    pub fn commit_as(&mut self, author: (&str, &str)) -> Oid {
        self.commit_with(author, author)
    }

    /// Commit with distinct author and committer, one minute after the previous commit
    pub fn commit_with(&mut self, author: (&str, &str), committer: (&str, &str)) -> Oid {
        self.clock += 60;
        let time = Time::new(self.clock, 0);
        let author = Signature::new(author.0, author.1, &time).expect("author signature");
        let committer =
            Signature::new(committer.0, committer.1, &time).expect("committer signature");

        let tree_id = self
            .repo
            .treebuilder(None)
            .and_then(|builder| builder.write())
            .expect("Failed to write tree");
        let tree = self.repo.find_tree(tree_id).expect("Failed to find tree");

        let parent = self
            .repo
            .head()
            .ok()
            .and_then(|head| head.peel_to_commit().ok());
        let parents: Vec<&git2::Commit<'_>> = parent.iter().collect();

        self.repo
            .commit(
                Some("HEAD"),
                &author,
                &committer,
                &format!("Commit {}", self.clock),
                &tree,
                &parents,
            )
            .expect("Failed to create commit")
    }

    /// Delete the loose object file backing `oid`, leaving a broken history
    pub fn remove_object(&self, oid: Oid) {
        let hex = oid.to_string();
        let object = self
            .repo
            .path()
            .join("objects")
            .join(&hex[..2])
            .join(&hex[2..]);
        fs::remove_file(&object).expect("Failed to remove loose object");
    }

    /// Create one commit per author, in order
    pub fn commit_sequence(&mut self, authors: &[(&str, &str)]) -> Vec<Oid> {
        authors.iter().map(|&author| self.commit_as(author)).collect()
    }
}
