// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Commit history walking
//!
//! This module reads the author and committer identities of every commit
//! reachable from a starting point, using the `git2` crate.

use std::fmt;
use std::path::Path;

use git2::{ErrorCode, Repository, Signature, Sort};
use serde::Serialize;
use tracing::debug;

use crate::error::GitError;
use crate::identity::{CommitIdentities, Identity};

/// Configuration for walking commits
#[derive(Debug, Clone, Default)]
pub struct WalkOptions {
    /// Maximum number of commits to retrieve, counted from the newest
    pub limit: Option<usize>,
    /// Start from this commit (defaults to HEAD)
    pub from_ref: Option<String>,
}

impl WalkOptions {
    /// Create options for walking the N most recent commits
    #[must_use]
    pub fn latest(n: usize) -> Self {
        Self {
            limit: Some(n),
            ..Default::default()
        }
    }

    /// Set the starting reference
    #[must_use]
    pub fn from(mut self, reference: &str) -> Self {
        self.from_ref = Some(reference.to_string());
        self
    }
}

/// A commit that could not be read during the walk
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedCommit {
    /// Position in the walk, newest first, starting at zero
    pub index: usize,
    /// Description of the failure
    pub message: String,
}

impl fmt::Display for SkippedCommit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error with commit {}: {}", self.index, self.message)
    }
}

/// The result of a history walk
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    /// Readable commits, oldest first
    pub commits: Vec<CommitIdentities>,
    /// Commits that failed to load, in walk order
    pub skipped: Vec<SkippedCommit>,
}

impl History {
    /// Returns true when no commit was read
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commits.is_empty()
    }
}

/// A git repository wrapper for reading commit identities
pub struct GitRepo {
    repo: Repository,
}

impl GitRepo {
    /// Open a git repository at the given path
    ///
    /// # Errors
    ///
    /// Returns `GitError::RepositoryNotFound` if the path is not a git repository.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, GitError> {
        let path = path.as_ref();
        let repo = Repository::open(path).map_err(|source| GitError::RepositoryNotFound {
            path: path.display().to_string(),
            source,
        })?;
        Ok(Self { repo })
    }

    /// Get the repository path (the `.git` directory)
    #[must_use]
    pub fn path(&self) -> &Path {
        self.repo.path()
    }

    /// Walk the history in committer-time order and return it oldest first
    ///
    /// A commit that cannot be read is recorded in [`History::skipped`] and
    /// the walk moves on. A repository whose HEAD is unborn has an empty
    /// history.
    ///
    /// # Errors
    ///
    /// Returns `GitError::InvalidReference` if `from_ref` cannot be resolved,
    /// or `GitError::Log` if the revision walk cannot be set up.
    pub fn walk(&self, options: &WalkOptions) -> Result<History, GitError> {
        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TIME)?;

        if let Some(ref from_ref) = options.from_ref {
            let commit = self
                .repo
                .revparse_single(from_ref)
                .and_then(|obj| obj.peel_to_commit())
                .map_err(|_| GitError::InvalidReference {
                    reference: from_ref.clone(),
                })?;
            revwalk.push(commit.id())?;
        } else {
            match self.repo.head() {
                Err(e) if matches!(e.code(), ErrorCode::UnbornBranch | ErrorCode::NotFound) => {
                    debug!(path = %self.path().display(), "HEAD is unborn, history is empty");
                    return Ok(History::default());
                }
                Err(e) => return Err(e.into()),
                Ok(_) => revwalk.push_head()?,
            }
        }

        let limit = options.limit.unwrap_or(usize::MAX);
        let mut history = History::default();

        // With `Sort::TIME` libgit2 loads every reachable commit before the
        // first one is yielded. A single unreadable object therefore fails
        // that preparation, surfaces as one skipped entry at index 0, and
        // hides every commit of the walk, readable ones included.

        for (index, oid_result) in revwalk.enumerate() {
            if history.commits.len() >= limit {
                break;
            }

            let commit = oid_result.and_then(|oid| self.repo.find_commit(oid));
            match commit {
                Ok(commit) => history.commits.push(CommitIdentities {
                    sha: commit.id().to_string(),
                    author: identity_from_signature(&commit.author()),
                    committer: identity_from_signature(&commit.committer()),
                }),
                Err(e) => history.skipped.push(SkippedCommit {
                    index,
                    message: e.message().to_string(),
                }),
            }
        }

        // The walk yields newest first
        history.commits.reverse();

        debug!(
            commits = history.commits.len(),
            skipped = history.skipped.len(),
            "walked history"
        );

        Ok(history)
    }
}

/// Names and emails that are not valid UTF-8 are decoded lossily
fn identity_from_signature(signature: &Signature<'_>) -> Identity {
    Identity::new(
        String::from_utf8_lossy(signature.name_bytes()),
        String::from_utf8_lossy(signature.email_bytes()),
    )
}
