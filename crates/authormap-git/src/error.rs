// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for authormap-git

use thiserror::Error;

/// Fatal errors while opening a repository or starting a history walk
///
/// Failures reading an individual commit are not errors at this level; they
/// are collected as [`crate::SkippedCommit`] entries and the walk continues.
#[derive(Debug, Error)]
pub enum GitError {
    /// The path does not exist or is not a git repository
    #[error("failed to open repo {path}: {source}")]
    RepositoryNotFound {
        /// The path that was opened
        path: String,
        /// Underlying git2 error
        #[source]
        source: git2::Error,
    },

    /// The commit log could not be initialised
    #[error("failed to get git log: {0}")]
    Log(#[from] git2::Error),

    /// Invalid commit reference (branch, tag, or SHA)
    #[error("Invalid commit reference: {reference}")]
    InvalidReference {
        /// The reference string that could not be resolved
        reference: String,
    },
}
