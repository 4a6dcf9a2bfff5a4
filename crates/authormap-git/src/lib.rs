// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! authormap-git: commit identity extraction for authormap
//!
//! This library crate opens a git repository and yields the author and
//! committer identities of its commits, oldest first.

#![warn(missing_docs)]

//! # Example
//!
//! ```no_run
//! use authormap_git::{GitRepo, Role, WalkOptions};
//!
//! let repo = GitRepo::open(".").expect("open repo");
//! let history = repo.walk(&WalkOptions::latest(10)).expect("walk commits");
//!
//! for c in &history.commits {
//!     println!("{} - {}", c.short_sha(), c.identity(Role::Author));
//! }
//! ```

pub mod error;
pub mod identity;
pub mod walk;

pub use error::GitError;
pub use identity::{CommitIdentities, Identity, Role};
pub use walk::{GitRepo, History, SkippedCommit, WalkOptions};
