// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! One labeling run: walk the history, label it, print the report

use std::io::Write;

use authormap_git::{CommitIdentities, GitError, GitRepo, Role};
use thiserror::Error;
use tracing::{info, warn};

use crate::config::{Config, ConfigError};
use crate::label::{Label, LabelError};
use crate::labeler::Labeler;
use crate::report::Report;

/// Errors that abort a run
#[derive(Debug, Error)]
pub enum RunError {
    /// Invalid configuration
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Repository could not be opened or walked
    #[error(transparent)]
    Git(#[from] GitError),

    /// Ran out of labels
    #[error(transparent)]
    Label(#[from] LabelError),

    /// Writing the report failed
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

/// Counts describing a finished run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Commits labeled
    pub commits: usize,
    /// Distinct identities seen
    pub identities: usize,
    /// Commits that could not be read
    pub skipped: usize,
}

/// Resolve the selected identity of every commit, in the given order
///
/// # Errors
///
/// Returns `LabelError::Exhausted` if the commits carry more distinct
/// identities than there are labels.
pub fn label_commits(
    labeler: &mut Labeler,
    commits: &[CommitIdentities],
    role: Role,
) -> Result<Vec<Label>, LabelError> {
    commits
        .iter()
        .map(|commit| labeler.resolve(commit.identity(role)).cloned())
        .collect()
}

/// Run authormap with the given configuration, writing the report to `out`
///
/// # Errors
///
/// Returns `RunError` if the repository cannot be opened or walked, the
/// label space runs out, or the report cannot be written.
pub fn run<W: Write>(config: &Config, out: &mut W) -> Result<RunSummary, RunError> {
    config.validate()?;

    let repo = GitRepo::open(&config.path)?;
    let history = repo.walk(&config.walk_options())?;

    for skipped in &history.skipped {
        warn!(index = skipped.index, "{skipped}");
    }

    let role = config.role();
    let mut labeler = Labeler::new();
    let sequence = label_commits(&mut labeler, &history.commits, role)?;

    let report = Report {
        role,
        sequence: &sequence,
        legend: labeler.all_minted(config.legend_order()),
        colorize: config.colorize(),
    };
    report.write(out, config.format)?;
    out.flush()?;

    let summary = RunSummary {
        commits: sequence.len(),
        identities: labeler.len(),
        skipped: history.skipped.len(),
    };
    info!(
        commits = summary.commits,
        identities = summary.identities,
        skipped = summary.skipped,
        role = %role,
        "labeled history"
    );

    Ok(summary)
}
