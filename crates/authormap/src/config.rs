// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Command line configuration for authormap
//!
//! This module provides the `clap` definition of the command line, plus the
//! helpers that turn it into walk options, a role, and a log level.

use std::path::PathBuf;

use authormap_git::{Role, WalkOptions};
use clap::{Parser, ValueEnum};

use crate::labeler::LegendOrder;
use crate::report::OutputFormat;

/// Label each git author with a short colored tag and print the history
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "authormap")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Path to the git repository
    pub path: PathBuf,

    /// Graph committer instead of author
    #[arg(long, default_value = "false")]
    pub committer: bool,

    /// Order of the legend
    #[arg(long, value_enum, default_value_t = SortOrder::FirstSeen)]
    pub sort: SortOrder,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// When to color labels
    ///
    /// `auto` colors when writing to a terminal and honours NO_COLOR and
    /// CLICOLOR.
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Start the walk from this revision instead of HEAD
    #[arg(long = "from", value_name = "REF")]
    pub from_ref: Option<String>,

    /// Only consider the N most recent commits
    #[arg(short = 'n', long, value_name = "N")]
    pub max_count: Option<usize>,

    /// Enable verbose logging (debug level)
    ///
    /// Logs every minted label with its fingerprint. Logs are written to
    /// stderr so they never mix with the report.
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,

    /// Quiet mode - suppress info-level logs
    ///
    /// Only errors and warnings (such as skipped commits) will be logged.
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,
}

/// Legend order as spelled on the command line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum SortOrder {
    /// Order of first appearance in the history
    #[default]
    FirstSeen,
    /// Sorted by label text
    Label,
}

impl From<SortOrder> for LegendOrder {
    fn from(order: SortOrder) -> Self {
        match order {
            SortOrder::FirstSeen => LegendOrder::FirstSeen,
            SortOrder::Label => LegendOrder::Label,
        }
    }
}

/// Color mode for text output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Detect from the terminal and environment
    #[default]
    Auto,
    /// Always emit escape codes
    Always,
    /// Never emit escape codes
    Never,
}

impl Config {
    /// The signature to label
    #[must_use]
    pub fn role(&self) -> Role {
        if self.committer {
            Role::Committer
        } else {
            Role::Author
        }
    }

    /// Legend order for the labeler
    #[must_use]
    pub fn legend_order(&self) -> LegendOrder {
        self.sort.into()
    }

    /// Walk options derived from `--from` and `--max-count`
    #[must_use]
    pub fn walk_options(&self) -> WalkOptions {
        WalkOptions {
            limit: self.max_count,
            from_ref: self.from_ref.clone(),
        }
    }

    /// Whether labels should be painted at all
    #[must_use]
    pub fn colorize(&self) -> bool {
        self.color != ColorChoice::Never
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the repository path does not exist or is not a
    /// directory.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.path.exists() {
            return Err(ConfigError::PathNotFound(self.path.clone()));
        }
        if !self.path.is_dir() {
            return Err(ConfigError::PathNotDirectory(self.path.clone()));
        }
        Ok(())
    }

    /// Get the log level based on verbose/quiet flags
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else if self.quiet {
            tracing::Level::WARN
        } else {
            tracing::Level::INFO
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Repository path not found
    #[error("Repository path not found: {0}")]
    PathNotFound(PathBuf),

    /// Repository path is not a directory
    #[error("Repository path is not a directory: {0}")]
    PathNotDirectory(PathBuf),
}
