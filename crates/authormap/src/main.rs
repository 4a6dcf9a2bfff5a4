// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! authormap: label every author of a git history
//!
//! Prints one short colored label per commit, oldest first, followed by a
//! legend mapping each label to a name and email.

use std::io::{self, BufWriter};

use anyhow::Context;
use clap::Parser;
use tracing::debug;

use authormap::config::{ColorChoice, Config};

fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Logs go to stderr; stdout carries the report
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(config.log_level().into()),
        )
        .with_writer(io::stderr)
        .init();

    match config.color {
        ColorChoice::Always => colored::control::set_override(true),
        ColorChoice::Never => colored::control::set_override(false),
        ColorChoice::Auto => {}
    }

    debug!(?config, "starting authormap");

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    authormap::run::run(&config, &mut out)
        .with_context(|| format!("failed to walk {:?}", config.path))?;

    Ok(())
}
