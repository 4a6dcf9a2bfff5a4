// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Rendering of the label sequence and legend
//!
//! Text output is one colored label per commit, each followed by a space,
//! then a blank line, a header naming the role, and one legend line per
//! label. JSON output carries the same information without escape codes.

use std::io::{self, Write};

use authormap_git::{Identity, Role};
use clap::ValueEnum;
use serde::Serialize;

use crate::label::Label;

/// Output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored labels and a legend
    #[default]
    Text,
    /// A single JSON document
    Json,
}

/// Header line printed above the legend
#[must_use]
pub fn header(role: Role) -> &'static str {
    match role {
        Role::Author => "Git authors:",
        Role::Committer => "Git committers:",
    }
}

/// Everything needed to print the result of a run
#[derive(Debug)]
pub struct Report<'a> {
    /// Which signature was labeled
    pub role: Role,
    /// One label per commit, oldest first
    pub sequence: &'a [Label],
    /// Minted labels in legend order
    pub legend: Vec<(&'a Label, &'a Identity)>,
    /// Paint labels with their swatch
    pub colorize: bool,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    role: Role,
    sequence: Vec<&'a str>,
    legend: Vec<JsonEntry<'a>>,
}

#[derive(Serialize)]
struct JsonEntry<'a> {
    label: &'a str,
    name: &'a str,
    email: &'a str,
    color: &'static str,
}

impl Report<'_> {
    /// Write the report in the given format
    ///
    /// # Errors
    ///
    /// Returns any error from the underlying writer.
    pub fn write<W: Write>(&self, out: &mut W, format: OutputFormat) -> io::Result<()> {
        match format {
            OutputFormat::Text => self.write_text(out),
            OutputFormat::Json => self.write_json(out),
        }
    }

    /// Write the plain or colored text report
    ///
    /// # Errors
    ///
    /// Returns any error from the underlying writer.
    pub fn write_text<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for label in self.sequence {
            write!(out, "{} ", self.render(label))?;
        }

        writeln!(out, "\n\n{}", header(self.role))?;

        for (label, identity) in &self.legend {
            writeln!(
                out,
                "{}: {} ({})",
                self.render(label),
                identity.name,
                identity.email
            )?;
        }

        Ok(())
    }

    /// Write the report as pretty-printed JSON
    ///
    /// # Errors
    ///
    /// Returns any error from serialization or the underlying writer.
    pub fn write_json<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let report = JsonReport {
            role: self.role,
            sequence: self.sequence.iter().map(Label::as_str).collect(),
            legend: self
                .legend
                .iter()
                .map(|(label, identity)| JsonEntry {
                    label: label.as_str(),
                    name: &identity.name,
                    email: &identity.email,
                    color: label.swatch().name,
                })
                .collect(),
        };

        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)
    }

    fn render(&self, label: &Label) -> String {
        if self.colorize {
            label.paint().to_string()
        } else {
            label.to_string()
        }
    }
}
