// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! authormap library
//!
//! This module exports the labeling core and the command line plumbing of
//! authormap for use in integration tests and as a library.

pub mod config;
pub mod label;
pub mod labeler;
pub mod report;
pub mod run;

pub use label::{Label, LabelError};
pub use labeler::{Fingerprint, Labeler, LegendOrder};
