// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Two-character labels and their display colors
//!
//! The Nth distinct identity receives the label formed by writing N as a
//! two-digit base-52 number over [`ALPHABET`], most significant digit first,
//! and the color at `N % PALETTE.len()`.

use std::fmt;

use colored::{Color, ColoredString, Colorize};
use thiserror::Error;

/// Label symbols, in numbering order
pub const ALPHABET: &[u8; 52] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Number of distinct two-character labels
pub const CAPACITY: usize = ALPHABET.len() * ALPHABET.len();

/// Display colors, reused cyclically
pub const PALETTE: &[Swatch] = &[
    Swatch::fg("bright blue", Color::BrightBlue),
    Swatch::fg("bright cyan", Color::BrightCyan),
    Swatch::fg("bright green", Color::BrightGreen),
    Swatch::fg("magenta", Color::Magenta),
    Swatch::fg("red", Color::Red),
    Swatch::fg("bright yellow", Color::BrightYellow),
    Swatch::on("white on blue", Color::White, Color::Blue),
    Swatch::on("white on red", Color::White, Color::Red),
    Swatch::on("black on bright green", Color::Black, Color::BrightGreen),
    Swatch::on("white on green", Color::White, Color::Green),
    Swatch::on("black on bright yellow", Color::Black, Color::BrightYellow),
];

/// Label errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LabelError {
    /// Every two-character label is already taken
    #[error("label space exhausted: more than {capacity} distinct identities")]
    Exhausted {
        /// Number of labels available
        capacity: usize,
    },
}

/// A foreground color with an optional background
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Swatch {
    /// Human-readable name, used in JSON output
    pub name: &'static str,
    /// Text color
    pub foreground: Color,
    /// Background color
    pub background: Option<Color>,
}

impl Swatch {
    const fn fg(name: &'static str, foreground: Color) -> Self {
        Self {
            name,
            foreground,
            background: None,
        }
    }

    const fn on(name: &'static str, foreground: Color, background: Color) -> Self {
        Self {
            name,
            foreground,
            background: Some(background),
        }
    }

    /// Apply this swatch to some text
    #[must_use]
    pub fn paint(&self, text: &str) -> ColoredString {
        let painted = text.color(self.foreground);
        match self.background {
            Some(background) => painted.on_color(background),
            None => painted,
        }
    }
}

/// A minted label
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Label {
    text: String,
    index: usize,
}

impl Label {
    /// Build the label for the given mint index
    ///
    /// # Errors
    ///
    /// Returns `LabelError::Exhausted` if `index` is not below [`CAPACITY`].
    pub fn for_index(index: usize) -> Result<Self, LabelError> {
        if index >= CAPACITY {
            return Err(LabelError::Exhausted { capacity: CAPACITY });
        }

        let base = ALPHABET.len();
        let text = [ALPHABET[index / base], ALPHABET[index % base]]
            .iter()
            .map(|&b| char::from(b))
            .collect();

        Ok(Self { text, index })
    }

    /// The two label characters
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Position of this label in mint order
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// The color assigned to this label
    #[must_use]
    pub fn swatch(&self) -> &'static Swatch {
        &PALETTE[self.index % PALETTE.len()]
    }

    /// The label text in its color
    #[must_use]
    pub fn paint(&self) -> ColoredString {
        self.swatch().paint(&self.text)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: every in-range index maps to the base-52 digits of that index
        #[test]
        fn prop_label_is_base52(index in 0usize..CAPACITY) {
            let label = Label::for_index(index).expect("label");
            let bytes = label.as_str().as_bytes();
            prop_assert_eq!(bytes.len(), 2);
            let high = ALPHABET.iter().position(|&b| b == bytes[0]).expect("symbol");
            let low = ALPHABET.iter().position(|&b| b == bytes[1]).expect("symbol");
            prop_assert_eq!(high * 52 + low, index);
        }

        /// Property: indices past the label space always fail
        #[test]
        fn prop_out_of_range_fails(index in CAPACITY..usize::MAX) {
            prop_assert!(Label::for_index(index).is_err());
        }
    }
}
