// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Identity labeling
//!
//! A [`Labeler`] hands out one [`Label`] per distinct identity, in order of
//! first appearance. Identities are deduplicated by a SHA-256 [`Fingerprint`]
//! of their name followed directly by their email, with no normalization.
//!
//! # Example
//!
//! ```
//! use authormap::labeler::{Labeler, LegendOrder};
//! use authormap_git::Identity;
//!
//! let mut labeler = Labeler::new();
//! let al = Identity::new("Al", "a@x");
//! let bo = Identity::new("Bo", "b@x");
//!
//! assert_eq!(labeler.resolve(&al).unwrap().as_str(), "aa");
//! assert_eq!(labeler.resolve(&bo).unwrap().as_str(), "ab");
//! assert_eq!(labeler.resolve(&al).unwrap().as_str(), "aa");
//! assert_eq!(labeler.all_minted(LegendOrder::FirstSeen).len(), 2);
//! ```

use std::collections::HashMap;
use std::fmt;

use authormap_git::Identity;
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::label::{Label, LabelError};

/// SHA-256 digest of an identity's name and email
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fingerprint([u8; 32]);

impl Fingerprint {
    /// Fingerprint an identity
    #[must_use]
    pub fn of(identity: &Identity) -> Self {
        Self(Sha256::digest(identity.key_bytes()).into())
    }

    /// Raw digest bytes
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fingerprint({self})")
    }
}

/// Order of the legend returned by [`Labeler::all_minted`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LegendOrder {
    /// The order labels were minted in, oldest identity first
    #[default]
    FirstSeen,
    /// Sorted by label text, byte order (upper case before lower case)
    Label,
}

/// Assigns stable labels to identities
#[derive(Debug, Default)]
pub struct Labeler {
    seen: HashMap<Fingerprint, usize>,
    minted: Vec<(Label, Identity)>,
}

impl Labeler {
    /// Create an empty labeler
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the label for `identity`, minting the next one on first sight
    ///
    /// # Errors
    ///
    /// Returns `LabelError::Exhausted` when a new identity arrives after
    /// every label has been used.
    pub fn resolve(&mut self, identity: &Identity) -> Result<&Label, LabelError> {
        let fingerprint = Fingerprint::of(identity);
        if let Some(&index) = self.seen.get(&fingerprint) {
            return Ok(&self.minted[index].0);
        }

        let index = self.minted.len();
        let label = Label::for_index(index)?;
        debug!(
            label = %label,
            fingerprint = %fingerprint,
            name = %identity.name,
            email = %identity.email,
            "minted label"
        );

        self.seen.insert(fingerprint, index);
        self.minted.push((label, identity.clone()));
        Ok(&self.minted[index].0)
    }

    /// Look up the label of an identity without minting one
    #[must_use]
    pub fn get(&self, identity: &Identity) -> Option<&Label> {
        self.seen
            .get(&Fingerprint::of(identity))
            .map(|&index| &self.minted[index].0)
    }

    /// Every minted label with the identity that first produced it
    #[must_use]
    pub fn all_minted(&self, order: LegendOrder) -> Vec<(&Label, &Identity)> {
        let mut legend: Vec<(&Label, &Identity)> = self
            .minted
            .iter()
            .map(|(label, identity)| (label, identity))
            .collect();

        if order == LegendOrder::Label {
            legend.sort_by(|a, b| a.0.as_str().cmp(b.0.as_str()));
        }

        legend
    }

    /// Number of distinct identities seen
    #[must_use]
    pub fn len(&self) -> usize {
        self.minted.len()
    }

    /// Returns true when nothing has been resolved yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.minted.is_empty()
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::collection::vec;
    use proptest::prelude::*;

    /// Identities drawn from a small pool so repeats are common
    fn identity_stream() -> impl Strategy<Value = Vec<Identity>> {
        vec(("[A-C]{1,2}", "[a-c]{1,2}@x"), 0..60).prop_map(|pairs| {
            pairs
                .into_iter()
                .map(|(name, email)| Identity::new(name, email))
                .collect()
        })
    }

    proptest! {
        /// Property: identities with equal concatenations get equal labels
        #[test]
        fn prop_equal_key_equal_label(identities in identity_stream()) {
            let mut labeler = Labeler::new();
            let labels: Vec<(Vec<u8>, String)> = identities
                .iter()
                .map(|id| (id.key_bytes(), labeler.resolve(id).expect("label").to_string()))
                .collect();

            for (key_a, label_a) in &labels {
                for (key_b, label_b) in &labels {
                    prop_assert_eq!(key_a == key_b, label_a == label_b);
                }
            }
        }

        /// Property: first-seen legend follows first occurrence in the input
        #[test]
        fn prop_first_seen_matches_input(identities in identity_stream()) {
            let mut labeler = Labeler::new();
            let mut expected: Vec<Vec<u8>> = Vec::new();
            for identity in &identities {
                labeler.resolve(identity).expect("label");
                if !expected.contains(&identity.key_bytes()) {
                    expected.push(identity.key_bytes());
                }
            }

            let legend = labeler.all_minted(LegendOrder::FirstSeen);
            let actual: Vec<Vec<u8>> = legend.iter().map(|(_, id)| id.key_bytes()).collect();
            prop_assert_eq!(&actual, &expected);

            for (n, (label, _)) in legend.iter().enumerate() {
                prop_assert_eq!(label.index(), n);
                prop_assert_eq!(*label, &Label::for_index(n).expect("label"));
            }
        }

        /// Property: the label order legend is a sorted permutation of the first-seen one
        #[test]
        fn prop_label_order_is_sorted(identities in identity_stream()) {
            let mut labeler = Labeler::new();
            for identity in &identities {
                labeler.resolve(identity).expect("label");
            }

            let sorted = labeler.all_minted(LegendOrder::Label);
            prop_assert_eq!(sorted.len(), labeler.len());
            for pair in sorted.windows(2) {
                prop_assert!(pair[0].0.as_str() < pair[1].0.as_str());
            }
        }
    }
}
