// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Commit identity types

use std::fmt;

use serde::Serialize;

/// A name/email pair naming the author or committer of a commit
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Identity {
    /// Display name
    pub name: String,
    /// Email address
    pub email: String,
}

impl Identity {
    /// Create an identity from a name and email
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// The bytes identities are compared by: name immediately followed by email
    ///
    /// There is no separator, so `("Al", "ice@x")` and `("Ali", "ce@x")`
    /// produce the same key.
    #[must_use]
    pub fn key_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.name.len() + self.email.len());
        bytes.extend_from_slice(self.name.as_bytes());
        bytes.extend_from_slice(self.email.as_bytes());
        bytes
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.email)
    }
}

/// Which signature of a commit to read
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// The person who wrote the change
    #[default]
    Author,
    /// The person who recorded the commit
    Committer,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Author => f.write_str("author"),
            Role::Committer => f.write_str("committer"),
        }
    }
}

/// The identities recorded on a single commit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommitIdentities {
    /// The commit SHA (40 hex characters)
    pub sha: String,
    /// Author signature
    pub author: Identity,
    /// Committer signature
    pub committer: Identity,
}

impl CommitIdentities {
    /// Select the identity for the given role
    #[must_use]
    pub fn identity(&self, role: Role) -> &Identity {
        match role {
            Role::Author => &self.author,
            Role::Committer => &self.committer,
        }
    }

    /// Get the short SHA (first 7 characters)
    #[must_use]
    pub fn short_sha(&self) -> &str {
        &self.sha[..7.min(self.sha.len())]
    }
}
