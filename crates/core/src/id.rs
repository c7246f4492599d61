// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Typed identifiers for the content hierarchy

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Identifier of a node in the content tree
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct NodeId(pub u64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NodeId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(NodeId)
    }
}

/// Identifier of a section (category)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct SectionId(pub u64);

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SectionId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(SectionId)
    }
}

/// Reference to a content class, by numeric ID or symbolic identifier.
///
/// Resolved against the repository at validation time and never re-resolved
/// during traversal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ClassRef {
    Id(u64),
    Identifier(String),
}

impl ClassRef {
    /// Parse a configuration token: all-digit tokens are numeric IDs.
    pub fn parse(token: &str) -> Self {
        match token.parse::<u64>() {
            Ok(id) => ClassRef::Id(id),
            Err(_) => ClassRef::Identifier(token.to_string()),
        }
    }

    /// Whether this reference names the class with the given ID and identifier.
    pub fn matches(&self, class_id: u64, class_identifier: &str) -> bool {
        match self {
            ClassRef::Id(id) => *id == class_id,
            ClassRef::Identifier(ident) => ident == class_identifier,
        }
    }
}

impl fmt::Display for ClassRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassRef::Id(id) => write!(f, "{}", id),
            ClassRef::Identifier(ident) => write!(f, "{}", ident),
        }
    }
}
