// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Content items as seen through the repository

use crate::id::{NodeId, SectionId};
use chrono::{DateTime, Utc};

/// One content item fetched from the repository.
///
/// A flattened view of a node and its object: the engine only reads the
/// attributes the filters and actions touch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub node: NodeId,
    pub name: String,
    pub class_id: u64,
    pub class_identifier: String,
    pub section: SectionId,
    pub published: DateTime<Utc>,
    pub hidden: bool,
}
