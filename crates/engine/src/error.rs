// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the run engine

use arkiv_core::{NodeId, RepoError};
use thiserror::Error;

/// Errors that can occur while selecting or mutating items
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("repository error: {0}")]
    Repo(#[from] RepoError),
    #[error("container recursion exceeded {limit} levels below node {root}")]
    ContainerDepthExceeded { root: NodeId, limit: u32 },
}
