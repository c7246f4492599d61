// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration loading

use crate::types::RawConfig;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors reading or parsing the configuration document
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Parse a configuration document from TOML text
pub fn parse_config(content: &str) -> Result<RawConfig, LoadError> {
    Ok(toml::from_str(content)?)
}

/// Load a configuration document from a file
pub fn load_config(path: &Path) -> Result<RawConfig, LoadError> {
    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&content)
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
