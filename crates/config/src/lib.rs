// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! arkiv-config: configuration parsing and validation.
//!
//! Turns the raw TOML configuration into a validated `JobSet`:
//! - Raw serde types mirroring the TOML structure
//! - The filter-expression parser
//! - Global-settings and per-job validation against the content repository
//!
//! Every cross-reference is resolved here, before any mutation happens, so
//! no partial, inconsistent job ever runs.

pub mod filter;
pub mod loader;
pub mod types;
pub mod validate;

pub use filter::{parse_filter, FilterParseError};
pub use loader::{load_config, parse_config, LoadError};
pub use types::{RawArchiveSettings, RawConfig, RawJobSettings};
pub use validate::{
    build_job_set, validate_global, validate_job, ValidationError, ValidationErrors,
};
