// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Filter-expression parsing.
//!
//! Two forms are recognized: `older_than:<days>d<months>m<years>y` and
//! `more_than:<count>`. Anything else is a syntax error.

use arkiv_core::Filter;
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

// Allow expect here as the regexes are compile-time verified to be valid
#[allow(clippy::expect_used)]
static OLDER_THAN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^older_than:(\d+)d(\d+)m(\d+)y$").expect("constant regex pattern is valid")
});

#[allow(clippy::expect_used)]
static MORE_THAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^more_than:(\d+)$").expect("constant regex pattern is valid"));

/// Failure to parse a filter expression
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterParseError {
    #[error("invalid filter expression: {0}")]
    InvalidSyntax(String),
    #[error("filter value out of range: {0}")]
    OutOfRange(String),
}

/// Parse a textual filter expression into a typed filter.
///
/// `older_than` periods convert to seconds as
/// `(days + months * 30 + years * 365) * 86_400`.
pub fn parse_filter(expr: &str) -> Result<Filter, FilterParseError> {
    if let Some(caps) = OLDER_THAN.captures(expr) {
        let days = parse_number(&caps[1], expr)?;
        let months = parse_number(&caps[2], expr)?;
        let years = parse_number(&caps[3], expr)?;

        let total_days = months
            .checked_mul(30)
            .and_then(|m| years.checked_mul(365).and_then(|y| m.checked_add(y)))
            .and_then(|my| my.checked_add(days))
            .ok_or_else(|| FilterParseError::OutOfRange(expr.to_string()))?;
        let seconds = total_days
            .checked_mul(SECONDS_PER_DAY)
            .ok_or_else(|| FilterParseError::OutOfRange(expr.to_string()))?;

        return Ok(Filter::OlderThan { seconds });
    }

    if let Some(caps) = MORE_THAN.captures(expr) {
        let offset = parse_number(&caps[1], expr)?;
        return Ok(Filter::MoreThan { offset });
    }

    Err(FilterParseError::InvalidSyntax(expr.to_string()))
}

// The captures are all-digit; only overflow can fail here.
fn parse_number(digits: &str, expr: &str) -> Result<u64, FilterParseError> {
    digits
        .parse()
        .map_err(|_| FilterParseError::OutOfRange(expr.to_string()))
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
