// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Slug extraction from date-prefixed historical paths.
//!
//! Old permalinks look like `YYYY/MM/slug` or `YYYY/MM/DD/slug`, sometimes
//! with further segments after the slug. A third segment of exactly two
//! digits is a day; anything else there is the slug.

use std::borrow::Cow;

use crate::types::HistoricalPath;

/// Why a historical path could not yield a slug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    BadYear(String),
    BadMonth(String),
    MissingSlug,
}

impl std::fmt::Display for ExtractError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExtractError::BadYear(s) => write!(f, "year segment {s:?} is not four digits"),
            ExtractError::BadMonth(s) => write!(f, "month segment {s:?} is not 01-12"),
            ExtractError::MissingSlug => write!(f, "no slug segment after the date"),
        }
    }
}

/// The slug segment of `path`, percent-decoded.
pub fn extract_slug(path: &HistoricalPath) -> Result<String, ExtractError> {
    let segments = &path.segments;

    let year = segments.first().map(String::as_str).unwrap_or_default();
    if !is_digits(year, 4) {
        return Err(ExtractError::BadYear(year.to_string()));
    }

    let month = segments.get(1).map(String::as_str).unwrap_or_default();
    if !is_digits(month, 2) || !matches!(month.parse::<u8>(), Ok(1..=12)) {
        return Err(ExtractError::BadMonth(month.to_string()));
    }

    let slug_index = match segments.get(2) {
        Some(day) if is_digits(day, 2) => 3,
        _ => 2,
    };
    let raw = segments
        .get(slug_index)
        .filter(|s| !s.trim().is_empty())
        .ok_or(ExtractError::MissingSlug)?;

    Ok(percent_decode(raw).into_owned())
}

/// Percent-decode, falling back to the raw text when the bytes are not UTF-8.
pub fn percent_decode(raw: &str) -> Cow<'_, str> {
    urlencoding::decode(raw).unwrap_or(Cow::Borrowed(raw))
}

fn is_digits(s: &str, len: usize) -> bool {
    s.len() == len && s.bytes().all(|b| b.is_ascii_digit())
}
