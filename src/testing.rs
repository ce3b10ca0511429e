//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime};

use crate::types::{Post, SourceDocument};

/// Midnight on `date` (`YYYY-MM-DD`). Panics on bad input; tests only.
pub fn date(date: &str) -> NaiveDateTime {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .unwrap_or_else(|e| panic!("bad test date {date:?}: {e}"))
        .and_hms_opt(0, 0, 0)
        .unwrap_or_default()
}

/// Create a canonical post.
pub fn make_post(identifier: &str, published: &str, categories: &[&str]) -> Post {
    Post {
        identifier: identifier.to_string(),
        title: format!("Title of {}", identifier),
        published_at: date(published),
        categories: categories.iter().map(|c| c.to_string()).collect(),
        summary: None,
        extra: BTreeMap::new(),
    }
}

/// Create a fresh, non-draft source document.
pub fn make_doc(identifier: Option<&str>, title: &str, published: &str) -> SourceDocument {
    SourceDocument {
        origin: format!("{}.md", identifier.unwrap_or(title)),
        identifier: identifier.map(str::to_string),
        title: Some(title.to_string()),
        published_at: Some(date(published)),
        raw_date: Some(published.to_string()),
        categories: vec![],
        summary: None,
        draft: false,
        body: String::new(),
    }
}
