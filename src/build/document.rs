// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Markdown source documents with YAML front matter.
//!
//! ```text
//! ---
//! slug: trip-to-rio
//! title: Trip to Rio
//! date: 2014-03-02 10:00
//! categories: [Travel, Brazil]
//! summary: Two weeks in Brazil.
//! draft: false
//! ---
//! # Trip to Rio
//! ...
//! ```
//!
//! Every key is optional here; reconciliation decides what a missing field
//! means. Without a `title` key the first `# ` heading is used.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Deserialize;

use crate::error::BuildWarning;
use crate::types::SourceDocument;

#[derive(Deserialize, Default, Debug)]
#[serde(default)]
struct FrontMatter {
    slug: Option<String>,
    identifier: Option<String>,
    title: Option<String>,
    date: Option<String>,
    categories: Option<OneOrMany>,
    category: Option<OneOrMany>,
    summary: Option<String>,
    draft: Option<bool>,
}

#[derive(Deserialize, Debug)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl OneOrMany {
    fn into_vec(self) -> Vec<String> {
        match self {
            OneOrMany::One(s) => vec![s],
            OneOrMany::Many(v) => v,
        }
    }
}

/// Split `content` into (front matter YAML, body). No front matter → `None`.
pub fn split_front_matter(content: &str) -> Option<(&str, &str)> {
    let content = content.trim_start_matches('\u{feff}');
    let rest = content
        .strip_prefix("---\n")
        .or_else(|| content.strip_prefix("---\r\n"))?;

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        let trimmed = line.trim_end();
        if trimmed == "---" || trimmed == "..." {
            return Some((&rest[..offset], &rest[offset + line.len()..]));
        }
        offset += line.len();
    }
    None
}

/// Parse one source document. `origin` is used in warnings.
pub fn parse_document(origin: &str, content: &str) -> Result<SourceDocument, BuildWarning> {
    let (front, body) = match split_front_matter(content) {
        Some((yaml, body)) if yaml.trim().is_empty() => (FrontMatter::default(), body),
        Some((yaml, body)) => {
            let front: FrontMatter =
                serde_yaml::from_str(yaml).map_err(|e| BuildWarning::UnreadableDocument {
                    origin: origin.to_string(),
                    message: format!("invalid front matter: {e}"),
                })?;
            (front, body)
        }
        None => (FrontMatter::default(), content),
    };

    let title = front.title.or_else(|| first_heading(body));
    let raw_date = front.date.map(|d| d.trim().to_string());
    let published_at = raw_date.as_deref().and_then(parse_date);

    let mut categories: Vec<String> = front
        .categories
        .into_iter()
        .chain(front.category)
        .flat_map(OneOrMany::into_vec)
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty())
        .collect();
    dedup_in_order(&mut categories);

    Ok(SourceDocument {
        origin: origin.to_string(),
        identifier: front.slug.or(front.identifier),
        title,
        published_at,
        raw_date,
        categories,
        summary: front.summary.filter(|s| !s.trim().is_empty()),
        draft: front.draft.unwrap_or(false),
        body: body.to_string(),
    })
}

fn first_heading(body: &str) -> Option<String> {
    body.lines()
        .find_map(|line| line.strip_prefix("# "))
        .map(|h| h.trim().to_string())
        .filter(|h| !h.is_empty())
}

/// Remove repeated names, keeping the first occurrence.
pub(crate) fn dedup_in_order(names: &mut Vec<String>) {
    let mut seen = std::collections::HashSet::new();
    names.retain(|n| seen.insert(n.clone()));
}

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    // Movable Type export
    "%m/%d/%Y %I:%M:%S %p",
    "%m/%d/%Y %H:%M:%S",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];

/// Parse the publish date formats seen in sources. Offsets are dropped; the
/// local wall-clock time is what orders posts.
pub fn parse_date(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_local());
    }
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}
