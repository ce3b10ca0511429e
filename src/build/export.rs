// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Legacy blog export in Movable Type text format.
//!
//! ```text
//! TITLE: Trip to Rio
//! BASENAME: 2014/03/02/100000
//! STATUS: Publish
//! CATEGORY: Travel
//! CATEGORY: Brazil
//! DATE: 03/02/2014 10:00:00 AM
//! -----
//! BODY:
//! <p>...</p>
//! -----
//! EXCERPT:
//! Two weeks.
//! -----
//! --------
//! ```
//!
//! Entries are separated by a line of eight dashes, sections within an entry
//! by five. The first section holds `KEY: value` lines; every later section
//! starts with a `KEY:` line and runs to the next separator.
//!
//! The export has no identifier field we trust, so identifiers come from the
//! title. `BASENAME` is the old permalink tail and is handed to legacy
//! resolution instead.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::types::{HistoricalPath, SourceDocument};

use super::document::{dedup_in_order, parse_date};

const ENTRY_SEPARATOR: &str = "--------";
const SECTION_SEPARATOR: &str = "-----";

/// One export entry.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportEntry {
    pub doc: SourceDocument,
    pub basename: Option<String>,
}

impl ExportEntry {
    /// The old permalink, when the basename carries a date-prefixed path.
    pub fn historical_path(&self) -> Option<HistoricalPath> {
        self.basename
            .as_deref()
            .filter(|b| b.contains('/'))
            .map(HistoricalPath::parse)
    }
}

/// Read and parse the export at `path`.
pub fn load_export(path: &Path) -> Result<Vec<ExportEntry>> {
    let content = fs::read_to_string(path)?;
    let label = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "export".to_string());
    let entries = parse_export(&label, &content);
    debug!(path = %path.display(), entries = entries.len(), "export parsed");
    Ok(entries)
}

/// Parse export text. `label` prefixes each entry's origin (`label#3`).
pub fn parse_export(label: &str, content: &str) -> Vec<ExportEntry> {
    split_on_line(content, ENTRY_SEPARATOR)
        .into_iter()
        .filter(|chunk| !chunk.trim().is_empty())
        .enumerate()
        .map(|(i, chunk)| parse_entry(&format!("{label}#{}", i + 1), chunk))
        .collect()
}

fn parse_entry(origin: &str, chunk: &str) -> ExportEntry {
    let mut doc = SourceDocument {
        origin: origin.to_string(),
        ..SourceDocument::default()
    };
    let mut basename = None;
    let mut body_parts: Vec<String> = Vec::new();

    let sections = split_on_line(chunk, SECTION_SEPARATOR);
    let mut sections = sections.into_iter();

    if let Some(header) = sections.next() {
        for line in header.lines() {
            let Some((key, value)) = line.split_once(':') else {
                continue;
            };
            let value = value.trim();
            match key.trim() {
                "TITLE" => doc.title = Some(value.to_string()).filter(|v| !v.is_empty()),
                "BASENAME" => basename = Some(value.to_string()).filter(|v| !v.is_empty()),
                "STATUS" => doc.draft = value.eq_ignore_ascii_case("draft"),
                "DATE" => {
                    doc.raw_date = Some(value.to_string());
                    doc.published_at = parse_date(value);
                }
                "CATEGORY" | "PRIMARY CATEGORY" if !value.is_empty() => {
                    doc.categories.push(value.to_string());
                }
                _ => {}
            }
        }
    }

    for section in sections {
        let section = section.trim_start_matches(['\r', '\n']);
        let (key, text) = section.split_once('\n').unwrap_or((section, ""));
        let text = text.trim();
        match key.trim().trim_end_matches(':') {
            "BODY" | "EXTENDED BODY" if !text.is_empty() => body_parts.push(text.to_string()),
            "EXCERPT" if !text.is_empty() => doc.summary = Some(text.to_string()),
            _ => {}
        }
    }

    dedup_in_order(&mut doc.categories);
    doc.body = body_parts.join("\n\n");
    ExportEntry { doc, basename }
}

/// Split `text` on lines consisting exactly of `separator`.
fn split_on_line<'a>(text: &'a str, separator: &str) -> Vec<&'a str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut offset = 0;
    for line in text.split_inclusive('\n') {
        if line.trim_end() == separator {
            parts.push(&text[start..offset]);
            start = offset + line.len();
        }
        offset += line.len();
    }
    parts.push(&text[start..]);
    parts
}
