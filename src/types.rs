// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Core records shared across the pipeline.
//!
//! Every source shape (catalog entry, Markdown document, legacy export entry)
//! is funnelled into one of two types at the boundary: [`Post`] for what is
//! already canonical, [`SourceDocument`] for what is freshly read. Downstream
//! code never branches on where a record came from.

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One entry in the canonical post list.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub identifier: String,
    pub title: String,
    pub published_at: NaiveDateTime,
    /// Category display names. Membership is by name, not by tree node.
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Fields a catalog entry carried that this tool does not interpret.
    ///
    /// Kept verbatim while the entry is untouched, gone once a fresh document
    /// replaces it.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// A freshly read source record, before reconciliation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SourceDocument {
    /// Where the record came from (file path or export entry label), for warnings.
    pub origin: String,
    pub identifier: Option<String>,
    pub title: Option<String>,
    pub published_at: Option<NaiveDateTime>,
    /// Raw date text, kept for warnings when `published_at` failed to parse.
    pub raw_date: Option<String>,
    pub categories: Vec<String>,
    pub summary: Option<String>,
    pub draft: bool,
    /// Markup body. Opaque here; handed to the renderer untouched.
    pub body: String,
}

/// A category as it arrives from the source taxonomy.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct CategoryNode {
    #[serde(rename = "id")]
    pub source_id: String,
    #[serde(rename = "name")]
    pub display_name: String,
    #[serde(rename = "parent", default)]
    pub parent_source_id: Option<String>,
}

impl CategoryNode {
    pub fn new(source_id: &str, display_name: &str, parent: Option<&str>) -> Self {
        Self {
            source_id: source_id.to_string(),
            display_name: display_name.to_string(),
            parent_source_id: parent.map(str::to_string),
        }
    }
}

/// A historical path, already split into segments.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HistoricalPath {
    pub segments: Vec<String>,
}

impl HistoricalPath {
    pub fn new(segments: Vec<String>) -> Self {
        Self { segments }
    }

    /// Split a `/`-separated path, ignoring empty segments.
    pub fn parse(path: &str) -> Self {
        Self {
            segments: path
                .split('/')
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }
}

impl fmt::Display for HistoricalPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("/"))
    }
}

/// A resolved (or unresolved) legacy path.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LegacyMapping {
    pub historical_path: String,
    pub resolved_identifier: Option<String>,
}
