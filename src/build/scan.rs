// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Historical paths from the previous site's rendered output.
//!
//! `2013/06/sample-post.html` and `2013/06/sample-post/index.html` both mean
//! `2013/06/sample-post`. Pages that are not date-prefixed (archives, tag
//! pages) are still returned; resolution reports them as malformed.

use std::path::Path;

use tracing::debug;
use walkdir::WalkDir;

use crate::error::Result;
use crate::types::HistoricalPath;

/// Walk `root` and return one historical path per `*.html` file, sorted and
/// de-duplicated. A missing directory yields nothing.
pub fn scan_legacy_output(root: &Path) -> Result<Vec<HistoricalPath>> {
    if !root.exists() {
        debug!(dir = %root.display(), "no legacy output directory");
        return Ok(Vec::new());
    }
    let mut paths = Vec::new();
    for entry in WalkDir::new(root).follow_links(true) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let Ok(relative) = entry.path().strip_prefix(root) else {
            continue;
        };
        if let Some(path) = historical_path_of(relative) {
            paths.push(path);
        }
    }
    paths.sort();
    paths.dedup();
    debug!(dir = %root.display(), count = paths.len(), "legacy output scanned");
    Ok(paths)
}

/// Map a rendered file (relative to the output root) to its permalink.
pub fn historical_path_of(relative: &Path) -> Option<HistoricalPath> {
    if relative.extension().is_none_or(|ext| ext != "html") {
        return None;
    }
    let mut segments: Vec<String> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    let last = segments.pop()?;
    if last != "index.html" {
        segments.push(last.trim_end_matches(".html").to_string());
    }
    segments.retain(|s| !s.is_empty());
    (!segments.is_empty()).then(|| HistoricalPath::new(segments))
}
