// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The persisted catalog: the canonical list from the previous run.
//!
//! A missing file is an empty catalog (first build). A file that exists but
//! cannot be read or parsed stops the build: starting from empty would
//! silently drop every post the catalog knew about.
//!
//! Writes go to a sibling temp file that is then renamed over the target, so
//! a crash mid-write leaves the old catalog intact.

use std::fs;
use std::io;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{BuildError, Result};
use crate::types::Post;

/// Load the catalog at `path`. Missing file → empty list.
pub fn load_catalog(path: &Path) -> Result<Vec<Post>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            info!(path = %path.display(), "no catalog yet, starting empty");
            return Ok(Vec::new());
        }
        Err(e) => return Err(BuildError::catalog(path, e)),
    };
    parse_catalog(&content).map_err(|e| BuildError::catalog(path, e))
}

/// Parse catalog JSON (an array of posts).
pub fn parse_catalog(json: &str) -> std::result::Result<Vec<Post>, serde_json::Error> {
    let posts: Vec<Post> = serde_json::from_str(json)?;
    debug!(count = posts.len(), "catalog parsed");
    Ok(posts)
}

/// Serialize and atomically replace the catalog at `path`.
pub fn write_catalog(path: &Path, posts: &[Post]) -> Result<()> {
    let json = serde_json::to_string_pretty(posts)?;
    write_atomic(path, json.as_bytes())
}

/// Write `bytes` to `path` via a temp file in the same directory.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let file_name = path
        .file_name()
        .ok_or_else(|| BuildError::Io(format!("not a file path: {}", path.display())))?;
    let tmp = path.with_file_name(format!(".{}.tmp", file_name.to_string_lossy()));
    fs::write(&tmp, bytes)
        .map_err(|e| BuildError::Io(format!("Failed to write {}: {e}", tmp.display())))?;
    fs::rename(&tmp, path).map_err(|e| {
        let _ = fs::remove_file(&tmp);
        BuildError::Io(format!("Failed to replace {}: {e}", path.display()))
    })?;
    debug!(path = %path.display(), bytes = bytes.len(), "wrote");
    Ok(())
}
