// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Parallel source document loading.
//!
//! Reading and parsing front matter is per-file and independent, so with the
//! `parallel` feature the files go through `par_iter()`. Results are collected
//! in path order, which keeps reconciliation input (and so tie-breaking among
//! posts with equal dates) identical across runs and thread counts.
//!
//! An unreadable file is a warning, never a failed build.

use std::fs;
use std::path::{Path, PathBuf};

#[cfg(feature = "parallel")]
use indicatif::ProgressBar;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
#[cfg(feature = "parallel")]
use std::sync::atomic::{AtomicUsize, Ordering};

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::error::{BuildWarning, Result};
use crate::types::SourceDocument;

use super::document::parse_document;

/// Extension of source documents.
pub const DOCUMENT_EXTENSION: &str = "md";

/// Documents that parsed, plus one warning per file that did not.
#[derive(Debug, Default)]
pub struct LoadedDocuments {
    pub docs: Vec<SourceDocument>,
    pub warnings: Vec<BuildWarning>,
}

/// Every `*.md` file under `posts_dir`, sorted. A missing directory has none.
pub fn document_paths(posts_dir: &Path) -> Result<Vec<PathBuf>> {
    if !posts_dir.exists() {
        debug!(dir = %posts_dir.display(), "no posts directory");
        return Ok(Vec::new());
    }
    let mut paths = Vec::new();
    for entry in WalkDir::new(posts_dir).follow_links(true) {
        let entry = entry?;
        let path = entry.path();
        if entry.file_type().is_file()
            && path.extension().is_some_and(|ext| ext == DOCUMENT_EXTENSION)
        {
            paths.push(path.to_path_buf());
        }
    }
    paths.sort();
    Ok(paths)
}

/// Origin label: the path relative to the posts directory.
fn origin_of(posts_dir: &Path, path: &Path) -> String {
    path.strip_prefix(posts_dir)
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/")
}

fn load_one(posts_dir: &Path, path: &Path) -> std::result::Result<SourceDocument, BuildWarning> {
    let origin = origin_of(posts_dir, path);
    let content = fs::read_to_string(path).map_err(|e| BuildWarning::UnreadableDocument {
        origin: origin.clone(),
        message: e.to_string(),
    })?;
    parse_document(&origin, &content)
}

fn split_results(
    results: Vec<std::result::Result<SourceDocument, BuildWarning>>,
) -> LoadedDocuments {
    let mut loaded = LoadedDocuments::default();
    for result in results {
        match result {
            Ok(doc) => loaded.docs.push(doc),
            Err(warning) => {
                warn!("{}", warning);
                loaded.warnings.push(warning);
            }
        }
    }
    loaded
}

/// Load and parse `paths` (as returned by [`document_paths`]).
pub fn load_documents(posts_dir: &Path, paths: &[PathBuf]) -> LoadedDocuments {
    #[cfg(feature = "parallel")]
    let results: Vec<_> = paths.par_iter().map(|p| load_one(posts_dir, p)).collect();
    #[cfg(not(feature = "parallel"))]
    let results: Vec<_> = paths.iter().map(|p| load_one(posts_dir, p)).collect();

    split_results(results)
}

/// Load documents in parallel with progress reporting.
#[cfg(feature = "parallel")]
pub fn load_documents_with_progress(
    posts_dir: &Path,
    paths: &[PathBuf],
    progress: &ProgressBar,
) -> LoadedDocuments {
    let counter = AtomicUsize::new(0);
    let total = paths.len();

    let results: Vec<_> = paths
        .par_iter()
        .map(|path| {
            let result = load_one(posts_dir, path);

            let count = counter.fetch_add(1, Ordering::Relaxed) + 1;
            progress.set_position(count as u64);
            if count % 10 == 0 || count == total {
                progress.set_message(format!("{}/{}", count, total));
            }

            result
        })
        .collect();

    split_results(results)
}

/// Non-parallel fallback (no progress).
#[cfg(not(feature = "parallel"))]
pub fn load_documents_with_progress(posts_dir: &Path, paths: &[PathBuf]) -> LoadedDocuments {
    load_documents(posts_dir, paths)
}
