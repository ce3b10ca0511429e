// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The build pipeline: read every source, compute every output, then write.
//!
//! ```text
//!   site.json ──▶ catalog.json ──┐ (malformed → abort)
//!   export.txt ──▶ entries ──────┤
//!   posts/*.md ──▶ documents ────┴─▶ reconcile ─▶ canonical posts
//!                                                    │
//!   categories.json ─▶ CategoryTree ─────────────────┼─▶ listing plan
//!   legacy output + export basenames ─▶ resolver ────┴─▶ redirects
//! ```
//!
//! Nothing touches the output directory (or the catalog) until every output
//! has been computed and serialized, so a failing run leaves the previous
//! build in place.

pub mod catalog;
pub mod document;
pub mod export;
pub mod manifest;
pub mod parallel;
pub mod plan;
pub mod scan;

use std::path::{Path, PathBuf};

#[cfg(feature = "parallel")]
use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};
use tracing::info;

use crate::category::CategoryTree;
use crate::error::{BuildWarning, Result};
use crate::legacy::{LegacyReport, LegacyResolver};
use crate::paginate::Paginator;
use crate::reconcile::{reconcile, ReconcileStats};
use crate::types::{CategoryNode, HistoricalPath, Post, SourceDocument};

pub use catalog::{load_catalog, write_atomic, write_catalog};
pub use document::{parse_date, parse_document};
pub use export::{load_export, parse_export, ExportEntry};
pub use manifest::{load_categories, SiteManifest, MANIFEST_FILE};
pub use parallel::{document_paths, load_documents, LoadedDocuments};
pub use plan::{plan_listings, render_redirects, ListingPlan};
pub use scan::scan_legacy_output;

/// Canonical list, copied into the output directory.
pub const CATALOG_OUTPUT: &str = "catalog.json";
/// Global and per-category pages.
pub const LISTINGS_OUTPUT: &str = "listings.json";
/// Redirect rules for the old permalinks.
pub const REDIRECTS_OUTPUT: &str = "_redirects";
/// Matched legacy paths with the strategy that matched them.
pub const LEGACY_MAP_OUTPUT: &str = "legacy-map.json";

#[derive(Debug, Clone, Copy, Default)]
pub struct BuildOptions {
    /// Compute everything, write nothing.
    pub dry_run: bool,
    /// Draw progress bars on stderr.
    pub progress: bool,
}

/// Everything one run computed.
#[derive(Debug, Clone)]
pub struct BuildReport {
    pub manifest: SiteManifest,
    pub posts: Vec<Post>,
    pub tree: CategoryTree,
    pub plan: ListingPlan,
    pub legacy: LegacyReport,
    pub stats: ReconcileStats,
    pub documents_loaded: usize,
    pub export_entries: usize,
    pub warnings: Vec<BuildWarning>,
    /// Files written. Empty on a dry run.
    pub written: Vec<PathBuf>,
}

/// Create a progress style for the main progress bars
#[cfg(feature = "parallel")]
fn create_progress_style() -> ProgressStyle {
    ProgressStyle::with_template(
        "{spinner:.cyan} {prefix:<12} [{bar:40.cyan/dim}] {pos}/{len} {msg}",
    )
    .unwrap_or_else(|_| ProgressStyle::default_bar())
    .progress_chars("━━╸")
}

/// Read every source under `input_dir` and compute all outputs in memory.
pub fn plan_build(input_dir: &Path, options: BuildOptions) -> Result<BuildReport> {
    let manifest = SiteManifest::load(input_dir)?;
    info!(input = %input_dir.display(), "building site");

    // 1. Persisted catalog. Malformed is fatal.
    let persisted = load_catalog(&manifest.catalog_path(input_dir))?;

    // 2. Legacy export
    let export_entries = match manifest.legacy_export_path(input_dir) {
        Some(path) => load_export(&path)?,
        None => Vec::new(),
    };

    // 3. Source documents
    let posts_dir = manifest.posts_path(input_dir);
    let paths = document_paths(&posts_dir)?;
    let loaded = load_with_progress(&posts_dir, &paths, options.progress);
    info!(
        documents = loaded.docs.len(),
        export_entries = export_entries.len(),
        catalog = persisted.len(),
        "sources loaded"
    );

    // 4. Reconcile: export first, so a document with the same identifier wins
    let mut historical: Vec<HistoricalPath> = export_entries
        .iter()
        .filter_map(ExportEntry::historical_path)
        .collect();
    let export_count = export_entries.len();
    let documents_loaded = loaded.docs.len();
    let fresh: Vec<SourceDocument> = export_entries
        .into_iter()
        .map(|entry| entry.doc)
        .chain(loaded.docs)
        .collect();
    let reconciled = reconcile(persisted, fresh);
    let posts = reconciled.posts;

    // 5. Categories
    let nodes = match manifest.categories_path(input_dir) {
        Some(path) => load_categories(&path)?,
        None => categories_from_posts(&posts),
    };
    let tree = CategoryTree::build_with_excluded(nodes, &manifest.excluded_category);

    // 6. Listings
    let paginator = Paginator::new(manifest.page_size);
    let plan = plan_listings(&posts, &tree, paginator);

    // 7. Legacy permalinks
    if let Some(root) = manifest.legacy_output_path(input_dir) {
        historical.extend(scan_legacy_output(&root)?);
    }
    historical.sort();
    historical.dedup();
    let resolver = LegacyResolver::new(posts.iter().map(|p| p.identifier.as_str()));
    let legacy = resolver.resolve_all(&historical);

    let mut warnings = loaded.warnings;
    warnings.extend(reconciled.warnings);
    warnings.extend(tree.warnings().iter().cloned());
    warnings.extend(legacy.warnings.iter().cloned());

    Ok(BuildReport {
        manifest,
        posts,
        tree,
        plan,
        legacy,
        stats: reconciled.stats,
        documents_loaded,
        export_entries: export_count,
        warnings,
        written: Vec::new(),
    })
}

/// Plan the build, then write catalog, listings and redirects.
///
/// The catalog is written both to the manifest's catalog path (so the next
/// run starts from it) and into `output_dir`.
pub fn run_build(input_dir: &Path, output_dir: &Path, options: BuildOptions) -> Result<BuildReport> {
    let mut report = plan_build(input_dir, options)?;

    // Serialize everything before the first write
    let catalog_json = serde_json::to_string_pretty(&report.posts)?;
    let listings_json = serde_json::to_string_pretty(&report.plan)?;
    let redirects = render_redirects(&report.legacy.redirects, &report.manifest.post_url_prefix);
    let legacy_json = serde_json::to_string_pretty(&report.legacy.redirects)?;

    if options.dry_run {
        info!("dry run, nothing written");
        return Ok(report);
    }

    let outputs: [(PathBuf, &[u8]); 5] = [
        (report.manifest.catalog_path(input_dir), catalog_json.as_bytes()),
        (output_dir.join(CATALOG_OUTPUT), catalog_json.as_bytes()),
        (output_dir.join(LISTINGS_OUTPUT), listings_json.as_bytes()),
        (output_dir.join(REDIRECTS_OUTPUT), redirects.as_bytes()),
        (output_dir.join(LEGACY_MAP_OUTPUT), legacy_json.as_bytes()),
    ];
    for (path, bytes) in outputs {
        write_atomic(&path, bytes)?;
        report.written.push(path);
    }

    info!(
        posts = report.posts.len(),
        categories = report.plan.categories.len(),
        redirects = report.legacy.redirects.len(),
        warnings = report.warnings.len(),
        "build complete"
    );
    Ok(report)
}

/// Without a taxonomy file every distinct post category is a root.
pub fn categories_from_posts(posts: &[Post]) -> Vec<CategoryNode> {
    let mut names: Vec<String> = posts
        .iter()
        .flat_map(|p| p.categories.iter().cloned())
        .collect();
    document::dedup_in_order(&mut names);
    names
        .iter()
        .map(|name| CategoryNode::new(name, name, None))
        .collect()
}

#[cfg(feature = "parallel")]
fn load_with_progress(posts_dir: &Path, paths: &[PathBuf], progress: bool) -> LoadedDocuments {
    let multi = MultiProgress::with_draw_target(if progress {
        ProgressDrawTarget::stderr()
    } else {
        ProgressDrawTarget::hidden()
    });
    let load_pb = multi.add(ProgressBar::new(paths.len() as u64));
    load_pb.set_style(create_progress_style());
    load_pb.set_prefix("Loading");
    load_pb.set_message("documents...");

    let loaded = parallel::load_documents_with_progress(posts_dir, paths, &load_pb);

    load_pb.finish_with_message(format!("loaded {} documents", loaded.docs.len()));
    loaded
}

#[cfg(not(feature = "parallel"))]
fn load_with_progress(posts_dir: &Path, paths: &[PathBuf], _progress: bool) -> LoadedDocuments {
    parallel::load_documents_with_progress(posts_dir, paths)
}
