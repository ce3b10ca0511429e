//! Post catalog reconciliation and legacy permalink resolution for static blogs.
//!
//! A site build starts from three sources that disagree: the catalog the
//! previous run wrote, a directory of Markdown documents, and an export from
//! the blog engine the site migrated away from. This crate merges them into
//! one canonical post list, builds the category tree, paginates every
//! listing, and maps the old engine's permalinks onto the new identifiers.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │   slug.rs   │────▶│ reconcile.rs │────▶│ paginate.rs │
//! │ (normalize_ │     │  (canonical  │     │  (Paginator,│
//! │ identifier) │     │   post list) │     │   window)   │
//! └─────────────┘     └──────────────┘     └─────────────┘
//!        │                   │                    │
//!        ▼                   ▼                    ▼
//! ┌─────────────┐     ┌─────────────────────────────────┐
//! │ category.rs │────▶│             build/              │
//! │(CategoryTree│     │ manifest, catalog, documents,   │
//! │ path ids)   │     │ export, scan, plan, run_build   │
//! └─────────────┘     └─────────────────────────────────┘
//!                                    ▲
//!                     ┌──────────────┘
//!              ┌─────────────┐
//!              │  legacy/    │
//!              │ (path, script│
//!              │  strategy)  │
//!              └─────────────┘
//! ```
//!
//! The core modules are pure functions over in-memory values. All I/O lives
//! in [`build`].
//!
//! # Usage
//!
//! ```
//! use siteledger::{reconcile, window, LegacyResolver, HistoricalPath, PageMarker, Strategy};
//!
//! let resolver = LegacyResolver::new(["sample-post"]);
//! let resolution = resolver.resolve(&HistoricalPath::parse("2013/06/sample-post"));
//! assert_eq!(resolution.strategy(), Some(Strategy::Exact));
//!
//! assert_eq!(window(1, 2), vec![PageMarker::Page(1), PageMarker::Page(2)]);
//! assert!(reconcile(vec![], vec![]).posts.is_empty());
//! ```

pub mod build;
pub mod category;
pub mod contracts;
pub mod error;
pub mod legacy;
pub mod paginate;
pub mod reconcile;
pub mod slug;
pub mod testing;
pub mod types;

// Re-exports for public API
pub use category::{BuiltCategory, CategoryTree, DEFAULT_EXCLUDED_CATEGORY};
pub use error::{BuildError, BuildWarning, Result};
pub use legacy::{LegacyReport, LegacyResolver, Redirect, Resolution, Strategy};
pub use paginate::{window, Page, PageMarker, Paginator, DEFAULT_PAGE_SIZE};
pub use reconcile::{reconcile, ReconcileStats, Reconciled};
pub use slug::{normalize_identifier, MAX_IDENTIFIER_LEN};
pub use types::{CategoryNode, HistoricalPath, LegacyMapping, Post, SourceDocument};
