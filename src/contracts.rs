// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the pipeline's invariants.
//!
//! Debug-mode assertions that check what each stage promises its consumers.
//! They compile to nothing in release builds.
//!
//! | Contract                        | Producer                      |
//! |---------------------------------|-------------------------------|
//! | `check_canonical_order`         | `reconcile::reconcile`        |
//! | `check_unique_identifiers`      | `reconcile::reconcile`        |
//! | `check_unique_path_identifiers` | `category::CategoryTree::build` |
//! | `check_window_well_formed`      | `paginate::window`            |
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! Listings, redirects and the persisted catalog all assume these hold.

#[cfg(debug_assertions)]
use std::collections::HashSet;

use crate::paginate::PageMarker;
use crate::types::Post;

/// Posts are ordered by `published_at`, newest first.
#[inline]
pub fn check_canonical_order(posts: &[Post]) {
    #[cfg(debug_assertions)]
    for pair in posts.windows(2) {
        debug_assert!(
            pair[0].published_at >= pair[1].published_at,
            "INVARIANT VIOLATED: canonical list out of order: {} ({}) before {} ({})",
            pair[0].identifier,
            pair[0].published_at,
            pair[1].identifier,
            pair[1].published_at
        );
    }
    #[cfg(not(debug_assertions))]
    let _ = posts;
}

/// No identifier appears twice in the canonical list.
#[inline]
pub fn check_unique_identifiers(posts: &[Post]) {
    #[cfg(debug_assertions)]
    {
        let mut seen = HashSet::with_capacity(posts.len());
        for post in posts {
            debug_assert!(
                !post.identifier.is_empty(),
                "INVARIANT VIOLATED: empty identifier for post {:?}",
                post.title
            );
            debug_assert!(
                seen.insert(post.identifier.as_str()),
                "INVARIANT VIOLATED: duplicate identifier {}",
                post.identifier
            );
        }
    }
    #[cfg(not(debug_assertions))]
    let _ = posts;
}

/// Path identifiers are pairwise distinct.
#[inline]
pub fn check_unique_path_identifiers<'a>(paths: impl Iterator<Item = &'a str>) {
    #[cfg(debug_assertions)]
    {
        let mut seen = HashSet::new();
        for path in paths {
            debug_assert!(
                seen.insert(path),
                "INVARIANT VIOLATED: duplicate category path identifier {}",
                path
            );
        }
    }
    #[cfg(not(debug_assertions))]
    let _ = paths;
}

/// A window starts at 1, ends at `total`, is strictly increasing, and never
/// has two ellipses in a row.
#[inline]
pub fn check_window_well_formed(window: &[PageMarker], total: usize) {
    #[cfg(debug_assertions)]
    {
        let numbers: Vec<usize> = window.iter().filter_map(PageMarker::page).collect();
        debug_assert_eq!(numbers.first(), Some(&1), "INVARIANT VIOLATED: window must start at 1");
        debug_assert_eq!(
            numbers.last(),
            Some(&total.max(1)),
            "INVARIANT VIOLATED: window must end at the last page"
        );
        debug_assert!(
            numbers.windows(2).all(|w| w[0] < w[1]),
            "INVARIANT VIOLATED: window not strictly increasing: {:?}",
            numbers
        );
        debug_assert!(
            window
                .windows(2)
                .all(|w| !(w[0] == PageMarker::Ellipsis && w[1] == PageMarker::Ellipsis)),
            "INVARIANT VIOLATED: consecutive ellipses in window"
        );
    }
    #[cfg(not(debug_assertions))]
    let _ = (window, total);
}
